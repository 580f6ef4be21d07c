use crate::config;
use crate::contact::validation::{validate, Field, SubmissionPayload, ValidationResult};

pub const IDLE_LABEL: &str = "SEND TRANSMISSION";
pub const TRANSMITTING_LABEL: &str = "TRANSMITTING...";
pub const SENT_LABEL: &str = "MESSAGE SENT ✓";
pub const VALIDATION_FAILED_LABEL: &str = "VALIDATION FAILED — CHECK FIELDS";
pub const TRANSMISSION_FAILED_LABEL: &str = "TRANSMISSION FAILED — RETRY";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureCause {
    Validation,
    Transmission,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitControlState {
    #[default]
    Idle,
    Transmitting,
    Success,
    Failed(FailureCause),
}

impl SubmitControlState {
    pub fn label(self) -> &'static str {
        match self {
            SubmitControlState::Idle => IDLE_LABEL,
            SubmitControlState::Transmitting => TRANSMITTING_LABEL,
            SubmitControlState::Success => SENT_LABEL,
            SubmitControlState::Failed(FailureCause::Validation) => VALIDATION_FAILED_LABEL,
            SubmitControlState::Failed(FailureCause::Transmission) => TRANSMISSION_FAILED_LABEL,
        }
    }

    pub fn disabled(self) -> bool {
        matches!(self, SubmitControlState::Transmitting | SubmitControlState::Success)
    }
}

/// Work the view layer has to carry out after a state change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Transmit(SubmissionPayload),
    /// Send `revert(attempt)` back after `delay_ms`.
    RevertAfter { delay_ms: u32, attempt: u32 },
}

/// Contact form state: raw field values, current diagnostics and the submit
/// control. Holds no DOM handles so it can be driven from tests.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactIntake {
    name: String,
    email: String,
    org: String,
    message: String,
    errors: ValidationResult,
    control: SubmitControlState,
    attempt: u32,
}

impl ContactIntake {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Org => &self.org,
            Field::Message => &self.message,
        }
    }

    pub fn errors(&self) -> &ValidationResult {
        &self.errors
    }

    pub fn control(&self) -> SubmitControlState {
        self.control
    }

    /// Stores a new value. An edit clears that field's diagnostic, and only
    /// that one; fields without a diagnostic are unaffected.
    pub fn edit(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Org => self.org = value,
            Field::Message => self.message = value,
        }
        self.errors.clear(field);
    }

    pub fn submit(&mut self) -> Effect {
        self.attempt = self.attempt.wrapping_add(1);
        self.errors = ValidationResult::default();

        let payload = SubmissionPayload::capture(&self.name, &self.email, &self.org, &self.message);
        let errors = validate(&payload);
        if errors.is_empty() {
            self.control = SubmitControlState::Transmitting;
            Effect::Transmit(payload)
        } else {
            for (field, code) in errors.iter() {
                log::info!("contact field {} rejected: {}", field.id(), code);
            }
            self.errors = errors;
            self.control = SubmitControlState::Failed(FailureCause::Validation);
            Effect::RevertAfter {
                delay_ms: config::VALIDATION_FAILED_RESET_MS,
                attempt: self.attempt,
            }
        }
    }

    pub fn transmission_succeeded(&mut self) -> Effect {
        self.name.clear();
        self.email.clear();
        self.org.clear();
        self.message.clear();
        self.control = SubmitControlState::Success;
        Effect::RevertAfter {
            delay_ms: config::MESSAGE_SENT_RESET_MS,
            attempt: self.attempt,
        }
    }

    pub fn transmission_failed(&mut self) {
        self.control = SubmitControlState::Failed(FailureCause::Transmission);
    }

    /// Returns the control to idle unless a newer attempt started since the
    /// timer was scheduled. Returns whether anything changed.
    pub fn revert(&mut self, attempt: u32) -> bool {
        if attempt != self.attempt {
            return false;
        }
        match self.control {
            SubmitControlState::Success | SubmitControlState::Failed(FailureCause::Validation) => {
                self.control = SubmitControlState::Idle;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::validation::DiagnosticCode;

    fn filled() -> ContactIntake {
        let mut intake = ContactIntake::default();
        intake.edit(Field::Name, "Grace Hopper".into());
        intake.edit(Field::Email, "grace@navy.example".into());
        intake.edit(Field::Org, "Fleet Ops".into());
        intake.edit(
            Field::Message,
            "Requesting a briefing on your counter drone systems for our coastal sites".into(),
        );
        intake
    }

    #[test]
    fn starts_idle_and_enabled() {
        let intake = ContactIntake::default();
        assert_eq!(intake.control(), SubmitControlState::Idle);
        assert_eq!(intake.control().label(), IDLE_LABEL);
        assert!(!intake.control().disabled());
    }

    #[test]
    fn invalid_submit_never_transmits() {
        let mut intake = filled();
        intake.edit(Field::Org, String::new());

        let effect = intake.submit();
        assert_eq!(
            effect,
            Effect::RevertAfter { delay_ms: config::VALIDATION_FAILED_RESET_MS, attempt: 1 }
        );
        assert_eq!(intake.errors().len(), 1);
        assert_eq!(intake.errors().get(Field::Org), Some(DiagnosticCode::RequiredMissing));
        assert_eq!(intake.control(), SubmitControlState::Failed(FailureCause::Validation));
        assert!(!intake.control().disabled());
    }

    #[test]
    fn validation_failure_label_reverts() {
        let mut intake = ContactIntake::default();
        let Effect::RevertAfter { attempt, .. } = intake.submit() else {
            panic!("empty form must not transmit");
        };
        assert!(intake.revert(attempt));
        assert_eq!(intake.control(), SubmitControlState::Idle);
        // errors stay until the user edits
        assert_eq!(intake.errors().len(), 4);
    }

    #[test]
    fn editing_clears_only_that_field() {
        let mut intake = ContactIntake::default();
        intake.edit(Field::Email, "not-an-email".into());
        intake.submit();
        assert_eq!(intake.errors().len(), 4);

        intake.edit(Field::Name, "G".into());
        assert_eq!(intake.errors().get(Field::Name), None);
        assert_eq!(intake.errors().get(Field::Email), Some(DiagnosticCode::InvalidEmail));
        assert_eq!(intake.errors().get(Field::Org), Some(DiagnosticCode::RequiredMissing));
        assert_eq!(intake.errors().get(Field::Message), Some(DiagnosticCode::RequiredMissing));
        assert_eq!(intake.errors().len(), 3);
    }

    #[test]
    fn later_edits_of_a_cleared_field_leave_others_alone() {
        let mut intake = ContactIntake::default();
        intake.submit();
        assert_eq!(intake.errors().len(), 4);

        intake.edit(Field::Org, "F".into());
        intake.edit(Field::Org, "Fl".into());
        intake.edit(Field::Org, String::new());

        assert_eq!(intake.errors().get(Field::Org), None);
        assert_eq!(intake.errors().len(), 3);
        for field in [Field::Name, Field::Email, Field::Message] {
            assert_eq!(intake.errors().get(field), Some(DiagnosticCode::RequiredMissing));
        }
    }

    #[test]
    fn resubmitting_replaces_previous_diagnostics() {
        let mut intake = filled();
        intake.edit(Field::Email, "bad".into());
        intake.submit();
        assert_eq!(intake.errors().get(Field::Email), Some(DiagnosticCode::InvalidEmail));

        intake.edit(Field::Email, "grace@navy.example".into());
        intake.edit(Field::Message, "short".into());
        intake.submit();
        assert_eq!(intake.errors().get(Field::Email), None);
        assert_eq!(intake.errors().get(Field::Message), Some(DiagnosticCode::MessageTooShort));
        assert_eq!(intake.errors().len(), 1);
    }

    #[test]
    fn valid_submit_transmits_trimmed_payload() {
        let mut intake = filled();
        intake.edit(Field::Name, "  Grace Hopper ".into());

        let Effect::Transmit(payload) = intake.submit() else {
            panic!("valid form must transmit");
        };
        assert_eq!(payload.name, "Grace Hopper");
        assert_eq!(intake.control(), SubmitControlState::Transmitting);
        assert_eq!(intake.control().label(), TRANSMITTING_LABEL);
        assert!(intake.control().disabled());
    }

    #[test]
    fn success_clears_fields_and_reverts_after_delay() {
        let mut intake = filled();
        intake.submit();

        let effect = intake.transmission_succeeded();
        assert_eq!(
            effect,
            Effect::RevertAfter { delay_ms: config::MESSAGE_SENT_RESET_MS, attempt: 1 }
        );
        for field in Field::ALL {
            assert_eq!(intake.value(field), "");
        }
        assert_eq!(intake.control().label(), SENT_LABEL);
        assert!(intake.control().disabled());

        assert!(intake.revert(1));
        assert_eq!(intake.control().label(), IDLE_LABEL);
        assert!(!intake.control().disabled());
    }

    #[test]
    fn failure_keeps_fields_and_stays_enabled() {
        let mut intake = filled();
        intake.submit();
        intake.transmission_failed();

        assert_eq!(intake.control().label(), TRANSMISSION_FAILED_LABEL);
        assert!(!intake.control().disabled());
        assert_eq!(intake.value(Field::Name), "Grace Hopper");
        // no timer is scheduled for a failed transmission, and a stray one does nothing
        assert!(!intake.revert(1));

        assert!(matches!(intake.submit(), Effect::Transmit(_)));
    }

    #[test]
    fn stale_revert_does_not_touch_newer_attempt() {
        let mut intake = filled();
        intake.edit(Field::Message, "too short".into());
        let Effect::RevertAfter { attempt: stale, .. } = intake.submit() else {
            panic!("short message must not transmit");
        };

        intake.edit(
            Field::Message,
            "Now the message has comfortably more than the ten words it needs".into(),
        );
        assert!(matches!(intake.submit(), Effect::Transmit(_)));

        assert!(!intake.revert(stale));
        assert_eq!(intake.control(), SubmitControlState::Transmitting);
    }

    #[test]
    fn double_submit_issues_two_transmissions() {
        let mut intake = filled();
        assert!(matches!(intake.submit(), Effect::Transmit(_)));
        assert!(matches!(intake.submit(), Effect::Transmit(_)));
    }
}
