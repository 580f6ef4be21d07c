use gloo_timers::future::TimeoutFuture;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::contact::intake::{ContactIntake, Effect};
use crate::contact::transport::transmit;
use crate::contact::validation::Field;

pub enum ContactFormMsg {
    Edit(Field, String),
    Submit,
    Sent,
    SendFailed,
    Revert(u32),
}

pub struct ContactForm {
    intake: ContactIntake,
}

impl ContactForm {
    fn run(&self, ctx: &Context<Self>, effect: Effect) {
        match effect {
            Effect::Transmit(payload) => {
                ctx.link().send_future(async move {
                    match transmit(config::get_contact_endpoint(), &payload).await {
                        Ok(()) => ContactFormMsg::Sent,
                        Err(e) => {
                            log::error!("Form submission error: {}", e);
                            ContactFormMsg::SendFailed
                        }
                    }
                });
            }
            Effect::RevertAfter { delay_ms, attempt } => {
                ctx.link().send_future(async move {
                    TimeoutFuture::new(delay_ms).await;
                    ContactFormMsg::Revert(attempt)
                });
            }
        }
    }

    fn render_field(&self, ctx: &Context<Self>, field: Field, label: &str, placeholder: &str) -> Html {
        let error = self.intake.errors().get(field);
        let value = self.intake.value(field).to_string();
        let input_class = classes!("form-input", error.is_some().then_some("has-error"));

        let control = match field {
            Field::Message => html! {
                <textarea
                    id={field.id()}
                    name={field.id()}
                    class={input_class}
                    rows="5"
                    placeholder={placeholder.to_string()}
                    value={value}
                    oninput={ctx.link().callback(move |e: InputEvent| {
                        let input: HtmlTextAreaElement = e.target_unchecked_into();
                        ContactFormMsg::Edit(field, input.value())
                    })}
                />
            },
            _ => html! {
                <input
                    id={field.id()}
                    name={field.id()}
                    type={if field == Field::Email { "email" } else { "text" }}
                    class={input_class}
                    placeholder={placeholder.to_string()}
                    value={value}
                    oninput={ctx.link().callback(move |e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        ContactFormMsg::Edit(field, input.value())
                    })}
                />
            },
        };

        html! {
            <div class="form-group">
                <label for={field.id()}>{label}</label>
                { control }
                <span id={field.error_id()} class="field-error" aria-live="polite">
                    { error.map(|code| code.as_str()).unwrap_or_default() }
                </span>
            </div>
        }
    }
}

impl Component for ContactForm {
    type Message = ContactFormMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            intake: ContactIntake::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ContactFormMsg::Edit(field, value) => {
                self.intake.edit(field, value);
                true
            }
            ContactFormMsg::Submit => {
                let effect = self.intake.submit();
                self.run(ctx, effect);
                true
            }
            ContactFormMsg::Sent => {
                log::info!("Contact message transmitted");
                let effect = self.intake.transmission_succeeded();
                self.run(ctx, effect);
                true
            }
            ContactFormMsg::SendFailed => {
                self.intake.transmission_failed();
                true
            }
            ContactFormMsg::Revert(attempt) => self.intake.revert(attempt),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            ContactFormMsg::Submit
        });
        let control = self.intake.control();

        html! {
            <form id="contact-form" class="contact-form" novalidate={true} {onsubmit}>
                <style>
                    {r#"
                        .contact-form .form-group {
                            display: flex;
                            flex-direction: column;
                            margin-bottom: 1.25rem;
                        }
                        .contact-form label {
                            font-size: 0.75rem;
                            letter-spacing: 0.15em;
                            color: rgba(255, 255, 255, 0.6);
                            margin-bottom: 0.4rem;
                        }
                        .contact-form .form-input {
                            background: rgba(10, 14, 20, 0.8);
                            border: 1px solid rgba(0, 255, 170, 0.2);
                            color: #e6f1ff;
                            padding: 0.75rem 1rem;
                            font-family: inherit;
                        }
                        .contact-form .form-input.has-error {
                            border-color: #ff4d4f;
                        }
                        .contact-form .field-error {
                            min-height: 1rem;
                            margin-top: 0.3rem;
                            font-size: 0.7rem;
                            letter-spacing: 0.1em;
                            color: #ff4d4f;
                        }
                        .contact-form #submit-btn:disabled {
                            opacity: 0.6;
                            cursor: not-allowed;
                        }
                    "#}
                </style>
                { self.render_field(ctx, Field::Name, "NAME", "Full name") }
                { self.render_field(ctx, Field::Email, "EMAIL", "you@organisation.com") }
                { self.render_field(ctx, Field::Org, "ORGANISATION", "Agency or company") }
                { self.render_field(ctx, Field::Message, "MESSAGE", "Describe your requirement (10 words minimum)") }
                <button
                    id="submit-btn"
                    type="submit"
                    class="submit-btn"
                    disabled={control.disabled()}
                >
                    { control.label() }
                </button>
            </form>
        }
    }
}
