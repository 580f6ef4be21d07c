
const PRODUCTION_CONTACT_ENDPOINT: &str =
    "https://script.google.com/macros/s/AKfycby_sbDSaXX5Mqyu0KpnxKndmOcu6k8JREYxiB7MRS67YO0E24KHOsHUEoN4bpsUXqpB/exec";

#[cfg(debug_assertions)]
pub fn get_contact_endpoint() -> &'static str {
    // Point local builds at a mock with CONTACT_ENDPOINT=http://localhost:3001/contact trunk serve
    option_env!("CONTACT_ENDPOINT").unwrap_or(PRODUCTION_CONTACT_ENDPOINT)
}

#[cfg(not(debug_assertions))]
pub fn get_contact_endpoint() -> &'static str {
    PRODUCTION_CONTACT_ENDPOINT
}

/// How long the validation failure label stays on the submit button.
pub const VALIDATION_FAILED_RESET_MS: u32 = 3_000;
/// How long the success label stays before the button is re-enabled.
pub const MESSAGE_SENT_RESET_MS: u32 = 4_000;

pub const STATUS_TICK_MS: u32 = 4_500;
pub const STATUS_FADE_MS: u32 = 200;

/// Sections tracked for the active nav link, in page order.
pub const SECTION_IDS: [&str; 6] = ["hero", "mission", "vision", "team", "about", "contact"];
