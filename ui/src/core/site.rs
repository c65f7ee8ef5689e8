//! Fixed company facts rendered across sections.

pub const FOUNDED_YEAR: u64 = 1997;
pub const HAPPY_CLIENTS: u64 = 500;
pub const PROJECTS_DONE: u64 = 1000;

pub const PHONE_NUMBERS: [&str; 2] = ["+218 91 054 5650", "+218 91 321 6399"];
pub const TAX_NUMBER: &str = "2550";

pub const CREDIT_LINE: &str = "Edited by : Access LY || شركة آكسس";
pub const CREDIT_PHONES: &str = "+218910772495 // +218920987211";

/// `tel:` href for a display-formatted phone number.
pub fn phone_href(display: &str) -> String {
    let digits: String = display
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();
    format!("tel:{digits}")
}

/// WhatsApp chat link for a display-formatted phone number (`wa.me` takes
/// digits only, without the leading `+`).
pub fn whatsapp_href(display: &str) -> String {
    let digits: String = display.chars().filter(char::is_ascii_digit).collect();
    format!("https://wa.me/{digits}")
}

/// Split a company name into its leading word and the remainder, for the
/// two-tone hero title. A single-word name yields an empty remainder.
pub fn split_title(name: &str) -> (&str, &str) {
    match name.split_once(' ') {
        Some((first, rest)) => (first, rest),
        None => (name, ""),
    }
}
