//! WhatsApp Message and Link Helpers

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::error::AdminError;

/// Placeholder replaced with the customer's name
pub const NAME_PLACEHOLDER: &str = "{nome}";

pub const WEB_FALLBACK_PROMPT: &str = "WhatsApp Desktop não encontrado.\n\nDeseja abrir o WhatsApp Web?";

/// Characters `encodeURIComponent` leaves as-is
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const MIN_PHONE_DIGITS: usize = 10;

pub fn encode_uri_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// Fill the template (or `default_message` when there is none) with the customer name.
pub fn render_message(template: Option<&str>, customer_name: Option<&str>, default_message: &str) -> String {
    let template = template
        .filter(|t| !t.trim().is_empty())
        .unwrap_or(default_message);
    let name = customer_name.map(str::trim).unwrap_or("");
    template.replace(NAME_PLACEHOLDER, name)
}

/// Digits only, with the country code prefixed when missing.
pub fn normalize_phone(raw: &str, country_code: &str) -> Result<String, AdminError> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.len() < MIN_PHONE_DIGITS {
        return Err(AdminError::InvalidPhone(raw.to_string()));
    }
    if digits.starts_with(country_code) {
        Ok(digits)
    } else {
        Ok(format!("{}{}", country_code, digits))
    }
}

pub fn deep_link(phone: &str, text: &str) -> String {
    format!("whatsapp://send?phone={}&text={}", phone, encode_uri_component(text))
}

pub fn web_link(phone: &str, text: &str) -> String {
    format!("https://web.whatsapp.com/send?phone={}&text={}", phone, encode_uri_component(text))
}
