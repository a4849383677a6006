//! Cart Payloads

use serde::{Deserialize, Serialize};

/// Recovery contact channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Email,
    Whatsapp,
}

impl Channel {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "email" => Some(Channel::Email),
            "whatsapp" => Some(Channel::Whatsapp),
            _ => None,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RecoveryToggle {
    pub cart_id: u64,
    #[serde(rename = "type")]
    pub channel: Channel,
    pub status: bool,
}

#[derive(Debug, Serialize)]
pub struct CartStatusUpdate<'a> {
    pub cart_id: u64,
    pub status: &'a str,
}
