//! Lead Payloads

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct LeadWhatsAppToggle {
    pub lead_id: u64,
    pub status: bool,
}

#[derive(Debug, Serialize)]
pub struct LeadStatusUpdate<'a> {
    pub lead_id: u64,
    pub status: &'a str,
}
