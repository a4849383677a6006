//! Lead Status Controller
//!
//! WhatsApp-contacted flag and status dropdown for leads.

use std::rc::Rc;

use leptos::task::spawn_local;

use crate::api::{self, AdminApi, LeadWhatsAppToggle};
use crate::board::{ToggleKey, ToggleView};
use crate::console;
use crate::context::{AdminContext, BrowserContext, Synced};
use crate::error::AdminError;
use crate::page::Page;
use crate::status_select::{self, SelectEntity};

pub const LEAD_STATUS_SELECTOR: &str = "select.lead-status-select";

const WHATSAPP_TOGGLE_FAILED: &str = "Erro ao atualizar status do WhatsApp";

pub async fn toggle_lead_whatsapp<A, P, V>(
    ctx: &AdminContext<A, P, V>,
    lead_id: u64,
    new_status: bool,
) -> Result<Synced, AdminError>
where
    A: AdminApi,
    P: Page,
    V: ToggleView,
{
    let offset = ctx.page.scroll_y();
    let payload = LeadWhatsAppToggle { lead_id, status: new_status };

    match api::send(&ctx.api, &ctx.config.endpoints.toggle_lead_whatsapp, &payload).await {
        Ok(_) => Ok(ctx.apply_toggle(ToggleKey::lead(lead_id), new_status, Some(offset))),
        Err(err) => {
            if err.is_transport() {
                console::error(&format!("[LEAD] WhatsApp toggle for lead {} failed: {}", lead_id, err));
            }
            ctx.page.alert(&err.alert_text(WHATSAPP_TOGGLE_FAILED));
            Err(err)
        }
    }
}

pub fn spawn_toggle_lead_whatsapp(ctx: Rc<BrowserContext>, lead_id: u64, new_status: bool) {
    spawn_local(async move {
        let _ = toggle_lead_whatsapp(&*ctx, lead_id, new_status).await;
    });
}

pub fn bind_status_selects() -> Result<usize, AdminError> {
    status_select::bind_all(LEAD_STATUS_SELECTOR, SelectEntity::Lead)
}
