//! Cart Recovery Controller
//!
//! Recovery flags per channel, the WhatsApp hand-off, and the cart status dropdown.

use std::rc::Rc;

use leptos::task::spawn_local;

use crate::api::{self, AdminApi, Channel, RecoveryToggle};
use crate::board::{ToggleKey, ToggleState, ToggleView};
use crate::console;
use crate::context::{AdminContext, BrowserContext, Synced};
use crate::error::AdminError;
use crate::page::Page;
use crate::status_select::{self, SelectEntity};
use crate::whatsapp;

pub const CART_STATUS_SELECTOR: &str = "select.cart-status-select";

const RECOVERY_FAILED: &str = "Erro ao atualizar recuperação do carrinho";
const INVALID_PHONE: &str = "Número de WhatsApp inválido";

/// Everything needed to message one cart's customer
#[derive(Debug, Clone, PartialEq)]
pub struct WhatsAppTarget {
    pub cart_id: u64,
    pub phone: String,
    pub customer_name: Option<String>,
    pub message_template: Option<String>,
}

/// Flip the recovery flag of `channel` for a cart.
///
/// The scroll offset is taken before the request so a reload lands where the user was.
pub async fn toggle_recovery<A, P, V>(
    ctx: &AdminContext<A, P, V>,
    cart_id: u64,
    channel: Channel,
    new_status: bool,
) -> Result<Synced, AdminError>
where
    A: AdminApi,
    P: Page,
    V: ToggleView,
{
    let offset = ctx.page.scroll_y();
    let payload = RecoveryToggle { cart_id, channel, status: new_status };

    match api::send(&ctx.api, &ctx.config.endpoints.toggle_recovery, &payload).await {
        Ok(_) => Ok(ctx.apply_toggle(ToggleKey::cart(cart_id, channel), new_status, Some(offset))),
        Err(err) => {
            report_recovery_failure(ctx, cart_id, &err);
            Err(err)
        }
    }
}

/// Mark the cart as contacted on WhatsApp and hand off to the app.
///
/// Returns the deep link that was opened.
pub async fn open_whatsapp<A, P, V>(
    ctx: &AdminContext<A, P, V>,
    target: &WhatsAppTarget,
) -> Result<String, AdminError>
where
    A: AdminApi,
    P: Page + Clone + 'static,
    V: ToggleView,
{
    let offset = ctx.page.scroll_y();
    let settings = &ctx.config.whatsapp;

    let phone = match whatsapp::normalize_phone(&target.phone, &settings.country_code) {
        Ok(phone) => phone,
        Err(err) => {
            console::warn(&format!("[CART] cart {}: {}", target.cart_id, err));
            ctx.page.alert(INVALID_PHONE);
            return Err(err);
        }
    };
    let message = whatsapp::render_message(
        target.message_template.as_deref(),
        target.customer_name.as_deref(),
        &settings.default_message,
    );

    let payload = RecoveryToggle { cart_id: target.cart_id, channel: Channel::Whatsapp, status: true };
    if let Err(err) = api::send(&ctx.api, &ctx.config.endpoints.toggle_recovery, &payload).await {
        report_recovery_failure(ctx, target.cart_id, &err);
        return Err(err);
    }

    update_whatsapp_button(ctx, target.cart_id);
    ctx.page.scroll_to(offset);

    let link = whatsapp::deep_link(&phone, &message);
    ctx.page.navigate(&link);

    if settings.web_fallback {
        let page = ctx.page.clone();
        let web_link = whatsapp::web_link(&phone, &message);
        ctx.page.schedule(
            settings.fallback_delay_ms,
            Box::new(move || offer_web_fallback(&page, &web_link)),
        );
    }
    Ok(link)
}

/// Still on the page after the hand-off means the desktop app did not open.
fn offer_web_fallback<P: Page>(page: &P, web_link: &str) {
    if !page.is_hidden() && page.confirm(whatsapp::WEB_FALLBACK_PROMPT) {
        page.open_tab(web_link);
    }
}

/// Show every WhatsApp button of the cart as sent; their next click unmarks.
pub fn update_whatsapp_button<A, P, V>(ctx: &AdminContext<A, P, V>, cart_id: u64)
where
    P: Page,
    V: ToggleView,
{
    ctx.view.show(
        ToggleKey::cart(cart_id, Channel::Whatsapp),
        ToggleState::sent(ctx.page.clock_label()),
    );
}

fn report_recovery_failure<A, P: Page, V>(ctx: &AdminContext<A, P, V>, cart_id: u64, err: &AdminError) {
    console::warn(&format!("[CART] recovery toggle for cart {} failed: {}", cart_id, err));
    if ctx.config.recovery_failure_alert {
        ctx.page.alert(&err.alert_text(RECOVERY_FAILED));
    }
}

// ========================
// Browser Entry Points
// ========================

/// Click handler for an unsent WhatsApp button.
pub fn on_whatsapp_click(ev: &web_sys::Event, ctx: Rc<BrowserContext>, target: WhatsAppTarget) {
    ev.prevent_default();
    ev.stop_propagation();
    spawn_local(async move {
        let _ = open_whatsapp(&*ctx, &target).await;
    });
}

pub fn spawn_toggle_recovery(ctx: Rc<BrowserContext>, cart_id: u64, channel: Channel, new_status: bool) {
    spawn_local(async move {
        let _ = toggle_recovery(&*ctx, cart_id, channel, new_status).await;
    });
}

pub fn bind_status_selects() -> Result<usize, AdminError> {
    status_select::bind_all(CART_STATUS_SELECTOR, SelectEntity::Cart)
}
