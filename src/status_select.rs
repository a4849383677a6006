//! Status Dropdowns
//!
//! Shared change protocol for the cart and lead status `<select>`s:
//! disable, POST the new value, then recolor and flash ✓ or alert, re-enabling either way.

use leptos::task::spawn_local;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::HtmlSelectElement;

use crate::api::{self, AdminApi, ApiResponse, CartStatusUpdate, LeadStatusUpdate};
use crate::board::ToggleView;
use crate::console;
use crate::context::{self, AdminContext};
use crate::dom;
use crate::error::AdminError;
use crate::page::Page;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectEntity {
    Cart,
    Lead,
}

impl SelectEntity {
    pub fn id_attribute(self) -> &'static str {
        match self {
            SelectEntity::Cart => "data-cart-id",
            SelectEntity::Lead => "data-lead-id",
        }
    }

    fn label(self) -> &'static str {
        match self {
            SelectEntity::Cart => "CART",
            SelectEntity::Lead => "LEAD",
        }
    }

    /// Alert for transport failures
    pub fn failure_message(self) -> &'static str {
        match self {
            SelectEntity::Cart => "Erro ao atualizar status do carrinho",
            SelectEntity::Lead => "Erro ao atualizar status do lead",
        }
    }
}

/// The parts of a dropdown the protocol touches
pub trait StatusControl {
    fn set_disabled(&self, disabled: bool);
    fn set_background(&self, color: &str);
    /// Show a ✓ next to the control for `duration_ms`
    fn flash_success(&self, color: &str, duration_ms: u32);
}

/// Run one status change against `control`.
pub async fn change_status<A, P, V, C>(
    ctx: &AdminContext<A, P, V>,
    control: &C,
    entity: SelectEntity,
    id: u64,
    status: &str,
) -> Result<ApiResponse, AdminError>
where
    A: AdminApi,
    P: Page,
    V: ToggleView,
    C: StatusControl,
{
    control.set_disabled(true);

    let endpoints = &ctx.config.endpoints;
    let result = match entity {
        SelectEntity::Cart => {
            let payload = CartStatusUpdate { cart_id: id, status };
            api::send(&ctx.api, &endpoints.update_cart_status, &payload).await
        }
        SelectEntity::Lead => {
            let payload = LeadStatusUpdate { lead_id: id, status };
            api::send(&ctx.api, &endpoints.update_lead_status, &payload).await
        }
    };

    match &result {
        Ok(response) => {
            if let Some(color) = response.color.as_deref() {
                control.set_background(color);
            }
            control.set_disabled(false);
            control.flash_success(&ctx.config.success_color, ctx.config.flash_ms);
        }
        Err(err) => {
            if err.is_transport() {
                console::error(&format!("[{}] status update for {} failed: {}", entity.label(), id, err));
            }
            control.set_disabled(false);
            ctx.page.alert(&err.alert_text(entity.failure_message()));
        }
    }
    result
}

// ========================
// DOM Binding
// ========================

#[derive(Clone)]
pub struct SelectControl {
    select: HtmlSelectElement,
}

impl StatusControl for SelectControl {
    fn set_disabled(&self, disabled: bool) {
        self.select.set_disabled(disabled);
    }

    fn set_background(&self, color: &str) {
        let _ = self.select.style().set_property("background", color);
    }

    fn flash_success(&self, color: &str, duration_ms: u32) {
        let Some(parent) = self.select.parent_node() else { return };
        let Ok(document) = dom::document() else { return };
        let Ok(glyph) = document.create_element("span") else { return };

        glyph.set_text_content(Some("✓"));
        let _ = glyph.set_attribute(
            "style",
            &format!("color: {}; margin-left: 5px; font-weight: bold;", color),
        );
        if parent.append_child(&glyph).is_ok() {
            gloo_timers::callback::Timeout::new(duration_ms, move || glyph.remove()).forget();
        }
    }
}

/// Bind every dropdown matching `selector`. Returns how many were bound.
pub fn bind_all(selector: &str, entity: SelectEntity) -> Result<usize, AdminError> {
    let mut bound = 0;
    for element in dom::query_all(selector)? {
        let Ok(select) = element.dyn_into::<HtmlSelectElement>() else { continue };
        let Some(id) = dom::parse_id(&select, entity.id_attribute()) else {
            console::warn(&format!(
                "[{}] status select without a numeric {}, skipped",
                entity.label(),
                entity.id_attribute()
            ));
            continue;
        };
        bind_select(select, entity, id);
        bound += 1;
    }
    Ok(bound)
}

fn bind_select(select: HtmlSelectElement, entity: SelectEntity, id: u64) {
    let control = SelectControl { select: select.clone() };
    let on_change = Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
        let Some(ctx) = context::browser_context() else { return };
        let control = control.clone();
        let status = control.select.value();
        spawn_local(async move {
            let _ = change_status(&*ctx, &control, entity, id, &status).await;
        });
    });
    let _ = select.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref());
    on_change.forget();
}
