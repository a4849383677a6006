//! Toggle Button Component
//!
//! Recovery / contacted button mounted into a server-rendered host element.
//! The host carries the entity through data attributes:
//!
//! ```html
//! <span data-admin-toggle data-cart-id="17" data-channel="whatsapp" data-sent="false"
//!       data-phone="5511999998888" data-customer-name="Maria"
//!       data-message-template="Oi {nome}!"></span>
//! <span data-admin-toggle data-lead-id="42" data-sent="true" data-sent-at="14:30"></span>
//! ```

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::api::Channel;
use crate::board::{SignalBoard, ToggleKey, ToggleState};
use crate::cart::{self, WhatsAppTarget};
use crate::console;
use crate::context;
use crate::dom;
use crate::error::AdminError;
use crate::lead;

pub const TOGGLE_HOST_SELECTOR: &str = "[data-admin-toggle]";

/// Parsed host attributes
#[derive(Debug, Clone, PartialEq)]
pub struct ToggleSpec {
    pub key: ToggleKey,
    pub initial: ToggleState,
    /// Present for cart WhatsApp buttons with a phone number
    pub whatsapp: Option<WhatsAppTarget>,
}

/// What a click on the button should do
#[derive(Debug, Clone, PartialEq)]
pub enum ClickAction {
    OpenWhatsApp(WhatsAppTarget),
    ToggleRecovery { cart_id: u64, channel: Channel, status: bool },
    ToggleLead { lead_id: u64, status: bool },
}

impl ToggleSpec {
    pub fn from_attributes(attr: impl Fn(&str) -> Option<String>) -> Result<Self, AdminError> {
        let non_empty = |name: &str| attr(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let id = |name: &str| -> Result<Option<u64>, AdminError> {
            non_empty(name)
                .map(|v| v.parse::<u64>().map_err(|_| AdminError::Dom(format!("{} is not numeric: {:?}", name, v))))
                .transpose()
        };

        let sent = matches!(
            non_empty("data-sent").map(|v| v.to_ascii_lowercase()).as_deref(),
            Some("true" | "1")
        );
        let initial = ToggleState { sent, sent_at: non_empty("data-sent-at").filter(|_| sent) };

        if let Some(cart_id) = id("data-cart-id")? {
            let raw_channel = non_empty("data-channel")
                .ok_or_else(|| AdminError::Dom(format!("cart {} toggle has no data-channel", cart_id)))?;
            let channel = Channel::parse(&raw_channel)
                .ok_or_else(|| AdminError::Dom(format!("unknown channel {:?}", raw_channel)))?;

            let whatsapp = match channel {
                Channel::Whatsapp => non_empty("data-phone").map(|phone| WhatsAppTarget {
                    cart_id,
                    phone,
                    customer_name: non_empty("data-customer-name"),
                    // Keep template whitespace as written
                    message_template: attr("data-message-template").filter(|t| !t.trim().is_empty()),
                }),
                Channel::Email => None,
            };
            return Ok(Self { key: ToggleKey::cart(cart_id, channel), initial, whatsapp });
        }

        if let Some(lead_id) = id("data-lead-id")? {
            return Ok(Self { key: ToggleKey::lead(lead_id), initial, whatsapp: None });
        }

        Err(AdminError::Dom("toggle host has neither data-cart-id nor data-lead-id".to_string()))
    }

    /// Unsent WhatsApp buttons open the chat; everything else flips the flag.
    pub fn click_action(&self, current: &ToggleState) -> ClickAction {
        match (self.key, &self.whatsapp) {
            (ToggleKey::Cart { .. }, Some(target)) if !current.sent => ClickAction::OpenWhatsApp(target.clone()),
            (ToggleKey::Cart { cart_id, channel }, _) => {
                ClickAction::ToggleRecovery { cart_id, channel, status: !current.sent }
            }
            (ToggleKey::Lead { lead_id }, _) => ClickAction::ToggleLead { lead_id, status: !current.sent },
        }
    }
}

pub fn caption(key: ToggleKey, sent: bool) -> &'static str {
    match (key, sent) {
        (ToggleKey::Cart { channel: Channel::Whatsapp, .. }, false) => "📱 Enviar WhatsApp",
        (ToggleKey::Cart { channel: Channel::Whatsapp, .. }, true) => "✅ WhatsApp Enviado",
        (ToggleKey::Cart { channel: Channel::Email, .. }, false) => "📧 Marcar Email",
        (ToggleKey::Cart { channel: Channel::Email, .. }, true) => "✅ Email Enviado",
        (ToggleKey::Lead { .. }, false) => "📱 Marcar WhatsApp",
        (ToggleKey::Lead { .. }, true) => "✅ WhatsApp Contatado",
    }
}

#[component]
pub fn ToggleButton(
    spec: ToggleSpec,
    state: RwSignal<ToggleState>,
    #[prop(into)] sent_color: String,
) -> impl IntoView {
    let key = spec.key;

    let style = move || {
        if state.get().sent {
            format!("background: {};", sent_color)
        } else {
            String::new()
        }
    };

    let on_click = move |ev: web_sys::MouseEvent| {
        let Some(ctx) = context::browser_context() else { return };
        match spec.click_action(&state.get_untracked()) {
            ClickAction::OpenWhatsApp(target) => cart::on_whatsapp_click(&ev, ctx, target),
            ClickAction::ToggleRecovery { cart_id, channel, status } => {
                ev.prevent_default();
                cart::spawn_toggle_recovery(ctx, cart_id, channel, status);
            }
            ClickAction::ToggleLead { lead_id, status } => {
                ev.prevent_default();
                lead::spawn_toggle_lead_whatsapp(ctx, lead_id, status);
            }
        }
    };

    view! {
        <button
            type="button"
            class=move || if state.get().sent { "admin-toggle sent" } else { "admin-toggle" }
            style=style
            on:click=on_click
        >
            <div>{move || caption(key, state.get().sent)}</div>
            {move || state.get().sent_at.map(|at| view! { <small style="opacity: 0.8;">{at}</small> })}
        </button>
    }
}

/// Replace every toggle host's content with a live `ToggleButton`.
pub fn mount_toggle_buttons(sent_color: &str) -> Result<usize, AdminError> {
    let mut mounted = 0;
    for host in dom::query_all(TOGGLE_HOST_SELECTOR)? {
        let spec = match ToggleSpec::from_attributes(|name| host.get_attribute(name)) {
            Ok(spec) => spec,
            Err(e) => {
                console::warn(&format!("[TOGGLE] skipping host: {}", e));
                continue;
            }
        };
        let Ok(host) = host.dyn_into::<web_sys::HtmlElement>() else { continue };
        host.set_inner_html("");

        let sent_color = sent_color.to_string();
        leptos::mount::mount_to(host, move || {
            let state = RwSignal::new(spec.initial.clone());
            SignalBoard::register(spec.key, state);
            view! { <ToggleButton spec=spec state=state sent_color=sent_color /> }
        })
        .forget();
        mounted += 1;
    }
    Ok(mounted)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn parse(attrs: &[(&str, &str)]) -> Result<ToggleSpec, AdminError> {
        let attrs: HashMap<String, String> =
            attrs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        ToggleSpec::from_attributes(|name| attrs.get(name).cloned())
    }

    #[test]
    fn test_cart_whatsapp_host() {
        let spec = parse(&[
            ("data-cart-id", "17"),
            ("data-channel", "whatsapp"),
            ("data-sent", "False"),
            ("data-phone", "5511999998888"),
            ("data-customer-name", " Maria "),
            ("data-message-template", "Oi {nome}!"),
        ])
        .unwrap();

        assert_eq!(spec.key, ToggleKey::cart(17, Channel::Whatsapp));
        assert_eq!(spec.initial, ToggleState::unsent());
        let target = spec.whatsapp.clone().unwrap();
        assert_eq!(target.customer_name.as_deref(), Some("Maria"));
        assert_eq!(target.message_template.as_deref(), Some("Oi {nome}!"));

        assert_eq!(spec.click_action(&ToggleState::unsent()), ClickAction::OpenWhatsApp(target));
        // Once sent, the same button unmarks
        assert_eq!(
            spec.click_action(&ToggleState::sent("10:00")),
            ClickAction::ToggleRecovery { cart_id: 17, channel: Channel::Whatsapp, status: false }
        );
    }

    #[test]
    fn test_cart_email_host() {
        let spec = parse(&[("data-cart-id", "3"), ("data-channel", "email"), ("data-sent", "True"), ("data-sent-at", "08:15")])
            .unwrap();

        assert_eq!(spec.initial, ToggleState::sent("08:15"));
        assert_eq!(spec.whatsapp, None);
        assert_eq!(
            spec.click_action(&spec.initial),
            ClickAction::ToggleRecovery { cart_id: 3, channel: Channel::Email, status: false }
        );
    }

    #[test]
    fn test_lead_host() {
        let spec = parse(&[("data-lead-id", "42"), ("data-sent-at", "08:15")]).unwrap();

        assert_eq!(spec.key, ToggleKey::lead(42));
        // sent-at without sent is ignored
        assert_eq!(spec.initial, ToggleState::unsent());
        assert_eq!(spec.click_action(&spec.initial), ClickAction::ToggleLead { lead_id: 42, status: true });
    }

    #[test]
    fn test_bad_hosts() {
        assert!(parse(&[]).is_err());
        assert!(parse(&[("data-cart-id", "abc"), ("data-channel", "email")]).is_err());
        assert!(parse(&[("data-cart-id", "1")]).is_err());
        assert!(parse(&[("data-cart-id", "1"), ("data-channel", "sms")]).is_err());
    }

    #[test]
    fn test_captions() {
        assert_eq!(caption(ToggleKey::cart(1, Channel::Whatsapp), true), "✅ WhatsApp Enviado");
        assert_eq!(caption(ToggleKey::lead(1), false), "📱 Marcar WhatsApp");
    }
}
