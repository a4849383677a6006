//! Page Configuration
//!
//! Optional JSON embedded by the admin template:
//! `<script type="application/json" id="admin-ui-config">{ ... }</script>`.
//! Every field falls back to the values the backend expects today.

use serde::Deserialize;

use crate::console;
use crate::error::AdminError;

pub const CONFIG_ELEMENT_ID: &str = "admin-ui-config";

const DEFAULT_WHATSAPP_MESSAGE: &str = "Olá, tudo bem ? 👋\n\n\
Sou aqui da TARRAGONA CALÇADOS.\n\
Verificamos que entrou em nosso site e acabou não finalizando a compra..\n\
Gostaria de saber se ficou com alguma duvida sobre o site, algum modelo, ou como finalizar.\n\
Os clientes que compram aqui no ATACADO vendem entre 450 a 700, hoje somos a maior empresa ref a custo beneficio do brasil com fabricação direta.\n\
Estou a disposição para sanar todas as suas duvidas e te ajudar. 🛒";

/// How a successful toggle is reflected on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncMode {
    /// Remember the scroll offset and reload (server re-renders the list)
    #[default]
    Reload,
    /// Update the registered buttons from the response, no reload
    InPlace,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    pub toggle_recovery: String,
    pub update_cart_status: String,
    pub toggle_lead_whatsapp: String,
    pub update_lead_status: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            toggle_recovery: "/admin/customers/cart/toggle-recovery/".to_string(),
            update_cart_status: "/admin/customers/cart/update-cart-status/".to_string(),
            toggle_lead_whatsapp: "/admin/customers/lead/toggle-lead-whatsapp/".to_string(),
            update_lead_status: "/admin/customers/lead/update-lead-status/".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WhatsAppConfig {
    /// Used when the button carries no template
    pub default_message: String,
    /// Prefixed to numbers that lack it
    pub country_code: String,
    /// Offer WhatsApp Web when the desktop app does not take over
    pub web_fallback: bool,
    pub fallback_delay_ms: u32,
}

impl Default for WhatsAppConfig {
    fn default() -> Self {
        Self {
            default_message: DEFAULT_WHATSAPP_MESSAGE.to_string(),
            country_code: "55".to_string(),
            web_fallback: false,
            fallback_delay_ms: 2000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
    pub csrf_cookie: String,
    pub csrf_header: String,
    pub endpoints: Endpoints,
    pub sync: SyncMode,
    /// Alert on a failed cart recovery toggle instead of ignoring it
    pub recovery_failure_alert: bool,
    /// Lifetime of the ✓ glyph after a status change
    pub flash_ms: u32,
    pub success_color: String,
    pub sent_color: String,
    pub whatsapp: WhatsAppConfig,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            csrf_cookie: "csrftoken".to_string(),
            csrf_header: "X-CSRFToken".to_string(),
            endpoints: Endpoints::default(),
            sync: SyncMode::default(),
            recovery_failure_alert: false,
            flash_ms: 2000,
            success_color: "#4CAF50".to_string(),
            sent_color: "#25D366".to_string(),
            whatsapp: WhatsAppConfig::default(),
        }
    }
}

impl AdminConfig {
    pub fn parse(raw: &str) -> Result<Self, AdminError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(raw).map_err(|e| AdminError::Config(e.to_string()))
    }

    /// Read the embedded config element, falling back to defaults.
    pub fn load() -> Self {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        match raw {
            Some(raw) => Self::parse(&raw).unwrap_or_else(|e| {
                console::warn(&format!("[CONFIG] {}, using defaults", e));
                Self::default()
            }),
            None => Self::default(),
        }
    }
}
