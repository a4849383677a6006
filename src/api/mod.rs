//! Admin Endpoint Bindings
//!
//! Request payloads, the response envelope, and the HTTP seam used by the controllers.

mod cart;
mod lead;

use gloo_net::http::Request;
use serde::{Deserialize, Serialize};

use crate::config::AdminConfig;
use crate::console;
use crate::cookie;
use crate::error::AdminError;

pub use cart::*;
pub use lead::*;

/// Envelope returned by every admin endpoint
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ApiResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    /// Background for the status dropdown, status endpoints only
    #[serde(default)]
    pub color: Option<String>,
}

impl ApiResponse {
    pub fn into_result(self) -> Result<Self, AdminError> {
        if self.success {
            Ok(self)
        } else {
            Err(AdminError::Rejected { message: self.error })
        }
    }
}

/// POST a JSON body to an admin endpoint.
pub trait AdminApi {
    async fn post(&self, endpoint: &str, body: serde_json::Value) -> Result<ApiResponse, AdminError>;
}

/// Serialize `payload` and POST it, mapping `success: false` to `AdminError::Rejected`.
pub async fn send<A: AdminApi, T: Serialize>(
    api: &A,
    endpoint: &str,
    payload: &T,
) -> Result<ApiResponse, AdminError> {
    let body = serde_json::to_value(payload).map_err(|e| AdminError::Encode(e.to_string()))?;
    api.post(endpoint, body).await?.into_result()
}

// ========================
// Browser Implementation
// ========================

/// `fetch`-backed client carrying the CSRF token from the session cookie
#[derive(Debug, Clone)]
pub struct HttpApi {
    csrf_cookie: String,
    csrf_header: String,
}

impl HttpApi {
    pub fn new(config: &AdminConfig) -> Self {
        Self {
            csrf_cookie: config.csrf_cookie.clone(),
            csrf_header: config.csrf_header.clone(),
        }
    }
}

impl AdminApi for HttpApi {
    async fn post(&self, endpoint: &str, body: serde_json::Value) -> Result<ApiResponse, AdminError> {
        let token = cookie::read_cookie(&self.csrf_cookie).unwrap_or_else(|| {
            console::warn(&format!("[API] cookie '{}' not found, sending empty token", self.csrf_cookie));
            String::new()
        });

        // json() also sets Content-Type: application/json
        let request = Request::post(endpoint)
            .header(&self.csrf_header, &token)
            .json(&body)
            .map_err(|e| AdminError::Encode(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| AdminError::Network(e.to_string()))?;

        response
            .json::<ApiResponse>()
            .await
            .map_err(|e| AdminError::Decode(format!("{} ({})", e, response.status())))
    }
}
