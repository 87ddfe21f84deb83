use gloo_net::http::{Request, RequestBuilder, Response};
use serde::Deserialize;
use std::sync::OnceLock;
use thiserror::Error;

use console_domain::{OrderRecord, PackerRecord};

/// API base URL. The dev server runs the backend on port 8080; deployed
/// builds are served by the backend itself, so same-origin URLs work.
fn get_api_base() -> String {
    let hostname = web_sys::window()
        .and_then(|w| w.location().hostname().ok())
        .unwrap_or_default();

    if hostname == "localhost" || hostname == "127.0.0.1" {
        "http://localhost:8080".to_string()
    } else {
        "".to_string()
    }
}

static API_BASE_CACHE: OnceLock<String> = OnceLock::new();

pub fn api_base() -> &'static str {
    API_BASE_CACHE.get_or_init(get_api_base).as_str()
}

/// Errors crossing the Remote Data Client boundary.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// 401; `reason` carries the server-supplied explanation when the
    /// response body has one. The caller picks the user-facing fallback.
    #[error("unauthorized{}", .reason.as_ref().map(|r| format!(": {r}")).unwrap_or_default())]
    Unauthorized { reason: Option<String> },
    /// Network failure, non-2xx status, or an undecodable body.
    #[error("{0}")]
    Transport(String),
}

fn reason_from_body(body: &str) -> Option<String> {
    let json = serde_json::from_str::<serde_json::Value>(body).ok()?;
    for key in ["error", "message"] {
        if let Some(text) = json.get(key).and_then(|v| v.as_str()) {
            if !text.trim().is_empty() {
                return Some(text.trim().to_string());
            }
        }
    }
    None
}

async fn error_from_response(response: Response) -> ApiError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    if status == 401 {
        return ApiError::Unauthorized {
            reason: reason_from_body(&body),
        };
    }
    if body.trim().is_empty() {
        return ApiError::Transport(format!("HTTP error: {status}"));
    }
    if let Some(reason) = reason_from_body(&body) {
        return ApiError::Transport(format!("HTTP error: {status} ({reason})"));
    }
    ApiError::Transport(format!("HTTP error: {status} ({body})"))
}

fn transport(message: impl std::fmt::Display) -> ApiError {
    ApiError::Transport(message.to_string())
}

fn authorized(builder: RequestBuilder, token: &str) -> RequestBuilder {
    builder
        .header("Content-Type", "application/json")
        .header("Authorization", &format!("Bearer {token}"))
}

fn encode(value: &str) -> String {
    js_sys::encode_uri_component(value)
        .as_string()
        .unwrap_or_else(|| value.to_string())
}

pub async fn fetch_orders(token: &str) -> Result<Vec<OrderRecord>, ApiError> {
    let url = format!("{}/api/orders", api_base());

    let response = authorized(Request::get(&url), token)
        .send()
        .await
        .map_err(|e| transport(format!("Request failed: {e}")))?;

    if !response.ok() {
        return Err(error_from_response(response).await);
    }

    response
        .json::<Vec<OrderRecord>>()
        .await
        .map_err(|e| transport(format!("Failed to parse JSON: {e}")))
}

pub async fn fetch_packers(token: &str) -> Result<Vec<PackerRecord>, ApiError> {
    let url = format!("{}/api/packers", api_base());

    let response = authorized(Request::get(&url), token)
        .send()
        .await
        .map_err(|e| transport(format!("Request failed: {e}")))?;

    if !response.ok() {
        return Err(error_from_response(response).await);
    }

    response
        .json::<Vec<PackerRecord>>()
        .await
        .map_err(|e| transport(format!("Failed to parse JSON: {e}")))
}

/// Bulk-capable: the order id query parameter repeats per id. Empty body.
pub async fn assign_picker(token: &str, order_ids: &[String]) -> Result<(), ApiError> {
    let query = order_ids
        .iter()
        .map(|id| format!("orderId={}", encode(id)))
        .collect::<Vec<_>>()
        .join("&");
    let url = format!("{}/api/orders/assign-picker?{query}", api_base());

    let response = authorized(Request::post(&url), token)
        .send()
        .await
        .map_err(|e| transport(format!("Request failed: {e}")))?;

    if !response.ok() {
        return Err(error_from_response(response).await);
    }

    Ok(())
}

pub async fn assign_packer(
    token: &str,
    packer_id: i64,
    order_ids: &[String],
) -> Result<(), ApiError> {
    let mut parts = vec![format!("packerId={packer_id}")];
    parts.extend(order_ids.iter().map(|id| format!("orderId={}", encode(id))));
    let url = format!("{}/api/packers/assign?{}", api_base(), parts.join("&"));

    let response = authorized(Request::post(&url), token)
        .send()
        .await
        .map_err(|e| transport(format!("Request failed: {e}")))?;

    if !response.ok() {
        return Err(error_from_response(response).await);
    }

    Ok(())
}

/// The shipping label PDF for one sale, as raw bytes.
pub async fn fetch_label_document(token: &str, order_number: &str) -> Result<Vec<u8>, ApiError> {
    let url = format!(
        "{}/api/orders/label?orderNumber={}",
        api_base(),
        encode(order_number)
    );

    let response = authorized(Request::get(&url), token)
        .send()
        .await
        .map_err(|e| transport(format!("Request failed: {e}")))?;

    if !response.ok() {
        return Err(error_from_response(response).await);
    }

    response
        .binary()
        .await
        .map_err(|e| transport(format!("Failed to read document bytes: {e}")))
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct OrderLineItem {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default, rename = "listingType")]
    pub listing_type: Option<String>,
    #[serde(default)]
    pub units: Option<f64>,
    #[serde(default, rename = "unitPrice")]
    pub unit_price: Option<f64>,
    #[serde(default, rename = "totalPrice")]
    pub total_price: Option<f64>,
    /// Base64-encoded JPEG, when the listing has one.
    #[serde(default)]
    pub thumbnail: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct OrderDetail {
    #[serde(default)]
    pub items: Vec<OrderLineItem>,
    #[serde(flatten)]
    pub order: OrderRecord,
}

pub async fn fetch_order_detail(token: &str, order_id: &str) -> Result<OrderDetail, ApiError> {
    let url = format!(
        "{}/api/orders/detail?orderId={}",
        api_base(),
        encode(order_id)
    );

    let response = authorized(Request::get(&url), token)
        .send()
        .await
        .map_err(|e| transport(format!("Request failed: {e}")))?;

    if !response.ok() {
        return Err(error_from_response(response).await);
    }

    response
        .json::<OrderDetail>()
        .await
        .map_err(|e| transport(format!("Failed to parse JSON: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reason_prefers_error_key_then_message() {
        assert_eq!(
            reason_from_body(r#"{"error":"Profile lacks picker role"}"#).as_deref(),
            Some("Profile lacks picker role")
        );
        assert_eq!(
            reason_from_body(r#"{"message":"Token expired"}"#).as_deref(),
            Some("Token expired")
        );
        assert_eq!(
            reason_from_body(r#"{"error":"first","message":"second"}"#).as_deref(),
            Some("first")
        );
    }

    #[test]
    fn reason_is_none_for_blank_or_unparseable_bodies() {
        assert_eq!(reason_from_body(""), None);
        assert_eq!(reason_from_body("<html>gateway error</html>"), None);
        assert_eq!(reason_from_body(r#"{"error":"  "}"#), None);
    }

    #[test]
    fn order_detail_keeps_items_out_of_the_field_map() {
        let detail: OrderDetail = serde_json::from_str(
            r#"{
                "orderId": "ML-1",
                "picker": "Ana",
                "sale_number": "S-9",
                "items": [{ "sku": "A-1", "units": 2 }]
            }"#,
        )
        .unwrap();

        assert_eq!(detail.order.order_id, "ML-1");
        assert_eq!(detail.items.len(), 1);
        assert_eq!(detail.items[0].sku.as_deref(), Some("A-1"));
        assert!(detail.order.fields.get("items").is_none());
        assert_eq!(
            detail.order.fields.get("sale_number").and_then(|v| v.as_str()),
            Some("S-9")
        );
    }
}
