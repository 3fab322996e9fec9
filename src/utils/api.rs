//! 抽出API連携
//!
//! POST {"url": ...} を送り、連絡先の配列を受け取る

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::models::{Contact, ContactPayload};
use crate::utils::log_trace::{log_error, log_info_with_data};
use crate::utils::settings::get_api_url;

/// 画面に表示するエラー（Displayがそのままメッセージになる）
#[derive(Debug, Error, PartialEq)]
pub enum ExtractError {
    #[error("Could not reach extraction service")]
    Network,
    #[error("Extraction failed (HTTP {0})")]
    Status(u16),
    #[error("{0}")]
    Service(String),
    #[error("Extraction service returned invalid JSON")]
    InvalidJson,
    #[error("Unexpected response from extraction service")]
    UnexpectedShape,
    #[error("Could not build request: {0}")]
    Request(String),
    #[error("Browser window is not available")]
    NoWindow,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

#[derive(Deserialize)]
struct WrappedContacts {
    contacts: Vec<ContactPayload>,
}

fn to_contacts(payloads: Vec<ContactPayload>) -> Vec<Contact> {
    payloads.into_iter().map(Contact::from).collect()
}

/// レスポンスを解釈
///
/// body が None の場合はJSONとして読めなかったことを表す
pub fn interpret_response(ok: bool, status: u16, body: Option<Value>) -> Result<Vec<Contact>, ExtractError> {
    let body = match body {
        Some(b) => b,
        None if ok => return Err(ExtractError::InvalidJson),
        None => return Err(ExtractError::Status(status)),
    };

    // エラーフィールドがあれば成功ステータスでもエラー扱い
    if body.is_object() {
        if let Ok(err) = serde_json::from_value::<ErrorBody>(body.clone()) {
            return Err(ExtractError::Service(err.error));
        }
    }

    if !ok {
        return Err(ExtractError::Status(status));
    }

    if body.is_array() {
        return serde_json::from_value::<Vec<ContactPayload>>(body)
            .map(to_contacts)
            .map_err(|_| ExtractError::UnexpectedShape);
    }

    // {"contacts": [...]} 形式も受け付ける
    serde_json::from_value::<WrappedContacts>(body)
        .map(|w| to_contacts(w.contacts))
        .map_err(|_| ExtractError::UnexpectedShape)
}

/// 送信ボディ
pub fn request_body(url: &str) -> String {
    serde_json::json!({ "url": url }).to_string()
}

/// 抽出APIを呼び出して連絡先を取得
pub async fn extract_contacts(page_url: &str) -> Result<Vec<Contact>, ExtractError> {
    let api_url = get_api_url();

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(&request_body(page_url)));

    let request = Request::new_with_str_and_init(&api_url, &opts)
        .map_err(|e| ExtractError::Request(format!("{:?}", e)))?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|e| ExtractError::Request(format!("{:?}", e)))?;

    let window = web_sys::window().ok_or(ExtractError::NoWindow)?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| {
            log_error("extract", &format!("fetch失敗: {:?}", e));
            ExtractError::Network
        })?;

    let resp: Response = resp_value.dyn_into().map_err(|_| ExtractError::Network)?;
    let ok = resp.ok();
    let status = resp.status();

    let body = match resp.json() {
        Ok(promise) => match JsFuture::from(promise).await {
            Ok(json) => serde_wasm_bindgen::from_value::<Value>(json).ok(),
            Err(e) => {
                log_error("extract", &format!("JSON取得失敗: {:?}", e));
                None
            }
        },
        Err(_) => None,
    };

    let result = interpret_response(ok, status, body);
    match &result {
        Ok(contacts) => log_info_with_data(
            "extract",
            "連絡先を取得しました",
            serde_json::json!({ "url": page_url, "count": contacts.len() }),
        ),
        Err(e) => log_error("extract", &format!("抽出失敗 ({}): {}", status, e)),
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LeadStatus;
    use serde_json::json;

    #[test]
    fn test_array_maps_to_new_contacts() {
        let body = json!([
            {"name": "Jane Doe", "designation": "Professor", "email": "jane@example.edu"},
            {"name": "Ravi Kumar", "designation": "Head", "department": "Engineering", "phone": "9876543210"},
            {}
        ]);
        let contacts = interpret_response(true, 200, Some(body)).unwrap();

        assert_eq!(contacts.len(), 3);
        assert!(contacts.iter().all(|c| c.status == LeadStatus::New));
        assert_eq!(contacts[0].email.as_deref(), Some("jane@example.edu"));
        assert_eq!(contacts[1].department.as_deref(), Some("Engineering"));
        assert_eq!(contacts[2].name, "");
    }

    #[test]
    fn test_empty_array() {
        assert_eq!(interpret_response(true, 200, Some(json!([]))), Ok(vec![]));
    }

    #[test]
    fn test_error_field_with_failure_status() {
        let body = json!({"error": "Failed to fetch URL: 404 Client Error"});
        assert_eq!(
            interpret_response(false, 500, Some(body)),
            Err(ExtractError::Service("Failed to fetch URL: 404 Client Error".to_string()))
        );
    }

    #[test]
    fn test_error_field_with_success_status() {
        let body = json!({"error": "A JSON payload with a 'url' field is required."});
        let err = interpret_response(true, 200, Some(body)).unwrap_err();
        assert_eq!(err.to_string(), "A JSON payload with a 'url' field is required.");
    }

    #[test]
    fn test_failure_status_without_message() {
        let err = interpret_response(false, 502, None).unwrap_err();
        assert_eq!(err, ExtractError::Status(502));
        assert_eq!(err.to_string(), "Extraction failed (HTTP 502)");

        let err = interpret_response(false, 404, Some(json!([]))).unwrap_err();
        assert_eq!(err, ExtractError::Status(404));
    }

    #[test]
    fn test_invalid_json_on_success() {
        assert_eq!(interpret_response(true, 200, None), Err(ExtractError::InvalidJson));
    }

    #[test]
    fn test_wrapped_contacts() {
        let body = json!({"contacts": [{"name": "Asha", "designation": "Dean"}]});
        let contacts = interpret_response(true, 200, Some(body)).unwrap();
        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].name, "Asha");
    }

    #[test]
    fn test_unexpected_shapes() {
        for body in [json!("hello"), json!(42), json!({"items": []}), json!([1, 2])] {
            assert_eq!(
                interpret_response(true, 200, Some(body)),
                Err(ExtractError::UnexpectedShape)
            );
        }
    }

    #[test]
    fn test_request_body() {
        let body: Value = serde_json::from_str(&request_body("https://cs.example.edu/faculty")).unwrap();
        assert_eq!(body, json!({"url": "https://cs.example.edu/faculty"}));
    }
}
