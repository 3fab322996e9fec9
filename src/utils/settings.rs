//! 抽出APIエンドポイント設定
//!
//! 優先順: URLパラメータ (?api=xxx) → LocalStorage → ビルド時デフォルト

use wasm_bindgen::prelude::*;

use crate::utils::log_trace::log_info;

const API_URL_KEY: &str = "outreach_dashboard_api_url";
const API_PARAM_KEY: &str = "api=";

/// ビルド時に埋め込まれたデフォルトURL
pub fn default_api_url() -> &'static str {
    env!("OUTREACH_DEFAULT_API_URL")
}

/// API URLを保存
pub fn save_api_url(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(API_URL_KEY, url.trim());
        }
    }
}

fn stored_api_url() -> Option<String> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    let url = storage.get_item(API_URL_KEY).ok()??;
    if url.is_empty() { None } else { Some(url) }
}

/// 現在有効なAPI URLを取得
pub fn get_api_url() -> String {
    stored_api_url().unwrap_or_else(|| default_api_url().to_string())
}

/// 上書き設定があるか
pub fn has_api_override() -> bool {
    stored_api_url().is_some()
}

/// API URLの上書きをクリア
pub fn clear_api_url() {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.remove_item(API_URL_KEY);
        }
    }
}

/// クエリ文字列から api パラメータを取り出す（位置は問わない）
pub fn api_param(search: &str) -> Option<&str> {
    search
        .trim_start_matches('?')
        .split('&')
        .find_map(|pair| pair.strip_prefix(API_PARAM_KEY))
        .filter(|v| !v.is_empty())
}

/// URLパラメータからAPI URLを読み込む (?api=xxx)
pub fn init_api_url_from_params() -> Option<String> {
    let window = web_sys::window()?;
    let search = window.location().search().ok()?;
    let encoded = api_param(&search)?;
    let decoded = js_sys::decode_uri_component(encoded).ok()?.as_string()?;
    save_api_url(&decoded);
    log_info("settings", &format!("URLパラメータからAPI URLを設定: {}", decoded));

    // URLからパラメータを削除
    let pathname = window.location().pathname().ok()?;
    let hash = window.location().hash().ok().unwrap_or_default();
    if let Ok(history) = window.history() {
        let _ = history.replace_state_with_url(
            &JsValue::NULL,
            "",
            Some(&format!("{}{}", pathname, hash)),
        );
    }
    Some(decoded)
}
