//! ファイルダウンロード（Blob + ObjectURL）

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// テキストをファイルとしてダウンロードさせる
pub fn download_text(filename: &str, mime: &str, content: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("windowがありません")?;
    let document = window.document().ok_or("documentがありません")?;

    let blob_parts = js_sys::Array::new();
    blob_parts.push(&JsValue::from_str(content));

    let options = web_sys::BlobPropertyBag::new();
    options.set_type(mime);

    let blob = web_sys::Blob::new_with_str_sequence_and_options(&blob_parts, &options)
        .map_err(|e| format!("Blob作成失敗: {:?}", e))?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)
        .map_err(|e| format!("ObjectURL作成失敗: {:?}", e))?;

    let a = document
        .create_element("a")
        .map_err(|e| format!("リンク作成失敗: {:?}", e))?;
    let result = start_download(&a, &url, filename);
    let _ = web_sys::Url::revoke_object_url(&url);
    result
}

fn start_download(a: &web_sys::Element, url: &str, filename: &str) -> Result<(), String> {
    a.set_attribute("href", url)
        .map_err(|e| format!("href設定失敗: {:?}", e))?;
    a.set_attribute("download", filename)
        .map_err(|e| format!("download属性設定失敗: {:?}", e))?;
    let element = a
        .dyn_ref::<web_sys::HtmlElement>()
        .ok_or("リンク要素への変換失敗")?;
    element.click();
    Ok(())
}
