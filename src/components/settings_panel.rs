//! 抽出APIエンドポイント設定パネル

use leptos::*;

use crate::utils::log_trace::log_info;
use crate::utils::settings::{clear_api_url, default_api_url, get_api_url, has_api_override, save_api_url};

/// エンドポイント設定（LocalStorageに保存）
#[component]
pub fn SettingsPanel() -> impl IntoView {
    let (active_url, set_active_url) = create_signal(get_api_url());
    let (draft, set_draft) = create_signal(get_api_url());
    let (overridden, set_overridden) = create_signal(has_api_override());

    let refresh = move || {
        set_active_url.set(get_api_url());
        set_draft.set(get_api_url());
        set_overridden.set(has_api_override());
    };

    let on_save = move |_| {
        let url = draft.get();
        if url.trim().is_empty() {
            return;
        }
        save_api_url(&url);
        log_info("settings", &format!("API URLを保存: {}", url.trim()));
        refresh();
    };

    let on_reset = move |_| {
        clear_api_url();
        log_info("settings", "API URLをデフォルトに戻しました");
        refresh();
    };

    view! {
        <details class="settings-panel">
            <summary>"Extraction endpoint"</summary>
            <p class="active-endpoint">
                {move || active_url.get()}
                {move || (!overridden.get()).then(|| view! {
                    <span class="badge-default">" (default)"</span>
                })}
            </p>
            <div class="input-group">
                <input
                    type="url"
                    placeholder=default_api_url()
                    prop:value=move || draft.get()
                    on:input=move |ev| set_draft.set(event_target_value(&ev))
                />
                <button on:click=on_save disabled=move || draft.get().trim().is_empty()>"Save"</button>
                <button on:click=on_reset disabled=move || !overridden.get()>"Reset"</button>
            </div>
        </details>
    }
}
