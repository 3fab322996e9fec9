//! ダッシュボードビュー
//!
//! URL送信 → 抽出API → 連絡先テーブル表示 → ステータス付け → CSV出力

use leptos::*;

use crate::components::{ContactsTable, StatusSummary, UrlForm};
use crate::models::LeadStatus;
use crate::state::{DashboardState, TimedNotice};
use crate::utils::log_trace::{log_error, log_info, log_info_with_data};
use crate::utils::{contacts_to_csv, download_text, extract_contacts, CSV_FILENAME, CSV_MIME};

const NOTICE_DURATION_MS: u32 = 2000;

#[component]
pub fn Dashboard() -> impl IntoView {
    let state = create_rw_signal(DashboardState::default());
    let export_notice = create_rw_signal(TimedNotice::default());

    let url_input = create_memo(move |_| state.with(|s| s.url_input.clone()));
    let loading = create_memo(move |_| state.with(|s| s.loading));
    let can_submit = create_memo(move |_| state.with(|s| s.can_submit()));
    let can_export = create_memo(move |_| state.with(|s| s.can_export()));
    let contacts = create_memo(move |_| state.with(|s| s.contacts.clone()));
    let error_msg = create_memo(move |_| state.with(|s| s.error.clone()));
    let counts = create_memo(move |_| state.with(|s| s.status_counts()));
    let no_results = create_memo(move |_| state.with(|s| s.has_result && s.contacts.is_empty()));

    let on_input = Callback::new(move |value: String| {
        state.update(|s| s.url_input = value);
    });

    // 送信：前回の結果・エラーはこの時点で消える
    let on_submit = Callback::new(move |_: ()| {
        let Some(page_url) = state.try_update(|s| s.begin_submit()).flatten() else {
            return;
        };
        log_info("ui-action", &format!("抽出開始: {}", page_url));
        spawn_local(async move {
            let result = extract_contacts(&page_url).await.map_err(|e| e.to_string());
            state.update(|s| s.finish_submit(result));
        });
    });

    let on_status_change = Callback::new(move |(index, status): (usize, LeadStatus)| {
        let changed = state.try_update(|s| s.set_status(index, status)).unwrap_or(false);
        if changed {
            log_info_with_data(
                "ui-action",
                "ステータス変更",
                serde_json::json!({ "row": index, "status": status.as_str() }),
            );
        }
    });

    // CSV出力（0件時はボタン無効）
    let on_export = move |_| {
        let Some(result) = state.with(|s| s.can_export().then(|| contacts_to_csv(&s.contacts))) else {
            return;
        };
        let count = state.with(|s| s.contacts.len());

        let outcome = result
            .map_err(|e| e.to_string())
            .and_then(|csv| download_text(CSV_FILENAME, CSV_MIME, &csv));
        let message = match outcome {
            Ok(()) => {
                log_info_with_data("export", "CSVを出力しました", serde_json::json!({ "count": count }));
                format!("Exported {} contacts", count)
            }
            Err(e) => {
                log_error("export", &format!("CSV出力失敗: {}", e));
                format!("Export failed: {}", e)
            }
        };
        let Some(generation) = export_notice.try_update(|n| n.show(message)) else {
            return;
        };

        // 2秒後にリセット（後から出た通知は消さない）
        spawn_local(async move {
            gloo::timers::future::TimeoutFuture::new(NOTICE_DURATION_MS).await;
            export_notice.update(|n| {
                n.expire(generation);
            });
        });
    };

    view! {
        <div class="dashboard">
            <h2>"Find outreach contacts"</h2>

            <UrlForm
                value=url_input
                loading=loading
                can_submit=can_submit
                on_input=on_input
                on_submit=on_submit
            />

            {move || error_msg.get().map(|e| view! {
                <p class="status error">{e}</p>
            })}

            <div class="actions">
                <button class="export-btn" on:click=on_export disabled=move || !can_export.get()>
                    "Export CSV"
                </button>
                {move || export_notice.with(|n| n.text.clone()).map(|n| view! {
                    <span class="export-notice">{n}</span>
                })}
            </div>

            {move || no_results.get().then(|| view! {
                <p class="status empty">"No contacts found on this page."</p>
            })}

            {move || can_export.get().then(|| view! {
                <StatusSummary counts=counts />
                <ContactsTable contacts=contacts on_status_change=on_status_change />
            })}
        </div>
    }
}
