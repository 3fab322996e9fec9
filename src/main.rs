use leptos::*;

mod components;
mod models;
mod state;
mod utils;
mod views;

use components::SettingsPanel;
use utils::log_trace::{download_logs, log_error};
use views::Dashboard;

// ============================================
// メインアプリ
// ============================================

#[component]
fn App() -> impl IntoView {
    let (log_error_msg, set_log_error_msg) = create_signal(None::<String>);

    let on_download_logs = move |_| match download_logs() {
        Ok(()) => set_log_error_msg.set(None),
        Err(e) => {
            log_error("ui-action", &format!("ログ出力失敗: {}", e));
            set_log_error_msg.set(Some(e));
        }
    };

    view! {
        <div class="app">
            <header class="app-header">
                <h1>"Scholarship Outreach Dashboard"</h1>
            </header>

            <main class="container">
                <Dashboard />
            </main>

            <footer class="app-footer">
                <SettingsPanel />
                <button class="log-btn" on:click=on_download_logs>"Download activity log"</button>
                {move || log_error_msg.get().map(|e| view! {
                    <p class="status error">{e}</p>
                })}
            </footer>
        </div>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    // ?api=xxx があればエンドポイントを上書き
    utils::settings::init_api_url_from_params();
    mount_to_body(App);
}
