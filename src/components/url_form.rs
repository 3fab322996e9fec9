//! URL入力フォーム

use leptos::*;

/// 大学ページURLの入力と送信
/// 読込中・未入力の間は送信ボタンを無効化する
/// 書式チェックは抽出サービス側に任せる（スキーム省略URLもそのまま送る）
#[component]
pub fn UrlForm(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] can_submit: Signal<bool>,
    on_input: Callback<String>,
    on_submit: Callback<()>,
) -> impl IntoView {
    view! {
        <form
            class="url-form"
            novalidate
            on:submit=move |e: ev::SubmitEvent| {
                e.prevent_default();
                on_submit.call(());
            }
        >
            <input
                type="text"
                inputmode="url"
                class="url-input"
                placeholder="https://university.example.edu/faculty"
                prop:value=move || value.get()
                on:input=move |ev| on_input.call(event_target_value(&ev))
            />
            <button type="submit" class="submit-btn" disabled=move || !can_submit.get()>
                {move || if loading.get() {
                    view! { <span class="spinner"></span>"Extracting..." }.into_view()
                } else {
                    "Extract Contacts".into_view()
                }}
            </button>
        </form>
    }
}
