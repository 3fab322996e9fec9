//! ステータス別件数バー

use leptos::*;

use crate::models::LeadStatus;

#[component]
pub fn StatusSummary(#[prop(into)] counts: Signal<[(LeadStatus, usize); 3]>) -> impl IntoView {
    let total = move || counts.get().iter().map(|(_, n)| n).sum::<usize>();

    view! {
        <div class="status-summary">
            <span class="summary-total">"Contacts: " {total}</span>
            {move || counts.get().into_iter().map(|(status, count)| view! {
                <span class=format!("summary-item {}", status.css_class())>
                    {status.as_str()} ": " {count}
                </span>
            }).collect_view()}
        </div>
    }
}
