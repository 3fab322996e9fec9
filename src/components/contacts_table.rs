//! 連絡先テーブル

use leptos::*;

use super::ContactRow;
use crate::models::{Contact, LeadStatus};

#[component]
pub fn ContactsTable(
    #[prop(into)] contacts: Signal<Vec<Contact>>,
    on_status_change: Callback<(usize, LeadStatus)>,
) -> impl IntoView {
    view! {
        <table class="contacts-table">
            <thead>
                <tr>
                    <th>"Name"</th>
                    <th>"Designation"</th>
                    <th>"Department"</th>
                    <th>"Email"</th>
                    <th>"Phone"</th>
                    <th>"Lead Status"</th>
                </tr>
            </thead>
            <tbody>
                {move || contacts.get().into_iter().enumerate().map(|(index, contact)| view! {
                    <ContactRow index=index contact=contact on_status_change=on_status_change />
                }).collect_view()}
            </tbody>
        </table>
    }
}
