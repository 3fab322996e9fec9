//! 連絡先テーブルの1行

use leptos::*;

use crate::models::{Contact, LeadStatus, DISPLAY_PLACEHOLDER};
use crate::utils::log_trace::log_warn;

/// リンク付きセルの種類
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LinkKind {
    Email,
    Phone,
}

impl LinkKind {
    fn scheme(&self) -> &'static str {
        match self {
            LinkKind::Email => "mailto:",
            LinkKind::Phone => "tel:",
        }
    }

    fn css_class(&self) -> &'static str {
        match self {
            LinkKind::Email => "email-link",
            LinkKind::Phone => "phone-link",
        }
    }
}

/// セルのリンク先（値がなければリンクにしない）
pub fn cell_href(kind: LinkKind, value: Option<&str>) -> Option<String> {
    value
        .filter(|v| !v.is_empty())
        .map(|v| format!("{}{}", kind.scheme(), v))
}

/// セルの表示文字列（値がなければ "-"）
pub fn cell_text(value: Option<&str>) -> &str {
    value.filter(|v| !v.is_empty()).unwrap_or(DISPLAY_PLACEHOLDER)
}

fn placeholder() -> View {
    view! { <span class="placeholder">{DISPLAY_PLACEHOLDER}</span> }.into_view()
}

fn link_cell(kind: LinkKind, value: Option<&str>) -> View {
    match cell_href(kind, value) {
        Some(href) => {
            let text = cell_text(value).to_string();
            view! { <a class=kind.css_class() href=href>{text}</a> }.into_view()
        }
        None => placeholder(),
    }
}

/// 連絡先行
/// 行の識別は位置（index）で行う。ステータス変更は親へ (index, status) を通知
#[component]
pub fn ContactRow(
    index: usize,
    contact: Contact,
    on_status_change: Callback<(usize, LeadStatus)>,
) -> impl IntoView {
    let current = contact.status;

    let on_change = move |e: ev::Event| {
        let value = event_target_value(&e);
        match value.parse::<LeadStatus>() {
            Ok(status) => on_status_change.call((index, status)),
            Err(e) => log_warn("ui-action", &e),
        }
    };

    let email_cell = link_cell(LinkKind::Email, contact.email.as_deref());
    let phone_cell = link_cell(LinkKind::Phone, contact.phone.as_deref());
    let department = cell_text(contact.department.as_deref()).to_string();

    view! {
        <tr class=format!("contact-row {}", current.css_class())>
            <td class="col-name">{contact.name}</td>
            <td class="col-designation">{contact.designation}</td>
            <td class="col-department">
                {department}
            </td>
            <td class="col-email">{email_cell}</td>
            <td class="col-phone">{phone_cell}</td>
            <td class="col-status">
                <select class="status-select" on:change=on_change>
                    {LeadStatus::ALL.into_iter().map(|status| view! {
                        <option value=status.as_str() selected={status == current}>
                            {status.as_str()}
                        </option>
                    }).collect_view()}
                </select>
            </td>
        </tr>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_values_show_placeholder() {
        assert_eq!(cell_text(None), "-");
        assert_eq!(cell_text(Some("")), "-");
        assert_eq!(cell_text(Some("Engineering")), "Engineering");
    }

    #[test]
    fn test_links_only_for_present_values() {
        assert_eq!(cell_href(LinkKind::Email, None), None);
        assert_eq!(cell_href(LinkKind::Email, Some("")), None);
        assert_eq!(cell_href(LinkKind::Phone, None), None);
        assert_eq!(cell_href(LinkKind::Phone, Some("")), None);
    }

    #[test]
    fn test_link_schemes() {
        assert_eq!(
            cell_href(LinkKind::Email, Some("jane@example.edu")).as_deref(),
            Some("mailto:jane@example.edu")
        );
        assert_eq!(
            cell_href(LinkKind::Phone, Some("+919876543210")).as_deref(),
            Some("tel:+919876543210")
        );
    }

    #[test]
    fn test_contact_without_email_and_phone() {
        let contact = Contact::from(crate::models::ContactPayload {
            name: Some("Jane Doe".to_string()),
            designation: Some("Professor".to_string()),
            ..Default::default()
        });

        assert_eq!(cell_text(contact.department.as_deref()), DISPLAY_PLACEHOLDER);
        assert_eq!(cell_text(contact.email.as_deref()), DISPLAY_PLACEHOLDER);
        assert_eq!(cell_text(contact.phone.as_deref()), DISPLAY_PLACEHOLDER);
        assert_eq!(cell_href(LinkKind::Email, contact.email.as_deref()), None);
        assert_eq!(cell_href(LinkKind::Phone, contact.phone.as_deref()), None);
    }
}
