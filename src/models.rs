//! データ構造体モジュール

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

// ============================================
// リードステータス
// ============================================

/// 連絡先ごとのアプローチ進捗
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LeadStatus {
    #[default]
    New,
    Contacted,
    Partnered,
}

impl LeadStatus {
    /// セレクタの表示順
    pub const ALL: [LeadStatus; 3] = [LeadStatus::New, LeadStatus::Contacted, LeadStatus::Partnered];

    pub fn as_str(&self) -> &'static str {
        match self {
            LeadStatus::New => "New",
            LeadStatus::Contacted => "Contacted",
            LeadStatus::Partnered => "Partnered",
        }
    }

    /// CSSクラス用
    pub fn css_class(&self) -> &'static str {
        match self {
            LeadStatus::New => "status-new",
            LeadStatus::Contacted => "status-contacted",
            LeadStatus::Partnered => "status-partnered",
        }
    }
}

impl fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LeadStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LeadStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("unknown lead status: {}", s))
    }
}

// ============================================
// 抽出APIのレスポンス要素
// ============================================

/// 抽出サービスが返す連絡先（全フィールド任意、nullあり）
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ContactPayload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub designation: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

// ============================================
// 画面で保持する連絡先
// ============================================

#[derive(Debug, Clone, PartialEq)]
pub struct Contact {
    pub name: String,
    pub designation: String,
    pub department: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub status: LeadStatus,
}

impl From<ContactPayload> for Contact {
    fn from(payload: ContactPayload) -> Self {
        Contact {
            name: payload.name.unwrap_or_default(),
            designation: payload.designation.unwrap_or_default(),
            department: non_empty(payload.department),
            email: non_empty(payload.email),
            phone: non_empty(payload.phone),
            status: LeadStatus::New,
        }
    }
}

// 空文字は未設定扱い（リンクにしない）
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// 表示用のプレースホルダー（CSVには出さない）
pub const DISPLAY_PLACEHOLDER: &str = "-";

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_lead_status_parse() {
        assert_eq!("New".parse::<LeadStatus>(), Ok(LeadStatus::New));
        assert_eq!("Contacted".parse::<LeadStatus>(), Ok(LeadStatus::Contacted));
        assert_eq!("Partnered".parse::<LeadStatus>(), Ok(LeadStatus::Partnered));
        assert!("new".parse::<LeadStatus>().is_err());
        assert!("".parse::<LeadStatus>().is_err());
    }

    #[test]
    fn test_lead_status_labels_roundtrip() {
        for status in LeadStatus::ALL {
            assert_eq!(status.to_string().parse::<LeadStatus>(), Ok(status));
        }
        assert_eq!(LeadStatus::default(), LeadStatus::New);
    }

    #[test]
    fn test_contact_from_payload_defaults_to_new() {
        let payload: ContactPayload = serde_json::from_value(json!({
            "name": "Jane Doe",
            "designation": "Professor",
            "email": "jane@example.edu"
        }))
        .unwrap();
        let contact = Contact::from(payload);

        assert_eq!(contact.name, "Jane Doe");
        assert_eq!(contact.designation, "Professor");
        assert_eq!(contact.department, None);
        assert_eq!(contact.email.as_deref(), Some("jane@example.edu"));
        assert_eq!(contact.phone, None);
        assert_eq!(contact.status, LeadStatus::New);
    }

    #[test]
    fn test_contact_from_payload_nulls_and_empty() {
        let payload: ContactPayload = serde_json::from_value(json!({
            "name": null,
            "designation": "Dean",
            "department": null,
            "email": "",
            "phone": "9876543210",
            "extra": 42
        }))
        .unwrap();
        let contact = Contact::from(payload);

        assert_eq!(contact.name, "");
        assert_eq!(contact.department, None);
        assert_eq!(contact.email, None);
        assert_eq!(contact.phone.as_deref(), Some("9876543210"));
    }
}
