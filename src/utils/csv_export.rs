//! 連絡先一覧のCSV出力

use crate::models::Contact;
use thiserror::Error;

/// 固定ヘッダー行
pub const CSV_HEADER: &str = "Name, Designation, Department, Email, Phone, Lead Status";
pub const CSV_FILENAME: &str = "contacts.csv";
pub const CSV_MIME: &str = "text/csv;charset=utf-8";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("CSV flush failed: {0}")]
    Flush(String),
    #[error("CSV is not valid UTF-8")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// CSV文書を生成
///
/// 全フィールドをダブルクォートで囲み、値中の `"` は `""` にする。
/// 未設定の任意項目は空文字（表示用の "-" は出さない）
pub fn contacts_to_csv(contacts: &[Contact]) -> Result<String, ExportError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Always)
        .double_quote(true)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    for contact in contacts {
        writer.write_record([
            contact.name.as_str(),
            contact.designation.as_str(),
            contact.department.as_deref().unwrap_or(""),
            contact.email.as_deref().unwrap_or(""),
            contact.phone.as_deref().unwrap_or(""),
            contact.status.as_str(),
        ])?;
    }

    let bytes = writer.into_inner().map_err(|e| ExportError::Flush(e.to_string()))?;
    let body = String::from_utf8(bytes)?;

    let mut document = String::with_capacity(CSV_HEADER.len() + body.len() + 1);
    document.push_str(CSV_HEADER);
    if !body.is_empty() {
        document.push('\n');
        document.push_str(body.trim_end_matches('\n'));
    }
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LeadStatus;

    fn contact(name: &str, designation: &str) -> Contact {
        Contact {
            name: name.to_string(),
            designation: designation.to_string(),
            department: None,
            email: None,
            phone: None,
            status: LeadStatus::New,
        }
    }

    #[test]
    fn test_header_first_line() {
        let csv = contacts_to_csv(&[contact("A", "B")]).unwrap();
        assert_eq!(csv.lines().next(), Some(CSV_HEADER));
    }

    #[test]
    fn test_example_row() {
        let mut jane = contact("Jane Doe", "Professor");
        jane.email = Some("jane@example.edu".to_string());

        let csv = contacts_to_csv(&[jane]).unwrap();
        assert_eq!(
            csv,
            format!(
                "{}\n{}",
                CSV_HEADER, r#""Jane Doe","Professor","","jane@example.edu","","New""#
            )
        );
    }

    #[test]
    fn test_escapes_double_quotes() {
        let csv = contacts_to_csv(&[contact(r#"O"Brien"#, "Dean")]).unwrap();
        let row = csv.lines().nth(1).unwrap();
        assert!(row.starts_with(r#""O""Brien","Dean","#));
    }

    #[test]
    fn test_missing_optional_fields_export_empty() {
        let csv = contacts_to_csv(&[contact("Sam", "HOD")]).unwrap();
        let row = csv.lines().nth(1).unwrap();
        assert_eq!(row, r#""Sam","HOD","","","","New""#);
        assert!(!row.contains('-'));
    }

    #[test]
    fn test_rows_follow_order_and_status() {
        let mut first = contact("Alice, PhD", "Professor");
        first.department = Some("Science".to_string());
        first.phone = Some("+919876543210".to_string());
        first.status = LeadStatus::Partnered;
        let mut second = contact("Bob", "Coordinator");
        second.status = LeadStatus::Contacted;

        let csv = contacts_to_csv(&[first, second]).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], r#""Alice, PhD","Professor","Science","","+919876543210","Partnered""#);
        assert_eq!(lines[2], r#""Bob","Coordinator","","","","Contacted""#);
        assert!(!csv.ends_with('\n'));
    }

    #[test]
    fn test_empty_list_is_header_only() {
        assert_eq!(contacts_to_csv(&[]).unwrap(), CSV_HEADER);
    }
}
