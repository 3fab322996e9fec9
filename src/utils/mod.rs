//! ユーティリティモジュール

pub mod api;
pub mod csv_export;
pub mod download;
pub mod log_trace;
pub mod settings;

pub use api::extract_contacts;
pub use csv_export::{contacts_to_csv, CSV_FILENAME, CSV_MIME};
pub use download::download_text;
