//! UIコンポーネントモジュール

pub mod contact_row;
pub mod contacts_table;
pub mod settings_panel;
pub mod status_summary;
pub mod url_form;

pub use contact_row::ContactRow;
pub use contacts_table::ContactsTable;
pub use settings_panel::SettingsPanel;
pub use status_summary::StatusSummary;
pub use url_form::UrlForm;
