//! 時系列トレースログ
//! 抽出・エクスポート・設定変更などの操作を記録し、後からJSONで取り出せるようにする

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::utils::download::download_text;

const MAX_LOG_ENTRIES: usize = 500;
const STORAGE_KEY: &str = "outreach_dashboard_log_trace";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: String,
    pub level: String, // "info", "warn", "error"
    pub category: String, // "extract", "export", "settings", "ui-action"
    pub message: String,
    pub data: Option<serde_json::Value>,
}

pub struct LogTrace {
    logs: VecDeque<LogEntry>,
    capacity: usize,
}

impl LogTrace {
    pub fn with_capacity(capacity: usize) -> Self {
        LogTrace {
            logs: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    fn load() -> Self {
        let mut trace = LogTrace::with_capacity(MAX_LOG_ENTRIES);
        trace.load_from_storage();
        trace
    }

    /// 上限を超えたら古いものから捨てる
    pub fn push(&mut self, entry: LogEntry) {
        if self.capacity == 0 {
            return;
        }
        while self.logs.len() >= self.capacity {
            self.logs.pop_front();
        }
        self.logs.push_back(entry);
    }

    pub fn log(&mut self, level: &str, category: &str, message: &str, data: Option<serde_json::Value>) {
        let timestamp = js_sys::Date::new_0().to_iso_string().as_string().unwrap_or_default();

        // コンソールにも出力
        let line = format!("[{}] {}", category, message);
        match level {
            "error" => web_sys::console::error_1(&line.into()),
            "warn" => web_sys::console::warn_1(&line.into()),
            _ => web_sys::console::log_1(&line.into()),
        }

        self.push(LogEntry {
            timestamp,
            level: level.to_string(),
            category: category.to_string(),
            message: message.to_string(),
            data,
        });
        self.save_to_storage();
    }

    pub fn get_logs_json(&self) -> String {
        let logs: Vec<&LogEntry> = self.logs.iter().collect();
        serde_json::to_string_pretty(&logs).unwrap_or_else(|_| "[]".to_string())
    }

    fn load_from_storage(&mut self) {
        let Some(window) = web_sys::window() else { return };
        let Ok(Some(storage)) = window.local_storage() else { return };
        if let Ok(Some(json_str)) = storage.get_item(STORAGE_KEY) {
            if let Ok(logs) = serde_json::from_str::<Vec<LogEntry>>(&json_str) {
                for entry in logs {
                    self.push(entry);
                }
            }
        }
    }

    fn save_to_storage(&self) {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let logs: Vec<&LogEntry> = self.logs.iter().collect();
                let json_str = serde_json::to_string(&logs).unwrap_or_else(|_| "[]".to_string());
                let _ = storage.set_item(STORAGE_KEY, &json_str);
            }
        }
    }

    pub fn download_logs(&self) -> Result<(), String> {
        let timestamp = js_sys::Date::new_0().to_iso_string().as_string().unwrap_or_default();
        let filename = format!("activity_log_{}.json", timestamp.replace(':', "-").replace('.', "-"));
        download_text(&filename, "application/json", &self.get_logs_json())
    }
}

// グローバルなログトレースインスタンス
thread_local! {
    static LOG_TRACE: std::cell::RefCell<LogTrace> = std::cell::RefCell::new(LogTrace::load());
}

pub fn log_info(category: &str, message: &str) {
    LOG_TRACE.with(|trace| trace.borrow_mut().log("info", category, message, None));
}

pub fn log_info_with_data(category: &str, message: &str, data: serde_json::Value) {
    LOG_TRACE.with(|trace| trace.borrow_mut().log("info", category, message, Some(data)));
}

pub fn log_warn(category: &str, message: &str) {
    LOG_TRACE.with(|trace| trace.borrow_mut().log("warn", category, message, None));
}

pub fn log_error(category: &str, message: &str) {
    LOG_TRACE.with(|trace| trace.borrow_mut().log("error", category, message, None));
}

pub fn download_logs() -> Result<(), String> {
    LOG_TRACE.with(|trace| trace.borrow().download_logs())
}
