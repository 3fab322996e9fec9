//! ダッシュボード状態
//!
//! 画面が持つ状態（入力URL・結果・読込中フラグ・エラー）と遷移をまとめる。
//! idle → loading → (success | error) → idle

use crate::models::{Contact, LeadStatus};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    pub url_input: String,
    pub contacts: Vec<Contact>,
    pub loading: bool,
    pub error: Option<String>,
    /// 一度でも取得が成功したか（0件表示の判定用）
    pub has_result: bool,
}

impl DashboardState {
    pub fn can_submit(&self) -> bool {
        !self.loading && !self.url_input.trim().is_empty()
    }

    /// 送信開始。送信するURLを返す（送信できない場合はNone）
    ///
    /// 前回のエラーと結果は完了時ではなくここで消す
    pub fn begin_submit(&mut self) -> Option<String> {
        if !self.can_submit() {
            return None;
        }
        self.loading = true;
        self.error = None;
        self.contacts.clear();
        self.has_result = false;
        Some(self.url_input.trim().to_string())
    }

    /// 取得完了（成功・失敗どちらでも読込中を解除）
    pub fn finish_submit(&mut self, result: Result<Vec<Contact>, String>) {
        self.loading = false;
        match result {
            Ok(contacts) => {
                self.contacts = contacts;
                self.has_result = true;
            }
            Err(e) => {
                self.error = Some(e);
            }
        }
    }

    /// 指定行のステータスのみ変更
    pub fn set_status(&mut self, index: usize, status: LeadStatus) -> bool {
        match self.contacts.get_mut(index) {
            Some(contact) => {
                contact.status = status;
                true
            }
            None => false,
        }
    }

    pub fn can_export(&self) -> bool {
        !self.contacts.is_empty()
    }

    /// ステータス別件数（LeadStatus::ALL の順）
    pub fn status_counts(&self) -> [(LeadStatus, usize); 3] {
        LeadStatus::ALL.map(|status| {
            let count = self.contacts.iter().filter(|c| c.status == status).count();
            (status, count)
        })
    }
}

/// 一定時間で消える通知（世代番号で古いタイマーを無視する）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimedNotice {
    pub text: Option<String>,
    generation: u64,
}

impl TimedNotice {
    /// 通知を表示し、消去用の世代番号を返す
    pub fn show(&mut self, text: String) -> u64 {
        self.generation += 1;
        self.text = Some(text);
        self.generation
    }

    /// 世代が一致する場合のみ消す
    pub fn expire(&mut self, generation: u64) -> bool {
        if self.generation != generation {
            return false;
        }
        self.text = None;
        true
    }
}
