/// Transient message surfaced to the user after a submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Success,
    IncompleteForm,
    InvalidEmail,
    StorageFailure,
    NetworkFailure,
    Timeout,
    GenericFailure,
}

impl Notice {
    /// Pick a notice for a sink failure from its description.
    ///
    /// This is keyword matching on free text, not a typed classification:
    /// the first of `localStorage` (or `local storage`), `network`,
    /// `timeout` found in the description wins, anything else gets the
    /// generic retry notice. Matching is case-sensitive.
    pub fn for_failure(description: &str) -> Notice {
        if description.contains("localStorage") || description.contains("local storage") {
            Notice::StorageFailure
        } else if description.contains("network") {
            Notice::NetworkFailure
        } else if description.contains("timeout") {
            Notice::Timeout
        } else {
            Notice::GenericFailure
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Notice::Success)
    }

    pub fn text(&self) -> &'static str {
        match self {
            Notice::Success => "提交成功！我会在周末为您解读星盘",
            Notice::IncompleteForm => "请填写完整信息",
            Notice::InvalidEmail => "请输入正确的邮箱格式",
            Notice::StorageFailure => "浏览器存储失败，请检查浏览器设置",
            Notice::NetworkFailure => "网络连接失败，请检查网络",
            Notice::Timeout => "请求超时，请稍后重试",
            Notice::GenericFailure => "提交失败，请重试",
        }
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.text())
    }
}
