//! Diagnostic status panel. Read-only; nothing here affects submission.

use crate::sinks::RecordSink;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientKind {
    Chrome,
    Safari,
    Other,
}

impl ClientKind {
    /// Chrome user agents also mention Safari, so Chrome is checked first.
    pub fn from_user_agent(user_agent: &str) -> Self {
        if user_agent.contains("Chrome") {
            ClientKind::Chrome
        } else if user_agent.contains("Safari") {
            ClientKind::Safari
        } else {
            ClientKind::Other
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ClientKind::Chrome => "Chrome",
            ClientKind::Safari => "Safari",
            ClientKind::Other => "其他",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemStatus {
    pub storage_available: bool,
    pub client: ClientKind,
}

impl SystemStatus {
    pub fn query(sink: &impl RecordSink, user_agent: &str) -> Self {
        Self {
            storage_available: sink.is_available(),
            client: ClientKind::from_user_agent(user_agent),
        }
    }
}

impl std::fmt::Display for SystemStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let storage = if self.storage_available {
            "✅ 存储正常"
        } else {
            "❌ 存储异常"
        };
        writeln!(f, "系统状态: {}", storage)?;
        write!(f, "浏览器: {}", self.client.as_str())
    }
}
