use unicode_segmentation::UnicodeSegmentation;

/// Default cap on the optional note, in user-perceived characters.
pub const MESSAGE_MAX_LENGTH: usize = 500;

/// Free-text note attached to a request. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct UserMessage(String);

impl UserMessage {
    /// Blank input means "no message".
    pub fn parse(s: String) -> Option<UserMessage> {
        if s.is_empty() {
            None
        } else {
            Some(Self(s))
        }
    }
}

impl AsRef<str> for UserMessage {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Number of graphemes in `s`.
pub fn grapheme_len(s: &str) -> usize {
    s.graphemes(true).count()
}

/// Keep at most `max_length` graphemes of `s`.
pub fn clamp_message(s: String, max_length: usize) -> String {
    match s.grapheme_indices(true).nth(max_length) {
        Some((cut, _)) => s[..cut].to_string(),
        None => s,
    }
}
