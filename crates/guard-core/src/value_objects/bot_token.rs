//! Bot token - the credential for a Telegram bot

use std::fmt;

/// Bot API credential
///
/// Never printed: `Debug` and `Display` both redact everything after the
/// numeric bot id prefix.
#[derive(Clone, PartialEq, Eq)]
pub struct BotToken(String);

impl BotToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Raw token, only for building Bot API request URLs
    #[inline]
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Numeric bot id prefix (`<id>:<secret>`), safe to log
    pub fn bot_id_prefix(&self) -> &str {
        self.0.split_once(':').map_or("", |(id, _)| id)
    }

    fn redacted(&self) -> String {
        format!("{}:***", self.bot_id_prefix())
    }
}

impl fmt::Debug for BotToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("BotToken").field(&self.redacted()).finish()
    }
}

impl fmt::Display for BotToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.redacted())
    }
}

impl From<String> for BotToken {
    fn from(token: String) -> Self {
        Self(token)
    }
}
