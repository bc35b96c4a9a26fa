//! Chat ID - canonical identifier for Telegram chats and users
//!
//! The Bot API accepts a numeric id (users are positive, groups and
//! supergroups negative) or a public `@username`, and dashboards send
//! whatever they stored. Requests may carry either a JSON string or a JSON
//! integer; both collapse into the same trimmed string here. Ids the Bot API
//! cannot resolve are rejected remotely, not at this boundary.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Telegram chat or user identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChatId(String);

/// Error when parsing a ChatId
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChatIdParseError {
    #[error("chat id must not be empty")]
    Empty,

    #[error("chat id must be at most {max} characters")]
    TooLong { max: usize },
}

impl ChatId {
    /// Longest id the log tables can store
    pub const MAX_LEN: usize = 64;

    /// Parse and normalize a chat id
    ///
    /// Surrounding whitespace is trimmed; the rest is kept as given.
    pub fn parse(raw: &str) -> Result<Self, ChatIdParseError> {
        let value = raw.trim();
        if value.is_empty() {
            return Err(ChatIdParseError::Empty);
        }
        if value.chars().count() > Self::MAX_LEN {
            return Err(ChatIdParseError::TooLong { max: Self::MAX_LEN });
        }

        Ok(Self(value.to_string()))
    }

    /// Get the canonical string form
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value of the id, if it is one
    pub fn as_i64(&self) -> Option<i64> {
        self.0.parse().ok()
    }

    /// Check if this is an `@username` handle
    #[inline]
    pub fn is_handle(&self) -> bool {
        self.0.starts_with('@')
    }
}

impl fmt::Display for ChatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<i64> for ChatId {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}

impl std::str::FromStr for ChatId {
    type Err = ChatIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChatId::parse(s)
    }
}

impl AsRef<str> for ChatId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for ChatId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

// Deserialize from string or integer
impl<'de> Deserialize<'de> for ChatId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct ChatIdVisitor;

        impl Visitor<'_> for ChatIdVisitor {
            type Value = ChatId;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string or integer chat id")
            }

            fn visit_i64<E>(self, value: i64) -> Result<ChatId, E>
            where
                E: de::Error,
            {
                Ok(ChatId::from(value))
            }

            fn visit_u64<E>(self, value: u64) -> Result<ChatId, E>
            where
                E: de::Error,
            {
                i64::try_from(value)
                    .map(ChatId::from)
                    .map_err(|_| de::Error::custom("chat id out of range"))
            }

            fn visit_str<E>(self, value: &str) -> Result<ChatId, E>
            where
                E: de::Error,
            {
                ChatId::parse(value).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_any(ChatIdVisitor)
    }
}
