//! Test fixtures and data generators
//!
//! Provides a seeded in-memory world and request bodies for integration tests.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use guard_common::JwtService;
use guard_core::{Bot, BotId, BotToken, Group, GroupId, UserId};
use guard_service::{ServiceContext, ServiceContextBuilder};
use serde::Serialize;

use crate::fakes::{InMemoryBanLog, InMemoryBots, InMemoryGroups, InMemoryWarnLog, RecordingBotApi};

/// Secret shared by the test server and the tokens issued here
pub const TEST_JWT_SECRET: &str = "integration-test-secret";

/// Dashboard user that owns the seeded bot
pub const OWNER: UserId = UserId::new(1);

/// Dashboard user with no bots
pub const STRANGER: UserId = UserId::new(2);

/// Telegram chat id of the seeded group
pub const GROUP_CHAT_ID: i64 = -1_001_234_567_890;

pub const BOT_TOKEN: &str = "123456:integration-token";

/// Counter for unique bot ids
static COUNTER: AtomicI64 = AtomicI64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> i64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// In-memory repositories plus a recording Bot API, wired into a context
pub struct World {
    pub groups: Arc<InMemoryGroups>,
    pub bots: Arc<InMemoryBots>,
    pub ban_log: Arc<InMemoryBanLog>,
    pub warn_log: Arc<InMemoryWarnLog>,
    pub bot_api: Arc<RecordingBotApi>,
    pub jwt: Arc<JwtService>,
}

impl World {
    /// Empty world
    pub fn new() -> Self {
        Self {
            groups: Arc::default(),
            bots: Arc::default(),
            ban_log: Arc::default(),
            warn_log: Arc::default(),
            bot_api: Arc::default(),
            jwt: Arc::new(JwtService::new(TEST_JWT_SECRET, 900)),
        }
    }

    /// World with `OWNER`'s bot managing `GROUP_CHAT_ID`
    pub fn seeded() -> Self {
        let world = Self::new();
        world.seed_group(OWNER, GROUP_CHAT_ID);
        world
    }

    /// Register a bot for `owner` and a group it manages
    pub fn seed_group(&self, owner: UserId, group_chat_id: i64) -> (Group, Bot) {
        let bot = Bot::new(BotId::new(unique_suffix()), owner, BotToken::new(BOT_TOKEN));
        let group = Group::new(GroupId::new(group_chat_id), bot.id);
        self.bots.insert(bot.clone());
        self.groups.insert(group.clone());
        (group, bot)
    }

    /// Service context over this world's ports
    pub fn context(&self) -> ServiceContext {
        ServiceContextBuilder::new()
            .group_repo(self.groups.clone())
            .bot_repo(self.bots.clone())
            .ban_log_repo(self.ban_log.clone())
            .warn_log_repo(self.warn_log.clone())
            .bot_api(self.bot_api.clone())
            .jwt_service(self.jwt.clone())
            .build()
            .expect("all dependencies are set")
    }

    /// Bearer token for a dashboard user
    pub fn token_for(&self, user: UserId) -> String {
        self.jwt.issue_token(user).expect("token encodes")
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

/// POST /warn body
#[derive(Debug, Clone, Serialize)]
pub struct WarnBody {
    pub telegram_group_id: i64,
    pub chat_id: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to_message_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl WarnBody {
    pub fn new(chat_id: &str, message: &str) -> Self {
        Self {
            telegram_group_id: GROUP_CHAT_ID,
            chat_id: chat_id.to_string(),
            message: message.to_string(),
            reply_to_message_id: None,
            reason: None,
        }
    }

    pub fn reason(mut self, reason: &str) -> Self {
        self.reason = Some(reason.to_string());
        self
    }

    pub fn reply_to(mut self, message_id: i64) -> Self {
        self.reply_to_message_id = Some(message_id);
        self
    }
}

/// POST /ban and POST /kick body
#[derive(Debug, Clone, Serialize)]
pub struct ModerationBody {
    pub telegram_group_id: i64,
    pub chat_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl ModerationBody {
    pub fn new(chat_id: &str) -> Self {
        Self {
            telegram_group_id: GROUP_CHAT_ID,
            chat_id: chat_id.to_string(),
            reason: None,
        }
    }

    pub fn reason(mut self, reason: &str) -> Self {
        self.reason = Some(reason.to_string());
        self
    }
}
