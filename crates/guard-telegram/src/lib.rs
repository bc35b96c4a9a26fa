//! # guard-telegram
//!
//! Telegram Bot API adapter for the `BotApi` port defined in guard-core.
//!
//! The client holds no credentials. Each call receives the bot token and
//! builds `{base_url}/bot{token}/{method}`, so one client serves every bot.

mod client;

pub use client::{TelegramClient, DEFAULT_API_URL};
