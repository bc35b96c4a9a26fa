//! Service layer tests over in-memory ports
//!
//! Exercises the operations that are usable without an HTTP request.

use guard_core::{
    BanLogRepository, BotToken, ChatId, GroupId, ModerationAction, NewBanLog, UserId,
    WarnLogRepository,
};
use guard_service::{BanOrKick, ModerationService, WarningService};
use integration_tests::{World, BOT_TOKEN, GROUP_CHAT_ID, OWNER, STRANGER};
use serde_json::json;

fn chat(raw: &str) -> ChatId {
    ChatId::parse(raw).unwrap()
}

fn command(action: ModerationAction, group: &str, owner: Option<UserId>) -> BanOrKick {
    BanOrKick {
        action,
        token: BotToken::new(BOT_TOKEN),
        group_chat_id: chat(group),
        offender: chat("4242"),
        reason: Some("flooding".to_string()),
        owner_id: owner,
    }
}

// ============================================================================
// Ban / Kick
// ============================================================================

#[tokio::test]
async fn test_kick_issues_ban_then_unban_with_same_arguments() {
    let world = World::new();
    let ctx = world.context();
    let service = ModerationService::new(&ctx);

    let response = service
        .ban_or_kick(command(ModerationAction::Kick, "-100500", Some(OWNER)), None)
        .await
        .unwrap();
    assert!(response.is_ok());

    let calls = world.bot_api.calls();
    assert_eq!(world.bot_api.methods(), vec!["banChatMember", "unbanChatMember"]);
    assert_eq!(calls[0].payload, calls[1].payload);
    assert_eq!(calls[0].payload, json!({ "chat_id": "-100500", "user_id": "4242" }));
}

#[tokio::test]
async fn test_kick_returns_ban_reply() {
    let world = World::new();
    world.bot_api.reply_with(
        "unbanChatMember",
        r#"{"ok":false,"error_code":400,"description":"Bad Request: method is available only for supergroups"}"#,
    );
    let ctx = world.context();

    let response = ModerationService::new(&ctx)
        .ban_or_kick(command(ModerationAction::Kick, "-100500", None), None)
        .await
        .unwrap();

    assert!(response.is_ok());
}

#[tokio::test]
async fn test_ban_without_owner_is_not_logged() {
    let world = World::new();
    let ctx = world.context();

    ModerationService::new(&ctx)
        .ban_or_kick(command(ModerationAction::Ban, "-100500", None), None)
        .await
        .unwrap();

    assert_eq!(world.bot_api.methods(), vec!["banChatMember"]);
    assert!(world.ban_log.entries().is_empty());
}

#[tokio::test]
async fn test_caller_is_used_as_owner_when_none_given() {
    let world = World::new();
    let ctx = world.context();

    ModerationService::new(&ctx)
        .ban_or_kick(command(ModerationAction::Ban, "-100500", None), Some(STRANGER))
        .await
        .unwrap();

    let entries = world.ban_log.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].owner_id, STRANGER);
    assert_eq!(entries[0].group_id, GroupId::new(-100_500));
    assert_eq!(entries[0].reason.as_deref(), Some("flooding"));
}

#[tokio::test]
async fn test_explicit_owner_wins_over_caller() {
    let world = World::new();
    let ctx = world.context();

    ModerationService::new(&ctx)
        .ban_or_kick(command(ModerationAction::Ban, "-100500", Some(OWNER)), Some(STRANGER))
        .await
        .unwrap();

    assert_eq!(world.ban_log.entries()[0].owner_id, OWNER);
}

#[tokio::test]
async fn test_handle_group_skips_log() {
    let world = World::new();
    let ctx = world.context();

    let response = ModerationService::new(&ctx)
        .ban_or_kick(command(ModerationAction::Ban, "@somegroup", Some(OWNER)), None)
        .await
        .unwrap();

    assert!(response.is_ok());
    assert_eq!(world.bot_api.methods(), vec!["banChatMember"]);
    assert!(world.ban_log.entries().is_empty());
}

#[tokio::test]
async fn test_ban_log_is_append_only() {
    let world = World::new();
    let ctx = world.context();
    let service = ModerationService::new(&ctx);

    for action in [ModerationAction::Ban, ModerationAction::Kick, ModerationAction::Ban] {
        service
            .log_ban(NewBanLog {
                owner_id: OWNER,
                group_id: GroupId::new(GROUP_CHAT_ID),
                offender_chat_id: chat("4242"),
                action,
                reason: None,
            })
            .await
            .unwrap();
    }

    let history = world
        .ban_log
        .find_by_group(OWNER, GroupId::new(GROUP_CHAT_ID))
        .await
        .unwrap();
    let actions: Vec<_> = history.iter().map(|entry| entry.action).collect();
    assert_eq!(
        actions,
        vec![ModerationAction::Ban, ModerationAction::Kick, ModerationAction::Ban]
    );
    assert!(history[0].id > history[2].id);
}

// ============================================================================
// Warnings
// ============================================================================

#[tokio::test]
async fn test_increment_warning_keeps_reason_until_replaced() {
    let world = World::new();
    let ctx = world.context();
    let service = WarningService::new(&ctx);
    let group = GroupId::new(GROUP_CHAT_ID);

    let count = service
        .increment_warning(OWNER, group, chat("abc"), Some("spam".to_string()))
        .await
        .unwrap();
    assert_eq!(count, 1);

    let count = service
        .increment_warning(OWNER, group, chat("abc"), None)
        .await
        .unwrap();
    assert_eq!(count, 2);

    let count = service
        .increment_warning(OWNER, group, chat("abc"), Some("   ".to_string()))
        .await
        .unwrap();
    assert_eq!(count, 3);

    let stored = world.warn_log.find(OWNER, group, &chat("abc")).await.unwrap().unwrap();
    assert_eq!(stored.warn_count, 3);
    assert_eq!(stored.warn_reason.as_deref(), Some("spam"));

    service
        .increment_warning(OWNER, group, chat("abc"), Some("flood".to_string()))
        .await
        .unwrap();
    let stored = world.warn_log.find(OWNER, group, &chat("abc")).await.unwrap().unwrap();
    assert_eq!(stored.warn_count, 4);
    assert_eq!(stored.warn_reason.as_deref(), Some("flood"));
}

#[tokio::test]
async fn test_increment_with_plain_offender_name() {
    let world = World::new();
    let ctx = world.context();
    let service = WarningService::new(&ctx);
    let (owner, group) = (UserId::new(5), GroupId::new(100));

    let first = service
        .increment_warning(owner, group, chat("abc"), Some("spam".to_string()))
        .await
        .unwrap();
    let second = service
        .increment_warning(owner, group, chat("abc"), None)
        .await
        .unwrap();
    assert_eq!((first, second), (1, 2));

    let stored = world.warn_log.find(owner, group, &chat("abc")).await.unwrap().unwrap();
    assert_eq!(stored.warn_count, 2);
    assert_eq!(stored.warn_reason.as_deref(), Some("spam"));
}

#[tokio::test]
async fn test_counters_are_scoped_to_owner_and_group() {
    let world = World::new();
    let ctx = world.context();
    let service = WarningService::new(&ctx);

    let first = service
        .increment_warning(OWNER, GroupId::new(-1), chat("abc"), None)
        .await
        .unwrap();
    let other_group = service
        .increment_warning(OWNER, GroupId::new(-2), chat("abc"), None)
        .await
        .unwrap();
    let other_owner = service
        .increment_warning(STRANGER, GroupId::new(-1), chat("abc"), None)
        .await
        .unwrap();

    assert_eq!((first, other_group, other_owner), (1, 1, 1));
}

#[tokio::test]
async fn test_send_warning_strips_markup() {
    let world = World::new();
    let ctx = world.context();

    let response = WarningService::new(&ctx)
        .send_warning(
            &BotToken::new(BOT_TOKEN),
            &chat("-100500"),
            "<a href=\"https://spam.example\">Read</a> the <!-- hidden -->rules",
            None,
        )
        .await;

    assert!(response.is_ok());
    let calls = world.bot_api.calls();
    assert_eq!(calls[0].payload["text"], "Read the rules");
    assert_eq!(calls[0].payload["chat_id"], "-100500");
}

#[tokio::test]
async fn test_send_warning_does_not_count() {
    let world = World::new();
    let ctx = world.context();

    WarningService::new(&ctx)
        .send_warning(&BotToken::new(BOT_TOKEN), &chat("abc"), "hello", Some(5))
        .await;

    let stored = world
        .warn_log
        .find(OWNER, GroupId::new(GROUP_CHAT_ID), &chat("abc"))
        .await
        .unwrap();
    assert!(stored.is_none());
}
