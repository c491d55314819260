use chrono::{Duration, TimeZone, Utc};
use gemwarden::actions::{Actions, DeleteOutcome};
use gemwarden::clock::{Clock, ManualClock};
use gemwarden::config::Config;
use gemwarden::confirm::ConfirmSignal;
use gemwarden::domain::{Category, EquipmentDefinition, Rarity, Slot, StatBonuses, UserId};
use gemwarden::error::AppError;
use gemwarden::store::{MemoryStore, OwnershipStore};
use std::sync::Arc;

fn test_config() -> Config {
    Config {
        port: 0,
        database_path: ":memory:".to_string(),
        starter_items: vec!["Iron Helm".to_string()],
        confirm_timeout_secs: 15,
        daily_cooldown_secs: 5,
        coinflip_cooldown_secs: 3,
        equip_cooldown_secs: 2,
    }
}

fn setup() -> (Arc<ManualClock>, Arc<MemoryStore>, Actions) {
    let clock = Arc::new(ManualClock::new(
        Utc.with_ymd_and_hms(2026, 8, 1, 12, 0, 0).unwrap(),
    ));
    let store = Arc::new(MemoryStore::new().with_definition(EquipmentDefinition {
        item_name: "Iron Helm".to_string(),
        category: Category::Armor,
        slot: Some(Slot::Head),
        stat_bonus: StatBonuses::from([("defense".to_string(), 5)]),
        rarity: Rarity::Common,
    }));
    let actions = Actions::new(
        store.clone(),
        store.clone(),
        store.clone(),
        clock.clone(),
        test_config(),
    );
    (clock, store, actions)
}

fn user(id: &str) -> UserId {
    UserId::new(id.to_string())
}

#[tokio::test]
async fn test_request_delete_requires_profile() {
    let (_clock, _store, actions) = setup();
    let err = actions.request_delete(&user("ghost")).await.unwrap_err();
    assert!(matches!(err, AppError::ProfileNotFound(_)), "got {err:?}");
}

#[tokio::test]
async fn test_prompt_carries_the_deadline() {
    let (clock, _store, actions) = setup();
    actions.create_profile(&user("u1")).await.unwrap();

    let prompt = actions.request_delete(&user("u1")).await.unwrap();
    assert_eq!(prompt.deadline, clock.now() + Duration::seconds(15));
}

#[tokio::test]
async fn test_confirmed_delete_removes_profile_and_ownership() {
    let (clock, store, actions) = setup();
    actions.create_profile(&user("u1")).await.unwrap();
    assert_eq!(store.list_for_user(&user("u1")).await.unwrap().len(), 1);

    actions.request_delete(&user("u1")).await.unwrap();
    clock.advance(Duration::seconds(5));

    let outcome = actions
        .resolve_delete(&user("u1"), ConfirmSignal::Confirm)
        .await
        .unwrap();
    assert_eq!(outcome, DeleteOutcome::Deleted);

    let err = actions.view_profile(&user("u1")).await.unwrap_err();
    assert!(matches!(err, AppError::ProfileNotFound(_)));
    // ownership rows cascade with the profile
    assert!(store.list_for_user(&user("u1")).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_canceled_delete_keeps_everything() {
    let (_clock, store, actions) = setup();
    actions.create_profile(&user("u1")).await.unwrap();

    actions.request_delete(&user("u1")).await.unwrap();
    let outcome = actions
        .resolve_delete(&user("u1"), ConfirmSignal::Cancel)
        .await
        .unwrap();
    assert_eq!(outcome, DeleteOutcome::Canceled);

    assert!(actions.view_profile(&user("u1")).await.is_ok());
    assert_eq!(store.list_for_user(&user("u1")).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_late_confirm_times_out_and_keeps_profile() {
    let (clock, _store, actions) = setup();
    actions.create_profile(&user("u1")).await.unwrap();

    actions.request_delete(&user("u1")).await.unwrap();
    clock.advance(Duration::seconds(16));

    let outcome = actions
        .resolve_delete(&user("u1"), ConfirmSignal::Confirm)
        .await
        .unwrap();
    assert_eq!(outcome, DeleteOutcome::TimedOut);
    assert!(actions.view_profile(&user("u1")).await.is_ok());
}

#[tokio::test]
async fn test_only_the_first_response_counts() {
    let (_clock, _store, actions) = setup();
    actions.create_profile(&user("u1")).await.unwrap();

    actions.request_delete(&user("u1")).await.unwrap();
    let first = actions
        .resolve_delete(&user("u1"), ConfirmSignal::Cancel)
        .await
        .unwrap();
    assert_eq!(first, DeleteOutcome::Canceled);

    let second = actions
        .resolve_delete(&user("u1"), ConfirmSignal::Confirm)
        .await
        .unwrap();
    assert_eq!(second, DeleteOutcome::NonePending);
    assert!(actions.view_profile(&user("u1")).await.is_ok());
}

#[tokio::test]
async fn test_sessions_do_not_cross_users() {
    let (_clock, _store, actions) = setup();
    actions.create_profile(&user("u1")).await.unwrap();
    actions.create_profile(&user("u2")).await.unwrap();

    actions.request_delete(&user("u1")).await.unwrap();
    let outcome = actions
        .resolve_delete(&user("u2"), ConfirmSignal::Confirm)
        .await
        .unwrap();
    assert_eq!(outcome, DeleteOutcome::NonePending);
    assert!(actions.view_profile(&user("u1")).await.is_ok());
}
