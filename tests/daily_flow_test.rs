use chrono::{Duration, TimeZone, Utc};
use gemwarden::actions::Actions;
use gemwarden::clock::ManualClock;
use gemwarden::config::Config;
use gemwarden::domain::{Profile, UserId};
use gemwarden::error::AppError;
use gemwarden::store::MemoryStore;
use std::sync::Arc;

fn test_config() -> Config {
    Config {
        port: 0,
        database_path: ":memory:".to_string(),
        starter_items: vec![],
        confirm_timeout_secs: 15,
        daily_cooldown_secs: 5,
        coinflip_cooldown_secs: 3,
        equip_cooldown_secs: 2,
    }
}

fn setup(store: MemoryStore) -> (Arc<ManualClock>, Actions) {
    let clock = Arc::new(ManualClock::new(
        Utc.with_ymd_and_hms(2026, 8, 1, 12, 0, 0).unwrap(),
    ));
    let store = Arc::new(store);
    let actions = Actions::new(
        store.clone(),
        store.clone(),
        store,
        clock.clone(),
        test_config(),
    );
    (clock, actions)
}

fn user(id: &str) -> UserId {
    UserId::new(id.to_string())
}

#[tokio::test]
async fn test_streak_sequence_extends_and_resets() {
    let (clock, actions) = setup(MemoryStore::new());
    actions.create_profile(&user("u1")).await.unwrap();

    // day 0
    let claim = actions.claim_daily(&user("u1")).await.unwrap();
    assert_eq!(claim.streak, 1);
    assert_eq!(claim.reward.gems, 150);
    assert_eq!(claim.reward.rerolls, 1);
    assert_eq!(claim.reward.exp, 60);

    // day 1: consecutive
    clock.advance(Duration::days(1));
    let claim = actions.claim_daily(&user("u1")).await.unwrap();
    assert_eq!(claim.streak, 2);
    assert_eq!(claim.reward.gems, 150);
    assert_eq!(claim.reward.rerolls, 1);
    assert_eq!(claim.reward.exp, 70);

    // day 4: gap > 1, streak resets
    clock.advance(Duration::days(3));
    let claim = actions.claim_daily(&user("u1")).await.unwrap();
    assert_eq!(claim.streak, 1);

    let view = actions.view_profile(&user("u1")).await.unwrap();
    assert_eq!(view.gems, 450);
    assert_eq!(view.trait_rerolls, 3);
    assert_eq!(view.daily_streak, 1);
}

#[tokio::test]
async fn test_same_day_claim_rejected_without_balance_change() {
    let (clock, actions) = setup(MemoryStore::new());
    actions.create_profile(&user("u1")).await.unwrap();
    actions.claim_daily(&user("u1")).await.unwrap();

    // well past the anti-spam cooldown, still the same calendar day
    clock.advance(Duration::hours(6));
    let err = actions.claim_daily(&user("u1")).await.unwrap_err();
    assert!(matches!(err, AppError::AlreadyClaimedToday), "got {err:?}");

    let view = actions.view_profile(&user("u1")).await.unwrap();
    assert_eq!(view.gems, 150);
    assert_eq!(view.trait_rerolls, 1);
    assert_eq!(view.daily_streak, 1);
}

#[tokio::test]
async fn test_rapid_reclaim_hits_cooldown_first() {
    let (clock, actions) = setup(MemoryStore::new());
    actions.create_profile(&user("u1")).await.unwrap();
    actions.claim_daily(&user("u1")).await.unwrap();

    clock.advance(Duration::seconds(2));
    let err = actions.claim_daily(&user("u1")).await.unwrap_err();
    match err {
        AppError::CooldownActive(secs) => assert!((1..=5).contains(&secs), "got {secs}"),
        other => panic!("expected CooldownActive, got {other:?}"),
    }
}

#[tokio::test]
async fn test_reward_exp_carries_into_level_up() {
    // 300 exp banked: +60 from the claim crosses the 350 threshold
    let store = MemoryStore::new().with_profile({
        let mut p = Profile::new(user("u1"));
        p.exp = 300;
        p
    });
    let (_clock, actions) = setup(store);

    let claim = actions.claim_daily(&user("u1")).await.unwrap();
    assert!(claim.leveled_up);
    assert_eq!(claim.level, 2);
    assert_eq!(claim.exp, 10);

    let view = actions.view_profile(&user("u1")).await.unwrap();
    assert_eq!(view.level, 2);
    assert_eq!(view.exp, 10);
    assert_eq!(view.max_exp, 450);
}

#[tokio::test]
async fn test_claim_requires_profile() {
    let (_clock, actions) = setup(MemoryStore::new());
    let err = actions.claim_daily(&user("ghost")).await.unwrap_err();
    assert!(matches!(err, AppError::ProfileNotFound(_)), "got {err:?}");
}
