//! Tests for the stamp card service.

use std::sync::Arc;

use mockall::Sequence;
use rstest::rstest;

use super::*;
use crate::domain::ErrorCode;
use crate::domain::ports::MockStampCardRepository;
use crate::domain::test_fixtures::{fixture_clock, fixture_timestamp, stamp_card, user};

fn make_service(repo: MockStampCardRepository) -> StampCardService<MockStampCardRepository> {
    StampCardService::new(Arc::new(repo), fixture_clock())
}

fn detail_code(error: &Error) -> Option<&str> {
    error
        .details()
        .and_then(|details| details.get("code"))
        .and_then(|code| code.as_str())
}

#[tokio::test]
async fn get_creates_an_empty_card_on_first_access() {
    let mut repo = MockStampCardRepository::new();
    repo.expect_find_or_create()
        .withf(|candidate| {
            candidate.user_id().as_str() == "new-user" && candidate.stamps() == 0
        })
        .times(1)
        .return_once(Ok);

    let card = make_service(repo)
        .get(&user("new-user"))
        .await
        .expect("card created");

    assert_eq!(card.stamps(), 0);
    assert_eq!(card.stamps_until_reward(), 10);
    assert_eq!(card.created_at(), fixture_timestamp());
}

#[tokio::test]
async fn get_returns_the_stored_card() {
    let mut repo = MockStampCardRepository::new();
    repo.expect_find_or_create()
        .return_once(|_| Ok(stamp_card("current-user", 3)));

    let card = make_service(repo)
        .get(&user("current-user"))
        .await
        .expect("card exists");

    assert_eq!(card.stamps(), 3);
}

#[tokio::test]
async fn add_stamp_credits_one_purchase() {
    let stored = stamp_card("current-user", 3);
    let expected_revision = stored.revision();
    let mut repo = MockStampCardRepository::new();
    repo.expect_find_or_create().return_once(move |_| Ok(stored));
    repo.expect_save()
        .withf(move |card, expected| card.stamps() == 4 && *expected == expected_revision)
        .times(1)
        .return_once(|_, _| Ok(()));

    let card = make_service(repo)
        .add_stamp(&user("current-user"))
        .await
        .expect("stamp added");

    assert_eq!(card.stamps(), 4);
    assert_eq!(card.total_purchases(), 4);
    assert_eq!(card.last_purchase_date(), Some(fixture_timestamp()));
}

#[tokio::test]
async fn add_stamp_replays_against_fresh_card_after_race() {
    let mut seq = Sequence::new();
    let mut repo = MockStampCardRepository::new();
    repo.expect_find_or_create()
        .return_once(|_| Ok(stamp_card("current-user", 3)));
    repo.expect_save()
        .times(1)
        .in_sequence(&mut seq)
        .return_once(|_, _| Err(StampCardRepositoryError::revision_mismatch(4_u32, 5_u32)));
    repo.expect_find_by_user_id()
        .times(1)
        .in_sequence(&mut seq)
        .return_once(|_| Ok(Some(stamp_card("current-user", 4))));
    repo.expect_save()
        .withf(|card, _| card.stamps() == 5)
        .times(1)
        .in_sequence(&mut seq)
        .return_once(|_, _| Ok(()));

    let card = make_service(repo)
        .add_stamp(&user("current-user"))
        .await
        .expect("stamp added after retry");

    assert_eq!(card.stamps(), 5);
}

#[tokio::test]
async fn add_stamp_reports_conflict_once_retries_run_out() {
    let mut repo = MockStampCardRepository::new();
    repo.expect_find_or_create()
        .return_once(|_| Ok(stamp_card("current-user", 3)));
    repo.expect_find_by_user_id()
        .times(MAX_WRITE_ATTEMPTS - 1)
        .returning(|_| Ok(Some(stamp_card("current-user", 3))));
    repo.expect_save()
        .times(MAX_WRITE_ATTEMPTS)
        .returning(|_, _| Err(StampCardRepositoryError::revision_mismatch(4_u32, 9_u32)));

    let error = make_service(repo)
        .add_stamp(&user("current-user"))
        .await
        .expect_err("contended card");

    assert_eq!(error.code(), ErrorCode::Conflict);
    assert_eq!(detail_code(&error), Some("revision_mismatch"));
}

#[rstest]
#[case(10, 0)]
#[case(13, 3)]
#[case(20, 10)]
#[tokio::test]
async fn use_reward_consumes_ten_stamps(#[case] stamps: u32, #[case] remaining: u32) {
    let mut repo = MockStampCardRepository::new();
    repo.expect_find_by_user_id()
        .return_once(move |_| Ok(Some(stamp_card("current-user", stamps))));
    repo.expect_save().times(1).return_once(|_, _| Ok(()));

    let card = make_service(repo)
        .use_reward(&user("current-user"))
        .await
        .expect("reward redeemed");

    assert_eq!(card.stamps(), remaining);
    assert_eq!(card.total_purchases(), stamps);
}

#[tokio::test]
async fn use_reward_without_card_is_not_found() {
    let mut repo = MockStampCardRepository::new();
    repo.expect_find_by_user_id().return_once(|_| Ok(None));
    repo.expect_find_or_create().times(0);
    repo.expect_save().times(0);

    let error = make_service(repo)
        .use_reward(&user("nobody"))
        .await
        .expect_err("no card");

    assert_eq!(error.code(), ErrorCode::NotFound);
    assert_eq!(detail_code(&error), Some("stamp_card_not_found"));
}

#[tokio::test]
async fn use_reward_with_too_few_stamps_is_conflict() {
    let mut repo = MockStampCardRepository::new();
    repo.expect_find_by_user_id()
        .return_once(|_| Ok(Some(stamp_card("current-user", 9))));
    repo.expect_save().times(0);

    let error = make_service(repo)
        .use_reward(&user("current-user"))
        .await
        .expect_err("insufficient stamps");

    assert_eq!(error.code(), ErrorCode::Conflict);
    let details = error.details().expect("details");
    assert_eq!(details["code"], "insufficient_stamps");
    assert_eq!(details["stamps"], 9);
    assert_eq!(details["required"], 10);
}

#[tokio::test]
async fn connection_failures_are_service_unavailable() {
    let mut repo = MockStampCardRepository::new();
    repo.expect_find_or_create()
        .return_once(|_| Err(StampCardRepositoryError::connection("store offline")));

    let error = make_service(repo)
        .get(&user("current-user"))
        .await
        .expect_err("offline");

    assert_eq!(error.code(), ErrorCode::ServiceUnavailable);
}
