mod common;

use common::mock_upstream::{MockResponse, MockUpstream};
use common::{client_for, torvalds, unreachable_base_url, ScriptedSource};
use ghfinder::github::FetchError;
use ghfinder::search::{
    LookupOutcome, SearchController, SearchStatus, GENERIC_ERROR_MESSAGE,
    NETWORK_ERROR_MESSAGE, NOT_FOUND_MESSAGE, RATE_LIMITED_MESSAGE,
};
use std::time::Duration;

#[tokio::test]
async fn found_profile_ends_in_success() {
    let upstream = MockUpstream::start().await;
    let mut controller = SearchController::new(client_for(&upstream.base_url()));
    controller.set_query("torvalds");

    let state = controller.submit().await;
    assert_eq!(state.status(), SearchStatus::Success);
    assert_eq!(state.profile(), Some(&torvalds()));
    assert_eq!(state.error_message(), None);
    assert!(!state.is_loading());
}

#[tokio::test]
async fn query_is_trimmed_before_lookup() {
    let upstream = MockUpstream::start().await;
    let mut controller = SearchController::new(client_for(&upstream.base_url()));
    controller.set_query("  torvalds\t");
    controller.submit().await;

    let requests = upstream.captured_requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].path, "/users/torvalds");
}

#[tokio::test]
async fn missing_user_shows_not_found_message() {
    let upstream =
        MockUpstream::with_responses(vec![MockResponse::error(404, "Not Found")]).await;
    let mut controller = SearchController::new(client_for(&upstream.base_url()));
    controller.set_query("no-such-user-xyz");

    let state = controller.submit().await;
    assert_eq!(state.status(), SearchStatus::NotFound);
    assert_eq!(state.error_message(), Some(NOT_FOUND_MESSAGE));
    assert!(state.profile().is_none());
}

#[tokio::test]
async fn forbidden_shows_rate_limit_message() {
    let upstream = MockUpstream::with_responses(vec![MockResponse::error(
        403,
        "API rate limit exceeded",
    )])
    .await;
    let mut controller = SearchController::new(client_for(&upstream.base_url()));
    controller.set_query("torvalds");

    let state = controller.submit().await;
    assert_eq!(state.status(), SearchStatus::RateLimited);
    assert_eq!(state.error_message(), Some(RATE_LIMITED_MESSAGE));
}

#[tokio::test]
async fn server_error_shows_generic_message() {
    let upstream = MockUpstream::with_responses(vec![MockResponse::error(500, "boom")]).await;
    let mut controller = SearchController::new(client_for(&upstream.base_url()));
    controller.set_query("torvalds");

    let state = controller.submit().await;
    assert_eq!(state.status(), SearchStatus::Error);
    assert_eq!(state.error_message(), Some(GENERIC_ERROR_MESSAGE));
}

#[tokio::test]
async fn unreachable_upstream_shows_network_message() {
    let mut controller = SearchController::new(client_for(&unreachable_base_url()));
    controller.set_query("torvalds");

    let state = controller.submit().await;
    assert_eq!(state.status(), SearchStatus::Error);
    assert_eq!(state.error_message(), Some(NETWORK_ERROR_MESSAGE));
}

#[tokio::test]
async fn malformed_payload_shows_network_message() {
    let upstream = MockUpstream::with_responses(vec![MockResponse::json("not json")]).await;
    let mut controller = SearchController::new(client_for(&upstream.base_url()));
    controller.set_query("torvalds");

    let state = controller.submit().await;
    assert_eq!(state.error_message(), Some(NETWORK_ERROR_MESSAGE));
}

#[tokio::test]
async fn blank_query_makes_no_request() {
    let source = ScriptedSource::new(vec![Ok(torvalds())]);
    let mut controller = SearchController::new(&source);

    for query in ["", "   ", "\t\n"] {
        controller.set_query(query);
        let state = controller.submit().await;
        assert_eq!(state.status(), SearchStatus::Idle);
        assert_eq!(state.generation(), 0);
    }
    assert!(source.calls().is_empty());
}

#[tokio::test]
async fn exactly_one_call_per_submission() {
    let source = ScriptedSource::new(vec![
        Ok(torvalds()),
        Err(FetchError::NotFound {
            login: "ghost".to_string(),
        }),
    ]);
    let mut controller = SearchController::new(&source);

    controller.set_query("torvalds");
    controller.submit().await;
    assert_eq!(source.calls(), vec!["torvalds"]);

    controller.set_query("ghost");
    let state = controller.submit().await;
    assert_eq!(state.error_message(), Some(NOT_FOUND_MESSAGE));
    assert_eq!(source.calls(), vec!["torvalds", "ghost"]);
}

#[tokio::test]
async fn resubmitting_same_query_fetches_again() {
    let source = ScriptedSource::new(vec![Ok(torvalds()), Ok(torvalds())]);
    let mut controller = SearchController::new(&source);
    controller.set_query("torvalds");

    let first = controller.submit().await.clone();
    let second = controller.submit().await.clone();

    assert_eq!(first.profile(), second.profile());
    assert_eq!(first.status(), second.status());
    assert_eq!(source.calls().len(), 2);
}

#[tokio::test]
async fn new_submission_replaces_previous_result() {
    let source = ScriptedSource::new(vec![
        Ok(torvalds()),
        Err(FetchError::RateLimited { reset_at: None }),
    ]);
    let mut controller = SearchController::new(&source);

    controller.set_query("torvalds");
    assert!(controller.submit().await.profile().is_some());

    controller.set_query("someone-else");
    let state = controller.submit().await;
    assert!(state.profile().is_none());
    assert_eq!(state.error_message(), Some(RATE_LIMITED_MESSAGE));
}

#[tokio::test]
async fn editing_query_keeps_displayed_result() {
    let source = ScriptedSource::new(vec![Ok(torvalds())]);
    let mut controller = SearchController::new(&source);
    controller.set_query("torvalds");
    controller.submit().await;

    controller.set_query("tor");
    assert_eq!(controller.state().query(), "tor");
    assert_eq!(controller.state().status(), SearchStatus::Success);
    assert_eq!(controller.state().profile(), Some(&torvalds()));
}

#[tokio::test]
async fn stale_settlement_is_ignored() {
    let source = ScriptedSource::new(Vec::new());
    let mut controller = SearchController::new(&source);

    controller.set_query("first");
    let first = controller.begin_submit().unwrap();
    controller.settle(first.generation, LookupOutcome::NotFound);

    controller.set_query("second");
    let second = controller.begin_submit().unwrap();
    assert_ne!(first.generation, second.generation);

    // A late answer for the first lookup must not touch the second.
    controller.settle(first.generation, LookupOutcome::Found(torvalds()));
    assert!(controller.state().is_loading());
    assert_eq!(controller.state().pending_login(), Some("second"));
}

#[tokio::test]
async fn dropped_submission_does_not_stay_loading() {
    let slow = MockResponse::json(common::TORVALDS_JSON).with_delay(5_000);
    let upstream = MockUpstream::with_responses(vec![slow]).await;
    let mut controller = SearchController::new(client_for(&upstream.base_url()));
    controller.set_query("torvalds");

    let timed_out = tokio::time::timeout(Duration::from_millis(100), controller.submit()).await;
    assert!(timed_out.is_err());

    let state = controller.state();
    assert!(!state.is_loading());
    assert_eq!(state.error_message(), Some(NETWORK_ERROR_MESSAGE));
}

#[tokio::test]
async fn later_submission_sees_later_answer() {
    let upstream = MockUpstream::start().await;
    upstream.enqueue(MockResponse::error(404, "Not Found"));
    let mut controller = SearchController::new(client_for(&upstream.base_url()));
    controller.set_query("torvalds");

    assert_eq!(controller.submit().await.status(), SearchStatus::NotFound);
    assert_eq!(controller.submit().await.status(), SearchStatus::Success);
    assert_eq!(upstream.captured_requests().len(), 2);
}

#[tokio::test]
async fn dot_only_query_is_not_found_without_request() {
    let upstream = MockUpstream::start().await;
    let mut controller = SearchController::new(client_for(&upstream.base_url()));

    for query in ["..", " . "] {
        controller.set_query(query);
        let state = controller.submit().await;
        assert_eq!(state.status(), SearchStatus::NotFound);
        assert_eq!(state.error_message(), Some(NOT_FOUND_MESSAGE));
    }
    assert!(upstream.captured_requests().is_empty());
}
