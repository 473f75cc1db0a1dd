use super::lifecycle::*;
use crate::api::models::{Difficulty, Question};
use crate::settings::UserSettings;

fn settings_with(api_key: &str, max_questions: usize) -> UserSettings {
    UserSettings {
        api_key: api_key.to_string(),
        max_questions,
    }
}

fn question(id: &str, title: &str) -> Question {
    Question {
        id: id.to_string(),
        title: title.to_string(),
        url: format!("https://leetcode.com/problems/{id}/"),
        difficulty: Difficulty::Medium,
        description: "desc".to_string(),
        tags: None,
    }
}

fn questions(n: usize) -> Vec<Question> {
    (0..n)
        .map(|i| question(&i.to_string(), &format!("Problem {i}")))
        .collect()
}

#[test]
fn test_initial_state() {
    let lifecycle = SearchLifecycle::new();

    assert_eq!(*lifecycle.state(), LifecycleState::Idle);
    assert!(lifecycle.results().is_empty());
    assert!(!lifecycle.is_loading());
    assert!(lifecycle.error().is_none());
    assert!(!lifecycle.has_searched());
}

#[test]
fn test_valid_submit_goes_pending_and_issues_one_request() {
    let mut lifecycle = SearchLifecycle::new();
    let settings = settings_with("sk-test", 20);

    let request = lifecycle.submit("two sum", &settings, 20).unwrap();

    assert_eq!(request.id, 1);
    assert_eq!(request.query.text, "two sum");
    assert_eq!(request.query.api_key, "sk-test");
    assert_eq!(request.query.limit, 20);
    assert!(lifecycle.is_loading());
    assert!(lifecycle.has_searched());
}

#[test]
fn test_submit_trims_query_text() {
    let mut lifecycle = SearchLifecycle::new();
    let settings = settings_with("", 20);

    let request = lifecycle.submit("  sliding window  ", &settings, 20).unwrap();
    assert_eq!(request.query.text, "sliding window");
}

#[test]
fn test_empty_submit_is_rejected_without_state_change() {
    let mut lifecycle = SearchLifecycle::new();
    let settings = settings_with("sk", 20);

    assert_eq!(
        lifecycle.submit("", &settings, 20),
        Err(ValidationError::EmptyQuery)
    );
    assert_eq!(
        lifecycle.submit("   \t  ", &settings, 20),
        Err(ValidationError::EmptyQuery)
    );
    assert_eq!(*lifecycle.state(), LifecycleState::Idle);
    assert_eq!(lifecycle.current_id(), 0);
    assert!(!lifecycle.is_loading());
}

#[test]
fn test_limit_out_of_range_is_rejected() {
    let mut lifecycle = SearchLifecycle::new();
    let settings = settings_with("sk", 20);

    assert_eq!(
        lifecycle.submit("graphs", &settings, 0),
        Err(ValidationError::LimitOutOfRange(0))
    );
    assert_eq!(
        lifecycle.submit("graphs", &settings, 51),
        Err(ValidationError::LimitOutOfRange(51))
    );
    assert_eq!(*lifecycle.state(), LifecycleState::Idle);
}

#[test]
fn test_successful_resolution() {
    let mut lifecycle = SearchLifecycle::new();
    let settings = settings_with("sk", 20);

    let request = lifecycle.submit("binary tree", &settings, 20).unwrap();
    let results = questions(3);

    let applied = lifecycle.resolve(SearchResponse {
        id: request.id,
        outcome: Ok(results.clone()),
    });

    assert!(applied);
    assert_eq!(lifecycle.results(), &results[..]);
    assert!(!lifecycle.is_loading());
    assert!(lifecycle.error().is_none());
}

#[test]
fn test_failed_resolution_clears_results() {
    let mut lifecycle = SearchLifecycle::new();
    let settings = settings_with("sk", 20);

    let first = lifecycle.submit("heaps", &settings, 20).unwrap();
    assert!(lifecycle.resolve(SearchResponse {
        id: first.id,
        outcome: Ok(questions(2)),
    }));

    let second = lifecycle.submit("tries", &settings, 20).unwrap();
    let applied = lifecycle.resolve(SearchResponse {
        id: second.id,
        outcome: Err("overloaded".to_string()),
    });

    assert!(applied);
    assert!(lifecycle.results().is_empty());
    assert_eq!(lifecycle.error(), Some("overloaded"));
    assert!(!lifecycle.is_loading());
}

#[test]
fn test_previous_results_stay_visible_while_pending() {
    let mut lifecycle = SearchLifecycle::new();
    let settings = settings_with("sk", 20);

    let first = lifecycle.submit("dp", &settings, 20).unwrap();
    let first_results = questions(4);
    lifecycle.resolve(SearchResponse {
        id: first.id,
        outcome: Ok(first_results.clone()),
    });

    lifecycle.submit("greedy", &settings, 20).unwrap();

    assert!(lifecycle.is_loading());
    assert_eq!(lifecycle.results(), &first_results[..]);
}

#[test]
fn test_stale_success_after_newer_resolution_is_ignored() {
    let mut lifecycle = SearchLifecycle::new();
    let settings = settings_with("sk", 20);

    let first = lifecycle.submit("slow query", &settings, 20).unwrap();
    let second = lifecycle.submit("fast query", &settings, 20).unwrap();

    let second_results = questions(2);
    assert!(lifecycle.resolve(SearchResponse {
        id: second.id,
        outcome: Ok(second_results.clone()),
    }));

    // First request finally comes back, after the second already settled.
    assert!(!lifecycle.resolve(SearchResponse {
        id: first.id,
        outcome: Ok(questions(9)),
    }));

    assert_eq!(lifecycle.results(), &second_results[..]);
    assert!(!lifecycle.is_loading());
}

#[test]
fn test_stale_failure_cannot_clobber_newer_success() {
    let mut lifecycle = SearchLifecycle::new();
    let settings = settings_with("sk", 20);

    let first = lifecycle.submit("a", &settings, 20).unwrap();
    let second = lifecycle.submit("b", &settings, 20).unwrap();

    let second_results = questions(1);
    assert!(lifecycle.resolve(SearchResponse {
        id: second.id,
        outcome: Ok(second_results.clone()),
    }));
    assert!(!lifecycle.resolve(SearchResponse {
        id: first.id,
        outcome: Err("timed out".to_string()),
    }));

    assert_eq!(lifecycle.results(), &second_results[..]);
    assert!(lifecycle.error().is_none());
}

#[test]
fn test_stale_response_while_newer_request_pending() {
    let mut lifecycle = SearchLifecycle::new();
    let settings = settings_with("sk", 20);

    let first = lifecycle.submit("a", &settings, 20).unwrap();
    lifecycle.submit("b", &settings, 20).unwrap();

    assert!(!lifecycle.resolve(SearchResponse {
        id: first.id,
        outcome: Ok(questions(5)),
    }));

    // Still waiting on the second request.
    assert!(lifecycle.is_loading());
    assert!(lifecycle.results().is_empty());
}

#[test]
fn test_duplicate_resolution_is_ignored() {
    let mut lifecycle = SearchLifecycle::new();
    let settings = settings_with("sk", 20);

    let request = lifecycle.submit("a", &settings, 20).unwrap();
    assert!(lifecycle.resolve(SearchResponse {
        id: request.id,
        outcome: Ok(questions(1)),
    }));
    assert!(!lifecycle.resolve(SearchResponse {
        id: request.id,
        outcome: Err("late duplicate".to_string()),
    }));

    assert!(lifecycle.error().is_none());
    assert_eq!(lifecycle.results().len(), 1);
}

#[test]
fn test_settings_are_captured_at_submit_time() {
    let mut lifecycle = SearchLifecycle::new();

    let before = settings_with("old-key", 20);
    let first = lifecycle.submit("q", &before, before.max_questions).unwrap();
    assert_eq!(first.query.api_key, "old-key");
    assert_eq!(first.query.limit, 20);

    // User saves new settings while the first request is in flight.
    let after = settings_with("new-key", 5);
    let second = lifecycle.submit("q", &after, after.max_questions).unwrap();
    assert_eq!(second.query.api_key, "new-key");
    assert_eq!(second.query.limit, 5);

    // The first request's captured values are untouched.
    assert_eq!(first.query.api_key, "old-key");
    assert_eq!(first.query.limit, 20);
}

#[test]
fn test_display_is_capped_at_requested_limit() {
    let mut lifecycle = SearchLifecycle::new();
    let settings = settings_with("sk", 5);

    let request = lifecycle.submit("binary search in rotated array", &settings, 5).unwrap();

    // Server ignores the limit and returns 7 rows.
    lifecycle.resolve(SearchResponse {
        id: request.id,
        outcome: Ok(questions(7)),
    });

    assert_eq!(lifecycle.results().len(), 7);
    assert_eq!(lifecycle.display_results().len(), 5);
}

#[test]
fn test_lifecycle_is_reusable_after_failure() {
    let mut lifecycle = SearchLifecycle::new();
    let settings = settings_with("sk", 20);

    let first = lifecycle.submit("a", &settings, 20).unwrap();
    lifecycle.resolve(SearchResponse {
        id: first.id,
        outcome: Err("boom".to_string()),
    });

    let second = lifecycle.submit("b", &settings, 20).unwrap();
    assert_eq!(second.id, 2);
    assert!(lifecycle.is_loading());
    assert!(lifecycle.error().is_none());

    let results = questions(2);
    lifecycle.resolve(SearchResponse {
        id: second.id,
        outcome: Ok(results.clone()),
    });
    assert_eq!(lifecycle.results(), &results[..]);
}
