//! 用户名表单端到端场景

mod common;

use std::time::{Duration, Instant};

use common::{empty_form, form_with_history, RecordingHost, BLUR_DELAY};
use grindmap_core::{
    can_fetch, normalize, FetchDecision, FetchRejection, IdentifierError, KeyOutcome,
    KeyValueStore, NavKey, Platform, HISTORY_KEY,
};

#[test]
fn bare_identifier_normalizes_to_itself() {
    for platform in Platform::ALL {
        let result = normalize(platform, "tourist");
        assert_eq!(result.value, "tourist");
        assert!(result.is_ok());
    }
}

#[test]
fn profile_link_normalizes_to_identifier() {
    for platform in Platform::ALL {
        let link = format!("https://{}tourist/extra?x=1", platform.config().url_fragment);
        let result = normalize(platform, &link);
        assert_eq!(result.value, "tourist", "{platform}");
        assert!(result.is_ok());
    }
}

#[test]
fn foreign_link_reports_platform_name() {
    let result = normalize(Platform::CodeChef, "https://leetcode.com/tourist");
    let error = result.error.unwrap();
    assert_eq!(error.to_string(), "Not a valid CodeChef URL");
    assert!(matches!(error, IdentifierError::NotAPlatformUrl { .. }));
}

#[test]
fn typed_identifier_fetches_and_is_remembered() {
    let (mut form, backing) = empty_form();
    let mut host = RecordingHost::default();

    form.input(Platform::LeetCode, "tourist", &mut host);
    assert!(can_fetch(form.fields()));

    let decision = form.request_fetch(&mut host);
    assert!(decision.is_accepted());
    assert_eq!(host.fetches.len(), 1);
    assert_eq!(host.fetches[0].username(Platform::LeetCode), Some("tourist"));
    assert_eq!(form.history(Platform::LeetCode), ["tourist"]);

    let saved = backing.get(HISTORY_KEY).unwrap().unwrap();
    assert_eq!(saved, r#"{"leetcode":["tourist"]}"#);

    form.focus_gained(Platform::LeetCode);
    assert!(form.dropdown_visible(Platform::LeetCode));
}

#[test]
fn repeated_fetch_does_not_duplicate_history() {
    let (mut form, _) = empty_form();
    let mut host = RecordingHost::default();

    form.input(Platform::Codeforces, "tourist", &mut host);
    form.request_fetch(&mut host);
    form.request_fetch(&mut host);

    assert_eq!(form.history(Platform::Codeforces), ["tourist"]);
    assert_eq!(host.fetches.len(), 2);
}

#[test]
fn sixth_identifier_evicts_the_oldest() {
    let (mut form, _) = form_with_history(r#"{"codechef": ["e", "d", "c", "b", "a"]}"#);
    let mut host = RecordingHost::default();

    form.input(Platform::CodeChef, "f", &mut host);
    form.request_fetch(&mut host);

    assert_eq!(form.history(Platform::CodeChef), ["f", "e", "d", "c", "b"]);
}

#[test]
fn gate_refuses_empty_and_invalid_forms() {
    let (mut form, _) = empty_form();
    let mut host = RecordingHost::default();

    assert_eq!(
        form.request_fetch(&mut host),
        FetchDecision::Rejected(FetchRejection::AllEmpty)
    );

    form.input(Platform::LeetCode, "tourist", &mut host);
    form.input(Platform::CodeChef, "not-valid", &mut host);
    assert!(!form.fetch_enabled());
    assert_eq!(
        form.request_fetch(&mut host),
        FetchDecision::Rejected(FetchRejection::HasErrors)
    );
    assert!(host.fetches.is_empty());
    assert!(form.history(Platform::LeetCode).is_empty());
}

#[test]
fn keyboard_selection_commits_highlighted_entry() {
    let (mut form, _) = form_with_history(r#"{"codeforces": ["a", "b", "c"]}"#);
    let mut host = RecordingHost::default();

    form.focus_gained(Platform::Codeforces);
    assert_eq!(form.handle_key(NavKey::Down, &mut host), KeyOutcome::Consumed);
    assert_eq!(form.handle_key(NavKey::Down, &mut host), KeyOutcome::Consumed);
    assert_eq!(form.highlighted(), Some(1));

    assert_eq!(form.handle_key(NavKey::Enter, &mut host), KeyOutcome::Consumed);
    assert_eq!(form.value(Platform::Codeforces), "b");
    assert_eq!(form.focused(), None);
    assert_eq!(form.highlighted(), None);
    assert_eq!(host.changes, [(Platform::Codeforces, "b".to_string())]);
}

#[test]
fn down_stops_at_last_entry() {
    let (mut form, _) = form_with_history(r#"{"codeforces": ["a", "b"]}"#);
    let mut host = RecordingHost::default();

    form.focus_gained(Platform::Codeforces);
    for _ in 0..5 {
        form.handle_key(NavKey::Down, &mut host);
    }
    assert_eq!(form.highlighted(), Some(1));
}

#[test]
fn navigation_keys_are_ignored_without_history() {
    let (mut form, _) = empty_form();
    let mut host = RecordingHost::default();

    form.focus_gained(Platform::LeetCode);
    assert_eq!(form.handle_key(NavKey::Down, &mut host), KeyOutcome::Ignored);
    assert_eq!(form.handle_key(NavKey::Enter, &mut host), KeyOutcome::Ignored);
}

#[test]
fn removing_highlighted_tail_clamps_highlight() {
    let (mut form, backing) = form_with_history(r#"{"codeforces": ["a", "b", "c"]}"#);

    form.focus_gained(Platform::Codeforces);
    form.hover(2);
    form.remove_item(Platform::Codeforces, 1);

    assert_eq!(form.history(Platform::Codeforces), ["a", "c"]);
    assert_eq!(form.highlighted(), Some(1));
    assert_eq!(form.focused(), Some(Platform::Codeforces));

    let saved = backing.get(HISTORY_KEY).unwrap().unwrap();
    assert_eq!(saved, r#"{"codeforces":["a","c"]}"#);
}

#[test]
fn click_after_blur_still_commits() {
    let (mut form, _) = form_with_history(r#"{"leetcode": ["a", "b"]}"#);
    let mut host = RecordingHost::default();
    let start = Instant::now();

    form.focus_gained(Platform::LeetCode);
    form.focus_lost(start);
    assert!(form.dropdown_visible(Platform::LeetCode));

    assert!(!form.tick(start + Duration::from_millis(50)));
    form.click_item(Platform::LeetCode, 1, &mut host);

    assert_eq!(form.value(Platform::LeetCode), "b");
    assert_eq!(form.focused(), None);
}

#[test]
fn blur_closes_dropdown_after_delay() {
    let (mut form, _) = form_with_history(r#"{"leetcode": ["a"]}"#);
    let start = Instant::now();

    form.focus_gained(Platform::LeetCode);
    form.focus_lost(start);
    assert!(form.tick(start + BLUR_DELAY));
    assert!(!form.dropdown_visible(Platform::LeetCode));
}

#[test]
fn refocus_cancels_pending_blur() {
    let (mut form, _) = form_with_history(r#"{"leetcode": ["a"], "codechef": ["b"]}"#);
    let start = Instant::now();

    form.focus_gained(Platform::LeetCode);
    form.focus_lost(start);
    form.focus_gained(Platform::CodeChef);

    assert!(!form.tick(start + BLUR_DELAY * 2));
    assert_eq!(form.focused(), Some(Platform::CodeChef));
}

#[test]
fn malformed_history_starts_empty() {
    let (form, _) = form_with_history("[1, 2, 3]");
    for platform in Platform::ALL {
        assert!(form.history(platform).is_empty());
    }
}
