//! Visibility policy: every row of the decision table, plus section badges.

use payday_access::{gate_tips, vip_section_locked, visibility, Visibility};
use payday_core::constants::{LOGIN_PROMPT, VIP_PROMPT};
use payday_core::{Tip, User};

fn tip(is_vip: bool) -> Tip {
    Tip {
        home_team: "Arsenal".into(),
        away_team: "Chelsea".into(),
        is_vip,
        ..Tip::default()
    }
}

fn user(is_vip: bool, is_admin: bool) -> User {
    User {
        id: "u1".into(),
        is_vip,
        is_admin,
        ..User::default()
    }
}

// ─── Decision table ──────────────────────────────────────────────────────────

#[test]
fn anonymous_visitor_is_gated_on_free_and_vip() {
    assert_eq!(visibility(None, &tip(false)), Visibility::Gated);
    assert_eq!(visibility(None, &tip(true)), Visibility::Gated);
}

#[test]
fn regular_member_is_locked_out_of_vip_only() {
    let member = user(false, false);
    assert_eq!(visibility(Some(&member), &tip(true)), Visibility::Locked);
    assert_eq!(visibility(Some(&member), &tip(false)), Visibility::Visible);
}

#[test]
fn vip_and_admin_see_everything() {
    for viewer in [user(true, false), user(false, true), user(true, true)] {
        assert_eq!(visibility(Some(&viewer), &tip(true)), Visibility::Visible);
        assert_eq!(visibility(Some(&viewer), &tip(false)), Visibility::Visible);
    }
}

#[test]
fn anonymous_never_sees_the_vip_prompt() {
    let outcome = visibility(None, &tip(true));
    assert_eq!(outcome.prompt(), Some(LOGIN_PROMPT));
    assert_ne!(outcome.prompt(), Some(VIP_PROMPT));
}

#[test]
fn blurred_outcomes_carry_prompts() {
    assert!(Visibility::Gated.is_blurred());
    assert!(Visibility::Locked.is_blurred());
    assert!(!Visibility::Visible.is_blurred());
    assert_eq!(Visibility::Locked.prompt(), Some(VIP_PROMPT));
    assert_eq!(Visibility::Visible.prompt(), None);
}

// ─── Section badge ───────────────────────────────────────────────────────────

#[test]
fn vip_section_badge() {
    assert!(vip_section_locked(None));
    assert!(vip_section_locked(Some(&user(false, false))));
    assert!(!vip_section_locked(Some(&user(true, false))));
    assert!(!vip_section_locked(Some(&user(false, true))));
}

#[test]
fn gate_tips_preserves_order() {
    let tips = vec![tip(true), tip(false)];
    let member = user(false, false);
    let gated = gate_tips(Some(&member), &tips);
    let outcomes: Vec<_> = gated.iter().map(|g| g.visibility).collect();
    assert_eq!(outcomes, vec![Visibility::Locked, Visibility::Visible]);
}
