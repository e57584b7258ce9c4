//! AdminMenu rule tests.

use payday_admin::AdminMenu;
use payday_client::{ProfileDirectory, TransportError};
use payday_core::config::{AdminConfig, AdminRule};
use payday_core::constants::PROFILE_PATH;
use serde_json::json;
use test_fixtures::{admin, api, member, signed_in_session, StubTransport};

fn config(rule: AdminRule, allowlist: &[&str]) -> AdminConfig {
    AdminConfig {
        rule,
        allowlist: allowlist.iter().map(|s| s.to_string()).collect(),
    }
}

fn directory(transport: std::sync::Arc<StubTransport>) -> ProfileDirectory {
    let (_, session) = signed_in_session(&admin(), "tok");
    ProfileDirectory::new(api(transport), session)
}

#[test]
fn no_session_never_sees_menu() {
    for rule in [AdminRule::SessionFlag, AdminRule::Allowlist, AdminRule::ProfileDirectory] {
        let menu = AdminMenu::new(&config(rule, &["admin@paydaypicks.test"]));
        assert!(!menu.is_visible(None).unwrap());
    }
}

#[test]
fn session_flag_rule_trusts_is_admin() {
    let menu = AdminMenu::new(&AdminConfig::default());
    assert_eq!(menu.rule(), AdminRule::SessionFlag);
    assert!(menu.is_visible(Some(&admin())).unwrap());
    assert!(!menu.is_visible(Some(&member())).unwrap());
}

#[test]
fn allowlist_rule_matches_exact_email() {
    let menu = AdminMenu::new(&config(AdminRule::Allowlist, &["jane@example.com"]));
    assert!(menu.is_visible(Some(&member())).unwrap());
    assert!(!menu.is_visible(Some(&admin())).unwrap());

    let mut shouty = member();
    shouty.email = "JANE@example.com".into();
    assert!(!menu.is_visible(Some(&shouty)).unwrap());
}

#[test]
fn profile_rule_requires_admin_record() {
    let transport = StubTransport::new();
    transport.respond(PROFILE_PATH, 200, json!([member(), admin()]));
    let menu = AdminMenu::new(&config(AdminRule::ProfileDirectory, &[]))
        .with_profiles(directory(transport.clone()));

    assert!(menu.is_visible(Some(&admin())).unwrap());
    assert!(!menu.is_visible(Some(&member())).unwrap());
    assert_eq!(transport.calls_to(PROFILE_PATH).len(), 2);
}

#[test]
fn profile_rule_without_directory_denies() {
    let menu = AdminMenu::new(&config(AdminRule::ProfileDirectory, &[]));
    assert!(!menu.is_visible(Some(&admin())).unwrap());
}

#[test]
fn profile_lookup_failure_is_an_error() {
    let transport = StubTransport::new();
    transport.fail(PROFILE_PATH, TransportError::TimedOut);
    let menu = AdminMenu::new(&config(AdminRule::ProfileDirectory, &[]))
        .with_profiles(directory(transport));
    assert!(menu.is_visible(Some(&admin())).is_err());
}
