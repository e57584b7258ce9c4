//! Wire-format behaviour of the data model.

use payday_core::models::{PaymentRequest, Tip, TipStatus, User};
use serde_json::json;

// ─── User ────────────────────────────────────────────────────────────────────

#[test]
fn user_with_only_id_and_vip_flag_decodes() {
    let user: User = serde_json::from_value(json!({ "id": "u1", "isVip": false })).unwrap();
    assert_eq!(user.id, "u1");
    assert_eq!(user.name, "");
    assert!(!user.is_vip);
    assert!(!user.is_admin);
}

#[test]
fn user_accepts_document_id_and_full_name() {
    let user: User = serde_json::from_value(json!({
        "_id": "65a1",
        "fullName": "Jane Wanjiru",
        "email": "jane@example.com",
        "isAdmin": true
    }))
    .unwrap();
    assert_eq!(user.id, "65a1");
    assert_eq!(user.name, "Jane Wanjiru");
    assert!(user.can_view_vip(), "admins see VIP content");
}

#[test]
fn user_with_both_id_keys_and_both_name_keys_decodes() {
    let user: User = serde_json::from_value(json!({
        "_id": "abc",
        "id": "abc",
        "name": "Jane",
        "fullName": "Jane Wanjiru",
        "email": "jane@example.com",
        "isVip": true
    }))
    .unwrap();
    assert_eq!(user.id, "abc");
    assert_eq!(user.name, "Jane");
    assert!(user.is_vip);
}

#[test]
fn document_id_fills_in_when_id_is_null() {
    let user: User = serde_json::from_value(json!({ "id": null, "_id": "65a1" })).unwrap();
    assert_eq!(user.id, "65a1");
}

#[test]
fn user_serializes_camel_case() {
    let user = User {
        id: "u1".into(),
        name: "Jane".into(),
        email: "jane@example.com".into(),
        is_vip: true,
        is_admin: false,
    };
    let value = serde_json::to_value(&user).unwrap();
    assert_eq!(value["isVip"], json!(true));
    assert_eq!(value["isAdmin"], json!(false));
    assert_eq!(value["id"], json!("u1"));
    assert_eq!(value["name"], json!("Jane"));

    let back: User = serde_json::from_value(value).unwrap();
    assert_eq!(back, user);
}

#[test]
fn blank_user_id_is_treated_as_missing() {
    let user = User {
        id: "   ".into(),
        ..User::default()
    };
    assert_eq!(user.user_id(), None);
}

#[test]
fn display_name_falls_back_to_email() {
    let user = User {
        email: "otieno@example.com".into(),
        ..User::default()
    };
    assert_eq!(user.display_name(), "otieno");
}

// ─── Tip ─────────────────────────────────────────────────────────────────────

#[test]
fn tip_decodes_backend_shape() {
    let tip: Tip = serde_json::from_value(json!({
        "homeTeam": "Arsenal",
        "awayTeam": "Chelsea",
        "league": "Premier League",
        "prediction": "Over 2.5 Goals",
        "odds": "1.85",
        "confidence": 78,
        "time": "2025-03-01T17:30:00.000Z",
        "isVip": false,
        "status": "won"
    }))
    .unwrap();
    assert_eq!(tip.fixture(), "Arsenal vs Chelsea");
    assert_eq!(tip.confidence, 78);
    assert_eq!(tip.status, TipStatus::Won);
    assert!(tip.kickoff().is_some());
}

#[test]
fn tip_defaults_status_and_vip() {
    let tip: Tip = serde_json::from_value(json!({
        "homeTeam": "Gor Mahia",
        "awayTeam": "AFC Leopards",
        "odds": 2.1,
        "confidenceScore": 140
    }))
    .unwrap();
    assert_eq!(tip.status, TipStatus::Pending);
    assert!(!tip.is_vip);
    assert_eq!(tip.odds, "2.10");
    assert_eq!(tip.confidence, 100, "confidence is clamped to 100");
}

#[test]
fn tip_confidence_accepts_numeric_strings() {
    for (raw, expected) in [(json!("85"), 85), (json!(" 62.6 "), 63), (json!("90%"), 90), (json!("high"), 0)] {
        let tip: Tip = serde_json::from_value(json!({
            "homeTeam": "A", "awayTeam": "B", "confidence": raw
        }))
        .unwrap();
        assert_eq!(tip.confidence, expected);
    }
}

#[test]
fn tip_without_teams_still_decodes() {
    let tips: Vec<Tip> = serde_json::from_value(json!([
        { "homeTeam": "Arsenal", "prediction": "Home Win" },
        { "homeTeam": "Gor Mahia", "awayTeam": "AFC Leopards", "confidence": "70" }
    ]))
    .unwrap();
    assert_eq!(tips.len(), 2);
    assert_eq!(tips[0].away_team, "");
    assert_eq!(tips[1].confidence, 70);
}

#[test]
fn kickoff_parses_common_shapes() {
    let mut tip = Tip::default();
    for raw in ["2025-03-01T17:30:00+03:00", "2025-03-01T17:30", "2025-03-01"] {
        tip.time = raw.to_string();
        assert!(tip.kickoff().is_some(), "should parse {raw}");
    }
    tip.time = "Today, 17:30".to_string();
    assert!(tip.kickoff().is_none());
}

// ─── Payment request ─────────────────────────────────────────────────────────

#[test]
fn payment_request_wire_shape() {
    let req = PaymentRequest {
        phone: "254712345678".into(),
        plan: "Monthly VIP".into(),
        amount: 1500,
        user_id: "u1".into(),
    };
    assert_eq!(
        serde_json::to_value(&req).unwrap(),
        json!({ "phone": "254712345678", "plan": "Monthly VIP", "amount": 1500, "userId": "u1" })
    );
}
