//! TipBoard tests.

use payday_admin::{BoardError, NewTip, TipBoard};
use payday_core::errors::error_code::{self, PaydayErrorCode};
use payday_core::{Tip, TipStatus};
use uuid::Uuid;

fn draft(home: &str, away: &str, prediction: &str) -> NewTip {
    NewTip {
        home_team: home.into(),
        away_team: away.into(),
        prediction: prediction.into(),
        league: "Premier League".into(),
        odds: "1.85".into(),
        ..NewTip::default()
    }
}

#[test]
fn added_tip_is_pending_with_default_confidence() {
    let mut board = TipBoard::new();
    let id = board.add(draft(" Arsenal ", "Chelsea", "Over 2.5 Goals")).unwrap();

    let entry = board.get(id).unwrap();
    assert_eq!(entry.tip.home_team, "Arsenal");
    assert_eq!(entry.tip.status, TipStatus::Pending);
    assert_eq!(entry.tip.confidence, 75);
    assert_eq!(board.len(), 1);
}

#[test]
fn required_fields_are_enforced() {
    let mut board = TipBoard::new();
    for (home, away, prediction, field) in [
        ("", "Chelsea", "Home Win", "homeTeam"),
        ("Arsenal", "  ", "Home Win", "awayTeam"),
        ("Arsenal", "Chelsea", "", "prediction"),
    ] {
        let err = board.add(draft(home, away, prediction)).unwrap_err();
        assert_eq!(err, BoardError::MissingField { field });
        assert_eq!(err.error_code(), error_code::BOARD_REJECTED);
    }
    assert!(board.is_empty());
}

#[test]
fn confidence_is_capped() {
    let mut board = TipBoard::new();
    let id = board
        .add(NewTip {
            confidence: 140,
            ..draft("A", "B", "Draw")
        })
        .unwrap();
    assert_eq!(board.get(id).unwrap().tip.confidence, 100);
}

#[test]
fn delete_removes_only_that_tip() {
    let mut board = TipBoard::new();
    let first = board.add(draft("A", "B", "Draw")).unwrap();
    let second = board.add(draft("C", "D", "Home Win")).unwrap();

    let removed = board.delete(first).unwrap();
    assert_eq!(removed.tip.home_team, "A");
    assert_eq!(board.tips().len(), 1);
    assert_eq!(board.tips()[0].id, second);
}

#[test]
fn unknown_id_is_not_found() {
    let mut board = TipBoard::new();
    let missing = Uuid::new_v4();
    let err = board.delete(missing).unwrap_err();
    assert_eq!(err, BoardError::NotFound(missing));
    assert_eq!(err.error_code(), error_code::NOT_FOUND);
    assert!(board.settle(missing, TipStatus::Won).is_err());
}

#[test]
fn settle_marks_won_or_lost() {
    let mut board = TipBoard::new();
    let id = board.add(draft("A", "B", "Draw")).unwrap();

    assert_eq!(board.settle(id, TipStatus::Won).unwrap().tip.status, TipStatus::Won);
    assert_eq!(board.settle(id, TipStatus::Lost).unwrap().tip.status, TipStatus::Lost);
    assert_eq!(
        board.settle(id, TipStatus::Pending).unwrap_err(),
        BoardError::InvalidSettlement
    );
}

#[test]
fn stats_count_total_vip_won_pending() {
    let tips = vec![
        Tip { is_vip: true, status: TipStatus::Won, ..Tip::default() },
        Tip { is_vip: true, status: TipStatus::Pending, ..Tip::default() },
        Tip { is_vip: false, status: TipStatus::Lost, ..Tip::default() },
        Tip { is_vip: false, status: TipStatus::Pending, ..Tip::default() },
    ];
    let board = TipBoard::from_tips(tips);
    let stats = board.stats();

    assert_eq!(stats.total, 4);
    assert_eq!(stats.vip, 2);
    assert_eq!(stats.won, 1);
    assert_eq!(stats.pending, 2);
}

#[test]
fn seeded_tips_get_distinct_ids() {
    let board = TipBoard::from_tips(vec![Tip::default(), Tip::default()]);
    assert_ne!(board.tips()[0].id, board.tips()[1].id);
}
