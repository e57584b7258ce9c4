//! Text rendering for tips, plans and the session.

use std::fmt::Write;

use payday_access::{gate_tips, vip_section_locked, TipSections};
use payday_admin::BoardStats;
use payday_core::{Notice, NoticeLevel, Plan, Tip, User};

const MASK: &str = "••••••";

pub fn notice(notice: &Notice) -> String {
    let tag = match notice.level {
        NoticeLevel::Success => "ok",
        NoticeLevel::Info => "info",
        NoticeLevel::Error => "error",
    };
    format!("[{tag}] {}", notice.message)
}

pub fn user(user: &User) -> String {
    let mut out = format!("{} <{}>", user.display_name(), user.email);
    if user.is_vip {
        out.push_str(" · VIP");
    }
    if user.is_admin {
        out.push_str(" · admin");
    }
    out
}

fn kickoff(tip: &Tip) -> String {
    match tip.kickoff() {
        Some(ts) => ts.format("%d %b %Y, %H:%M UTC").to_string(),
        None => tip.time.clone(),
    }
}

/// One tip card. Blurred tips keep their shape but mask every field.
pub fn tip_card(tip: &Tip, blurred: bool, prompt: Option<&str>) -> String {
    let mut out = String::new();
    let badge = if tip.is_vip { "[VIP] " } else { "" };
    if blurred {
        let _ = writeln!(out, "  {badge}{MASK} vs {MASK}");
        let _ = writeln!(out, "    Prediction: {MASK}  Odds: {MASK}  Confidence: {MASK}");
        if let Some(prompt) = prompt {
            let _ = writeln!(out, "    🔒 {prompt}");
        }
        return out;
    }
    let _ = writeln!(
        out,
        "  {badge}{}  ({} · {})",
        tip.fixture(),
        tip.league,
        kickoff(tip)
    );
    let _ = writeln!(
        out,
        "    Prediction: {}  Odds: {}  Confidence: {}%  [{}]",
        tip.prediction,
        tip.odds,
        tip.confidence,
        tip.status.as_str()
    );
    out
}

pub fn tips(session: Option<&User>, sections: &TipSections) -> String {
    let mut out = String::from("Today's Free Tips\n");
    if sections.free.is_empty() {
        out.push_str("  No free tips available.\n");
    }
    for gated in gate_tips(session, &sections.free) {
        let v = gated.visibility;
        out.push_str(&tip_card(gated.tip, v.is_blurred(), v.prompt()));
    }

    out.push_str("\nVIP Exclusive Picks");
    if vip_section_locked(session) {
        out.push_str("  [LOCKED]");
    }
    out.push('\n');
    if sections.vip.is_empty() {
        out.push_str("  No VIP tips available.\n");
    }
    for gated in gate_tips(session, &sections.vip) {
        let v = gated.visibility;
        out.push_str(&tip_card(gated.tip, v.is_blurred(), v.prompt()));
    }
    out
}

pub fn plan(plan: &Plan, whatsapp: &str) -> String {
    let mut out = String::new();
    let popular = if plan.popular { "  ★ Most popular" } else { "" };
    let _ = writeln!(out, "{} - {} {}{popular}", plan.name, plan.price, plan.period);
    for feature in plan.features {
        let _ = writeln!(out, "  ✓ {feature}");
    }
    let _ = writeln!(out, "  Pay via WhatsApp: {whatsapp}");
    out
}

pub fn board_stats(stats: &BoardStats) -> String {
    format!(
        "Total Tips: {}\nVIP Tips: {}\nWon: {}\nPending: {}\n",
        stats.total, stats.vip, stats.won, stats.pending
    )
}
