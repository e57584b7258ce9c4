//! The visibility policy.
//!
//! | session              | tip.is_vip | outcome   |
//! |----------------------|------------|-----------|
//! | absent               | any        | `Gated`   |
//! | present, no VIP/admin| true       | `Locked`  |
//! | present, no VIP/admin| false      | `Visible` |
//! | present, VIP or admin| any        | `Visible` |
//!
//! Session absence is checked first, so anonymous visitors only ever see the
//! login gate, never the VIP unlock prompt.

use payday_core::constants::{LOGIN_PROMPT, VIP_PROMPT};
use payday_core::{Tip, User};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    /// No session: content blurred behind a login prompt.
    Gated,
    /// Signed in without VIP: content blurred behind the unlock prompt.
    Locked,
    Visible,
}

impl Visibility {
    pub fn is_blurred(&self) -> bool {
        !matches!(self, Self::Visible)
    }

    /// Call to action shown over blurred content.
    pub fn prompt(&self) -> Option<&'static str> {
        match self {
            Self::Gated => Some(LOGIN_PROMPT),
            Self::Locked => Some(VIP_PROMPT),
            Self::Visible => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gated => "gated",
            Self::Locked => "locked",
            Self::Visible => "visible",
        }
    }
}

pub fn visibility(session: Option<&User>, tip: &Tip) -> Visibility {
    let Some(user) = session else {
        return Visibility::Gated;
    };
    if tip.is_vip && !user.can_view_vip() {
        Visibility::Locked
    } else {
        Visibility::Visible
    }
}

/// Whether the VIP section header carries the "LOCKED" badge.
/// Anonymous visitors see it too.
pub fn vip_section_locked(session: Option<&User>) -> bool {
    !session.is_some_and(User::can_view_vip)
}

/// A tip paired with the decision for it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GatedTip<'a> {
    pub tip: &'a Tip,
    pub visibility: Visibility,
}

pub fn gate_tips<'a>(session: Option<&User>, tips: &'a [Tip]) -> Vec<GatedTip<'a>> {
    tips.iter()
        .map(|tip| GatedTip {
            tip,
            visibility: visibility(session, tip),
        })
        .collect()
}
