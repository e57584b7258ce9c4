//! Free/VIP split of a tips snapshot.

use payday_core::Tip;
use serde::Serialize;

/// A tips snapshot split for display, each list newest kickoff first.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TipSections {
    pub free: Vec<Tip>,
    pub vip: Vec<Tip>,
}

impl TipSections {
    pub fn len(&self) -> usize {
        self.free.len() + self.vip.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Split by `is_vip` and sort each side by kickoff, descending.
///
/// Tips whose time cannot be parsed sort after every dated tip; ties keep
/// their input order.
pub fn partition_tips(tips: Vec<Tip>) -> TipSections {
    let (mut vip, mut free): (Vec<Tip>, Vec<Tip>) = tips.into_iter().partition(|t| t.is_vip);
    sort_newest_first(&mut free);
    sort_newest_first(&mut vip);
    TipSections { free, vip }
}

fn sort_newest_first(tips: &mut [Tip]) {
    tips.sort_by_cached_key(|t| std::cmp::Reverse(t.kickoff()));
}
