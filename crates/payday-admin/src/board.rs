//! TipBoard: the admin's working list of tips.

use payday_core::{Tip, TipStatus};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::errors::BoardError;

/// Confidence a new tip starts with when the admin does not set one.
pub const DEFAULT_CONFIDENCE: u8 = 75;

/// A tip on the board, keyed by a board-local id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardTip {
    pub id: Uuid,
    #[serde(flatten)]
    pub tip: Tip,
}

/// Draft of a tip to add. Only the teams and the prediction are required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewTip {
    pub home_team: String,
    pub away_team: String,
    pub league: String,
    pub prediction: String,
    pub odds: String,
    pub confidence: u8,
    pub time: String,
    pub is_vip: bool,
}

impl Default for NewTip {
    fn default() -> Self {
        Self {
            home_team: String::new(),
            away_team: String::new(),
            league: String::new(),
            prediction: String::new(),
            odds: String::new(),
            confidence: DEFAULT_CONFIDENCE,
            time: String::new(),
            is_vip: false,
        }
    }
}

impl NewTip {
    fn check(&self) -> Result<(), BoardError> {
        for (field, value) in [
            ("homeTeam", &self.home_team),
            ("awayTeam", &self.away_team),
            ("prediction", &self.prediction),
        ] {
            if value.trim().is_empty() {
                return Err(BoardError::MissingField { field });
            }
        }
        Ok(())
    }

    fn into_tip(self) -> Tip {
        Tip {
            home_team: self.home_team.trim().to_string(),
            away_team: self.away_team.trim().to_string(),
            league: self.league.trim().to_string(),
            prediction: self.prediction.trim().to_string(),
            odds: self.odds.trim().to_string(),
            confidence: self.confidence.min(100),
            time: self.time.trim().to_string(),
            is_vip: self.is_vip,
            status: TipStatus::Pending,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BoardStats {
    pub total: usize,
    pub vip: usize,
    pub won: usize,
    pub pending: usize,
}

/// Ordered list of tips under curation. Insertion order is kept.
#[derive(Debug, Clone, Default)]
pub struct TipBoard {
    tips: Vec<BoardTip>,
}

impl TipBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the board with a fetched snapshot, assigning fresh ids.
    pub fn from_tips(tips: impl IntoIterator<Item = Tip>) -> Self {
        let tips: Vec<BoardTip> = tips
            .into_iter()
            .map(|tip| BoardTip {
                id: Uuid::new_v4(),
                tip,
            })
            .collect();
        debug!(count = tips.len(), "Tip board seeded");
        Self { tips }
    }

    /// Append a pending tip. Returns its id.
    pub fn add(&mut self, draft: NewTip) -> Result<Uuid, BoardError> {
        draft.check()?;
        let id = Uuid::new_v4();
        let tip = draft.into_tip();
        info!(%id, fixture = %tip.fixture(), vip = tip.is_vip, "Tip added");
        self.tips.push(BoardTip { id, tip });
        Ok(id)
    }

    pub fn delete(&mut self, id: Uuid) -> Result<BoardTip, BoardError> {
        let index = self.position(id)?;
        info!(%id, "Tip deleted");
        Ok(self.tips.remove(index))
    }

    /// Mark a tip won or lost. Settling again overwrites the earlier result.
    pub fn settle(&mut self, id: Uuid, status: TipStatus) -> Result<&BoardTip, BoardError> {
        if status == TipStatus::Pending {
            return Err(BoardError::InvalidSettlement);
        }
        let index = self.position(id)?;
        let entry = &mut self.tips[index];
        entry.tip.status = status;
        info!(%id, status = status.as_str(), "Tip settled");
        Ok(entry)
    }

    pub fn get(&self, id: Uuid) -> Option<&BoardTip> {
        self.tips.iter().find(|t| t.id == id)
    }

    pub fn tips(&self) -> &[BoardTip] {
        &self.tips
    }

    pub fn stats(&self) -> BoardStats {
        self.tips.iter().fold(BoardStats::default(), |mut stats, entry| {
            stats.total += 1;
            if entry.tip.is_vip {
                stats.vip += 1;
            }
            match entry.tip.status {
                TipStatus::Won => stats.won += 1,
                TipStatus::Pending => stats.pending += 1,
                TipStatus::Lost => {}
            }
            stats
        })
    }

    pub fn len(&self) -> usize {
        self.tips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tips.is_empty()
    }

    fn position(&self, id: Uuid) -> Result<usize, BoardError> {
        self.tips
            .iter()
            .position(|t| t.id == id)
            .ok_or(BoardError::NotFound(id))
    }
}
