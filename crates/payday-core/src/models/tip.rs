//! Match prediction records.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Settlement state of a tip.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TipStatus {
    #[default]
    Pending,
    Won,
    Lost,
}

impl TipStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Won => "won",
            Self::Lost => "lost",
        }
    }
}

/// A single match prediction, free or VIP-gated.
///
/// The client only ever holds a read-only snapshot of what the backend returned.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tip {
    #[serde(default)]
    pub home_team: String,
    #[serde(default)]
    pub away_team: String,
    #[serde(default)]
    pub league: String,
    #[serde(default)]
    pub prediction: String,
    #[serde(default, deserialize_with = "deserialize_odds")]
    pub odds: String,
    #[serde(
        default,
        alias = "confidenceScore",
        deserialize_with = "deserialize_confidence"
    )]
    pub confidence: u8,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub is_vip: bool,
    #[serde(default)]
    pub status: TipStatus,
}

impl Tip {
    /// Kickoff time parsed from `time`. Accepts RFC 3339, a naive
    /// `YYYY-MM-DDTHH:MM[:SS]` timestamp (read as UTC) or a bare date.
    pub fn kickoff(&self) -> Option<DateTime<Utc>> {
        parse_kickoff(&self.time)
    }

    pub fn fixture(&self) -> String {
        format!("{} vs {}", self.home_team, self.away_team)
    }
}

pub fn parse_kickoff(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Confidence arrives as a number (78, 78.4) or a numeric string ("78").
/// Anything unreadable is 0; the rest is clamped to 0..=100.
fn deserialize_confidence<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Confidence {
        Number(f64),
        Text(String),
    }

    let raw = match Option::<Confidence>::deserialize(deserializer)? {
        Some(Confidence::Number(n)) => n,
        Some(Confidence::Text(s)) => s
            .trim()
            .trim_end_matches('%')
            .trim_end()
            .parse::<f64>()
            .unwrap_or(0.0),
        None => 0.0,
    };
    if raw.is_nan() {
        return Ok(0);
    }
    Ok(raw.clamp(0.0, 100.0).round() as u8)
}

/// Odds arrive as either a string ("1.85") or a bare number.
fn deserialize_odds<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Odds {
        Text(String),
        Number(f64),
    }

    Ok(match Option::<Odds>::deserialize(deserializer)? {
        Some(Odds::Text(s)) => s,
        Some(Odds::Number(n)) => format!("{n:.2}"),
        None => String::new(),
    })
}
