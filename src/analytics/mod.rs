//! Battle-log analytics.
//!
//! Reduces the upstream battle log into summary statistics: win/loss/draw
//! counts, win rate, and the most played mode and star brawler. The battle
//! log arrives most-recent-first from upstream and is consumed in that
//! order; only the [`RECENT_BATTLE_WINDOW`] newest entries feed the summary.

pub mod compare;

use serde::Serialize;
use serde_json::Value;

pub use compare::{compare, Comparison, PlayerSnapshot};

/// How many of the most recent battles the summary considers.
pub const RECENT_BATTLE_WINDOW: usize = 25;

/// Aggregate statistics over a player's recent battles.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceSummary {
    pub total_battles: u32,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    /// Percentage rounded to two decimals; 0 when there are no battles.
    pub win_rate: f64,
    pub most_played_mode: Option<String>,
    pub most_played_brawler: Option<String>,
}

/// One battle-log entry as consumed by the aggregator.
///
/// Upstream entries are deeply nested and loosely typed; this view pulls
/// out only the fields the summary needs, with an `unknown` fallback for
/// anything missing.
#[derive(Debug, Clone)]
struct BattleRecord {
    result: BattleResult,
    mode: String,
    star_brawler: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BattleResult {
    Win,
    Loss,
    Draw,
}

impl BattleRecord {
    fn from_value(entry: &Value) -> Self {
        let battle = &entry["battle"];

        let result = match battle["result"].as_str() {
            Some("victory") => BattleResult::Win,
            Some("defeat") => BattleResult::Loss,
            _ => BattleResult::Draw,
        };

        // Mode lives under `battle`, with `event` as a fallback on some
        // battle types.
        let mode = battle["mode"]
            .as_str()
            .or_else(|| entry["event"]["mode"].as_str())
            .unwrap_or("unknown")
            .to_string();

        let star_brawler = battle["starPlayer"]["brawler"]["name"]
            .as_str()
            .unwrap_or("unknown")
            .to_string();

        Self {
            result,
            mode,
            star_brawler,
        }
    }
}

/// Summarize a battle log into a [`PerformanceSummary`].
///
/// Only the first `min(len, 25)` entries are considered; the caller
/// guarantees most-recent-first ordering and no re-sort happens here.
pub fn summarize(battles: &[Value]) -> PerformanceSummary {
    let records: Vec<BattleRecord> = battles
        .iter()
        .take(RECENT_BATTLE_WINDOW)
        .map(BattleRecord::from_value)
        .collect();

    let total = records.len() as u32;
    let mut wins = 0u32;
    let mut losses = 0u32;
    let mut draws = 0u32;

    // First-seen insertion order is the tie-break for "most played", so
    // tallies go through an order-preserving scan rather than a HashMap.
    let mut mode_counts: Vec<(String, u32)> = Vec::new();
    let mut brawler_counts: Vec<(String, u32)> = Vec::new();

    for record in &records {
        match record.result {
            BattleResult::Win => wins += 1,
            BattleResult::Loss => losses += 1,
            BattleResult::Draw => draws += 1,
        }
        bump(&mut mode_counts, &record.mode);
        bump(&mut brawler_counts, &record.star_brawler);
    }

    PerformanceSummary {
        total_battles: total,
        wins,
        losses,
        draws,
        win_rate: win_rate(wins, total),
        most_played_mode: first_max(&mode_counts),
        most_played_brawler: first_max(&brawler_counts),
    }
}

/// Win rate over the entire supplied battle list, without the recent-window
/// cap. Returns 0 for an empty list.
pub fn win_rate_over_all(battles: &[Value]) -> f64 {
    let wins = battles
        .iter()
        .filter(|b| b["battle"]["result"].as_str() == Some("victory"))
        .count() as u32;
    win_rate(wins, battles.len() as u32)
}

fn win_rate(wins: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let rate = wins as f64 / total as f64 * 100.0;
    (rate * 100.0).round() / 100.0
}

fn bump(counts: &mut Vec<(String, u32)>, key: &str) {
    match counts.iter_mut().find(|(k, _)| k == key) {
        Some((_, c)) => *c += 1,
        None => counts.push((key.to_string(), 1)),
    }
}

/// Strict first-max scan: the earliest-inserted key wins ties.
fn first_max(counts: &[(String, u32)]) -> Option<String> {
    let mut best: Option<(&str, u32)> = None;
    for (key, count) in counts {
        match best {
            Some((_, c)) if *count <= c => {}
            _ => best = Some((key, *count)),
        }
    }
    best.map(|(key, _)| key.to_string())
}
