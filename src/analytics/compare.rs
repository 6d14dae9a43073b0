//! Head-to-head player comparison.

use serde::Serialize;
use serde_json::Value;

/// The stats extracted from one side of a comparison.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerSnapshot {
    pub name: String,
    pub tag: String,
    pub trophies: i64,
    pub highest_trophies: i64,
    pub exp_level: i64,
    pub brawler_count: usize,
    pub victories_3vs3: i64,
    pub solo_victories: i64,
    pub duo_victories: i64,
}

/// Two player snapshots plus derived differentials and winner labels.
#[derive(Debug, Clone, Serialize)]
pub struct Comparison {
    pub player_a: PlayerSnapshot,
    pub player_b: PlayerSnapshot,
    pub trophy_difference: i64,
    pub level_difference: i64,
    pub brawler_count_difference: i64,
    pub higher_trophies: String,
    pub higher_level: String,
}

impl PlayerSnapshot {
    fn from_value(player: &Value) -> Self {
        Self {
            name: string_field(player, "name"),
            tag: string_field(player, "tag"),
            trophies: number_field(player, "trophies"),
            highest_trophies: number_field(player, "highestTrophies"),
            exp_level: number_field(player, "expLevel"),
            brawler_count: player["brawlers"].as_array().map_or(0, Vec::len),
            victories_3vs3: number_field(player, "3vs3Victories"),
            solo_victories: number_field(player, "soloVictories"),
            duo_victories: number_field(player, "duoVictories"),
        }
    }
}

/// Compare two already-fetched player objects.
///
/// Winner labels use strict greater-than, so an exact tie credits player B.
/// This mirrors the behavior the frontend has always displayed and is
/// covered by tests; change it only alongside a product decision.
pub fn compare(a: &Value, b: &Value) -> Comparison {
    let player_a = PlayerSnapshot::from_value(a);
    let player_b = PlayerSnapshot::from_value(b);

    let higher_trophies = if player_a.trophies > player_b.trophies {
        player_a.name.clone()
    } else {
        player_b.name.clone()
    };
    let higher_level = if player_a.exp_level > player_b.exp_level {
        player_a.name.clone()
    } else {
        player_b.name.clone()
    };

    Comparison {
        trophy_difference: player_a.trophies - player_b.trophies,
        level_difference: player_a.exp_level - player_b.exp_level,
        brawler_count_difference: player_a.brawler_count as i64 - player_b.brawler_count as i64,
        higher_trophies,
        higher_level,
        player_a,
        player_b,
    }
}

fn string_field(value: &Value, key: &str) -> String {
    value[key].as_str().unwrap_or_default().to_string()
}

fn number_field(value: &Value, key: &str) -> i64 {
    value[key].as_i64().unwrap_or(0)
}
