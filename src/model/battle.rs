use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Outcome of a battle from the attacker's point of view.
///
/// Records with any other stored value are reported as unspecified (`null`).
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AttackerOutcome {
    Win,
    Loss,
}

impl AttackerOutcome {
    /// Stored column value for this outcome.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Win => "win",
            Self::Loss => "loss",
        }
    }

    /// Parses a stored column value, returning `None` for anything unrecognised.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "win" => Some(Self::Win),
            "loss" => Some(Self::Loss),
            _ => None,
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BattleDto {
    pub id: i32,
    pub name: Option<String>,
    pub year: Option<i32>,
    pub battle_number: Option<i32>,
    pub attacker_king: Option<String>,
    pub defender_king: Option<String>,
    pub attacker_1: Option<String>,
    pub attacker_2: Option<String>,
    pub attacker_3: Option<String>,
    pub attacker_4: Option<String>,
    pub defender_1: Option<String>,
    pub defender_2: Option<String>,
    pub defender_3: Option<String>,
    pub defender_4: Option<String>,
    pub attacker_outcome: Option<AttackerOutcome>,
    pub battle_type: Option<String>,
    pub major_death: Option<bool>,
    pub major_capture: Option<bool>,
    pub attacker_size: Option<i32>,
    pub defender_size: Option<i32>,
    pub attacker_commander: Option<String>,
    pub defender_commander: Option<String>,
    pub summer: Option<bool>,
    pub location: Option<String>,
    pub region: Option<String>,
    pub note: Option<String>,
}

/// One record of a battle import file.
///
/// Mirrors the raw dataset layout: flags are `0`/`1` integers and the attacker
/// outcome is free text. Every field may be omitted.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
#[serde(default)]
pub struct BattleImportDto {
    pub name: Option<String>,
    pub year: Option<i32>,
    #[serde(alias = "battle_Number")]
    pub battle_number: Option<i32>,
    pub attacker_king: Option<String>,
    pub defender_king: Option<String>,
    pub attacker_1: Option<String>,
    pub attacker_2: Option<String>,
    pub attacker_3: Option<String>,
    pub attacker_4: Option<String>,
    pub defender_1: Option<String>,
    pub defender_2: Option<String>,
    pub defender_3: Option<String>,
    pub defender_4: Option<String>,
    pub attacker_outcome: Option<String>,
    pub battle_type: Option<String>,
    pub major_death: Option<i32>,
    pub major_capture: Option<i32>,
    pub attacker_size: Option<i32>,
    pub defender_size: Option<i32>,
    pub attacker_commander: Option<String>,
    pub defender_commander: Option<String>,
    pub summer: Option<i32>,
    pub location: Option<String>,
    pub region: Option<String>,
    pub note: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct MostActiveDto {
    pub attacker_king: u64,
    pub defender_king: u64,
    pub region: u64,
    pub name: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AttackerOutcomeStatsDto {
    pub win: u64,
    pub loss: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct DefenderSizeStatsDto {
    pub average: Option<f64>,
    pub min: Option<i64>,
    pub max: Option<i64>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BattleStatsDto {
    pub most_active: MostActiveDto,
    pub attacker_outcome: AttackerOutcomeStatsDto,
    pub battle_type: Vec<String>,
    pub defender_size: DefenderSizeStatsDto,
}
