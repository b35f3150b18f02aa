//! Domain models for aggregate battle statistics.

use crate::model::battle::{
    AttackerOutcomeStatsDto, BattleStatsDto, DefenderSizeStatsDto, MostActiveDto,
};

/// Aggregates computed over a single snapshot of all battle records.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BattleStats {
    /// Records with a present, non-empty `attacker_king`.
    pub attacker_king_count: u64,
    /// Records with a present, non-empty `defender_king`.
    pub defender_king_count: u64,
    /// Records with a present, non-empty `region`.
    pub region_count: u64,
    /// Records with a present, non-empty `name`.
    pub name_count: u64,
    /// Records whose attacker outcome is a win.
    pub win_count: u64,
    /// Records whose attacker outcome is a loss.
    pub loss_count: u64,
    /// Distinct battle types, sorted ascending.
    pub battle_types: Vec<String>,
    /// Mean defender size over records that have one.
    pub defender_size_average: Option<f64>,
    pub defender_size_min: Option<i64>,
    pub defender_size_max: Option<i64>,
}

impl BattleStats {
    /// Converts the statistics into the nested response DTO.
    ///
    /// # Returns
    /// - `BattleStatsDto` - Grouped `most_active`, `attacker_outcome`, `battle_type`
    ///   and `defender_size` sections
    pub fn into_dto(self) -> BattleStatsDto {
        BattleStatsDto {
            most_active: MostActiveDto {
                attacker_king: self.attacker_king_count,
                defender_king: self.defender_king_count,
                region: self.region_count,
                name: self.name_count,
            },
            attacker_outcome: AttackerOutcomeStatsDto {
                win: self.win_count,
                loss: self.loss_count,
            },
            battle_type: self.battle_types,
            defender_size: DefenderSizeStatsDto {
                average: self.defender_size_average,
                min: self.defender_size_min,
                max: self.defender_size_max,
            },
        }
    }
}
