//! Domain models for battle records and search parameters.

use crate::model::battle::{AttackerOutcome, BattleDto, BattleImportDto};

/// A historical battle record.
///
/// Every attribute is optional. Flags stored as `0`/`1` integers are exposed as
/// booleans and the attacker outcome is validated into `AttackerOutcome`.
#[derive(Debug, Clone, PartialEq)]
pub struct Battle {
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

impl Battle {
    /// Converts an entity model to a battle domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Battle` - The converted battle domain model
    pub fn from_entity(entity: entity::battle::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            year: entity.year,
            battle_number: entity.battle_number,
            attacker_king: entity.attacker_king,
            defender_king: entity.defender_king,
            attacker_1: entity.attacker_1,
            attacker_2: entity.attacker_2,
            attacker_3: entity.attacker_3,
            attacker_4: entity.attacker_4,
            defender_1: entity.defender_1,
            defender_2: entity.defender_2,
            defender_3: entity.defender_3,
            defender_4: entity.defender_4,
            attacker_outcome: entity
                .attacker_outcome
                .as_deref()
                .and_then(AttackerOutcome::parse),
            battle_type: entity.battle_type,
            major_death: entity.major_death.map(flag),
            major_capture: entity.major_capture.map(flag),
            attacker_size: entity.attacker_size,
            defender_size: entity.defender_size,
            attacker_commander: entity.attacker_commander,
            defender_commander: entity.defender_commander,
            summer: entity.summer.map(flag),
            location: entity.location,
            region: entity.region,
            note: entity.note,
        }
    }

    /// Converts the battle domain model to a DTO for API responses.
    ///
    /// # Returns
    /// - `BattleDto` - The converted battle DTO
    pub fn into_dto(self) -> BattleDto {
        BattleDto {
            id: self.id,
            name: self.name,
            year: self.year,
            battle_number: self.battle_number,
            attacker_king: self.attacker_king,
            defender_king: self.defender_king,
            attacker_1: self.attacker_1,
            attacker_2: self.attacker_2,
            attacker_3: self.attacker_3,
            attacker_4: self.attacker_4,
            defender_1: self.defender_1,
            defender_2: self.defender_2,
            defender_3: self.defender_3,
            defender_4: self.defender_4,
            attacker_outcome: self.attacker_outcome,
            battle_type: self.battle_type,
            major_death: self.major_death,
            major_capture: self.major_capture,
            attacker_size: self.attacker_size,
            defender_size: self.defender_size,
            attacker_commander: self.attacker_commander,
            defender_commander: self.defender_commander,
            summer: self.summer,
            location: self.location,
            region: self.region,
            note: self.note,
        }
    }
}

fn flag(value: i32) -> bool {
    value != 0
}

/// Parameters for inserting a battle record, typically from an import file.
///
/// Values are kept in their stored representation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateBattleParams {
    pub name: Option<String>,
    pub year: Option<i32>,
    pub battle_number: Option<i32>,
    pub attacker_king: Option<String>,
    pub defender_king: Option<String>,
    pub attackers: [Option<String>; 4],
    pub defenders: [Option<String>; 4],
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

impl CreateBattleParams {
    /// Converts one import file record into insert parameters.
    pub fn from_import(dto: BattleImportDto) -> Self {
        Self {
            name: dto.name,
            year: dto.year,
            battle_number: dto.battle_number,
            attacker_king: dto.attacker_king,
            defender_king: dto.defender_king,
            attackers: [dto.attacker_1, dto.attacker_2, dto.attacker_3, dto.attacker_4],
            defenders: [dto.defender_1, dto.defender_2, dto.defender_3, dto.defender_4],
            attacker_outcome: dto.attacker_outcome,
            battle_type: dto.battle_type,
            major_death: dto.major_death,
            major_capture: dto.major_capture,
            attacker_size: dto.attacker_size,
            defender_size: dto.defender_size,
            attacker_commander: dto.attacker_commander,
            defender_commander: dto.defender_commander,
            summer: dto.summer,
            location: dto.location,
            region: dto.region,
            note: dto.note,
        }
    }
}

/// Optional filters for battle search.
///
/// Each supplied filter contributes one clause to a conjunctive query; `None`
/// leaves that dimension unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BattleSearchParams {
    /// Matches `attacker_king` or `defender_king`.
    pub king: Option<String>,
    /// Matches `battle_type` exactly.
    pub battle_type: Option<String>,
    /// Matches `region` or `location`.
    pub location: Option<String>,
    /// Matches any of `attacker_1` through `attacker_4`.
    pub attacker: Option<String>,
    /// Matches any of `defender_1` through `defender_4`.
    pub defender: Option<String>,
}

impl BattleSearchParams {
    /// Builds search parameters from raw query values, treating empty strings as absent.
    pub fn new(
        king: Option<String>,
        battle_type: Option<String>,
        location: Option<String>,
        attacker: Option<String>,
        defender: Option<String>,
    ) -> Self {
        Self {
            king: non_empty(king),
            battle_type: non_empty(battle_type),
            location: non_empty(location),
            attacker: non_empty(attacker),
            defender: non_empty(defender),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
