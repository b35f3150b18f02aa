//! Battle fixtures for creating in-memory test data.
//!
//! Provides fixture functions for creating battle entity models without database insertion.
//! These are useful for unit testing domain conversions and as defaults for the battle factory.

use entity::battle;

/// Default test battle name.
pub const DEFAULT_NAME: &str = "Battle of the Green Fork";

/// Default test battle year.
pub const DEFAULT_YEAR: i32 = 298;

/// Creates a battle entity model with default values.
///
/// Only `id`, `name` and `year` are populated; every other column is `None`.
///
/// # Returns
/// - `battle::Model` - In-memory battle entity
pub fn entity() -> battle::Model {
    entity_builder().build()
}

/// Creates a battle entity builder for customization.
///
/// # Returns
/// - `BattleEntityBuilder` - Builder instance with default values
///
/// # Example
///
/// ```rust,ignore
/// let battle = fixture::battle::entity_builder()
///     .attacker_king("Robb Stark")
///     .defender_size(2000)
///     .build();
/// ```
pub fn entity_builder() -> BattleEntityBuilder {
    BattleEntityBuilder::default()
}

/// Builder for creating customized battle entity models.
///
/// Wraps a `battle::Model` and exposes setters for the columns tests filter and
/// aggregate on. Attacker and defender name slots are filled in order from the
/// provided list, at most four each.
pub struct BattleEntityBuilder {
    model: battle::Model,
}

impl Default for BattleEntityBuilder {
    fn default() -> Self {
        Self {
            model: battle::Model {
                id: 1,
                name: Some(DEFAULT_NAME.to_string()),
                year: Some(DEFAULT_YEAR),
                ..Default::default()
            },
        }
    }
}

impl BattleEntityBuilder {
    /// Sets the record ID.
    pub fn id(mut self, id: i32) -> Self {
        self.model.id = id;
        self
    }

    /// Sets the battle name; `None` leaves the column empty.
    pub fn name(mut self, name: Option<&str>) -> Self {
        self.model.name = name.map(str::to_string);
        self
    }

    pub fn year(mut self, year: i32) -> Self {
        self.model.year = Some(year);
        self
    }

    pub fn battle_number(mut self, battle_number: i32) -> Self {
        self.model.battle_number = Some(battle_number);
        self
    }

    pub fn attacker_king(mut self, king: impl Into<String>) -> Self {
        self.model.attacker_king = Some(king.into());
        self
    }

    pub fn defender_king(mut self, king: impl Into<String>) -> Self {
        self.model.defender_king = Some(king.into());
        self
    }

    /// Fills `attacker_1` through `attacker_4` in order.
    ///
    /// # Arguments
    /// - `attackers` - Up to four attacking houses; extra entries are ignored
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn attackers(mut self, attackers: &[&str]) -> Self {
        let mut names = attackers.iter().map(|name| Some(name.to_string()));
        self.model.attacker_1 = names.next().flatten();
        self.model.attacker_2 = names.next().flatten();
        self.model.attacker_3 = names.next().flatten();
        self.model.attacker_4 = names.next().flatten();
        self
    }

    /// Fills `defender_1` through `defender_4` in order.
    ///
    /// # Arguments
    /// - `defenders` - Up to four defending houses; extra entries are ignored
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn defenders(mut self, defenders: &[&str]) -> Self {
        let mut names = defenders.iter().map(|name| Some(name.to_string()));
        self.model.defender_1 = names.next().flatten();
        self.model.defender_2 = names.next().flatten();
        self.model.defender_3 = names.next().flatten();
        self.model.defender_4 = names.next().flatten();
        self
    }

    /// Sets the raw attacker outcome column (`"win"`, `"loss"` or anything else).
    pub fn attacker_outcome(mut self, outcome: impl Into<String>) -> Self {
        self.model.attacker_outcome = Some(outcome.into());
        self
    }

    pub fn battle_type(mut self, battle_type: impl Into<String>) -> Self {
        self.model.battle_type = Some(battle_type.into());
        self
    }

    pub fn major_death(mut self, major_death: bool) -> Self {
        self.model.major_death = Some(major_death as i32);
        self
    }

    pub fn major_capture(mut self, major_capture: bool) -> Self {
        self.model.major_capture = Some(major_capture as i32);
        self
    }

    pub fn attacker_size(mut self, size: i32) -> Self {
        self.model.attacker_size = Some(size);
        self
    }

    pub fn defender_size(mut self, size: i32) -> Self {
        self.model.defender_size = Some(size);
        self
    }

    pub fn attacker_commander(mut self, commander: impl Into<String>) -> Self {
        self.model.attacker_commander = Some(commander.into());
        self
    }

    pub fn defender_commander(mut self, commander: impl Into<String>) -> Self {
        self.model.defender_commander = Some(commander.into());
        self
    }

    pub fn summer(mut self, summer: bool) -> Self {
        self.model.summer = Some(summer as i32);
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.model.location = Some(location.into());
        self
    }

    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.model.region = Some(region.into());
        self
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.model.note = Some(note.into());
        self
    }

    /// Builds and returns the battle entity model.
    ///
    /// # Returns
    /// - `battle::Model` - In-memory battle entity with configured values
    pub fn build(self) -> battle::Model {
        self.model
    }
}
