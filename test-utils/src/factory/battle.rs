//! Battle factory for inserting test battle records.
//!
//! Builds on `fixture::battle` for default values and inserts the resulting model
//! with a database-assigned ID.

use crate::{
    factory::helpers::next_id,
    fixture::battle::{entity_builder, BattleEntityBuilder},
};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for inserting test battles with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::battle::BattleFactory;
///
/// let battle = BattleFactory::new(&db)
///     .with(|b| b.attacker_king("Robb Stark").attackers(&["Stark", "Tully"]))
///     .build()
///     .await?;
/// ```
pub struct BattleFactory<'a> {
    db: &'a DatabaseConnection,
    builder: BattleEntityBuilder,
}

impl<'a> BattleFactory<'a> {
    /// Creates a new BattleFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Battle {id}"` where id is auto-incremented
    /// - battle_number: the same auto-incremented id
    /// - year: `298`
    /// - every other column: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id() as i32;
        Self {
            db,
            builder: entity_builder()
                .name(Some(format!("Battle {}", id).as_str()))
                .battle_number(id),
        }
    }

    /// Applies customizations through the fixture builder.
    ///
    /// # Arguments
    /// - `customize` - Closure receiving and returning the entity builder
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn with(mut self, customize: impl FnOnce(BattleEntityBuilder) -> BattleEntityBuilder) -> Self {
        self.builder = customize(self.builder);
        self
    }

    /// Builds and inserts the battle entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::battle::Model)` - Created battle entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::battle::Model, DbErr> {
        let model = self.builder.build();

        entity::battle::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(model.name),
            year: ActiveValue::Set(model.year),
            battle_number: ActiveValue::Set(model.battle_number),
            attacker_king: ActiveValue::Set(model.attacker_king),
            defender_king: ActiveValue::Set(model.defender_king),
            attacker_1: ActiveValue::Set(model.attacker_1),
            attacker_2: ActiveValue::Set(model.attacker_2),
            attacker_3: ActiveValue::Set(model.attacker_3),
            attacker_4: ActiveValue::Set(model.attacker_4),
            defender_1: ActiveValue::Set(model.defender_1),
            defender_2: ActiveValue::Set(model.defender_2),
            defender_3: ActiveValue::Set(model.defender_3),
            defender_4: ActiveValue::Set(model.defender_4),
            attacker_outcome: ActiveValue::Set(model.attacker_outcome),
            battle_type: ActiveValue::Set(model.battle_type),
            major_death: ActiveValue::Set(model.major_death),
            major_capture: ActiveValue::Set(model.major_capture),
            attacker_size: ActiveValue::Set(model.attacker_size),
            defender_size: ActiveValue::Set(model.defender_size),
            attacker_commander: ActiveValue::Set(model.attacker_commander),
            defender_commander: ActiveValue::Set(model.defender_commander),
            summer: ActiveValue::Set(model.summer),
            location: ActiveValue::Set(model.location),
            region: ActiveValue::Set(model.region),
            note: ActiveValue::Set(model.note),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a battle with default values.
///
/// Shorthand for `BattleFactory::new(db).build().await`.
pub async fn create_battle(db: &DatabaseConnection) -> Result<entity::battle::Model, DbErr> {
    BattleFactory::new(db).build().await
}

/// Creates `count` battles with default values.
///
/// # Returns
/// - `Ok(Vec<entity::battle::Model>)` - Created battles in insertion order
/// - `Err(DbErr)` - Database error during insert
pub async fn create_battles(
    db: &DatabaseConnection,
    count: usize,
) -> Result<Vec<entity::battle::Model>, DbErr> {
    let mut battles = Vec::with_capacity(count);
    for _ in 0..count {
        battles.push(create_battle(db).await?);
    }
    Ok(battles)
}
