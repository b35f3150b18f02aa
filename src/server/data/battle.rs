use sea_orm::{
    sea_query::{Expr, ExprTrait, Func, FunctionCall},
    ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    FromQueryResult, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};

use entity::battle::Column;

use crate::{
    model::battle::AttackerOutcome,
    server::model::{
        battle::{Battle, BattleSearchParams, CreateBattleParams},
        stats::BattleStats,
    },
};

/// Rows per `INSERT` statement; each row binds 25 parameters.
const INSERT_BATCH_SIZE: usize = 500;

/// Row produced by the single-pass statistics query.
#[derive(Debug, FromQueryResult)]
struct BattleStatsRow {
    attacker_king_count: i64,
    defender_king_count: i64,
    region_count: i64,
    name_count: i64,
    win_count: i64,
    loss_count: i64,
    defender_size_average: Option<f64>,
    defender_size_min: Option<i64>,
    defender_size_max: Option<i64>,
}

pub struct BattleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BattleRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every battle in store order
    ///
    /// # Returns
    /// - `Ok(battles)`: All battle records, unfiltered
    /// - `Err(DbErr)`: Database error
    pub async fn get_all(&self) -> Result<Vec<Battle>, DbErr> {
        let battles = entity::prelude::Battle::find().all(self.db).await?;

        Ok(battles.into_iter().map(Battle::from_entity).collect())
    }

    /// Counts every battle
    ///
    /// # Returns
    /// - `Ok(count)`: Total number of battle records
    /// - `Err(DbErr)`: Database error
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Battle::find().count(self.db).await
    }

    /// Searches battles matching every supplied filter
    ///
    /// # Arguments
    /// - `params`: Optional king, battle type, location, attacker and defender filters
    ///
    /// # Returns
    /// - `Ok(battles)`: Matching battles in store order; all battles when no filter is set
    /// - `Err(DbErr)`: Database error
    pub async fn search(&self, params: BattleSearchParams) -> Result<Vec<Battle>, DbErr> {
        let battles = entity::prelude::Battle::find()
            .filter(search_condition(params))
            .all(self.db)
            .await?;

        Ok(battles.into_iter().map(Battle::from_entity).collect())
    }

    /// Computes aggregate statistics over all battles
    ///
    /// Presence counts, outcome counts and defender size figures come from one
    /// aggregate query; distinct battle types from a second query in the same
    /// read transaction.
    ///
    /// # Returns
    /// - `Ok(stats)`: Aggregates; counters are 0 and size figures `None` on an empty table
    /// - `Err(DbErr)`: Database error
    pub async fn get_stats(&self) -> Result<BattleStats, DbErr> {
        let txn = self.db.begin().await?;

        let row = entity::prelude::Battle::find()
            .select_only()
            .column_as(Expr::from(present_count(Column::AttackerKing)), "attacker_king_count")
            .column_as(Expr::from(present_count(Column::DefenderKing)), "defender_king_count")
            .column_as(Expr::from(present_count(Column::Region)), "region_count")
            .column_as(Expr::from(present_count(Column::Name)), "name_count")
            .column_as(Expr::from(outcome_count(AttackerOutcome::Win)), "win_count")
            .column_as(Expr::from(outcome_count(AttackerOutcome::Loss)), "loss_count")
            .column_as(
                Expr::from(Func::avg(Expr::col(Column::DefenderSize))),
                "defender_size_average",
            )
            .column_as(Expr::from(Func::min(Expr::col(Column::DefenderSize))), "defender_size_min")
            .column_as(Expr::from(Func::max(Expr::col(Column::DefenderSize))), "defender_size_max")
            .into_model::<BattleStatsRow>()
            .one(&txn)
            .await?;

        let battle_types = entity::prelude::Battle::find()
            .select_only()
            .column(Column::BattleType)
            .filter(Column::BattleType.is_not_null())
            .distinct()
            .order_by_asc(Column::BattleType)
            .into_tuple::<String>()
            .all(&txn)
            .await?;

        txn.commit().await?;

        let stats = match row {
            Some(row) => BattleStats {
                attacker_king_count: row.attacker_king_count as u64,
                defender_king_count: row.defender_king_count as u64,
                region_count: row.region_count as u64,
                name_count: row.name_count as u64,
                win_count: row.win_count as u64,
                loss_count: row.loss_count as u64,
                battle_types,
                defender_size_average: row.defender_size_average,
                defender_size_min: row.defender_size_min,
                defender_size_max: row.defender_size_max,
            },
            None => BattleStats {
                battle_types,
                ..Default::default()
            },
        };

        Ok(stats)
    }

    /// Inserts battles in batches inside one transaction
    ///
    /// Batches keep each statement under SQLite's bound parameter limit; a failure in
    /// any batch rolls back the whole insert.
    ///
    /// # Arguments
    /// - `battles`: Records to insert
    ///
    /// # Returns
    /// - `Ok(inserted)`: Number of records inserted
    /// - `Err(DbErr)`: Database error; nothing is inserted
    pub async fn create_many(&self, battles: Vec<CreateBattleParams>) -> Result<u64, DbErr> {
        if battles.is_empty() {
            return Ok(0);
        }

        let inserted = battles.len() as u64;
        let mut models: Vec<_> = battles.into_iter().map(into_active_model).collect();

        let txn = self.db.begin().await?;

        while !models.is_empty() {
            let rest = models.split_off(models.len().min(INSERT_BATCH_SIZE));
            let batch = std::mem::replace(&mut models, rest);

            entity::prelude::Battle::insert_many(batch).exec(&txn).await?;
        }

        txn.commit().await?;

        Ok(inserted)
    }
}

/// Builds the conjunctive search condition, one clause per supplied filter.
fn search_condition(params: BattleSearchParams) -> Condition {
    let mut condition = Condition::all();

    if let Some(king) = params.king {
        condition = condition.add(
            Condition::any()
                .add(Column::AttackerKing.eq(king.as_str()))
                .add(Column::DefenderKing.eq(king.as_str())),
        );
    }

    if let Some(battle_type) = params.battle_type {
        condition = condition.add(Column::BattleType.eq(battle_type));
    }

    if let Some(location) = params.location {
        condition = condition.add(
            Condition::any()
                .add(Column::Region.eq(location.as_str()))
                .add(Column::Location.eq(location.as_str())),
        );
    }

    if let Some(attacker) = params.attacker {
        condition = condition.add(any_of(
            [
                Column::Attacker1,
                Column::Attacker2,
                Column::Attacker3,
                Column::Attacker4,
            ],
            &attacker,
        ));
    }

    if let Some(defender) = params.defender {
        condition = condition.add(any_of(
            [
                Column::Defender1,
                Column::Defender2,
                Column::Defender3,
                Column::Defender4,
            ],
            &defender,
        ));
    }

    condition
}

fn any_of(columns: [Column; 4], value: &str) -> Condition {
    columns
        .into_iter()
        .fold(Condition::any(), |any, column| any.add(column.eq(value)))
}

/// `COUNT` of rows where `column` is neither NULL nor empty.
fn present_count(column: Column) -> FunctionCall {
    Func::count(Expr::case(
        column.is_not_null().and(column.ne("")),
        Expr::val(1),
    ))
}

/// `COUNT` of rows with the given attacker outcome.
fn outcome_count(outcome: AttackerOutcome) -> FunctionCall {
    Func::count(Expr::case(
        Column::AttackerOutcome.eq(outcome.as_str()),
        Expr::val(1),
    ))
}

fn into_active_model(params: CreateBattleParams) -> entity::battle::ActiveModel {
    let [attacker_1, attacker_2, attacker_3, attacker_4] = params.attackers;
    let [defender_1, defender_2, defender_3, defender_4] = params.defenders;

    entity::battle::ActiveModel {
        id: ActiveValue::NotSet,
        name: ActiveValue::Set(params.name),
        year: ActiveValue::Set(params.year),
        battle_number: ActiveValue::Set(params.battle_number),
        attacker_king: ActiveValue::Set(params.attacker_king),
        defender_king: ActiveValue::Set(params.defender_king),
        attacker_1: ActiveValue::Set(attacker_1),
        attacker_2: ActiveValue::Set(attacker_2),
        attacker_3: ActiveValue::Set(attacker_3),
        attacker_4: ActiveValue::Set(attacker_4),
        defender_1: ActiveValue::Set(defender_1),
        defender_2: ActiveValue::Set(defender_2),
        defender_3: ActiveValue::Set(defender_3),
        defender_4: ActiveValue::Set(defender_4),
        attacker_outcome: ActiveValue::Set(params.attacker_outcome),
        battle_type: ActiveValue::Set(params.battle_type),
        major_death: ActiveValue::Set(params.major_death),
        major_capture: ActiveValue::Set(params.major_capture),
        attacker_size: ActiveValue::Set(params.attacker_size),
        defender_size: ActiveValue::Set(params.defender_size),
        attacker_commander: ActiveValue::Set(params.attacker_commander),
        defender_commander: ActiveValue::Set(params.defender_commander),
        summer: ActiveValue::Set(params.summer),
        location: ActiveValue::Set(params.location),
        region: ActiveValue::Set(params.region),
        note: ActiveValue::Set(params.note),
    }
}
