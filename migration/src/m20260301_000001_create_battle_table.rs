use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Battle::Table)
                    .if_not_exists()
                    .col(pk_auto(Battle::Id))
                    .col(string_null(Battle::Name))
                    .col(integer_null(Battle::Year))
                    .col(integer_null(Battle::BattleNumber))
                    .col(string_null(Battle::AttackerKing))
                    .col(string_null(Battle::DefenderKing))
                    .col(string_null(Battle::Attacker1))
                    .col(string_null(Battle::Attacker2))
                    .col(string_null(Battle::Attacker3))
                    .col(string_null(Battle::Attacker4))
                    .col(string_null(Battle::Defender1))
                    .col(string_null(Battle::Defender2))
                    .col(string_null(Battle::Defender3))
                    .col(string_null(Battle::Defender4))
                    .col(string_null(Battle::AttackerOutcome))
                    .col(string_null(Battle::BattleType))
                    .col(integer_null(Battle::MajorDeath))
                    .col(integer_null(Battle::MajorCapture))
                    .col(integer_null(Battle::AttackerSize))
                    .col(integer_null(Battle::DefenderSize))
                    .col(string_null(Battle::AttackerCommander))
                    .col(string_null(Battle::DefenderCommander))
                    .col(integer_null(Battle::Summer))
                    .col(string_null(Battle::Location))
                    .col(string_null(Battle::Region))
                    .col(text_null(Battle::Note))
                    .to_owned(),
            )
            .await?;

        // King lookups are the most common search filter
        manager
            .create_index(
                Index::create()
                    .name("idx_battle_attacker_king")
                    .table(Battle::Table)
                    .col(Battle::AttackerKing)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_battle_defender_king")
                    .table(Battle::Table)
                    .col(Battle::DefenderKing)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Battle::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Battle {
    Table,
    Id,
    Name,
    Year,
    BattleNumber,
    AttackerKing,
    DefenderKing,
    #[sea_orm(iden = "attacker_1")]
    Attacker1,
    #[sea_orm(iden = "attacker_2")]
    Attacker2,
    #[sea_orm(iden = "attacker_3")]
    Attacker3,
    #[sea_orm(iden = "attacker_4")]
    Attacker4,
    #[sea_orm(iden = "defender_1")]
    Defender1,
    #[sea_orm(iden = "defender_2")]
    Defender2,
    #[sea_orm(iden = "defender_3")]
    Defender3,
    #[sea_orm(iden = "defender_4")]
    Defender4,
    AttackerOutcome,
    BattleType,
    MajorDeath,
    MajorCapture,
    AttackerSize,
    DefenderSize,
    AttackerCommander,
    DefenderCommander,
    Summer,
    Location,
    Region,
    Note,
}
