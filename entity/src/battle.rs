use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Default)]
#[sea_orm(table_name = "battle")]
pub struct Model {
    #[sea_orm(primary_key)]
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
    #[sea_orm(column_type = "Text", nullable)]
    pub note: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
