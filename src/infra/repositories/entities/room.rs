//! Room database entity for SeaORM.

use sea_orm::entity::prelude::*;

use super::guest;
use crate::domain::{Guest, Room};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "rooms")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub room_number: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::guest::Entity")]
    Guests,
}

impl Related<super::guest::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Guests.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Assemble the domain room from its row and its guest rows
impl From<(Model, Vec<guest::Model>)> for Room {
    fn from((model, guests): (Model, Vec<guest::Model>)) -> Self {
        Room {
            room_number: model.room_number,
            guests: guests.into_iter().map(Guest::from).collect(),
        }
    }
}
