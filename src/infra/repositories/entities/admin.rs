//! Admin database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Admin;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "admins")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub email: String,
    pub password: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Admin {
    fn from(model: Model) -> Self {
        Admin {
            id: model.id,
            email: model.email,
            password: model.password,
        }
    }
}
