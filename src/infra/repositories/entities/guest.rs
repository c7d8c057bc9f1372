//! Guest database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Guest;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "guests")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub admit_date: Option<Date>,
    pub payment_status: String,
    /// Foreign key to `rooms.room_number`
    pub room_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::room::Entity",
        from = "Column::RoomId",
        to = "super::room::Column::RoomNumber",
        on_delete = "Cascade"
    )]
    Room,
}

impl Related<super::room::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Room.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Guest {
    fn from(model: Model) -> Self {
        Guest {
            id: model.id,
            name: model.name,
            email: model.email,
            phone: model.phone,
            admit_date: model.admit_date,
            payment_status: model.payment_status,
            room_number: Some(model.room_id),
        }
    }
}
