//! Migration: Create guests table linked to rooms.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Guests::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Guests::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Guests::Name).string().null())
                    .col(ColumnDef::new(Guests::Email).string().null())
                    .col(ColumnDef::new(Guests::Phone).string().null())
                    .col(ColumnDef::new(Guests::AdmitDate).date().null())
                    .col(
                        ColumnDef::new(Guests::PaymentStatus)
                            .string()
                            .not_null()
                            .default("pending"),
                    )
                    .col(ColumnDef::new(Guests::RoomId).integer().not_null())
                    // Deleting a room removes its guests
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_guests_room")
                            .from(Guests::Table, Guests::RoomId)
                            .to(Rooms::Table, Rooms::RoomNumber)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_guests_room_id")
                    .table(Guests::Table)
                    .col(Guests::RoomId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Guests::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Guests {
    Table,
    Id,
    Name,
    Email,
    Phone,
    AdmitDate,
    PaymentStatus,
    RoomId,
}

#[derive(Iden)]
enum Rooms {
    Table,
    RoomNumber,
}
