//! Migration: Create addresses table nested under contacts.

use sea_orm_migration::prelude::*;

use super::m20240101_000002_create_contacts_table::Contacts;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Addresses::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Addresses::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Addresses::ContactId).uuid().not_null())
                    .col(ColumnDef::new(Addresses::Street).string_len(255).null())
                    .col(ColumnDef::new(Addresses::City).string_len(100).null())
                    .col(ColumnDef::new(Addresses::Province).string_len(100).null())
                    .col(ColumnDef::new(Addresses::Country).string_len(100).not_null())
                    .col(ColumnDef::new(Addresses::PostalCode).string_len(10).not_null())
                    .col(
                        ColumnDef::new(Addresses::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Addresses::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_addresses_contact_id")
                            .from(Addresses::Table, Addresses::ContactId)
                            .to(Contacts::Table, Contacts::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_addresses_contact_id")
                    .table(Addresses::Table)
                    .col(Addresses::ContactId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Addresses::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Addresses {
    Table,
    Id,
    ContactId,
    Street,
    City,
    Province,
    Country,
    PostalCode,
    CreatedAt,
    UpdatedAt,
}
