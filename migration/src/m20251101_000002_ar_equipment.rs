use sea_orm_migration::{prelude::*, schema::*};

static IDX_AR_EQUIPMENT_TAG: &str = "idx_ar_equipment_tag";
static IDX_AR_EQUIPMENT_NAME: &str = "idx_ar_equipment_name";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ArEquipment::Table)
                    .if_not_exists()
                    .col(pk_auto(ArEquipment::Id))
                    .col(string(ArEquipment::Name))
                    .col(string(ArEquipment::Tag))
                    .col(string_null(ArEquipment::QrImageUrl))
                    .col(timestamp(ArEquipment::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_AR_EQUIPMENT_TAG)
                    .table(ArEquipment::Table)
                    .col(ArEquipment::Tag)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Lookup index only; equipment may reference a model that does not exist yet
        manager
            .create_index(
                Index::create()
                    .name(IDX_AR_EQUIPMENT_NAME)
                    .table(ArEquipment::Table)
                    .col(ArEquipment::Name)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_AR_EQUIPMENT_NAME)
                    .table(ArEquipment::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_AR_EQUIPMENT_TAG)
                    .table(ArEquipment::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ArEquipment::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ArEquipment {
    Table,
    Id,
    Name,
    Tag,
    QrImageUrl,
    CreatedAt,
}
