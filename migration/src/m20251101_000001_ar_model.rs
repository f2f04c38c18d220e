use sea_orm_migration::{prelude::*, schema::*};

static IDX_AR_MODEL_NAME: &str = "idx_ar_model_name";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ArModel::Table)
                    .if_not_exists()
                    .col(pk_auto(ArModel::Id))
                    .col(string(ArModel::Name))
                    .col(string_null(ArModel::ModelFileUrl))
                    .col(text_null(ArModel::DescriptionJson))
                    .col(string_null(ArModel::Video))
                    .col(string_null(ArModel::DatasheetUrl))
                    .col(text_null(ArModel::ButtonsJson))
                    .col(text_null(ArModel::PartsJson))
                    .col(timestamp(ArModel::UploadedAt))
                    .col(timestamp(ArModel::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_AR_MODEL_NAME)
                    .table(ArModel::Table)
                    .col(ArModel::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_AR_MODEL_NAME)
                    .table(ArModel::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ArModel::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ArModel {
    Table,
    Id,
    Name,
    ModelFileUrl,
    DescriptionJson,
    Video,
    DatasheetUrl,
    ButtonsJson,
    PartsJson,
    UploadedAt,
    UpdatedAt,
}
