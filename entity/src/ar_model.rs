use sea_orm::entity::prelude::*;

/// A root model row holding its entire part hierarchy as JSON text columns.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "ar_model")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub model_file_url: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description_json: Option<String>,
    pub video: Option<String>,
    pub datasheet_url: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub buttons_json: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub parts_json: Option<String>,
    pub uploaded_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
