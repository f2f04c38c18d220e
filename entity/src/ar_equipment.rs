use sea_orm::entity::prelude::*;

/// A physical equipment tag pointing at a model by name.
///
/// `name` is intentionally not a foreign key so equipment can be registered
/// before the model it refers to is published.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "ar_equipment")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub tag: String,
    pub qr_image_url: Option<String>,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
