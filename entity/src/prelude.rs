pub use super::ar_equipment::Entity as ArEquipment;
pub use super::ar_model::Entity as ArModel;
