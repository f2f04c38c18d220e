mod create_equipment;
mod get_equipment;
mod update_equipment;

use mxlab::model::equipment::EquipmentRequestDto;

use super::*;

fn request(name: &str, tag: &str) -> EquipmentRequestDto {
    EquipmentRequestDto {
        name: name.to_string(),
        tag: tag.to_string(),
    }
}
