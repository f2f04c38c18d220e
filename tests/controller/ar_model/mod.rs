mod create_model;
mod get_model;
mod update_model;

use mxlab::model::ar_model::{ButtonDto, ModelDto};

use super::*;

fn model(name: &str) -> ModelDto {
    ModelDto {
        name: name.to_string(),
        ..Default::default()
    }
}

fn valve_with_handle() -> ModelDto {
    ModelDto {
        parts: vec![ModelDto {
            buttons: vec![ButtonDto {
                id: "b1".to_string(),
                image_file_name: "icon.png".to_string(),
                image_url: None,
            }],
            ..model("Handle")
        }],
        ..model("Valve")
    }
}
