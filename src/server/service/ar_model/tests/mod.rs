
use mxlab_test_utils::prelude::*;

use crate::{
    model::ar_model::{ButtonDto, DescriptionItemDto, ModelDto},
    server::{
        data::ar_model::ArModelRepository,
        error::{ar_model::ArModelError, Error},
        service::ar_model::{conflict_or_db, ArModelService},
        tree,
    },
};

fn model(name: &str) -> ModelDto {
    ModelDto {
        name: name.to_string(),
        ..Default::default()
    }
}

fn button(id: &str, image_file_name: &str) -> ButtonDto {
    ButtonDto {
        id: id.to_string(),
        image_file_name: image_file_name.to_string(),
        image_url: None,
    }
}

/// Valve with a single Handle part carrying one button and no video
fn valve_with_handle() -> ModelDto {
    ModelDto {
        description: vec![DescriptionItemDto {
            key: "Pressure".to_string(),
            value: "16 bar".to_string(),
        }],
        parts: vec![ModelDto {
            buttons: vec![button("b1", "icon.png")],
            ..model("Handle")
        }],
        ..model("Valve")
    }
}
