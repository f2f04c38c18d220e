
use bytes::Bytes;
use mxlab_test_utils::prelude::*;

use crate::{
    model::ar_model::{ButtonDto, ModelDto},
    server::{
        data::equipment::EquipmentRepository,
        error::{equipment::EquipmentError, Error},
        service::{
            ar_model::ArModelService,
            equipment::{conflict_or_db, EquipmentService},
        },
        storage::{namespaces, BlobStore, MemoryBlobStore},
    },
};
