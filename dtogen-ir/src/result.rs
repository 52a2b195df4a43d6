//! Normalization output handed to code emission.

use serde::Serialize;

use crate::{ApiEndpointList, DtoList};

/// The immutable output of normalization: DTOs and endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConverterResult {
    dto_list: DtoList,
    endpoints: ApiEndpointList,
}

impl ConverterResult {
    pub fn new(dto_list: DtoList, endpoints: ApiEndpointList) -> Self {
        Self {
            dto_list,
            endpoints,
        }
    }

    pub fn dto_list(&self) -> &DtoList {
        &self.dto_list
    }

    pub fn endpoints(&self) -> &ApiEndpointList {
        &self.endpoints
    }

    pub fn into_parts(self) -> (DtoList, ApiEndpointList) {
        (self.dto_list, self.endpoints)
    }
}
