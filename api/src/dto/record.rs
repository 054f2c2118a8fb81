use iv_core::domain::entities::record::Record;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of `POST /api/items`
///
/// Missing fields default to empty strings; only `id` must be non-empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CreateRecordRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "ID is required"))]
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub value: String,
}

impl From<CreateRecordRequest> for Record {
    fn from(request: CreateRecordRequest) -> Self {
        Record::new(request.id, request.name, request.value)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
