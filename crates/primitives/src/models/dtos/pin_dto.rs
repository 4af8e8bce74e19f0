use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct SetPinRequest {
    pub user_id: Uuid,
    #[validate(length(min = 6, max = 6))]
    pub pin: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SetPinResponse {
    pub success: bool,
    pub message: String,
}
