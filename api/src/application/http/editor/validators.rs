use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct ApplyEditValidator {
    /// Free-form instruction such as "add a sprig of rosemary".
    #[validate(length(min = 1, message = "instruction is required"))]
    pub instruction: String,
}
