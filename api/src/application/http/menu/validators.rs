use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct ParseMenuValidator {
    #[validate(length(min = 1, message = "text is required"))]
    pub text: String,
}
