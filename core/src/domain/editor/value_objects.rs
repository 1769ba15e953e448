use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct ApplyEditInput {
    pub session_id: Uuid,
    pub instruction: String,
}
