use std::sync::Arc;

use lumina_core::application::LuminaService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: LuminaService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: LuminaService) -> Self {
        Self { args, service }
    }
}
