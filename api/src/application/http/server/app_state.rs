use std::sync::Arc;

use eatitude_core::application::EatitudeService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: EatitudeService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: EatitudeService) -> Self {
        Self { args, service }
    }
}
