use std::sync::Arc;

use crate::pipeline::TrustEngine;

#[derive(Clone)]
pub struct HandlerState {
    pub engine: Arc<TrustEngine>,
}

impl HandlerState {
    pub fn new(engine: TrustEngine) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }
}
