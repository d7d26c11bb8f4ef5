//! Server application state shared across handlers

use crate::research::ResearchAssistant;
use crate::shutdown::ShutdownState;
use std::sync::Arc;

/// Shared state for the server. Cloned into every handler; all fields are
/// cheap handles to process-wide singletons.
#[derive(Clone)]
pub struct ServerAppState {
    /// The report pipeline exposed under /assistant
    pub assistant: Arc<ResearchAssistant>,

    /// Shutdown state
    pub shutdown_state: ShutdownState,
}

impl ServerAppState {
    pub fn new(assistant: ResearchAssistant, shutdown_state: ShutdownState) -> Self {
        Self {
            assistant: Arc::new(assistant),
            shutdown_state,
        }
    }
}
