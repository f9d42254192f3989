//! Application state for the Payslip Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::delivery::Dispatcher;
use crate::render::SlipRenderer;

/// Shared application state.
///
/// Holds the slip renderer built from the loaded configuration and the
/// delivery dispatcher.
#[derive(Clone)]
pub struct AppState {
    renderer: Arc<SlipRenderer>,
    dispatcher: Dispatcher,
}

impl AppState {
    /// Creates a new application state from loaded configuration and a dispatcher.
    pub fn new(config: ConfigLoader, dispatcher: Dispatcher) -> Self {
        Self {
            renderer: Arc::new(SlipRenderer::new(config.into_config())),
            dispatcher,
        }
    }

    /// Returns the slip renderer.
    pub fn renderer(&self) -> &SlipRenderer {
        &self.renderer
    }

    /// Returns the delivery dispatcher.
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }
}
