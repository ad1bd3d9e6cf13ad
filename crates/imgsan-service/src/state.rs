//! Application state shared across handlers.

use crate::dispatcher::EventDispatcher;

pub struct AppState {
    pub dispatcher: EventDispatcher,
}
