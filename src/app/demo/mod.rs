//! Wiring for the interactive demo: a start and a stop control plus a
//! delay slider driving one indicator. Nothing in the indicator depends on
//! this module.

pub mod action;
pub mod reducer;
pub mod state;

pub use action::Action;
pub use reducer::reduce;
pub use state::{DelaySlider, DemoState, PALETTE};
