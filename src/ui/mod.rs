//! Terminal host for the indicator: timer and surface adapters, a
//! rasterizing painter, and the demo views.

pub mod adapters;
pub mod components;
pub mod event;
pub mod theme;
pub mod tui;
