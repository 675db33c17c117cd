//! pinwheel: a twelve-capsule spinning busy indicator.
//!
//! The indicator core lives in [`app`] and only talks to its host through
//! ports; [`ui`] is a terminal host and [`infra`] loads configuration.

pub use pinwheel_app as app;
pub use pinwheel_domain as domain;
pub use pinwheel_infra as infra;
pub use pinwheel_ui as ui;

pub mod error;
pub mod logging;
