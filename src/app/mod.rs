//! The indicator core and the ports it is driven through.
//!
//! The core never talks to a concrete toolkit: hosts supply a
//! [`TimerService`](ports::TimerService), a [`Surface`](ports::Surface), and
//! a [`Painter`](ports::Painter) for each paint pass.

pub mod config;
pub mod demo;
pub mod ports;
pub mod progress_indicator;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use config::{Config, ConfigOverrides, DemoConfig, IndicatorConfig};
pub use progress_indicator::ProgressIndicator;
