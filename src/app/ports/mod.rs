pub mod config_store;
pub mod painter;
pub mod surface;
pub mod timer;

pub use config_store::{ConfigStore, ConfigStoreError};
pub use painter::Painter;
pub use surface::Surface;
pub use timer::{TimerError, TimerId, TimerService};

#[cfg(any(test, feature = "test-support"))]
pub use surface::MockSurface;
#[cfg(any(test, feature = "test-support"))]
pub use timer::MockTimerService;
