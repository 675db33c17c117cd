pub mod atoms;
pub mod control_panel;
pub mod delay_slider;
pub mod footer;
pub mod header;
pub mod indicator;
pub mod layout;
pub mod molecules;

pub use indicator::IndicatorView;
pub use layout::MainLayout;
