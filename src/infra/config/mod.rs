pub mod config_file;

pub use config_file::{CURRENT_VERSION, ConfigFile};
