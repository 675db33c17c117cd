mod key_chip;
mod panel_border;

pub use key_chip::{key_chip, key_text};
pub use panel_border::panel_block;
