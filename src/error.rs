use std::io::stdout;
use std::panic;
use std::path::Path;

use color_eyre::config::HookBuilder;
use color_eyre::eyre::Result;
use color_eyre::owo_colors::OwoColorize;
use crossterm::cursor::Show;
use crossterm::execute;
use crossterm::terminal::{LeaveAlternateScreen, disable_raw_mode, is_raw_mode_enabled};

/// Installs color-eyre reporting. Panics first hand the terminal back
/// (cooked mode, main screen, visible cursor) so the report is readable, and
/// name the log file when one is being written.
#[allow(clippy::print_stderr, reason = "panic report goes to the restored terminal")]
pub fn install_hooks(log_file: Option<&Path>) -> Result<()> {
    let mut builder = HookBuilder::default().display_env_section(false);
    if let Some(path) = log_file {
        builder = builder.panic_section(format!("Log file: {}", path.display().bold()));
    }
    let (panic_hook, eyre_hook) = builder.into_hooks();
    eyre_hook.install()?;

    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        tracing::error!(panic = %panic_info, "pinwheel panicked");
        eprintln!("{}", panic_hook.panic_report(panic_info));
    }));

    Ok(())
}

pub fn restore_terminal() -> Result<()> {
    if is_raw_mode_enabled()? {
        execute!(stdout(), Show, LeaveAlternateScreen)?;
        disable_raw_mode()?;
    }
    Ok(())
}
