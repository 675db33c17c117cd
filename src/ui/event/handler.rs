use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use pinwheel_app::demo::{Action, DelaySlider};

use super::Event;

pub fn handle_event(event: Event) -> Action {
    match event {
        Event::Init => Action::Render,
        Event::Quit => Action::Quit,
        Event::Resize(w, h) => Action::Resize(w, h),
        Event::Timer(id) => Action::Timer(id),
        Event::Key(key) => handle_key_event(key),
    }
}

fn handle_key_event(key: KeyEvent) -> Action {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,

        // Buttons
        KeyCode::Char('s') | KeyCode::Enter => Action::StartSpin,
        KeyCode::Char('x') | KeyCode::Backspace => Action::StopSpin,

        // Slider
        KeyCode::Left | KeyCode::Char('h' | '-') => Action::DecreaseDelay,
        KeyCode::Right | KeyCode::Char('l' | '+') => Action::IncreaseDelay,
        KeyCode::Home => Action::SetDelay(DelaySlider::MIN),
        KeyCode::End => Action::SetDelay(DelaySlider::MAX),

        KeyCode::Char('d') => Action::ToggleDisplayedWhenStopped,
        KeyCode::Char('c') => Action::CycleColor,
        _ => Action::None,
    }
}
