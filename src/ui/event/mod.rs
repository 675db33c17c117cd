pub mod handler;

use crossterm::event::KeyEvent;

use pinwheel_app::ports::TimerId;

#[derive(Clone, Debug)]
pub enum Event {
    Init,
    Key(KeyEvent),
    Resize(u16, u16),
    Timer(TimerId),
    Quit,
}
