use std::io::{Stdout, stdout};

use color_eyre::eyre::Result;
use crossterm::cursor::{Hide, Show};
use crossterm::event::{Event as CrosstermEvent, EventStream, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
    is_raw_mode_enabled,
};
use futures::StreamExt;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use super::event::Event;

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Owns the terminal and the single event queue.
///
/// There is no frame or tick interval here: repaints are driven by
/// indicator redraw requests, and animation ticks are injected by the timer
/// service through [`TuiRunner::event_sender`]. Terminal input and ticks
/// share one channel, so the main loop handles them strictly one at a time.
pub struct TuiRunner {
    terminal: Tui,
    event_rx: UnboundedReceiver<Event>,
    event_tx: UnboundedSender<Event>,
    input_task: Option<JoinHandle<()>>,
    shutdown: CancellationToken,
}

impl TuiRunner {
    pub fn new() -> Result<Self> {
        let terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
        let (event_tx, event_rx) = mpsc::unbounded_channel();

        Ok(Self {
            terminal,
            event_rx,
            event_tx,
            input_task: None,
            shutdown: CancellationToken::new(),
        })
    }

    pub fn event_sender(&self) -> UnboundedSender<Event> {
        self.event_tx.clone()
    }

    pub fn enter(&mut self) -> Result<()> {
        enable_raw_mode()?;
        execute!(stdout(), EnterAlternateScreen, Hide)?;

        let event_tx = self.event_tx.clone();
        let shutdown = self.shutdown.clone();
        self.input_task = Some(tokio::spawn(pump_terminal_events(event_tx, shutdown)));
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.shutdown.cancel();
        if let Some(task) = self.input_task.take() {
            task.abort();
        }

        if is_raw_mode_enabled()? {
            execute!(stdout(), Show, LeaveAlternateScreen)?;
            disable_raw_mode()?;
        }
        Ok(())
    }

    pub async fn next_event(&mut self) -> Option<Event> {
        self.event_rx.recv().await
    }

    pub fn terminal(&mut self) -> &mut Tui {
        &mut self.terminal
    }
}

impl Drop for TuiRunner {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

/// Forwards terminal input until cancelled, the stream ends, or the
/// receiver is gone. Sends [`Event::Init`] first so the host paints once.
async fn pump_terminal_events(event_tx: UnboundedSender<Event>, shutdown: CancellationToken) {
    let mut input = EventStream::new();

    if event_tx.send(Event::Init).is_err() {
        return;
    }

    loop {
        let next = tokio::select! {
            () = shutdown.cancelled() => break,
            next = input.next() => next,
        };

        match next {
            Some(Ok(raw)) => {
                let Some(event) = translate(raw) else {
                    continue;
                };
                if event_tx.send(event).is_err() {
                    break;
                }
            }
            Some(Err(e)) => {
                debug!(error = %e, "tui: input stream failed");
                break;
            }
            None => break,
        }
    }
}

/// Maps crossterm input to host events. Key releases and everything the
/// demo has no use for (mouse, paste, focus) are dropped.
fn translate(raw: CrosstermEvent) -> Option<Event> {
    match raw {
        CrosstermEvent::Key(key)
            if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) =>
        {
            Some(Event::Key(key))
        }
        CrosstermEvent::Resize(cols, rows) => Some(Event::Resize(cols, rows)),
        _ => None,
    }
}
