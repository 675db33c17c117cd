use std::collections::HashMap;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;
use tokio::time::{Instant, MissedTickBehavior, interval_at};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use pinwheel_app::ports::{TimerError, TimerId, TimerService};

use crate::event::Event;

/// Shortest interval the host will schedule; a requested delay of 0 runs at this rate.
pub const MIN_TIMER_INTERVAL: Duration = Duration::from_millis(1);

/// Repeating timers on the tokio runtime. Ticks arrive on the event channel
/// as [`Event::Timer`], so they are serialized with key and resize events.
pub struct TokioTimerService {
    event_tx: UnboundedSender<Event>,
    next_id: u64,
    timers: HashMap<TimerId, CancellationToken>,
}

impl TokioTimerService {
    pub fn new(event_tx: UnboundedSender<Event>) -> Self {
        Self {
            event_tx,
            next_id: 0,
            timers: HashMap::new(),
        }
    }

    pub fn active_count(&self) -> usize {
        self.timers.len()
    }
}

impl TimerService for TokioTimerService {
    fn register(&mut self, interval: Duration) -> Result<TimerId, TimerError> {
        let handle = Handle::try_current().map_err(|e| TimerError::Unavailable(e.to_string()))?;
        if self.event_tx.is_closed() {
            return Err(TimerError::Rejected("event channel closed".to_string()));
        }

        self.next_id += 1;
        let id = TimerId::new(self.next_id);
        let period = interval.max(MIN_TIMER_INTERVAL);
        let token = CancellationToken::new();
        let cancelled = token.clone();
        let event_tx = self.event_tx.clone();

        handle.spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    () = cancelled.cancelled() => break,
                    _ = ticker.tick() => {
                        if event_tx.send(Event::Timer(id)).is_err() {
                            break;
                        }
                    }
                }
            }
        });

        debug!(timer = %id, period_ms = period.as_millis(), "timer: registered");
        self.timers.insert(id, token);
        Ok(id)
    }

    fn cancel(&mut self, id: TimerId) {
        if let Some(token) = self.timers.remove(&id) {
            token.cancel();
            debug!(timer = %id, "timer: cancelled");
        }
    }
}

impl Drop for TokioTimerService {
    fn drop(&mut self) {
        for (_, token) in self.timers.drain() {
            token.cancel();
        }
    }
}
