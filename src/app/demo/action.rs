use crate::ports::TimerId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    Quit,
    Render,
    Resize(u16, u16),

    // Buttons
    StartSpin,
    StopSpin,

    // Delay slider
    SetDelay(u32),
    IncreaseDelay,
    DecreaseDelay,

    ToggleDisplayedWhenStopped,
    CycleColor,

    /// A host timer fired.
    Timer(TimerId),
}

impl Action {
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}
