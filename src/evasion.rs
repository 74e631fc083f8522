//! Evasion state machine for the "No" button.
//!
//! Tracks how many times the user has gone after the negative choice. Each
//! attempt bumps a bounded progress counter; at [`MAX_DODGES`] the button
//! stops running and flips its meaning to the affirmative action. A second,
//! unbounded counter only drives the playful hint line underneath.

/// Dodges before the button gives up and turns into a Yes button.
pub const MAX_DODGES: u8 = 10;

/// Progress + dodge bookkeeping. `progress == MAX_DODGES` is the transformed
/// sub-state; both counters reset together (and only together) when the flow
/// navigates back to the letter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EvasionState {
    progress: u8,
    dodge_count: u32,
}

impl EvasionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one evasion-triggering interaction. Progress saturates at
    /// [`MAX_DODGES`]; the dodge count keeps climbing.
    pub fn record_dodge(&mut self) {
        self.progress = (self.progress + 1).min(MAX_DODGES);
        self.dodge_count += 1;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn dodge_count(&self) -> u32 {
        self.dodge_count
    }

    pub fn is_transformed(&self) -> bool {
        self.progress >= MAX_DODGES
    }

    /// Fill level for the visual progress indicator, 0.0..=100.0.
    pub fn progress_percent(&self) -> f64 {
        self.progress as f64 / MAX_DODGES as f64 * 100.0
    }

    pub fn hint_slot(&self) -> HintSlot {
        hint_slot(self.progress, self.dodge_count, self.is_transformed())
    }
}

/// Which hint line to show under the buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HintSlot {
    Acceptance,
    AlmostThere,
    Tiring,
    Shy,
    Default,
}

/// Pure hint selection; priority runs from the transformed state down.
pub fn hint_slot(progress: u8, dodge_count: u32, transformed: bool) -> HintSlot {
    if transformed {
        HintSlot::Acceptance
    } else if progress > 7 {
        HintSlot::AlmostThere
    } else if progress > 4 {
        HintSlot::Tiring
    } else if dodge_count > 2 {
        HintSlot::Shy
    } else {
        HintSlot::Default
    }
}
