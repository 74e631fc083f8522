//! Cursor-avoidance geometry for the dodging "No" button.
//!
//! Everything in here is plain math with no browser APIs so the solver can be
//! exercised under `cargo test` on the host. The DOM layer feeds in the live
//! viewport / cursor values and stores the returned position.

/// Inset from every viewport edge when placing the button.
pub const EDGE_PADDING: i32 = 20;
/// Minimum distance (px) from the cursor to the relocated button's center.
pub const MIN_CURSOR_DISTANCE: f64 = 150.0;
/// After this many rejected samples any candidate is accepted.
pub const SOFT_ATTEMPT_CAP: u32 = 20;
/// Absolute upper bound on samples; the last one wins.
pub const HARD_ATTEMPT_CAP: u32 = 50;
/// Fallback button dimensions when the rendered element cannot be measured.
pub const DEFAULT_BUTTON_WIDTH: i32 = 140;
pub const DEFAULT_BUTTON_HEIGHT: i32 = 60;

/// Current viewport dimensions in CSS pixels, refreshed on resize events.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewportBounds {
    pub width: i32,
    pub height: i32,
}

impl ViewportBounds {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Fallback cursor location for interactions without pointer coordinates
    /// (keyboard activation, synthetic clicks).
    pub fn center(&self) -> CursorPoint {
        CursorPoint {
            x: self.width as f64 / 2.0,
            y: self.height as f64 / 2.0,
        }
    }
}

/// Size of the evading button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ElementSize {
    pub width: i32,
    pub height: i32,
}

impl ElementSize {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Replace unmeasurable (non-positive) dimensions with the fixed default.
    pub fn sanitized(self) -> Self {
        if self.width <= 0 || self.height <= 0 {
            Self::default()
        } else {
            self
        }
    }
}

impl Default for ElementSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_BUTTON_WIDTH,
            height: DEFAULT_BUTTON_HEIGHT,
        }
    }
}

/// Pointer / touch location at the moment of an evasion event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorPoint {
    pub x: f64,
    pub y: f64,
}

impl CursorPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Where the button lives: the default in-flow layout slot, or an absolute
/// viewport position produced by the solver.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum ButtonPosition {
    #[default]
    InFlow,
    At {
        x: f64,
        y: f64,
    },
}

impl ButtonPosition {
    pub fn is_in_flow(&self) -> bool {
        matches!(self, ButtonPosition::InFlow)
    }
}

// --- Prototype RNG -----------------------------------------------------------

/// Small 32-bit linear congruential generator. Not crypto secure; good enough
/// for picking dodge positions, and seedable so solver tests are deterministic.
#[derive(Clone, Debug)]
pub struct Lcg(u32);

impl Lcg {
    pub fn new(seed: u32) -> Self {
        Self(seed)
    }

    pub fn next_u32(&mut self) -> u32 {
        self.0 = self.0.wrapping_mul(1664525).wrapping_add(1013904223);
        self.0
    }

    /// Uniform in [0, 1).
    pub fn next_f64(&mut self) -> f64 {
        self.next_u32() as f64 / (u32::MAX as f64 + 1.0)
    }
}

// --- Safe zone ---------------------------------------------------------------

/// Rectangle of valid top-left button positions: viewport inset by
/// `EDGE_PADDING` and the button's own size. Collapses to a single point when
/// the viewport is smaller than button + padding.
#[derive(Clone, Copy, Debug)]
struct SafeZone {
    min_x: f64,
    max_x: f64,
    min_y: f64,
    max_y: f64,
}

impl SafeZone {
    fn of(viewport: ViewportBounds, element: ElementSize) -> Self {
        let min_x = EDGE_PADDING as f64;
        let min_y = EDGE_PADDING as f64;
        let max_x = (viewport.width - element.width - EDGE_PADDING) as f64;
        let max_y = (viewport.height - element.height - EDGE_PADDING) as f64;
        Self {
            min_x,
            max_x: max_x.max(min_x),
            min_y,
            max_y: max_y.max(min_y),
        }
    }

    fn sample(&self, rng: &mut Lcg) -> (f64, f64) {
        (
            self.min_x + rng.next_f64() * (self.max_x - self.min_x),
            self.min_y + rng.next_f64() * (self.max_y - self.min_y),
        )
    }

    fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}

// --- Solver ------------------------------------------------------------------

/// Pick a new position for the evading button, away from the cursor.
///
/// Rejection-samples uniform points in the safe zone until the button center
/// is more than [`MIN_CURSOR_DISTANCE`] from `cursor`. After
/// [`SOFT_ATTEMPT_CAP`] rejections any candidate is taken; [`HARD_ATTEMPT_CAP`]
/// bounds the loop unconditionally and the last sample is used.
pub fn compute_evade_position(
    cursor: CursorPoint,
    viewport: ViewportBounds,
    element: ElementSize,
    rng: &mut Lcg,
) -> ButtonPosition {
    let element = element.sanitized();
    let zone = SafeZone::of(viewport, element);
    let mut x = zone.min_x;
    let mut y = zone.min_y;
    for attempt in 0..HARD_ATTEMPT_CAP {
        let (sx, sy) = zone.sample(rng);
        x = sx;
        y = sy;
        let center_x = x + element.width as f64 / 2.0;
        let center_y = y + element.height as f64 / 2.0;
        let distance = ((center_x - cursor.x).powi(2) + (center_y - cursor.y).powi(2)).sqrt();
        if distance > MIN_CURSOR_DISTANCE || attempt > SOFT_ATTEMPT_CAP {
            break;
        }
    }
    ButtonPosition::At { x, y }
}

/// Deterministically pull an existing position back into the safe zone.
pub fn clamp_into_bounds(
    x: f64,
    y: f64,
    viewport: ViewportBounds,
    element: ElementSize,
) -> (f64, f64) {
    let zone = SafeZone::of(viewport, element.sanitized());
    (x.clamp(zone.min_x, zone.max_x), y.clamp(zone.min_y, zone.max_y))
}

/// Whether an absolute position still fits the (possibly resized) viewport.
pub fn in_bounds(x: f64, y: f64, viewport: ViewportBounds, element: ElementSize) -> bool {
    SafeZone::of(viewport, element.sanitized()).contains(x, y)
}

/// Fresh uniform-random in-bounds point, used after a resize invalidates a
/// stored position. Resampling instead of clamping keeps the button from
/// sticking to the nearest edge.
pub fn random_in_bounds(
    viewport: ViewportBounds,
    element: ElementSize,
    rng: &mut Lcg,
) -> ButtonPosition {
    let zone = SafeZone::of(viewport, element.sanitized());
    let (x, y) = zone.sample(rng);
    ButtonPosition::At { x, y }
}
