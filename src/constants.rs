/// Constants used by the trajectory solver and animation driver

/// Simulated gravitational acceleration in pixels per scaled time unit squared
pub const DEFAULT_GRAVITY: f64 = 10.0;

/// Milliseconds of wall-clock time per scaled time unit
///
/// Elapsed frame time is divided by this before it is fed to the trajectory
/// equation, so a value of 60 means one unit of `t` every 60 ms.
pub const DEFAULT_TIME_SCALE_MS: f64 = 60.0;

/// Upper bound on solver speed increments before giving up
///
/// The minimum integer speed for a span `S` and rise `H` satisfies
/// `v² ≥ g·(H + √(H² + S²))`, so with g = 10 this cap covers spans of
/// several million pixels.
pub const DEFAULT_MAX_SPEED_ATTEMPTS: u32 = 10_000;

/// Upper bound on frames in a single animation run
pub const DEFAULT_MAX_FRAMES: usize = 100_000;

// Numerical stability constants
/// Horizontal spans below this (in pixels) use the vertical fallback path
pub const MIN_HORIZONTAL_SPAN: f64 = 1e-6;

/// Frame interval used when none is given (60 Hz display)
pub const DEFAULT_FRAME_INTERVAL_MS: f64 = 1000.0 / 60.0;

// Catalog geometry defaults, in pixels
/// Number of product cards in the default catalog
pub const DEFAULT_CARD_COUNT: usize = 8;

/// Cards per grid row
pub const DEFAULT_GRID_COLUMNS: usize = 4;

pub const DEFAULT_CARD_WIDTH: f64 = 200.0;
pub const DEFAULT_CARD_HEIGHT: f64 = 260.0;
pub const DEFAULT_CARD_GAP: f64 = 24.0;
pub const DEFAULT_BUTTON_WIDTH: f64 = 80.0;
pub const DEFAULT_BUTTON_HEIGHT: f64 = 32.0;
