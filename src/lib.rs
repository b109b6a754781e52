//! # Cart Toss
//!
//! Projectile-arc "add to cart" animation: solves the throw from a clicked
//! control to the cart indicator and drives the marker frame by frame.

// Re-export the main types and functions
pub use animation::{
    AnimationDriver, FixedRateClock, FrameClock, FrameOutcome, MarkerRenderer, MarkerState,
    RunHandle,
};
pub use cli_api::{AnimationReport, FrameRecord, MarkerStyle, OutputFormat, SolveSummary};
pub use config::AnimationConfig;
pub use error::{CartTossError, Result};
pub use layout::{CatalogLayout, ClickGeometry, ScreenBox};
pub use trajectory_sampling::{sample_path, FrameSample, PathFlag};
pub use trajectory_solver::{solve_motion, Direction, MotionParameters, PathKind};

// Module declarations
pub mod angle_calculations;
pub mod animation;
pub mod cli_api;
pub mod config;
pub mod constants;
mod error;
pub mod layout;
mod trajectory_sampling;
mod trajectory_solver;

#[cfg(feature = "wasm")]
pub mod wasm;
