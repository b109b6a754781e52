// CLI API module - serializable reports shared by the command-line tool and WASM bindings
use crate::animation::MarkerState;
use crate::trajectory_sampling::FrameSample;
use crate::trajectory_solver::{Direction, MotionParameters, PathKind};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

// Output format for results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(format!("unknown output format: {other}")),
        }
    }
}

/// Solved motion parameters in plain numbers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolveSummary {
    pub origin_x: f64,
    pub origin_y: f64,
    pub target_x: f64,
    pub target_y: f64,
    pub gravity: f64,
    pub initial_speed: u32,
    pub horizontal_span: f64,
    pub vertical_span: f64,
    pub direction: Direction,
    pub launch_angle_rad: f64,
    pub launch_angle_deg: f64,
    pub path: PathKind,
    pub attempts: u32,
    pub discriminant: Option<f64>,
}

impl From<&MotionParameters> for SolveSummary {
    fn from(params: &MotionParameters) -> Self {
        Self {
            origin_x: params.origin.x,
            origin_y: params.origin.y,
            target_x: params.target.x,
            target_y: params.target.y,
            gravity: params.gravity,
            initial_speed: params.initial_speed,
            horizontal_span: params.horizontal_span,
            vertical_span: params.vertical_span,
            direction: params.direction,
            launch_angle_rad: params.launch_angle,
            launch_angle_deg: params.launch_angle.to_degrees(),
            path: params.path,
            attempts: params.attempts,
            discriminant: params.discriminant(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameRecord {
    pub frame: usize,
    pub elapsed_ms: f64,
    pub x: f64,
    pub y: f64,
    pub flags: Vec<String>,
}

impl From<&FrameSample> for FrameRecord {
    fn from(sample: &FrameSample) -> Self {
        Self {
            frame: sample.frame,
            elapsed_ms: sample.elapsed_ms,
            x: sample.position.x,
            y: sample.position.y,
            flags: sample.flags.iter().map(|f| f.as_str().to_string()).collect(),
        }
    }
}

/// A whole simulated run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationReport {
    pub motion: SolveSummary,
    pub frame_interval_ms: f64,
    pub duration_ms: f64,
    pub frames: Vec<FrameRecord>,
}

impl AnimationReport {
    pub fn new(params: &MotionParameters, frame_interval_ms: f64, samples: &[FrameSample]) -> Self {
        Self {
            motion: SolveSummary::from(params),
            frame_interval_ms,
            duration_ms: samples.last().map(|s| s.elapsed_ms).unwrap_or(0.0),
            frames: samples.iter().map(FrameRecord::from).collect(),
        }
    }
}

/// Inline style for the marker element: pixel strings, empty when hidden
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerStyle {
    pub visible: bool,
    pub left: String,
    pub top: String,
}

impl From<&MarkerState> for MarkerStyle {
    fn from(marker: &MarkerState) -> Self {
        match marker.pixel_offsets() {
            Some((left, top)) if marker.is_visible() => Self {
                visible: true,
                left: format!("{left}px"),
                top: format!("{top}px"),
            },
            _ => Self::default(),
        }
    }
}
