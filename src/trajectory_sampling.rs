use crate::animation::{AnimationDriver, FixedRateClock, FrameClock, FrameOutcome};
use crate::config::AnimationConfig;
use crate::error::{CartTossError, Result};
use crate::trajectory_solver::MotionParameters;
use nalgebra::Vector2;

/// Notable events along a sampled path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathFlag {
    Apex,
    Arrival,
}

impl PathFlag {
    pub fn as_str(&self) -> &'static str {
        match self {
            PathFlag::Apex => "apex",
            PathFlag::Arrival => "arrival",
        }
    }
}

/// Marker position at one rendered frame
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSample {
    pub frame: usize,
    pub elapsed_ms: f64,
    pub position: Vector2<f64>,
    pub flags: Vec<PathFlag>,
}

/// Play a whole run at a fixed frame interval and record every frame.
///
/// The last sample is the arrival frame. A run that hits the frame cap
/// yields the frames rendered before it was abandoned.
pub fn sample_path(
    params: &MotionParameters,
    config: &AnimationConfig,
    frame_interval_ms: f64,
) -> Result<Vec<FrameSample>> {
    if !frame_interval_ms.is_finite() || frame_interval_ms <= 0.0 {
        return Err(CartTossError::InvalidConfig(format!(
            "frame interval must be positive and finite, got {frame_interval_ms}"
        )));
    }

    let mut driver = AnimationDriver::new(config.clone())?;
    driver.start(params.clone(), 0.0);
    let mut clock = FixedRateClock::new(0.0, frame_interval_ms);

    let apex_ms = params.apex_time() * config.time_scale_ms;
    let mut apex_marked = apex_ms <= 0.0;
    let mut samples = Vec::new();

    while let Some(now) = clock.next_frame() {
        let (position, arrived) = match driver.tick(now) {
            FrameOutcome::Moved { position, .. } => (position, false),
            FrameOutcome::Finished { final_position, .. } => (final_position, true),
            FrameOutcome::Abandoned { .. } | FrameOutcome::Idle => break,
        };

        let mut flags = Vec::new();
        if !apex_marked && now >= apex_ms {
            flags.push(PathFlag::Apex);
            apex_marked = true;
        }
        if arrived {
            flags.push(PathFlag::Arrival);
        }

        samples.push(FrameSample {
            frame: samples.len(),
            elapsed_ms: now,
            position,
            flags,
        });

        if arrived {
            break;
        }
    }

    Ok(samples)
}
