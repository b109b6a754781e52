use crate::angle_calculations::{discriminant, minimum_speed_launch};
use crate::config::AnimationConfig;
use crate::error::{CartTossError, Result};
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_2;
use std::fmt;

/// Horizontal direction of travel on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Leftward,
    Rightward,
}

impl Direction {
    /// Sign applied to the travelled distance to get a screen x offset
    pub fn sign(self) -> f64 {
        match self {
            Direction::Leftward => -1.0,
            Direction::Rightward => 1.0,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Direction::Leftward => write!(f, "leftward"),
            Direction::Rightward => write!(f, "rightward"),
        }
    }
}

/// Shape of the solved path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathKind {
    /// Parabola through both endpoints
    Ballistic,
    /// Straight up or down; used when the horizontal span is negligible
    Vertical,
}

/// Solved throw from a launch point to a landing point
#[derive(Debug, Clone, PartialEq)]
pub struct MotionParameters {
    pub origin: Vector2<f64>,
    pub target: Vector2<f64>,
    pub gravity: f64,
    pub initial_speed: u32,
    pub horizontal_span: f64, // px, along the direction of travel (>= 0)
    pub vertical_span: f64, // px to climb, scroll-corrected
    pub direction: Direction,
    pub launch_angle: f64, // radians above horizontal
    pub path: PathKind,
    pub attempts: u32,
}

impl MotionParameters {
    /// Distance travelled along the direction of travel and height gained
    /// after `t` scaled time units.
    pub fn offset_at(&self, t: f64) -> (f64, f64) {
        let v = self.initial_speed as f64;
        let (sin_theta, cos_theta) = self.launch_angle.sin_cos();
        match self.path {
            PathKind::Ballistic => {
                let along = v * cos_theta * t;
                let rise = self.launch_angle.tan() * along
                    - (self.gravity / (2.0 * v * v * cos_theta * cos_theta)) * along * along;
                (along, rise)
            }
            PathKind::Vertical => {
                let rise = v * sin_theta * t - 0.5 * self.gravity * t * t;
                (0.0, rise)
            }
        }
    }

    /// Screen position of the marker after `t` scaled time units
    pub fn position_at(&self, t: f64) -> Vector2<f64> {
        let (along, rise) = self.offset_at(t);
        Vector2::new(
            self.origin.x + self.direction.sign() * along,
            self.origin.y - rise,
        )
    }

    /// Whether the marker has reached or passed the landing bound at `t`
    pub fn has_arrived(&self, t: f64) -> bool {
        let (along, rise) = self.offset_at(t);
        match self.path {
            PathKind::Ballistic => along >= self.horizontal_span,
            PathKind::Vertical if self.vertical_span > 0.0 => {
                rise >= self.vertical_span || t >= self.apex_time()
            }
            PathKind::Vertical => rise <= self.vertical_span,
        }
    }

    /// Scaled time of the highest point, zero for paths launched downward
    pub fn apex_time(&self) -> f64 {
        let vertical_speed = self.initial_speed as f64 * self.launch_angle.sin();
        (vertical_speed / self.gravity).max(0.0)
    }

    /// Discriminant at the solved speed; `None` for the vertical fallback
    pub fn discriminant(&self) -> Option<f64> {
        match self.path {
            PathKind::Ballistic => Some(
                discriminant(
                    self.initial_speed as f64,
                    self.horizontal_span,
                    self.vertical_span,
                    self.gravity,
                )
                .discriminant,
            ),
            PathKind::Vertical => None,
        }
    }
}

/// Solve the launch speed and angle that carry a marker from `origin` to
/// `target`.
///
/// `scroll_y` is subtracted from the height to climb. Spans narrower than
/// `config.min_horizontal_span` take a vertical path instead of the
/// parabola, whose equation is undefined at zero span.
pub fn solve_motion(
    origin: Vector2<f64>,
    target: Vector2<f64>,
    scroll_y: f64,
    config: &AnimationConfig,
) -> Result<MotionParameters> {
    config.validate()?;
    if !origin.x.is_finite() || !origin.y.is_finite() {
        return Err(CartTossError::NonFiniteGeometry("origin"));
    }
    if !target.x.is_finite() || !target.y.is_finite() {
        return Err(CartTossError::NonFiniteGeometry("target"));
    }
    if !scroll_y.is_finite() {
        return Err(CartTossError::NonFiniteGeometry("scroll offset"));
    }

    let gravity = config.gravity;
    let dx = target.x - origin.x;
    let horizontal_span = dx.abs();
    let vertical_span = origin.y - target.y - scroll_y;
    let direction = if dx < 0.0 {
        Direction::Leftward
    } else {
        Direction::Rightward
    };

    if horizontal_span < config.min_horizontal_span {
        tracing::warn!(
            horizontal_span,
            vertical_span,
            "horizontal span below threshold, using vertical path"
        );
        let (initial_speed, launch_angle) = if vertical_span > 0.0 {
            let speed = (2.0 * gravity * vertical_span).sqrt().ceil().max(1.0);
            (speed as u32, FRAC_PI_2)
        } else {
            (0, -FRAC_PI_2)
        };
        return Ok(MotionParameters {
            origin,
            target,
            gravity,
            initial_speed,
            horizontal_span,
            vertical_span,
            direction,
            launch_angle,
            path: PathKind::Vertical,
            attempts: 0,
        });
    }

    let result = minimum_speed_launch(
        horizontal_span,
        vertical_span,
        gravity,
        config.max_speed_attempts,
    )
    .map_err(|attempts| CartTossError::SolverExhausted { attempts })?;

    tracing::debug!(
        speed = result.speed,
        angle_rad = result.angle_rad,
        attempts = result.iterations_used,
        %direction,
        "solved launch"
    );

    Ok(MotionParameters {
        origin,
        target,
        gravity,
        initial_speed: result.speed,
        horizontal_span,
        vertical_span,
        direction,
        launch_angle: result.angle_rad,
        path: PathKind::Ballistic,
        attempts: result.iterations_used,
    })
}
