//! Frame-driven animation of a thrown marker.
//!
//! [`AnimationDriver`] owns the marker state and at most one current run.
//! A host calls [`AnimationDriver::tick`] once per display refresh, or hands
//! the driver a [`FrameClock`] and a [`MarkerRenderer`] and lets
//! [`AnimationDriver::drive`] loop until the run ends.

use crate::config::AnimationConfig;
use crate::error::Result;
use crate::layout::ClickGeometry;
use crate::trajectory_solver::{solve_motion, MotionParameters};
use nalgebra::Vector2;

/// Marker visibility and position as seen by the rendering layer
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarkerState {
    position: Option<Vector2<f64>>,
    in_progress: bool,
}

impl MarkerState {
    pub fn is_visible(&self) -> bool {
        self.in_progress
    }

    pub fn position(&self) -> Option<Vector2<f64>> {
        if self.in_progress {
            self.position
        } else {
            None
        }
    }

    /// Position rounded to whole pixels
    pub fn pixel_offsets(&self) -> Option<(i64, i64)> {
        self.position().map(|p| (p.x.round() as i64, p.y.round() as i64))
    }

    fn hide(&mut self) {
        self.in_progress = false;
        self.position = None;
    }
}

/// Identifies one animation run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RunHandle(u64);

impl RunHandle {
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// What a single frame did
#[derive(Debug, Clone, PartialEq)]
pub enum FrameOutcome {
    /// No run in progress
    Idle,
    Moved {
        run: RunHandle,
        position: Vector2<f64>,
    },
    /// The marker reached the landing bound; it is now hidden
    Finished {
        run: RunHandle,
        final_position: Vector2<f64>,
        frames: usize,
    },
    /// The run hit the frame cap before arriving; the marker is hidden
    Abandoned { run: RunHandle, frames: usize },
}

/// Host per-frame scheduling primitive.
///
/// Each call waits for the next display refresh and returns its timestamp
/// in milliseconds, or `None` once the host stops delivering frames.
pub trait FrameClock {
    fn next_frame(&mut self) -> Option<f64>;
}

/// Receives the marker state after every frame
pub trait MarkerRenderer {
    fn render(&mut self, marker: &MarkerState);
}

impl<F> MarkerRenderer for F
where
    F: FnMut(&MarkerState),
{
    fn render(&mut self, marker: &MarkerState) {
        self(marker)
    }
}

/// Clock that ticks at a fixed interval, for simulation and tests
#[derive(Debug, Clone)]
pub struct FixedRateClock {
    next_ms: f64,
    interval_ms: f64,
    remaining: Option<usize>,
}

impl FixedRateClock {
    pub fn new(start_ms: f64, interval_ms: f64) -> Self {
        Self {
            next_ms: start_ms,
            interval_ms,
            remaining: None,
        }
    }

    /// Stop after `frames` frames
    pub fn with_limit(mut self, frames: usize) -> Self {
        self.remaining = Some(frames);
        self
    }
}

impl FrameClock for FixedRateClock {
    fn next_frame(&mut self) -> Option<f64> {
        if let Some(remaining) = self.remaining.as_mut() {
            if *remaining == 0 {
                return None;
            }
            *remaining -= 1;
        }
        let now = self.next_ms;
        self.next_ms += self.interval_ms;
        Some(now)
    }
}

#[derive(Debug, Clone)]
struct ActiveRun {
    handle: RunHandle,
    params: MotionParameters,
    started_at_ms: f64,
    last_elapsed: f64,
    frames: usize,
}

/// Owns the marker and the single current run
#[derive(Debug, Clone)]
pub struct AnimationDriver {
    config: AnimationConfig,
    marker: MarkerState,
    current: Option<ActiveRun>,
    next_run_id: u64,
}

impl AnimationDriver {
    pub fn new(config: AnimationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            marker: MarkerState::default(),
            current: None,
            next_run_id: 1,
        })
    }

    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    pub fn marker(&self) -> &MarkerState {
        &self.marker
    }

    pub fn current_run(&self) -> Option<RunHandle> {
        self.current.as_ref().map(|run| run.handle)
    }

    pub fn current_motion(&self) -> Option<&MotionParameters> {
        self.current.as_ref().map(|run| &run.params)
    }

    /// Click handler: solve the throw for `geometry` and start it.
    pub fn launch(&mut self, geometry: &ClickGeometry, now_ms: f64) -> Result<RunHandle> {
        let (origin, target) = geometry.endpoints()?;
        let params = solve_motion(origin, target, geometry.scroll_y, &self.config)?;
        Ok(self.start(params, now_ms))
    }

    /// Start a run, replacing any run still in progress.
    pub fn start(&mut self, params: MotionParameters, now_ms: f64) -> RunHandle {
        if let Some(previous) = self.current.take() {
            tracing::warn!(
                replaced = previous.handle.id(),
                frames = previous.frames,
                "run replaced before arrival"
            );
        }

        let handle = RunHandle(self.next_run_id);
        self.next_run_id += 1;

        tracing::debug!(
            run = handle.id(),
            speed = params.initial_speed,
            angle_rad = params.launch_angle,
            direction = %params.direction,
            "run started"
        );

        self.marker.in_progress = true;
        self.marker.position = Some(params.origin);
        self.current = Some(ActiveRun {
            handle,
            params,
            started_at_ms: now_ms,
            last_elapsed: 0.0,
            frames: 0,
        });
        handle
    }

    /// Cancel `handle` if it is still the current run.
    pub fn cancel(&mut self, handle: RunHandle) -> bool {
        match &self.current {
            Some(run) if run.handle == handle => {
                self.current = None;
                self.marker.hide();
                tracing::debug!(run = handle.id(), "run cancelled");
                true
            }
            _ => false,
        }
    }

    /// Advance the current run to the frame at `now_ms`.
    pub fn tick(&mut self, now_ms: f64) -> FrameOutcome {
        let time_scale = self.config.time_scale_ms;
        let max_frames = self.config.max_frames;

        let (handle, frames, position, arrived) = match self.current.as_mut() {
            None => return FrameOutcome::Idle,
            Some(run) => {
                run.frames += 1;
                // Never step backwards, even if the host clock does
                let elapsed = ((now_ms - run.started_at_ms) / time_scale)
                    .max(run.last_elapsed)
                    .max(0.0);
                run.last_elapsed = elapsed;
                (
                    run.handle,
                    run.frames,
                    run.params.position_at(elapsed),
                    run.params.has_arrived(elapsed),
                )
            }
        };

        if arrived {
            self.current = None;
            self.marker.hide();
            tracing::debug!(run = handle.id(), frames, "run finished");
            return FrameOutcome::Finished {
                run: handle,
                final_position: position,
                frames,
            };
        }

        if frames >= max_frames {
            self.current = None;
            self.marker.hide();
            tracing::warn!(run = handle.id(), frames, "run abandoned at frame cap");
            return FrameOutcome::Abandoned { run: handle, frames };
        }

        self.marker.position = Some(position);
        FrameOutcome::Moved {
            run: handle,
            position,
        }
    }

    /// Run frames from `clock` until the current run ends, rendering after
    /// each one. Returns `None` if the clock stops first.
    pub fn drive<C, R>(&mut self, clock: &mut C, renderer: &mut R) -> Option<FrameOutcome>
    where
        C: FrameClock + ?Sized,
        R: MarkerRenderer + ?Sized,
    {
        loop {
            let now = clock.next_frame()?;
            let outcome = self.tick(now);
            renderer.render(&self.marker);
            match outcome {
                FrameOutcome::Moved { .. } => continue,
                other => return Some(other),
            }
        }
    }
}
