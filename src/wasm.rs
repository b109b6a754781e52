// WASM bindings: call `click` from the button handler and `frame` from requestAnimationFrame
use wasm_bindgen::prelude::*;

use crate::animation::{AnimationDriver, FrameOutcome};
use crate::cli_api::{MarkerStyle, SolveSummary};
use crate::config::AnimationConfig;
use crate::layout::{ClickGeometry, ScreenBox};
use crate::trajectory_solver::solve_motion;

fn to_js(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen]
pub struct WasmCartAnimation {
    driver: AnimationDriver,
}

#[wasm_bindgen]
impl WasmCartAnimation {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<WasmCartAnimation, JsValue> {
        let driver = AnimationDriver::new(AnimationConfig::default()).map_err(to_js)?;
        Ok(WasmCartAnimation { driver })
    }

    /// Build from a JSON `AnimationConfig`; missing fields use defaults.
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(config_json: &str) -> Result<WasmCartAnimation, JsValue> {
        let config = AnimationConfig::from_json_str(config_json).map_err(to_js)?;
        let driver = AnimationDriver::new(config).map_err(to_js)?;
        Ok(WasmCartAnimation { driver })
    }

    /// Start a throw from the clicked control to the cart. Replaces any
    /// throw still in flight and returns the new run id.
    #[allow(clippy::too_many_arguments)]
    pub fn click(
        &mut self,
        control_left: f64,
        control_top: f64,
        control_width: f64,
        control_height: f64,
        cart_left: f64,
        cart_top: f64,
        scroll_y: f64,
        now_ms: f64,
    ) -> Result<f64, JsValue> {
        let geometry = ClickGeometry::new(
            ScreenBox::new(control_left, control_top, control_width, control_height),
            ScreenBox::new(cart_left, cart_top, 0.0, 0.0),
            scroll_y,
        );
        let handle = self.driver.launch(&geometry, now_ms).map_err(to_js)?;
        Ok(handle.id() as f64)
    }

    /// Advance one frame and return the marker style as JSON.
    pub fn frame(&mut self, now_ms: f64) -> Result<String, JsValue> {
        self.driver.tick(now_ms);
        let style = MarkerStyle::from(self.driver.marker());
        serde_json::to_string(&style).map_err(to_js)
    }

    /// Whether the caller should request another animation frame
    #[wasm_bindgen(js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.driver.marker().is_visible()
    }

    /// Cancel the current throw, if any.
    pub fn cancel(&mut self) -> bool {
        match self.driver.current_run() {
            Some(handle) => self.driver.cancel(handle),
            None => false,
        }
    }

    /// Solve a throw between two points without animating it.
    pub fn solve(
        &self,
        origin_x: f64,
        origin_y: f64,
        target_x: f64,
        target_y: f64,
        scroll_y: f64,
    ) -> Result<String, JsValue> {
        let params = solve_motion(
            nalgebra::Vector2::new(origin_x, origin_y),
            nalgebra::Vector2::new(target_x, target_y),
            scroll_y,
            self.driver.config(),
        )
        .map_err(to_js)?;
        serde_json::to_string(&SolveSummary::from(&params)).map_err(to_js)
    }
}

/// Run a throw to completion at a fixed frame interval and report whether
/// it arrived. Useful for checking geometry from the JS console.
#[wasm_bindgen(js_name = simulateThrow)]
pub fn simulate_throw(
    origin_x: f64,
    origin_y: f64,
    target_x: f64,
    target_y: f64,
    frame_interval_ms: f64,
) -> Result<bool, JsValue> {
    let config = AnimationConfig::default();
    let params = solve_motion(
        nalgebra::Vector2::new(origin_x, origin_y),
        nalgebra::Vector2::new(target_x, target_y),
        0.0,
        &config,
    )
    .map_err(to_js)?;
    let mut driver = AnimationDriver::new(config).map_err(to_js)?;
    driver.start(params, 0.0);
    let mut clock = crate::animation::FixedRateClock::new(0.0, frame_interval_ms);
    let outcome = driver.drive(&mut clock, &mut |_: &crate::animation::MarkerState| {});
    Ok(matches!(outcome, Some(FrameOutcome::Finished { .. })))
}
