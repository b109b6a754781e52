/// Coefficients of `tan²θ + b·tanθ + c = 0`, the trajectory equation
/// `y = x·tanθ − g·x²/(2v²cos²θ)` evaluated at the landing point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticCoefficients {
    pub b: f64,
    pub c: f64,
    pub discriminant: f64,
}

/// Result of the launch angle search
#[derive(Debug, Clone)]
pub struct AngleResult {
    pub angle_rad: f64,
    pub speed: u32,
    pub iterations_used: u32,
    pub discriminant: f64,
}

/// Evaluate the quadratic in `tanθ` for a given launch speed.
///
/// `span` is the horizontal distance along the direction of travel and
/// `rise` the height to climb. `span` must be non-zero.
pub fn discriminant(speed: f64, span: f64, rise: f64, gravity: f64) -> QuadraticCoefficients {
    let v2 = speed * speed;
    let gs2 = gravity * span * span;
    let b = -(2.0 * v2 * span) / gs2;
    let c = 1.0 + (2.0 * v2 * rise) / gs2;
    QuadraticCoefficients {
        b,
        c,
        discriminant: b * b - 4.0 * c,
    }
}

/// Both launch angles (radians) for a real solution, or `None` when the
/// discriminant is negative.
pub fn launch_angle_roots(coefficients: &QuadraticCoefficients) -> Option<(f64, f64)> {
    let QuadraticCoefficients { b, discriminant, .. } = *coefficients;
    if discriminant < 0.0 || !discriminant.is_finite() {
        return None;
    }
    let root = discriminant.sqrt();
    let low = ((-b - root) / 2.0).atan();
    let high = ((-b + root) / 2.0).atan();
    Some((low, high))
}

/// Find the smallest integer speed that reaches `(span, rise)` and the
/// steeper of its two launch angles.
///
/// Speeds are tried as 1, 2, 3, … up to `max_attempts`. Returns `Err` with
/// the number of attempts made when none yields a real angle.
pub fn minimum_speed_launch(
    span: f64,
    rise: f64,
    gravity: f64,
    max_attempts: u32,
) -> Result<AngleResult, u32> {
    for attempt in 1..=max_attempts {
        let coefficients = discriminant(attempt as f64, span, rise, gravity);
        if let Some((low, high)) = launch_angle_roots(&coefficients) {
            return Ok(AngleResult {
                angle_rad: low.max(high),
                speed: attempt,
                iterations_used: attempt,
                discriminant: coefficients.discriminant,
            });
        }
    }
    Err(max_attempts)
}
