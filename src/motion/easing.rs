//! Easing curves and transition descriptors.
//!
//! Animations are declarative: state maps to a target, and the browser
//! interpolates towards it with one of these transitions. Nothing here
//! waits on an animation finishing.

use serde::Serialize;

/// CSS-style cubic Bézier timing function through (0,0), p1, p2, (1,1).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CubicBezier {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// The site's signature curve: quick start, long soft landing.
pub const EASE_OUT_EXPO: CubicBezier = CubicBezier::new(0.16, 1.0, 0.3, 1.0);

/// Browser `ease-in-out`, used by the looping background shapes.
pub const EASE_IN_OUT: CubicBezier = CubicBezier::new(0.42, 0.0, 0.58, 1.0);

/// Browser `ease-out`, used by the thumbnail strip.
pub const EASE_OUT: CubicBezier = CubicBezier::new(0.0, 0.0, 0.58, 1.0);

impl CubicBezier {
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    fn sample_x(&self, t: f64) -> f64 {
        let mt = 1.0 - t;
        3.0 * mt * mt * t * self.x1 + 3.0 * mt * t * t * self.x2 + t * t * t
    }

    fn sample_y(&self, t: f64) -> f64 {
        let mt = 1.0 - t;
        3.0 * mt * mt * t * self.y1 + 3.0 * mt * t * t * self.y2 + t * t * t
    }

    fn slope_x(&self, t: f64) -> f64 {
        let mt = 1.0 - t;
        3.0 * mt * mt * self.x1 + 6.0 * mt * t * (self.x2 - self.x1) + 3.0 * t * t * (1.0 - self.x2)
    }

    /// Curve parameter whose x coordinate is `x`.
    fn solve_t(&self, x: f64) -> f64 {
        // Newton first; the curve is monotonic in x for valid timing functions.
        let mut t = x;
        for _ in 0..8 {
            let err = self.sample_x(t) - x;
            if err.abs() < 1e-7 {
                return t;
            }
            let slope = self.slope_x(t);
            if slope.abs() < 1e-6 {
                break;
            }
            t -= err / slope;
        }

        // Bisection fallback for flat regions.
        let (mut lo, mut hi) = (0.0, 1.0);
        t = x;
        for _ in 0..64 {
            let value = self.sample_x(t);
            if (value - x).abs() < 1e-7 {
                break;
            }
            if value < x {
                lo = t;
            } else {
                hi = t;
            }
            t = (lo + hi) / 2.0;
        }
        t
    }

    /// Eased progress for linear progress `x`, clamped to [0, 1].
    pub fn ease(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }
        self.sample_y(self.solve_t(x))
    }

    pub fn css(&self) -> String {
        format!("cubic-bezier({},{},{},{})", self.x1, self.y1, self.x2, self.y2)
    }
}

/// How a property moves towards its target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Transition {
    Tween {
        duration: f64,
        delay: f64,
        ease: CubicBezier,
    },
    Spring {
        stiffness: f64,
        damping: f64,
    },
}

/// Carousel settle: a stiff, well-damped spring.
pub const CAROUSEL_SETTLE: Transition = Transition::Spring {
    stiffness: 300.0,
    damping: 30.0,
};

impl Transition {
    pub fn tween(duration: f64, delay: f64) -> Self {
        Transition::Tween {
            duration,
            delay,
            ease: EASE_OUT_EXPO,
        }
    }

    /// CSS `transition` value for `property`. Springs have no CSS form and
    /// are approximated by their settling time with the default curve.
    pub fn css(&self, property: &str) -> String {
        match self {
            Transition::Tween { duration, delay, ease } => {
                if *delay > 0.0 {
                    format!("{} {}s {} {}s", property, duration, ease.css(), delay)
                } else {
                    format!("{} {}s {}", property, duration, ease.css())
                }
            }
            Transition::Spring { stiffness, damping } => {
                let settle = spring_settle_seconds(*stiffness, *damping);
                format!("{} {:.2}s {}", property, settle, EASE_OUT_EXPO.css())
            }
        }
    }
}

/// Approximate 2% settling time of a unit-mass spring.
fn spring_settle_seconds(stiffness: f64, damping: f64) -> f64 {
    let zeta = damping / (2.0 * stiffness.sqrt());
    let omega = stiffness.sqrt();
    if zeta <= 0.0 || omega <= 0.0 {
        return 0.0;
    }
    4.0 / (zeta * omega)
}

/// Delay for the `index`-th element of a staggered reveal.
pub fn stagger_delay(index: usize, step: f64) -> f64 {
    index as f64 * step
}
