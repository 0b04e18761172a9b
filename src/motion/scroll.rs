//! Scroll-linked transforms.
//!
//! The browser owns scroll position. The curves live here and reach the
//! page as data attributes; the layout script evaluates them per event.

use serde::Serialize;

use crate::motion::easing::{CubicBezier, EASE_OUT_EXPO};

/// Clamped linear interpolation of `value` from `input` onto `output`.
///
/// Values outside `input` pin to the nearest output endpoint. A degenerate
/// input range returns the output start.
pub fn map_range(value: f64, input: (f64, f64), output: (f64, f64)) -> f64 {
    let (in_lo, in_hi) = input;
    let (out_lo, out_hi) = output;
    let span = in_hi - in_lo;
    if span.abs() < f64::EPSILON {
        return out_lo;
    }
    let t = ((value - in_lo) / span).clamp(0.0, 1.0);
    out_lo + (out_hi - out_lo) * t
}

/// Hero block transform for a given scroll progress through the hero
/// (0 when its top meets the viewport top, 1 when it has scrolled out).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HeroParallax {
    /// Downward translation in px.
    pub y: f64,
    pub opacity: f64,
}

impl HeroParallax {
    pub const MAX_SHIFT_PX: f64 = 150.0;
    pub const FADE_END: f64 = 0.6;

    pub fn at(progress: f64) -> Self {
        Self {
            y: map_range(progress, (0.0, 1.0), (0.0, Self::MAX_SHIFT_PX)),
            opacity: map_range(progress, (0.0, Self::FADE_END), (1.0, 0.0)),
        }
    }

    pub fn css(&self) -> String {
        format!("transform: translateY({:.1}px); opacity: {:.3}", self.y, self.opacity)
    }
}

pub const HEADER_SOLID_AFTER_PX: f64 = 100.0;
pub const SCROLL_TOP_VISIBLE_AFTER_PX: f64 = 300.0;

/// Parameters of every scroll-linked effect, written into the page shell
/// as `data-*` attributes and applied by the layout script on each scroll
/// or intersection event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScrollMotion {
    /// Header turns solid once `scrollY` exceeds this.
    pub header_solid_after: f64,
    /// Scroll-to-top button shows once `scrollY` exceeds this.
    pub scroll_top_after: f64,
    /// Hero translation at progress 1, in px.
    pub parallax_shift: f64,
    /// Hero progress at which opacity reaches 0.
    pub parallax_fade_end: f64,
    /// Decorative layers move `scrollY * drift` px.
    pub drift: f64,
    /// Distance a `data-reveal` element rises when it enters the viewport.
    pub reveal_rise: f64,
    pub reveal_ease: CubicBezier,
}

impl ScrollMotion {
    pub const SITE: ScrollMotion = ScrollMotion {
        header_solid_after: HEADER_SOLID_AFTER_PX,
        scroll_top_after: SCROLL_TOP_VISIBLE_AFTER_PX,
        parallax_shift: HeroParallax::MAX_SHIFT_PX,
        parallax_fade_end: HeroParallax::FADE_END,
        drift: 0.03,
        reveal_rise: 30.0,
        reveal_ease: EASE_OUT_EXPO,
    };

    /// Body attributes read by the layout script.
    pub fn data_attrs(&self) -> String {
        format!(
            "data-header-solid-after=\"{}\" data-scroll-top-after=\"{}\" data-parallax-shift=\"{}\" \
             data-parallax-fade-end=\"{}\" data-drift=\"{}\" data-reveal-rise=\"{}\" data-reveal-ease=\"{}\"",
            self.header_solid_after,
            self.scroll_top_after,
            self.parallax_shift,
            self.parallax_fade_end,
            self.drift,
            self.reveal_rise,
            self.reveal_ease.css()
        )
    }
}
