//! Presentation helpers: easing, scroll-linked transforms and decorative
//! shapes. Everything is a pure function of its inputs.

pub mod easing;
pub mod scroll;
pub mod shapes;

pub use easing::{stagger_delay, CubicBezier, Transition, CAROUSEL_SETTLE, EASE_OUT_EXPO};
pub use scroll::{map_range, HeroParallax, ScrollMotion};
pub use shapes::{
    floating_leaves, orbit_positions, AccentLine, Divider, DividerVariant, FloatingLeaf, LinePosition,
    LineStyle, OrbitPoint, Surface, LEAF_PATH,
};
