//! Interactive widget state machines.
//!
//! Each instance owns its state. Transitions are synchronous and never
//! fail: invalid selections clamp or are ignored.

pub mod accordion;
pub mod carousel;
pub mod faq;
pub mod image;
pub mod toggle;

pub use accordion::{AccordionState, CardVisual, Interaction, Orientation};
pub use carousel::{
    thumbnail_scroll_left, thumbnail_width, CarouselState, Direction, DragOutcome, DragThresholds,
};
pub use faq::FaqState;
pub use image::{placeholder_svg, AspectRatio, ImageLoad, ImageVariant};
pub use toggle::{Toggle, ToggleAction};
