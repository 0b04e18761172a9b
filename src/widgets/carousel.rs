//! Paged carousel with button, thumbnail and drag navigation.
//!
//! The index is clamped, never wrapped: `next` on the last item and `prev`
//! on the first are no-ops, and any `go_to` lands inside `[0, len - 1]`.

use serde::{Deserialize, Serialize};

use crate::motion::{Transition, CAROUSEL_SETTLE};

/// Direction of a one-page move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Forward,
    Backward,
}

/// Result of releasing a drag. Exactly one outcome per release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DragOutcome {
    Advance(Direction),
    SnapBack,
}

/// Drag-release thresholds. Empirical values; tune freely.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragThresholds {
    /// Release speed (px/s) above which a flick advances regardless of distance.
    pub flick_velocity: f64,
    /// Fraction of the container width a slow drag must cover to advance.
    pub offset_ratio: f64,
}

impl Default for DragThresholds {
    fn default() -> Self {
        Self {
            flick_velocity: 500.0,
            offset_ratio: 0.3,
        }
    }
}

impl DragThresholds {
    /// Classify a release. Dragging content leftwards (negative offset or
    /// velocity) reveals the next item.
    pub fn classify(&self, offset: f64, velocity: f64, container_width: f64) -> DragOutcome {
        if velocity.abs() > self.flick_velocity {
            return DragOutcome::Advance(direction_of(velocity));
        }
        if container_width > 0.0 && offset.abs() > self.offset_ratio * container_width {
            return DragOutcome::Advance(direction_of(offset));
        }
        DragOutcome::SnapBack
    }
}

fn direction_of(signed: f64) -> Direction {
    if signed > 0.0 {
        Direction::Backward
    } else {
        Direction::Forward
    }
}

/// Selection state of one carousel instance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CarouselState {
    index: usize,
    len: usize,
    dragging: bool,
    thresholds: DragThresholds,
}

impl CarouselState {
    /// Returns `None` for an empty item list: there is nothing to page.
    pub fn new(len: usize) -> Option<Self> {
        Self::with_thresholds(len, DragThresholds::default())
    }

    pub fn with_thresholds(len: usize, thresholds: DragThresholds) -> Option<Self> {
        if len == 0 {
            return None;
        }
        Some(Self {
            index: 0,
            len,
            dragging: false,
            thresholds,
        })
    }

    /// Restore a state carried by the client, clamping a stale index.
    pub fn at(len: usize, index: i64) -> Option<Self> {
        let mut state = Self::new(len)?;
        state.go_to(index);
        Some(state)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Select `target`, clamped into range.
    pub fn go_to(&mut self, target: i64) {
        let last = (self.len - 1) as i64;
        self.index = target.clamp(0, last) as usize;
    }

    pub fn next(&mut self) {
        self.go_to(self.index as i64 + 1);
    }

    pub fn prev(&mut self) {
        self.go_to(self.index as i64 - 1);
    }

    pub fn can_prev(&self) -> bool {
        self.index > 0
    }

    pub fn can_next(&self) -> bool {
        self.index + 1 < self.len
    }

    pub fn begin_drag(&mut self) {
        self.dragging = true;
    }

    /// Finish a drag and apply its outcome.
    pub fn end_drag(&mut self, offset: f64, velocity: f64, container_width: f64) -> DragOutcome {
        self.dragging = false;
        let outcome = self.thresholds.classify(offset, velocity, container_width);
        match outcome {
            DragOutcome::Advance(Direction::Forward) => self.next(),
            DragOutcome::Advance(Direction::Backward) => self.prev(),
            DragOutcome::SnapBack => {}
        }
        outcome
    }

    /// Horizontal translation of the slide track, in px.
    pub fn viewport_offset(&self, container_width: f64) -> f64 {
        -(self.index as f64) * container_width
    }

    /// Track translation as a percentage, for markup that does not know
    /// the rendered width.
    pub fn viewport_offset_pct(&self) -> f64 {
        -(self.index as f64) * 100.0
    }

    /// Transition used to settle onto the selected page.
    pub fn settle(&self) -> Transition {
        CAROUSEL_SETTLE
    }

    /// Position indicator, "3 / 5".
    pub fn counter(&self) -> String {
        format!("{} / {}", self.index + 1, self.len)
    }
}

// ============================================================================
// Thumbnail strip geometry
// ============================================================================

pub const THUMB_FULL_WIDTH: f64 = 120.0;
pub const THUMB_COLLAPSED_WIDTH: f64 = 40.0;
pub const THUMB_GAP: f64 = 4.0;
pub const THUMB_MARGIN: f64 = 4.0;

/// Width of thumbnail `i` when `active` is selected.
pub fn thumbnail_width(i: usize, active: usize) -> f64 {
    if i == active {
        THUMB_FULL_WIDTH
    } else {
        THUMB_COLLAPSED_WIDTH
    }
}

/// Scroll position that centres the active thumbnail in a strip of
/// `strip_width` px. Never negative.
pub fn thumbnail_scroll_left(index: usize, strip_width: f64) -> f64 {
    let item_start = index as f64 * (THUMB_COLLAPSED_WIDTH + THUMB_GAP) + THUMB_MARGIN;
    let centre_offset = strip_width / 2.0 - THUMB_FULL_WIDTH / 2.0;
    (item_start - centre_offset).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_empty_carousel_is_none() {
        assert!(CarouselState::new(0).is_none());
    }

    #[test]
    fn test_five_item_scenario() {
        let mut c = CarouselState::new(5).unwrap();
        c.prev();
        assert_eq!(c.index(), 0);
        for _ in 0..4 {
            c.next();
        }
        assert_eq!(c.index(), 4);
        c.next();
        assert_eq!(c.index(), 4);
        assert!(!c.can_next());
        assert!(c.can_prev());
    }

    #[test]
    fn test_next_prev_inverse_away_from_bounds() {
        for len in 2..8 {
            for start in 0..len - 1 {
                let mut c = CarouselState::at(len, start as i64).unwrap();
                c.next();
                c.prev();
                assert_eq!(c.index(), start);
            }
        }
    }

    #[test]
    fn test_go_to_clamps() {
        let mut c = CarouselState::new(3).unwrap();
        for (target, expected) in [(-10, 0), (-1, 0), (0, 0), (2, 2), (3, 2), (99, 2)] {
            c.go_to(target);
            assert_eq!(c.index(), expected);
            c.go_to(target);
            assert_eq!(c.index(), expected);
        }
    }

    #[test]
    fn test_drag_classification() {
        let t = DragThresholds::default();
        let width = 1000.0;
        assert_eq!(
            t.classify(-0.4 * width, 100.0, width),
            DragOutcome::Advance(Direction::Forward)
        );
        assert_eq!(
            t.classify(0.4 * width, -100.0, width),
            DragOutcome::Advance(Direction::Backward)
        );
        assert_eq!(t.classify(0.1 * width, 100.0, width), DragOutcome::SnapBack);
        // A fast flick wins over a short distance, in the velocity's direction.
        assert_eq!(
            t.classify(0.05 * width, -800.0, width),
            DragOutcome::Advance(Direction::Forward)
        );
    }

    #[test]
    fn test_end_drag_applies_outcome() {
        let mut c = CarouselState::at(5, 2).unwrap();
        c.begin_drag();
        assert!(c.is_dragging());
        assert_eq!(c.end_drag(-400.0, 0.0, 1000.0), DragOutcome::Advance(Direction::Forward));
        assert!(!c.is_dragging());
        assert_eq!(c.index(), 3);

        assert_eq!(c.end_drag(100.0, 0.0, 1000.0), DragOutcome::SnapBack);
        assert_eq!(c.index(), 3);

        assert_eq!(c.end_drag(0.0, 900.0, 1000.0), DragOutcome::Advance(Direction::Backward));
        assert_eq!(c.index(), 2);
    }

    #[test]
    fn test_drag_past_boundary_stays_clamped() {
        let mut c = CarouselState::new(2).unwrap();
        c.end_drag(500.0, 0.0, 1000.0);
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn test_custom_thresholds() {
        let strict = DragThresholds {
            flick_velocity: 2000.0,
            offset_ratio: 0.5,
        };
        let mut c = CarouselState::with_thresholds(4, strict).unwrap();
        assert_eq!(c.end_drag(-400.0, -800.0, 1000.0), DragOutcome::SnapBack);
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn test_viewport_and_counter() {
        let c = CarouselState::at(5, 2).unwrap();
        assert_relative_eq!(c.viewport_offset(800.0), -1600.0);
        assert_relative_eq!(c.viewport_offset_pct(), -200.0);
        assert_eq!(c.counter(), "3 / 5");
        assert_eq!(c.settle(), CAROUSEL_SETTLE);
    }

    #[test]
    fn test_thumbnail_geometry() {
        assert_relative_eq!(thumbnail_width(2, 2), 120.0);
        assert_relative_eq!(thumbnail_width(1, 2), 40.0);
        // Early thumbnails cannot scroll left of the strip start.
        assert_relative_eq!(thumbnail_scroll_left(0, 600.0), 0.0);
        // index 10: 10*44 + 4 - (300 - 60) = 204
        assert_relative_eq!(thumbnail_scroll_left(10, 600.0), 204.0);
    }
}
