//! Expanding cards: one item enlarged, siblings collapsed to a strip.

use serde::{Deserialize, Serialize};

/// Input that can activate a card. All of them do the same thing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Interaction {
    PointerEnter,
    Focus,
    Click,
}

/// Axis along which the cards are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Side by side; used on wide viewports.
    Columns,
    /// Stacked; used below the breakpoint.
    Rows,
}

impl Orientation {
    pub fn for_viewport(width: u32, breakpoint: u32) -> Self {
        if width >= breakpoint {
            Orientation::Columns
        } else {
            Orientation::Rows
        }
    }

    /// CSS grid property the track template applies to.
    pub fn grid_property(&self) -> &'static str {
        match self {
            Orientation::Columns => "grid-template-columns",
            Orientation::Rows => "grid-template-rows",
        }
    }
}

pub const ACTIVE_WEIGHT: u32 = 5;
pub const COLLAPSED_WEIGHT: u32 = 1;

/// Target look of one card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CardVisual {
    /// Title, description and link are shown.
    pub revealed: bool,
    /// Share of the primary axis, in `fr`.
    pub weight: u32,
}

/// Exactly one active card among `len`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccordionState {
    active: usize,
    len: usize,
}

impl AccordionState {
    /// `default` is clamped into range. Zero cards has no valid state.
    pub fn new(len: usize, default: usize) -> Option<Self> {
        if len == 0 {
            return None;
        }
        Some(Self {
            active: default.min(len - 1),
            len,
        })
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_active(&self, i: usize) -> bool {
        i == self.active
    }

    /// Make `i` the active card. Indices outside the list are ignored.
    pub fn activate(&mut self, i: usize) {
        if i < self.len {
            self.active = i;
        }
    }

    pub fn interact(&mut self, i: usize, _via: Interaction) {
        self.activate(i);
    }

    pub fn visual(&self, i: usize) -> CardVisual {
        if self.is_active(i) {
            CardVisual {
                revealed: true,
                weight: ACTIVE_WEIGHT,
            }
        } else {
            CardVisual {
                revealed: false,
                weight: COLLAPSED_WEIGHT,
            }
        }
    }

    /// Grid track list, e.g. `"1fr 5fr 1fr"`.
    pub fn track_template(&self) -> String {
        (0..self.len)
            .map(|i| format!("{}fr", self.visual(i).weight))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Inline style for the card container.
    pub fn grid_style(&self, orientation: Orientation) -> String {
        format!("{}: {}", orientation.grid_property(), self.track_template())
    }
}
