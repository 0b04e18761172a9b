//! Open/closed disclosure for the mobile menu and navigation dropdowns.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToggleAction {
    Toggle,
    Open,
    Close,
    /// Escape key: same as close.
    Escape,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Toggle {
    open: bool,
}

impl Toggle {
    pub fn new(open: bool) -> Self {
        Self { open }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn apply(&mut self, action: ToggleAction) {
        self.open = match action {
            ToggleAction::Toggle => !self.open,
            ToggleAction::Open => true,
            ToggleAction::Close | ToggleAction::Escape => false,
        };
    }

    /// Value for the trigger's `aria-expanded` attribute.
    pub fn aria_expanded(&self) -> &'static str {
        if self.open {
            "true"
        } else {
            "false"
        }
    }
}
