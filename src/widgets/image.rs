//! Image slot with load/error states and a decorative fallback.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageLoad {
    #[default]
    Pending,
    Loaded,
    Failed,
}

impl ImageLoad {
    /// Only a pending image can resolve; later callbacks are ignored.
    pub fn on_loaded(&mut self) {
        if *self == ImageLoad::Pending {
            *self = ImageLoad::Loaded;
        }
    }

    /// Failure is terminal. There is no retry.
    pub fn on_failed(&mut self) {
        if *self == ImageLoad::Pending {
            tracing::debug!("Image failed to load, showing placeholder");
            *self = ImageLoad::Failed;
        }
    }

    pub fn shows_placeholder(&self) -> bool {
        *self == ImageLoad::Failed
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            ImageLoad::Pending => "img-pending",
            ImageLoad::Loaded => "img-loaded",
            ImageLoad::Failed => "img-failed",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageVariant {
    #[default]
    Default,
    Portrait,
    Hero,
    Card,
    Circle,
}

impl ImageVariant {
    pub fn css_class(&self) -> &'static str {
        match self {
            ImageVariant::Default => "img-default",
            ImageVariant::Portrait => "img-portrait",
            ImageVariant::Hero => "img-hero",
            ImageVariant::Card => "img-card",
            ImageVariant::Circle => "img-circle",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AspectRatio {
    Square,
    Landscape,
    Portrait,
    Wide,
    Ultrawide,
    #[default]
    Auto,
}

impl AspectRatio {
    pub fn css_class(&self) -> &'static str {
        match self {
            AspectRatio::Square => "aspect-1-1",
            AspectRatio::Landscape => "aspect-4-3",
            AspectRatio::Portrait => "aspect-3-4",
            AspectRatio::Wide => "aspect-16-9",
            AspectRatio::Ultrawide => "aspect-21-9",
            AspectRatio::Auto => "aspect-auto",
        }
    }
}

/// Inline SVG leaf shown when an image fails to load.
pub fn placeholder_svg() -> String {
    format!(
        r#"<svg class="img-placeholder" viewBox="0 0 100 150" aria-hidden="true"><path d="{}" fill="currentColor" opacity="0.2"/></svg>"#,
        crate::motion::LEAF_PATH
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_transitions_once() {
        let mut img = ImageLoad::default();
        img.on_loaded();
        img.on_failed();
        assert_eq!(img, ImageLoad::Loaded);

        let mut broken = ImageLoad::Pending;
        broken.on_failed();
        broken.on_loaded();
        assert_eq!(broken, ImageLoad::Failed);
        assert!(broken.shows_placeholder());
    }

    #[test]
    fn test_classes() {
        assert_eq!(ImageVariant::Circle.css_class(), "img-circle");
        assert_eq!(AspectRatio::Wide.css_class(), "aspect-16-9");
        assert!(placeholder_svg().contains("M50 10"));
    }
}
