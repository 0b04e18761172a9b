//! Configuration records authored once and rendered read-only.
//!
//! Text fields named `text` or `answer`, and every `Prose` block, hold a
//! small Markdown subset (`**bold**`, `*em*`, links, blank-line paragraphs).

use serde::{Deserialize, Serialize};

/// Accent colour threaded through a page's hero, numbers and bullets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Accent {
    #[default]
    Primary,
    Secondary,
    Gold,
    Terracotta,
    Sage,
}

impl Accent {
    pub fn css_var(&self) -> &'static str {
        match self {
            Accent::Primary => "var(--empc-primary)",
            Accent::Secondary => "var(--empc-secondary)",
            Accent::Gold => "var(--empc-gold)",
            Accent::Terracotta => "var(--empc-terracotta)",
            Accent::Sage => "var(--empc-sage)",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Accent::Primary => "accent-primary",
            Accent::Secondary => "accent-secondary",
            Accent::Gold => "accent-gold",
            Accent::Terracotta => "accent-terracotta",
            Accent::Sage => "accent-sage",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    pub src: String,
    pub alt: String,
}

impl ImageRef {
    pub fn new(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

impl NavLink {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisItem {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceItem {
    pub label: Option<String>,
    pub price: String,
    pub duration: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    pub text: String,
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarouselItem {
    pub id: String,
    pub url: String,
    pub title: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureCard {
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub title: String,
    pub description: String,
    pub duration: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionFormat {
    pub title: String,
    pub duration: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

/// Structured body of the definition and session sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    Subheading { text: String },
    Prose { text: String, quote: Option<String> },
    FeatureCards { cards: Vec<FeatureCard> },
    Steps { steps: Vec<Step> },
    Checklist { title: Option<String>, items: Vec<String> },
    /// "What we avoid" against "what we cultivate".
    Contrast {
        avoid_title: String,
        avoid: Vec<String>,
        embrace_title: String,
        embrace: Vec<String>,
    },
    Formats { formats: Vec<SessionFormat> },
    /// Labels arranged on a circle around a centre word.
    Orbit { centre: String, labels: Vec<String> },
}

impl ContentBlock {
    /// Blocks with nothing to show are dropped by the composer.
    pub fn is_empty(&self) -> bool {
        match self {
            ContentBlock::Subheading { text } => text.trim().is_empty(),
            ContentBlock::Prose { text, quote } => {
                text.trim().is_empty() && quote.as_deref().map_or(true, |q| q.trim().is_empty())
            }
            ContentBlock::FeatureCards { cards } => cards.is_empty(),
            ContentBlock::Steps { steps } => steps.is_empty(),
            ContentBlock::Checklist { items, .. } => items.is_empty(),
            ContentBlock::Contrast { avoid, embrace, .. } => avoid.is_empty() && embrace.is_empty(),
            ContentBlock::Formats { formats } => formats.is_empty(),
            ContentBlock::Orbit { labels, .. } => labels.is_empty(),
        }
    }

    pub fn prose(text: impl Into<String>) -> Self {
        ContentBlock::Prose {
            text: text.into(),
            quote: None,
        }
    }
}

/// Free-form sections placed after the references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ExtraSection {
    Notice {
        icon: String,
        title: String,
        text: String,
    },
    Stats {
        title: String,
        stats: Vec<Stat>,
    },
    /// Thumbnail carousel. `id` addresses the widget endpoint.
    Gallery {
        id: String,
        title: String,
        subtitle: Option<String>,
        items: Vec<CarouselItem>,
    },
}

impl ExtraSection {
    pub fn is_empty(&self) -> bool {
        match self {
            ExtraSection::Notice { title, text, .. } => title.trim().is_empty() && text.trim().is_empty(),
            ExtraSection::Stats { stats, .. } => stats.is_empty(),
            ExtraSection::Gallery { items, .. } => items.is_empty(),
        }
    }
}

/// Declarative description of one composed page.
///
/// Optional sections are `Option`/`Vec`; an empty string or empty list
/// counts as absent. `indications` and `prices` are always rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageConfig {
    /// Route path, e.g. `/therapies/gestalt`.
    pub slug: String,
    /// Middle breadcrumb label, e.g. "Nos Thérapies".
    pub breadcrumb: String,
    pub title: String,
    pub subtitle: String,
    pub hero_image: ImageRef,
    pub accent: Accent,

    pub intro_quote: Option<String>,
    pub intro_text: String,

    pub definition_title: Option<String>,
    pub definition: Vec<ContentBlock>,

    pub axes_title: Option<String>,
    pub axes: Vec<AxisItem>,

    pub practice_title: Option<String>,
    pub practice_items: Vec<String>,

    pub session_title: Option<String>,
    pub session: Vec<ContentBlock>,

    pub indications_title: Option<String>,
    pub indications: Vec<String>,

    pub prices: Vec<PriceItem>,
    pub price_note: Option<String>,

    pub references: Vec<Reference>,

    pub faq_title: Option<String>,
    pub faq_subtitle: Option<String>,
    pub faq_image: Option<ImageRef>,
    pub faqs: Vec<FaqItem>,

    pub extras: Vec<ExtraSection>,
}

// ============================================================================
// Authoring shorthands
// ============================================================================

pub fn axis(title: &str, description: &str) -> AxisItem {
    AxisItem {
        title: title.to_string(),
        description: description.to_string(),
    }
}

pub fn price(label: Option<&str>, price: &str, duration: &str) -> PriceItem {
    PriceItem {
        label: label.map(str::to_string),
        price: price.to_string(),
        duration: duration.to_string(),
    }
}

pub fn faq(question: &str, answer: &str) -> FaqItem {
    FaqItem {
        question: question.to_string(),
        answer: answer.to_string(),
    }
}

pub fn reference(text: &str, url: Option<&str>) -> Reference {
    Reference {
        text: text.to_string(),
        url: url.map(str::to_string),
    }
}

pub fn feature(icon: &str, title: &str, description: &str) -> FeatureCard {
    FeatureCard {
        icon: icon.to_string(),
        title: title.to_string(),
        description: description.to_string(),
    }
}

pub fn step(title: &str, description: &str, duration: Option<&str>) -> Step {
    Step {
        title: title.to_string(),
        description: description.to_string(),
        duration: duration.map(str::to_string),
    }
}

pub fn stat(value: &str, label: &str) -> Stat {
    Stat {
        value: value.to_string(),
        label: label.to_string(),
    }
}

pub fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_emptiness() {
        assert!(ContentBlock::prose("  ").is_empty());
        assert!(!ContentBlock::Prose {
            text: String::new(),
            quote: Some("Citation".into())
        }
        .is_empty());
        assert!(ContentBlock::Steps { steps: vec![] }.is_empty());
        assert!(ExtraSection::Gallery {
            id: "g".into(),
            title: "Galerie".into(),
            subtitle: None,
            items: vec![]
        }
        .is_empty());
    }

    #[test]
    fn test_page_config_json_shape() {
        let config = PageConfig {
            slug: "/therapies/test".into(),
            title: "Test".into(),
            definition: vec![ContentBlock::prose("Texte")],
            ..Default::default()
        };
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["accent"], "primary");
        assert_eq!(json["definition"][0]["type"], "prose");
    }
}
