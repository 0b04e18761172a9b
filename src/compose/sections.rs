//! Typed payloads of the sections a composed page is made of.

use serde::Serialize;

use crate::content::model::{
    Accent, AxisItem, CarouselItem, ContentBlock, ExtraSection, FaqItem, ImageRef, NavLink, PriceItem,
    Reference,
};
use crate::motion::{stagger_delay, FloatingLeaf};

/// Delay step between indication bullets, in seconds.
pub const INDICATION_STAGGER: f64 = 0.08;
/// Delay step between axis cards, in seconds.
pub const AXIS_STAGGER: f64 = 0.15;
/// Delay step between references, in seconds.
pub const REFERENCE_STAGGER: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Hero,
    Intro,
    Definition,
    Axes,
    Practice,
    Session,
    Indications,
    Pricing,
    Faq,
    References,
    Extra,
    CallToAction,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum Section {
    Hero(HeroSection),
    Intro(IntroSection),
    Definition(BlocksSection),
    Axes(AxesSection),
    Practice(PracticeSection),
    Session(BlocksSection),
    Indications(IndicationsSection),
    Pricing(PricingSection),
    Faq(FaqSection),
    References(ReferencesSection),
    Extra(ExtraSection),
    CallToAction(CallToActionSection),
}

impl Section {
    pub fn kind(&self) -> SectionKind {
        match self {
            Section::Hero(_) => SectionKind::Hero,
            Section::Intro(_) => SectionKind::Intro,
            Section::Definition(_) => SectionKind::Definition,
            Section::Axes(_) => SectionKind::Axes,
            Section::Practice(_) => SectionKind::Practice,
            Section::Session(_) => SectionKind::Session,
            Section::Indications(_) => SectionKind::Indications,
            Section::Pricing(_) => SectionKind::Pricing,
            Section::Faq(_) => SectionKind::Faq,
            Section::References(_) => SectionKind::References,
            Section::Extra(_) => SectionKind::Extra,
            Section::CallToAction(_) => SectionKind::CallToAction,
        }
    }
}

/// One breadcrumb step; the last one has no link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Crumb {
    pub label: String,
    pub href: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeroSection {
    pub breadcrumb: Vec<Crumb>,
    pub title: String,
    pub subtitle: String,
    pub image: ImageRef,
    pub accent: Accent,
    pub primary_cta: NavLink,
    pub secondary_cta: NavLink,
    pub leaves: Vec<FloatingLeaf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntroSection {
    pub quote: Option<String>,
    /// Markdown.
    pub text: String,
}

/// Definition and session bodies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlocksSection {
    pub title: Option<String>,
    pub blocks: Vec<ContentBlock>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumberedAxis {
    pub number: usize,
    pub title: String,
    pub description: String,
    pub delay: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxesSection {
    pub overline: String,
    pub title: String,
    pub items: Vec<NumberedAxis>,
}

impl AxesSection {
    pub fn new(title: String, axes: &[AxisItem]) -> Self {
        Self {
            overline: "Méthodologie".into(),
            title,
            items: axes
                .iter()
                .enumerate()
                .map(|(i, axis)| NumberedAxis {
                    number: i + 1,
                    title: axis.title.clone(),
                    description: axis.description.clone(),
                    delay: stagger_delay(i, AXIS_STAGGER),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PracticeItem {
    pub icon: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PracticeSection {
    pub title: String,
    pub items: Vec<PracticeItem>,
}

impl PracticeSection {
    const ICONS: [&'static str; 3] = ["👤", "🧘", "🍃"];

    pub fn new(title: String, items: &[String]) -> Self {
        Self {
            title,
            items: items
                .iter()
                .enumerate()
                .map(|(i, text)| PracticeItem {
                    icon: Self::ICONS[i.min(Self::ICONS.len() - 1)].to_string(),
                    text: text.clone(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Indication {
    pub text: String,
    pub delay: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndicationsSection {
    pub overline: String,
    pub title: String,
    pub lead: String,
    pub accent: Accent,
    pub items: Vec<Indication>,
}

impl IndicationsSection {
    pub fn new(title: String, accent: Accent, indications: &[String]) -> Self {
        Self {
            overline: "Pour qui ?".into(),
            title,
            lead: "Cette approche thérapeutique peut vous accompagner dans de nombreuses situations de vie et difficultés psychologiques.".into(),
            accent,
            items: indications
                .iter()
                .enumerate()
                .map(|(i, text)| Indication {
                    text: text.clone(),
                    delay: stagger_delay(i, INDICATION_STAGGER),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PricingSection {
    pub overline: String,
    pub title: String,
    pub prices: Vec<PriceItem>,
    pub note: Option<String>,
    pub all_prices: NavLink,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FaqSection {
    pub title: String,
    pub subtitle: String,
    pub image: ImageRef,
    pub items: Vec<FaqItem>,
    /// Route of the hosting page, used by the toggle endpoint.
    pub page: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedReference {
    pub text: String,
    pub url: Option<String>,
    pub delay: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReferencesSection {
    pub title: String,
    pub items: Vec<PlacedReference>,
}

impl ReferencesSection {
    pub fn new(references: &[Reference]) -> Self {
        Self {
            title: "Références".into(),
            items: references
                .iter()
                .enumerate()
                .map(|(i, r)| PlacedReference {
                    text: r.text.clone(),
                    url: r.url.clone().filter(|u| !u.trim().is_empty()),
                    delay: stagger_delay(i, REFERENCE_STAGGER),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallToActionSection {
    pub heading_lead: String,
    pub heading_accent: String,
    pub text: String,
    pub phone_display: String,
    pub sms_href: String,
    pub note: String,
    pub back: NavLink,
}

/// Gallery items of an extra section, if it is a gallery.
pub fn gallery_items(extra: &ExtraSection) -> Option<(&str, &[CarouselItem])> {
    match extra {
        ExtraSection::Gallery { id, items, .. } => Some((id.as_str(), items.as_slice())),
        _ => None,
    }
}
