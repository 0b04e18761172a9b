// Section templates for composed pages.

use askama::Template;

use crate::compose::{
    AxesSection, CallToActionSection, ComposedPage, FaqSection, HeroSection, IndicationsSection,
    PlacedSection, PracticeSection, PricingSection, ReferencesSection, Section, SectionKind,
};
use crate::content::model::{ContentBlock, ExtraSection, FeatureCard, SessionFormat, Stat};
use crate::error::Result;
use crate::motion::{orbit_positions, HeroParallax, Surface, LEAF_PATH};
use crate::render::{markdown, widgets};
use crate::widgets::{AspectRatio, CarouselState, FaqState, ImageVariant};

/// Radius of the orbit diagram, in % of its box.
const ORBIT_RADIUS_PCT: f64 = 42.0;

// ============================================================================
// Frame
// ============================================================================

#[derive(Template)]
#[template(path = "sections/frame.html")]
struct SectionFrame<'a> {
    kind: &'a str,
    surface: &'a str,
    divider: String,
    accent_line: String,
    body: String,
}

fn kind_name(kind: SectionKind) -> &'static str {
    match kind {
        SectionKind::Hero => "hero",
        SectionKind::Intro => "intro",
        SectionKind::Definition => "definition",
        SectionKind::Axes => "axes",
        SectionKind::Practice => "practice",
        SectionKind::Session => "session",
        SectionKind::Indications => "indications",
        SectionKind::Pricing => "pricing",
        SectionKind::Faq => "faq",
        SectionKind::References => "references",
        SectionKind::Extra => "extra",
        SectionKind::CallToAction => "cta",
    }
}

fn surface_class(placed: &PlacedSection) -> &'static str {
    match (placed.section.kind(), placed.divider.map(|d| d.fill)) {
        (SectionKind::Hero, _) => "surface-hero",
        (_, Some(Surface::Cream)) => "surface-cream",
        _ => "surface-background",
    }
}

// ============================================================================
// Hero
// ============================================================================

#[derive(Template)]
#[template(path = "sections/hero.html")]
struct HeroTemplate<'a> {
    hero: &'a HeroSection,
    image_html: String,
    accent_var: &'static str,
    parallax_style: String,
    leaf_path: &'static str,
    leaves: Vec<String>,
}

fn hero(section: &HeroSection) -> Result<String> {
    let leaves = section
        .leaves
        .iter()
        .map(|leaf| {
            format!(
                "left: {}%; animation-delay: {}s; animation-duration: {}s",
                leaf.left_pct, leaf.delay, leaf.duration
            )
        })
        .collect();
    let template = HeroTemplate {
        hero: section,
        image_html: widgets::image(&section.image.src, &section.image.alt, ImageVariant::Hero, AspectRatio::Portrait)?,
        accent_var: section.accent.css_var(),
        parallax_style: HeroParallax::at(0.0).css(),
        leaf_path: LEAF_PATH,
        leaves,
    };
    Ok(template.render()?)
}

// ============================================================================
// Intro
// ============================================================================

#[derive(Template)]
#[template(path = "sections/intro.html")]
struct IntroTemplate {
    quote: Option<String>,
    text_html: String,
}

// ============================================================================
// Content blocks
// ============================================================================

pub struct ProseView {
    pub html: String,
    pub quote: Option<String>,
}

pub struct StepView {
    pub number: usize,
    pub title: String,
    pub description: String,
    pub duration: Option<String>,
}

pub struct ContrastView {
    pub avoid_title: String,
    pub avoid: Vec<String>,
    pub embrace_title: String,
    pub embrace: Vec<String>,
}

pub struct OrbitLabel {
    pub label: String,
    pub style: String,
}

pub enum BlockView {
    Subheading(String),
    Prose(ProseView),
    FeatureCards(Vec<FeatureCard>),
    Steps(Vec<StepView>),
    Checklist(Option<String>, Vec<String>),
    Contrast(ContrastView),
    Formats(Vec<SessionFormat>),
    Orbit(String, Vec<OrbitLabel>),
}

impl BlockView {
    fn from_block(block: &ContentBlock) -> Self {
        match block {
            ContentBlock::Subheading { text } => BlockView::Subheading(text.clone()),
            ContentBlock::Prose { text, quote } => BlockView::Prose(ProseView {
                html: if text.trim().is_empty() {
                    String::new()
                } else {
                    markdown::to_html(text)
                },
                quote: quote.clone().filter(|q| !q.trim().is_empty()),
            }),
            ContentBlock::FeatureCards { cards } => BlockView::FeatureCards(cards.clone()),
            ContentBlock::Steps { steps } => BlockView::Steps(
                steps
                    .iter()
                    .enumerate()
                    .map(|(i, s)| StepView {
                        number: i + 1,
                        title: s.title.clone(),
                        description: s.description.clone(),
                        duration: s.duration.clone(),
                    })
                    .collect(),
            ),
            ContentBlock::Checklist { title, items } => BlockView::Checklist(title.clone(), items.clone()),
            ContentBlock::Contrast {
                avoid_title,
                avoid,
                embrace_title,
                embrace,
            } => BlockView::Contrast(ContrastView {
                avoid_title: avoid_title.clone(),
                avoid: avoid.clone(),
                embrace_title: embrace_title.clone(),
                embrace: embrace.clone(),
            }),
            ContentBlock::Formats { formats } => BlockView::Formats(formats.clone()),
            ContentBlock::Orbit { centre, labels } => {
                let points = orbit_positions(labels.len(), ORBIT_RADIUS_PCT);
                BlockView::Orbit(
                    centre.clone(),
                    labels
                        .iter()
                        .zip(points)
                        .map(|(label, p)| OrbitLabel {
                            label: label.clone(),
                            style: format!("left: {:.2}%; top: {:.2}%", p.left_pct, p.top_pct),
                        })
                        .collect(),
                )
            }
        }
    }
}

#[derive(Template)]
#[template(path = "sections/blocks.html")]
struct BlocksTemplate {
    title: Option<String>,
    blocks: Vec<BlockView>,
}

fn blocks(title: &Option<String>, items: &[ContentBlock]) -> Result<String> {
    let template = BlocksTemplate {
        title: title.clone(),
        blocks: items.iter().map(BlockView::from_block).collect(),
    };
    Ok(template.render()?)
}

// ============================================================================
// Lists
// ============================================================================

#[derive(Template)]
#[template(path = "sections/axes.html")]
struct AxesTemplate<'a> {
    axes: &'a AxesSection,
}

#[derive(Template)]
#[template(path = "sections/practice.html")]
struct PracticeTemplate<'a> {
    practice: &'a PracticeSection,
}

#[derive(Template)]
#[template(path = "sections/indications.html")]
struct IndicationsTemplate<'a> {
    indications: &'a IndicationsSection,
    accent_var: &'static str,
    leaf_path: &'static str,
}

#[derive(Template)]
#[template(path = "sections/pricing.html")]
struct PricingTemplate<'a> {
    pricing: &'a PricingSection,
}

#[derive(Template)]
#[template(path = "sections/faq.html")]
struct FaqTemplate<'a> {
    faq: &'a FaqSection,
    image_html: String,
    widget_html: String,
}

fn faq(section: &FaqSection) -> Result<String> {
    let template = FaqTemplate {
        faq: section,
        image_html: widgets::image(&section.image.src, &section.image.alt, ImageVariant::Card, AspectRatio::Portrait)?,
        widget_html: widgets::faq(section, &FaqState::new(section.items.len()))?,
    };
    Ok(template.render()?)
}

#[derive(Template)]
#[template(path = "sections/references.html")]
struct ReferencesTemplate<'a> {
    references: &'a ReferencesSection,
}

// ============================================================================
// Extras
// ============================================================================

#[derive(Template)]
#[template(path = "sections/notice.html")]
struct NoticeTemplate<'a> {
    icon: &'a str,
    title: &'a str,
    text_html: String,
}

#[derive(Template)]
#[template(path = "sections/stats.html")]
struct StatsTemplate<'a> {
    title: &'a str,
    stats: &'a [Stat],
}

#[derive(Template)]
#[template(path = "sections/gallery.html")]
struct GalleryTemplate<'a> {
    title: &'a str,
    subtitle: Option<&'a str>,
    widget_html: String,
}

fn extra(section: &ExtraSection) -> Result<String> {
    match section {
        ExtraSection::Notice { icon, title, text } => Ok(NoticeTemplate {
            icon,
            title,
            text_html: markdown::to_inline_html(text),
        }
        .render()?),
        ExtraSection::Stats { title, stats } => Ok(StatsTemplate { title, stats }.render()?),
        ExtraSection::Gallery {
            id,
            title,
            subtitle,
            items,
        } => {
            // The composer drops empty galleries, so a state always exists.
            let widget_html = match CarouselState::new(items.len()) {
                Some(state) => widgets::gallery(id, items, &state)?,
                None => String::new(),
            };
            Ok(GalleryTemplate {
                title,
                subtitle: subtitle.as_deref(),
                widget_html,
            }
            .render()?)
        }
    }
}

#[derive(Template)]
#[template(path = "sections/cta.html")]
struct CallToActionTemplate<'a> {
    cta: &'a CallToActionSection,
}

// ============================================================================
// Page body
// ============================================================================

fn section_body(section: &Section) -> Result<String> {
    match section {
        Section::Hero(s) => hero(s),
        Section::Intro(s) => Ok(IntroTemplate {
            quote: s.quote.clone(),
            text_html: markdown::to_html(&s.text),
        }
        .render()?),
        Section::Definition(s) | Section::Session(s) => blocks(&s.title, &s.blocks),
        Section::Axes(s) => Ok(AxesTemplate { axes: s }.render()?),
        Section::Practice(s) => Ok(PracticeTemplate { practice: s }.render()?),
        Section::Indications(s) => Ok(IndicationsTemplate {
            indications: s,
            accent_var: s.accent.css_var(),
            leaf_path: LEAF_PATH,
        }
        .render()?),
        Section::Pricing(s) => Ok(PricingTemplate { pricing: s }.render()?),
        Section::Faq(s) => faq(s),
        Section::References(s) => Ok(ReferencesTemplate { references: s }.render()?),
        Section::Extra(s) => extra(s),
        Section::CallToAction(s) => Ok(CallToActionTemplate { cta: s }.render()?),
    }
}

/// Render one placed section with its divider and accent line.
pub fn placed(placed: &PlacedSection) -> Result<String> {
    let frame = SectionFrame {
        kind: kind_name(placed.section.kind()),
        surface: surface_class(placed),
        divider: placed.divider.map(|d| d.svg()).unwrap_or_default(),
        accent_line: placed.accent_line.as_ref().map(|l| l.html()).unwrap_or_default(),
        body: section_body(&placed.section)?,
    };
    Ok(frame.render()?)
}

/// Markup of every section of `page`, in order.
pub fn body(page: &ComposedPage) -> Result<String> {
    let mut out = String::new();
    for section in &page.sections {
        out.push_str(&placed(section)?);
        out.push('\n');
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::compose;
    use crate::content::therapies;

    #[test]
    fn test_sections_render_in_order() {
        let page = compose(&therapies::gestalt());
        let html = body(&page).unwrap();
        let positions: Vec<usize> = page
            .kinds()
            .iter()
            .filter(|k| **k != SectionKind::Extra)
            .map(|k| {
                html.find(&format!("section-{} ", kind_name(*k)))
                    .unwrap_or_else(|| panic!("missing {:?}", k))
            })
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_hero_exposes_scroll_hooks() {
        let html = body(&compose(&therapies::tcc())).unwrap();
        assert!(html.contains("data-parallax=\"hero\""));
        assert!(html.contains("data-drift-layer"));
        assert!(html.contains("translateY(0.0px); opacity: 1.000"));
    }

    #[test]
    fn test_absent_sections_have_no_markup() {
        let mut config = therapies::gestalt();
        config.axes.clear();
        config.faqs.clear();
        let html = body(&compose(&config)).unwrap();
        assert!(!html.contains("section-axes "));
        assert!(!html.contains("section-faq "));
        assert!(html.contains("section-indications "));
    }

    #[test]
    fn test_orbit_labels_are_positioned() {
        let view = BlockView::from_block(&ContentBlock::Orbit {
            centre: "Famille".into(),
            labels: vec!["A".into(), "B".into(), "C".into(), "D".into()],
        });
        match view {
            BlockView::Orbit(centre, labels) => {
                assert_eq!(centre, "Famille");
                assert_eq!(labels.len(), 4);
                assert!(labels[0].style.starts_with("left: "));
            }
            _ => panic!("expected orbit"),
        }
    }

    #[test]
    fn test_every_block_kind_renders() {
        use crate::content::model::{feature, step};
        let items = vec![
            ContentBlock::Subheading { text: "Sous-titre".into() },
            ContentBlock::Prose {
                text: "Texte **fort**".into(),
                quote: Some("Citation".into()),
            },
            ContentBlock::FeatureCards {
                cards: vec![feature("🌿", "Carte", "Description")],
            },
            ContentBlock::Steps {
                steps: vec![step("Étape", "Description", Some("1h"))],
            },
            ContentBlock::Checklist {
                title: Some("Liste".into()),
                items: vec!["Un".into()],
            },
            ContentBlock::Contrast {
                avoid_title: "Éviter".into(),
                avoid: vec!["Régime".into()],
                embrace_title: "Cultiver".into(),
                embrace: vec!["Écoute".into()],
            },
            ContentBlock::Formats {
                formats: vec![SessionFormat {
                    title: "Couple".into(),
                    duration: "1h".into(),
                    description: "Séance".into(),
                }],
            },
            ContentBlock::Orbit {
                centre: "Centre".into(),
                labels: vec!["Un".into(), "Deux".into()],
            },
        ];
        let html = blocks(&Some("Titre".into()), &items).unwrap();
        for class in [
            "content-subheading",
            "content-prose",
            "feature-cards",
            "steps",
            "checklist",
            "contrast",
            "formats",
            "orbit",
        ] {
            assert!(html.contains(&format!("class=\"{}", class)), "missing {}", class);
        }
        assert!(html.contains("<strong>fort</strong>"));
    }
}
