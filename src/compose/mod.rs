//! Section template composer.
//!
//! Turns a declarative [`PageConfig`] into the ordered list of sections a
//! therapy or programme page renders:
//!
//! hero, intro, definition?, axes?, practice?, session?, indications,
//! pricing, faq?, references?, extras*, call-to-action.
//!
//! Each section after the hero may be preceded by a divider band. The
//! divider belongs to the section below it, so an absent section takes
//! its divider with it and two dividers are never adjacent.

pub mod sections;

use serde::Serialize;
use tracing::debug;

use crate::content::model::{ContentBlock, ExtraSection, ImageRef, NavLink, PageConfig};
use crate::content::practice::PRACTICE;
use crate::motion::{floating_leaves, AccentLine, Divider, DividerVariant, LinePosition, LineStyle, Surface};

pub use sections::*;

/// A section with the decorations placed around it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedSection {
    pub divider: Option<Divider>,
    pub accent_line: Option<AccentLine>,
    pub section: Section,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComposedPage {
    pub slug: String,
    pub title: String,
    pub accent: crate::content::Accent,
    pub sections: Vec<PlacedSection>,
}

impl ComposedPage {
    pub fn kinds(&self) -> Vec<SectionKind> {
        self.sections.iter().map(|s| s.section.kind()).collect()
    }

    pub fn has(&self, kind: SectionKind) -> bool {
        self.sections.iter().any(|s| s.section.kind() == kind)
    }

    pub fn faq(&self) -> Option<&FaqSection> {
        self.sections.iter().find_map(|s| match &s.section {
            Section::Faq(faq) => Some(faq),
            _ => None,
        })
    }
}

// ============================================================================
// Decorations
// ============================================================================

const GOLD: &str = "var(--empc-gold)";

const INTRO_DIVIDER: Divider = Divider::new(DividerVariant::Curve, Surface::Background, 80);
const DEFINITION_DIVIDER: Divider = Divider::new(DividerVariant::DiagonalDown, Surface::Cream, 60);
const AXES_DIVIDER: Divider = Divider::new(DividerVariant::Wave, Surface::Background, 70);
const PRACTICE_DIVIDER: Divider = Divider::new(DividerVariant::CurveReverse, Surface::Cream, 60);
const SESSION_DIVIDER: Divider = Divider::new(DividerVariant::DiagonalUp, Surface::Cream, 70);
const INDICATIONS_DIVIDER: Divider = Divider::new(DividerVariant::Wave, Surface::Background, 80);
const PRICING_DIVIDER: Divider = Divider::new(DividerVariant::Curve, Surface::Cream, 70);
const FAQ_DIVIDER: Divider = Divider::new(DividerVariant::DiagonalDown, Surface::Cream, 80);
const REFERENCES_DIVIDER: Divider = Divider::new(DividerVariant::CurveReverse, Surface::Background, 60);
const CTA_DIVIDER: Divider = Divider::new(DividerVariant::Wave, Surface::Cream, 70);

fn gold_line(position: LinePosition, style: LineStyle) -> AccentLine {
    let thickness = if position.is_horizontal() { 3 } else { 4 };
    AccentLine::new(position, style, GOLD).with_thickness(thickness)
}

// ============================================================================
// Emptiness normalisation
// ============================================================================

/// Trimmed-empty strings count as absent.
fn present(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn blocks(items: &[ContentBlock]) -> Vec<ContentBlock> {
    items.iter().filter(|b| !b.is_empty()).cloned().collect()
}

fn non_blank(items: &[String]) -> Vec<String> {
    items.iter().filter(|s| !s.trim().is_empty()).cloned().collect()
}

fn normalise_extra(extra: &ExtraSection) -> Option<ExtraSection> {
    if extra.is_empty() {
        return None;
    }
    Some(match extra {
        ExtraSection::Gallery {
            id,
            title,
            subtitle,
            items,
        } => ExtraSection::Gallery {
            id: id.clone(),
            title: title.clone(),
            subtitle: present(subtitle),
            items: items.clone(),
        },
        other => other.clone(),
    })
}

// ============================================================================
// Composition
// ============================================================================

struct Builder {
    sections: Vec<PlacedSection>,
}

impl Builder {
    fn push(&mut self, divider: Option<Divider>, accent_line: Option<AccentLine>, section: Section) {
        self.sections.push(PlacedSection {
            divider,
            accent_line,
            section,
        });
    }
}

/// Assemble the sections of `config` in their fixed order.
pub fn compose(config: &PageConfig) -> ComposedPage {
    let mut page = Builder { sections: Vec::new() };

    page.push(
        None,
        None,
        Section::Hero(HeroSection {
            breadcrumb: vec![
                Crumb {
                    label: "Accueil".into(),
                    href: Some("/".into()),
                },
                Crumb {
                    label: config.breadcrumb.clone(),
                    href: None,
                },
            ],
            title: config.title.clone(),
            subtitle: config.subtitle.clone(),
            image: config.hero_image.clone(),
            accent: config.accent,
            primary_cta: NavLink::new("Prendre rendez-vous", PRACTICE.sms_href),
            secondary_cta: NavLink::new("Voir les tarifs", "/tarifs"),
            leaves: floating_leaves(4),
        }),
    );

    page.push(
        Some(INTRO_DIVIDER),
        Some(gold_line(LinePosition::Top, LineStyle::Straight)),
        Section::Intro(IntroSection {
            quote: present(&config.intro_quote),
            text: config.intro_text.clone(),
        }),
    );

    let definition = blocks(&config.definition);
    if !definition.is_empty() {
        page.push(
            Some(DEFINITION_DIVIDER),
            Some(gold_line(LinePosition::Left, LineStyle::Straight)),
            Section::Definition(BlocksSection {
                title: present(&config.definition_title),
                blocks: definition,
            }),
        );
    }

    if !config.axes.is_empty() {
        let title = present(&config.axes_title).unwrap_or_else(|| "Axes de travail".into());
        page.push(
            Some(AXES_DIVIDER),
            Some(gold_line(LinePosition::Top, LineStyle::Diagonal)),
            Section::Axes(AxesSection::new(title, &config.axes)),
        );
    }

    let practice = non_blank(&config.practice_items);
    if !practice.is_empty() {
        let title = present(&config.practice_title).unwrap_or_else(|| "La pratique".into());
        page.push(
            Some(PRACTICE_DIVIDER),
            None,
            Section::Practice(PracticeSection::new(title, &practice)),
        );
    }

    let session = blocks(&config.session);
    if !session.is_empty() {
        let title = present(&config.session_title).unwrap_or_else(|| "Déroulement des séances".into());
        page.push(
            Some(SESSION_DIVIDER),
            Some(gold_line(LinePosition::Right, LineStyle::Straight)),
            Section::Session(BlocksSection {
                title: Some(title),
                blocks: session,
            }),
        );
    }

    let indications_title = present(&config.indications_title).unwrap_or_else(|| "Indications".into());
    page.push(
        Some(INDICATIONS_DIVIDER),
        Some(gold_line(LinePosition::Top, LineStyle::Diagonal)),
        Section::Indications(IndicationsSection::new(
            indications_title,
            config.accent,
            &non_blank(&config.indications),
        )),
    );

    page.push(
        Some(PRICING_DIVIDER),
        Some(gold_line(LinePosition::Top, LineStyle::Straight)),
        Section::Pricing(PricingSection {
            overline: "Investissement".into(),
            title: "Tarifs".into(),
            prices: config
                .prices
                .iter()
                .map(|p| crate::content::model::PriceItem {
                    label: present(&p.label),
                    ..p.clone()
                })
                .collect(),
            note: present(&config.price_note),
            all_prices: NavLink::new("Tous les tarifs", "/tarifs"),
        }),
    );

    if !config.faqs.is_empty() {
        let subtitle = present(&config.faq_subtitle).unwrap_or_else(|| {
            format!(
                "Tout ce que vous devez savoir sur la {}",
                config.title.to_lowercase()
            )
        });
        let image = config
            .faq_image
            .clone()
            .filter(|img| !img.src.trim().is_empty())
            .unwrap_or_else(|| ImageRef::new(config.hero_image.src.clone(), format!("FAQ - {}", config.title)));
        page.push(
            Some(FAQ_DIVIDER),
            Some(gold_line(LinePosition::Left, LineStyle::Straight)),
            Section::Faq(FaqSection {
                title: present(&config.faq_title).unwrap_or_else(|| "Questions fréquentes".into()),
                subtitle,
                image,
                items: config.faqs.clone(),
                page: config.slug.clone(),
            }),
        );
    }

    if !config.references.is_empty() {
        page.push(
            Some(REFERENCES_DIVIDER),
            None,
            Section::References(ReferencesSection::new(&config.references)),
        );
    }

    for extra in config.extras.iter().filter_map(normalise_extra) {
        page.push(None, None, Section::Extra(extra));
    }

    page.push(
        Some(CTA_DIVIDER),
        Some(gold_line(LinePosition::Top, LineStyle::Curved)),
        Section::CallToAction(CallToActionSection {
            heading_lead: "Commençons le".into(),
            heading_accent: "dialogue".into(),
            text: "Envoyez un SMS pour convenir d'un premier entretien".into(),
            phone_display: PRACTICE.phone_display.into(),
            sms_href: PRACTICE.sms_href.into(),
            note: format!("SMS uniquement · {}", PRACTICE.region),
            back: NavLink::new("Retour à l'accueil", "/"),
        }),
    );

    debug!("Composed {} into {} sections", config.slug, page.sections.len());

    ComposedPage {
        slug: config.slug.clone(),
        title: config.title.clone(),
        accent: config.accent,
        sections: page.sections,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::model::{axis, faq, price, reference};

    fn minimal() -> PageConfig {
        PageConfig {
            slug: "/therapies/test".into(),
            breadcrumb: "Nos Thérapies".into(),
            title: "Gestalt-Thérapie".into(),
            subtitle: "Sous-titre".into(),
            hero_image: ImageRef::new("/hero.jpg", "Hero"),
            intro_text: "Introduction".into(),
            indications: vec!["Anxiété".into()],
            prices: vec![price(None, "75€", "55 min")],
            ..Default::default()
        }
    }

    #[test]
    fn test_minimal_page_has_mandatory_sections_only() {
        let page = compose(&minimal());
        assert_eq!(
            page.kinds(),
            vec![
                SectionKind::Hero,
                SectionKind::Intro,
                SectionKind::Indications,
                SectionKind::Pricing,
                SectionKind::CallToAction,
            ]
        );
    }

    #[test]
    fn test_full_page_order() {
        let mut config = minimal();
        config.definition = vec![ContentBlock::prose("Définition")];
        config.axes = vec![axis("Un", "Premier")];
        config.practice_items = vec!["Individuelle".into()];
        config.session = vec![ContentBlock::prose("Séance")];
        config.faqs = vec![faq("Question ?", "Réponse.")];
        config.references = vec![reference("Livre", None)];
        config.extras = vec![ExtraSection::Notice {
            icon: "🔒".into(),
            title: "Confidentialité".into(),
            text: "Secret médical.".into(),
        }];

        let page = compose(&config);
        assert_eq!(
            page.kinds(),
            vec![
                SectionKind::Hero,
                SectionKind::Intro,
                SectionKind::Definition,
                SectionKind::Axes,
                SectionKind::Practice,
                SectionKind::Session,
                SectionKind::Indications,
                SectionKind::Pricing,
                SectionKind::Faq,
                SectionKind::References,
                SectionKind::Extra,
                SectionKind::CallToAction,
            ]
        );
    }

    #[test]
    fn test_absent_section_takes_its_divider() {
        let page = compose(&minimal());
        let dividers: Vec<_> = page.sections.iter().filter_map(|s| s.divider).collect();
        assert_eq!(
            dividers,
            vec![INTRO_DIVIDER, INDICATIONS_DIVIDER, PRICING_DIVIDER, CTA_DIVIDER]
        );
        assert!(page.sections[0].divider.is_none());
    }

    #[test]
    fn test_blank_values_count_as_absent() {
        let mut config = minimal();
        config.intro_quote = Some("   ".into());
        config.definition_title = Some("Titre".into());
        config.definition = vec![ContentBlock::prose("")];
        config.practice_items = vec!["".into()];

        let page = compose(&config);
        assert!(!page.has(SectionKind::Definition));
        assert!(!page.has(SectionKind::Practice));
        match &page.sections[1].section {
            Section::Intro(intro) => assert!(intro.quote.is_none()),
            other => panic!("expected intro, got {:?}", other.kind()),
        }
    }

    #[test]
    fn test_faq_defaults() {
        let mut config = minimal();
        config.faqs = vec![faq("Q ?", "R.")];
        let page = compose(&config);
        let faq = page.faq().expect("faq section");
        assert_eq!(faq.title, "Questions fréquentes");
        assert_eq!(faq.subtitle, "Tout ce que vous devez savoir sur la gestalt-thérapie");
        assert_eq!(faq.image.src, "/hero.jpg");
        assert_eq!(faq.page, "/therapies/test");
    }

    #[test]
    fn test_default_titles_and_numbering() {
        let mut config = minimal();
        config.axes = vec![axis("Un", "1"), axis("Deux", "2")];
        config.session = vec![ContentBlock::prose("Séance")];
        let page = compose(&config);

        let axes = page
            .sections
            .iter()
            .find_map(|s| match &s.section {
                Section::Axes(a) => Some(a),
                _ => None,
            })
            .expect("axes");
        assert_eq!(axes.title, "Axes de travail");
        assert_eq!(axes.items.iter().map(|a| a.number).collect::<Vec<_>>(), vec![1, 2]);

        let session_title = page.sections.iter().find_map(|s| match &s.section {
            Section::Session(b) => b.title.clone(),
            _ => None,
        });
        assert_eq!(session_title.as_deref(), Some("Déroulement des séances"));
    }

    #[test]
    fn test_empty_prices_still_render_pricing() {
        let mut config = minimal();
        config.prices.clear();
        assert!(compose(&config).has(SectionKind::Pricing));
    }
}
