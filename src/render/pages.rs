// Standalone pages and the composed-page wrapper.

use askama::Template;
use tracing::debug;

use crate::compose::ComposedPage;
use crate::content::home::HomePage;
use crate::content::legal::{LabelledValue, LegalBody, LegalPage};
use crate::content::model::NavLink;
use crate::content::practice::{not_found_suggestions, Suggestion, PRACTICE};
use crate::content::pricing::TarifsPage;
use crate::content::team::{ProfilePage, YogaPage};
use crate::error::Result;
use crate::render::{layout, markdown, sections, widgets};
use crate::config::DEFAULT_WIDE_LAYOUT_MIN_PX;
use crate::widgets::{AccordionState, AspectRatio, CarouselState, ImageVariant};

/// Id of the home page's team carousel, as addressed by the widget route.
pub const TEAM_CAROUSEL_ID: &str = "team";

pub fn composed(page: &ComposedPage) -> Result<String> {
    debug!("Rendering composed page {}", page.slug);
    let body = sections::body(page)?;
    layout::page(&page.title, &page.slug, body, true)
}

// ============================================================================
// Home
// ============================================================================

#[derive(Template)]
#[template(path = "pages/home.html")]
struct HomeTemplate<'a> {
    page: &'a HomePage,
    hero_image_html: String,
    welcome_html: String,
    portrait_html: String,
    welcome_image_html: String,
    cards_html: String,
    groupal_html: String,
    groupal_image_html: String,
    team_html: String,
    sms_href: &'static str,
    phone_display: &'static str,
}

pub fn home(page: &HomePage) -> Result<String> {
    let cards_html = match AccordionState::new(page.therapy_cards.len(), 0) {
        Some(state) => widgets::cards_responsive(&page.therapy_cards, &state, DEFAULT_WIDE_LAYOUT_MIN_PX)?,
        None => String::new(),
    };
    let team_html = match CarouselState::new(page.team.len()) {
        Some(state) => widgets::team(TEAM_CAROUSEL_ID, &page.team, &state)?,
        None => String::new(),
    };
    let template = HomeTemplate {
        page,
        hero_image_html: widgets::image(&page.hero_image.src, &page.hero_image.alt, ImageVariant::Hero, AspectRatio::Auto)?,
        welcome_html: markdown::to_html(&page.welcome),
        portrait_html: widgets::image(&page.portrait.src, &page.portrait.alt, ImageVariant::Circle, AspectRatio::Square)?,
        welcome_image_html: widgets::image(
            &page.welcome_image.src,
            &page.welcome_image.alt,
            ImageVariant::Card,
            AspectRatio::Portrait,
        )?,
        cards_html,
        groupal_html: markdown::to_html(&page.groupal.text),
        groupal_image_html: widgets::image(
            &page.groupal.image.src,
            &page.groupal.image.alt,
            ImageVariant::Card,
            AspectRatio::Landscape,
        )?,
        team_html,
        sms_href: PRACTICE.sms_href,
        phone_display: PRACTICE.phone_display,
    };
    layout::page("", "/", template.render()?, true)
}

// ============================================================================
// Tarifs
// ============================================================================

#[derive(Template)]
#[template(path = "pages/tarifs.html")]
struct TarifsTemplate<'a> {
    page: &'a TarifsPage,
    cancellation_html: String,
    sms_href: &'static str,
}

pub fn tarifs(page: &TarifsPage) -> Result<String> {
    let template = TarifsTemplate {
        page,
        cancellation_html: markdown::to_inline_html(&page.cancellation),
        sms_href: PRACTICE.sms_href,
    };
    layout::page("Tarifs", "/tarifs", template.render()?, false)
}

// ============================================================================
// Team
// ============================================================================

#[derive(Template)]
#[template(path = "pages/profile.html")]
struct ProfileTemplate<'a> {
    page: &'a ProfilePage,
    portrait_html: String,
    sms_href: &'static str,
}

pub fn profile(page: &ProfilePage, path: &str) -> Result<String> {
    let template = ProfileTemplate {
        page,
        portrait_html: widgets::image(&page.portrait.src, &page.portrait.alt, ImageVariant::Portrait, AspectRatio::Portrait)?,
        sms_href: PRACTICE.sms_href,
    };
    let title = format!("{} {}", page.first_name, page.last_name);
    layout::page(&title, path, template.render()?, true)
}

#[derive(Template)]
#[template(path = "pages/yoga.html")]
struct YogaTemplate<'a> {
    page: &'a YogaPage,
    portrait_html: String,
    hatha_image_html: String,
    hatha_html: String,
    nidra_html: String,
    sms_href: &'static str,
}

pub fn yoga(page: &YogaPage, path: &str) -> Result<String> {
    let template = YogaTemplate {
        page,
        portrait_html: widgets::image(&page.portrait.src, &page.portrait.alt, ImageVariant::Portrait, AspectRatio::Portrait)?,
        hatha_image_html: widgets::image(
            &page.hatha_image.src,
            &page.hatha_image.alt,
            ImageVariant::Card,
            AspectRatio::Landscape,
        )?,
        hatha_html: markdown::to_html(&page.hatha_text),
        nidra_html: markdown::to_html(&page.nidra_text),
        sms_href: PRACTICE.sms_href,
    };
    layout::page("Yoga", path, template.render()?, true)
}

// ============================================================================
// Legal
// ============================================================================

pub struct LegalSectionView {
    pub number: Option<String>,
    pub title: String,
    pub values: Vec<LabelledValue>,
    pub paragraphs_html: Vec<String>,
    pub link: Option<NavLink>,
}

#[derive(Template)]
#[template(path = "pages/legal.html")]
struct LegalTemplate<'a> {
    page: &'a LegalPage,
    accent_var: &'static str,
    sections: Vec<LegalSectionView>,
    sms_href: &'static str,
}

pub fn legal(page: &LegalPage) -> Result<String> {
    let sections = page
        .sections
        .iter()
        .map(|s| {
            let (values, paragraphs_html) = match &s.body {
                LegalBody::Values { values } => (values.clone(), Vec::new()),
                LegalBody::Paragraphs { paragraphs } => {
                    (Vec::new(), paragraphs.iter().map(|p| markdown::to_html(p)).collect())
                }
            };
            LegalSectionView {
                number: s.number.clone(),
                title: s.title.clone(),
                values,
                paragraphs_html,
                link: s.link.clone(),
            }
        })
        .collect();
    let template = LegalTemplate {
        page,
        accent_var: page.accent.css_var(),
        sections,
        sms_href: PRACTICE.sms_href,
    };
    layout::page(&page.title(), &page.slug, template.render()?, false)
}

// ============================================================================
// Not found
// ============================================================================

#[derive(Template)]
#[template(path = "pages/not_found.html")]
struct NotFoundTemplate {
    suggestions: Vec<Suggestion>,
    sms_href: &'static str,
}

pub fn not_found(path: &str) -> Result<String> {
    debug!("Rendering not-found page for {}", path);
    let template = NotFoundTemplate {
        suggestions: not_found_suggestions(),
        sms_href: PRACTICE.sms_href,
    };
    layout::page("Page introuvable", path, template.render()?, false)
}
