// Widget fragments: rendered inside pages and returned alone by the
// HTMX endpoints after one state transition.

use askama::Template;

use crate::compose::FaqSection;
use crate::content::home::{CardItem, TeamMember};
use crate::content::model::CarouselItem;
use crate::content::practice::NavItem;
use crate::error::Result;
use crate::render::markdown;
use crate::widgets::{
    placeholder_svg, thumbnail_scroll_left, thumbnail_width, AccordionState, AspectRatio, CarouselState,
    FaqState, ImageLoad, ImageVariant, Orientation, Toggle,
};

/// Width assumed for the thumbnail strip when centring the active thumb.
pub const THUMB_STRIP_WIDTH: f64 = 600.0;

/// Build a widget URL with encoded query values.
pub fn widget_url(path: &str, params: &[(&str, String)]) -> String {
    if params.is_empty() {
        return path.to_string();
    }
    let query = params
        .iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&");
    format!("{}?{}", path, query)
}

// ============================================================================
// Image slot
// ============================================================================

#[derive(Template)]
#[template(path = "widgets/image.html")]
pub struct ImageSlot {
    pub src: String,
    pub alt: String,
    pub variant: ImageVariant,
    pub aspect: AspectRatio,
    pub load: ImageLoad,
    pub eager: bool,
}

impl ImageSlot {
    pub fn new(src: &str, alt: &str, variant: ImageVariant, aspect: AspectRatio) -> Self {
        Self {
            src: src.to_string(),
            alt: alt.to_string(),
            variant,
            aspect,
            load: ImageLoad::default(),
            eager: variant == ImageVariant::Hero,
        }
    }

    pub fn placeholder(&self) -> String {
        placeholder_svg()
    }

    pub fn loading(&self) -> &'static str {
        if self.eager {
            "eager"
        } else {
            "lazy"
        }
    }
}

pub fn image(src: &str, alt: &str, variant: ImageVariant, aspect: AspectRatio) -> Result<String> {
    Ok(ImageSlot::new(src, alt, variant, aspect).render()?)
}

// ============================================================================
// FAQ
// ============================================================================

pub struct FaqEntry {
    pub index: usize,
    pub number: String,
    pub question: String,
    pub answer_html: String,
    pub open: bool,
    pub toggle_url: String,
}

impl FaqEntry {
    pub fn expanded(&self) -> &'static str {
        if self.open {
            "true"
        } else {
            "false"
        }
    }
}

#[derive(Template)]
#[template(path = "widgets/faq.html")]
pub struct FaqWidget {
    pub entries: Vec<FaqEntry>,
}

pub fn faq_url(page: &str, state: &FaqState, toggle: usize) -> String {
    let mut params = Vec::with_capacity(2);
    if let Some(open) = state.open() {
        params.push(("open", open.to_string()));
    }
    params.push(("toggle", toggle.to_string()));
    widget_url(&format!("/widgets/faq{}", page), &params)
}

pub fn faq(section: &FaqSection, state: &FaqState) -> Result<String> {
    let entries = section
        .items
        .iter()
        .enumerate()
        .map(|(i, item)| FaqEntry {
            index: i,
            number: format!("{:02}", i + 1),
            question: item.question.clone(),
            answer_html: markdown::to_html(&item.answer),
            open: state.is_open(i),
            toggle_url: faq_url(&section.page, state, i),
        })
        .collect();
    Ok(FaqWidget { entries }.render()?)
}

// ============================================================================
// Gallery carousel
// ============================================================================

pub struct Slide {
    pub title: String,
    pub description: Option<String>,
    pub image_html: String,
    pub active: bool,
}

pub struct Thumb {
    pub index: usize,
    pub src: String,
    pub title: String,
    pub width: f64,
    pub active: bool,
    pub url: String,
}

#[derive(Template)]
#[template(path = "widgets/gallery.html")]
pub struct GalleryWidget {
    pub id: String,
    pub index: usize,
    pub slides: Vec<Slide>,
    pub thumbs: Vec<Thumb>,
    pub track_style: String,
    pub counter: String,
    pub prev_url: Option<String>,
    pub next_url: Option<String>,
    pub drag_url: String,
    pub strip_scroll_left: f64,
}

fn carousel_url(id: &str, state: &CarouselState, action: &str, extra: &[(&str, String)]) -> String {
    let mut params = vec![("index", state.index().to_string()), ("action", action.to_string())];
    params.extend(extra.iter().cloned());
    widget_url(&format!("/widgets/carousel/{}", id), &params)
}

fn track_style(state: &CarouselState) -> String {
    format!(
        "transform: translateX({}%); transition: {}",
        state.viewport_offset_pct(),
        state.settle().css("transform")
    )
}

pub fn gallery(id: &str, items: &[CarouselItem], state: &CarouselState) -> Result<String> {
    let active = state.index();
    let slides = items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            Ok(Slide {
                title: item.title.clone(),
                description: item.description.clone(),
                image_html: image(&item.url, &item.title, ImageVariant::Default, AspectRatio::Wide)?,
                active: i == active,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    let thumbs = items
        .iter()
        .enumerate()
        .map(|(i, item)| Thumb {
            index: i,
            src: item.url.clone(),
            title: item.title.clone(),
            width: thumbnail_width(i, active),
            active: i == active,
            url: carousel_url(id, state, "goto", &[("to", i.to_string())]),
        })
        .collect();

    let widget = GalleryWidget {
        id: id.to_string(),
        index: active,
        slides,
        thumbs,
        track_style: track_style(state),
        counter: state.counter(),
        prev_url: state.can_prev().then(|| carousel_url(id, state, "prev", &[])),
        next_url: state.can_next().then(|| carousel_url(id, state, "next", &[])),
        drag_url: carousel_url(id, state, "drag", &[]),
        strip_scroll_left: thumbnail_scroll_left(active, THUMB_STRIP_WIDTH),
    };
    Ok(widget.render()?)
}

// ============================================================================
// Team profile carousel
// ============================================================================

pub struct Profile {
    pub member: TeamMember,
    pub portrait_html: String,
    pub active: bool,
}

pub struct Dot {
    pub index: usize,
    pub active: bool,
    pub url: String,
}

#[derive(Template)]
#[template(path = "widgets/team.html")]
pub struct TeamWidget {
    pub id: String,
    pub profiles: Vec<Profile>,
    pub dots: Vec<Dot>,
    pub track_style: String,
    pub prev_url: Option<String>,
    pub next_url: Option<String>,
}

pub fn team(id: &str, members: &[TeamMember], state: &CarouselState) -> Result<String> {
    let active = state.index();
    let profiles = members
        .iter()
        .enumerate()
        .map(|(i, member)| {
            Ok(Profile {
                member: member.clone(),
                portrait_html: image(&member.image_url, &member.name, ImageVariant::Circle, AspectRatio::Square)?,
                active: i == active,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    let dots = (0..members.len())
        .map(|i| Dot {
            index: i,
            active: i == active,
            url: carousel_url(id, state, "goto", &[("to", i.to_string())]),
        })
        .collect();

    let widget = TeamWidget {
        id: id.to_string(),
        profiles,
        dots,
        track_style: track_style(state),
        prev_url: state.can_prev().then(|| carousel_url(id, state, "prev", &[])),
        next_url: state.can_next().then(|| carousel_url(id, state, "next", &[])),
    };
    Ok(widget.render()?)
}

// ============================================================================
// Expanding cards
// ============================================================================

pub struct Card {
    pub item: CardItem,
    pub revealed: bool,
    pub url: String,
}

#[derive(Template)]
#[template(path = "widgets/cards.html")]
pub struct CardsWidget {
    pub cards: Vec<Card>,
    pub grid_style: String,
    pub orientation: &'static str,
    /// First paint only: track lists for both axes, switched by a media query.
    pub responsive_css: Option<String>,
}

fn card_views(items: &[CardItem], state: &AccordionState) -> Vec<Card> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| Card {
            item: item.clone(),
            revealed: state.visual(i).revealed,
            url: widget_url("/widgets/cards", &[("active", i.to_string())]),
        })
        .collect()
}

/// Cards laid out along the axis picked from the reported viewport width.
pub fn cards(items: &[CardItem], state: &AccordionState, orientation: Orientation) -> Result<String> {
    let widget = CardsWidget {
        cards: card_views(items, state),
        grid_style: state.grid_style(orientation),
        orientation: match orientation {
            Orientation::Columns => "columns",
            Orientation::Rows => "rows",
        },
        responsive_css: None,
    };
    Ok(widget.render()?)
}

/// Cards for a full page load, before the viewport width is known: columns
/// at `breakpoint` px and wider, stacked rows below.
pub fn cards_responsive(items: &[CardItem], state: &AccordionState, breakpoint: u32) -> Result<String> {
    let tracks = state.track_template();
    let css = format!(
        "#expanding-cards {{ {columns}: {tracks}; }} \
         @media (max-width: {narrow}px) {{ #expanding-cards {{ {columns}: none; {rows}: {tracks}; }} }}",
        columns = Orientation::Columns.grid_property(),
        rows = Orientation::Rows.grid_property(),
        tracks = tracks,
        narrow = breakpoint.saturating_sub(1),
    );
    let widget = CardsWidget {
        cards: card_views(items, state),
        grid_style: String::new(),
        orientation: "responsive",
        responsive_css: Some(css),
    };
    Ok(widget.render()?)
}

// ============================================================================
// Mobile menu
// ============================================================================

pub struct MenuGroup {
    pub label: String,
    pub href: Option<String>,
    pub children: Vec<(String, String)>,
    pub current: bool,
}

#[derive(Template)]
#[template(path = "widgets/menu.html")]
pub struct MenuWidget {
    pub open: bool,
    pub aria_expanded: &'static str,
    pub toggle_url: String,
    pub escape_url: String,
    pub groups: Vec<MenuGroup>,
    pub sms_href: &'static str,
    pub phone_display: &'static str,
}

pub fn menu(nav: &[NavItem], current: &str, state: &Toggle) -> Result<String> {
    let open = state.is_open().to_string();
    let groups = nav
        .iter()
        .map(|item| match item {
            NavItem::Link(link) => MenuGroup {
                label: link.label.clone(),
                href: Some(link.href.clone()),
                children: Vec::new(),
                current: item.is_current(current),
            },
            NavItem::Group { label, children } => MenuGroup {
                label: label.clone(),
                href: None,
                children: children.iter().map(|c| (c.label.clone(), c.href.clone())).collect(),
                current: item.is_current(current),
            },
        })
        .collect();

    let widget = MenuWidget {
        open: state.is_open(),
        aria_expanded: state.aria_expanded(),
        toggle_url: widget_url(
            "/widgets/menu",
            &[("open", open.clone()), ("action", "toggle".into()), ("path", current.to_string())],
        ),
        escape_url: widget_url(
            "/widgets/menu",
            &[("open", open), ("action", "escape".into()), ("path", current.to_string())],
        ),
        groups,
        sms_href: crate::content::PRACTICE.sms_href,
        phone_display: crate::content::PRACTICE.phone_display,
    };
    Ok(widget.render()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{groupal, home, practice};

    #[test]
    fn test_widget_url_encodes_values() {
        assert_eq!(widget_url("/w", &[]), "/w");
        assert_eq!(
            widget_url("/w", &[("path", "/a b".into()), ("i", "2".into())]),
            "/w?path=%2Fa%20b&i=2"
        );
    }

    #[test]
    fn test_faq_url_carries_open_state() {
        let state = FaqState::with_open(4, Some(1));
        assert_eq!(faq_url("/therapies/tcc", &state, 3), "/widgets/faq/therapies/tcc?open=1&toggle=3");
        assert_eq!(
            faq_url("/therapies/tcc", &FaqState::new(4), 0),
            "/widgets/faq/therapies/tcc?toggle=0"
        );
    }

    #[test]
    fn test_gallery_marks_active_slide() {
        let page = groupal::mbct();
        let items = match &page.extras[0] {
            crate::content::ExtraSection::Gallery { items, .. } => items.clone(),
            _ => panic!("expected gallery"),
        };
        let state = CarouselState::at(items.len(), 2).unwrap();
        let html = gallery("mbct", &items, &state).unwrap();
        assert!(html.contains("data-index=\"2\""));
        assert!(html.contains("translateX(-200%)"));
        assert_eq!(html.matches("is-active").count(), 2);
    }

    #[test]
    fn test_gallery_hides_unavailable_buttons() {
        let items = match &groupal::mecl().extras[0] {
            crate::content::ExtraSection::Gallery { items, .. } => items.clone(),
            _ => panic!("expected gallery"),
        };
        let first = gallery("mecl", &items, &CarouselState::at(5, 0).unwrap()).unwrap();
        assert!(!first.contains("action=prev"));
        assert!(first.contains("action=next"));
        let last = gallery("mecl", &items, &CarouselState::at(5, 9).unwrap()).unwrap();
        assert!(last.contains("action=prev"));
        assert!(!last.contains("action=next"));
    }

    #[test]
    fn test_cards_grid_follows_active() {
        let items = home::therapy_cards();
        let state = AccordionState::new(items.len(), 1).unwrap();
        let html = cards(&items, &state, Orientation::Columns).unwrap();
        assert!(html.contains("grid-template-columns: 1fr 5fr 1fr 1fr 1fr 1fr"));
        let rows = cards(&items, &state, Orientation::Rows).unwrap();
        assert!(rows.contains("grid-template-rows"));
    }

    #[test]
    fn test_collapsed_cards_keep_their_content() {
        let items = home::therapy_cards();
        let state = AccordionState::new(items.len(), 1).unwrap();
        let html = cards(&items, &state, Orientation::Columns).unwrap();

        assert_eq!(html.matches("class=\"expanding-card-content").count(), items.len());
        assert_eq!(html.matches("expanding-card-content is-hidden").count(), items.len() - 1);
        assert_eq!(html.matches("class=\"expanding-card-label").count(), items.len() - 1);
        assert_eq!(html.matches("class=\"expanding-card-link\"").count(), items.len());
        // Card 0 is collapsed but its description is still in the markup.
        assert!(html.contains("ce dont nous avons besoin pour un développement harmonieux."));
    }

    #[test]
    fn test_first_paint_switches_axis_by_media_query() {
        let items = home::therapy_cards();
        let state = AccordionState::new(items.len(), 0).unwrap();
        let html = cards_responsive(&items, &state, 768).unwrap();

        assert!(html.contains("expanding-cards-responsive"));
        assert!(html.contains("grid-template-columns: 5fr 1fr 1fr 1fr 1fr 1fr"));
        assert!(html.contains("@media (max-width: 767px)"));
        assert!(html.contains("grid-template-rows: 5fr 1fr 1fr 1fr 1fr 1fr"));
        assert!(!html.contains("id=\"expanding-cards\" style="));
    }

    #[test]
    fn test_menu_open_state() {
        let nav = practice::navigation();
        let closed = menu(&nav, "/", &Toggle::new(false)).unwrap();
        assert!(closed.contains("aria-expanded=\"false\""));
        assert!(!closed.contains("<nav class=\"mobile-menu-panel\""));
        let open = menu(&nav, "/", &Toggle::new(true)).unwrap();
        assert!(open.contains("aria-expanded=\"true\""));
        assert!(open.contains("<nav class=\"mobile-menu-panel\""));
    }
}
