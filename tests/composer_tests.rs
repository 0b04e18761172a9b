// Composer and widget behaviour through the public API.
//
// Run with: cargo test --test composer_tests

use approx::assert_relative_eq;
use empc_site::compose::{compose, SectionKind};
use empc_site::content::model::{axis, faq, price, reference};
use empc_site::content::{groupal, therapies, ImageRef, PageConfig};
use empc_site::render::pages;
use empc_site::widgets::{AccordionState, CarouselState, Direction, DragOutcome, FaqState};

fn base_config() -> PageConfig {
    PageConfig {
        slug: "/therapies/essai".into(),
        breadcrumb: "Nos Thérapies".into(),
        title: "Essai".into(),
        subtitle: "Une page de test".into(),
        hero_image: ImageRef::new("https://example.com/hero.jpg", "Essai"),
        intro_text: "Introduction.".into(),
        indications: vec!["Anxiété".into()],
        prices: vec![price(None, "60€", "45 min")],
        ..PageConfig::default()
    }
}

// =========================================================================
// Section presence
// =========================================================================

#[test]
fn test_optional_section_present_iff_field_non_empty() {
    let mut config = base_config();
    let page = compose(&config);
    for kind in [
        SectionKind::Definition,
        SectionKind::Axes,
        SectionKind::Practice,
        SectionKind::Session,
        SectionKind::Faq,
        SectionKind::References,
    ] {
        assert!(!page.has(kind), "{:?} should be absent", kind);
    }

    config.axes = vec![axis("Un", "Premier axe")];
    config.faqs = vec![faq("Question ?", "Réponse.")];
    config.references = vec![reference("Livre", None)];
    config.practice_items = vec!["Séance individuelle".into()];
    let page = compose(&config);
    assert!(page.has(SectionKind::Axes));
    assert!(page.has(SectionKind::Faq));
    assert!(page.has(SectionKind::References));
    assert!(page.has(SectionKind::Practice));
    assert!(!page.has(SectionKind::Definition));
    assert!(!page.has(SectionKind::Session));
}

#[test]
fn test_rendered_markup_follows_presence() {
    let mut config = base_config();
    let html = pages::composed(&compose(&config)).unwrap();
    assert!(!html.contains("section-axes "));
    assert!(!html.contains("section-faq "));
    assert!(html.contains("section-indications "));
    assert!(html.contains("section-pricing "));

    config.axes = vec![axis("Un", "Premier axe"), axis("Deux", "Second axe")];
    let html = pages::composed(&compose(&config)).unwrap();
    assert!(html.contains("section-axes "));
}

#[test]
fn test_every_registered_page_keeps_the_order() {
    let order = |kind: SectionKind| match kind {
        SectionKind::Hero => 0,
        SectionKind::Intro => 1,
        SectionKind::Definition => 2,
        SectionKind::Axes => 3,
        SectionKind::Practice => 4,
        SectionKind::Session => 5,
        SectionKind::Indications => 6,
        SectionKind::Pricing => 7,
        SectionKind::Faq => 8,
        SectionKind::References => 9,
        SectionKind::Extra => 10,
        SectionKind::CallToAction => 11,
    };
    for config in therapies::all().iter().chain(groupal::all().iter()) {
        let kinds = compose(config).kinds();
        assert_eq!(kinds.first(), Some(&SectionKind::Hero), "{}", config.slug);
        assert_eq!(kinds.last(), Some(&SectionKind::CallToAction), "{}", config.slug);
        assert!(
            kinds.windows(2).all(|w| order(w[0]) <= order(w[1])),
            "{} out of order: {:?}",
            config.slug,
            kinds
        );
    }
}

#[test]
fn test_hero_has_no_divider_and_absent_sections_take_theirs() {
    let page = compose(&base_config());
    assert!(page.sections[0].divider.is_none());
    assert!(page.sections[1..].iter().all(|s| s.divider.is_some() || s.section.kind() == SectionKind::Extra));
    let divider_count = page.sections.iter().filter(|s| s.divider.is_some()).count();
    assert_eq!(divider_count, page.sections.len() - 1);
}

// =========================================================================
// Widgets
// =========================================================================

#[test]
fn test_drag_release_classification() {
    let width = 800.0;
    let mut carousel = CarouselState::at(5, 2).unwrap();
    assert_eq!(
        carousel.end_drag(-0.4 * width, 100.0, width),
        DragOutcome::Advance(Direction::Forward)
    );
    assert_eq!(carousel.index(), 3);

    assert_eq!(carousel.end_drag(0.1 * width, 100.0, width), DragOutcome::SnapBack);
    assert_eq!(carousel.index(), 3);

    assert_eq!(
        carousel.end_drag(0.4 * width, -100.0, width),
        DragOutcome::Advance(Direction::Backward)
    );
    assert_eq!(carousel.index(), 2);
    assert_relative_eq!(carousel.viewport_offset(width), -1600.0);
}

#[test]
fn test_five_item_carousel_scenario() {
    let mut carousel = CarouselState::new(5).unwrap();
    carousel.prev();
    assert_eq!(carousel.index(), 0);
    for _ in 0..4 {
        carousel.next();
    }
    assert_eq!(carousel.index(), 4);
    carousel.next();
    assert_eq!(carousel.index(), 4);
    assert_eq!(carousel.counter(), "5 / 5");
}

#[test]
fn test_go_to_clamps_any_integer() {
    let mut carousel = CarouselState::new(4).unwrap();
    for target in [-10_i64, -1, 0, 2, 3, 4, 100] {
        carousel.go_to(target);
        assert_eq!(carousel.index() as i64, target.clamp(0, 3));
    }
}

#[test]
fn test_accordion_always_one_active() {
    let mut cards = AccordionState::new(6, 0).unwrap();
    for i in [3, 9, 0, 5, 6, 2] {
        cards.activate(i);
        assert_eq!((0..6).filter(|&j| cards.visual(j).revealed).count(), 1);
    }
    assert_eq!(cards.active(), 2);
}

#[test]
fn test_faq_scenario() {
    let mut faq = FaqState::new(4);
    assert_eq!(faq.open(), None);
    faq.toggle(1);
    assert_eq!(faq.open(), Some(1));
    faq.toggle(1);
    assert_eq!(faq.open(), None);
    faq.toggle(0);
    faq.toggle(3);
    assert_eq!(faq.open(), Some(3));
    assert!(!faq.is_open(0));
}
