// Page shell: header with navigation, mobile menu, footer, scroll-to-top.

use askama::Template;
use chrono::Datelike;

use crate::content::model::NavLink;
use crate::content::practice::{self, FooterGroup, NavItem, PracticeInfo, PRACTICE};
use crate::error::Result;
use crate::motion::ScrollMotion;
use crate::render::widgets;
use crate::widgets::Toggle;

pub struct NavEntry {
    pub label: String,
    pub href: Option<String>,
    pub children: Vec<NavLink>,
    pub current: bool,
    pub dropdown_id: String,
    /// Dropdowns start closed.
    pub aria_expanded: &'static str,
}

impl NavEntry {
    fn from_item(index: usize, item: &NavItem, current: &str) -> Self {
        let (href, children) = match item {
            NavItem::Link(link) => (Some(link.href.clone()), Vec::new()),
            NavItem::Group { children, .. } => (None, children.clone()),
        };
        Self {
            label: item.label().to_string(),
            href,
            children,
            current: item.is_current(current),
            dropdown_id: format!("nav-dropdown-{}", index),
            aria_expanded: Toggle::default().aria_expanded(),
        }
    }
}

#[derive(Template)]
#[template(path = "layout.html")]
pub struct LayoutTemplate {
    pub title: String,
    pub transparent_header: bool,
    pub nav: Vec<NavEntry>,
    pub menu_html: String,
    pub body: String,
    pub footer_groups: Vec<FooterGroup>,
    pub legal_links: Vec<NavLink>,
    pub practice: PracticeInfo,
    pub year: i32,
    /// Scroll-effect parameters for the layout script.
    pub motion_attrs: String,
}

/// Document title shown in the browser tab.
pub fn document_title(title: &str) -> String {
    if title.is_empty() {
        format!("{} | {}", PRACTICE.short_name, PRACTICE.full_name)
    } else {
        format!("{} | {}", title, PRACTICE.short_name)
    }
}

/// Wrap `body` in the site shell. `path` highlights the current entry.
pub fn page(title: &str, path: &str, body: String, transparent_header: bool) -> Result<String> {
    let items = practice::navigation();
    let nav = items
        .iter()
        .enumerate()
        .map(|(i, item)| NavEntry::from_item(i, item, path))
        .collect();
    let template = LayoutTemplate {
        title: document_title(title),
        transparent_header,
        nav,
        menu_html: widgets::menu(&items, path, &Toggle::default())?,
        body,
        footer_groups: practice::footer_groups(),
        legal_links: practice::legal_links(),
        practice: PRACTICE,
        year: chrono::Utc::now().year(),
        motion_attrs: ScrollMotion::SITE.data_attrs(),
    };
    Ok(template.render()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_title() {
        assert_eq!(document_title("Tarifs"), "Tarifs | EMPC");
        assert!(document_title("").starts_with("EMPC | Espace"));
    }

    #[test]
    fn test_shell_marks_current_group() {
        let html = page("TCC", "/therapies/tcc", "<p>corps</p>".into(), true).unwrap();
        assert!(html.contains("<p>corps</p>"));
        assert!(html.contains("nav-item is-current"));
        assert_eq!(html.matches("nav-item is-current").count(), 1);
        assert!(html.contains("header-transparent"));
    }

    #[test]
    fn test_shell_wires_client_behaviour() {
        let html = page("", "/", String::new(), false).unwrap();
        assert!(html.contains("data-parallax-shift=\"150\""));
        assert!(html.contains("data-header-solid-after=\"100\""));
        // Every data attribute the widgets emit has a reader in the script.
        for hook in [
            "motion.parallaxShift",
            "motion.revealRise",
            "[data-drift-layer]",
            "dataset.dragUrl",
            "dataset.scrollLeft",
            "nav-dropdown-trigger",
            "triggeringEvent",
            "faq-question",
        ] {
            assert!(html.contains(hook), "script does not read {}", hook);
        }
    }
}
