//! Identity of the practice and site-wide navigation.

use serde::Serialize;

use super::model::NavLink;

/// Fixed contact and identity details.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PracticeInfo {
    pub short_name: &'static str,
    pub full_name: &'static str,
    pub region: &'static str,
    pub practitioner: &'static str,
    pub since: &'static str,
    pub phone_display: &'static str,
    pub sms_href: &'static str,
    pub location: &'static str,
}

pub const PRACTICE: PracticeInfo = PracticeInfo {
    short_name: "EMPC",
    full_name: "Espace Médical de Psychothérapies et de Travail Corporel Associé",
    region: "La Réunion",
    practitioner: "Dr Joëlle Deblangey",
    since: "Depuis 2012",
    phone_display: "0692 46 07 89",
    sms_href: "sms:0692460789",
    location: "La Réunion, France",
};

/// Top-level header entry: a plain link or a dropdown group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NavItem {
    Link(NavLink),
    Group { label: String, children: Vec<NavLink> },
}

impl NavItem {
    pub fn label(&self) -> &str {
        match self {
            NavItem::Link(link) => &link.label,
            NavItem::Group { label, .. } => label,
        }
    }

    /// Every href reachable from this entry.
    pub fn hrefs(&self) -> Vec<&str> {
        match self {
            NavItem::Link(link) => vec![link.href.as_str()],
            NavItem::Group { children, .. } => children.iter().map(|c| c.href.as_str()).collect(),
        }
    }

    /// Whether this entry leads to `path`, for highlighting.
    pub fn is_current(&self, path: &str) -> bool {
        self.hrefs().iter().any(|href| *href == path)
    }
}

fn link(label: &str, href: &str) -> NavLink {
    NavLink::new(label, href)
}

fn group(label: &str, children: &[(&str, &str)]) -> NavItem {
    NavItem::Group {
        label: label.to_string(),
        children: children.iter().map(|(l, h)| link(l, h)).collect(),
    }
}

pub fn navigation() -> Vec<NavItem> {
    vec![
        NavItem::Link(link("Accueil", "/")),
        group(
            "L'Équipe",
            &[
                ("Dr Joëlle Deblangey", "/equipe/dr-deblangey"),
                ("Intervenants Yoga", "/equipe/yoga"),
            ],
        ),
        group(
            "Nos Thérapies",
            &[
                ("Gestalt-Thérapie", "/therapies/gestalt"),
                ("TCC", "/therapies/tcc"),
                ("Nutrition", "/therapies/nutrition"),
                ("Sexologie", "/therapies/sexologie"),
                ("Thérapies familiales", "/therapies/familiales"),
            ],
        ),
        group(
            "Travail Groupal",
            &[("Méditation MBCT", "/groupal/mbct"), ("MECL", "/groupal/mecl")],
        ),
        NavItem::Link(link("Tarifs", "/tarifs")),
    ]
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FooterGroup {
    pub title: String,
    pub links: Vec<NavLink>,
}

pub fn footer_groups() -> Vec<FooterGroup> {
    let build = |title: &str, links: &[(&str, &str)]| FooterGroup {
        title: title.to_string(),
        links: links.iter().map(|(l, h)| link(l, h)).collect(),
    };
    vec![
        build(
            "Navigation",
            &[
                ("Accueil", "/"),
                ("Dr Deblangey", "/equipe/dr-deblangey"),
                ("Tarifs", "/tarifs"),
            ],
        ),
        build(
            "Thérapies",
            &[
                ("Gestalt-Thérapie", "/therapies/gestalt"),
                ("TCC", "/therapies/tcc"),
                ("Nutrition", "/therapies/nutrition"),
                ("Méditation MBCT", "/groupal/mbct"),
            ],
        ),
    ]
}

pub fn legal_links() -> Vec<NavLink> {
    vec![
        link("Mentions légales", "/mentions-legales"),
        link("Confidentialité", "/confidentialite"),
    ]
}

/// Entry on the "page not found" page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub name: String,
    pub href: String,
    pub description: String,
}

pub fn not_found_suggestions() -> Vec<Suggestion> {
    [
        ("Accueil", "/", "Retourner à la page principale"),
        ("Nos Thérapies", "/therapies/gestalt", "Découvrir nos approches"),
        ("Tarifs", "/tarifs", "Consulter nos tarifs"),
        ("Dr Deblangey", "/equipe/dr-deblangey", "En savoir plus"),
    ]
    .iter()
    .map(|(name, href, description)| Suggestion {
        name: name.to_string(),
        href: href.to_string(),
        description: description.to_string(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_shape() {
        let nav = navigation();
        assert_eq!(nav.len(), 5);
        assert_eq!(nav[2].label(), "Nos Thérapies");
        assert_eq!(nav[2].hrefs().len(), 5);
        assert!(nav[3].is_current("/groupal/mecl"));
        assert!(!nav[0].is_current("/tarifs"));
    }

    #[test]
    fn test_sms_href_matches_phone() {
        let digits: String = PRACTICE.phone_display.chars().filter(|c| c.is_ascii_digit()).collect();
        assert_eq!(PRACTICE.sms_href, format!("sms:{}", digits));
    }
}
