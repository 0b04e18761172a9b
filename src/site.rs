//! Route registry: every page of the site, keyed by path.
//!
//! Built once at start-up from the static content registries. The router,
//! the static exporter and the benchmark all read from it.

use rustc_hash::FxHashMap;
use serde::Serialize;
use tracing::{debug, info};

use crate::compose::{self, gallery_items, ComposedPage, FaqSection, Section};
use crate::content::home::{CardItem, HomePage, TeamMember};
use crate::content::legal::LegalPage;
use crate::content::model::CarouselItem;
use crate::content::pricing::TarifsPage;
use crate::content::team::{ProfilePage, YogaPage};
use crate::content::{groupal, home, legal, pricing, team, therapies};
use crate::error::{Result, SiteError};
use crate::render::pages::{self, TEAM_CAROUSEL_ID};

pub const HOME_ROUTE: &str = "/";
pub const TARIFS_ROUTE: &str = "/tarifs";
pub const PROFILE_ROUTE: &str = "/equipe/dr-deblangey";
pub const YOGA_ROUTE: &str = "/equipe/yoga";

/// One registered page.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", content = "page", rename_all = "snake_case")]
pub enum Page {
    Home(HomePage),
    Composed(ComposedPage),
    Tarifs(TarifsPage),
    Profile(ProfilePage),
    Yoga(YogaPage),
    Legal(LegalPage),
}

impl Page {
    fn render(&self, path: &str) -> Result<String> {
        match self {
            Page::Home(page) => pages::home(page),
            Page::Composed(page) => pages::composed(page),
            Page::Tarifs(page) => pages::tarifs(page),
            Page::Profile(page) => pages::profile(page, path),
            Page::Yoga(page) => pages::yoga(page, path),
            Page::Legal(page) => pages::legal(page),
        }
    }
}

/// Items behind a carousel widget id.
#[derive(Debug, Clone, Copy)]
pub enum CarouselSource<'a> {
    Gallery { host: &'a str, items: &'a [CarouselItem] },
    Team { host: &'a str, members: &'a [TeamMember] },
}

impl CarouselSource<'_> {
    pub fn len(&self) -> usize {
        match self {
            CarouselSource::Gallery { items, .. } => items.len(),
            CarouselSource::Team { members, .. } => members.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Route of the page that embeds this carousel.
    pub fn host(&self) -> &str {
        match self {
            CarouselSource::Gallery { host, .. } | CarouselSource::Team { host, .. } => host,
        }
    }
}

/// Strip a trailing slash so `/tarifs/` and `/tarifs` share an entry.
pub fn normalise_route(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        HOME_ROUTE
    } else {
        trimmed
    }
}

pub struct SiteRegistry {
    pages: FxHashMap<String, Page>,
    routes: Vec<String>,
    /// Gallery id -> hosting route.
    galleries: FxHashMap<String, String>,
}

impl SiteRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            pages: FxHashMap::default(),
            routes: Vec::new(),
            galleries: FxHashMap::default(),
        };

        registry.insert(HOME_ROUTE, Page::Home(home::home()));
        for config in therapies::all().iter().chain(groupal::all().iter()) {
            let composed = compose::compose(config);
            for placed in &composed.sections {
                if let Section::Extra(extra) = &placed.section {
                    if let Some((id, _)) = gallery_items(extra) {
                        registry.galleries.insert(id.to_string(), composed.slug.clone());
                    }
                }
            }
            let slug = composed.slug.clone();
            registry.insert(&slug, Page::Composed(composed));
        }
        registry.insert(TARIFS_ROUTE, Page::Tarifs(pricing::tarifs()));
        registry.insert(PROFILE_ROUTE, Page::Profile(team::dr_deblangey()));
        registry.insert(YOGA_ROUTE, Page::Yoga(team::yoga()));
        for page in legal::all() {
            let slug = page.slug.clone();
            registry.insert(&slug, Page::Legal(page));
        }

        info!(
            "Registered {} routes ({} galleries)",
            registry.routes.len(),
            registry.galleries.len()
        );
        registry
    }

    fn insert(&mut self, route: &str, page: Page) {
        self.routes.push(route.to_string());
        self.pages.insert(route.to_string(), page);
    }

    /// Every registered route, in navigation order.
    pub fn routes(&self) -> &[String] {
        &self.routes
    }

    pub fn get(&self, path: &str) -> Result<&Page> {
        let route = normalise_route(path);
        self.pages
            .get(route)
            .ok_or_else(|| SiteError::UnknownRoute(route.to_string()))
    }

    pub fn contains(&self, path: &str) -> bool {
        self.pages.contains_key(normalise_route(path))
    }

    /// Full HTML document for `path`.
    pub fn render(&self, path: &str) -> Result<String> {
        let route = normalise_route(path);
        let page = self.get(route)?;
        debug!("Rendering {}", route);
        page.render(route)
    }

    pub fn render_not_found(&self, path: &str) -> Result<String> {
        pages::not_found(path)
    }

    pub fn home(&self) -> Option<&HomePage> {
        match self.pages.get(HOME_ROUTE) {
            Some(Page::Home(page)) => Some(page),
            _ => None,
        }
    }

    /// The expanding therapy cards on the home page.
    pub fn cards(&self) -> &[CardItem] {
        self.home().map(|h| h.therapy_cards.as_slice()).unwrap_or(&[])
    }

    pub fn faq_section(&self, path: &str) -> Result<&FaqSection> {
        let route = normalise_route(path);
        match self.get(route)? {
            Page::Composed(page) => page
                .faq()
                .ok_or_else(|| SiteError::UnknownWidget(format!("faq{}", route))),
            _ => Err(SiteError::UnknownWidget(format!("faq{}", route))),
        }
    }

    pub fn carousel(&self, id: &str) -> Result<CarouselSource<'_>> {
        if id == TEAM_CAROUSEL_ID {
            let home = self
                .home()
                .ok_or_else(|| SiteError::UnknownWidget(format!("carousel/{}", id)))?;
            return Ok(CarouselSource::Team {
                host: HOME_ROUTE,
                members: &home.team,
            });
        }

        let host = self
            .galleries
            .get(id)
            .ok_or_else(|| SiteError::UnknownWidget(format!("carousel/{}", id)))?;
        let page = match self.pages.get(host) {
            Some(Page::Composed(page)) => page,
            _ => return Err(SiteError::UnknownWidget(format!("carousel/{}", id))),
        };
        page.sections
            .iter()
            .find_map(|placed| match &placed.section {
                Section::Extra(extra) => gallery_items(extra).filter(|(gid, _)| *gid == id),
                _ => None,
            })
            .map(|(_, items)| CarouselSource::Gallery { host: host.as_str(), items })
            .ok_or_else(|| SiteError::UnknownWidget(format!("carousel/{}", id)))
    }
}

impl Default for SiteRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registers_every_page() {
        let site = SiteRegistry::new();
        assert_eq!(site.routes().len(), 13);
        assert_eq!(site.routes()[0], "/");
        for route in ["/tarifs", "/therapies/tcc", "/groupal/mecl", "/equipe/yoga", "/confidentialite"] {
            assert!(site.contains(route), "{}", route);
        }
    }

    #[test]
    fn test_trailing_slash_is_ignored() {
        assert_eq!(normalise_route("/tarifs/"), "/tarifs");
        assert_eq!(normalise_route(""), "/");
        assert_eq!(normalise_route("/"), "/");
    }

    #[test]
    fn test_unknown_route() {
        let site = SiteRegistry::new();
        assert!(matches!(site.render("/nulle-part"), Err(SiteError::UnknownRoute(_))));
    }

    #[test]
    fn test_carousel_lookup() {
        let site = SiteRegistry::new();
        let mbct = site.carousel("mbct").unwrap();
        assert_eq!(mbct.host(), "/groupal/mbct");
        assert_eq!(mbct.len(), 5);
        let team = site.carousel("team").unwrap();
        assert_eq!(team.host(), "/");
        assert_eq!(team.len(), 3);
        assert!(matches!(site.carousel("absent"), Err(SiteError::UnknownWidget(_))));
    }

    #[test]
    fn test_faq_only_on_composed_pages() {
        let site = SiteRegistry::new();
        let faq = site.faq_section("/therapies/gestalt").unwrap();
        assert_eq!(faq.page, "/therapies/gestalt");
        assert!(site.faq_section("/tarifs").is_err());
    }

    #[test]
    fn test_cards() {
        assert_eq!(SiteRegistry::new().cards().len(), 6);
    }
}
