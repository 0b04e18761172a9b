//! EMPC brochure site.
//!
//! - `content/`: static page records (therapies, programmes, team, legal)
//! - `compose/`: turns a therapy page record into its ordered sections
//! - `widgets/`: carousel, expanding cards, FAQ and menu state machines
//! - `motion/`: easing, scroll-linked values and decorative shapes
//! - `render/`: askama templates for pages, sections and widgets
//! - `site`: route registry shared by the server and the exporter
//! - `server`: axum router with HTMX widget endpoints (feature `server`)

pub mod compose;
pub mod config;
pub mod content;
pub mod error;
pub mod export;
pub mod motion;
pub mod render;
pub mod site;
pub mod widgets;

#[cfg(feature = "server")]
pub mod server;

// Re-export commonly used types
pub use compose::{compose, ComposedPage, PlacedSection, Section, SectionKind};
pub use config::SiteConfig;
pub use content::PageConfig;
pub use error::{Result, SiteError};
pub use export::{export_site, ExportReport};
pub use site::{Page, SiteRegistry};
pub use widgets::{AccordionState, CarouselState, DragOutcome, FaqState, Toggle};

#[cfg(feature = "server")]
pub use server::{create_router, AppState};
