//! HTML rendering: askama templates for widgets, sections, pages and the
//! site shell.

pub mod layout;
pub mod markdown;
pub mod pages;
pub mod sections;
pub mod widgets;

pub use layout::document_title;
pub use pages::TEAM_CAROUSEL_ID;
