//! Static page content, authored as Rust values.

pub mod groupal;
pub mod home;
pub mod legal;
pub mod model;
pub mod practice;
pub mod pricing;
pub mod team;
pub mod therapies;

pub use model::{Accent, ContentBlock, ExtraSection, ImageRef, NavLink, PageConfig};
pub use practice::{NavItem, PracticeInfo, PRACTICE};
