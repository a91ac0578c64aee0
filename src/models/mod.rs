//! Data models for the BEGLES site.
//!
//! These models match the frontend TypeScript interfaces exactly, so the
//! persisted JSON stays readable for documents written by the browser build.

mod defaults;
mod image;
mod party;
mod site_info;
mod theme;

pub use defaults::*;
pub use image::*;
pub use party::*;
pub use site_info::*;
pub use theme::*;
