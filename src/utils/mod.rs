//! Utility modules for the site generator.

pub mod html;
pub mod path;
