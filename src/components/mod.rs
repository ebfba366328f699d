//! Page chrome and section components for the portfolio page.

pub mod about;
pub mod contact;
pub mod education;
pub mod experience;
pub mod footer;
pub mod hero;
pub mod navbar;
pub mod skills;
