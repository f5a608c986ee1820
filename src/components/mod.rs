//! UI Components
//!
//! Leptos components for the portfolio page.

mod nav_bar;
mod visitor_counter;

pub use nav_bar::NavBar;
pub use visitor_counter::VisitorCounter;
