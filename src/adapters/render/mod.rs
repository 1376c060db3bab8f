//! Render Adapter
//!
//! Terminal view of the squad generator page.

mod text;

pub use text::{render_formations, render_page, render_squad};
