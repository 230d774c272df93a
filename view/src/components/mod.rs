//! Leptos components for the landing page.
//!
//! # Component Hierarchy
//!
//! ```text
//! LandingView
//! └── div (centered container)
//!     ├── img (logo)
//!     ├── h1  (heading)
//!     └── p   (tagline)
//! ```
//!
//! [`LandingView`] is the only public component. [`render_node`] turns any
//! [`crate::types::VisualNode`] into a view, so the markup always mirrors the
//! tree returned by [`crate::content::landing_tree`].

mod landing;
mod node;

pub use landing::LandingView;
pub use node::render_node;
