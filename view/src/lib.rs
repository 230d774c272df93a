//! # verum-view
//!
//! The Verum Omnis landing view, built with [Leptos](https://leptos.dev/).
//!
//! The view is a single static component, [`LandingView`]: a centered
//! container holding the logo, a heading and one paragraph of copy. It takes
//! no input and has no state.
//!
//! ## Architecture
//!
//! - [`types`] - Visual tree model (`VisualNode`, `InlineStyle`, `Px`)
//! - [`content`] - Fixed literals and [`content::landing_tree`]
//! - [`components`] - Leptos components rendering the tree
//!
//! ## Rendering
//!
//! In the browser the `verum-landing` binary mounts [`LandingView`] with the
//! `csr` feature. With the default `ssr` feature the same view renders to a
//! static HTML string:
//!
//! ```rust
//! # #[cfg(feature = "ssr")] {
//! let html = verum_view::render_landing();
//! assert!(html.contains("Welcome to Verum Omnis Frontend"));
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod content;
pub mod types;

pub use components::LandingView;
pub use content::landing_tree;
pub use types::VisualNode;

/// Render [`LandingView`] to an HTML fragment.
///
/// The output contains the container `<div>` and its children only; the
/// host page supplies `<html>`, `<head>` and `<body>`.
#[cfg(feature = "ssr")]
pub fn render_landing() -> String {
    use leptos::prelude::*;
    use leptos::tachys::view::RenderHtml;

    view! { <LandingView /> }.to_html()
}
