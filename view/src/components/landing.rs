use super::render_node;
use crate::content::landing_tree;
use leptos::prelude::*;

/// The landing page: centered logo, heading and tagline.
///
/// Takes no props and holds no state; every render produces the same markup.
#[component]
pub fn LandingView() -> impl IntoView {
    render_node(landing_tree())
}
