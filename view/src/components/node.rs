//! Visual tree to markup

use crate::types::VisualNode;
use leptos::prelude::*;

/// Render one node and, for containers, its children in order.
///
/// Returns an [`AnyView`] so containers can nest without a recursive
/// opaque type.
pub fn render_node(node: VisualNode) -> AnyView {
    match node {
        VisualNode::Container { style, children } => {
            let children = children.into_iter().map(render_node).collect_view();
            view! { <div style=style.to_attr()>{children}</div> }.into_any()
        }
        VisualNode::Image { src, alt, style } => {
            view! { <img src=src alt=alt style=style.to_attr() /> }.into_any()
        }
        VisualNode::Heading { text } => view! { <h1>{text}</h1> }.into_any(),
        VisualNode::Paragraph { text } => view! { <p>{text}</p> }.into_any(),
    }
}
