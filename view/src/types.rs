//! Visual tree types for the landing view.
//!
//! The tree is a plain value: it can be built, compared and serialized
//! without a browser, and [`crate::components::render_node`] turns it into
//! Leptos markup.
//!
//! # Example
//!
//! ```rust
//! use verum_view::types::{InlineStyle, Px, TextAlign, VisualNode};
//!
//! let node = VisualNode::Container {
//!     style: InlineStyle {
//!         text_align: Some(TextAlign::Center),
//!         margin_top: Some(Px(50)),
//!         ..Default::default()
//!     },
//!     children: vec![VisualNode::Heading { text: "Hello".into() }],
//! };
//!
//! assert_eq!(node.descendants().len(), 2);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Horizontal text alignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    /// Centered
    Center,
}

impl TextAlign {
    /// CSS keyword for `text-align`.
    pub fn as_css(self) -> &'static str {
        match self {
            TextAlign::Center => "center",
        }
    }
}

/// A length in host layout units (CSS pixels in the browser).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Px(pub u32);

impl fmt::Display for Px {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px", self.0)
    }
}

/// Inline style attached to an element.
///
/// Only the properties the landing view uses are modelled. Unset
/// properties are left out of both the CSS and the JSON form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineStyle {
    /// `text-align`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,
    /// `margin-top`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_top: Option<Px>,
    /// `width`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<Px>,
}

impl InlineStyle {
    /// True when no property is set.
    pub fn is_empty(&self) -> bool {
        self.text_align.is_none() && self.margin_top.is_none() && self.width.is_none()
    }

    /// Render as a CSS declaration list, e.g. `text-align: center; margin-top: 50px`.
    ///
    /// Declarations always come out in the order `text-align`, `margin-top`,
    /// `width`, so equal styles produce equal strings. The last declaration
    /// carries no `;`: Leptos terminates a `style` string itself.
    pub fn to_css(&self) -> String {
        let mut decls = Vec::new();
        if let Some(align) = self.text_align {
            decls.push(format!("text-align: {}", align.as_css()));
        }
        if let Some(margin) = self.margin_top {
            decls.push(format!("margin-top: {}", margin));
        }
        if let Some(width) = self.width {
            decls.push(format!("width: {}", width));
        }
        decls.join("; ")
    }

    /// Value for a `style` attribute; `None` keeps the attribute off the element.
    pub fn to_attr(&self) -> Option<String> {
        (!self.is_empty()).then(|| self.to_css())
    }
}

/// Discriminant of a [`VisualNode`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Block container (`<div>`)
    Container,
    /// Image (`<img>`)
    Image,
    /// Top-level heading (`<h1>`)
    Heading,
    /// Paragraph (`<p>`)
    Paragraph,
}

/// One element of the visual tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VisualNode {
    /// Block container holding child nodes in display order
    Container {
        /// Inline style of the container
        #[serde(default)]
        style: InlineStyle,
        /// Children, first to last
        #[serde(default)]
        children: Vec<VisualNode>,
    },
    /// Image referencing an asset resolved by the host page
    Image {
        /// Asset reference (relative to the host page)
        src: String,
        /// Alternative text
        alt: String,
        /// Inline style of the image
        #[serde(default)]
        style: InlineStyle,
    },
    /// Heading text
    Heading {
        /// Literal heading text
        text: String,
    },
    /// Paragraph text
    Paragraph {
        /// Literal paragraph text
        text: String,
    },
}

impl VisualNode {
    /// Variant of this node.
    pub fn kind(&self) -> NodeKind {
        match self {
            VisualNode::Container { .. } => NodeKind::Container,
            VisualNode::Image { .. } => NodeKind::Image,
            VisualNode::Heading { .. } => NodeKind::Heading,
            VisualNode::Paragraph { .. } => NodeKind::Paragraph,
        }
    }

    /// Direct children; leaves have none.
    pub fn children(&self) -> &[VisualNode] {
        match self {
            VisualNode::Container { children, .. } => children,
            _ => &[],
        }
    }

    /// Pre-order walk, starting with `self`.
    pub fn descendants(&self) -> Vec<&VisualNode> {
        let mut out = vec![self];
        for child in self.children() {
            out.extend(child.descendants());
        }
        out
    }

    /// Pretty-printed JSON form of the tree.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn px_displays_with_unit() {
        assert_eq!(Px(200).to_string(), "200px");
        assert_eq!(Px(0).to_string(), "0px");
    }

    #[test]
    fn css_declarations_keep_fixed_order() {
        let style = InlineStyle {
            width: Some(Px(10)),
            text_align: Some(TextAlign::Center),
            margin_top: Some(Px(4)),
        };
        assert_eq!(
            style.to_css(),
            "text-align: center; margin-top: 4px; width: 10px"
        );
    }

    #[test]
    fn empty_style_has_no_attribute() {
        let style = InlineStyle::default();
        assert!(style.is_empty());
        assert_eq!(style.to_css(), "");
        assert_eq!(style.to_attr(), None);
    }

    #[test]
    fn leaves_have_no_children() {
        let heading = VisualNode::Heading { text: "h".into() };
        assert!(heading.children().is_empty());
        assert_eq!(heading.descendants().len(), 1);
        assert_eq!(heading.kind(), NodeKind::Heading);
    }

    #[test]
    fn descendants_walk_in_pre_order() {
        let tree = VisualNode::Container {
            style: InlineStyle::default(),
            children: vec![
                VisualNode::Container {
                    style: InlineStyle::default(),
                    children: vec![VisualNode::Paragraph { text: "inner".into() }],
                },
                VisualNode::Heading { text: "after".into() },
            ],
        };
        let kinds: Vec<NodeKind> = tree.descendants().iter().map(|n| n.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                NodeKind::Container,
                NodeKind::Container,
                NodeKind::Paragraph,
                NodeKind::Heading,
            ]
        );
    }

    #[test]
    fn json_is_tagged_by_kind() {
        let node = VisualNode::Image {
            src: "logo.png".into(),
            alt: "Logo".into(),
            style: InlineStyle {
                width: Some(Px(200)),
                ..Default::default()
            },
        };
        let json = node.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["kind"], "image");
        assert_eq!(value["style"]["width"], 200);
        assert!(value["style"].get("text_align").is_none());
    }
}
