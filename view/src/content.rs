//! Fixed content of the landing view (single source of truth).

use crate::types::{InlineStyle, Px, TextAlign, VisualNode};

/// Logo asset, relative to the page serving the bundle
pub const LOGO_SRC: &str = "assets/verum-omnis-logo.png";

/// Alternative text of the logo
pub const LOGO_ALT: &str = "Verum Omnis Logo";

/// Display width of the logo
pub const LOGO_WIDTH: Px = Px(200);

/// Top offset of the centered container
pub const CONTAINER_MARGIN_TOP: Px = Px(50);

/// Heading text
pub const HEADING: &str = "Welcome to Verum Omnis Frontend";

/// Marketing copy under the heading
pub const TAGLINE: &str =
    "The world's first forensic AI platform — self-verifying, sealed, and secured.";

/// Build the landing visual tree:
/// container → [logo image, heading, tagline paragraph].
pub fn landing_tree() -> VisualNode {
    VisualNode::Container {
        style: InlineStyle {
            text_align: Some(TextAlign::Center),
            margin_top: Some(CONTAINER_MARGIN_TOP),
            ..Default::default()
        },
        children: vec![
            VisualNode::Image {
                src: LOGO_SRC.into(),
                alt: LOGO_ALT.into(),
                style: InlineStyle {
                    width: Some(LOGO_WIDTH),
                    ..Default::default()
                },
            },
            VisualNode::Heading {
                text: HEADING.into(),
            },
            VisualNode::Paragraph {
                text: TAGLINE.into(),
            },
        ],
    }
}
