//! Render planning and section visibility
//!
//! Components are rendered from serializable props by the frontend layer;
//! this module decides *what* to render. A video inside a collapsed
//! accordion section must not load third-party iframes or scripts, so the
//! plan for a hidden embed is its print-safe alt text and nothing else.

use serde::{Deserialize, Serialize};

/// Tells a child component whether it is currently visible, without
/// prop-drilling through intermediate layout components.
pub trait VisibilityProvider {
    /// Whether the component's subtree is currently displayed
    fn is_visible(&self) -> bool;
}

/// Visibility for content outside any tracked section
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysVisible;

impl VisibilityProvider for AlwaysVisible {
    fn is_visible(&self) -> bool {
        true
    }
}

/// The accordion section a component is nested in.
///
/// `open` is the id of the currently open section when the accordion tracks
/// open state, `None` when it does not (untracked sections never hide their
/// children).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccordionSection {
    /// This section's id
    pub id: String,

    /// Id of the currently open section, if open state is tracked
    pub open: Option<String>,
}

impl AccordionSection {
    /// A section with untracked open state
    pub fn untracked(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            open: None,
        }
    }

    /// A section inside an accordion whose open section is `open`
    pub fn tracked(id: impl Into<String>, open: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            open: Some(open.into()),
        }
    }
}

impl VisibilityProvider for AccordionSection {
    fn is_visible(&self) -> bool {
        match &self.open {
            None => true,
            Some(open) => open == &self.id,
        }
    }
}

/// Serializable iframe props for a live embed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameProps {
    /// Iframe `src`: the rewritten embed URL
    pub src: String,

    /// Accessible title for the frame
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Allow the fullscreen API
    pub allow_fullscreen: bool,
}

/// What the component should render this pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum RenderPlan {
    /// Mount a live iframe with these props
    Frame(FrameProps),

    /// Render only the textual fallback
    AltText {
        /// Fallback text (empty when the source carries none)
        text: String,
    },
}

impl RenderPlan {
    /// Get the frame props if this plan mounts an iframe
    pub fn as_frame(&self) -> Option<&FrameProps> {
        match self {
            RenderPlan::Frame(props) => Some(props),
            _ => None,
        }
    }

    /// Whether this plan mounts an iframe
    pub fn is_frame(&self) -> bool {
        matches!(self, RenderPlan::Frame(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untracked_section_is_visible() {
        assert!(AccordionSection::untracked("s1").is_visible());
    }

    #[test]
    fn test_open_section_is_visible() {
        assert!(AccordionSection::tracked("s1", "s1").is_visible());
    }

    #[test]
    fn test_closed_section_is_hidden() {
        assert!(!AccordionSection::tracked("s1", "other-id").is_visible());
    }

    #[test]
    fn test_frame_props_wire_shape() {
        let plan = RenderPlan::Frame(FrameProps {
            src: "https://fast.wistia.net/embed/iframe/xyz".to_string(),
            title: None,
            allow_fullscreen: true,
        });

        let json = serde_json::to_value(&plan).unwrap();
        assert_eq!(json["type"], "frame");
        assert_eq!(json["allowFullscreen"], true);
        assert!(json.get("title").is_none());
    }
}
