use serde::{Deserialize, Serialize};

/// Edge of the card the bar is pinned to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeAnchor {
    Top,
    Bottom,
}

impl EdgeAnchor {
    /// Layout offset declaration for this edge
    pub fn offset_declaration(&self) -> &'static str {
        match self {
            EdgeAnchor::Top => "top: 0",
            EdgeAnchor::Bottom => "bottom: 0",
        }
    }
}

/// Horizontal placement of the label inside the bar
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextPosition {
    Left,
    #[default]
    Center,
    Right,
}

impl TextPosition {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "left" => Some(TextPosition::Left),
            "center" => Some(TextPosition::Center),
            "right" => Some(TextPosition::Right),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TextPosition::Left => "left",
            TextPosition::Center => "center",
            TextPosition::Right => "right",
        }
    }
}

/// Progress bar state (rendering-agnostic)
///
/// Everything a renderer needs to draw one bar: the percentage, resolved
/// style tokens, and the label. CSS variable references arrive already
/// wrapped as `var(--name)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressBarState {
    /// Bar width, 0-100
    pub percentage: u8,

    /// Bar fill color
    pub color: String,

    /// Unfilled track color
    pub background_color: String,

    /// Bar thickness
    pub size: String,

    /// Edge offset, `None` keeps the bar in normal flow
    pub position: Option<EdgeAnchor>,

    /// Whether the host should pin the bar to its card edge
    pub anchored: bool,

    /// Label text; empty means no label
    pub text: String,

    pub text_color: String,
    pub text_shadow: String,
    pub text_size: String,
    pub text_position: TextPosition,
}

impl ProgressBarState {
    pub fn has_text(&self) -> bool {
        !self.text.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_position_parse() {
        assert_eq!(TextPosition::parse("LEFT"), Some(TextPosition::Left));
        assert_eq!(TextPosition::parse("center"), Some(TextPosition::Center));
        assert_eq!(TextPosition::parse("justify"), None);
        assert_eq!(TextPosition::default(), TextPosition::Center);
    }

    #[test]
    fn test_state_serializes_camel_case() {
        let state = ProgressBarState {
            percentage: 50,
            color: "var(--primary-color)".into(),
            background_color: "red".into(),
            size: "3px".into(),
            position: Some(EdgeAnchor::Bottom),
            anchored: true,
            text: String::new(),
            text_color: "white".into(),
            text_shadow: "none".into(),
            text_size: "12px".into(),
            text_position: TextPosition::Right,
        };

        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["percentage"], 50);
        assert_eq!(json["backgroundColor"], "red");
        assert_eq!(json["position"], "bottom");
        assert_eq!(json["textPosition"], "right");
        assert!(!state.has_text());
    }
}
