//! Inline style block and class names for the bar element

use crate::widgets::ProgressBarState;

pub const BAR_CLASS: &str = "progress-bar";
pub const ANCHORED_CLASS: &str = "progress-bar-anchored";
pub const TEXT_CLASS: &str = "progress-text";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleDeclaration {
    /// Classes for the bar element
    pub classes: Vec<&'static str>,
    /// Inline style: custom properties, then the edge offset if any
    pub style: String,
    /// Classes for the label overlay; `None` when there is no label
    pub text_classes: Option<String>,
}

impl StyleDeclaration {
    pub fn class_attr(&self) -> String {
        self.classes.join(" ")
    }
}

pub fn style_declaration(state: &ProgressBarState) -> StyleDeclaration {
    let mut classes = vec![BAR_CLASS];
    if state.anchored {
        classes.push(ANCHORED_CLASS);
    }

    let mut declarations = vec![
        format!("--progress-bar-color: {}", state.color),
        format!("--progress-bar-color-bg: {}", state.background_color),
        format!("--progress-bar-width: {}%", state.percentage),
        format!("--progress-bar-size: {}", state.size),
        format!("--progress-bar-text-color: {}", state.text_color),
        format!("--progress-bar-text-shadow: {}", state.text_shadow),
        format!("--progress-bar-text-size: {}", state.text_size),
    ];
    if let Some(anchor) = state.position {
        declarations.push(anchor.offset_declaration().to_string());
    }

    let text_classes = state.has_text().then(|| {
        format!(
            "{} {}-{}",
            TEXT_CLASS,
            TEXT_CLASS,
            state.text_position.as_str()
        )
    });

    StyleDeclaration {
        classes,
        style: declarations.join("; "),
        text_classes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::{EdgeAnchor, TextPosition};

    fn state() -> ProgressBarState {
        ProgressBarState {
            percentage: 42,
            color: "var(--primary-color)".into(),
            background_color: "hsla(from var(--progress-bar-color) h s l / .2)".into(),
            size: "var(--feature-height)".into(),
            position: None,
            anchored: false,
            text: String::new(),
            text_color: "var(--text-primary-color)".into(),
            text_shadow: "0 1px 2px rgba(0,0,0,.35)".into(),
            text_size: "12px".into(),
            text_position: TextPosition::Center,
        }
    }

    #[test]
    fn test_plain_bar() {
        let decl = style_declaration(&state());
        assert_eq!(decl.class_attr(), "progress-bar");
        assert!(decl.style.starts_with("--progress-bar-color: var(--primary-color); "));
        assert!(decl.style.contains("--progress-bar-width: 42%"));
        assert!(decl.style.ends_with("--progress-bar-text-size: 12px"));
        assert_eq!(decl.text_classes, None);
    }

    #[test]
    fn test_anchored_bar_with_label() {
        let state = ProgressBarState {
            position: Some(EdgeAnchor::Top),
            anchored: true,
            text: "Load: 42%".into(),
            text_position: TextPosition::Right,
            ..state()
        };

        let decl = style_declaration(&state);
        assert_eq!(decl.class_attr(), "progress-bar progress-bar-anchored");
        assert!(decl.style.ends_with("; top: 0"));
        assert_eq!(
            decl.text_classes.as_deref(),
            Some("progress-text progress-text-right")
        );
    }
}
