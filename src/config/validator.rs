//! Feature configuration validator
//!
//! Checks a raw configuration without resolving it: whether a progress source
//! exists at all, and which configured fields will be ignored or fall back.

use crate::config::{RawFeatureConfig, RawValueSource};

#[derive(Debug, Clone, PartialEq)]
pub enum ValidationIssue {
    MissingProgressSource,
    ShadowedSource {
        used: &'static str,
        ignored: &'static str,
    },
    CountdownPairIncomplete,
    IntervalPairIncomplete,
    ConflictingTimeModes,
    TimeModeMissing,
    ValueSourceMalformed,
    UnknownTextPosition {
        value: String,
    },
    UnknownPosition {
        value: String,
    },
}

impl ValidationIssue {
    pub fn severity(&self) -> ValidationSeverity {
        match self {
            ValidationIssue::MissingProgressSource => ValidationSeverity::Error,
            _ => ValidationSeverity::Warning,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ValidationIssue::MissingProgressSource => {
                "No progress source: set entity, attribute, template or time".to_string()
            }
            ValidationIssue::ShadowedSource { used, ignored } => {
                format!("'{}' takes precedence, '{}' is ignored", used, ignored)
            }
            ValidationIssue::CountdownPairIncomplete => {
                "time.initial & time.remaining are co-dependent".to_string()
            }
            ValidationIssue::IntervalPairIncomplete => {
                "time.start & time.end are co-dependent".to_string()
            }
            ValidationIssue::ConflictingTimeModes => {
                "time.initial/remaining and time.start/end are exclusive; start/end is ignored"
                    .to_string()
            }
            ValidationIssue::TimeModeMissing => {
                "time must define initial & remaining or start & end".to_string()
            }
            ValidationIssue::ValueSourceMalformed => {
                "value must define entity/attribute or template".to_string()
            }
            ValidationIssue::UnknownTextPosition { value } => format!(
                "text_position '{}' is not left, center or right; center is used",
                value
            ),
            ValidationIssue::UnknownPosition { value } => format!(
                "position '{}' is not top or bottom; the bar is not edge anchored",
                value
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationSeverity {
    Error,
    Warning,
}

pub struct ValidationResult {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        !self.has_errors()
    }

    pub fn has_errors(&self) -> bool {
        self.issues
            .iter()
            .any(|i| matches!(i.severity(), ValidationSeverity::Error))
    }

    pub fn has_warnings(&self) -> bool {
        self.issues
            .iter()
            .any(|i| matches!(i.severity(), ValidationSeverity::Warning))
    }

    pub fn errors(&self) -> Vec<&ValidationIssue> {
        self.issues
            .iter()
            .filter(|i| matches!(i.severity(), ValidationSeverity::Error))
            .collect()
    }

    pub fn warnings(&self) -> Vec<&ValidationIssue> {
        self.issues
            .iter()
            .filter(|i| matches!(i.severity(), ValidationSeverity::Warning))
            .collect()
    }
}

fn is_set(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|s| !s.is_empty())
}

fn has_template(value: &Option<serde_json::Value>) -> bool {
    match value {
        None | Some(serde_json::Value::Null) => false,
        Some(serde_json::Value::String(s)) => !s.is_empty(),
        Some(_) => true,
    }
}

/// Validate a feature configuration
pub fn validate_feature_config(config: &RawFeatureConfig) -> ValidationResult {
    let mut issues = Vec::new();

    check_progress_source(&mut issues, config);

    if let Some(value) = &config.value {
        check_value_source(&mut issues, value);
    }

    if let Some(position) = config.text_position.as_deref().filter(|p| !p.is_empty()) {
        if !matches!(
            position.to_lowercase().as_str(),
            "left" | "center" | "right"
        ) {
            issues.push(ValidationIssue::UnknownTextPosition {
                value: position.to_string(),
            });
        }
    }

    if let Some(position) = config.position.as_deref().filter(|p| !p.is_empty()) {
        if position != "top" && position != "bottom" {
            issues.push(ValidationIssue::UnknownPosition {
                value: position.to_string(),
            });
        }
    }

    ValidationResult { issues }
}

fn check_progress_source(issues: &mut Vec<ValidationIssue>, config: &RawFeatureConfig) {
    // Ordered by precedence
    let sources: [(&'static str, bool); 4] = [
        ("attribute", is_set(&config.attribute)),
        ("entity", is_set(&config.entity)),
        ("template", has_template(&config.template)),
        ("time", config.time.is_some()),
    ];

    let mut configured = sources.iter().filter(|(_, set)| *set).map(|(name, _)| *name);
    let Some(used) = configured.next() else {
        issues.push(ValidationIssue::MissingProgressSource);
        return;
    };
    for ignored in configured {
        issues.push(ValidationIssue::ShadowedSource { used, ignored });
    }

    if used != "time" {
        return;
    }
    let Some(time) = &config.time else {
        return;
    };

    let countdown = (is_set(&time.initial), is_set(&time.remaining));
    let interval = (is_set(&time.start), is_set(&time.end));
    let countdown_any = countdown.0 || countdown.1;
    let interval_any = interval.0 || interval.1;

    if countdown_any && countdown != (true, true) {
        issues.push(ValidationIssue::CountdownPairIncomplete);
    }
    if interval_any && interval != (true, true) {
        issues.push(ValidationIssue::IntervalPairIncomplete);
    }
    if countdown_any && interval_any {
        issues.push(ValidationIssue::ConflictingTimeModes);
    }
    if !countdown_any && !interval_any {
        issues.push(ValidationIssue::TimeModeMissing);
    }
}

fn check_value_source(issues: &mut Vec<ValidationIssue>, value: &RawValueSource) {
    let readable = is_set(&value.attribute) || is_set(&value.entity);
    let template = !matches!(value.template, None | Some(serde_json::Value::Null));
    if !readable && !template {
        issues.push(ValidationIssue::ValueSourceMalformed);
    }
}
