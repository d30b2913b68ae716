//! Configuration loader plus strongly typed settings structures.
//!
//! The host hands us a loosely-typed record ([`RawFeatureConfig`]). It is
//! checked once by [`FeatureConfig::from_raw`], which picks the single
//! progress source that wins and turns every optional field into the shape
//! the resolvers work with. Scenario files bundle a configuration with the
//! entity snapshots it should be resolved against.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::data::{EntitySnapshot, Registry, Scalar};

pub mod error;
pub mod validator;

pub use error::ConfigError;

/// Type tag the host uses to find this feature
pub const FEATURE_TYPE: &str = "custom:progress-bar-feature";

/// Reserved color selecting a progress-derived hue
pub const METER_COLOR: &str = "meter";

/// Configuration exactly as the host supplies it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawFeatureConfig {
    #[serde(rename = "type")]
    pub feature_type: Option<String>,
    pub entity: Option<String>,
    pub attribute: Option<String>,
    /// Pre-resolved template output, string or number
    pub template: Option<serde_json::Value>,
    pub time: Option<RawTimeConfig>,
    pub inverse: bool,

    pub color: Option<String>,
    pub background: Option<String>,
    pub size: Option<String>,
    pub position: Option<String>,

    pub show_name: bool,
    pub show_value: bool,
    /// Any scalar; numbers are shown as written
    pub name: Option<Scalar>,
    pub value: Option<RawValueSource>,
    pub format: Option<FormatConfig>,
    pub text_position: Option<String>,
    pub text_color: Option<String>,
    pub text_shadow: Option<String>,
    pub text_size: Option<String>,
}

impl RawFeatureConfig {
    /// Minimal configuration offered by the host's feature picker
    pub fn stub() -> Self {
        Self {
            feature_type: Some(FEATURE_TYPE.to_string()),
            ..Self::default()
        }
    }
}

/// `time` block: entity/attribute ids for either temporal mode
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawTimeConfig {
    pub initial: Option<String>,
    pub remaining: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
}

/// `value` block overriding what the label displays
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawValueSource {
    pub entity: Option<String>,
    pub attribute: Option<String>,
    pub template: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    pub prefix: Option<String>,
    pub suffix: Option<String>,
    /// Only a finite number is honoured; anything else is ignored
    pub decimals: Option<serde_json::Value>,
}

/// Where the bar's percentage comes from
#[derive(Debug, Clone, PartialEq)]
pub enum ProgressSource {
    Entity(String),
    Attribute(String),
    Template(Scalar),
    Time(TimeSource),
}

/// Temporal progress models
#[derive(Debug, Clone, PartialEq)]
pub enum TimeSource {
    /// Total duration and remaining duration
    Countdown { initial: String, remaining: String },
    /// Absolute start and end instants
    Interval { start: String, end: String },
    /// Configured, but not resolvable; always yields the default
    Incomplete(TimeIssue),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeIssue {
    CountdownPair,
    IntervalPair,
    NoMode,
}

/// Where the label's raw value comes from
#[derive(Debug, Clone, PartialEq)]
pub enum LabelSource {
    /// The resolved bar percentage
    Progress,
    Read(String),
    Template(Scalar),
    /// `value` was given without a usable shape; falls back to the percentage
    Malformed,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BarColor {
    Meter,
    Fixed(String),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleConfig {
    pub color: Option<BarColor>,
    pub background: Option<String>,
    pub size: Option<String>,
    pub position: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValueFormat {
    pub prefix: String,
    pub suffix: String,
    pub decimals: Option<usize>,
}

impl Default for ValueFormat {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            suffix: "%".to_string(),
            decimals: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LabelConfig {
    pub show_name: bool,
    pub show_value: bool,
    pub name: Option<String>,
    pub source: LabelSource,
    pub format: ValueFormat,
    pub text_position: Option<String>,
    pub text_color: Option<String>,
    /// Kept verbatim, an explicit empty shadow is honoured
    pub text_shadow: Option<String>,
    pub text_size: Option<String>,
}

/// Validated configuration the resolvers run against
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureConfig {
    pub progress: ProgressSource,
    pub inverse: bool,
    pub style: StyleConfig,
    pub label: LabelConfig,
}

/// Treat empty strings like missing ones
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

fn template_value(value: &Option<serde_json::Value>) -> Option<Scalar> {
    value
        .as_ref()
        .and_then(Scalar::from_json)
        .filter(|s| !matches!(s, Scalar::Text(t) if t.is_empty()))
}

impl FeatureConfig {
    /// Validate a host-supplied configuration; `None` means none was supplied
    pub fn parse(raw: Option<&RawFeatureConfig>) -> Result<Self, ConfigError> {
        match raw {
            Some(raw) => Self::from_raw(raw),
            None => Err(ConfigError::Missing),
        }
    }

    pub fn from_raw(raw: &RawFeatureConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            progress: Self::progress_source(raw)?,
            inverse: raw.inverse,
            style: StyleConfig {
                color: present(&raw.color).map(|c| {
                    if c == METER_COLOR {
                        BarColor::Meter
                    } else {
                        BarColor::Fixed(c.to_string())
                    }
                }),
                background: present(&raw.background).map(str::to_string),
                size: present(&raw.size).map(str::to_string),
                position: present(&raw.position).map(str::to_string),
            },
            label: LabelConfig {
                show_name: raw.show_name,
                show_value: raw.show_value,
                name: raw
                    .name
                    .as_ref()
                    .filter(|name| name.is_truthy())
                    .map(Scalar::to_string),
                source: Self::label_source(raw.value.as_ref()),
                format: Self::value_format(raw.format.as_ref()),
                text_position: present(&raw.text_position).map(str::to_string),
                text_color: present(&raw.text_color).map(str::to_string),
                text_shadow: raw.text_shadow.clone(),
                text_size: present(&raw.text_size).map(str::to_string),
            },
        })
    }

    /// `attribute` beats `entity` beats `template` beats `time`
    fn progress_source(raw: &RawFeatureConfig) -> Result<ProgressSource, ConfigError> {
        if let Some(attribute) = present(&raw.attribute) {
            return Ok(ProgressSource::Attribute(attribute.to_string()));
        }
        if let Some(entity) = present(&raw.entity) {
            return Ok(ProgressSource::Entity(entity.to_string()));
        }
        if let Some(template) = template_value(&raw.template) {
            return Ok(ProgressSource::Template(template));
        }
        if let Some(time) = &raw.time {
            return Ok(ProgressSource::Time(Self::time_source(time)));
        }
        Err(ConfigError::NoProgressSource)
    }

    /// A countdown pair, even a half one, shadows any interval pair
    fn time_source(time: &RawTimeConfig) -> TimeSource {
        let initial = present(&time.initial);
        let remaining = present(&time.remaining);
        if initial.is_some() || remaining.is_some() {
            return match (initial, remaining) {
                (Some(initial), Some(remaining)) => TimeSource::Countdown {
                    initial: initial.to_string(),
                    remaining: remaining.to_string(),
                },
                _ => TimeSource::Incomplete(TimeIssue::CountdownPair),
            };
        }

        let start = present(&time.start);
        let end = present(&time.end);
        if start.is_some() || end.is_some() {
            return match (start, end) {
                (Some(start), Some(end)) => TimeSource::Interval {
                    start: start.to_string(),
                    end: end.to_string(),
                },
                _ => TimeSource::Incomplete(TimeIssue::IntervalPair),
            };
        }

        TimeSource::Incomplete(TimeIssue::NoMode)
    }

    fn label_source(value: Option<&RawValueSource>) -> LabelSource {
        let Some(value) = value else {
            return LabelSource::Progress;
        };

        if let Some(id) = present(&value.attribute).or_else(|| present(&value.entity)) {
            return LabelSource::Read(id.to_string());
        }

        match value.template.as_ref().and_then(Scalar::from_json) {
            Some(template) => LabelSource::Template(template),
            None => LabelSource::Malformed,
        }
    }

    fn value_format(format: Option<&FormatConfig>) -> ValueFormat {
        let Some(format) = format else {
            return ValueFormat::default();
        };

        ValueFormat {
            prefix: format.prefix.clone().unwrap_or_default(),
            suffix: format.suffix.clone().unwrap_or_else(|| "%".to_string()),
            decimals: format
                .decimals
                .as_ref()
                .and_then(serde_json::Value::as_f64)
                .filter(|d| d.is_finite())
                .map(|d| d.trunc().clamp(0.0, 100.0) as usize),
        }
    }

    /// Whether the host should anchor the bar to its card edge
    pub fn anchoring_requested(&self) -> bool {
        self.style.position.is_some()
    }
}

/// A configuration plus the entity state to resolve it against
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Scenario {
    pub feature: Option<RawFeatureConfig>,
    /// Snapshot of the entity the feature is bound to
    pub entity: EntitySnapshot,
    /// Every known entity, keyed by id
    pub states: Registry,
}

impl Scenario {
    /// Load a scenario from TOML, or JSON when the extension says so
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;

        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));

        let scenario = if is_json {
            serde_json::from_str(&contents).map_err(|source| ConfigError::ParseJson {
                path: path.to_path_buf(),
                source,
            })?
        } else {
            toml::from_str(&contents).map_err(|source| ConfigError::ParseToml {
                path: path.to_path_buf(),
                source,
            })?
        };

        tracing::debug!("Loaded scenario from {:?}", path);
        Ok(scenario)
    }

    pub fn feature_config(&self) -> Result<FeatureConfig, ConfigError> {
        FeatureConfig::parse(self.feature.as_ref())
    }
}
