use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("intensity must be between {min} and {max} in steps of {step}, got {value}")]
    Intensity { value: u8, min: u8, max: u8, step: u8 },

    #[error("opacity level must be between {min} and {max}, got {value}")]
    OpacityLevel { value: u8, min: u8, max: u8 },

    #[error("fixation frequency must be between {min} and {max}, got {value}")]
    FixationFrequency { value: u8, min: u8, max: u8 },

    #[error("unknown fixation control '{0}', expected bold, highlight or off")]
    FixationControl(String),
}

/// Percentage of each word's leading characters to emphasize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Intensity(u8);

impl Intensity {
    pub const MIN: u8 = 25;
    pub const MAX: u8 = 75;
    pub const STEP: u8 = 5;
    /// Extra percentage applied to heading lines.
    pub const HEADING_BOOST: u8 = 10;

    pub fn new(value: u8) -> Result<Self, SettingsError> {
        if !(Self::MIN..=Self::MAX).contains(&value) || value % Self::STEP != 0 {
            return Err(SettingsError::Intensity {
                value,
                min: Self::MIN,
                max: Self::MAX,
                step: Self::STEP,
            });
        }
        Ok(Self(value))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Every supported intensity in ascending order.
    pub fn all() -> impl Iterator<Item = Intensity> {
        (Self::MIN..=Self::MAX).step_by(Self::STEP as usize).map(Self)
    }
}

impl Default for Intensity {
    fn default() -> Self {
        Self(50)
    }
}

impl TryFrom<u8> for Intensity {
    type Error = SettingsError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Intensity> for u8 {
    fn from(value: Intensity) -> Self {
        value.0
    }
}

/// Opacity of emphasis runs, as a percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct OpacityLevel(u8);

impl OpacityLevel {
    pub const MIN: u8 = 10;
    pub const MAX: u8 = 100;

    pub fn new(value: u8) -> Result<Self, SettingsError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(SettingsError::OpacityLevel {
                value,
                min: Self::MIN,
                max: Self::MAX,
            });
        }
        Ok(Self(value))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// The level as a CSS opacity between 0.1 and 1.
    pub fn as_fraction(self) -> f32 {
        f32::from(self.0) / 100.0
    }
}

impl Default for OpacityLevel {
    fn default() -> Self {
        Self(80)
    }
}

impl TryFrom<u8> for OpacityLevel {
    type Error = SettingsError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<OpacityLevel> for u8 {
    fn from(value: OpacityLevel) -> Self {
        value.0
    }
}

/// Emphasis is applied to every Nth word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct FixationFrequency(u8);

impl FixationFrequency {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 3;

    pub fn new(value: u8) -> Result<Self, SettingsError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(SettingsError::FixationFrequency {
                value,
                min: Self::MIN,
                max: Self::MAX,
            });
        }
        Ok(Self(value))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Whether the word at `index` within its line gets emphasis.
    pub fn applies_to(self, index: usize) -> bool {
        index % usize::from(self.0) == 0
    }
}

impl Default for FixationFrequency {
    fn default() -> Self {
        Self(1)
    }
}

impl TryFrom<u8> for FixationFrequency {
    type Error = SettingsError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<FixationFrequency> for u8 {
    fn from(value: FixationFrequency) -> Self {
        value.0
    }
}

/// How the leading part of a word is emphasized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FixationControl {
    #[default]
    Bold,
    Highlight,
    Off,
}

impl std::str::FromStr for FixationControl {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bold" => Ok(Self::Bold),
            "highlight" => Ok(Self::Highlight),
            "off" => Ok(Self::Off),
            _ => Err(SettingsError::FixationControl(s.to_string())),
        }
    }
}

/// The settings the formatter reads. Values are validated on construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatSettings {
    pub fixation_control: FixationControl,
    pub opacity_level: OpacityLevel,
    pub fixation_frequency: FixationFrequency,
}

impl FormatSettings {
    pub fn new(
        fixation_control: FixationControl,
        opacity_level: OpacityLevel,
        fixation_frequency: FixationFrequency,
    ) -> Self {
        Self {
            fixation_control,
            opacity_level,
            fixation_frequency,
        }
    }

    /// Builds settings from unchecked numbers, such as command-line flags.
    pub fn from_raw(
        fixation_control: FixationControl,
        opacity_level: u8,
        fixation_frequency: u8,
    ) -> Result<Self, SettingsError> {
        Ok(Self::new(
            fixation_control,
            OpacityLevel::new(opacity_level)?,
            FixationFrequency::new(fixation_frequency)?,
        ))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Sepia,
    Slate,
    Dark,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnWidth {
    Narrow,
    #[default]
    Medium,
    Wide,
    Full,
}

/// Full reading preferences.
///
/// Only [`FormatSettings`] affects the formatter. The remaining fields are
/// presentation options consumed by [`super::page::render_page`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadingSettings {
    #[serde(flatten)]
    pub format: FormatSettings,
    pub saccade_control: bool,
    pub text_size: u8,
    pub font_family: String,
    pub line_spacing: f32,
    pub letter_spacing: f32,
    pub theme: Theme,
    pub column_width: ColumnWidth,
}

impl Default for ReadingSettings {
    fn default() -> Self {
        Self {
            format: FormatSettings::default(),
            saccade_control: true,
            text_size: 16,
            font_family: "Inter, sans-serif".to_string(),
            line_spacing: 1.5,
            letter_spacing: 0.0,
            theme: Theme::default(),
            column_width: ColumnWidth::default(),
        }
    }
}
