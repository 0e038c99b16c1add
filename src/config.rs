use bon::Builder;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::color::Color;
use crate::error::ConfigError;

/// The four clock hands, in the order they are painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hand {
    Millisecond,
    Second,
    Minute,
    Hour,
}

impl Hand {
    pub const DRAW_ORDER: [Hand; 4] = [Hand::Millisecond, Hand::Second, Hand::Minute, Hand::Hour];
}

/// One value per hand. `HandSet<Option<T>>` is the partial form used for overrides.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HandSet<T> {
    pub hour: T,
    pub minute: T,
    pub second: T,
    pub millisecond: T,
}

impl<T> HandSet<T> {
    pub fn get(&self, hand: Hand) -> &T {
        match hand {
            Hand::Hour => &self.hour,
            Hand::Minute => &self.minute,
            Hand::Second => &self.second,
            Hand::Millisecond => &self.millisecond,
        }
    }

    pub fn get_mut(&mut self, hand: Hand) -> &mut T {
        match hand {
            Hand::Hour => &mut self.hour,
            Hand::Minute => &mut self.minute,
            Hand::Second => &mut self.second,
            Hand::Millisecond => &mut self.millisecond,
        }
    }

    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> HandSet<U> {
        HandSet {
            hour: f(&self.hour),
            minute: f(&self.minute),
            second: f(&self.second),
            millisecond: f(&self.millisecond),
        }
    }
}

impl<T: Copy> HandSet<T> {
    /// Same value for every hand.
    pub const fn splat(value: T) -> Self {
        Self {
            hour: value,
            minute: value,
            second: value,
            millisecond: value,
        }
    }

    /// Key-by-key merge: a hand missing from `overrides` keeps its value from `self`.
    pub fn merged_with(&self, overrides: &HandSet<Option<T>>) -> Self {
        Self {
            hour: overrides.hour.unwrap_or(self.hour),
            minute: overrides.minute.unwrap_or(self.minute),
            second: overrides.second.unwrap_or(self.second),
            millisecond: overrides.millisecond.unwrap_or(self.millisecond),
        }
    }
}

/// Fully resolved clock configuration. Every field is present.
#[derive(Debug, Clone, PartialEq)]
pub struct ClockConfig {
    pub timezone_offset_minutes: i32,
    pub dial_color: Color,
    pub dial_background: Color,
    pub trail_color: Color,
    pub hand_colors: HandSet<Color>,
    /// Reference widths at scale factor 1.
    pub hand_widths: HandSet<f64>,
    pub trail_size: f64,
    pub trail_length: u32,
    pub center_dot_size: f64,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self::defaults()
    }
}

impl ClockConfig {
    /// The built-in defaults table.
    pub fn defaults() -> Self {
        Self {
            timezone_offset_minutes: 0,
            dial_color: Color::new(0x03, 0x03, 0x03),
            dial_background: Color::new(0xf0, 0xf0, 0xf0),
            trail_color: Color::new(0x03, 0x03, 0x03),
            hand_colors: HandSet {
                hour: Color::new(0xa4, 0x03, 0x1f),
                minute: Color::new(0x00, 0xf2, 0x89),
                second: Color::new(0xdb, 0x90, 0x65),
                millisecond: Color::new(0x00, 0x00, 0xff),
            },
            hand_widths: HandSet {
                hour: 8.0,
                minute: 6.0,
                second: 4.0,
                millisecond: 2.0,
            },
            trail_size: 3.0,
            trail_length: 180,
            center_dot_size: 6.0,
        }
    }

    /// Resolves `overrides` against `defaults`.
    ///
    /// Scalars present in `overrides` replace the default; hand sets merge
    /// per hand. The defaults table is validated first and a malformed entry
    /// fails the whole resolution.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidDefault`] when `defaults` holds a
    /// non-finite or non-positive size.
    pub fn resolve(defaults: &ClockConfig, overrides: &PartialClockConfig) -> Result<Self, ConfigError> {
        defaults.validate_as_defaults()?;

        let resolved = Self {
            timezone_offset_minutes: defaults.timezone_offset_minutes,
            dial_color: overrides.dial_color.unwrap_or(defaults.dial_color),
            dial_background: overrides.dial_background.unwrap_or(defaults.dial_background),
            trail_color: overrides.trail_color.unwrap_or(defaults.trail_color),
            hand_colors: defaults.hand_colors.merged_with(&overrides.hand_colors),
            hand_widths: defaults.hand_widths.merged_with(&overrides.hand_widths),
            trail_size: overrides.trail_size.unwrap_or(defaults.trail_size),
            trail_length: overrides.trail_length.unwrap_or(defaults.trail_length),
            center_dot_size: overrides.center_dot_size.unwrap_or(defaults.center_dot_size),
        };
        debug!(?overrides, "resolved clock configuration");
        Ok(resolved)
    }

    pub fn with_timezone_offset(mut self, offset_minutes: i32) -> Self {
        self.timezone_offset_minutes = offset_minutes;
        self
    }

    fn validate_as_defaults(&self) -> Result<(), ConfigError> {
        let positive = |field: &'static str, value: f64| {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(ConfigError::InvalidDefault {
                    field,
                    reason: format!("expected a positive finite number, got {value}"),
                })
            }
        };

        positive("trail_size", self.trail_size)?;
        positive("center_dot_size", self.center_dot_size)?;
        positive("hand_widths.hour", self.hand_widths.hour)?;
        positive("hand_widths.minute", self.hand_widths.minute)?;
        positive("hand_widths.second", self.hand_widths.second)?;
        positive("hand_widths.millisecond", self.hand_widths.millisecond)
    }
}

/// A user-supplied partial configuration. Absent fields fall back to the defaults.
#[derive(Debug, Clone, Default, PartialEq, Builder, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialClockConfig {
    pub dial_color: Option<Color>,
    pub dial_background: Option<Color>,
    pub trail_color: Option<Color>,
    #[builder(default)]
    pub hand_colors: HandSet<Option<Color>>,
    #[builder(default)]
    pub hand_widths: HandSet<Option<f64>>,
    pub trail_size: Option<f64>,
    pub trail_length: Option<u32>,
    pub center_dot_size: Option<f64>,
}

impl PartialClockConfig {
    /// Layers `self` over `defaults` to produce a new defaults table.
    ///
    /// # Errors
    /// Same as [`ClockConfig::resolve`].
    pub fn apply_to(&self, defaults: &ClockConfig) -> Result<ClockConfig, ConfigError> {
        ClockConfig::resolve(defaults, self)
    }
}
