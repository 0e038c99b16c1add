//! Live-editable clock fields for a debug inspector.
//!
//! The renderer knows nothing about inspectors. A host that wants one walks
//! [`FIELDS`], reads values with the getters and writes them back with the
//! setters; the next frame picks the change up.

use crate::color::Color;
use crate::config::{ClockConfig, Hand};
use crate::error::TweakError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TweakKind {
    Color,
    Range { min: f64, max: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TweakValue {
    Color(Color),
    Number(f64),
}

/// One entry of the reflection table.
#[derive(Debug, Clone, Copy)]
pub struct TweakField {
    pub name: &'static str,
    pub kind: TweakKind,
    get: fn(&ClockConfig) -> TweakValue,
    set: fn(&mut ClockConfig, f64, Option<Color>),
}

impl TweakField {
    const fn color(
        name: &'static str,
        get: fn(&ClockConfig) -> TweakValue,
        set: fn(&mut ClockConfig, f64, Option<Color>),
    ) -> Self {
        Self {
            name,
            kind: TweakKind::Color,
            get,
            set,
        }
    }

    const fn range(
        name: &'static str,
        min: f64,
        max: f64,
        get: fn(&ClockConfig) -> TweakValue,
        set: fn(&mut ClockConfig, f64, Option<Color>),
    ) -> Self {
        Self {
            name,
            kind: TweakKind::Range { min, max },
            get,
            set,
        }
    }

    pub fn get(&self, config: &ClockConfig) -> TweakValue {
        (self.get)(config)
    }

    /// Writes `value`, clamping numbers into the field's range.
    ///
    /// # Errors
    /// [`TweakError::KindMismatch`] if `value` is not of the field's kind.
    pub fn set(&self, config: &mut ClockConfig, value: TweakValue) -> Result<(), TweakError> {
        match (self.kind, value) {
            (TweakKind::Color, TweakValue::Color(color)) => (self.set)(config, 0.0, Some(color)),
            (TweakKind::Range { min, max }, TweakValue::Number(number)) => {
                (self.set)(config, number.clamp(min, max), None)
            }
            (TweakKind::Color, TweakValue::Number(_)) => {
                return Err(TweakError::KindMismatch {
                    field: self.name,
                    expected: "color",
                })
            }
            (TweakKind::Range { .. }, TweakValue::Color(_)) => {
                return Err(TweakError::KindMismatch {
                    field: self.name,
                    expected: "number",
                })
            }
        }
        Ok(())
    }
}

macro_rules! hand_color_field {
    ($name:literal, $hand:expr) => {
        TweakField::color(
            $name,
            |config| TweakValue::Color(*config.hand_colors.get($hand)),
            |config, _, color| {
                if let Some(color) = color {
                    *config.hand_colors.get_mut($hand) = color;
                }
            },
        )
    };
}

macro_rules! color_field {
    ($name:literal, $field:ident) => {
        TweakField::color(
            $name,
            |config| TweakValue::Color(config.$field),
            |config, _, color| {
                if let Some(color) = color {
                    config.$field = color;
                }
            },
        )
    };
}

pub static FIELDS: [TweakField; 9] = [
    hand_color_field!("Hour Hand", Hand::Hour),
    hand_color_field!("Minute Hand", Hand::Minute),
    hand_color_field!("Second Hand", Hand::Second),
    hand_color_field!("Millisecond Hand", Hand::Millisecond),
    color_field!("Dial", dial_color),
    color_field!("Dial Background", dial_background),
    color_field!("Trail", trail_color),
    TweakField::range(
        "Trail Size",
        1.0,
        20.0,
        |config| TweakValue::Number(config.trail_size),
        |config, value, _| config.trail_size = value,
    ),
    TweakField::range(
        "Trail Length",
        0.0,
        360.0,
        |config| TweakValue::Number(f64::from(config.trail_length)),
        |config, value, _| config.trail_length = value.round() as u32,
    ),
];

/// Looks a field up by its display name.
///
/// # Errors
/// [`TweakError::UnknownField`] if no field has that name.
pub fn field(name: &str) -> Result<&'static TweakField, TweakError> {
    FIELDS
        .iter()
        .find(|field| field.name == name)
        .ok_or_else(|| TweakError::UnknownField(name.to_string()))
}
