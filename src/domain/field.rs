// ============================================================
// Layer 3 — Input Field Descriptors
// ============================================================
// A form is an ordered list of FieldDescriptors. Each one says
// what to ask (label + help text), under which key the answer
// is stored, and which widget collects it.
//
// Widget kinds:
//   Text   — free text, passed on as-is
//   Number — bounded number, optionally whole numbers only
//   Slider — bounded number on a fixed step grid from its minimum
//   Select — one choice out of a fixed option table
//
// The widget's native domain (bounds, integer-ness, option
// membership) is the only validation the form performs.

use std::collections::HashMap;
use std::fmt;

use anyhow::{bail, Result};

/// One entry of a categorical lookup table: the label the user
/// picks and the integer code the model was trained on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Choice {
    pub label: &'static str,
    pub code:  u8,
}

impl Choice {
    pub const fn new(label: &'static str, code: u8) -> Self {
        Self { label, code }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Widget {
    Text   { default: &'static str },
    Number { min: f64, max: f64, integer: bool },
    Slider { min: f64, max: f64, step: f64 },
    Select { options: &'static [Choice] },
}

/// A raw value as produced by a widget, before feature assembly.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Number(f64),
    Choice(String),
    Text(String),
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Number(v) => write!(f, "{v}"),
            RawValue::Choice(s) | RawValue::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldDescriptor {
    /// Key the value is stored under (also the model column name)
    pub key:    &'static str,
    /// Label shown next to the widget
    pub label:  &'static str,
    /// Tooltip text
    pub help:   &'static str,
    pub widget: Widget,
}

impl FieldDescriptor {
    pub const fn new(
        key:    &'static str,
        label:  &'static str,
        help:   &'static str,
        widget: Widget,
    ) -> Self {
        Self { key, label, help, widget }
    }

    /// The value a freshly rendered widget holds before the user touches it.
    pub fn default_value(&self) -> RawValue {
        self.widget.default_value()
    }

    /// Parse and domain-check a raw string for this field.
    pub fn parse(&self, raw: &str) -> Result<RawValue> {
        self.widget.parse(raw)
    }
}

impl Widget {
    /// Short name of the widget kind, used when listing a form.
    pub fn kind(&self) -> &'static str {
        match self {
            Widget::Text { .. }   => "text",
            Widget::Number { .. } => "number",
            Widget::Slider { .. } => "slider",
            Widget::Select { .. } => "select",
        }
    }

    /// Number and slider widgets start at their minimum,
    /// select widgets at their first option.
    pub fn default_value(&self) -> RawValue {
        match self {
            Widget::Text { default } => RawValue::Text(default.to_string()),
            Widget::Number { min, .. } | Widget::Slider { min, .. } => RawValue::Number(*min),
            Widget::Select { options } => RawValue::Choice(
                options.first().map(|c| c.label).unwrap_or_default().to_string(),
            ),
        }
    }

    /// Human-readable description of the accepted domain.
    pub fn domain(&self) -> String {
        match self {
            Widget::Text { .. } => "any text".to_string(),
            Widget::Number { min, max, integer: true } => {
                format!("whole number {min}..={max}")
            }
            Widget::Number { min, max, integer: false } => format!("number {min}..={max}"),
            Widget::Slider { min, max, step } => format!("{min}..={max} (step {step})"),
            Widget::Select { options } => options
                .iter()
                .map(|c| c.label)
                .collect::<Vec<_>>()
                .join(" | "),
        }
    }

    /// Check a raw string against the widget's native domain.
    pub fn parse(&self, raw: &str) -> Result<RawValue> {
        let raw = raw.trim();
        match self {
            Widget::Text { .. } => Ok(RawValue::Text(raw.to_string())),
            Widget::Number { min, max, integer } => {
                let value = parse_number(raw)?;
                if *integer && value.fract() != 0.0 {
                    bail!("'{raw}' must be a whole number");
                }
                check_bounds(value, *min, *max)?;
                Ok(RawValue::Number(value))
            }
            Widget::Slider { min, max, step } => {
                let value = parse_number(raw)?;
                check_bounds(value, *min, *max)?;
                check_step(value, *min, *max, *step)?;
                Ok(RawValue::Number(value))
            }
            Widget::Select { options } => options
                .iter()
                .find(|c| c.label.eq_ignore_ascii_case(raw))
                .map(|c| RawValue::Choice(c.label.to_string()))
                .ok_or_else(|| {
                    anyhow::anyhow!("'{raw}' must be one of: {}", self.domain())
                }),
        }
    }
}

fn parse_number(raw: &str) -> Result<f64> {
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => bail!("'{raw}' is not a number"),
    }
}

fn check_bounds(value: f64, min: f64, max: f64) -> Result<()> {
    if value < min || value > max {
        bail!("{value} is outside the range {min}..={max}");
    }
    Ok(())
}

/// A slider reaches `min + k * step`, plus `max` itself.
fn check_step(value: f64, min: f64, max: f64, step: f64) -> Result<()> {
    const EPS: f64 = 1e-9;
    if step <= 0.0 || (value - max).abs() < EPS {
        return Ok(());
    }
    let steps = (value - min) / step;
    if (steps - steps.round()).abs() > EPS * steps.abs().max(1.0) {
        bail!("{value} is not on the slider's {step} steps from {min}");
    }
    Ok(())
}

/// Raw values collected by one form, keyed by field key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormInput {
    values: HashMap<String, RawValue>,
}

impl FormInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: RawValue) {
        self.values.insert(key.into(), value);
    }

    /// Builder-style insert, handy for literal inputs.
    pub fn with(mut self, key: impl Into<String>, value: RawValue) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&RawValue> {
        self.values.get(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
