//! Model field descriptors
//!
//! The metadata the renderer consumes: one [`FieldDescriptor`] per model
//! field, each classified by a closed [`FieldKind`] and optionally carrying
//! a list of [`Choice`]s.

use std::fmt;

use serde::de::{self, Deserializer, SeqAccess, Visitor};
use serde::Deserialize;

/// Name of the primary-key field that is never rendered
pub const IDENTITY_FIELD: &str = "id";

/// Field classification
///
/// Accepts both short tags (`text`, `long_text`, ...) and the Django field
/// class names. Anything unrecognised becomes [`FieldKind::Other`] and renders
/// as a plain text input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Single-line text (default)
    #[default]
    #[serde(alias = "CharField")]
    Text,
    /// Email address
    #[serde(alias = "EmailField")]
    Email,
    /// URL
    #[serde(alias = "URLField")]
    Url,
    /// Boolean flag
    #[serde(alias = "BooleanField")]
    Boolean,
    /// Multi-line text
    #[serde(alias = "TextField")]
    LongText,
    /// Field whose values come from a choice list
    Choice,
    /// Any other field type
    #[serde(other)]
    Other,
}

/// HTML input types produced by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputType {
    /// Text input (default)
    #[default]
    Text,
    /// Email input
    Email,
    /// URL input
    Url,
    /// Checkbox
    Checkbox,
}

impl InputType {
    /// Get the HTML type attribute value
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Url => "url",
            Self::Checkbox => "checkbox",
        }
    }

    /// Whether the Bootstrap `form-control` class applies to this input
    #[must_use]
    pub const fn takes_control_class(&self) -> bool {
        !matches!(self, Self::Checkbox)
    }
}

impl fmt::Display for InputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FieldKind {
    /// Input type used when this kind renders as an `<input>`
    #[must_use]
    pub const fn input_type(&self) -> InputType {
        match self {
            Self::Email => InputType::Email,
            Self::Url => InputType::Url,
            Self::Boolean => InputType::Checkbox,
            Self::Text | Self::LongText | Self::Choice | Self::Other => InputType::Text,
        }
    }
}

/// The form control a field renders as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// `<select>` with options
    Select,
    /// `<textarea>`
    Textarea,
    /// `<input>` of the given type
    Input(InputType),
}

/// A single selectable (value, label) pair
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "(ChoiceValue, ChoiceValue)")]
pub struct ChoiceOption {
    /// Submitted value
    pub value: String,
    /// Display text
    pub label: String,
}

impl ChoiceOption {
    /// Create a new option
    #[must_use]
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

impl From<(ChoiceValue, ChoiceValue)> for ChoiceOption {
    fn from((value, label): (ChoiceValue, ChoiceValue)) -> Self {
        Self::new(value.0, label.0)
    }
}

/// One entry of a field's choice list
///
/// Written as `[value, label]`, or `[group_label, [[value, label], ...]]` for
/// an option group. Groups never nest.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawChoice")]
pub enum Choice {
    /// Plain option
    Option(ChoiceOption),
    /// Labelled group of options
    Group {
        /// Group label
        label: String,
        /// Options in the group
        options: Vec<ChoiceOption>,
    },
}

impl Choice {
    /// Create a plain option entry
    #[must_use]
    pub fn option(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self::Option(ChoiceOption::new(value, label))
    }

    /// Create a group entry
    #[must_use]
    pub fn group(label: impl Into<String>, options: Vec<ChoiceOption>) -> Self {
        Self::Group {
            label: label.into(),
            options,
        }
    }

    /// Number of `<option>` elements this entry renders
    #[must_use]
    pub fn option_count(&self) -> usize {
        match self {
            Self::Option(_) => 1,
            Self::Group { options, .. } => options.len(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawChoice {
    // Tried first: a list in second position is a group
    Group(ChoiceValue, Vec<ChoiceOption>),
    Option(ChoiceValue, ChoiceValue),
}

impl From<RawChoice> for Choice {
    fn from(raw: RawChoice) -> Self {
        match raw {
            RawChoice::Option(value, label) => Self::option(value.0, label.0),
            RawChoice::Group(label, options) => Self::group(label.0, options),
        }
    }
}

/// Choice value held as its string form
///
/// Strings, numbers and booleans are taken as written. A list (deeper nesting
/// than one optgroup level) is flattened to `[a, b]` text rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceValue(String);

impl<'de> Deserialize<'de> for ChoiceValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ScalarVisitor;

        impl<'v> Visitor<'v> for ScalarVisitor {
            type Value = ChoiceValue;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a string, number, boolean or list")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Ok(ChoiceValue(v.to_owned()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
                Ok(ChoiceValue(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                Ok(ChoiceValue(v.to_string()))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                Ok(ChoiceValue(v.to_string()))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
                Ok(ChoiceValue(v.to_string()))
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
                Ok(ChoiceValue(v.to_string()))
            }

            fn visit_seq<A: SeqAccess<'v>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let mut parts = Vec::new();
                while let Some(part) = seq.next_element::<ChoiceValue>()? {
                    parts.push(part.0);
                }
                Ok(ChoiceValue(format!("[{}]", parts.join(", "))))
            }
        }

        deserializer.deserialize_any(ScalarVisitor)
    }
}

/// Metadata for one model field
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FieldDescriptor {
    /// Field name, used as the form attribute and to derive the label
    pub name: String,
    /// Field classification
    #[serde(rename = "type", default)]
    pub kind: FieldKind,
    /// Choice list; empty when the field has none
    #[serde(default)]
    pub choices: Vec<Choice>,
}

impl FieldDescriptor {
    /// Create a field without choices
    #[must_use]
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            choices: Vec::new(),
        }
    }

    /// Attach a choice list
    #[must_use]
    pub fn with_choices(mut self, choices: Vec<Choice>) -> Self {
        self.choices = choices;
        self
    }

    /// Check if this field carries a choice list
    #[must_use]
    pub fn has_choices(&self) -> bool {
        !self.choices.is_empty()
    }

    /// Check if this is the primary-key field excluded from forms
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.name == IDENTITY_FIELD
    }

    /// Pick the control to render
    ///
    /// A choice list wins over the kind; then long text; everything else is an
    /// `<input>`. A `Choice` field with no choices still renders a `<select>`.
    #[must_use]
    pub fn control(&self) -> Control {
        if self.has_choices() || self.kind == FieldKind::Choice {
            Control::Select
        } else if self.kind == FieldKind::LongText {
            Control::Textarea
        } else {
            Control::Input(self.kind.input_type())
        }
    }
}
