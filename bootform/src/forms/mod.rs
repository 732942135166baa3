//! Form generation from model field metadata
//!
//! Turns an ordered list of [`FieldDescriptor`]s into a Bootstrap horizontal
//! form. Each field picks exactly one control:
//!
//! | Field                     | Control                         |
//! |---------------------------|---------------------------------|
//! | has choices               | `<select>` (with `<optgroup>`s) |
//! | [`FieldKind::LongText`]   | `<textarea>`                    |
//! | [`FieldKind::Email`]      | `<input type="email">`          |
//! | [`FieldKind::Url`]        | `<input type="url">`            |
//! | [`FieldKind::Boolean`]    | `<input type="checkbox">`       |
//! | anything else             | `<input type="text">`           |
//!
//! # Example
//!
//! ```rust
//! use bootform::forms::{FieldDescriptor, FieldKind, Flavor, FormRenderer};
//!
//! let fields = vec![
//!     FieldDescriptor::new("id", FieldKind::Other),
//!     FieldDescriptor::new("title", FieldKind::Text),
//! ];
//!
//! let html = FormRenderer::render_form("Post", &fields, Flavor::Default);
//! assert!(html.contains(r#"id="Post-title""#));
//! assert!(!html.contains("Post-id"));
//! ```

pub mod field;
pub mod flavor;
pub mod render;

pub use field::{
    Choice, ChoiceOption, ChoiceValue, Control, FieldDescriptor, FieldKind, InputType,
    IDENTITY_FIELD,
};
pub use flavor::Flavor;
pub use render::{field_id, label_for, FormRenderer};
