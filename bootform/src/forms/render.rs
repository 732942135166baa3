//! Form rendering to HTML
//!
//! Renders model fields to a Bootstrap horizontal form. Attribute names come
//! from the [`Flavor`], so the React output is produced directly rather than
//! by rewriting finished markup.

use std::fmt::Write;

use tracing::{debug, trace};

use super::field::{Choice, ChoiceOption, Control, FieldDescriptor, FieldKind, InputType};
use super::flavor::Flavor;

const CONTROL_INDENT: &str = "      ";
const OPTION_INDENT: &str = "        ";
const CONTROL_CLASS: &str = "form-control";
const CONTROL_WRAPPER_CLASS: &str = "col-sm-10";

/// Element id for a field: `{model}-{field}`
#[must_use]
pub fn field_id(model: &str, field: &str) -> String {
    format!("{model}-{field}")
}

/// Human-readable label for a field name
///
/// Underscores become spaces, the first character is upper-cased and the
/// rest lower-cased.
///
/// ```
/// assert_eq!(bootform::forms::label_for("first_name"), "First name");
/// assert_eq!(bootform::forms::label_for("URL_slug"), "Url slug");
/// ```
#[must_use]
pub fn label_for(name: &str) -> String {
    let spaced = name.replace('_', " ");
    let mut chars = spaced.chars();
    chars.next().map_or_else(String::new, |first| {
        first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect()
    })
}

/// Renders model fields to HTML
pub struct FormRenderer;

impl FormRenderer {
    /// Render a complete form for `model`
    ///
    /// The identity field (`id`) is skipped. A submit button closes the form.
    #[must_use]
    pub fn render_form(model: &str, fields: &[FieldDescriptor], flavor: Flavor) -> String {
        let mut html = String::with_capacity(512 + fields.len() * 256);

        html.push_str("<form");
        Self::write_attr(&mut html, "role", "form");
        Self::write_attr(&mut html, flavor.class_attr(), "form-horizontal");
        html.push_str(">\n");

        let mut rendered = 0_usize;
        for field in fields {
            if field.is_identity() {
                trace!(model, field = %field.name, "Skipping identity field");
                continue;
            }
            html.push_str(&Self::render_field(model, field, flavor));
            rendered += 1;
        }

        // Submit button
        html.push_str("  <div");
        Self::write_attr(&mut html, flavor.class_attr(), "form-group");
        html.push_str(">\n    <div");
        Self::write_attr(&mut html, flavor.class_attr(), "col-sm-offset-2 col-sm-10");
        html.push_str(">\n      <button");
        Self::write_attr(&mut html, flavor.class_attr(), "btn btn-primary");
        html.push_str("><i");
        Self::write_attr(&mut html, flavor.class_attr(), "fa fa-save");
        html.push_str("></i> Save</button>\n    </div>\n  </div>\n</form>\n");

        debug!(model, fields = rendered, ?flavor, "Rendered form");
        html
    }

    /// Render one form-group (label, control and, for React, an error slot)
    #[must_use]
    pub fn render_field(model: &str, field: &FieldDescriptor, flavor: Flavor) -> String {
        let id = field_id(model, &field.name);
        let mut html = String::with_capacity(256);

        html.push_str("  <div");
        Self::write_attr(&mut html, flavor.class_attr(), "form-group");
        html.push_str(">\n    <label");
        Self::write_attr(&mut html, flavor.for_attr(), &id);
        Self::write_attr(&mut html, flavor.class_attr(), "col-sm-2 control-label");
        html.push('>');
        html.push_str(&Self::escape_text(&label_for(&field.name), flavor));
        html.push_str("</label>\n    <div");
        if flavor.is_react() {
            Self::write_expr(
                &mut html,
                flavor.class_attr(),
                &format!("\"{CONTROL_WRAPPER_CLASS} \" + errorClasses.{}", field.name),
            );
        } else {
            Self::write_attr(&mut html, flavor.class_attr(), CONTROL_WRAPPER_CLASS);
        }
        html.push_str(">\n");

        let control_html = match field.control() {
            Control::Select => Self::render_select(field, &id, flavor),
            Control::Textarea => Self::render_textarea(field, &id, flavor),
            Control::Input(input_type) => Self::render_input(field, &id, input_type, flavor),
        };
        html.push_str(CONTROL_INDENT);
        html.push_str(&control_html);

        if flavor.is_react() {
            let _ = write!(html, "\n{CONTROL_INDENT}{{errors.{}}}", field.name);
        }

        html.push_str("\n    </div>\n  </div>\n");
        trace!(model, field = %field.name, kind = ?field.kind, "Rendered field");
        html
    }

    fn render_input(
        field: &FieldDescriptor,
        id: &str,
        input_type: InputType,
        flavor: Flavor,
    ) -> String {
        let mut html = String::with_capacity(128);

        html.push_str("<input");
        Self::write_attr(&mut html, "type", input_type.as_str());
        Self::write_attr(&mut html, flavor.binding_attr(), &field.name);
        if input_type.takes_control_class() {
            Self::write_attr(&mut html, flavor.class_attr(), CONTROL_CLASS);
        }
        Self::write_attr(&mut html, "id", id);
        Self::write_default_binding(&mut html, field, flavor);
        html.push_str("/>");
        html
    }

    fn render_textarea(field: &FieldDescriptor, id: &str, flavor: Flavor) -> String {
        let mut html = String::with_capacity(128);

        html.push_str("<textarea");
        Self::write_attr(&mut html, flavor.binding_attr(), &field.name);
        Self::write_attr(&mut html, flavor.class_attr(), CONTROL_CLASS);
        Self::write_attr(&mut html, "id", id);
        Self::write_default_binding(&mut html, field, flavor);
        html.push_str("></textarea>");
        html
    }

    fn render_select(field: &FieldDescriptor, id: &str, flavor: Flavor) -> String {
        let mut html = String::with_capacity(256);

        html.push_str("<select");
        Self::write_attr(&mut html, flavor.binding_attr(), &field.name);
        Self::write_attr(&mut html, flavor.class_attr(), CONTROL_CLASS);
        Self::write_attr(&mut html, "id", id);
        Self::write_default_binding(&mut html, field, flavor);
        html.push('>');

        for choice in &field.choices {
            match choice {
                Choice::Option(opt) => Self::render_option(&mut html, opt, flavor),
                Choice::Group { label, options } => {
                    html.push('\n');
                    html.push_str(OPTION_INDENT);
                    html.push_str("<optgroup");
                    Self::write_attr(&mut html, "label", label);
                    html.push('>');
                    for opt in options {
                        Self::render_option(&mut html, opt, flavor);
                    }
                    let _ = write!(html, "\n{OPTION_INDENT}</optgroup>");
                }
            }
        }

        let _ = write!(html, "\n{CONTROL_INDENT}</select>");
        html
    }

    fn render_option(html: &mut String, opt: &ChoiceOption, flavor: Flavor) {
        html.push('\n');
        html.push_str(OPTION_INDENT);
        html.push_str("<option");
        Self::write_attr(html, "value", &opt.value);
        html.push('>');
        html.push_str(&Self::escape_text(&opt.label, flavor));
        html.push_str("</option>");
    }

    /// React only: seed the control from `this.state.data`
    fn write_default_binding(html: &mut String, field: &FieldDescriptor, flavor: Flavor) {
        if !flavor.is_react() {
            return;
        }
        let attr = if field.kind == FieldKind::Boolean {
            "defaultChecked"
        } else {
            "defaultValue"
        };
        Self::write_expr(html, attr, &format!("this.state.data.{}", field.name));
    }

    fn write_attr(html: &mut String, name: &str, value: &str) {
        html.push(' ');
        html.push_str(name);
        html.push_str("=\"");
        html.push_str(&Self::escape_attr(value));
        html.push('"');
    }

    /// Write a JSX expression attribute: `name={expr}`
    fn write_expr(html: &mut String, name: &str, expr: &str) {
        let _ = write!(html, " {name}={{{expr}}}");
    }

    /// Escape a string for use in HTML attribute values
    fn escape_attr(s: &str) -> String {
        s.replace('&', "&amp;")
            .replace('"', "&quot;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
    }

    /// Escape a string for use in HTML content
    fn escape_html(s: &str) -> String {
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
    }

    /// Escape element text; JSX text also treats braces as expressions
    fn escape_text(s: &str, flavor: Flavor) -> String {
        let escaped = Self::escape_html(s);
        if flavor.is_react() {
            escaped.replace('{', "&#123;").replace('}', "&#125;")
        } else {
            escaped
        }
    }
}
