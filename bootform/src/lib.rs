//! bootform: Bootstrap forms from model metadata
//!
//! Reads a model's field list and renders a Bootstrap horizontal form, either
//! as plain HTML or flavored for React JSX (`ref` bindings, `className` and
//! `htmlFor`, inline `{errors.<field>}` slots).
//!
//! # Quick Start
//!
//! ```rust
//! use bootform::prelude::*;
//!
//! # fn main() -> bootform::Result<()> {
//! let schema = SchemaFile::from_toml_str(r#"
//! [[apps.blog.models]]
//! name = "Post"
//! fields = [{ name = "id", type = "AutoField" }, { name = "title", type = "CharField" }]
//! "#)?;
//!
//! let post = schema.model("blog", "Post")?;
//! let html = FormRenderer::render_form(&post.name, &post.fields, Flavor::React);
//! assert!(html.contains(r#"ref="title""#));
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod forms;
pub mod observability;
pub mod schema;

pub use error::{BootformError, Result};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::BootformConfig;
    pub use crate::error::{BootformError, Result};
    pub use crate::forms::{
        Choice, ChoiceOption, FieldDescriptor, FieldKind, Flavor, FormRenderer,
    };
    pub use crate::schema::{ModelDescriptor, ModelSource, SchemaFile};
}
