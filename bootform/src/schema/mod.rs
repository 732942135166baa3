//! Model metadata sources
//!
//! The renderer needs, for a named model, its ordered field list. A
//! [`ModelSource`] provides that. [`SchemaFile`] reads it from a TOML or JSON
//! document laid out as `apps -> models -> fields`:
//!
//! ```toml
//! [[apps.blog.models]]
//! name = "Post"
//! fields = [
//!   { name = "id", type = "AutoField" },
//!   { name = "title", type = "CharField" },
//!   { name = "status", type = "CharField", choices = [["d", "Draft"], ["p", "Published"]] },
//! ]
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::{BootformError, Result};
use crate::forms::FieldDescriptor;

/// A model and its fields, in declaration order
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ModelDescriptor {
    /// Model name
    pub name: String,
    /// Fields in declaration order
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
}

/// Something that can describe models by app label and name
pub trait ModelSource {
    /// Look up a model
    ///
    /// The returned descriptor carries `model` exactly as given, since that
    /// spelling is what element ids are built from.
    fn model(&self, app: &str, model: &str) -> Result<ModelDescriptor>;
}

#[derive(Debug, Clone, Default, Deserialize)]
struct AppSchema {
    #[serde(default)]
    models: Vec<ModelDescriptor>,
}

/// Model metadata loaded from a schema document
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SchemaFile {
    #[serde(default)]
    apps: BTreeMap<String, AppSchema>,
}

impl SchemaFile {
    /// Load a schema file, choosing the format by extension
    ///
    /// `.json` files are parsed as JSON, everything else as TOML.
    ///
    /// # Errors
    ///
    /// Returns [`BootformError::Io`] if the file cannot be read and
    /// [`BootformError::Parse`] if it is not a valid schema document.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| BootformError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let schema: Self = if is_json {
            serde_json::from_str(&contents).map_err(|e| parse_error(path, e))?
        } else {
            toml::from_str(&contents).map_err(|e| parse_error(path, e))?
        };

        debug!(path = %path.display(), json = is_json, "Loaded schema file");
        Ok(schema)
    }

    /// Parse a TOML schema document
    ///
    /// # Errors
    ///
    /// Returns [`BootformError::Parse`] on malformed input.
    pub fn from_toml_str(input: &str) -> Result<Self> {
        toml::from_str(input).map_err(|e| parse_error(Path::new("<inline>"), e))
    }

    /// Parse a JSON schema document
    ///
    /// # Errors
    ///
    /// Returns [`BootformError::Parse`] on malformed input.
    pub fn from_json_str(input: &str) -> Result<Self> {
        serde_json::from_str(input).map_err(|e| parse_error(Path::new("<inline>"), e))
    }

    /// App labels present in the schema, sorted
    pub fn app_labels(&self) -> impl Iterator<Item = &str> {
        self.apps.keys().map(String::as_str)
    }
}

impl ModelSource for SchemaFile {
    fn model(&self, app: &str, model: &str) -> Result<ModelDescriptor> {
        let app_schema = self
            .apps
            .get(app)
            .ok_or_else(|| BootformError::UnknownApp(app.to_owned()))?;

        // Model names match case-insensitively, like the framework's registry
        let found = app_schema
            .models
            .iter()
            .find(|m| m.name.eq_ignore_ascii_case(model))
            .ok_or_else(|| BootformError::UnknownModel {
                app: app.to_owned(),
                model: model.to_owned(),
            })?;

        Ok(ModelDescriptor {
            name: model.to_owned(),
            fields: found.fields.clone(),
        })
    }
}

fn parse_error(path: &Path, err: impl std::fmt::Display) -> BootformError {
    BootformError::Parse {
        path: PathBuf::from(path),
        message: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::{Choice, FieldKind};

    const BLOG: &str = r#"
[[apps.blog.models]]
name = "Post"
fields = [
  { name = "id", type = "AutoField" },
  { name = "title", type = "CharField" },
  { name = "body", type = "TextField" },
  { name = "status", type = "CharField", choices = [["d", "Draft"], ["p", "Published"]] },
]

[[apps.blog.models]]
name = "Author"
fields = [{ name = "email", type = "EmailField" }]
"#;

    #[test]
    fn test_lookup_model() {
        let schema = SchemaFile::from_toml_str(BLOG).unwrap();
        let post = schema.model("blog", "Post").unwrap();

        assert_eq!(post.name, "Post");
        let names: Vec<_> = post.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["id", "title", "body", "status"]);
        assert_eq!(post.fields[0].kind, FieldKind::Other);
        assert_eq!(post.fields[2].kind, FieldKind::LongText);
        assert_eq!(
            post.fields[3].choices,
            vec![Choice::option("d", "Draft"), Choice::option("p", "Published")]
        );
    }

    #[test]
    fn test_model_name_is_case_insensitive() {
        let schema = SchemaFile::from_toml_str(BLOG).unwrap();
        let post = schema.model("blog", "post").unwrap();

        assert_eq!(post.name, "post");
        assert_eq!(post.fields.len(), 4);
    }

    #[test]
    fn test_unknown_app() {
        let schema = SchemaFile::from_toml_str(BLOG).unwrap();
        let err = schema.model("shop", "Post").unwrap_err();
        assert!(matches!(err, BootformError::UnknownApp(ref app) if app == "shop"));
    }

    #[test]
    fn test_unknown_model() {
        let schema = SchemaFile::from_toml_str(BLOG).unwrap();
        let err = schema.model("blog", "Comment").unwrap_err();
        assert!(matches!(err, BootformError::UnknownModel { .. }));
    }

    #[test]
    fn test_from_json_str() {
        let schema = SchemaFile::from_json_str(
            r#"{"apps": {"shop": {"models": [{"name": "Item", "fields": [{"name": "price"}]}]}}}"#,
        )
        .unwrap();

        assert_eq!(schema.app_labels().collect::<Vec<_>>(), ["shop"]);
        let item = schema.model("shop", "Item").unwrap();
        assert_eq!(item.fields[0].kind, FieldKind::Text);
    }

    #[test]
    fn test_malformed_toml() {
        let err = SchemaFile::from_toml_str("apps = 3").unwrap_err();
        assert!(matches!(err, BootformError::Parse { .. }));
    }

    #[test]
    fn test_load_by_extension() {
        let dir = tempfile::tempdir().unwrap();

        let toml_path = dir.path().join("models.toml");
        std::fs::write(&toml_path, BLOG).unwrap();
        assert!(SchemaFile::load(&toml_path).unwrap().model("blog", "Author").is_ok());

        let json_path = dir.path().join("models.json");
        std::fs::write(&json_path, r#"{"apps": {"a": {"models": [{"name": "M"}]}}}"#).unwrap();
        assert!(SchemaFile::load(&json_path).unwrap().model("a", "M").is_ok());
    }

    #[test]
    fn test_load_missing_file() {
        let err = SchemaFile::load("/nonexistent/models.toml").unwrap_err();
        assert!(matches!(err, BootformError::Io { .. }));
    }
}
