//! Form generation command
//!
//! Looks a model up in the schema file and prints its form.
//!
//! # Example
//!
//! ```bash
//! bootform blog Post --schema models.toml
//! bootform blog Post --react > PostForm.jsx
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use bootform::forms::{Flavor, FormRenderer};
use bootform::schema::{ModelSource, SchemaFile};
use console::Term;
use tracing::{debug, info};

/// Renders one model's form to stdout
#[derive(Debug, Clone)]
pub struct GenerateCommand {
    app: String,
    model: String,
    flavor: Flavor,
    schema: PathBuf,
}

impl GenerateCommand {
    /// Create a command for `app`/`model`, reading metadata from `schema`
    #[must_use]
    pub fn new(
        app: impl Into<String>,
        model: impl Into<String>,
        flavor: Flavor,
        schema: impl Into<PathBuf>,
    ) -> Self {
        Self {
            app: app.into(),
            model: model.into(),
            flavor,
            schema: schema.into(),
        }
    }

    /// Render the form using an already-loaded model source
    ///
    /// # Errors
    ///
    /// Returns an error if the source has no such app or model.
    pub fn render(&self, source: &impl ModelSource) -> Result<String> {
        let model = source
            .model(&self.app, &self.model)
            .with_context(|| format!("Failed to look up {}.{}", self.app, self.model))?;

        debug!(
            app = %self.app,
            model = %model.name,
            fields = model.fields.len(),
            "Resolved model"
        );
        Ok(FormRenderer::render_form(&model.name, &model.fields, self.flavor))
    }

    /// Load the schema file and render the form
    ///
    /// # Errors
    ///
    /// Returns an error if the schema cannot be loaded or the model is unknown.
    pub fn run(&self) -> Result<String> {
        let schema = SchemaFile::load(&self.schema)
            .with_context(|| format!("Failed to load schema: {}", self.schema.display()))?;
        self.render(&schema)
    }

    /// Render the form and write it to stdout
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails or stdout cannot be written.
    pub fn execute(&self) -> Result<()> {
        let html = self.run()?;

        Term::stdout()
            .write_str(&html)
            .context("Failed to write form to stdout")?;

        info!(app = %self.app, model = %self.model, flavor = ?self.flavor, "Form generated");
        Ok(())
    }
}
