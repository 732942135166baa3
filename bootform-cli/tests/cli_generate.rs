//! Integration tests for the `bootform` command

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use bootform::forms::Flavor;
use bootform_cli_lib::{GenerateCommand, USAGE_MESSAGE};
use tempfile::TempDir;

const SCHEMA_TOML: &str = r#"
[[apps.blog.models]]
name = "Post"
fields = [
  { name = "id", type = "AutoField" },
  { name = "title", type = "CharField" },
  { name = "body", type = "TextField" },
  { name = "published", type = "BooleanField" },
  { name = "status", type = "CharField", choices = [[1, "Draft"], [2, "Published"]] },
]
"#;

const SCHEMA_JSON: &str = r#"{
  "apps": {
    "shop": {
      "models": [
        {
          "name": "Product",
          "fields": [
            {"name": "id", "type": "AutoField"},
            {"name": "homepage", "type": "URLField"},
            {"name": "media", "type": "CharField", "choices": [
              ["Audio", [["vinyl", "Vinyl"], ["cd", "CD"]]],
              ["unknown", "Unknown"]
            ]}
          ]
        }
      ]
    }
  }
}"#;

fn write_schema(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn bootform(cwd: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_bootform"));
    cmd.current_dir(cwd)
        .env_remove("RUST_LOG")
        .env("XDG_CONFIG_HOME", cwd.join(".config"));
    for (key, _) in std::env::vars_os() {
        if key.to_string_lossy().starts_with("BOOTFORM_") {
            cmd.env_remove(key);
        }
    }
    cmd
}

/// Test rendering a TOML schema model in the default flavor
#[test]
fn test_generate_default_from_toml() {
    let dir = TempDir::new().unwrap();
    let schema = write_schema(&dir, "models.toml", SCHEMA_TOML);

    let html = GenerateCommand::new("blog", "Post", Flavor::Default, schema)
        .run()
        .unwrap();

    assert!(!html.contains("Post-id"));
    assert!(html.contains(r#"<input type="text" name="title" class="form-control" id="Post-title"/>"#));
    assert!(html.contains(r#"<textarea name="body" class="form-control" id="Post-body"></textarea>"#));
    assert!(html.contains(r#"<input type="checkbox" name="published" id="Post-published"/>"#));
    assert!(html.contains(r#"<option value="1">Draft</option>"#));
    assert!(!html.contains("className="));
}

/// Test rendering a JSON schema model in the React flavor
#[test]
fn test_generate_react_from_json() {
    let dir = TempDir::new().unwrap();
    let schema = write_schema(&dir, "models.json", SCHEMA_JSON);

    let html = GenerateCommand::new("shop", "product", Flavor::React, schema)
        .run()
        .unwrap();

    assert!(html.contains(r#"id="product-homepage""#));
    assert!(html.contains("<optgroup label=\"Audio\">"));
    assert_eq!(html.matches("{errors.").count(), 2);
    assert!(!html.contains(" class="));
    assert!(!html.contains(" for="));
}

/// Test that a missing schema file is reported with its path
#[test]
fn test_generate_missing_schema() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.toml");

    let err = GenerateCommand::new("blog", "Post", Flavor::Default, &missing)
        .run()
        .unwrap_err();

    assert!(err.to_string().contains("nope.toml"));
}

/// Test the binary writes the form to stdout
#[test]
fn test_binary_prints_form() {
    let dir = TempDir::new().unwrap();
    let schema = write_schema(&dir, "models.toml", SCHEMA_TOML);

    let output = bootform(dir.path())
        .args(["blog", "Post", "--schema"])
        .arg(&schema)
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("<form role=\"form\" class=\"form-horizontal\">"));
    assert!(stdout.ends_with("</form>\n"));
}

/// Test the `--react` flag and the local config file
#[test]
fn test_binary_react_with_local_config() {
    let dir = TempDir::new().unwrap();
    write_schema(&dir, "schema.toml", SCHEMA_TOML);
    fs::write(dir.path().join("bootform.toml"), "schema = \"schema.toml\"\n").unwrap();

    let output = bootform(dir.path())
        .args(["blog", "Post", "--react"])
        .output()
        .unwrap();

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains(r#"ref="title""#));
    assert!(stdout.contains("defaultChecked={this.state.data.published}"));
}

/// Test that `BOOTFORM_SCHEMA` takes precedence over the local config file
#[test]
fn test_binary_env_overrides_local_config() {
    let dir = TempDir::new().unwrap();
    write_schema(&dir, "schema.toml", SCHEMA_TOML);
    fs::write(dir.path().join("bootform.toml"), "schema = \"schema.toml\"\n").unwrap();

    let output = bootform(dir.path())
        .args(["blog", "Post"])
        .env("BOOTFORM_SCHEMA", "absent.toml")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("absent.toml"));
}

/// Test the usage error when the model name is missing
#[test]
fn test_binary_usage_error() {
    let dir = TempDir::new().unwrap();

    let output = bootform(dir.path()).arg("blog").output().unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains(USAGE_MESSAGE));
}

/// Test that an unknown model fails without writing markup
#[test]
fn test_binary_unknown_model() {
    let dir = TempDir::new().unwrap();
    let schema = write_schema(&dir, "models.toml", SCHEMA_TOML);

    let output = bootform(dir.path())
        .args(["blog", "Comment", "--schema"])
        .arg(&schema)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Comment"));
}
