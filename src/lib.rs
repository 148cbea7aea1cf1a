//! # yangdoc
//!
//! Renders annotated YANG schema trees into reStructuredText or Markdown
//! documentation.
//!
//! yangdoc does no YANG parsing of its own. An upstream compiler parses and
//! validates the schemas, resolves typedefs, identities and leafrefs, and
//! exports the annotated module tree (as JSON, or built directly with the
//! [`model`] types). yangdoc walks that tree and emits one formatted text
//! block per module, joined into a single document.
//!
//! ## Quick Start
//!
//! ```no_run
//! use yangdoc::{modules_from_file, render, RenderOptions};
//!
//! fn main() -> yangdoc::Result<()> {
//!     let modules = modules_from_file("modules.json")?;
//!
//!     let options = RenderOptions::default().with_title("Schema Reference");
//!     let document = render::render_rst(&modules, &options)?;
//!
//!     println!("{}", document);
//!     Ok(())
//! }
//! ```

pub mod cleanup;
pub mod error;
pub mod model;
pub mod path;
pub mod render;

// Re-exports
pub use cleanup::{cleanup, CleanupOptions};
pub use error::{Error, Result};
pub use model::{ModuleDoc, StatementDoc, StatementKind, TypeDoc};
pub use render::{DocEmitter, MarkdownEmitter, OutputFormat, RenderOptions, RstEmitter};

use std::path::Path;

/// Reads an annotated module tree from a JSON string.
///
/// The JSON is the module array exported by the upstream YANG toolchain.
pub fn modules_from_json(json: &str) -> Result<Vec<ModuleDoc>> {
    Ok(serde_json::from_str(json)?)
}

/// Reads an annotated module tree from a JSON file.
///
/// # Example
///
/// ```no_run
/// use yangdoc::modules_from_file;
///
/// let modules = modules_from_file("modules.json")?;
/// println!("Modules: {}", modules.len());
/// # Ok::<(), yangdoc::Error>(())
/// ```
pub fn modules_from_file(path: impl AsRef<Path>) -> Result<Vec<ModuleDoc>> {
    let json = std::fs::read_to_string(path)?;
    modules_from_json(&json)
}

/// Renders modules to reStructuredText with the given options.
pub fn to_rst(modules: &[ModuleDoc], options: &RenderOptions) -> Result<String> {
    render::render_rst(modules, options)
}

/// Renders modules to Markdown with the given options.
pub fn to_markdown(modules: &[ModuleDoc], options: &RenderOptions) -> Result<String> {
    render::render_markdown(modules, options)
}

/// Builder for loading and rendering module trees.
///
/// Provides a fluent API over the options layer.
///
/// # Example
///
/// ```no_run
/// use yangdoc::Yangdoc;
///
/// let document = Yangdoc::new()
///     .with_title("Device Schemas")
///     .strip_namespace()
///     .load("modules.json")?
///     .to_markdown()?;
/// # Ok::<(), yangdoc::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct Yangdoc {
    options: RenderOptions,
}

impl Yangdoc {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            options: RenderOptions::default(),
        }
    }

    /// Sets the document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.options.doc_title = Some(title.into());
        self
    }

    /// Strips namespace prefixes from schema paths.
    pub fn strip_namespace(mut self) -> Self {
        self.options.strip_namespace = true;
        self
    }

    /// Sets the maximum Markdown heading level.
    pub fn with_max_heading_level(mut self, level: u8) -> Self {
        self.options = self.options.with_max_heading_level(level);
        self
    }

    /// Enables the output cleanup pass.
    pub fn with_cleanup(mut self) -> Self {
        self.options = self.options.with_cleanup();
        self
    }

    /// Loads a module tree from a JSON file.
    pub fn load(self, path: impl AsRef<Path>) -> Result<LoadedModules> {
        let modules = modules_from_file(path)?;
        Ok(LoadedModules {
            modules,
            options: self.options,
        })
    }

    /// Wraps an already-built module tree.
    pub fn with_modules(self, modules: Vec<ModuleDoc>) -> LoadedModules {
        LoadedModules {
            modules,
            options: self.options,
        }
    }
}

/// A loaded module tree ready for rendering.
#[derive(Debug)]
pub struct LoadedModules {
    modules: Vec<ModuleDoc>,
    options: RenderOptions,
}

impl LoadedModules {
    /// Returns the loaded modules.
    pub fn modules(&self) -> &[ModuleDoc] {
        &self.modules
    }

    /// Returns the number of loaded modules.
    pub fn module_count(&self) -> usize {
        self.modules.len()
    }

    /// Returns the total number of data nodes across all modules.
    pub fn statement_count(&self) -> usize {
        self.modules.iter().map(|m| m.statement_count()).sum()
    }

    /// Renders the modules to reStructuredText.
    pub fn to_rst(&self) -> Result<String> {
        render::render_rst(&self.modules, &self.options)
    }

    /// Renders the modules to Markdown.
    pub fn to_markdown(&self) -> Result<String> {
        render::render_markdown(&self.modules, &self.options)
    }

    /// Renders the modules in the given format.
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        render::render(&self.modules, format, &self.options)
    }

    /// Consumes self and returns the underlying modules.
    pub fn into_modules(self) -> Vec<ModuleDoc> {
        self.modules
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Restriction, Typedef};

    const MODULES_JSON: &str = r#"[
        {
            "name": "example-interfaces",
            "description": "Interface management",
            "prefix": "ex-if",
            "typedefs": [
                {
                    "name": "mtu-type",
                    "description": "Maximum transmission unit",
                    "type_info": {
                        "name": "uint16",
                        "restrictions": [{"kind": "range", "value": "68..9216"}]
                    }
                }
            ],
            "identities": [],
            "children": [
                {
                    "kind": "container",
                    "path": "/ex-if:interfaces",
                    "children": [
                        {
                            "kind": "leaf",
                            "path": "/ex-if:interfaces/ex-if:name",
                            "is_key": true,
                            "type_info": {"name": "string"}
                        }
                    ]
                }
            ]
        }
    ]"#;

    #[test]
    fn test_modules_from_json() {
        let modules = modules_from_json(MODULES_JSON).unwrap();
        assert_eq!(modules.len(), 1);

        let module = &modules[0];
        assert_eq!(module.name, "example-interfaces");
        assert_eq!(module.prefix.as_deref(), Some("ex-if"));
        assert_eq!(module.typedefs.len(), 1);
        assert_eq!(
            module.typedefs[0].type_info.restrictions[0],
            Restriction::Range("68..9216".to_string())
        );
        assert_eq!(module.statement_count(), 2);
        assert!(module.children[0].children[0].is_key);
    }

    #[test]
    fn test_modules_from_json_invalid() {
        assert!(matches!(modules_from_json("not json"), Err(Error::Json(_))));
        assert!(matches!(
            modules_from_json(r#"[{"missing": "name"}]"#),
            Err(Error::Json(_))
        ));
    }

    #[test]
    fn test_json_roundtrip_then_render() {
        let modules = modules_from_json(MODULES_JSON).unwrap();
        let output = to_rst(&modules, &RenderOptions::default().strip_namespace()).unwrap();

        assert!(output.contains("example-interfaces"));
        assert!(output.contains("mtu-type"));
        assert!(output.contains("/interfaces/name"));
        assert!(output.contains("(list key)"));
    }

    #[test]
    fn test_builder_with_modules() {
        let mut module = ModuleDoc::new("example-types");
        module.push_typedef(Typedef::new("counter", TypeDoc::named("uint64")));

        let loaded = Yangdoc::new()
            .with_title("Reference")
            .with_modules(vec![module]);

        assert_eq!(loaded.module_count(), 1);
        assert_eq!(loaded.statement_count(), 0);

        let rst = loaded.to_rst().unwrap();
        assert!(rst.starts_with("Reference\n#########\n"));

        let md = loaded.render(OutputFormat::Markdown).unwrap();
        assert!(md.starts_with("# Reference\n"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("modules.json");
        std::fs::write(&path, MODULES_JSON).unwrap();

        let loaded = Yangdoc::new().with_cleanup().load(&path).unwrap();
        assert_eq!(loaded.module_count(), 1);

        let output = loaded.to_markdown().unwrap();
        assert!(output.contains("# example-interfaces"));
        assert!(!output.contains("\n\n\n"));
    }

    #[test]
    fn test_render_to_file() {
        let modules = modules_from_json(MODULES_JSON).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.rst");

        render::render_to_file(&modules, OutputFormat::Rst, &path, &RenderOptions::default())
            .unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("example-interfaces"));
    }
}
