//! Documentation emitters for annotated module trees.

mod buffers;
mod markdown;
mod markup;
mod options;
mod rst;

pub use markdown::MarkdownEmitter;
pub use options::RenderOptions;
pub use rst::RstEmitter;

use crate::error::{Error, Result};
use crate::model::{ModuleDoc, StatementDoc};
use std::fmt;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;

/// A documentation emitter driven by the tree walk.
///
/// `module_doc` announces a module and emits its header block;
/// `statement_doc` appends one fragment per data node to the owning
/// module's buffer; `emit` joins the per-module blocks into the final
/// document.
pub trait DocEmitter {
    /// Emits the header block for a module: title, description, typedefs,
    /// identities grouped by base, and the data nodes heading.
    fn module_doc(&mut self, module: &ModuleDoc, options: &RenderOptions) -> Result<()>;

    /// Emits the fragment for one data node into the named module's buffer.
    ///
    /// `depth` is 1 for top-level nodes and grows with nesting. Returns
    /// [`Error::ModuleNotFound`] if the module was never announced.
    fn statement_doc(
        &mut self,
        statement: &StatementDoc,
        module_name: &str,
        depth: usize,
        options: &RenderOptions,
    ) -> Result<()>;

    /// Joins all module blocks, prefixed by the optional document title.
    fn emit(&self, options: &RenderOptions) -> String;
}

/// Walks the module trees through an emitter and returns the document.
pub fn render_docs<E: DocEmitter>(
    modules: &[ModuleDoc],
    emitter: &mut E,
    options: &RenderOptions,
) -> Result<String> {
    for module in modules {
        emitter.module_doc(module, options)?;
        for child in &module.children {
            walk_statement(child, &module.name, 1, emitter, options)?;
        }
    }

    let mut output = emitter.emit(options);

    if let Some(ref cleanup_options) = options.cleanup {
        output = crate::cleanup::cleanup(&output, cleanup_options);
    }

    Ok(output)
}

fn walk_statement<E: DocEmitter>(
    statement: &StatementDoc,
    module_name: &str,
    depth: usize,
    emitter: &mut E,
    options: &RenderOptions,
) -> Result<()> {
    emitter.statement_doc(statement, module_name, depth, options)?;
    for child in &statement.children {
        walk_statement(child, module_name, depth + 1, emitter, options)?;
    }
    Ok(())
}

/// Renders module trees to reStructuredText.
pub fn render_rst(modules: &[ModuleDoc], options: &RenderOptions) -> Result<String> {
    let mut emitter = RstEmitter::new();
    render_docs(modules, &mut emitter, options)
}

/// Renders module trees to Markdown.
pub fn render_markdown(modules: &[ModuleDoc], options: &RenderOptions) -> Result<String> {
    let mut emitter = MarkdownEmitter::new();
    render_docs(modules, &mut emitter, options)
}

/// Renders module trees in the given format.
pub fn render(modules: &[ModuleDoc], format: OutputFormat, options: &RenderOptions) -> Result<String> {
    match format {
        OutputFormat::Rst => render_rst(modules, options),
        OutputFormat::Markdown => render_markdown(modules, options),
    }
}

/// Renders module trees and writes the document to a file.
pub fn render_to_file(
    modules: &[ModuleDoc],
    format: OutputFormat,
    path: impl AsRef<Path>,
    options: &RenderOptions,
) -> Result<()> {
    let content = render(modules, format, options)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Renders module trees and writes the document to a writer.
pub fn render_to_writer<W: Write>(
    modules: &[ModuleDoc],
    format: OutputFormat,
    writer: &mut W,
    options: &RenderOptions,
) -> Result<()> {
    let content = render(modules, format, options)?;
    writer.write_all(content.as_bytes())?;
    Ok(())
}

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// reStructuredText with underlined headings
    Rst,
    /// Markdown with ATX headings
    Markdown,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Rst => f.write_str("rst"),
            OutputFormat::Markdown => f.write_str("markdown"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "rst" => Ok(OutputFormat::Rst),
            "md" | "markdown" => Ok(OutputFormat::Markdown),
            other => Err(Error::UnsupportedFormat(other.to_string())),
        }
    }
}
