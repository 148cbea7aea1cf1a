//! reStructuredText emitter.

use super::buffers::ModuleBuffers;
use super::markup;
use super::options::RenderOptions;
use super::DocEmitter;
use crate::error::Result;
use crate::model::{ModuleDoc, RestrictionKind, StatementDoc, TypeDoc};
use crate::path;

// Heading underline symbols, strongest first.
const H1: char = '#';
const H3: char = '=';
const H4: char = '-';

/// Emits reStructuredText with underlined headings.
#[derive(Debug, Default)]
pub struct RstEmitter {
    buffers: ModuleBuffers,
}

impl RstEmitter {
    /// Creates a new emitter with empty buffers.
    pub fn new() -> Self {
        Self {
            buffers: ModuleBuffers::new(),
        }
    }
}

impl DocEmitter for RstEmitter {
    fn module_doc(&mut self, module: &ModuleDoc, _options: &RenderOptions) -> Result<()> {
        let mut s = markup::underlined(&module.name, H1);
        s.push_str(&markup::block(module.description.as_deref().unwrap_or("")));

        if !module.typedefs.is_empty() {
            s.push_str(&markup::underlined("Types", H3));
            for typedef in &module.typedefs {
                s.push_str(&markup::underlined(&typedef.name, H4));
                s.push_str(&markup::block(typedef.description.as_deref().unwrap_or("")));
                s.push_str(&markup::block(&format!(
                    "{}: {}",
                    markup::bold("type"),
                    markup::rst_code(&typedef.type_info.name)
                )));
                for value in &typedef.type_info.enums {
                    s.push_str(&markup::block(&format!(
                        "* {}: {}",
                        markup::rst_code(&value.name),
                        value.description
                    )));
                }
                for restriction in &typedef.type_info.restrictions {
                    s.push_str(&markup::block(&format!(
                        "{}: {}",
                        markup::bold(restriction.label()),
                        markup::rst_code(restriction.value())
                    )));
                }
                if typedef.type_info.is_union() {
                    for member in &typedef.type_info.union_types {
                        s.push_str(&type_block(member, true));
                    }
                }
            }
        }

        if !module.identities.is_empty() {
            s.push_str(&markup::underlined("Identities", H3));
            for base in module.base_identities() {
                s.push_str(&markup::underlined(
                    &format!("base: {}", markup::italic(&base.name)),
                    H4,
                ));
                s.push_str(&markup::block(base.description.as_deref().unwrap_or("")));
                for identity in module.derived_from(&base.name) {
                    s.push_str(&markup::underlined(&identity.name, H4));
                    s.push_str(&markup::block(&format!(
                        "{}: {}",
                        markup::bold("base identity"),
                        base.name
                    )));
                    s.push_str(&markup::block(identity.description.as_deref().unwrap_or("")));
                }
            }
        }

        if !module.children.is_empty() {
            s.push_str(&markup::underlined("Data nodes", H3));
        }

        self.buffers.start_module(&module.name).push_str(&s);
        Ok(())
    }

    fn statement_doc(
        &mut self,
        statement: &StatementDoc,
        module_name: &str,
        _depth: usize,
        options: &RenderOptions,
    ) -> Result<()> {
        let pathstr = if options.strip_namespace {
            path::strip_namespace(&statement.path)
        } else {
            statement.path.clone()
        };

        let mut s = markup::underlined(&pathstr, H4);

        // Structural nodes get the path heading only.
        if statement.kind.is_path_only() {
            return self.buffers.append(module_name, &s);
        }

        if let Some(ref description) = statement.description {
            s.push_str(&markup::block(description));
        }

        s.push_str(&format!(
            "{}: {}",
            markup::bold("nodetype"),
            markup::rst_code(statement.kind.as_str())
        ));
        if statement.is_key {
            s.push_str(" (list key)");
        }
        s.push('\n');

        if let Some(ref type_info) = statement.type_info {
            s.push_str(&type_block(type_info, false));
        }

        s.push_str(markup::SEPARATOR);

        self.buffers.append(module_name, &s)
    }

    fn emit(&self, options: &RenderOptions) -> String {
        let mut s = match options.doc_title {
            Some(ref title) => markup::underlined(title, H1),
            None => String::new(),
        };
        s.push_str(&self.buffers.concat());
        s
    }
}

/// Formats a type block, expanding compound types.
fn type_block(type_info: &TypeDoc, is_union_member: bool) -> String {
    let bullet = if is_union_member { "*  " } else { "" };
    let indent = if is_union_member { "  " } else { "" };

    let mut s = markup::block(&format!(
        "{}{}: {}",
        bullet,
        markup::bold("Type"),
        markup::rst_code(&type_info.name)
    ));

    match type_info.name.as_str() {
        "enumeration" => {
            for value in &type_info.enums {
                s.push_str(&markup::block(&format!(
                    "{}* {}: {}",
                    indent,
                    markup::rst_code(&value.name),
                    value.description
                )));
            }
        }
        "string" => {
            if let Some(pattern) = type_info.restriction(RestrictionKind::Pattern) {
                s.push_str(&markup::block(&format!(
                    "{}* {}: {}",
                    indent,
                    markup::bold("pattern"),
                    markup::rst_code(pattern.value())
                )));
            }
        }
        "identityref" => {
            if let Some(ref base) = type_info.base {
                s.push_str(&markup::block(&format!(
                    "{}* {}: {}",
                    indent,
                    markup::bold("base"),
                    markup::rst_code(base)
                )));
            }
        }
        "leafref" => {
            if let Some(ref target) = type_info.leafref_path {
                s.push_str(&markup::block(&format!(
                    "{}* {}: {}",
                    indent,
                    markup::bold("path reference"),
                    markup::rst_code(target)
                )));
            }
        }
        "union" => {
            for member in &type_info.union_types {
                s.push_str(&type_block(member, true));
            }
        }
        name if crate::model::INTEGER_TYPES.contains(&name) => {
            if let Some(range) = type_info.restriction(RestrictionKind::Range) {
                s.push_str(&markup::block(&format!(
                    "{}* {}: {}",
                    indent,
                    markup::bold("range"),
                    markup::rst_code(range.value())
                )));
            }
        }
        _ => {}
    }

    s
}
