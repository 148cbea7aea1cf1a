//! Markdown emitter.

use super::buffers::ModuleBuffers;
use super::markup;
use super::options::RenderOptions;
use super::DocEmitter;
use crate::error::Result;
use crate::model::{ModuleDoc, RestrictionKind, StatementDoc, TypeDoc};
use crate::path;

/// Emits Markdown with ATX headings.
///
/// Statement headings grow with tree depth, capped at
/// [`RenderOptions::max_heading_level`].
#[derive(Debug, Default)]
pub struct MarkdownEmitter {
    buffers: ModuleBuffers,
}

impl MarkdownEmitter {
    /// Creates a new emitter with empty buffers.
    pub fn new() -> Self {
        Self {
            buffers: ModuleBuffers::new(),
        }
    }
}

impl DocEmitter for MarkdownEmitter {
    fn module_doc(&mut self, module: &ModuleDoc, _options: &RenderOptions) -> Result<()> {
        let mut s = markup::atx(1, &module.name);
        s.push_str(&markup::block(module.description.as_deref().unwrap_or("")));

        if let Some(ref namespace) = module.namespace {
            s.push_str(&format!(
                "{}: {}\n",
                markup::bold("namespace"),
                markup::md_code(namespace)
            ));
        }
        if let Some(ref prefix) = module.prefix {
            s.push_str(&format!(
                "{}: {}\n",
                markup::bold("prefix"),
                markup::md_code(prefix)
            ));
        }

        if !module.typedefs.is_empty() {
            s.push_str(&markup::atx(2, "Types"));
            s.push('\n');
            for typedef in &module.typedefs {
                s.push_str(&markup::atx(3, &typedef.name));
                s.push_str(&markup::block(typedef.description.as_deref().unwrap_or("")));
                s.push_str(&markup::block(&format!(
                    "{}: {}",
                    markup::bold("type"),
                    markup::md_code(&typedef.type_info.name)
                )));
                for value in &typedef.type_info.enums {
                    s.push_str(&markup::block(&format!(
                        "* {}: {}",
                        markup::md_code(&value.name),
                        value.description
                    )));
                }
                for restriction in &typedef.type_info.restrictions {
                    s.push_str(&markup::block(&format!(
                        "{}: {}",
                        markup::bold(restriction.label()),
                        markup::md_code(restriction.value())
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
            s.push_str(&markup::atx(2, "Identities"));
            s.push('\n');
            for base in module.base_identities() {
                s.push_str(&markup::atx(3, &format!("base: {}", markup::italic(&base.name))));
                s.push_str(&markup::block(base.description.as_deref().unwrap_or("")));
                for identity in module.derived_from(&base.name) {
                    s.push_str(&markup::atx(3, &identity.name));
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
            s.push_str(&markup::atx(2, "Data nodes"));
            s.push('\n');
        }

        self.buffers.start_module(&module.name).push_str(&s);
        Ok(())
    }

    fn statement_doc(
        &mut self,
        statement: &StatementDoc,
        module_name: &str,
        depth: usize,
        options: &RenderOptions,
    ) -> Result<()> {
        let pathstr = if options.strip_namespace {
            path::strip_namespace(&statement.path)
        } else {
            statement.path.clone()
        };

        // Top-level nodes start at h3, one level deeper per nesting level.
        let level = (2 + depth).min(options.max_heading_level as usize);
        let mut s = markup::atx(level, &pathstr);

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
            markup::md_code(statement.kind.as_str())
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
            Some(ref title) => markup::atx(1, title),
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
        markup::md_code(&type_info.name)
    ));

    match type_info.name.as_str() {
        "enumeration" => {
            for value in &type_info.enums {
                s.push_str(&markup::block(&format!(
                    "{}* {}: {}",
                    indent,
                    markup::md_code(&value.name),
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
                    markup::md_code(pattern.value())
                )));
            }
        }
        "identityref" => {
            if let Some(ref base) = type_info.base {
                s.push_str(&markup::block(&format!(
                    "{}* {}: {}",
                    indent,
                    markup::bold("base"),
                    markup::md_code(base)
                )));
            }
        }
        "leafref" => {
            if let Some(ref target) = type_info.leafref_path {
                s.push_str(&markup::block(&format!(
                    "{}* {}: {}",
                    indent,
                    markup::bold("path reference"),
                    markup::md_code(target)
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
                    markup::md_code(range.value())
                )));
            }
        }
        _ => {}
    }

    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Identity, Restriction, StatementKind, Typedef};
    use crate::render::render_docs;

    #[test]
    fn test_module_header() {
        let mut module = ModuleDoc::with_description("example-system", "System settings");
        module.namespace = Some("http://example.com/system".to_string());
        module.prefix = Some("sys".to_string());

        let output =
            render_docs(&[module], &mut MarkdownEmitter::new(), &RenderOptions::default()).unwrap();

        assert!(output.starts_with("# example-system\n"));
        assert!(output.contains("\nSystem settings\n"));
        assert!(output.contains("**namespace**: `http://example.com/system`\n"));
        assert!(output.contains("**prefix**: `sys`\n"));
    }

    #[test]
    fn test_statement_heading_depth() {
        let mut module = ModuleDoc::new("example-interfaces");
        let mut container = StatementDoc::new(StatementKind::Container, "/interfaces");
        let mut list = StatementDoc::new(StatementKind::List, "/interfaces/interface");
        list.push_child(StatementDoc::leaf(
            "/interfaces/interface/name",
            TypeDoc::named("string"),
        ));
        container.push_child(list);
        module.push_child(container);

        let output =
            render_docs(&[module], &mut MarkdownEmitter::new(), &RenderOptions::default()).unwrap();

        assert!(output.contains("\n### /interfaces\n"));
        assert!(output.contains("\n#### /interfaces/interface\n"));
        assert!(output.contains("\n##### /interfaces/interface/name\n"));
        assert!(output.contains("**nodetype**: `leaf`\n"));
    }

    #[test]
    fn test_statement_heading_capped() {
        let mut module = ModuleDoc::new("example-deep");
        let mut node = StatementDoc::leaf("/a/b/c/d/e/f", TypeDoc::named("string"));
        for path in ["/a/b/c/d/e", "/a/b/c/d", "/a/b/c", "/a/b", "/a"] {
            let mut parent = StatementDoc::new(StatementKind::Container, path);
            parent.push_child(node);
            node = parent;
        }
        module.push_child(node);

        let options = RenderOptions::default().with_max_heading_level(4);
        let output = render_docs(&[module], &mut MarkdownEmitter::new(), &options).unwrap();

        assert!(output.contains("\n### /a\n"));
        assert!(output.contains("\n#### /a/b\n"));
        assert!(output.contains("\n#### /a/b/c/d/e/f\n"));
        assert!(!output.contains("#####"));
    }

    #[test]
    fn test_typedef_section() {
        let mut module = ModuleDoc::new("example-types");
        module.push_typedef(Typedef::with_description(
            "vlan-id",
            "IEEE 802.1Q VLAN identifier",
            TypeDoc::named("uint16").with_restriction(Restriction::Range("1..4094".into())),
        ));

        let output =
            render_docs(&[module], &mut MarkdownEmitter::new(), &RenderOptions::default()).unwrap();

        assert!(output.contains("## Types\n"));
        assert!(output.contains("### vlan-id\n"));
        assert!(output.contains("**type**: `uint16`"));
        assert!(output.contains("**range**: `1..4094`"));
    }

    #[test]
    fn test_identity_grouping() {
        let mut module = ModuleDoc::new("example-transport");
        module.push_identity(Identity::base("tunnel", "Tunnel encapsulation base"));
        module.push_identity(Identity::derived("gre", "tunnel", "GRE encapsulation"));

        let output =
            render_docs(&[module], &mut MarkdownEmitter::new(), &RenderOptions::default()).unwrap();

        assert!(output.contains("## Identities\n"));
        assert!(output.contains("### base: *tunnel*\n"));
        assert!(output.contains("### gre\n"));
        assert!(output.contains("**base identity**: tunnel"));
    }

    #[test]
    fn test_union_leaf_expands_members() {
        let mut module = ModuleDoc::new("example-union");
        module.push_child(StatementDoc::leaf(
            "/timers/interval",
            TypeDoc::union([
                TypeDoc::named("uint32"),
                TypeDoc::enumeration([("INFINITY", "Never expires")]),
            ]),
        ));

        let output =
            render_docs(&[module], &mut MarkdownEmitter::new(), &RenderOptions::default()).unwrap();

        assert!(output.contains("**Type**: `union`"));
        assert!(output.contains("*  **Type**: `uint32`"));
        assert!(output.contains("*  **Type**: `enumeration`"));
        assert!(output.contains("  * `INFINITY`: Never expires"));
    }

    #[test]
    fn test_nested_union_expands_inner_members() {
        let mut module = ModuleDoc::new("example-union");
        module.push_child(StatementDoc::leaf(
            "/timers/hold-time",
            TypeDoc::union([
                TypeDoc::union([
                    TypeDoc::named("uint16").with_restriction(Restriction::Range("1..3600".into())),
                    TypeDoc::enumeration([("NONE", "No hold time")]),
                ]),
                TypeDoc::named("string"),
            ]),
        ));

        let output =
            render_docs(&[module], &mut MarkdownEmitter::new(), &RenderOptions::default()).unwrap();

        assert!(output.contains("**Type**: `union`"));
        assert!(output.contains("*  **Type**: `union`"));
        assert!(output.contains("*  **Type**: `uint16`"));
        assert!(output.contains("  * **range**: `1..3600`"));
        assert!(output.contains("*  **Type**: `enumeration`"));
        assert!(output.contains("  * `NONE`: No hold time"));
        assert!(output.contains("*  **Type**: `string`"));
    }

    #[test]
    fn test_title_and_cleanup() {
        let options = RenderOptions::default()
            .with_title("Schema Reference")
            .with_cleanup();
        let module = ModuleDoc::with_description("example-system", "System settings");
        let output = render_docs(&[module], &mut MarkdownEmitter::new(), &options).unwrap();

        assert!(output.starts_with("# Schema Reference\n"));
        assert!(!output.contains("\n\n\n"));
        assert!(output.ends_with("System settings\n"));
    }
}
