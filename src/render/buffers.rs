//! Per-module text accumulation.

use crate::error::{Error, Result};
use std::collections::HashMap;

/// Accumulated documentation text, one buffer per module.
///
/// Buffers are keyed by module name and concatenated in the order modules
/// were first announced, so output is deterministic for a given tree.
#[derive(Debug, Default)]
pub(crate) struct ModuleBuffers {
    order: Vec<String>,
    texts: HashMap<String, String>,
}

impl ModuleBuffers {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Starts (or restarts) the buffer for a module and returns it.
    pub(crate) fn start_module(&mut self, name: &str) -> &mut String {
        if !self.texts.contains_key(name) {
            self.order.push(name.to_string());
        }
        let buffer = self.texts.entry(name.to_string()).or_default();
        buffer.clear();
        buffer
    }

    /// Appends text to the buffer of an already-announced module.
    pub(crate) fn append(&mut self, name: &str, text: &str) -> Result<()> {
        match self.texts.get_mut(name) {
            Some(buffer) => {
                buffer.push_str(text);
                Ok(())
            }
            None => Err(Error::ModuleNotFound(name.to_string())),
        }
    }

    /// Concatenates all module blocks in announcement order.
    pub(crate) fn concat(&self) -> String {
        let mut output = String::new();
        for name in &self.order {
            if let Some(text) = self.texts.get(name) {
                output.push_str(text);
                output.push_str("\n\n");
            }
        }
        output
    }
}
