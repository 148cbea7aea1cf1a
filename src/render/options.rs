//! Rendering options.

use crate::cleanup::CleanupOptions;

/// Options controlling document rendering.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Title heading placed at the top of the document.
    /// If None, the document starts with the first module.
    pub doc_title: Option<String>,

    /// Whether to strip namespace prefixes from schema paths.
    pub strip_namespace: bool,

    /// Maximum heading level for Markdown statement headings (1-6).
    /// Deeper nodes are capped at this level.
    pub max_heading_level: u8,

    /// Cleanup pass applied to the rendered output.
    pub cleanup: Option<CleanupOptions>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            doc_title: None,
            strip_namespace: false,
            max_heading_level: 6,
            cleanup: None,
        }
    }
}

impl RenderOptions {
    /// Creates new options with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.doc_title = Some(title.into());
        self
    }

    /// Strips namespace prefixes from schema paths.
    pub fn strip_namespace(mut self) -> Self {
        self.strip_namespace = true;
        self
    }

    /// Sets the maximum heading level, clamped to 1-6.
    pub fn with_max_heading_level(mut self, level: u8) -> Self {
        self.max_heading_level = level.clamp(1, 6);
        self
    }

    /// Enables the default cleanup pass.
    pub fn with_cleanup(mut self) -> Self {
        self.cleanup = Some(CleanupOptions::default());
        self
    }

    /// Enables the minimal cleanup pass.
    pub fn with_minimal_cleanup(mut self) -> Self {
        self.cleanup = Some(CleanupOptions::minimal());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_chain() {
        let options = RenderOptions::default()
            .with_title("Device Schemas")
            .strip_namespace()
            .with_cleanup();

        assert_eq!(options.doc_title.as_deref(), Some("Device Schemas"));
        assert!(options.strip_namespace);
        assert!(options.cleanup.is_some());
    }

    #[test]
    fn test_max_heading_level_clamped() {
        assert_eq!(RenderOptions::default().with_max_heading_level(0).max_heading_level, 1);
        assert_eq!(RenderOptions::default().with_max_heading_level(10).max_heading_level, 6);
        assert_eq!(RenderOptions::default().with_max_heading_level(4).max_heading_level, 4);
    }
}
