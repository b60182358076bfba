use crate::{document::Document, error::Result, loader::SubTemplates};

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Makes `sub_templates` available to templates by name.
    ///
    /// A sub-template is only parsed when a template refers to it, so an
    /// unused sibling with broken syntax never fails a render.
    ///
    /// # Arguments
    /// * `sub_templates` - Named template bodies
    fn set_sub_templates(&mut self, sub_templates: SubTemplates);

    /// Renders a template string against a document.
    ///
    /// # Arguments
    /// * `template` - Template string to render
    /// * `document` - Data the template is rendered against
    ///
    /// # Returns
    /// * `Result<String>` - Rendered text
    fn render(&self, template: &str, document: &Document) -> Result<String>;
}
