use crate::{error::Result, loader::SubTemplates};

/// Trait for loading a main template and its sub-templates from a source.
pub trait TemplateLoader {
    /// Loads the template from its source.
    ///
    /// # Returns
    /// * `Result<(String, SubTemplates)>` - The main template body and the
    ///   named sub-templates available to it
    fn load(&self) -> Result<(String, SubTemplates)>;
}
