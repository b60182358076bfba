use crate::constants::FILE_TEMPLATE_PREFIX;
use crate::error::Result;
use crate::loader::{interface::TemplateLoader, local::LocalLoader};
use log::debug;
use std::path::PathBuf;

pub mod interface;
pub mod local;
pub mod sub_templates;

pub use sub_templates::SubTemplates;

/// Where the main template comes from, decided by the template argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    /// The argument is the template body itself
    Inline(String),
    /// The argument is `file://<path>` pointing at a template file
    File(PathBuf),
}

impl TemplateSource {
    /// Classifies a template argument.
    ///
    /// Only a leading `file://` marks a file reference; the prefix is removed
    /// once and the rest is taken as a filesystem path.
    pub fn from_reference(reference: &str) -> Self {
        match reference.strip_prefix(FILE_TEMPLATE_PREFIX) {
            Some(path) => TemplateSource::File(PathBuf::from(path)),
            None => TemplateSource::Inline(reference.to_string()),
        }
    }
}

impl std::fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemplateSource::Inline(_) => write!(f, "inline template"),
            TemplateSource::File(path) => {
                write!(f, "template file: '{}'", path.display())
            }
        }
    }
}

impl TemplateLoader for TemplateSource {
    fn load(&self) -> Result<(String, SubTemplates)> {
        match self {
            TemplateSource::Inline(body) => Ok((body.clone(), SubTemplates::new())),
            TemplateSource::File(path) => LocalLoader::new(path).load(),
        }
    }
}

/// Resolves a template argument into the main template and its sub-templates.
///
/// # Arguments
/// * `reference` - Inline template body or `file://<path>`
///
/// # Returns
/// * `Result<(String, SubTemplates)>` - Main template body and sub-templates;
///   the collection is empty for inline templates
pub fn resolve(reference: &str) -> Result<(String, SubTemplates)> {
    let source = TemplateSource::from_reference(reference);
    debug!("Resolving {source}");
    source.load()
}
