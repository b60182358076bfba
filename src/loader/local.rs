use crate::error::{Error, Result};
use crate::ext::PathExt;
use crate::loader::{interface::TemplateLoader, SubTemplates};
use log::{debug, warn};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Loader for a template file on the local filesystem.
///
/// Every other regular file in the same directory becomes a sub-template,
/// named after its file name without the extension.
pub struct LocalLoader<P: AsRef<Path>> {
    path: P,
}

impl<P: AsRef<Path>> LocalLoader<P> {
    /// Creates a new LocalLoader instance.
    pub fn new(path: P) -> Self {
        Self { path }
    }

    /// Directory holding the main template; a bare file name lives in the
    /// current directory.
    fn template_dir(&self) -> &Path {
        match self.path.as_ref().parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    fn load_sub_templates(&self) -> Result<SubTemplates> {
        let main_file_name = self.path.as_ref().file_name();
        let template_dir = self.template_dir();

        let mut sub_templates = SubTemplates::new();
        let mut origins: HashMap<String, PathBuf> = HashMap::new();

        for dir_entry in
            WalkDir::new(template_dir).min_depth(1).max_depth(1).sort_by_file_name()
        {
            let entry = dir_entry.map_err(|source| Error::TemplateDirectory {
                dir: template_dir.to_path_buf(),
                source,
            })?;
            let path = entry.path();
            if !path.is_file() || Some(entry.file_name()) == main_file_name {
                continue;
            }

            let name = path.template_name()?.to_string();
            let Some(body) = read_sub_template(path)? else {
                warn!("Skipping {}: not a UTF-8 text file", path.display());
                continue;
            };
            if let Some(first) = origins.get(&name) {
                return Err(Error::DuplicateSubTemplate {
                    name,
                    first: first.clone(),
                    second: path.to_path_buf(),
                });
            }

            debug!("Adding sub-template '{name}' from {}", path.display());
            origins.insert(name.clone(), path.to_path_buf());
            sub_templates.insert(name, body);
        }

        Ok(sub_templates)
    }
}

impl<P: AsRef<Path>> TemplateLoader for LocalLoader<P> {
    /// Loads the main template and its sibling sub-templates.
    ///
    /// Siblings that are not UTF-8 text are skipped; any I/O failure aborts
    /// the load and nothing is returned.
    fn load(&self) -> Result<(String, SubTemplates)> {
        let path = self.path.as_ref();
        if !path.exists() {
            return Err(Error::TemplateNotFound { path: path.to_path_buf() });
        }

        let main = read_template(path)?;
        let sub_templates = self.load_sub_templates()?;
        debug!(
            "Loaded {} with {} sub-template(s)",
            path.display(),
            sub_templates.len()
        );

        Ok((main, sub_templates))
    }
}

fn read_template(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .map_err(|source| Error::TemplateRead { path: path.to_path_buf(), source })
}

/// Reads a sibling file, yielding `None` when its contents are not UTF-8.
fn read_sub_template(path: &Path) -> Result<Option<String>> {
    let bytes = std::fs::read(path)
        .map_err(|source| Error::TemplateRead { path: path.to_path_buf(), source })?;
    Ok(String::from_utf8(bytes).ok())
}
