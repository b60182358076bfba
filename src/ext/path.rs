use std::path::Path;

use crate::error::{Error, Result};

/// Extension trait for Path to provide checked string conversions
pub trait PathExt {
    /// Converts a path to a string slice, returning an error if the path contains invalid Unicode characters.
    ///
    /// # Examples
    /// ```
    /// use stencil::ext::PathExt;
    /// use std::path::Path;
    ///
    /// let path = Path::new("test");
    /// assert_eq!(path.to_str_checked().unwrap(), "test");
    /// ```
    fn to_str_checked(&self) -> Result<&str>;

    /// Returns the file name without its extension, which is the name a
    /// sub-template is registered under.
    ///
    /// Only the last extension is removed: `list.item.tpl` becomes `list.item`.
    ///
    /// # Examples
    /// ```
    /// use stencil::ext::PathExt;
    /// use std::path::Path;
    ///
    /// assert_eq!(Path::new("partials/header.tpl").template_name().unwrap(), "header");
    /// ```
    fn template_name(&self) -> Result<&str>;
}

impl PathExt for Path {
    fn to_str_checked(&self) -> Result<&str> {
        self.to_str().ok_or_else(|| {
            Error::Other(anyhow::anyhow!(
                "Path '{}' contains invalid Unicode characters",
                self.display()
            ))
        })
    }

    fn template_name(&self) -> Result<&str> {
        let stem = self.file_stem().ok_or_else(|| {
            Error::Other(anyhow::anyhow!("Path '{}' has no file name", self.display()))
        })?;
        Path::new(stem).to_str_checked()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_to_str_checked_valid() {
        let path = Path::new("valid_path");
        assert_eq!(path.to_str_checked().unwrap(), "valid_path");
    }

    #[test]
    fn test_template_name_strips_extension() {
        assert_eq!(Path::new("dir/t2.templ").template_name().unwrap(), "t2");
        assert_eq!(Path::new("noext").template_name().unwrap(), "noext");
        assert_eq!(Path::new("a.b.c").template_name().unwrap(), "a.b");
    }

    #[test]
    fn test_template_name_keeps_dotfiles() {
        assert_eq!(Path::new(".hidden").template_name().unwrap(), ".hidden");
    }

    #[test]
    fn test_template_name_without_file_name() {
        assert!(Path::new("/").template_name().is_err());
    }
}
