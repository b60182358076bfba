//! Rendering of the main template against the input document.

pub mod filters;
pub mod functions;
pub mod interface;
pub mod minijinja;

pub use functions::{BuiltinFunctions, FunctionRegistry};
pub use interface::TemplateRenderer;
pub use self::minijinja::MiniJinjaRenderer;

use crate::{document::Document, error::Result, loader::SubTemplates};
use log::debug;

/// Options for a rendering run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Fail on undefined variables instead of rendering them empty
    pub strict: bool,
}

/// Renders `main` against `document`.
///
/// Sub-templates are looked up by name when the main template includes or
/// `render()`s them; `functions` supplies the filters and functions.
pub fn render(
    main: &str,
    sub_templates: &SubTemplates,
    document: &Document,
    functions: &dyn FunctionRegistry,
) -> Result<String> {
    render_with(main, sub_templates, document, functions, RenderOptions::default())
}

/// Like [`render`], with explicit [`RenderOptions`].
pub fn render_with(
    main: &str,
    sub_templates: &SubTemplates,
    document: &Document,
    functions: &dyn FunctionRegistry,
    options: RenderOptions,
) -> Result<String> {
    let mut renderer = MiniJinjaRenderer::new(functions).strict(options.strict);
    debug!(
        "Rendering with sub-templates: {:?}",
        sub_templates.names().collect::<Vec<_>>()
    );
    renderer.set_sub_templates(sub_templates.clone());
    renderer.render(main, document)
}
