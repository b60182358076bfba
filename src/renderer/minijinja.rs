use super::functions::{data_context, FunctionRegistry};
use crate::{
    document::Document, error::Result, loader::SubTemplates,
    renderer::interface::TemplateRenderer,
};
use minijinja::{AutoEscape, Environment, UndefinedBehavior, Value};

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment holding the sub-templates and functions
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a renderer with `functions` installed.
    ///
    /// Output is plain text: auto-escaping is off and template bodies keep
    /// their trailing newline.
    pub fn new(functions: &dyn FunctionRegistry) -> Self {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.set_keep_trailing_newline(true);
        functions.install(&mut env);
        Self { env }
    }

    /// Makes undefined variables a rendering error instead of rendering empty.
    pub fn strict(mut self, strict: bool) -> Self {
        if strict {
            self.env.set_undefined_behavior(UndefinedBehavior::Strict);
        }
        self
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    fn set_sub_templates(&mut self, sub_templates: SubTemplates) {
        self.env
            .set_loader(move |name| Ok(sub_templates.get(name).map(str::to_owned)));
    }

    /// The main template is compiled on the fly and never registered, so no
    /// sub-template name can shadow it.
    fn render(&self, template: &str, document: &Document) -> Result<String> {
        Ok(self
            .env
            .render_str(template, data_context(Value::from_serialize(document)))?)
    }
}
