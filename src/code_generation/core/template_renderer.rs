use handlebars::{
    no_escape, Context, Handlebars, Helper, HelperDef, HelperResult, Output, RenderContext,
    RenderErrorReason,
};
use serde::Serialize;

use crate::code_generation::core::template_funcs::{TemplateFunc, TEMPLATE_FUNCS};
use crate::shared::error::{ScaffoldError, ScaffoldResult};

/// Renders template bodies against serializable data.
///
/// Every call parses the body from scratch in strict mode, so a field the data
/// does not carry is an error rather than an empty string. Output is never
/// HTML-escaped since the targets are source files.
pub struct TemplateRenderer {
    funcs: &'static [(&'static str, TemplateFunc)],
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new(TEMPLATE_FUNCS)
    }
}

impl TemplateRenderer {
    pub fn new(funcs: &'static [(&'static str, TemplateFunc)]) -> Self {
        Self { funcs }
    }

    /// Fill `body` with `data`, returning the rendered bytes
    pub fn render<T: Serialize>(&self, name: &str, body: &str, data: &T) -> ScaffoldResult<Vec<u8>> {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        registry.register_escape_fn(no_escape);
        for (func_name, func) in self.funcs {
            registry.register_helper(func_name, Box::new(StringFuncHelper { name: *func_name, func: *func }));
        }

        registry
            .register_template_string(name, body)
            .map_err(|e| ScaffoldError::TemplateParse {
                name: name.to_string(),
                source: Box::new(e),
            })?;

        let rendered = registry
            .render(name, data)
            .map_err(|e| ScaffoldError::TemplateRender {
                name: name.to_string(),
                source: Box::new(e),
            })?;

        tracing::debug!(template = name, bytes = rendered.len(), "rendered template");
        Ok(rendered.into_bytes())
    }
}

/// Adapts a plain string function to a single-argument template helper
struct StringFuncHelper {
    name: &'static str,
    func: TemplateFunc,
}

impl HelperDef for StringFuncHelper {
    fn call<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        _: &'reg Handlebars<'reg>,
        _: &'rc Context,
        _: &mut RenderContext<'reg, 'rc>,
        out: &mut dyn Output,
    ) -> HelperResult {
        let param = h
            .param(0)
            .ok_or(RenderErrorReason::ParamNotFoundForIndex(self.name, 0))?;
        let value = param
            .value()
            .as_str()
            .ok_or(RenderErrorReason::InvalidParamType("string"))?;

        out.write(&(self.func)(value))?;
        Ok(())
    }
}
