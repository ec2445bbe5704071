use inflections::Inflect;
use rocket_dyn_templates::handlebars::{
    Context, Handlebars, Helper, HelperDef, HelperResult, Output, RenderContext,
};

use crate::modules::helpers::handelbars::format_date::check_param_count;

/// # circuit name formatting helper
/// turns a normalized circuit identifier back into a display name.
///
/// ### usage
/// ```handlebars
/// {{formatCircuit "yas-marina"}}
/// ```
///
/// ### output
/// ```text
/// Yas Marina
/// ```
#[derive(Clone, Copy)]
pub struct FormatCircuitHelper;

impl HelperDef for FormatCircuitHelper {
    fn call<'reg: 'rc, 'rc>(
        &self,
        helper: &Helper,
        _: &Handlebars,
        _: &Context,
        _: &mut RenderContext,
        out: &mut dyn Output,
    ) -> HelperResult {
        check_param_count(helper, 1)?;
        let name_param = helper.param(0);

        if name_param.is_none() {
            return Ok(());
        }

        let name = name_param.unwrap().value().as_str().unwrap_or_default();
        out.write(&name.replace('-', " ").to_title_case())?;

        Ok(())
    }
}
