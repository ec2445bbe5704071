use chrono::DateTime;
use rocket_dyn_templates::handlebars::{
    Context, Handlebars, Helper, HelperDef, HelperResult, Output, RenderContext, RenderError,
};

/// # date formatting helper
/// formats the iso timestamps coming from the data files into something
/// readable on the schedule and replay pages.
///
/// ### usage
/// ```handlebars
/// {{formatDate "2025-03-16T04:00:00+00:00"}}
/// ```
#[derive(Clone, Copy)]
pub struct FormatDateHelper;

impl HelperDef for FormatDateHelper {
    fn call<'reg: 'rc, 'rc>(
        &self,
        helper: &Helper,
        _: &Handlebars,
        _: &Context,
        _: &mut RenderContext,
        out: &mut dyn Output,
    ) -> HelperResult {
        check_param_count(helper, 1)?;
        let date_param = helper.param(0);

        if date_param.is_none() {
            return Ok(());
        }

        let raw = date_param.unwrap().value().as_str().unwrap_or_default();

        match DateTime::parse_from_rfc3339(raw) {
            Ok(date) => out.write(&format!("{}", date.format("%A %e %B %Y, %H:%M")))?,
            // not a timestamp, show it untouched
            Err(_) => out.write(raw)?,
        }

        Ok(())
    }
}

pub fn check_param_count(h: &Helper, n: u64) -> Result<(), RenderError> {
    if h.params().len() != n as usize {
        return Err(RenderError::new::<String>(format!(
            "Wrong number of arguments for helper \"{}\", {n} was expected but {} were given",
            h.name(),
            h.params().len()
        )));
    }

    Ok(())
}
