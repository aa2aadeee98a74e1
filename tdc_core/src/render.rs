//! Rendering of the static artifacts consumed by browsers and dashboards.

use std::{fs::read_to_string, path::Path};

use anyhow::Result;
use tera::{Context, Tera};

use crate::schedule::TrashDayParams;

/// Render the HTML page from the named template file in `template_dir`.
pub fn html(params: &TrashDayParams, template_dir: &Path, template: &str) -> Result<String> {
    let source = read_to_string(template_dir.join(template))?;
    let mut tera = Tera::default();
    tera.add_raw_template(template, &source)?;
    let rendered = tera.render(template, &Context::from_serialize(params)?)?;
    Ok(rendered)
}

/// Serialize the flat JSON document consumed by Home Assistant and the like.
pub fn json(params: &TrashDayParams) -> Result<String> {
    Ok(serde_json::to_string(params)?)
}
