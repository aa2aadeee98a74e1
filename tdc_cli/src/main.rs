use std::{fs::write, path::PathBuf};

use anyhow::Result;
use clap::Parser;
use tdc_core::{chrono::NaiveDate, render, schedule::PickupSchedule};

#[derive(Debug, Parser)]
pub struct Arguments {
    /// the directory the rendered page and JSON document are written to
    #[arg(long, default_value = "/var/www/html/trashdays.com")]
    pub web_dir: PathBuf,
    /// the directory holding the HTML template
    #[arg(long, default_value = "/opt/trashdays.com")]
    pub template_dir: PathBuf,
    /// the HTML template file name
    #[arg(long, default_value = "trashdays.html")]
    pub template: String,
    /// compute the schedule for this date instead of today
    #[arg(long)]
    pub date: Option<NaiveDate>,
}

fn main() -> Result<()> {
    let args = Arguments::parse();
    let schedule = PickupSchedule::default();
    let today = args.date.unwrap_or_else(|| schedule.today());
    let trash_day = schedule.upcoming_trash_day(today);
    let params = schedule.render_params(trash_day, today);
    write(
        args.web_dir.join("index.html"),
        render::html(&params, &args.template_dir, &args.template)?,
    )?;
    write(args.web_dir.join("index.json"), render::json(&params)?)?;
    Ok(())
}
