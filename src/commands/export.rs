use crate::{
    db::tasks::Tasks,
    libs::{
        config::Config,
        export::{ExportFormat, Exporter},
        messages::Message,
    },
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,
    /// Output file; defaults to a timestamped name in the current directory
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let owner = Config::read()?.owner;
    let tasks = Tasks::new()?.fetch(owner.as_deref())?;

    if tasks.is_empty() {
        msg_info!(Message::NothingToExport);
        return Ok(());
    }

    let path = Exporter::new(args.format, args.output).export_tasks(&tasks)?;
    msg_success!(Message::ExportCompleted(path.display().to_string()));
    Ok(())
}
