use super::list::FilterArgs;
use crate::{
    db::tasks::Tasks,
    libs::{config::Config, filter, messages::Message, view::View},
    msg_print,
};
use anyhow::Result;
use chrono::Local;
use clap::Args;

#[derive(Debug, Args)]
pub struct BoardArgs {
    #[command(flatten)]
    filters: FilterArgs,
}

pub fn cmd(args: BoardArgs) -> Result<()> {
    let owner = Config::read()?.owner;
    let now = Local::now().naive_local();

    let tasks = Tasks::new()?.fetch(owner.as_deref())?;
    let filtered = filter::apply(&tasks, &args.filters.into_criteria(), now.date());

    msg_print!(Message::BoardHeader, true);
    View::board(&filtered, now)
}
