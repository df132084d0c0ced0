use crate::{
    db::tasks::Tasks,
    libs::{analytics, config::Config, messages::Message, view::View},
    msg_print,
};
use anyhow::Result;
use chrono::Local;

pub fn cmd() -> Result<()> {
    let owner = Config::read()?.owner;
    let tasks = Tasks::new()?.fetch(owner.as_deref())?;

    let counts = analytics::task_counts(&tasks, Local::now().date_naive());

    msg_print!(Message::StatsHeader, true);
    View::summary(&counts)
}
