use crate::{
    db::tasks::Tasks,
    libs::{config::Config, error::TaskError, messages::Message, task::Status},
    msg_error, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct MvArgs {
    /// Task id
    id: i64,
    /// Target status column
    #[arg(value_enum)]
    status: Status,
}

pub fn cmd(args: MvArgs) -> Result<()> {
    let owner = Config::read()?.owner;

    match Tasks::new()?.change_status(args.id, owner.as_deref(), args.status) {
        Ok(()) => {
            msg_success!(Message::TaskMoved(args.id, args.status.to_string()));
            Ok(())
        }
        Err(TaskError::NotFound(id)) => {
            msg_error!(Message::TaskNotFoundWithId(id));
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
