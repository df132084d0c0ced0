use crate::{
    db::tasks::Tasks,
    libs::{config::Config, messages::Message},
    msg_error, msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Task id
    id: i64,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub fn cmd(args: DeleteArgs) -> Result<()> {
    let owner = Config::read()?.owner;
    let mut store = Tasks::new()?;

    let task = match store.get_by_id(args.id, owner.as_deref())? {
        Some(task) => task,
        None => {
            msg_error!(Message::TaskNotFoundWithId(args.id));
            return Ok(());
        }
    };

    let subtask_count = store.subtask_count(args.id)?;

    if !args.yes {
        let prompt = if subtask_count > 0 {
            Message::ConfirmDeleteTaskWithSubtasks(task.title.clone(), subtask_count)
        } else {
            Message::ConfirmDeleteTask(task.title.clone())
        };

        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt.to_string())
            .default(false)
            .interact()?;

        if !confirmed {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
    }

    let removed = store.delete(args.id, owner.as_deref())?;
    if removed > 0 {
        msg_success!(Message::TaskDeletedWithSubtasks(args.id, removed));
    } else {
        msg_success!(Message::TaskDeleted(args.id));
    }
    Ok(())
}
