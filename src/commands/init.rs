//! Application configuration initialization command.
//!
//! Runs the interactive setup wizard and writes the resulting
//! configuration to the platform data directory.

use crate::{
    libs::{config::Config, messages::Message},
    msg_success,
};
use anyhow::Result;

pub fn cmd() -> Result<()> {
    Config::init()?.save()?;

    msg_success!(Message::ConfigSaved);
    Ok(())
}
