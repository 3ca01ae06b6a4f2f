//! Application configuration initialization command.
//!
//! Runs the interactive setup wizard, or removes `config.json` with `--delete`.

use crate::{
    libs::{config::Config, messages::Message},
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Remove existing configuration instead of creating new one
    #[arg(short, long)]
    delete: bool,
}

pub fn cmd(init_args: InitArgs) -> Result<()> {
    if init_args.delete {
        if Config::delete()? {
            msg_success!(Message::ConfigDeleted);
        } else {
            msg_info!(Message::ConfigFileNotFound);
        }
        return Ok(());
    }

    Config::init()?.save()?;

    msg_success!(Message::ConfigSaved);
    Ok(())
}
