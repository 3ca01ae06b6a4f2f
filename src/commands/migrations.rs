use crate::{
    db::{
        db::Db,
        migrations::{get_db_version, needs_migration},
    },
    libs::{config::Config, data_storage::DataStorage, messages::Message},
    msg_info, msg_print, msg_warning,
};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct MigrationsArgs {
    #[command(subcommand)]
    command: MigrationsCommand,
}

#[derive(Debug, Subcommand)]
enum MigrationsCommand {
    /// Show current database version
    Status,
}

pub fn cmd(args: MigrationsArgs) -> Result<()> {
    let config = Config::read()?;
    let db_file_path = DataStorage::new().get_path(&config.db_file_name())?;
    let Some(conn) = Db::open_existing(&db_file_path)? else {
        msg_warning!(Message::DatabaseNotFound(db_file_path.display().to_string()));
        return Ok(());
    };

    match args.command {
        MigrationsCommand::Status => {
            let version = get_db_version(&conn)?;

            msg_print!(Message::DatabaseVersion(version));
            if needs_migration(&conn)? {
                msg_info!(Message::DatabaseNeedsUpdate);
            } else {
                msg_info!(Message::DatabaseUpToDate);
            }
        }
    }

    Ok(())
}
