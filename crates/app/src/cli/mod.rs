use clap::{Parser, Subcommand};

mod db;
mod employee;
mod time_slot;

#[derive(Debug, Parser)]
#[command(name = "rostering-app", about = "Rostering CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Db(db::DbCommand),
    Employee(employee::EmployeeCommand),
    TimeSlot(time_slot::TimeSlotCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Db(command) => db::run(command).await,
            Commands::Employee(command) => employee::run(command).await,
            Commands::TimeSlot(command) => time_slot::run(command).await,
        }
    }
}
