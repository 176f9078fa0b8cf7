use clap::{Args, Subcommand};

mod list;

#[derive(Debug, Args)]
pub(crate) struct EmployeeCommand {
    #[command(subcommand)]
    command: EmployeeSubcommand,
}

#[derive(Debug, Subcommand)]
enum EmployeeSubcommand {
    List(list::ListEmployeesArgs),
}

pub(crate) async fn run(command: EmployeeCommand) -> Result<(), String> {
    match command.command {
        EmployeeSubcommand::List(args) => list::run(args).await,
    }
}
