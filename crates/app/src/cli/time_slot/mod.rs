use clap::{Args, Subcommand};

mod create;

#[derive(Debug, Args)]
pub(crate) struct TimeSlotCommand {
    #[command(subcommand)]
    command: TimeSlotSubcommand,
}

#[derive(Debug, Subcommand)]
enum TimeSlotSubcommand {
    Create(create::CreateTimeSlotArgs),
}

pub(crate) async fn run(command: TimeSlotCommand) -> Result<(), String> {
    match command.command {
        TimeSlotSubcommand::Create(args) => create::run(args).await,
    }
}
