use clap::Args;
use jiff::Timestamp;
use rostering_app::{
    context::AppContext,
    domain::{tenants::TenantId, time_slots::data::NewTimeSlot},
};

#[derive(Debug, Args)]
pub(crate) struct CreateTimeSlotArgs {
    /// Tenant the time slot belongs to
    #[arg(long)]
    tenant: i64,

    /// Start instant, RFC 3339 (e.g. 2026-03-02T09:00:00Z)
    #[arg(long)]
    start: Timestamp,

    /// End instant, RFC 3339; must be after the start
    #[arg(long)]
    end: Timestamp,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: CreateTimeSlotArgs) -> Result<(), String> {
    let app = AppContext::from_database_url(&args.database_url, false)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let tenant = TenantId::from_i64(args.tenant);

    let id = app
        .time_slots
        .add_time_slot(
            tenant,
            NewTimeSlot {
                tenant_id: tenant,
                start: args.start,
                end: args.end,
            },
        )
        .await
        .map_err(|error| format!("failed to create time slot: {error}"))?;

    println!("time_slot_id: {id}");

    Ok(())
}
