use clap::Args;
use rostering_app::{context::AppContext, domain::tenants::TenantId};

#[derive(Debug, Args)]
pub(crate) struct ListEmployeesArgs {
    /// Tenant whose employees are listed
    #[arg(long)]
    tenant: i64,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: ListEmployeesArgs) -> Result<(), String> {
    let app = AppContext::from_database_url(&args.database_url, false)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let employees = app
        .employees
        .list_employees(TenantId::from_i64(args.tenant))
        .await
        .map_err(|error| format!("failed to list employees: {error}"))?;

    for employee in employees {
        let skills: Vec<&str> = employee
            .skill_proficiencies
            .iter()
            .map(|proficiency| proficiency.skill.as_str())
            .collect();

        println!("{}\t{}\t{}", employee.id, employee.name, skills.join(", "));
    }

    Ok(())
}
