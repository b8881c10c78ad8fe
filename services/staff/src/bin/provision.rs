//! Operator tool: create a supervisor record directly in the credential store.
//!
//! Supervisors approve admin registrations and cannot register themselves.

use anyhow::Context as _;
use clap::Parser;
use sea_orm::Database;

use smarter_core::tracing::init_tracing;
use smarter_staff::config::BCRYPT_COST_RANGE;
use smarter_staff::domain::types::StaffDetails;
use smarter_staff::error::StaffServiceError;
use smarter_staff::infra::db::DbStaffRepository;
use smarter_staff::infra::hasher::BcryptHasher;
use smarter_staff::usecase::register::ProvisionSupervisorUseCase;

#[derive(Parser, Debug)]
#[command(name = "staff-provision", about = "Provision a supervisor account")]
struct Args {
    /// Credential store connection URL.
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// bcrypt cost factor.
    #[arg(long, env = "BCRYPT_COST", default_value_t = 10)]
    bcrypt_cost: u32,

    #[arg(long = "user-id")]
    user_id: String,

    #[arg(long)]
    first_name: String,

    #[arg(long)]
    last_name: String,

    #[arg(long)]
    email: String,

    #[arg(long, env = "SUPERVISOR_PASSWORD", hide_env_values = true)]
    password: String,

    #[arg(long)]
    hospital_name: String,

    #[arg(long = "hospital-id")]
    hospital_id: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing("info,sqlx=warn");
    let args = Args::parse();
    anyhow::ensure!(
        BCRYPT_COST_RANGE.contains(&args.bcrypt_cost),
        "--bcrypt-cost must be within {}..={}",
        BCRYPT_COST_RANGE.start(),
        BCRYPT_COST_RANGE.end()
    );

    let db = Database::connect(&args.database_url)
        .await
        .context("connect to credential store")?;

    let usecase = ProvisionSupervisorUseCase {
        staff: DbStaffRepository { db },
        hasher: BcryptHasher {
            cost: args.bcrypt_cost,
        },
    };
    let profile = usecase
        .execute(StaffDetails {
            user_id: args.user_id,
            first_name: args.first_name,
            last_name: args.last_name,
            email: args.email,
            password: args.password,
            hospital_name: args.hospital_name,
            hospital_id: args.hospital_id,
        })
        .await
        .map_err(|e| match e {
            StaffServiceError::Internal(inner) => inner,
            other => anyhow::anyhow!("{other} ({})", other.kind()),
        })?;

    println!(
        "provisioned supervisor {} ({}) at {}",
        profile.user_id,
        profile.display_name(),
        profile.hospital_name
    );
    Ok(())
}
