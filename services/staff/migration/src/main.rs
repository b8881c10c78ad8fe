use sea_orm_migration::prelude::*;

#[tokio::main]
async fn main() {
    cli::run_cli(smarter_staff_migration::Migrator).await;
}
