use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Staff::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Staff::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Staff::UserId).string().not_null())
                    .col(ColumnDef::new(Staff::FirstName).string().not_null())
                    .col(ColumnDef::new(Staff::LastName).string().not_null())
                    .col(ColumnDef::new(Staff::Email).string().not_null())
                    .col(ColumnDef::new(Staff::Role).string_len(16).not_null())
                    .col(ColumnDef::new(Staff::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Staff::HospitalName).string().not_null())
                    .col(ColumnDef::new(Staff::HospitalId).string().not_null())
                    .col(ColumnDef::new(Staff::ApprovedBy).string())
                    .col(
                        ColumnDef::new(Staff::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Unique indexes are the source of truth for userID/email uniqueness;
        // the repository maps violations of these names back to duplicate errors.
        manager
            .create_index(
                Index::create()
                    .table(Staff::Table)
                    .col(Staff::UserId)
                    .name("idx_staff_user_id")
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(Staff::Table)
                    .col(Staff::Email)
                    .name("idx_staff_email")
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(Staff::Table)
                    .col(Staff::HospitalId)
                    .name("idx_staff_hospital_id")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Staff::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Staff {
    Table,
    Id,
    UserId,
    FirstName,
    LastName,
    Email,
    Role,
    PasswordHash,
    HospitalName,
    HospitalId,
    ApprovedBy,
    CreatedAt,
}
