use anyhow::Context as _;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, SqlErr,
};

use smarter_domain::staff::StaffRole;
use smarter_staff_schema::staff;

use crate::domain::repository::StaffRepository;
use crate::domain::types::StaffRecord;
use crate::error::StaffServiceError;

#[derive(Clone)]
pub struct DbStaffRepository {
    pub db: DatabaseConnection,
}

impl StaffRepository for DbStaffRepository {
    async fn find_by_user_id(
        &self,
        user_id: &str,
    ) -> Result<Option<StaffRecord>, StaffServiceError> {
        let model = staff::Entity::find()
            .filter(staff::Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .context("find staff by user id")?;
        Ok(model.map(staff_from_model).transpose()?)
    }

    async fn email_exists(&self, email: &str) -> Result<bool, StaffServiceError> {
        let count = staff::Entity::find()
            .filter(staff::Column::Email.eq(email))
            .count(&self.db)
            .await
            .context("count staff by email")?;
        Ok(count > 0)
    }

    async fn create(&self, record: &StaffRecord) -> Result<(), StaffServiceError> {
        staff::ActiveModel {
            id: Set(record.id),
            user_id: Set(record.user_id.clone()),
            first_name: Set(record.first_name.clone()),
            last_name: Set(record.last_name.clone()),
            email: Set(record.email.clone()),
            role: Set(record.role.as_str().to_owned()),
            password_hash: Set(record.password_hash.clone()),
            hospital_name: Set(record.hospital_name.clone()),
            hospital_id: Set(record.hospital_id.clone()),
            approved_by: Set(record.approved_by.clone()),
            created_at: Set(record.created_at),
        }
        .insert(&self.db)
        .await
        .map_err(map_insert_error)?;
        Ok(())
    }
}

/// Unique-index violations become duplicate errors; the violated index is
/// identified by name (`idx_staff_email`) or column (`staff.email`).
fn map_insert_error(err: DbErr) -> StaffServiceError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(msg)) if msg.contains("email") => {
            StaffServiceError::DuplicateEmail
        }
        Some(SqlErr::UniqueConstraintViolation(_)) => StaffServiceError::DuplicateUserId,
        _ => StaffServiceError::Internal(anyhow::Error::new(err).context("insert staff")),
    }
}

fn staff_from_model(model: staff::Model) -> anyhow::Result<StaffRecord> {
    let role = model
        .role
        .parse::<StaffRole>()
        .with_context(|| format!("stored role for staff {}", model.user_id))?;
    Ok(StaffRecord {
        id: model.id,
        user_id: model.user_id,
        first_name: model.first_name,
        last_name: model.last_name,
        email: model.email,
        role,
        password_hash: model.password_hash,
        hospital_name: model.hospital_name,
        hospital_id: model.hospital_id,
        approved_by: model.approved_by,
        created_at: model.created_at,
    })
}
