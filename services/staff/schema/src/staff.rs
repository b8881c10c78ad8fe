use sea_orm::entity::prelude::*;

/// One row per medical staff member.
/// `user_id` and `email` carry unique indexes; those indexes, not the
/// registration pre-checks, are the authority on uniqueness.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "staff")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    #[sea_orm(unique)]
    pub email: String,
    /// Lower-case role name (`admin`, `doctor`, `nurse`, `supervisor`).
    pub role: String,
    pub password_hash: String,
    pub hospital_name: String,
    pub hospital_id: String,
    /// `user_id` of the staff member whose credentials approved this record.
    pub approved_by: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
