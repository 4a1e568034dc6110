use crate::db::postgres_service::PostgresService;
use crate::types::{error::AppError, user::DBUserCreate};
use chrono::Utc;
use entity::user::{ActiveModel as UserActive, Entity as User, Model as UserModel};
use sea_orm::{
    ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set, SqlErr,
};

impl PostgresService {
    pub async fn user_exists_by_email(&self, email: &str) -> Result<bool, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Email.eq(email))
            .count(&self.db)
            .await?
            > 0)
    }

    pub async fn get_all_users(&self) -> Result<Vec<UserModel>, AppError> {
        Ok(User::find()
            .order_by_asc(entity::user::Column::Id)
            .all(&self.db)
            .await?)
    }

    pub async fn get_user_by_id(&self, id: i32) -> Result<UserModel, AppError> {
        Ok(User::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?)
    }

    pub async fn get_user_by_email(&self, email: &str) -> Result<UserModel, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(&self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?)
    }

    /// Registration: insert the record. The unique index on email is the
    /// authoritative duplicate check; a violation surfaces as the same
    /// validation error the pre-insert lookup would have produced.
    pub async fn create_user(&self, payload: DBUserCreate) -> Result<i32, AppError> {
        let now = Utc::now();

        let inserted = User::insert(UserActive {
            name: Set(payload.name),
            email: Set(payload.email),
            password: Set(payload.password),
            role: Set(payload.role),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        })
        .exec(&self.db)
        .await
        .map_err(|e| match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => AppError::Validation(vec![
                "emailError: Email already exists in the database".to_string(),
            ]),
            _ => AppError::from(e),
        })?;

        Ok(inserted.last_insert_id)
    }

    /// Deletion is unconditional: deleting an id that does not exist is
    /// still a success, matching the delete endpoint's contract.
    pub async fn delete_user_by_id(&self, id: i32) -> Result<(), AppError> {
        User::delete_by_id(id).exec(&self.db).await?;
        Ok(())
    }
}
