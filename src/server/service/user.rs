use sea_orm::DatabaseConnection;

use crate::server::{data::user::UserRepository, error::AppError, model::user::User};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the users shown on the public starters page.
    pub async fn get_with_starter(&self) -> Result<Vec<User>, AppError> {
        let users = UserRepository::new(self.db).get_with_starter().await?;

        Ok(users)
    }
}
