use diesel::prelude::*;
use crate::db::{user::models::*, schema::users::dsl::*};

#[derive(Debug, thiserror::Error)]
pub enum InsertUserError {
    #[error("InsertUser: {source}")]
    InsertUser {
        #[from]
        source: diesel::result::Error,
    },
}

pub fn insert_user(
    conn: &mut SqliteConnection,
    new: &NewUser,
) -> Result<User, InsertUserError> {
    diesel::insert_into(users)
        .values(new)
        .get_result(conn)
        .map_err(|source| InsertUserError::InsertUser { source })
}

#[derive(Debug, thiserror::Error)]
pub enum GetAllUsersError {
    #[error("GetAllUsers: {source}")]
    GetAllUsers {
        #[from]
        source: diesel::result::Error,
    },
}

/// Returns every user, ordered by ascending id (insertion order).
pub fn get_all_users(conn: &mut SqliteConnection) -> Result<Vec<User>, GetAllUsersError> {
    users
        .order(id.asc())
        .load::<User>(conn)
        .map_err(|source| GetAllUsersError::GetAllUsers { source })
}

#[derive(Debug, thiserror::Error)]
pub enum GetUserByIdError {
    #[error("GetUserById: {source}")]
    GetUserById {
        #[from]
        source: diesel::result::Error,
    },
}

pub fn get_user_by_id(
    conn: &mut SqliteConnection,
    user_id_val: i32,
) -> Result<Option<User>, GetUserByIdError> {
    users
        .filter(id.eq(user_id_val))
        .first::<User>(conn)
        .optional()
        .map_err(|source| GetUserByIdError::GetUserById { source })
}

#[derive(Debug, thiserror::Error)]
pub enum DeleteUserByIdError {
    #[error("DeleteUserById: {source}")]
    DeleteUserById {
        #[from]
        source: diesel::result::Error,
    },
}

/// Returns `false` when no row matched the id.
pub fn delete_user_by_id(
    conn: &mut SqliteConnection,
    user_id_val: i32,
) -> Result<bool, DeleteUserByIdError> {
    diesel::delete(users.filter(id.eq(user_id_val)))
        .execute(conn)
        .map(|rows| rows > 0)
        .map_err(|source| DeleteUserByIdError::DeleteUserById { source })
}

#[derive(Debug, thiserror::Error)]
pub enum ResetSchemaError {
    #[error("DropUsersTable: {source}")]
    DropUsersTable {
        source: diesel::result::Error,
    },
    #[error("CreateUsersTable: {source}")]
    CreateUsersTable {
        source: diesel::result::Error,
    },
}

/// Drops and recreates the users table. Destructive.
pub fn reset_schema(conn: &mut SqliteConnection) -> Result<(), ResetSchemaError> {
    diesel::sql_query("DROP TABLE IF EXISTS users")
        .execute(conn)
        .map_err(|source| ResetSchemaError::DropUsersTable { source })?;

    diesel::sql_query(
        "CREATE TABLE users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            sign TEXT NOT NULL,
            horoscope TEXT
        )",
    )
    .execute(conn)
    .map_err(|source| ResetSchemaError::CreateUsersTable { source })?;

    Ok(())
}
