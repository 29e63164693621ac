/**
 * User Model and Database Operations
 *
 * This module handles user records and their storage. It knows nothing
 * about passwords beyond storing the hash it is handed; hashing and
 * verification live in `credentials`.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::shared::Role;

const USER_COLUMNS: &str =
    "id, name, email, password_hash, phone, address, role, is_active, created_at, updated_at";

/// User struct representing a user in the database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// User email address (unique)
    pub email: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub role: Role,
    /// Inactive users cannot log in
    pub is_active: bool,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

/// Fields supplied at registration
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub role: Role,
}

/// User response (without sensitive data)
///
/// Contains user information that is safe to return to clients.
/// Does not include the password hash.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub role: Role,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            phone: user.phone,
            address: user.address,
            role: user.role,
            is_active: user.is_active,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Create a new user
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `new_user` - Registration fields
/// * `password_hash` - Hashed password
///
/// # Returns
/// Created user or error (a unique violation on `email` surfaces as a
/// database error)
pub async fn create_user(
    pool: &SqlitePool,
    new_user: &NewUser,
    password_hash: &str,
) -> Result<User, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    sqlx::query(
        r#"
        INSERT INTO users (id, name, email, password_hash, phone, address, role, is_active, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, 1, ?, ?)
        "#,
    )
    .bind(id)
    .bind(&new_user.name)
    .bind(&new_user.email)
    .bind(password_hash)
    .bind(&new_user.phone)
    .bind(&new_user.address)
    .bind(new_user.role)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await?;

    Ok(User {
        id,
        name: new_user.name.clone(),
        email: new_user.email.clone(),
        password_hash: password_hash.to_string(),
        phone: new_user.phone.clone(),
        address: new_user.address.clone(),
        role: new_user.role,
        is_active: true,
        created_at: now,
        updated_at: now,
    })
}

/// Get user by email
///
/// Matching ignores ASCII case; the column is declared `COLLATE NOCASE`.
///
/// # Returns
/// User or None if not found
pub async fn get_user_by_email(pool: &SqlitePool, email: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users WHERE email = ?"))
        .bind(email)
        .fetch_optional(pool)
        .await
}

/// Get user by ID
///
/// # Returns
/// User or None if not found
pub async fn get_user_by_id(pool: &SqlitePool, id: Uuid) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// All users, newest first
pub async fn list_users(pool: &SqlitePool) -> Result<Vec<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(&format!(
        "SELECT {USER_COLUMNS} FROM users ORDER BY created_at DESC"
    ))
    .fetch_all(pool)
    .await
}

/// Update name/phone/address; `None` keeps the stored value
pub async fn update_profile(
    pool: &SqlitePool,
    id: Uuid,
    name: Option<&str>,
    phone: Option<&str>,
    address: Option<&str>,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query(
        r#"
        UPDATE users
        SET name = COALESCE(?, name), phone = COALESCE(?, phone), address = COALESCE(?, address), updated_at = ?
        WHERE id = ?
        "#,
    )
    .bind(name)
    .bind(phone)
    .bind(address)
    .bind(Utc::now())
    .bind(id)
    .execute(pool)
    .await?;

    get_user_by_id(pool, id).await
}

/// Replace the stored password hash
pub async fn update_password_hash(
    pool: &SqlitePool,
    id: Uuid,
    password_hash: &str,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("UPDATE users SET password_hash = ?, updated_at = ? WHERE id = ?")
        .bind(password_hash)
        .bind(Utc::now())
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

/// Change a user's role
///
/// # Returns
/// Updated user, or None if no such user
pub async fn update_role(pool: &SqlitePool, id: Uuid, role: Role) -> Result<Option<User>, sqlx::Error> {
    let result = sqlx::query("UPDATE users SET role = ?, updated_at = ? WHERE id = ?")
        .bind(role)
        .bind(Utc::now())
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Ok(None);
    }
    get_user_by_id(pool, id).await
}

/// Activate or deactivate a user
///
/// # Returns
/// Updated user, or None if no such user
pub async fn update_status(pool: &SqlitePool, id: Uuid, is_active: bool) -> Result<Option<User>, sqlx::Error> {
    let result = sqlx::query("UPDATE users SET is_active = ?, updated_at = ? WHERE id = ?")
        .bind(is_active)
        .bind(Utc::now())
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Ok(None);
    }
    get_user_by_id(pool, id).await
}

/// Hard-delete a user; owned rows go with it through cascading keys
pub async fn delete_user(pool: &SqlitePool, id: Uuid) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM users WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
