use rusqlite::params;
use serde::Serialize;

use super::{Database, DbError};

// ---------------------------------------------------------------------------
// Row types: flat structs that map directly to table columns
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct HistoryRow {
    pub id: i64,
    pub instruction: String,
    pub result: String,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct UserRow {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub username: String,
}

// ---------------------------------------------------------------------------
// History queries
// ---------------------------------------------------------------------------

/// Append one (instruction, result) pair. The id is assigned by the store,
/// strictly increasing from 1 across appends.
pub fn append_history(
    db: &Database,
    instruction: &str,
    result: &str,
) -> Result<HistoryRow, DbError> {
    let conn = db.conn();
    let created_at = chrono::Utc::now().to_rfc3339();
    conn.execute(
        "INSERT INTO history (instruction, result, created_at) VALUES (?1, ?2, ?3)",
        params![instruction, result, created_at],
    )?;
    Ok(HistoryRow {
        id: conn.last_insert_rowid(),
        instruction: instruction.to_string(),
        result: result.to_string(),
        created_at,
    })
}

/// All history records, oldest first.
pub fn list_history(db: &Database) -> Result<Vec<HistoryRow>, DbError> {
    let conn = db.conn();
    let mut stmt =
        conn.prepare("SELECT id, instruction, result, created_at FROM history ORDER BY id ASC")?;
    let rows = stmt
        .query_map([], |row| {
            Ok(HistoryRow {
                id: row.get(0)?,
                instruction: row.get(1)?,
                result: row.get(2)?,
                created_at: row.get(3)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

// ---------------------------------------------------------------------------
// User queries
// ---------------------------------------------------------------------------

pub fn insert_user(
    db: &Database,
    first_name: &str,
    last_name: &str,
    email: &str,
    username: &str,
) -> Result<UserRow, DbError> {
    let conn = db.conn();
    conn.execute(
        "INSERT INTO users (first_name, last_name, email, username) VALUES (?1, ?2, ?3, ?4)",
        params![first_name, last_name, email, username],
    )?;
    Ok(UserRow {
        id: conn.last_insert_rowid(),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: email.to_string(),
        username: username.to_string(),
    })
}

pub fn get_user_by_email(db: &Database, email: &str) -> Result<Option<UserRow>, DbError> {
    let conn = db.conn();
    let mut stmt = conn
        .prepare("SELECT id, first_name, last_name, email, username FROM users WHERE email = ?1")?;
    let mut rows = stmt.query_map(params![email], |row| {
        Ok(UserRow {
            id: row.get(0)?,
            first_name: row.get(1)?,
            last_name: row.get(2)?,
            email: row.get(3)?,
            username: row.get(4)?,
        })
    })?;
    match rows.next() {
        Some(row) => Ok(Some(row?)),
        None => Ok(None),
    }
}

pub fn list_users(db: &Database) -> Result<Vec<UserRow>, DbError> {
    let conn = db.conn();
    let mut stmt =
        conn.prepare("SELECT id, first_name, last_name, email, username FROM users ORDER BY id ASC")?;
    let rows = stmt
        .query_map([], |row| {
            Ok(UserRow {
                id: row.get(0)?,
                first_name: row.get(1)?,
                last_name: row.get(2)?,
                email: row.get(3)?,
                username: row.get(4)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

pub fn count_users(db: &Database) -> Result<i64, DbError> {
    let conn = db.conn();
    let count = conn.query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))?;
    Ok(count)
}
