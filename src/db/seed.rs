//! Fake-profile seeding for the users table.

use rand::Rng;

use super::{queries, Database, DbError};

pub const SEED_USER_COUNT: usize = 5;

const FIRST_NAMES: &[&str] = &[
    "Alice", "Benjamin", "Clara", "Daniel", "Elena", "Felix", "Grace", "Henry", "Isabel", "Jonas",
];

const LAST_NAMES: &[&str] = &[
    "Anderson", "Brooks", "Carter", "Dawson", "Ellis", "Foster", "Griffin", "Hayes", "Ingram",
    "Jennings",
];

/// Insert `SEED_USER_COUNT` generated profiles when the users table is empty.
/// The numeric suffix keeps emails and usernames unique even when the random
/// name pair repeats. Returns true when seeding actually ran.
pub fn seed_users(db: &Database) -> Result<bool, DbError> {
    if queries::count_users(db)? > 0 {
        return Ok(false);
    }

    let mut rng = rand::thread_rng();
    for n in 0..SEED_USER_COUNT {
        let first = FIRST_NAMES[rng.gen_range(0..FIRST_NAMES.len())];
        let last = LAST_NAMES[rng.gen_range(0..LAST_NAMES.len())];
        let email = format!(
            "{}.{}{}@example.com",
            first.to_lowercase(),
            last.to_lowercase(),
            n
        );
        let username = format!("{}{}{}", first.to_lowercase(), last.to_lowercase(), n);
        queries::insert_user(db, first, last, &email, &username)?;
    }

    tracing::info!("seeded {} user profiles", SEED_USER_COUNT);
    Ok(true)
}
