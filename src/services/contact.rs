use crate::models::{ContactMessage, NewContactMessage};
use crate::Database;
use anyhow::Result;
use thiserror::Error;

pub const MAX_BODY_LENGTH: usize = 10_000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContactRejection {
    #[error("Please tell us your name")]
    MissingName,
    #[error("'{0}' does not look like an email address")]
    InvalidEmail(String),
    #[error("The message body is empty")]
    MissingBody,
    #[error("The message is too long ({0} characters; the limit is {MAX_BODY_LENGTH})")]
    BodyTooLong(usize),
}

pub fn validate(message: &NewContactMessage) -> Result<(), ContactRejection> {
    if message.name.trim().is_empty() {
        return Err(ContactRejection::MissingName);
    }
    if !looks_like_email(message.email.trim()) {
        return Err(ContactRejection::InvalidEmail(message.email.clone()));
    }
    if message.body.trim().is_empty() {
        return Err(ContactRejection::MissingBody);
    }
    let body_len = message.body.chars().count();
    if body_len > MAX_BODY_LENGTH {
        return Err(ContactRejection::BodyTooLong(body_len));
    }
    Ok(())
}

// Deliberately loose: one '@' with a dotted domain. Real verification
// would mean sending mail, which a contact form has no business doing.
fn looks_like_email(candidate: &str) -> bool {
    let Some((local, domain)) = candidate.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && domain.contains('.')
        && !candidate.contains(char::is_whitespace)
}

pub fn submit_message(db: &Database, message: &NewContactMessage) -> Result<i64> {
    validate(message).map_err(|e| anyhow::anyhow!("Rejected contact message: {}", e))?;

    let phone = message
        .phone
        .as_deref()
        .map(str::trim)
        .filter(|p| !p.is_empty());

    let conn = db.get()?;
    conn.execute(
        "INSERT INTO contact_messages (name, email, phone, body) VALUES (?, ?, ?, ?)",
        (
            message.name.trim(),
            message.email.trim(),
            phone,
            message.body.trim(),
        ),
    )?;

    Ok(conn.last_insert_rowid())
}

pub fn list_messages(db: &Database, limit: usize, offset: usize) -> Result<Vec<ContactMessage>> {
    let conn = db.get()?;
    let mut stmt = conn.prepare(
        "SELECT id, name, email, phone, body, created_at
         FROM contact_messages ORDER BY created_at DESC LIMIT ? OFFSET ?",
    )?;

    let messages = stmt
        .query_map((limit, offset), |row| {
            Ok(ContactMessage {
                id: row.get(0)?,
                name: row.get(1)?,
                email: row.get(2)?,
                phone: row.get(3)?,
                body: row.get(4)?,
                created_at: row.get(5)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(messages)
}

pub fn count_messages(db: &Database) -> Result<i64> {
    let conn = db.get()?;
    let count = conn.query_row("SELECT COUNT(*) FROM contact_messages", [], |row| row.get(0))?;
    Ok(count)
}
