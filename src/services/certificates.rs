use crate::models::{Certificate, NewCertificate, Verification};
use crate::Database;
use anyhow::{bail, Result};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

// Normalized certificate numbers: uppercase alphanumeric groups joined by
// single hyphens, e.g. RA-2024-0117.
static NUMBER_FORMAT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z0-9]+(?:-[A-Z0-9]+)*$").expect("Invalid number pattern"));

/// Canonical form of a certificate number as entered by a visitor:
/// surrounding whitespace dropped, letters uppercased.
pub fn normalize_number(raw: &str) -> String {
    raw.trim().to_ascii_uppercase()
}

pub fn issue_certificate(db: &Database, input: NewCertificate) -> Result<i64> {
    let number = normalize_number(&input.number);
    if number.len() < 4 || number.len() > 32 || !NUMBER_FORMAT.is_match(&number) {
        bail!(
            "Invalid certificate number '{}': 4-32 characters, letters, digits, and single hyphens",
            input.number
        );
    }

    let issued_on = parse_date("issued_on", &input.issued_on)?;
    let expires_on = match &input.expires_on {
        Some(raw) => Some(parse_date("expires_on", raw)?),
        None => None,
    };
    if let Some(expires) = expires_on {
        if expires < issued_on {
            bail!("Certificate {} would expire before it is issued", number);
        }
    }

    let conn = db.get()?;
    conn.execute(
        r#"
        INSERT INTO certificates (number, holder_name, program_title, issued_on, expires_on, revoked)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
        (
            &number,
            &input.holder_name,
            &input.program_title,
            issued_on.to_string(),
            expires_on.map(|d| d.to_string()),
            input.revoked,
        ),
    )?;

    Ok(conn.last_insert_rowid())
}

fn parse_date(field: &str, raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|e| anyhow::anyhow!("Invalid {} date '{}': {}", field, raw, e))
}

/// Lookup by an already-normalized number.
pub fn find_by_number(db: &Database, number: &str) -> Result<Option<Certificate>> {
    let conn = db.get()?;
    let certificate = conn
        .query_row(
            "SELECT id, number, holder_name, program_title, issued_on, expires_on, revoked, created_at
             FROM certificates WHERE number = ?",
            [number],
            row_to_certificate,
        )
        .ok();
    Ok(certificate)
}

/// Verify a number as entered by a visitor against today's date. Returns
/// `None` when no certificate carries the normalized number.
pub fn verify(db: &Database, raw: &str) -> Result<Option<Verification>> {
    let number = normalize_number(raw);
    let today = chrono::Utc::now().date_naive();

    let certificate = match find_by_number(db, &number)? {
        Some(c) => c,
        None => return Ok(None),
    };

    let standing = certificate.standing_on(today);
    Ok(Some(Verification {
        certificate,
        standing,
        checked_on: today,
    }))
}

/// Returns false when no certificate carries the number.
pub fn revoke(db: &Database, raw: &str) -> Result<bool> {
    let number = normalize_number(raw);
    let conn = db.get()?;
    let updated = conn.execute("UPDATE certificates SET revoked = 1 WHERE number = ?", [&number])?;
    Ok(updated > 0)
}

pub fn count_certificates(db: &Database) -> Result<i64> {
    let conn = db.get()?;
    let count = conn.query_row("SELECT COUNT(*) FROM certificates", [], |row| row.get(0))?;
    Ok(count)
}

fn row_to_certificate(row: &rusqlite::Row) -> rusqlite::Result<Certificate> {
    Ok(Certificate {
        id: row.get(0)?,
        number: row.get(1)?,
        holder_name: row.get(2)?,
        program_title: row.get(3)?,
        issued_on: date_column(row, 4)?,
        expires_on: optional_date_column(row, 5)?,
        revoked: row.get(6)?,
        created_at: row.get(7)?,
    })
}

fn date_column(row: &rusqlite::Row, idx: usize) -> rusqlite::Result<NaiveDate> {
    let raw: String = row.get(idx)?;
    raw.parse().map_err(|e: chrono::ParseError| {
        rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
    })
}

fn optional_date_column(row: &rusqlite::Row, idx: usize) -> rusqlite::Result<Option<NaiveDate>> {
    let raw: Option<String> = row.get(idx)?;
    match raw {
        Some(s) => {
            let date = s.parse().map_err(|e: chrono::ParseError| {
                rusqlite::Error::FromSqlConversionFailure(
                    idx,
                    rusqlite::types::Type::Text,
                    Box::new(e),
                )
            })?;
            Ok(Some(date))
        }
        None => Ok(None),
    }
}
