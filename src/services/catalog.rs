use crate::models::{
    ListingStatus, NewCertificate, NewProgram, NewService, ProgramLevel, Service, TrainingProgram,
};
use crate::services::certificates;
use crate::services::markdown;
use crate::services::slug::{generate_slug, validate_slug};
use crate::Database;
use anyhow::{bail, Result};
use serde::Deserialize;

pub fn create_service(db: &Database, input: NewService, summary_length: usize) -> Result<i64> {
    let slug = resolve_slug(input.slug.as_deref(), &input.title)?;
    let body_html = markdown::render(&input.body_markdown);
    let summary = input
        .summary
        .unwrap_or_else(|| markdown::plain_text_summary(&input.body_markdown, summary_length));

    let conn = db.get()?;
    conn.execute(
        r#"
        INSERT INTO services (slug, title, summary, body_markdown, body_html, status, display_order)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        "#,
        (
            &slug,
            &input.title,
            &summary,
            &input.body_markdown,
            &body_html,
            input.status.to_string(),
            input.display_order,
        ),
    )?;

    Ok(conn.last_insert_rowid())
}

pub fn create_program(db: &Database, input: NewProgram, summary_length: usize) -> Result<i64> {
    let slug = resolve_slug(input.slug.as_deref(), &input.title)?;
    let body_html = markdown::render(&input.body_markdown);
    let summary = input
        .summary
        .unwrap_or_else(|| markdown::plain_text_summary(&input.body_markdown, summary_length));

    let conn = db.get()?;
    conn.execute(
        r#"
        INSERT INTO training_programs (slug, title, summary, body_markdown, body_html, level, duration_days, status, display_order)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
        (
            &slug,
            &input.title,
            &summary,
            &input.body_markdown,
            &body_html,
            input.level.to_string(),
            input.duration_days,
            input.status.to_string(),
            input.display_order,
        ),
    )?;

    Ok(conn.last_insert_rowid())
}

/// Use the supplied slug, or derive one from the title. A title that derives
/// to nothing ("!!!", whitespace) is rejected rather than silently stored
/// under an empty slug; the author must supply one explicitly.
fn resolve_slug(supplied: Option<&str>, title: &str) -> Result<String> {
    let slug = match supplied {
        Some(s) => s.to_string(),
        None => {
            let derived = generate_slug(title);
            if derived.is_empty() {
                bail!(
                    "Cannot derive a slug from title '{}'; supply a slug explicitly",
                    title
                );
            }
            derived
        }
    };

    if !validate_slug(&slug) {
        bail!("Invalid slug '{}': lowercase letters, numbers, and single hyphens only", slug);
    }

    Ok(slug)
}

pub fn get_service_by_slug(db: &Database, slug: &str) -> Result<Option<Service>> {
    let conn = db.get()?;
    let service = conn
        .query_row(
            "SELECT id, slug, title, summary, body_markdown, body_html, status, display_order, created_at, updated_at
             FROM services WHERE slug = ?",
            [slug],
            row_to_service,
        )
        .ok();
    Ok(service)
}

pub fn get_program_by_slug(db: &Database, slug: &str) -> Result<Option<TrainingProgram>> {
    let conn = db.get()?;
    let program = conn
        .query_row(
            "SELECT id, slug, title, summary, body_markdown, body_html, level, duration_days, status, display_order, created_at, updated_at
             FROM training_programs WHERE slug = ?",
            [slug],
            row_to_program,
        )
        .ok();
    Ok(program)
}

pub fn list_published_services(db: &Database, limit: usize, offset: usize) -> Result<Vec<Service>> {
    let conn = db.get()?;
    let mut stmt = conn.prepare(
        "SELECT id, slug, title, summary, body_markdown, body_html, status, display_order, created_at, updated_at
         FROM services WHERE status = 'published' ORDER BY display_order, title LIMIT ? OFFSET ?",
    )?;

    let services = stmt
        .query_map((limit, offset), row_to_service)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(services)
}

pub fn list_published_programs(
    db: &Database,
    limit: usize,
    offset: usize,
) -> Result<Vec<TrainingProgram>> {
    let conn = db.get()?;
    let mut stmt = conn.prepare(
        "SELECT id, slug, title, summary, body_markdown, body_html, level, duration_days, status, display_order, created_at, updated_at
         FROM training_programs WHERE status = 'published' ORDER BY display_order, title LIMIT ? OFFSET ?",
    )?;

    let programs = stmt
        .query_map((limit, offset), row_to_program)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(programs)
}

pub fn count_published_services(db: &Database) -> Result<i64> {
    let conn = db.get()?;
    let count = conn.query_row(
        "SELECT COUNT(*) FROM services WHERE status = 'published'",
        [],
        |row| row.get(0),
    )?;
    Ok(count)
}

pub fn count_published_programs(db: &Database) -> Result<i64> {
    let conn = db.get()?;
    let count = conn.query_row(
        "SELECT COUNT(*) FROM training_programs WHERE status = 'published'",
        [],
        |row| row.get(0),
    )?;
    Ok(count)
}

pub fn count_services(db: &Database) -> Result<i64> {
    let conn = db.get()?;
    let count = conn.query_row("SELECT COUNT(*) FROM services", [], |row| row.get(0))?;
    Ok(count)
}

pub fn count_programs(db: &Database) -> Result<i64> {
    let conn = db.get()?;
    let count = conn.query_row("SELECT COUNT(*) FROM training_programs", [], |row| row.get(0))?;
    Ok(count)
}

#[derive(Deserialize)]
struct StarterContent {
    services: Vec<NewService>,
    programs: Vec<NewProgram>,
    certificates: Vec<NewCertificate>,
}

/// Populate an empty database from the embedded starter content so a fresh
/// site renders something. Returns false without touching anything when the
/// database already has content.
pub fn seed_starter_content(db: &Database, summary_length: usize) -> Result<bool> {
    if count_services(db)? > 0
        || count_programs(db)? > 0
        || certificates::count_certificates(db)? > 0
    {
        return Ok(false);
    }

    let starter: StarterContent = serde_json::from_str(include_str!("../../content/starter.json"))?;

    for service in starter.services {
        create_service(db, service, summary_length)?;
    }
    for program in starter.programs {
        create_program(db, program, summary_length)?;
    }
    for certificate in starter.certificates {
        certificates::issue_certificate(db, certificate)?;
    }

    Ok(true)
}

fn row_to_service(row: &rusqlite::Row) -> rusqlite::Result<Service> {
    Ok(Service {
        id: row.get(0)?,
        slug: row.get(1)?,
        title: row.get(2)?,
        summary: row.get(3)?,
        body_markdown: row.get(4)?,
        body_html: row.get(5)?,
        status: row
            .get::<_, String>(6)?
            .parse()
            .unwrap_or(ListingStatus::Draft),
        display_order: row.get(7)?,
        created_at: row.get(8)?,
        updated_at: row.get(9)?,
    })
}

fn row_to_program(row: &rusqlite::Row) -> rusqlite::Result<TrainingProgram> {
    Ok(TrainingProgram {
        id: row.get(0)?,
        slug: row.get(1)?,
        title: row.get(2)?,
        summary: row.get(3)?,
        body_markdown: row.get(4)?,
        body_html: row.get(5)?,
        level: row
            .get::<_, String>(6)?
            .parse()
            .unwrap_or(ProgramLevel::Foundation),
        duration_days: row.get(7)?,
        status: row
            .get::<_, String>(8)?
            .parse()
            .unwrap_or(ListingStatus::Draft),
        display_order: row.get(9)?,
        created_at: row.get(10)?,
        updated_at: row.get(11)?,
    })
}
