use anyhow::Result;
use std::path::PathBuf;

pub async fn run(path: PathBuf, name: Option<String>) -> Result<()> {
    let site_name = name.unwrap_or_else(|| "Ridgeline Advisory".to_string());

    std::fs::create_dir_all(&path)?;
    std::fs::create_dir_all(path.join("data"))?;

    let config = format!(
        r#"[site]
title = "{}"
description = "Audit, compliance and training for organisations that want certainty."
url = "http://localhost:3000"
language = "en"

[server]
host = "127.0.0.1"
port = 3000

[database]
path = "./data/ridgeline.db"

[content]
summary_length = 160

[homepage]
hero_heading = "Advisory that moves the needle"
hero_tagline = "Audit, compliance and training for organisations that want certainty."
hero_cta_label = "Talk to us"
hero_cta_href = "/contact"
sections_order = ["hero", "services", "training", "certificates", "contact"]

[contact]
email = "hello@example.com"
phone = "+1 555 0100"
address = "12 Ridgeline Way, Suite 400"

[api]
default_page_size = 20
max_page_size = 100
"#,
        site_name
    );

    std::fs::write(path.join("ridgeline.toml"), config)?;

    tracing::info!("Created new Ridgeline site at {:?}", path);
    tracing::info!("Run 'ridgeline serve' to start the server");

    Ok(())
}
