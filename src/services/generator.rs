use crate::config::Config;
use crate::models::PostRecord;
use crate::services::llm::LLMClient;
use crate::services::parser::{paragraphs_to_html, parse_response};
use crate::services::publisher::{IndexUpdate, update_index, write_post};
use crate::services::renderer::{PageContext, render_page};
use crate::utils::{format_date, post_file_name, post_path, slugify};
use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use std::path::PathBuf;

/// What the user asked for.
#[derive(Debug, Clone)]
pub struct PostRequest {
    pub title: String,
    pub details: String,
}

/// A written post page and the index entry that describes it.
#[derive(Debug)]
pub struct Publication {
    pub html_path: PathBuf,
    pub record: PostRecord,
}

pub async fn generate_post(
    request: &PostRequest,
    llm_client: &LLMClient,
    config: &Config,
    date: NaiveDate,
) -> Result<Publication> {
    // Step 1: Ask the model for the post
    let raw = llm_client
        .generate_post(&request.title, &request.details)
        .await
        .context("An error occurred during content generation")?;

    // Step 2: Split the reply into title, summary and paragraphs
    let content = parse_response(&raw);
    tracing::debug!(
        chars = content.raw_text.len(),
        paragraphs = content.body_paragraphs.len(),
        "parsed generated content"
    );
    let body_html = paragraphs_to_html(&content.body_paragraphs, config.escape_html);

    // Step 3: Render and write the page
    let date_str = format_date(date);
    let html = render_page(
        &PageContext {
            page_title: &request.title,
            post_title: &content.title,
            summary: &content.summary,
            body_html: &body_html,
            date: &date_str,
            year: date.year(),
        },
        config.escape_html,
    );

    let slug = slugify(&request.title);
    let html_path = post_path(&config.posts_dir, &slug, date);
    write_post(&html_path, &html).context("Error writing HTML file")?;

    let record = PostRecord {
        title: content.title,
        excerpt: content.summary,
        link: config.post_link(&post_file_name(&slug, date)),
        date: date_str,
    };

    Ok(Publication { html_path, record })
}

/// Adds a published post to the listing index. Failing here leaves the page
/// from [`generate_post`] in place.
pub fn record_post(config: &Config, record: &PostRecord) -> Result<IndexUpdate> {
    let update = update_index(&config.index_file, record).context("Error writing JSON file");
    if let Err(e) = &update {
        tracing::warn!(error = ?e, "index update failed");
    }
    update
}
