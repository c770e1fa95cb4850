use chrono::NaiveDate;
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

// Anything that is not a letter, a number or a hyphen. Combining marks (Mn,
// Mc) are not letters and are dropped.
static SLUG_STRIP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\p{N}-]").expect("slug pattern is valid"));

/// Turns a human title into a file-safe slug: lowercased, spaces and slashes
/// become hyphens, everything else that isn't alphanumeric is dropped.
/// Consecutive hyphens are left as they are.
pub fn slugify(title: &str) -> String {
    let hyphenated = title.to_lowercase().replace([' ', '/'], "-");
    SLUG_STRIP.replace_all(&hyphenated, "").into_owned()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn post_file_name(slug: &str, date: NaiveDate) -> String {
    format!("blog_{}_{}.html", slug, format_date(date))
}

pub fn post_path(posts_dir: &Path, slug: &str, date: NaiveDate) -> PathBuf {
    posts_dir.join(post_file_name(slug, date))
}
