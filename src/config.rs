use anyhow::{Result, anyhow};
use std::fmt;
use std::path::PathBuf;

pub const API_KEY_VAR: &str = "GEMINI_API_KEY";
const DEFAULT_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_POSTS_DIR: &str = "posts";
const DEFAULT_INDEX_FILE: &str = "blog-posts.json";
const DEFAULT_LINK_BASE: &str = "christinagjordan.github.io";

/// Everything one run needs, resolved from the environment up front.
#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub model: String,
    pub api_url: String,
    pub posts_dir: PathBuf,
    pub index_file: PathBuf,
    pub link_base: String,
    pub escape_html: bool,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("api_url", &self.api_url)
            .field("posts_dir", &self.posts_dir)
            .field("index_file", &self.index_file)
            .field("link_base", &self.link_base)
            .field("escape_html", &self.escape_html)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR)
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                anyhow!(
                    "{} environment variable not set. Please ensure it is in your .env file.",
                    API_KEY_VAR
                )
            })?;

        let or_default =
            |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Ok(Config {
            api_key,
            model: or_default("GEMINI_MODEL", DEFAULT_MODEL),
            api_url: or_default("GEMINI_API_URL", DEFAULT_API_URL)
                .trim_end_matches('/')
                .to_string(),
            posts_dir: PathBuf::from(or_default("BLOG_POSTS_DIR", DEFAULT_POSTS_DIR)),
            index_file: PathBuf::from(or_default("BLOG_INDEX_FILE", DEFAULT_INDEX_FILE)),
            link_base: or_default("BLOG_LINK_BASE", DEFAULT_LINK_BASE),
            escape_html: lookup("BLOG_ESCAPE_HTML").is_some_and(|v| is_truthy(&v)),
        })
    }

    /// The index `link` for a page file name.
    pub fn post_link(&self, file_name: &str) -> String {
        let base = self.link_base.trim_end_matches('/');
        if base.is_empty() {
            file_name.to_string()
        } else {
            format!("{}/{}", base, file_name)
        }
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_missing_api_key_is_an_error() {
        let err = Config::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(err.to_string().contains("GEMINI_API_KEY environment variable not set"));
    }

    #[test]
    fn test_empty_api_key_is_an_error() {
        assert!(Config::from_lookup(lookup_from(&[("GEMINI_API_KEY", "")])).is_err());
    }

    #[test]
    fn test_defaults_apply_when_only_key_is_set() {
        let config = Config::from_lookup(lookup_from(&[("GEMINI_API_KEY", "abc")])).unwrap();
        assert_eq!(config.api_key, "abc");
        assert_eq!(config.model, "gemini-2.5-flash");
        assert_eq!(config.api_url, "https://generativelanguage.googleapis.com/v1beta");
        assert_eq!(config.posts_dir, PathBuf::from("posts"));
        assert_eq!(config.index_file, PathBuf::from("blog-posts.json"));
        assert!(!config.escape_html);
    }

    #[test]
    fn test_overrides_are_read() {
        let config = Config::from_lookup(lookup_from(&[
            ("GEMINI_API_KEY", "abc"),
            ("GEMINI_MODEL", "gemini-pro"),
            ("GEMINI_API_URL", "http://localhost:9000/"),
            ("BLOG_POSTS_DIR", "out/posts"),
            ("BLOG_INDEX_FILE", "out/index.json"),
            ("BLOG_LINK_BASE", ""),
            ("BLOG_ESCAPE_HTML", "Yes"),
        ]))
        .unwrap();
        assert_eq!(config.model, "gemini-pro");
        assert_eq!(config.api_url, "http://localhost:9000");
        assert_eq!(config.posts_dir, PathBuf::from("out/posts"));
        assert_eq!(config.index_file, PathBuf::from("out/index.json"));
        assert!(config.escape_html);
        assert_eq!(config.post_link("blog_a_2024-01-01.html"), "blog_a_2024-01-01.html");
    }

    #[test]
    fn test_post_link_joins_base_and_file_name() {
        let config = Config::from_lookup(lookup_from(&[("GEMINI_API_KEY", "abc")])).unwrap();
        assert_eq!(
            config.post_link("blog_a_2024-01-01.html"),
            "christinagjordan.github.io/blog_a_2024-01-01.html"
        );
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = Config::from_lookup(lookup_from(&[("GEMINI_API_KEY", "secret")])).unwrap();
        assert!(!format!("{:?}", config).contains("secret"));
    }
}
