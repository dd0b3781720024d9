use crate::config::types::Config;
use crate::url::Origin;
use crate::ConfigError;

/// Validates a parsed configuration
///
/// Checks that the seed URL can anchor a crawl and that crawler and output
/// settings are internally consistent. All problems are reported as
/// `ConfigError::Validation` with a message naming the offending field.
///
/// # Arguments
///
/// * `config` - The configuration to validate
///
/// # Returns
///
/// * `Ok(())` - Configuration is valid
/// * `Err(ConfigError)` - A field is missing or inconsistent
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.site.seed_url.trim().is_empty() {
        return Err(ConfigError::Validation(
            "site.seed-url must not be empty".to_string(),
        ));
    }

    if let Err(e) = Origin::from_seed(&config.site.seed_url) {
        return Err(ConfigError::Validation(format!(
            "site.seed-url is invalid: {}",
            e
        )));
    }

    if config.crawler.max_concurrent_fetches == 0 {
        return Err(ConfigError::Validation(
            "crawler.max-concurrent-fetches must be at least 1".to_string(),
        ));
    }

    if config.crawler.request_timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "crawler.request-timeout-secs must be at least 1".to_string(),
        ));
    }

    if config.crawler.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "crawler.user-agent must not be empty".to_string(),
        ));
    }

    if let Some(0) = config.crawler.max_pages {
        return Err(ConfigError::Validation(
            "crawler.max-pages must be at least 1 when set".to_string(),
        ));
    }

    for (field, value) in [
        ("output.html-dir", &config.output.html_dir),
        ("output.markdown-dir", &config.output.markdown_dir),
        ("output.sitemap-path", &config.output.sitemap_path),
    ] {
        if value.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "{} must not be empty",
                field
            )));
        }
    }

    if config.output.html_dir == config.output.markdown_dir {
        return Err(ConfigError::Validation(
            "output.html-dir and output.markdown-dir must be different directories".to_string(),
        ));
    }

    Ok(())
}
