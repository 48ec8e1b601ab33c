use crate::config::types::{Config, CrawlConfig, FetcherConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_crawl_config(&config.crawl)?;
    validate_fetcher_config(&config.fetcher)?;
    Ok(())
}

/// Validates crawl configuration
fn validate_crawl_config(config: &CrawlConfig) -> Result<(), ConfigError> {
    let seed = Url::parse(&config.seed_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid seed-url: {}", e)))?;

    if seed.scheme() != "http" && seed.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "seed-url must be http or https, got scheme '{}'",
            seed.scheme()
        )));
    }

    if config.scope_domain.is_empty() {
        return Err(ConfigError::Validation(
            "scope-domain cannot be empty".to_string(),
        ));
    }

    if config.scope_domain.contains("://") || config.scope_domain.contains('/') {
        return Err(ConfigError::Validation(format!(
            "scope-domain must be a bare host substring, got '{}'",
            config.scope_domain
        )));
    }

    if config.page_cap < 1 {
        return Err(ConfigError::Validation(format!(
            "page-cap must be >= 1, got {}",
            config.page_cap
        )));
    }

    Ok(())
}

/// Validates fetcher configuration
fn validate_fetcher_config(config: &FetcherConfig) -> Result<(), ConfigError> {
    if config.request_timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "request-timeout-secs must be >= 1, got {}",
            config.request_timeout_secs
        )));
    }

    if config.user_agent.is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> Config {
        Config {
            crawl: CrawlConfig {
                seed_url: "https://example.com".to_string(),
                scope_domain: "example.com".to_string(),
                page_cap: 50,
            },
            fetcher: FetcherConfig::default(),
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(validate(&valid_config()).is_ok());
    }

    #[test]
    fn test_unparseable_seed_rejected() {
        let mut config = valid_config();
        config.crawl.seed_url = "not a url".to_string();
        assert!(matches!(
            validate(&config).unwrap_err(),
            ConfigError::InvalidUrl(_)
        ));
    }

    #[test]
    fn test_non_http_seed_rejected() {
        let mut config = valid_config();
        config.crawl.seed_url = "ftp://example.com".to_string();
        assert!(matches!(
            validate(&config).unwrap_err(),
            ConfigError::InvalidUrl(_)
        ));
    }

    #[test]
    fn test_empty_scope_domain_rejected() {
        let mut config = valid_config();
        config.crawl.scope_domain = String::new();
        assert!(matches!(
            validate(&config).unwrap_err(),
            ConfigError::Validation(_)
        ));
    }

    #[test]
    fn test_scope_domain_with_scheme_rejected() {
        let mut config = valid_config();
        config.crawl.scope_domain = "https://example.com".to_string();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_scope_domain_with_path_rejected() {
        let mut config = valid_config();
        config.crawl.scope_domain = "example.com/blog".to_string();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_zero_page_cap_rejected() {
        let mut config = valid_config();
        config.crawl.page_cap = 0;
        assert!(matches!(
            validate(&config).unwrap_err(),
            ConfigError::Validation(_)
        ));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = valid_config();
        config.fetcher.request_timeout_secs = 0;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_empty_user_agent_rejected() {
        let mut config = valid_config();
        config.fetcher.user_agent = String::new();
        assert!(validate(&config).is_err());
    }
}
