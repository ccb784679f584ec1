//! URL helper functions

use crate::config::SiteConfig;

/// Generate a URL with the root path
///
/// # Examples
/// ```ignore
/// url_for(&config, "/css/style.css") // -> "/book/css/style.css"
/// ```
pub fn url_for(config: &SiteConfig, path: &str) -> String {
    let root = config.root.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", root)
    } else {
        format!("{}/{}", root, path)
    }
}

/// Pretty URL of a content route: root-prefixed, with a trailing slash
///
/// # Examples
/// ```ignore
/// page_url(&config, "/ch2/s3") // -> "/book/ch2/s3/"
/// ```
pub fn page_url(config: &SiteConfig, route: &str) -> String {
    let url = url_for(config, route);
    if url.ends_with('/') {
        url
    } else {
        format!("{}/", url)
    }
}

/// Generate a full URL including the domain
pub fn full_url_for(config: &SiteConfig, path: &str) -> String {
    let base = config.url.trim_end_matches('/');
    format!("{}{}", base, url_for(config, path))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> SiteConfig {
        SiteConfig {
            url: "https://example.com".to_string(),
            root: "/book/".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_url_for() {
        let config = test_config();
        assert_eq!(url_for(&config, "/css/style.css"), "/book/css/style.css");
        assert_eq!(url_for(&config, ""), "/book/");
    }

    #[test]
    fn test_page_url() {
        let config = test_config();
        assert_eq!(page_url(&config, "/ch2/s3"), "/book/ch2/s3/");
        assert_eq!(page_url(&config, "/contents"), "/book/contents/");
    }

    #[test]
    fn test_full_url_for() {
        let config = test_config();
        assert_eq!(
            full_url_for(&config, "/contents/"),
            "https://example.com/book/contents/"
        );
    }
}
