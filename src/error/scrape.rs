use std::error::Error as StdError;
use std::fmt;

use url::Url;

#[derive(Debug)]
pub struct ScrapeError {
    pub message: String,
    source: Option<Box<dyn StdError + Send + Sync + 'static>>,
}

impl ScrapeError {
    pub fn new(message: &str) -> Self {
        ScrapeError {
            message: message.to_string(),
            source: None,
        }
    }

    /// The sitemap could not be turned into a course list.
    pub fn sitemap(url: &Url, reason: &str) -> Self {
        ScrapeError::new(&format!("sitemap {url}: {reason}"))
    }

    /// The underlying error, if this one was converted from another error.
    pub fn source_error(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.source.as_deref()
    }
}

impl fmt::Display for ScrapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ScrapeError: {}", self.message)
    }
}

impl<E: StdError + Send + Sync + 'static> From<E> for ScrapeError {
    fn from(err: E) -> Self {
        ScrapeError {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_error_has_no_source() {
        let err = ScrapeError::new("sitemap is empty");
        assert_eq!(err.message, "sitemap is empty");
        assert!(err.source_error().is_none());
        assert_eq!(err.to_string(), "ScrapeError: sitemap is empty");
    }

    #[test]
    fn sitemap_error_names_the_feed() {
        let url = Url::parse("https://example.org/sitemap.xml").unwrap();
        let err = ScrapeError::sitemap(&url, "lists no course urls");
        assert_eq!(
            err.message,
            "sitemap https://example.org/sitemap.xml: lists no course urls"
        );
        assert!(err.source_error().is_none());
    }

    #[test]
    fn converted_error_keeps_source() {
        let parse_err = Url::parse("not a url").unwrap_err();
        let err: ScrapeError = parse_err.into();
        assert_eq!(err.message, parse_err.to_string());
        assert!(err.source_error().is_some());
    }
}
