use log::{debug, info, warn};
use reqwest::header::{ACCEPT_LANGUAGE, HeaderMap, HeaderValue};
use reqwest::{Client, StatusCode};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use url::Url;

use crate::config::Config;
use crate::core::html_parser;
use crate::error::scrape::ScrapeError;
use crate::http::log_middleware::LogMiddleware;
use crate::http::user_agent_middleware::UserAgentMiddleware;
use crate::model::course::CourseInfo;

pub struct Coursera {
    client: ClientWithMiddleware,
    sitemap_url: Url,
}

impl Coursera {
    pub fn new(config: &Config) -> Result<Self, ScrapeError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));

        let mut builder = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout);
        if !config.use_system_proxy {
            builder = builder.no_proxy();
        }
        let client = builder.build()?;

        let client = ClientBuilder::new(client)
            .with(UserAgentMiddleware {
                rotate: config.rotate_user_agent,
            })
            .with(LogMiddleware)
            .build();

        Ok(Coursera {
            client,
            sitemap_url: config.sitemap_url.clone(),
        })
    }

    /// Fetches a page as UTF-8. Any status other than 200 yields `None`.
    pub async fn get_page(&self, url: &str) -> Result<Option<String>, ScrapeError> {
        let response = self.client.get(url).send().await?;
        if response.status() != StatusCode::OK {
            return Ok(None);
        }
        let bytes = response.bytes().await?;
        Ok(Some(String::from_utf8_lossy(&bytes).into_owned()))
    }

    /// Returns at most `amount` course URLs from the sitemap.
    pub async fn get_courses_list(&self, amount: usize) -> Result<Vec<String>, ScrapeError> {
        let Some(xml) = self.get_page(self.sitemap_url.as_str()).await? else {
            return Err(ScrapeError::sitemap(
                &self.sitemap_url,
                "did not answer with 200 OK",
            ));
        };

        let urls = html_parser::parse_sitemap_urls(&xml, amount);
        if urls.is_empty() {
            return Err(ScrapeError::sitemap(&self.sitemap_url, "lists no course urls"));
        }
        info!("sitemap gave {} course urls", urls.len());
        Ok(urls)
    }

    /// Never fails: an unreachable page becomes an all-placeholder record.
    pub async fn get_course_info(&self, url: &str) -> CourseInfo {
        match self.get_page(url).await {
            Ok(Some(html)) => {
                let course = html_parser::parse_course_info(url, &html);
                let missing = course.missing_fields();
                if missing > 0 {
                    debug!("{url}: {missing} field(s) fell back to placeholder");
                }
                course
            }
            Ok(None) => {
                warn!("{url}: page unavailable, writing placeholders");
                CourseInfo::empty(url)
            }
            Err(err) => {
                warn!("{url}: {err}, writing placeholders");
                CourseInfo::empty(url)
            }
        }
    }

    pub async fn parse_courses(&self, urls: &[String]) -> Vec<CourseInfo> {
        let mut courses = Vec::with_capacity(urls.len());
        for (index, url) in urls.iter().enumerate() {
            info!("[{}/{}] {}", index + 1, urls.len(), url);
            courses.push(self.get_course_info(url).await);
        }
        courses
    }
}
