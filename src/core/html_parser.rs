use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate};
use log::debug;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use serde_json::Value;

use crate::model::course::CourseInfo;

fn selector(css: &str) -> Selector {
    Selector::parse(css).unwrap_or_else(|err| panic!("invalid selector {css:?}: {err}"))
}

static LOC: LazyLock<Selector> = LazyLock::new(|| selector("loc"));
static COURSE_NAME: LazyLock<Selector> = LazyLock::new(|| selector(".title.display-3-text"));
static COURSE_LANGUAGE: LazyLock<Selector> = LazyLock::new(|| selector(".language-info"));
static WEEK_VIEW: LazyLock<Selector> = LazyLock::new(|| selector(".rc-WeekView"));
static WEEK: LazyLock<Selector> = LazyLock::new(|| selector(".week"));
static SCRIPT: LazyLock<Selector> = LazyLock::new(|| selector("script"));
static LD_JSON: LazyLock<Selector> =
    LazyLock::new(|| selector(r#"script[type="application/ld+json"]"#));

static AVERAGE_RATING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""averageFiveStarRating":([\d.]+)"#).expect("rating pattern is valid")
});

const APP_STATE_MARKER: &str = "window.App";

fn element_text(element: ElementRef<'_>) -> Option<String> {
    let text = element.text().collect::<String>().trim().to_string();
    if text.is_empty() { None } else { Some(text) }
}

/// Returns the first `amount` URLs listed in a sitemap document.
pub fn parse_sitemap_urls(xml: &str, amount: usize) -> Vec<String> {
    let document = Html::parse_document(xml);
    document
        .select(&LOC)
        .filter_map(element_text)
        .take(amount)
        .collect()
}

pub fn extract_course_name(document: &Html) -> Option<String> {
    document.select(&COURSE_NAME).next().and_then(element_text)
}

pub fn extract_course_language(document: &Html) -> Option<String> {
    document.select(&COURSE_LANGUAGE).next().and_then(element_text)
}

/// Counts the weeks listed in the syllabus block.
pub fn extract_course_duration(document: &Html) -> Option<usize> {
    let week_view = document.select(&WEEK_VIEW).next()?;
    Some(week_view.select(&WEEK).count())
}

/// Reads the rating out of the `window.App` state script.
pub fn extract_average_score(document: &Html) -> Option<f64> {
    let script = document
        .select(&SCRIPT)
        .map(|element| element.text().collect::<String>())
        .find(|text| text.contains(APP_STATE_MARKER))?;

    let raw = AVERAGE_RATING.captures(&script)?.get(1)?.as_str();
    match raw.parse::<f64>() {
        Ok(score) => Some(score),
        Err(err) => {
            debug!("unparseable averageFiveStarRating {raw:?}: {err}");
            None
        }
    }
}

/// Reads `hasCourseInstance[0].startDate` from the page's first ld+json payload.
pub fn extract_start_date(document: &Html) -> Option<String> {
    let payload = document
        .select(&LD_JSON)
        .next()?
        .text()
        .collect::<String>();
    let json = match serde_json::from_str::<Value>(payload.trim()) {
        Ok(json) => json,
        Err(err) => {
            debug!("malformed ld+json payload: {err}");
            return None;
        }
    };
    start_date_from_json(&json).map(|date| normalize_date(&date))
}

fn start_date_from_json(json: &Value) -> Option<String> {
    match json {
        Value::Array(items) => items.iter().find_map(start_date_from_json),
        Value::Object(object) => {
            if let Some(date) = object
                .get("hasCourseInstance")
                .and_then(|instances| instances.get(0))
                .and_then(|instance| instance.get("startDate"))
                .and_then(Value::as_str)
            {
                return Some(date.to_string());
            }
            object.get("@graph").and_then(start_date_from_json)
        }
        _ => None,
    }
}

fn normalize_date(raw: &str) -> String {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%Y-%m-%d").to_string();
    }
    if let Ok(date_time) = DateTime::parse_from_rfc3339(raw) {
        return date_time.date_naive().format("%Y-%m-%d").to_string();
    }
    raw.to_string()
}

pub fn parse_course_info(url: &str, html: &str) -> CourseInfo {
    let document = Html::parse_document(html);
    CourseInfo {
        url: url.to_string(),
        name: extract_course_name(&document),
        language: extract_course_language(&document),
        weeks: extract_course_duration(&document),
        average_score: extract_average_score(&document),
        start_date: extract_start_date(&document),
    }
}
