use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use crate::core::spreadsheet::SheetLayout;

pub const DEFAULT_SITEMAP_URL: &str = "https://www.coursera.org/sitemap~www~courses.xml";
pub const DEFAULT_AMOUNT: usize = 20;
pub const DEFAULT_OUTPUT: &str = "courses.xlsx";
pub const DEFAULT_COLUMN_WIDTH: u16 = 40;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const XLSX_EXTENSION: &str = ".xlsx";

#[derive(Debug, Clone)]
pub struct Config {
    pub amount: usize,
    pub output: PathBuf,
    pub layout: SheetLayout,
    pub sitemap_url: Url,
    pub timeout: Duration,
    pub rotate_user_agent: bool,
    pub use_system_proxy: bool,
    pub print_json: bool,
}

impl Config {
    pub fn for_sitemap(sitemap_url: Url) -> Self {
        Config {
            amount: DEFAULT_AMOUNT,
            output: PathBuf::from(DEFAULT_OUTPUT),
            layout: SheetLayout::default(),
            sitemap_url,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            rotate_user_agent: false,
            use_system_proxy: true,
            print_json: false,
        }
    }
}

pub fn append_xlsx_extension_if_needed(file_name: &str) -> String {
    if file_name.to_ascii_lowercase().ends_with(XLSX_EXTENSION) {
        file_name.to_string()
    } else {
        format!("{file_name}{XLSX_EXTENSION}")
    }
}
