use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use url::Url;

use crate::config::{
    Config, DEFAULT_AMOUNT, DEFAULT_COLUMN_WIDTH, DEFAULT_OUTPUT, DEFAULT_SITEMAP_URL,
    DEFAULT_TIMEOUT_SECS, append_xlsx_extension_if_needed,
};
use crate::core::spreadsheet::SheetLayout;

#[derive(Parser, Debug)]
#[command(name = "coursera_dump")]
#[command(about = "Write Coursera courses info to xlsx")]
pub struct Cli {
    /// Amount of courses to parse
    #[arg(default_value_t = DEFAULT_AMOUNT)]
    pub amount: usize,

    /// Name of output file
    #[arg(default_value = DEFAULT_OUTPUT)]
    pub output: String,

    /// Width of name column in spreadsheet
    #[arg(default_value_t = DEFAULT_COLUMN_WIDTH)]
    pub name_width: u16,

    /// Width of language column in spreadsheet
    #[arg(default_value_t = DEFAULT_COLUMN_WIDTH)]
    pub lang_width: u16,

    /// Sitemap listing the course pages
    #[arg(long, env = "COURSERA_SITEMAP_URL", default_value = DEFAULT_SITEMAP_URL)]
    pub sitemap_url: Url,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Send a random browser User-Agent with every request
    #[arg(long)]
    pub rotate_user_agent: bool,

    /// Ignore HTTP(S)_PROXY settings from the environment
    #[arg(long)]
    pub no_proxy: bool,

    /// Also print the parsed courses as JSON
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    pub fn into_config(self) -> Config {
        Config {
            amount: self.amount,
            output: PathBuf::from(append_xlsx_extension_if_needed(&self.output)),
            layout: SheetLayout {
                name_width: self.name_width,
                language_width: self.lang_width,
            },
            sitemap_url: self.sitemap_url,
            timeout: Duration::from_secs(self.timeout),
            rotate_user_agent: self.rotate_user_agent,
            use_system_proxy: !self.no_proxy,
            print_json: self.json,
        }
    }
}
