pub mod coursera;
pub mod html_parser;
pub mod spreadsheet;
