use log::LevelFilter;

/// Timed, colored logs on stderr. `RUST_LOG` overrides the `warn` default.
pub fn init_logger() {
    let mut builder = pretty_env_logger::formatted_timed_builder();
    builder.filter_level(LevelFilter::Warn);
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    if let Err(err) = builder.try_init() {
        eprintln!("logger already initialized: {err}");
    }
}
