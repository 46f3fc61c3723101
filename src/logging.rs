use log::LevelFilter;

pub struct Logger;

impl Logger {
    /// Colored logger at the requested level; `RUST_LOG` still overrides.
    pub fn init(verbosity: LevelFilter) {
        let mut builder = colog::basic_builder();
        builder.filter_level(verbosity);
        builder.parse_default_env();
        builder.init();
    }
}
