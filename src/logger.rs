use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

use crate::huffman::{CodeTable, FrequencyTable};

const CONFIG_FILE: &str = "log4rs.yaml";
const FALLBACK_APPENDER: &str = "stderr";
const FALLBACK_PATTERN: &str = "{d(%H:%M:%S%.3f)} {l:5} {t} - {m}{n}";

#[ctor::ctor]
fn init() {
    if log4rs::init_file(CONFIG_FILE, Default::default()).is_err() {
        init_console_fallback();
    }
}

// used when log4rs.yaml is not found in the working directory
fn init_console_fallback() {
    let appender = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(FALLBACK_PATTERN)))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build(FALLBACK_APPENDER, Box::new(appender)))
        .build(
            Root::builder()
                .appender(FALLBACK_APPENDER)
                .build(LevelFilter::Info),
        );
    if let Ok(config) = config {
        let _ = log4rs::init_config(config);
    }
}

pub fn log_frequency_table(frequencies: &FrequencyTable) {
    log::debug!(
        "{} distinct symbols over {} characters",
        frequencies.len(),
        frequencies.total()
    );
    for symbol_frequency in frequencies.iter() {
        log::debug!(
            "{:?} occurs {} times",
            symbol_frequency.symbol,
            symbol_frequency.frequency
        );
    }
}

pub fn log_code_table(code_table: &CodeTable) {
    for entry in code_table.iter() {
        log::debug!("{:?} -> {:?}", entry.symbol, entry.code.to_string());
    }
}
