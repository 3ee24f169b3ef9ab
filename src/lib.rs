use std::io::BufRead;

pub use cli::CLIParser;
pub use error::Error;
use report::CompressionReport;
use telemetry::encoder::TelemetryEncoder;

mod cli;
mod error;
pub mod huffman;
mod logger;
pub mod report;
pub mod telemetry;

pub type Result<T> = std::result::Result<T, error::Error>;

pub struct Arguments {
    record: Option<String>,
    bandwidth: u32,
    chart_width: usize,
    show_chart: bool,
}

impl Arguments {
    pub fn record(&self) -> Option<&str> {
        self.record.as_deref()
    }

    pub fn bandwidth(&self) -> u32 {
        self.bandwidth
    }

    pub fn chart_width(&self) -> usize {
        self.chart_width
    }

    pub fn show_chart(&self) -> bool {
        self.show_chart
    }
}

/// Reads one line and strips surrounding whitespace.
pub fn read_record<R: BufRead>(mut reader: R) -> Result<String> {
    let mut line = String::new();
    reader
        .read_line(&mut line)
        .map_err(Error::UnableToReadRecord)?;
    Ok(line.trim().to_owned())
}

pub fn compress_record(record: &str, bandwidth: u32) -> Result<CompressionReport> {
    let mut encoder = TelemetryEncoder::new();
    let encoded = encoder.encode(record)?;
    let field_sizes = encoder.field_sizes(record)?;
    log::info!(
        "Compressed {} fields from {} to {} bits",
        field_sizes.len(),
        field_sizes.total_original_bits(),
        field_sizes.total_compressed_bits()
    );
    Ok(CompressionReport::new(
        record,
        encoded,
        field_sizes,
        bandwidth,
    ))
}
