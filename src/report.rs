use std::fmt::Display;

use crate::huffman::BitString;
use crate::telemetry::FieldSizes;

pub mod chart;

pub use chart::BarChart;

pub const DEFAULT_BANDWIDTH: u32 = 1000;

/// Compression statistics of one telemetry record, ready for display.
pub struct CompressionReport {
    record: String,
    encoded: BitString,
    field_sizes: FieldSizes,
    bandwidth: u32,
}

impl CompressionReport {
    /// `bandwidth` is the link rate in bits per second and must not be zero.
    pub fn new(record: &str, encoded: BitString, field_sizes: FieldSizes, bandwidth: u32) -> Self {
        Self {
            record: record.to_owned(),
            encoded,
            field_sizes,
            bandwidth,
        }
    }

    pub fn record(&self) -> &str {
        &self.record
    }

    pub fn encoded(&self) -> &BitString {
        &self.encoded
    }

    pub fn field_sizes(&self) -> &FieldSizes {
        &self.field_sizes
    }

    pub fn bandwidth(&self) -> u32 {
        self.bandwidth
    }

    pub fn original_bits(&self) -> usize {
        self.field_sizes.total_original_bits()
    }

    pub fn compressed_bits(&self) -> usize {
        self.field_sizes.total_compressed_bits()
    }

    pub fn saved_bits(&self) -> i64 {
        self.original_bits() as i64 - self.compressed_bits() as i64
    }

    /// `None` when nothing remains after compression.
    pub fn compression_ratio(&self) -> Option<f64> {
        match self.compressed_bits() {
            0 => None,
            compressed => Some(self.original_bits() as f64 / compressed as f64),
        }
    }

    pub fn space_savings_percent(&self) -> Option<f64> {
        match self.original_bits() {
            0 => None,
            original => Some(self.saved_bits() as f64 / original as f64 * 100.0),
        }
    }

    pub fn transmission_time_seconds(&self, bits: usize) -> f64 {
        bits as f64 / self.bandwidth as f64
    }

    pub fn original_transmission_time_seconds(&self) -> f64 {
        self.transmission_time_seconds(self.original_bits())
    }

    pub fn compressed_transmission_time_seconds(&self) -> f64 {
        self.transmission_time_seconds(self.compressed_bits())
    }

    pub fn time_saved_seconds(&self) -> f64 {
        self.saved_bits() as f64 / self.bandwidth as f64
    }
}

struct OptionalValue(Option<f64>, &'static str);

impl Display for OptionalValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(value) => write!(f, "{:.2}{}", value, self.1),
            None => write!(f, "n/a"),
        }
    }
}

impl Display for CompressionReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Original Data: {}", self.record)?;
        writeln!(f, "Encoded Data: {}", self.encoded)?;
        writeln!(f)?;
        writeln!(f, "Original Size: {} bits", self.original_bits())?;
        writeln!(f, "Compressed Size: {} bits", self.compressed_bits())?;
        writeln!(f, "Space Saved: {} bits", self.saved_bits())?;
        writeln!(
            f,
            "Compression Ratio: {}",
            OptionalValue(self.compression_ratio(), "x")
        )?;
        writeln!(
            f,
            "Space Savings: {}",
            OptionalValue(self.space_savings_percent(), "%")
        )?;
        writeln!(f)?;
        writeln!(
            f,
            "Transmission Time (Original): {:.2} seconds",
            self.original_transmission_time_seconds()
        )?;
        writeln!(
            f,
            "Transmission Time (Compressed): {:.2} seconds",
            self.compressed_transmission_time_seconds()
        )?;
        write!(f, "Time Saved: {:.2} seconds", self.time_saved_seconds())
    }
}
