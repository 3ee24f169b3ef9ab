use std::fmt;

use crate::telemetry::{Field, FieldSizes};

pub const DEFAULT_CHART_WIDTH: usize = 40;

const BOX_DRAWINGS_DOUBLE_HORIZONTAL: &str = "═";
const BOX_DRAWINGS_DOUBLE_VERTICAL: &str = "║";
const BOX_DRAWINGS_DOUBLE_DOWN_AND_RIGHT: &str = "╔";
const BOX_DRAWINGS_DOUBLE_DOWN_AND_LEFT: &str = "╗";
const BOX_DRAWINGS_DOUBLE_UP_AND_RIGHT: &str = "╚";
const BOX_DRAWINGS_DOUBLE_UP_AND_LEFT: &str = "╝";
const SPACE: &str = " ";
const LABEL_WIDTH: usize = 12;

// indexed by field position
const FIELD_SHADES: [&str; 4] = ["█", "▓", "▒", "░"];

fn shade(field: Field) -> &'static str {
    FIELD_SHADES[field as usize]
}

/// Two stacked horizontal bars comparing the original and the compressed
/// size of every field, drawn on a common scale.
pub struct BarChart<'a> {
    field_sizes: &'a FieldSizes,
    width: usize,
}

impl<'a> BarChart<'a> {
    pub fn new(field_sizes: &'a FieldSizes, width: usize) -> Self {
        Self { field_sizes, width }
    }

    fn scale(&self) -> usize {
        std::cmp::max(
            self.field_sizes.total_original_bits(),
            self.field_sizes.total_compressed_bits(),
        )
    }

    fn scaled(&self, bits: usize) -> usize {
        match self.scale() {
            0 => 0,
            scale => (bits * self.width + scale / 2) / scale,
        }
    }

    // Segment ends are rounded on the running total, so rounding errors do not
    // add up along the bar.
    fn segment_lengths(&self, sizes: impl Iterator<Item = usize>) -> Vec<usize> {
        let mut cumulative_bits = 0;
        let mut drawn = 0;
        sizes
            .map(|bits| {
                cumulative_bits += bits;
                let end = self.scaled(cumulative_bits);
                let length = end - drawn;
                drawn = end;
                length
            })
            .collect()
    }

    fn bar(&self, sizes: impl Iterator<Item = usize>) -> String {
        let fields = self.field_sizes.iter().map(|size| size.field);
        let lengths = self.segment_lengths(sizes);
        let drawn: usize = lengths.iter().sum();
        let mut bar: String = fields
            .zip(lengths)
            .map(|(field, length)| shade(field).repeat(length))
            .collect();
        bar.push_str(&SPACE.repeat(self.width.saturating_sub(drawn)));
        bar
    }

    fn original_bar(&self) -> String {
        self.bar(self.field_sizes.iter().map(|size| size.original_bits))
    }

    fn compressed_bar(&self) -> String {
        self.bar(self.field_sizes.iter().map(|size| size.compressed_bits))
    }
}

impl fmt::Display for BarChart<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let indent = SPACE.repeat(LABEL_WIDTH);
        let border = BOX_DRAWINGS_DOUBLE_HORIZONTAL.repeat(self.width);
        writeln!(f, "Data Compression Breakdown")?;
        writeln!(
            f,
            "{}{}{}{}",
            indent, BOX_DRAWINGS_DOUBLE_DOWN_AND_RIGHT, border, BOX_DRAWINGS_DOUBLE_DOWN_AND_LEFT
        )?;
        for (label, bar, bits) in [
            (
                "Original",
                self.original_bar(),
                self.field_sizes.total_original_bits(),
            ),
            (
                "Compressed",
                self.compressed_bar(),
                self.field_sizes.total_compressed_bits(),
            ),
        ] {
            writeln!(
                f,
                "{:<width$}{}{}{} {} bits",
                label,
                BOX_DRAWINGS_DOUBLE_VERTICAL,
                bar,
                BOX_DRAWINGS_DOUBLE_VERTICAL,
                bits,
                width = LABEL_WIDTH
            )?;
        }
        write!(
            f,
            "{}{}{}{}",
            indent, BOX_DRAWINGS_DOUBLE_UP_AND_RIGHT, border, BOX_DRAWINGS_DOUBLE_UP_AND_LEFT
        )?;
        for size in self.field_sizes.iter() {
            write!(
                f,
                "\n{} {}: {} -> {} bits",
                shade(size.field),
                size.field,
                size.original_bits,
                size.compressed_bits
            )?;
        }
        Ok(())
    }
}
