use std::fmt::Display;

pub mod encoder;

pub const FIELD_SEPARATOR: char = ',';
pub const BITS_PER_CHARACTER: usize = 8;

/// Named positions of a telemetry record, in record order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Temperature,
    Pressure,
    Altitude,
    Battery,
}

impl Field {
    pub const ALL: [Field; 4] = [
        Field::Temperature,
        Field::Pressure,
        Field::Altitude,
        Field::Battery,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Temperature => "Temperature",
            Self::Pressure => "Pressure",
            Self::Altitude => "Altitude",
            Self::Battery => "Battery",
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Splits a record on `,` without trimming. Empty fields are kept.
pub fn split_fields(record: &str) -> Vec<&str> {
    record.split(FIELD_SEPARATOR).collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSize {
    pub field: Field,
    pub original_bits: usize,
    pub compressed_bits: usize,
}

/// Original and compressed size in bits of each field of a record.
///
/// Fields are matched to names by position. A record with fewer than four
/// fields has no entry for the missing names, and fields past the fourth are
/// not listed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldSizes {
    entries: Vec<FieldSize>,
}

impl FieldSizes {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldSize> {
        self.entries.iter()
    }

    pub fn get(&self, field: Field) -> Option<&FieldSize> {
        self.entries.iter().find(|entry| entry.field == field)
    }

    pub fn original_bits(&self, field: Field) -> Option<usize> {
        self.get(field).map(|entry| entry.original_bits)
    }

    pub fn compressed_bits(&self, field: Field) -> Option<usize> {
        self.get(field).map(|entry| entry.compressed_bits)
    }

    pub fn total_original_bits(&self) -> usize {
        self.entries.iter().map(|entry| entry.original_bits).sum()
    }

    pub fn total_compressed_bits(&self) -> usize {
        self.entries.iter().map(|entry| entry.compressed_bits).sum()
    }
}

impl FromIterator<FieldSize> for FieldSizes {
    fn from_iter<T: IntoIterator<Item = FieldSize>>(entries: T) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }
}
