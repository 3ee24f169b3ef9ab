use super::{split_fields, Field, FieldSize, FieldSizes, BITS_PER_CHARACTER};
use crate::error::Error;
use crate::huffman::{build_code_table, BitString, CodeTable, FrequencyTable};
use crate::logger::{log_code_table, log_frequency_table};
use crate::Result;

/// Bitstream of a record together with the code table it was encoded with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedRecord {
    bits: BitString,
    code_table: CodeTable,
}

impl EncodedRecord {
    pub fn bits(&self) -> &BitString {
        &self.bits
    }

    pub fn code_table(&self) -> &CodeTable {
        &self.code_table
    }

    pub fn into_parts(self) -> (BitString, CodeTable) {
        (self.bits, self.code_table)
    }
}

/// Encodes the concatenation of all fields of `record` with a code built from
/// the record's own character frequencies.
pub fn encode(record: &str) -> Result<EncodedRecord> {
    let symbols = split_fields(record).concat();
    let frequencies: FrequencyTable = symbols.chars().collect();
    if frequencies.is_empty() {
        return Err(Error::EmptyInput);
    }
    log_frequency_table(&frequencies);
    let code_table = build_code_table(&frequencies)?;
    log_code_table(&code_table);
    let bits = code_table.encode(symbols.chars())?;
    log::info!(
        "Encoded {} characters into {} bits",
        frequencies.total(),
        bits.len()
    );
    Ok(EncodedRecord { bits, code_table })
}

/// Size of each named field of `record`, before and after encoding with
/// `code_table`.
pub fn field_sizes(record: &str, code_table: &CodeTable) -> Result<FieldSizes> {
    Field::ALL
        .into_iter()
        .zip(split_fields(record))
        .map(|(field, value)| field_size(field, value, code_table))
        .collect()
}

fn field_size(field: Field, value: &str, code_table: &CodeTable) -> Result<FieldSize> {
    let compressed_bits = value
        .chars()
        .map(|symbol| code_table.code_length(symbol))
        .sum::<Result<usize>>()?;
    Ok(FieldSize {
        field,
        original_bits: value.chars().count() * BITS_PER_CHARACTER,
        compressed_bits,
    })
}

struct RetainedCodeTable {
    record: String,
    code_table: CodeTable,
}

/// Encoder that keeps the code table of the last encoded record, so sizes can
/// be queried for that record afterwards.
///
/// Asking for the sizes of any other record fails with
/// [`Error::StaleCodeTable`] instead of reading a table built for different
/// data.
#[derive(Default)]
pub struct TelemetryEncoder {
    retained: Option<RetainedCodeTable>,
}

impl TelemetryEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Encodes `record` and replaces the retained code table. On failure the
    /// previously retained table is kept.
    pub fn encode(&mut self, record: &str) -> Result<BitString> {
        let (bits, code_table) = encode(record)?.into_parts();
        self.retained = Some(RetainedCodeTable {
            record: record.to_owned(),
            code_table,
        });
        Ok(bits)
    }

    pub fn code_table(&self) -> Option<&CodeTable> {
        self.retained.as_ref().map(|retained| &retained.code_table)
    }

    pub fn field_sizes(&self, record: &str) -> Result<FieldSizes> {
        match &self.retained {
            Some(retained) if retained.record == record => {
                field_sizes(record, &retained.code_table)
            }
            _ => Err(Error::StaleCodeTable),
        }
    }
}

#[cfg(test)]
mod test {
    use super::{encode, field_sizes, TelemetryEncoder};
    use crate::error::Error;
    use crate::huffman::FrequencyTable;
    use crate::telemetry::{split_fields, Field};

    #[test]
    fn test_encode_four_distinct_fields() {
        let encoded = encode("12,34,56,78").unwrap();
        assert_eq!(
            encoded.bits().to_string(),
            "000001010011100101110111"
        );
        assert_eq!(encoded.code_table().len(), 8);
    }

    #[test]
    fn test_separator_is_not_encoded() {
        let encoded = encode("ab,bc,c").unwrap();
        assert!(encoded.code_table().code(',').is_none());
        assert_eq!(encoded.bits().to_string(), "10111100");
    }

    #[test]
    fn test_encode_empty_record_fails() {
        assert!(matches!(encode(""), Err(Error::EmptyInput)));
    }

    #[test]
    fn test_encode_only_separators_fails() {
        assert!(matches!(encode(",,,"), Err(Error::EmptyInput)));
    }

    #[test]
    fn test_single_symbol_record_encodes_to_zero_bits() {
        let record = "7,77,7,777";
        let encoded = encode(record).unwrap();
        assert!(encoded.bits().is_empty());
        let sizes = field_sizes(record, encoded.code_table()).unwrap();
        assert_eq!(sizes.total_original_bits(), 56);
        assert_eq!(sizes.total_compressed_bits(), 0);
    }

    #[test]
    fn test_field_sizes_of_four_fields() {
        let record = "12,34,56,78";
        let encoded = encode(record).unwrap();
        let sizes = field_sizes(record, encoded.code_table()).unwrap();
        for field in Field::ALL {
            assert_eq!(sizes.original_bits(field), Some(16), "{}", field);
            assert_eq!(sizes.compressed_bits(field), Some(6), "{}", field);
        }
    }

    #[test]
    fn test_repeated_characters_compress_below_original() {
        let record = "23.5,1013.25,408.2,87";
        let encoded = encode(record).unwrap();
        let sizes = field_sizes(record, encoded.code_table()).unwrap();
        for size in sizes.iter() {
            assert!(
                size.compressed_bits < size.original_bits,
                "{} was not compressed",
                size.field
            );
        }
    }

    #[test]
    fn test_missing_fields_are_absent() {
        let record = "12,34";
        let encoded = encode(record).unwrap();
        let sizes = field_sizes(record, encoded.code_table()).unwrap();
        assert_eq!(sizes.len(), 2);
        assert!(sizes.get(Field::Temperature).is_some());
        assert!(sizes.get(Field::Pressure).is_some());
        assert!(sizes.get(Field::Altitude).is_none());
        assert!(sizes.get(Field::Battery).is_none());
    }

    #[test]
    fn test_fields_past_the_fourth_are_encoded_but_not_sized() {
        let record = "1,2,3,4,5";
        let encoded = encode(record).unwrap();
        assert!(encoded.code_table().code('5').is_some());
        let sizes = field_sizes(record, encoded.code_table()).unwrap();
        assert_eq!(sizes.len(), 4);
        assert_eq!(sizes.total_original_bits(), 32);
    }

    #[test]
    fn test_empty_field_has_zero_size() {
        let record = "12,,34,5";
        let encoded = encode(record).unwrap();
        let sizes = field_sizes(record, encoded.code_table()).unwrap();
        assert_eq!(sizes.original_bits(Field::Pressure), Some(0));
        assert_eq!(sizes.compressed_bits(Field::Pressure), Some(0));
    }

    #[test]
    fn test_compressed_total_equals_weighted_code_length() {
        let record = "-12.5,1013.25,35786,98";
        let encoded = encode(record).unwrap();
        let sizes = field_sizes(record, encoded.code_table()).unwrap();
        let frequencies: FrequencyTable = split_fields(record).concat().chars().collect();
        let weighted_length = encoded.code_table().weighted_length(&frequencies).unwrap();
        assert_eq!(sizes.total_compressed_bits(), weighted_length);
        assert_eq!(encoded.bits().len(), weighted_length);
    }

    #[test]
    fn test_field_sizes_with_foreign_code_table() {
        let encoded = encode("12,34").unwrap();
        let result = field_sizes("56,78", encoded.code_table());
        assert!(matches!(result, Err(Error::SymbolNotInCodeTable('5'))));
    }

    #[test]
    fn test_encoding_twice_is_deterministic() {
        let record = "-40.25,987.6,12000,3.7";
        let first = encode(record).unwrap();
        let second = encode(record).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_stateful_encoder_sizes_after_encode() {
        let record = "12,34,56,78";
        let mut encoder = TelemetryEncoder::new();
        let bits = encoder.encode(record).unwrap();
        let sizes = encoder.field_sizes(record).unwrap();
        assert_eq!(bits.len(), sizes.total_compressed_bits());
        assert_eq!(sizes.total_original_bits(), 64);
    }

    #[test]
    fn test_stateful_encoder_sizes_without_encode() {
        let encoder = TelemetryEncoder::new();
        assert!(encoder.code_table().is_none());
        assert!(matches!(
            encoder.field_sizes("12,34"),
            Err(Error::StaleCodeTable)
        ));
    }

    #[test]
    fn test_stateful_encoder_sizes_for_other_record() {
        let mut encoder = TelemetryEncoder::new();
        encoder.encode("12,34").unwrap();
        assert!(matches!(
            encoder.field_sizes("12,35"),
            Err(Error::StaleCodeTable)
        ));
    }

    #[test]
    fn test_stateful_encoder_keeps_table_after_failed_encode() {
        let mut encoder = TelemetryEncoder::new();
        encoder.encode("12,34").unwrap();
        let retained = encoder.code_table().cloned();
        assert!(matches!(encoder.encode(",,,"), Err(Error::EmptyInput)));
        assert_eq!(encoder.code_table().cloned(), retained);
        assert!(encoder.field_sizes("12,34").is_ok());
    }

    #[test]
    fn test_stateful_encoder_replaces_table_on_encode() {
        let mut encoder = TelemetryEncoder::new();
        encoder.encode("aaab").unwrap();
        encoder.encode("xy,z").unwrap();
        let code_table = encoder.code_table().unwrap();
        assert!(code_table.code('a').is_none());
        assert!(code_table.code('x').is_some());
        assert!(matches!(
            encoder.field_sizes("aaab"),
            Err(Error::StaleCodeTable)
        ));
    }
}
