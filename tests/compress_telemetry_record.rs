use std::io::Cursor;

use telemetry_huffman::report::BarChart;
use telemetry_huffman::telemetry::Field;
use telemetry_huffman::{compress_record, read_record, CLIParser, Error};

const RECORD: &str = "12,34,56,78";

#[test]
fn test_compress_record_from_arguments() {
    let mut cli_parser = CLIParser::new();
    let arguments = cli_parser.parse(vec!["test", "-b", "8", "--no_chart", RECORD]);
    let record = arguments.record().expect("Record argument not parsed");
    let report = compress_record(record, arguments.bandwidth()).expect("Compression failed");

    assert_eq!(report.encoded().to_string(), "000001010011100101110111");
    assert_eq!(report.original_bits(), 64);
    assert_eq!(report.compressed_bits(), 24);
    assert_eq!(report.saved_bits(), 40);
    assert_eq!(report.original_transmission_time_seconds(), 8.0);
    assert_eq!(report.compressed_transmission_time_seconds(), 3.0);
    assert_eq!(report.time_saved_seconds(), 5.0);
    for field in Field::ALL {
        assert_eq!(report.field_sizes().original_bits(field), Some(16));
    }
    assert!(!arguments.show_chart());
}

#[test]
fn test_compress_record_read_from_input() {
    let input = Cursor::new("  23.5,1013.25\n");
    let record = read_record(input).expect("Reading record failed");
    assert_eq!(record, "23.5,1013.25");

    let report = compress_record(&record, 1000).expect("Compression failed");
    let field_sizes = report.field_sizes();
    assert_eq!(field_sizes.len(), 2);
    assert_eq!(field_sizes.original_bits(Field::Temperature), Some(32));
    assert_eq!(field_sizes.original_bits(Field::Pressure), Some(56));
    assert_eq!(field_sizes.get(Field::Altitude), None);
    assert_eq!(report.encoded().len(), report.compressed_bits());

    let chart = BarChart::new(field_sizes, 40).to_string();
    assert!(chart.contains("Temperature: 32 ->"));
    assert!(!chart.contains("Battery"));
}

#[test]
fn test_compress_empty_record_fails() {
    let record = read_record(Cursor::new("\n")).expect("Reading record failed");
    assert!(matches!(
        compress_record(&record, 1000),
        Err(Error::EmptyInput)
    ));
    assert!(matches!(
        compress_record(",,,", 1000),
        Err(Error::EmptyInput)
    ));
}
