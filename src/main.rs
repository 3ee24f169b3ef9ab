use std::env::args_os;
use std::io;
use std::process::ExitCode;

use telemetry_huffman::report::BarChart;
use telemetry_huffman::{compress_record, read_record, Arguments, CLIParser, Result};

fn run(arguments: &Arguments) -> Result<()> {
    let record = match arguments.record() {
        Some(record) => record.to_owned(),
        None => {
            println!("Enter satellite data (temperature, pressure, altitude, battery):");
            read_record(io::stdin().lock())?
        }
    };
    let report = compress_record(&record, arguments.bandwidth())?;
    println!("\n{}", report);
    if arguments.show_chart() {
        println!(
            "\n{}",
            BarChart::new(report.field_sizes(), arguments.chart_width())
        );
    }
    Ok(())
}

fn main() -> ExitCode {
    let mut cli_parser = CLIParser::default();
    let arguments = cli_parser.parse(args_os());
    match run(&arguments) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Compression failed because of: {}", e);
            ExitCode::FAILURE
        }
    }
}
