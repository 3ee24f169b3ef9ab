use telemetry_huffman::huffman::{build_code_table, FrequencyTable};
use telemetry_huffman::telemetry::{encoder, split_fields};
use telemetry_huffman::Result;

fn main() -> Result<()> {
    let record = "-12.5,1013.25,35786,98";

    let symbols = split_fields(record).concat();
    let frequencies: FrequencyTable = symbols.chars().collect();
    println!("symbol frequencies");
    for sf in frequencies.iter() {
        println!("{:?}: {}", sf.symbol, sf.frequency);
    }

    let code_table = build_code_table(&frequencies)?;
    println!("code table");
    for entry in code_table.iter() {
        println!("{:?}: {}", entry.symbol, entry.code);
    }

    let encoded = encoder::encode(record)?;
    println!("record\n{}", record);
    println!("encoded record ({} bits)\n{}", encoded.bits().len(), encoded.bits());

    let sizes = encoder::field_sizes(record, encoded.code_table())?;
    for size in sizes.iter() {
        println!(
            "{}: {} -> {} bits",
            size.field, size.original_bits, size.compressed_bits
        );
    }
    Ok(())
}
