use std::io::Result;
use std::path::Path;

use hashlab::bench::report::CsvReportSink;
use hashlab::bench::runner::{measure_fill_levels, MeasureConfig};
use hashlab::common::hash::HashMethod;
use hashlab::container::hash::hash_table::HashTable;
use hashlab::container::hash::open_addressing_hash_table::OpenAddressingHashTable;
use hashlab::container::hash::separate_chaining_hash_table::SeparateChainingHashTable;

const METHODS: [HashMethod; 3] = [
    HashMethod::Modulo,
    HashMethod::Multiplication,
    HashMethod::Algebraic,
];

fn measure<T: HashTable<u64>>(
    name: &str,
    build: impl Fn() -> T,
    config: &MeasureConfig,
) -> Result<()> {
    let file_name = format!("{}.csv", name);
    let mut sink = CsvReportSink::create(Path::new(&file_name))?;
    measure_fill_levels(name, build, config, &mut sink)?;
    println!("{} written", file_name);
    Ok(())
}

fn main() -> Result<()> {
    let config = MeasureConfig::default();

    for &method in METHODS.iter() {
        measure(
            &format!("OpenAddressing{:?}", method),
            || OpenAddressingHashTable::new(method),
            &config,
        )?;
    }

    for &method in METHODS.iter() {
        measure(
            &format!("SeparateChaining{:?}", method),
            || SeparateChainingHashTable::new(method),
            &config,
        )?;
    }

    Ok(())
}
