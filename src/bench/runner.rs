use std::io::Result;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::bench::report::{FillLevelRow, ReportSink};
use crate::common::DEFAULT_CAPACITY;
use crate::container::hash::hash_table::HashTable;

/// Knobs of one measurement run. Defaults reproduce the reference
/// benchmark: fill levels 10%..95% of a 100000-slot table in 5% steps,
/// 1000 timed operations per level, fixed seeds so runs are repeatable,
/// and miss keys offset far past the data key range.
pub struct MeasureConfig {
    pub capacity: usize,
    pub measurement_ops: usize,
    pub fill_levels: Vec<usize>,
    pub data_seed: u64,
    pub probe_seed: u64,
    pub key_upper_bound: u64,
    pub miss_offset: u64,
}

impl Default for MeasureConfig {
    fn default() -> MeasureConfig {
        MeasureConfig {
            capacity: DEFAULT_CAPACITY,
            measurement_ops: 1000,
            fill_levels: (10..=95)
                .step_by(5)
                .map(|pct| DEFAULT_CAPACITY * pct / 100)
                .collect(),
            data_seed: 42,
            probe_seed: 123,
            key_upper_bound: 500000,
            miss_offset: 1000000,
        }
    }
}

/// Measures average insert and miss-delete latency at each configured
/// fill level. A fresh table is built per level so earlier measurements
/// never leak into later ones; the data key stream continues across
/// levels the way the reference's generator does.
pub fn measure_fill_levels<T, F>(
    name: &str,
    build: F,
    config: &MeasureConfig,
    sink: &mut dyn ReportSink,
) -> Result<()>
where
    T: HashTable<u64>,
    F: Fn() -> T,
{
    assert!(config.measurement_ops > 0, "measurement_ops must be positive");

    sink.write_header(name)?;

    let mut data_rng = StdRng::seed_from_u64(config.data_seed);
    let mut probe_rng = StdRng::seed_from_u64(config.probe_seed);

    for &fill in &config.fill_levels {
        if fill == 0 {
            continue;
        }

        let mut table = build();
        for _ in 0..fill {
            table.insert(data_rng.gen_range(0..=config.key_upper_bound));
        }

        let started = Instant::now();
        for _ in 0..config.measurement_ops {
            table.insert(probe_rng.gen_range(0..=config.key_upper_bound));
        }
        let insert_elapsed = started.elapsed();

        // keys past miss_offset are never generated by the data stream,
        // so every delete probes to a miss
        let started = Instant::now();
        for _ in 0..config.measurement_ops {
            let key = probe_rng.gen_range(0..=config.key_upper_bound) + config.miss_offset;
            table.remove(&key);
        }
        let delete_elapsed = started.elapsed();

        sink.write_row(&FillLevelRow {
            fill_percentage: fill as f64 * 100.0 / config.capacity as f64,
            avg_insert_ns: insert_elapsed.as_nanos() as u64 / config.measurement_ops as u64,
            avg_delete_ns: delete_elapsed.as_nanos() as u64 / config.measurement_ops as u64,
        })?;
    }

    Ok(())
}
