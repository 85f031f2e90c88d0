//! cad-gen: writes a synthetic computer-aided-dispatch table.
//!
//! Usage:
//!   cad-gen --count 10000 --start 2024-01-01 --end 2024-12-31 --out calls.csv
//!   cad-gen --count 500 --names 4 --seed 7 --format jsonl --out calls.jsonl
//!   cad-gen --config data/generator_config.json --out calls.csv

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use dispatch_synth_core::{
    config::GeneratorConfig,
    engine::Generator,
    export::{write_csv, write_json_lines},
    staff::NamePool,
    summary::{BatchSummary, ColumnStats},
};
use std::env;
use std::fs::File;
use std::io::BufWriter;

/// The address corpus is built once per process from this seed.
const CORPUS_SEED: u64 = 2500;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let count = parse_arg(&args, "--count", 10_000usize);
    let seed = parse_arg(&args, "--seed", 42u64);
    let start = parse_date(&args, "--start", "2024-01-01")?;
    let end = parse_date(&args, "--end", "2024-12-31")?;
    let out = str_arg(&args, "--out").unwrap_or("computer_aided_dispatch.csv");
    let format = str_arg(&args, "--format").unwrap_or("csv");

    let config = match str_arg(&args, "--config") {
        Some(path) => GeneratorConfig::load(path)?,
        None => GeneratorConfig::default(),
    };
    let names = parse_arg(&args, "--names", config.names_per_shift);

    println!("cad-gen: synthetic 911 dispatch generator");
    println!("  records:   {count}");
    println!("  window:    {start} .. {end}");
    println!("  names:     {names} per shift");
    println!("  seed:      {seed}");
    println!("  out:       {out} ({format})");
    println!();

    let generator = Generator::build(config, CORPUS_SEED)?;
    let request = generator
        .request(count, start, end)
        .with_names_per_shift(names)
        .with_seed(seed);
    let batch = generator.generate(&request)?;

    let file = File::create(out).with_context(|| format!("Cannot create {out}"))?;
    let writer = BufWriter::new(file);
    match format {
        "csv" => write_csv(writer, &batch.records)?,
        "jsonl" => write_json_lines(writer, &batch.records)?,
        other => bail!("Unknown --format '{other}' (expected csv or jsonl)"),
    }

    log::info!("cad-gen: wrote {} rows to {out}", batch.len());
    println!("File saved to {out}");
    print_summary(&BatchSummary::from_batch(&batch));
    print_roster("Call Taker", &batch.call_takers);
    print_roster("Dispatcher", &batch.dispatchers);
    Ok(())
}

fn print_summary(summary: &BatchSummary) {
    println!();
    println!("=== RUN SUMMARY ===");
    println!("  records:        {}", summary.records);
    for (agency, n) in &summary.agency_counts {
        println!("  {:<15} {n}", format!("{agency}:"));
    }
    println!();
    println!("  {:<13} {:>7} {:>9} {:>9} {:>6} {:>8} {:>8} {:>8} {:>6}",
        "column", "count", "mean", "std", "min", "25%", "50%", "75%", "max");
    print_stats("phone_time", summary.phone_time);
    print_stats("process_time", summary.process_time);
    print_stats("total_time", summary.total_time);
}

fn print_stats(name: &str, stats: Option<ColumnStats>) {
    if let Some(s) = stats {
        println!("  {:<13} {:>7} {:>9.1} {:>9.1} {:>6} {:>8.1} {:>8.1} {:>8.1} {:>6}",
            name, s.count, s.mean, s.std, s.min, s.p25, s.p50, s.p75, s.max);
    }
}

fn print_roster(label: &str, pool: &NamePool) {
    println!();
    println!("{label} Names per Shift:");
    for (shift, names) in pool.iter() {
        println!("  Shift {shift}: {}", names.join("; "));
    }
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}

fn str_arg<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

fn parse_date(args: &[String], flag: &str, default: &str) -> Result<NaiveDate> {
    let text = str_arg(args, flag).unwrap_or(default);
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .with_context(|| format!("{flag} expects YYYY-MM-DD, got '{text}'"))
}
