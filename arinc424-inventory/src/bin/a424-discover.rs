// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Prints the record inventory of a directory of ARINC 424 data files.
//!
//! Run with: `cargo run -p arinc424-inventory --bin a424-discover --features cli -- <DIR>`

use std::path::PathBuf;
use std::process;

use arinc424::ClassificationKind;
use arinc424_inventory::{scan_dir, Discovery, RecordCounts, ScanOptions, DEFAULT_EXTENSION};
use clap::Parser;

#[derive(Parser)]
#[command(
    name = "a424-discover",
    version,
    about = "Record inventory of ARINC 424 data files"
)]
struct Cli {
    /// Directory with the data files
    #[arg(default_value = ".")]
    dir: PathBuf,

    /// Extension of the data files
    #[arg(long, default_value = DEFAULT_EXTENSION)]
    extension: String,

    /// File name to skip in addition to the defaults
    #[arg(long, value_name = "FILE")]
    exclude: Vec<String>,

    /// File name known to mix customer codes in addition to the defaults
    #[arg(long, value_name = "FILE")]
    special: Vec<String>,

    /// Print the inventory as JSON
    #[arg(long)]
    json: bool,

    /// Log debug messages
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let options = cli
        .exclude
        .into_iter()
        .fold(ScanOptions::new().extension(cli.extension), |options, name| {
            options.exclude(name)
        });
    let options = cli
        .special
        .into_iter()
        .fold(options, |options, name| options.special(name));

    let discovery = match scan_dir(&cli.dir, &options) {
        Ok(discovery) => discovery,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    if cli.json {
        match serde_json::to_string_pretty(&discovery) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error: {e}");
                process::exit(1);
            }
        }
    } else {
        print_report(&discovery);
    }
}

/// Lines that are neither waypoint, airway nor navaid.
fn other_count(counts: &RecordCounts) -> usize {
    counts.count(ClassificationKind::Unknown)
        + counts.count(ClassificationKind::TooShort)
        + counts.count(ClassificationKind::NonStandard)
}

fn print_report(discovery: &Discovery) {
    println!("=== ARINC 424 Data Discovery ===\n");
    println!("Found {} data files\n", discovery.sources().len());

    println!("Source  | Customer | Total | Waypoints | VOR/DME | NDB | Airways | Other");
    println!("--------|----------|-------|-----------|---------|-----|---------|------");

    for inventory in discovery.sources() {
        let counts = inventory.counts();
        let marker = if inventory.is_special() { "*" } else { "" };

        println!(
            "{:<7} | {:<8} | {:>5} | {:>9} | {:>7} | {:>3} | {:>7} | {:>5}",
            format!("{}{marker}", inventory.source_id()),
            inventory.first_customer_code(),
            counts.total_lines(),
            counts.count(ClassificationKind::Waypoint),
            counts.count(ClassificationKind::VorDme),
            counts.count(ClassificationKind::Ndb),
            counts.count(ClassificationKind::Airway),
            other_count(counts),
        );
    }

    let summary = discovery.summary();
    let counts = summary.counts();

    println!("\n=== Global Totals ===");
    println!("Files:        {}", summary.source_count());
    println!("Records:      {}", counts.total_lines());
    println!("Waypoints:    {}", counts.count(ClassificationKind::Waypoint));
    println!("VOR/DME:      {}", counts.count(ClassificationKind::VorDme));
    println!("NDB:          {}", counts.count(ClassificationKind::Ndb));
    println!("Airways:      {}", counts.count(ClassificationKind::Airway));
    println!("Unknown:      {}", counts.count(ClassificationKind::Unknown));
    println!("Too short:    {}", counts.count(ClassificationKind::TooShort));
    println!("Non-standard: {}", counts.count(ClassificationKind::NonStandard));
    println!("Scan time:    {} ms", summary.elapsed().as_millis());

    if !counts.unknown_codes().is_empty() {
        let codes: Vec<String> = counts
            .unknown_codes()
            .iter()
            .map(|(pair, count)| format!("{pair:?}={count}"))
            .collect();
        println!("\nUnknown section codes: {}", codes.join(", "));
    }

    let customer_codes: Vec<&str> = discovery.customer_codes().into_iter().collect();
    println!(
        "\nUnique customer codes ({}): {}",
        customer_codes.len(),
        customer_codes.join(", ")
    );

    let special: Vec<&str> = discovery
        .sources()
        .iter()
        .filter(|inventory| inventory.is_special())
        .map(|inventory| inventory.source_id())
        .collect();
    if !special.is_empty() {
        println!(
            "\nSpecial files (*) may mix customer codes, only the first is shown: {}",
            special.join(", ")
        );
    }

    let no_airways = discovery.without_airways();
    if !no_airways.is_empty() {
        println!(
            "\nFiles with NO airway records ({}): {}",
            no_airways.len(),
            no_airways.join(", ")
        );
    }

    let no_navaids = discovery.without_navaids();
    if !no_navaids.is_empty() {
        println!(
            "\nFiles with NO navaid records ({}): {}",
            no_navaids.len(),
            no_navaids.join(", ")
        );
    }
}
