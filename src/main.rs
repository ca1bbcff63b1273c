mod context;

use clap::Parser;
use colored::Colorize;
use log::error;

use nrband::bands::nr;
use nrband::BandNr;

use crate::context::{Cli, OutputFormat};

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let resolved: Vec<BandNr> = cli
        .arfcn
        .iter()
        .map(|&arfcn| nr::resolve(arfcn, &cli.bands))
        .collect();

    match cli.format {
        OutputFormat::Table => print_table(&resolved),
        OutputFormat::Json => print_json(&resolved),
        OutputFormat::Csv => print_csv(&resolved),
    }
}

fn print_table(resolved: &[BandNr]) {
    println!(
        "{:<10} {:<12} {:<6} {}",
        "ARFCN", "FREQ (MHz)", "BAND", "NAME"
    );
    println!("{}", "-".repeat(40));

    for band in resolved {
        let number = match band.number {
            Some(number) => format!("{:<6}", format!("n{}", number)).green(),
            None => format!("{:<6}", "-").yellow(),
        };
        println!(
            "{:<10} {:<12} {} {}",
            band.downlink_arfcn,
            format_mhz(band.downlink_frequency),
            number,
            band.name.unwrap_or("-")
        );
    }
}

fn print_json(resolved: &[BandNr]) {
    match serde_json::to_string_pretty(resolved) {
        Ok(json) => println!("{}", json),
        Err(e) => error!("Failed to encode results as JSON: {}", e),
    }
}

fn print_csv(resolved: &[BandNr]) {
    println!("arfcn,frequency_khz,band,name");
    for band in resolved {
        println!(
            "{},{},{},{}",
            band.downlink_arfcn,
            band.downlink_frequency,
            band.number.map(|n| n.to_string()).unwrap_or_default(),
            band.name.unwrap_or("")
        );
    }
}

/// Formats a kHz value as MHz with up to three decimals.
fn format_mhz(khz: u32) -> String {
    if khz % 1000 == 0 {
        format!("{}", khz / 1000)
    } else {
        format!("{}.{:03}", khz / 1000, khz % 1000)
    }
}
