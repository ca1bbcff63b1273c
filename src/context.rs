use clap::Parser;
use clap_num::maybe_hex;

#[derive(Debug, Parser)]
#[clap(name = "nrband")]
#[clap(about = "Resolves NR-ARFCN values into 3GPP frequency bands.", long_about = None)]
#[clap(version)]
pub(crate) struct Cli {
    /// NR-ARFCN values to resolve.{n}
    /// Decimal, or hexadecimal with a `0x` prefix.
    #[clap(required = true, value_parser = maybe_hex::<u32>)]
    pub arfcn: Vec<u32>,

    /// Restrict matching to the given 3GPP band numbers.{n}
    /// Comma separated, e.g. `--bands 77,78`. Useful when the modem
    /// already reports which bands it is camping on.
    #[clap(short, long, value_delimiter = ',')]
    pub bands: Vec<u16>,

    /// Output format.
    #[clap(short, long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

/// Output format for resolution results.
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub(crate) enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
}
