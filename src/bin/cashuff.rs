use std::io::BufWriter;
use std::path::PathBuf;

use clap::Parser;
use log::info;

use cashuff::shuffle::{run_shuffle, ShuffleOpts};

/// CaShuff CLI
#[derive(Parser)]
#[command(name = "cashuff")]
#[command(version)]
#[command(about = "Generate shuffled peptide junctions from flanked fragments", long_about = None)]
struct Cli {
    /// FASTA file of peptides with flanks; header format: >name (begin..end)
    #[arg(value_name = "input_file.fa")]
    file: PathBuf,
    /// Lengths of peptides
    #[arg(short = 'l', value_name = "PEPTIDE_LENGTH", num_args = 1.., default_values_t = [8, 9, 10, 11])]
    lengths: Vec<usize>,
    /// Minimum length of flanks
    #[arg(short = 'm', value_name = "MIN_FLANKS_LENGTH", default_value_t = 10)]
    min_flank: usize,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let mut opts = ShuffleOpts::new(cli.file);
    opts.min_flank = cli.min_flank;
    opts.lengths = cli.lengths;

    info!("cashuff v{}", cashuff::VERSION);
    let summary = run_shuffle(&opts, BufWriter::new(std::io::stdout().lock()))?;

    info!(
        "fragments: {} | pairs: {} | peptides: {}",
        summary.fragments,
        summary.pairs,
        summary.peptides()
    );
    if !summary.sinks.is_empty() {
        std::env::set_var("POLARS_FMT_TABLE_FORMATTING", "UTF8_FULL");
        std::env::set_var("POLARS_FMT_STR_LEN", "100000");
        info!("\n{}", summary.to_dataframe()?);
    }
    Ok(())
}
