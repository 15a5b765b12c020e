//! Solves one amount with both algorithms, then times them over a range and
//! charts the result.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use coinchange::{
    canonical, compare_algorithms, dynamic, greedy, plot_times, validate_amount, Denominations,
    PlotConfig, Result, DEFAULT_DENOMINATIONS,
};
use log::warn;

#[derive(Parser)]
#[command(name = "coinchange")]
#[command(author, version, about = "Greedy vs dynamic-programming coin change")]
struct Cli {
    /// Amount to make change for
    #[arg(short, long, default_value_t = 113, allow_negative_numbers = true)]
    amount: i64,

    /// Largest amount in the timing run (starts at 1)
    #[arg(short, long, default_value_t = 500, allow_negative_numbers = true)]
    max_amount: i64,

    /// Comma-separated coin values
    #[arg(
        short,
        long,
        value_delimiter = ',',
        allow_negative_numbers = true,
        default_values_t = DEFAULT_DENOMINATIONS.map(|c| c as i64)
    )]
    coins: Vec<i64>,

    /// Where to write the SVG chart
    #[arg(short, long, default_value = "coin_change_times.svg")]
    output: PathBuf,

    /// Skip the timing run and chart
    #[arg(long)]
    no_plot: bool,
}

fn run(cli: Cli) -> Result<()> {
    let amount = validate_amount(cli.amount)?;
    let max_amount = validate_amount(cli.max_amount)?;
    let coins = Denominations::new(cli.coins)?;

    if !coins.has_unit() {
        warn!("{coins} has no coin of value 1, some amounts cannot be made");
    }
    match canonical::find_counterexample(&coins) {
        Ok(Some(found)) => match found.greedy_coins {
            Some(count) => warn!(
                "greedy is not optimal for {coins}: {} takes {count} coins, optimum is {}",
                found.amount, found.optimal_coins
            ),
            None => warn!(
                "greedy is not optimal for {coins}: it cannot make {}, optimum is {} coins",
                found.amount, found.optimal_coins
            ),
        },
        Ok(None) => {}
        Err(err) => warn!("skipping canonicity check for {coins}: {err}"),
    }

    match greedy::make_change(amount, &coins) {
        Ok(change) => println!("Greedy: {change}"),
        Err(err) => println!("Greedy: {err}"),
    }
    match dynamic::make_change(amount, &coins) {
        Ok(change) => println!("Dynamic Programming: {change}"),
        Err(err) => println!("Dynamic Programming: {err}"),
    }

    if cli.no_plot {
        return Ok(());
    }

    let comparison = compare_algorithms(max_amount, &coins);
    plot_times(&comparison, &PlotConfig::default(), &cli.output)?;
    println!("Chart written to {}", cli.output.display());
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
