//! Command Line Interface for concentrated-liquidity position monitoring.
mod report;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use clmm_monitor_domain::prelude::*;
use dotenv::dotenv;
use primitive_types::U256;
use rust_decimal::Decimal;
use serde_json::json;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "clmm-monitor")]
#[command(about = "Tick math and range proximity monitor for CLMM positions", long_about = None)]
struct Cli {
    /// Print JSON instead of formatted text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug, Clone, Copy)]
struct TokenDecimals {
    /// Decimal places of token0
    #[arg(long, env = "TOKEN0_DECIMALS", default_value_t = DEFAULT_TOKEN_DECIMALS)]
    decimals0: u8,

    /// Decimal places of token1
    #[arg(long, env = "TOKEN1_DECIMALS", default_value_t = DEFAULT_TOKEN_DECIMALS)]
    decimals1: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a tick into its sqrtPriceX96
    SqrtPrice {
        #[arg(long, allow_negative_numbers = true)]
        tick: i32,
    },
    /// Decimal-adjusted price at a tick
    Price {
        #[arg(long, allow_negative_numbers = true)]
        tick: i32,

        #[command(flatten)]
        decimals: TokenDecimals,
    },
    /// Prices at both bounds of a tick range
    Range {
        /// Lower tick
        #[arg(long, allow_negative_numbers = true)]
        lower: i32,

        /// Upper tick
        #[arg(long, allow_negative_numbers = true)]
        upper: i32,

        #[command(flatten)]
        decimals: TokenDecimals,
    },
    /// Raw token amounts backing a liquidity position
    Amounts {
        #[arg(long)]
        liquidity: u128,

        /// Current pool sqrtPriceX96 (decimal integer)
        #[arg(long, value_parser = parse_u256)]
        sqrt_price: U256,

        /// Lower tick
        #[arg(long, allow_negative_numbers = true)]
        lower: i32,

        /// Upper tick
        #[arg(long, allow_negative_numbers = true)]
        upper: i32,
    },
    /// Token holdings and USD value of a position
    Value {
        #[arg(long)]
        liquidity: u128,

        /// Current pool sqrtPriceX96 (decimal integer)
        #[arg(long, value_parser = parse_u256)]
        sqrt_price: U256,

        /// Current pool tick
        #[arg(long, allow_negative_numbers = true)]
        tick: i32,

        /// Lower tick
        #[arg(long, allow_negative_numbers = true)]
        lower: i32,

        /// Upper tick
        #[arg(long, allow_negative_numbers = true)]
        upper: i32,

        #[command(flatten)]
        decimals: TokenDecimals,

        /// USD price of token0
        #[arg(long, default_value = "0")]
        price0_usd: Decimal,

        /// USD price of token1
        #[arg(long, default_value = "0")]
        price1_usd: Decimal,

        /// Uncollected token0 fees in raw units
        #[arg(long, default_value_t = 0)]
        tokens_owed0: u128,

        /// Uncollected token1 fees in raw units
        #[arg(long, default_value_t = 0)]
        tokens_owed1: u128,
    },
    /// Check a JSON file of positions against their range bounds
    Proximity {
        /// JSON array of position snapshots
        #[arg(short, long)]
        file: PathBuf,

        /// Warning threshold in percent of range width
        #[arg(long, env = "PROXIMITY_THRESHOLD_PCT", default_value = "5.0")]
        threshold: Decimal,

        /// List every position, not only flagged ones
        #[arg(long)]
        all: bool,
    },
}

fn parse_u256(s: &str) -> Result<U256, String> {
    U256::from_dec_str(s).map_err(|e| format!("invalid unsigned integer '{s}': {e:?}"))
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::SqrtPrice { tick } => {
            let sqrt_price = tick_to_sqrt_price_x96(*tick)?;
            let raw_price = sqrt_price_x96_to_price(sqrt_price, 0, 0);
            if cli.json {
                let out = json!({
                    "tick": tick,
                    "sqrt_price_x96": sqrt_price.to_string(),
                    "raw_price": raw_price.to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                println!("Tick:           {}", tick);
                println!("sqrtPriceX96:   {}", sqrt_price);
                println!("Raw price:      {}", raw_price);
            }
        }
        Commands::Price { tick, decimals } => {
            let price = get_price_from_tick(*tick, decimals.decimals0, decimals.decimals1)?;
            if cli.json {
                let out = json!({
                    "tick": tick,
                    "price": price.to_string(),
                    "inverse_price": price.invert().to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                println!("Price at tick {}: {}", tick, price);
                println!("Inverse price:    {}", price.invert());
            }
        }
        Commands::Range {
            lower,
            upper,
            decimals,
        } => {
            let range =
                calculate_price_range(*lower, *upper, decimals.decimals0, decimals.decimals1)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&range)?);
            } else {
                println!("📐 Range [{}, {}]", lower, upper);
                println!("Lower price: {}", range.price_lower);
                println!("Upper price: {}", range.price_upper);
                println!(
                    "Inverted:    {} - {}",
                    range.price_upper.invert(),
                    range.price_lower.invert()
                );
                println!("Width:       {}", range.range_width.normalized());
            }
        }
        Commands::Amounts {
            liquidity,
            sqrt_price,
            lower,
            upper,
        } => {
            let amounts = calculate_amounts_from_liquidity(*liquidity, *sqrt_price, *lower, *upper);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&amounts)?);
            } else {
                println!("💧 Raw amounts");
                println!("token0: {}", amounts.amount0.normalized());
                println!("token1: {}", amounts.amount1.normalized());
            }
        }
        Commands::Value {
            liquidity,
            sqrt_price,
            tick,
            lower,
            upper,
            decimals,
            price0_usd,
            price1_usd,
            tokens_owed0,
            tokens_owed1,
        } => {
            let input = ValuationInput {
                liquidity: *liquidity,
                sqrt_price_x96: *sqrt_price,
                current_tick: *tick,
                tick_lower: *lower,
                tick_upper: *upper,
                decimals0: decimals.decimals0,
                decimals1: decimals.decimals1,
                price0_usd: *price0_usd,
                price1_usd: *price1_usd,
            };
            let valuation = value_position(&input);
            let range = check_position_in_range(*liquidity, *tick, *lower, *upper);
            let fees = calculate_uncollected_fees(&input, *tokens_owed0, *tokens_owed1);
            if cli.json {
                let out = json!({ "valuation": valuation, "range": range, "fees": fees });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                report::print_valuation(&valuation, &range, &fees);
            }
        }
        Commands::Proximity {
            file,
            threshold,
            all,
        } => {
            let positions = report::load_positions(file).await?;
            info!(count = positions.len(), %threshold, "Loaded positions");

            let flagged = filter_positions_approaching_bounds(&positions, *threshold);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&flagged)?);
                return Ok(());
            }

            if *all {
                let assessed: Vec<_> = positions
                    .iter()
                    .map(|p| (p, calculate_range_proximity_with_threshold(p, *threshold)))
                    .collect();
                report::proximity_table(&assessed).printstd();
            }
            report::print_flagged(&flagged, positions.len());
        }
    }

    Ok(())
}
