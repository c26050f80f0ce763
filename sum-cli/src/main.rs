mod sum;

use anyhow::Result;
use clap::Parser;

/// Reads two integers from the command line and prints their sum.
#[derive(Parser, Debug)]
#[command(name = "sum-cli")]
#[command(about = "Print the sum of two integers", long_about = None)]
#[command(disable_help_flag = true)]
struct Args {
    /// First integer
    #[arg(allow_hyphen_values = true)]
    int1: String,

    /// Second integer
    #[arg(allow_hyphen_values = true)]
    int2: String,
}

fn program_name() -> String {
    std::env::args()
        .next()
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string())
}

fn main() -> Result<()> {
    // Anything other than exactly two operands gets the usage line on stdout.
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(_) => {
            println!("Usage: {} int1 int2", program_name());
            std::process::exit(1);
        }
    };

    println!("{}", sum::sum_line(&args.int1, &args.int2)?);
    Ok(())
}
