pub mod demo;
pub mod factorial;
pub mod prime;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "numkit")]
#[command(about = "Factorials and primality checks.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Log more (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Hide headers, print results only
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the factorial of 5 and whether 17 is prime (default)
    Demo,
    /// Compute the factorial of one or more integers
    #[command(alias = "f")]
    Factorial {
        #[arg(required = true, allow_negative_numbers = true)]
        numbers: Vec<i64>,
    },
    /// Check one or more integers for primality
    #[command(alias = "p")]
    Prime {
        #[arg(required = true, allow_negative_numbers = true)]
        numbers: Vec<i64>,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
