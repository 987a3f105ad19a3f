mod commands;
mod terminal;

use commands::{CommandLine, Commands, demo, factorial, prime};
use numkit_common::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    let cfg = Config {
        quiet: commands.quiet,
        verbose: commands.verbose,
    };

    logging::init_logging(&cfg);

    match commands.command.unwrap_or(Commands::Demo) {
        Commands::Demo => demo::demo(),
        Commands::Factorial { numbers } => {
            print::header("factorial", &cfg);
            factorial::factorial(&numbers)
        }
        Commands::Prime { numbers } => {
            print::header("primality", &cfg);
            prime::prime(&numbers)
        }
    }
}
