mod commands;
mod terminal;

use commands::{CommandLine, Commands, announce, ports};
use terminal::logging;

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose);

    match commands.command {
        Commands::Announce(args) => announce::announce(args),
        Commands::Ports => ports::ports(),
    }
}
