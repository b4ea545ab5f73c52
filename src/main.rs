use clap::Parser;
use pwvault::cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::GenerateKey { force } => pwvault::cli::commands::generate_key::execute(&cli, force),
        Commands::Create { ref entries, force } => {
            pwvault::cli::commands::create::execute(&cli, entries, force)
        }
        Commands::Add {
            ref service,
            ref password,
        } => pwvault::cli::commands::add::execute(&cli, service, password.as_deref()),
        Commands::Update {
            ref service,
            ref password,
        } => pwvault::cli::commands::update::execute(&cli, service, password.as_deref()),
        Commands::Get { ref service } => pwvault::cli::commands::get::execute(&cli, service),
        Commands::List => pwvault::cli::commands::list::execute(&cli),
    };

    if let Err(e) = result {
        pwvault::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
