use clap::{Parser, Subcommand};

mod cart;

#[derive(Debug, Parser)]
#[command(name = "solarcart-app", about = "SolarCart CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Cart(cart::CartCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Cart(command) => cart::run(command).await,
        }
    }
}
