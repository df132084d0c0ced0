use anyhow::Result;
use kanri::commands::Cli;

fn main() -> Result<()> {
    Cli::menu()
}
