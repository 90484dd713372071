//! Ward CLI - Community issue reporting in the terminal
//!
//! Main entry point for the ward command-line tool.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ward")]
#[command(about = "Ward - Report and track civic issues from the terminal", long_about = None)]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize ward configuration
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init { force }) => {
            println!("Initializing Ward...");
            match ward::init::initialize(force) {
                Ok(_) => {
                    println!("✓ Ward initialized successfully");
                    println!(
                        "  Configuration: {}",
                        ward::init::get_user_config_path()?.display()
                    );
                    println!("\nEdit the configuration file to set your location.");
                    Ok(())
                }
                Err(e) => {
                    eprintln!("✗ Initialization failed: {}", e);
                    Err(e.into())
                }
            }
        }
        None => {
            // Logging goes to a file so the alternate screen stays clean
            let config = ward::load_config().await?;
            ward::logging::init(&config)?;

            let location = ward::locate::resolve(&config.location).await;
            let store = ward_core::IssueStore::with_seed();
            let mut app = ward::App::new(store, config, location);

            ward::run_tui(&mut app).await
        }
    }
}
