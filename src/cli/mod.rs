pub mod init;
pub mod serve;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ridgeline")]
#[command(version)]
#[command(about = "Marketing site and content backend for Ridgeline Advisory", long_about = None)]
pub struct Cli {
    #[arg(short, long, default_value = "ridgeline.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scaffold a new site directory with a config file
    Init {
        #[arg(default_value = ".")]
        path: PathBuf,
        #[arg(long)]
        name: Option<String>,
    },
    /// Run the web server
    Serve {
        /// Bind address; defaults to [server] host from the config
        #[arg(short = 'H', long)]
        host: Option<String>,
        /// Bind port; defaults to [server] port from the config
        #[arg(short, long)]
        port: Option<u16>,
    },
}
