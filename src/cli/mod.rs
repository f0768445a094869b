// Command-line interface

pub mod commands;

use clap::{Parser, Subcommand};

use crate::sanitize::OutputContext;

#[derive(Parser, Debug)]
#[command(name = "vetdir-sanitizer")]
#[command(about = "Input sanitization service for the veteran resource directory", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the sanitization API server
    Serve {
        /// Port to listen on
        #[arg(short, long, env = "PORT")]
        port: Option<u16>,

        /// Host to bind to
        #[arg(long, env = "HOST")]
        host: Option<String>,
    },

    /// Sanitize text for an output context and print the result
    Sanitize {
        /// Text to sanitize (read from stdin when omitted)
        text: Option<String>,

        /// Output context
        #[arg(short, long, value_enum, default_value_t = OutputContext::PlainText)]
        context: OutputContext,

        /// Maximum length of the sanitized output (plain_text only)
        #[arg(short, long)]
        max_length: Option<usize>,
    },

    /// Report which dangerous constructs the text contains
    Scan {
        /// Text to scan (read from stdin when omitted)
        text: Option<String>,
    },
}
