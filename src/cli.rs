use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// JSON Schema Builder - visual editor for nested field schemas
#[derive(Parser, Debug, Clone)]
#[command(name = "schema-builder", version, about, long_about = None)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, env = "SCHEMA_BUILDER_CONFIG", default_value = "schema-builder.toml")]
    pub config: PathBuf,

    /// Server host address
    #[arg(long, env = "SCHEMA_BUILDER_HOST", global = true)]
    pub host: Option<String>,

    /// Server port
    #[arg(long, env = "SCHEMA_BUILDER_PORT", global = true)]
    pub port: Option<u16>,

    /// Spaces per indentation level of generated JSON
    #[arg(long, env = "SCHEMA_BUILDER_INDENT", global = true)]
    pub indent: Option<usize>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "SCHEMA_BUILDER_LOG_LEVEL", global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Serve the editor UI (default)
    Serve,

    /// Project a forest document to its schema and print it
    Generate {
        /// Forest JSON file; reads stdin when omitted or "-"
        input: Option<PathBuf>,

        /// Reject documents that are not a well-formed field list
        #[arg(long)]
        strict: bool,
    },
}

impl Cli {
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Serve)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["schema-builder"]);
        assert_eq!(cli.config, PathBuf::from("schema-builder.toml"));
        assert!(cli.host.is_none());
        assert!(cli.port.is_none());
        assert!(cli.indent.is_none());
        assert!(cli.log_level.is_none());
        assert_eq!(cli.command(), Command::Serve);
    }

    #[test]
    fn test_cli_with_args() {
        let cli = Cli::parse_from([
            "schema-builder",
            "--config",
            "custom.toml",
            "--host",
            "0.0.0.0",
            "--port",
            "8080",
            "--log-level",
            "debug",
            "serve",
        ]);
        assert_eq!(cli.config, PathBuf::from("custom.toml"));
        assert_eq!(cli.host, Some("0.0.0.0".to_string()));
        assert_eq!(cli.port, Some(8080));
        assert_eq!(cli.log_level, Some("debug".to_string()));
        assert_eq!(cli.command(), Command::Serve);
    }

    #[test]
    fn test_cli_generate() {
        let cli = Cli::parse_from(["schema-builder", "generate", "fields.json", "--strict", "--indent", "4"]);
        assert_eq!(cli.indent, Some(4));
        assert_eq!(
            cli.command(),
            Command::Generate {
                input: Some(PathBuf::from("fields.json")),
                strict: true,
            }
        );

        let cli = Cli::parse_from(["schema-builder", "generate"]);
        assert_eq!(
            cli.command(),
            Command::Generate {
                input: None,
                strict: false,
            }
        );
    }
}
