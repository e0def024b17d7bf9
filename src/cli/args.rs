use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Command line arguments for the Globus CLI
#[derive(Parser, Debug)]
#[command(
    name = "globus",
    version = env!("CARGO_PKG_VERSION"),
    about = "Command line interface for Globus transfer and timer services",
    long_about = "A command line interface to manage Globus bookmarks, inspect endpoints and their servers, and manage timer jobs."
)]
pub struct Args {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Output format for stdout
    #[arg(
        short = 'F',
        long,
        value_enum,
        ignore_case = true,
        default_value = "text",
        global = true
    )]
    pub format: OutputFormat,

    /// JMESPath expression applied to JSON output (implies --format json unless unix)
    #[arg(long, visible_alias = "jq", value_name = "EXPR", global = true)]
    pub jmespath: Option<String>,

    /// Command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Manage endpoint bookmarks
    Bookmark(BookmarkArgs),
    /// Inspect endpoints and their servers
    Endpoint(EndpointArgs),
    /// Inspect GCSv5 collections
    Collection(CollectionArgs),
    /// Manage timer jobs
    Timer(TimerArgs),
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output
    Json,
    /// Tab separated output for shell pipelines
    Unix,
}

/// Bookmark management arguments
#[derive(ClapArgs, Debug)]
pub struct BookmarkArgs {
    /// Bookmark subcommand
    #[command(subcommand)]
    pub command: BookmarkCommand,
}

/// Endpoint arguments
#[derive(ClapArgs, Debug)]
pub struct EndpointArgs {
    /// Endpoint subcommand
    #[command(subcommand)]
    pub command: EndpointCommand,
}

/// Server listing arguments
#[derive(ClapArgs, Debug)]
pub struct ServerArgs {
    /// Server subcommand
    #[command(subcommand)]
    pub command: ServerCommand,
}

/// Collection arguments
#[derive(ClapArgs, Debug)]
pub struct CollectionArgs {
    /// Collection subcommand
    #[command(subcommand)]
    pub command: CollectionCommand,
}

/// Timer arguments
#[derive(ClapArgs, Debug)]
pub struct TimerArgs {
    /// Timer subcommand
    #[command(subcommand)]
    pub command: TimerCommand,
}

/// Bookmark subcommands
#[derive(Subcommand, Debug)]
pub enum BookmarkCommand {
    /// Create a bookmark for the current user
    Create {
        /// Endpoint and path, as ENDPOINT_ID:PATH
        #[arg(value_name = "ENDPOINT_ID:PATH", value_parser = parse_endpoint_plus_path)]
        endpoint_plus_path: EndpointPath,
        /// Name for the bookmark
        bookmark_name: String,
    },
    /// List bookmarks for the current user
    List,
    /// Show a bookmark
    Show {
        /// ID of the bookmark
        bookmark_id: Uuid,
    },
    /// Change a bookmark's name
    Rename {
        /// ID of the bookmark
        bookmark_id: Uuid,
        /// New name for the bookmark
        new_bookmark_name: String,
    },
    /// Delete a bookmark
    Delete {
        /// ID of the bookmark
        bookmark_id: Uuid,
    },
}

/// Endpoint subcommands
#[derive(Subcommand, Debug)]
pub enum EndpointCommand {
    /// Manage endpoint servers
    Server(ServerArgs),
    /// Display the type of an endpoint or collection
    ShowType {
        /// ID of the endpoint
        endpoint_id: Uuid,
    },
}

/// Server subcommands
#[derive(Subcommand, Debug)]
pub enum ServerCommand {
    /// List all servers for an endpoint
    List {
        /// ID of the endpoint
        endpoint_id: Uuid,
    },
}

/// Collection subcommands
#[derive(Subcommand, Debug)]
pub enum CollectionCommand {
    /// Display the ID of the endpoint hosting a collection
    EndpointId {
        /// ID of the collection
        collection_id: Uuid,
    },
}

/// Timer subcommands
#[derive(Subcommand, Debug)]
pub enum TimerCommand {
    /// Delete a timer job and print its former contents
    Delete {
        /// ID of the job
        job_id: Uuid,
    },
}

/// An endpoint ID paired with a path on that endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointPath {
    pub endpoint_id: Uuid,
    pub path: String,
}

/// Parse `ENDPOINT_ID:PATH`; the path may itself contain colons
pub fn parse_endpoint_plus_path(value: &str) -> Result<EndpointPath, String> {
    let (endpoint_id, path) = value
        .split_once(':')
        .ok_or_else(|| format!("'{value}' is not of the form ENDPOINT_ID:PATH"))?;

    let endpoint_id = Uuid::parse_str(endpoint_id)
        .map_err(|e| format!("'{endpoint_id}' is not a valid endpoint ID: {e}"))?;

    if path.is_empty() {
        return Err(format!("'{value}' has no path after the endpoint ID"));
    }

    Ok(EndpointPath {
        endpoint_id,
        path: path.to_string(),
    })
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Unix => write!(f, "unix"),
        }
    }
}

impl std::fmt::Display for EndpointPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.endpoint_id, self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EP_ID: &str = "ddb59aef-6d04-11e5-ba46-22000b92c6ec";

    #[test]
    fn test_parse_endpoint_plus_path() {
        let parsed = parse_endpoint_plus_path(&format!("{EP_ID}:/~/data:v2")).unwrap();
        assert_eq!(parsed.endpoint_id.to_string(), EP_ID);
        assert_eq!(parsed.path, "/~/data:v2");
        assert_eq!(parsed.to_string(), format!("{EP_ID}:/~/data:v2"));
    }

    #[test]
    fn test_parse_endpoint_plus_path_errors() {
        assert!(parse_endpoint_plus_path(EP_ID).is_err());
        assert!(parse_endpoint_plus_path(&format!("{EP_ID}:")).is_err());
        assert!(parse_endpoint_plus_path("not-a-uuid:/path").is_err());
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let args = Args::try_parse_from([
            "globus",
            "bookmark",
            "show",
            EP_ID,
            "-F",
            "JSON",
            "--jq",
            "name",
        ])
        .unwrap();
        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(args.jmespath.as_deref(), Some("name"));
        assert!(matches!(
            args.command,
            Command::Bookmark(BookmarkArgs {
                command: BookmarkCommand::Show { .. }
            })
        ));
    }

    #[test]
    fn test_missing_argument_is_usage_error() {
        let err = Args::try_parse_from(["globus", "bookmark", "rename", EP_ID]).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
