use crate::cli::args::{
    Args, BookmarkCommand, CollectionCommand, Command, EndpointCommand, ServerCommand,
    TimerCommand,
};
use crate::cli::output::{ConsoleWriter, OutputWriter, TextMode};
use crate::core::endpoint_type::EndpointType;
use crate::core::endpointish::Endpointish;
use crate::core::fields::{render_value, Field};
use crate::domain::error::GlobusResult;
use crate::domain::response::GlobusResponse;
use crate::infrastructure::client::{
    HttpTimerClient, HttpTransferClient, ServerList, TimerClient, TransferClient,
};
use crate::infrastructure::config::ConfigManager;
use crate::infrastructure::logging;
use serde_json::{json, Value};
use uuid::Uuid;

pub const GCP_SERVER_URI: &str = "none (Globus Connect Personal)";

const BOOKMARK_LIST_FIELDS: [Field; 4] = [
    Field::key("Name", "name"),
    Field::key("Endpoint ID", "endpoint_id"),
    Field::key("Bookmark ID", "id"),
    Field::key("Path", "path"),
];

const BOOKMARK_SHOW_FIELDS: [Field; 4] = [
    Field::key("ID", "id"),
    Field::key("Name", "name"),
    Field::key("Endpoint ID", "endpoint_id"),
    Field::key("Path", "path"),
];

const S3_SERVER_FIELDS: [Field; 1] = [Field::key("S3 URL", "s3_url")];

const SERVER_LIST_FIELDS: [Field; 2] = [Field::key("ID", "id"), Field::derived("URI", server_uri)];

const ENDPOINT_TYPE_FIELDS: [Field; 3] = [
    Field::key("Endpoint ID", "id"),
    Field::key("Display Name", "display_name"),
    Field::derived("Endpoint Type", endpoint_type_name),
];

const DELETED_JOB_FIELDS: [Field; 6] = [
    Field::key("Job ID", "job_id"),
    Field::key("Name", "name"),
    Field::derived("Type", job_action_type),
    Field::key("Start", "start"),
    Field::derived("Interval", job_interval),
    Field::key("Next Run", "next_run"),
];

/// Execute CLI command
pub async fn execute_command(args: Args) -> GlobusResult<()> {
    let config_manager = match &args.config {
        Some(path) => ConfigManager::with_path(path),
        None => ConfigManager::new(),
    };
    let config = config_manager.load_config()?;

    logging::init_logging(logging::derive_level(
        args.verbose,
        args.quiet,
        &config.global.log_level,
    ));

    let mut writer = ConsoleWriter::stdout(args.format, args.jmespath);

    match args.command {
        Command::Bookmark(bookmark_args) => {
            let client = HttpTransferClient::from_config(&config)?;
            execute_bookmark_command(bookmark_args.command, &client, &mut writer).await
        }
        Command::Endpoint(endpoint_args) => {
            let client = HttpTransferClient::from_config(&config)?;
            execute_endpoint_command(endpoint_args.command, &client, &mut writer).await
        }
        Command::Collection(collection_args) => {
            let client = HttpTransferClient::from_config(&config)?;
            execute_collection_command(collection_args.command, &client, &mut writer).await
        }
        Command::Timer(timer_args) => {
            let client = HttpTimerClient::from_config(&config)?;
            execute_timer_command(timer_args.command, &client, &mut writer).await
        }
    }
}

pub async fn execute_bookmark_command(
    command: BookmarkCommand,
    client: &dyn TransferClient,
    writer: &mut dyn OutputWriter,
) -> GlobusResult<()> {
    match command {
        BookmarkCommand::Create {
            endpoint_plus_path,
            bookmark_name,
        } => {
            let submit_data = json!({
                "endpoint_id": endpoint_plus_path.endpoint_id.to_string(),
                "path": endpoint_plus_path.path,
                "name": bookmark_name,
            });
            let res = client.create_bookmark(&submit_data).await?;
            tracing::info!(endpoint = %endpoint_plus_path, "bookmark created");

            let bookmark_id = res.get("id").map(render_value).unwrap_or_default();
            writer.display(&res, TextMode::Raw(format!("Bookmark ID: {bookmark_id}")))?;
            Ok(())
        }
        BookmarkCommand::List => {
            let res = client.bookmark_list().await?;
            writer.display(&res, TextMode::Table(&BOOKMARK_LIST_FIELDS))?;
            Ok(())
        }
        BookmarkCommand::Show { bookmark_id } => {
            let res = client.get_bookmark(&bookmark_id).await?;
            writer.display(&res, TextMode::Record(&BOOKMARK_SHOW_FIELDS))?;
            Ok(())
        }
        BookmarkCommand::Rename {
            bookmark_id,
            new_bookmark_name,
        } => {
            let submit_data = json!({ "name": new_bookmark_name });
            let res = client.update_bookmark(&bookmark_id, &submit_data).await?;
            writer.display(&res, TextMode::Raw("Success".to_string()))?;
            Ok(())
        }
        BookmarkCommand::Delete { bookmark_id } => {
            let res = client.delete_bookmark(&bookmark_id).await?;
            writer.display(&res, TextMode::Raw(message_or_success(&res)))?;
            Ok(())
        }
    }
}

pub async fn execute_endpoint_command(
    command: EndpointCommand,
    client: &dyn TransferClient,
    writer: &mut dyn OutputWriter,
) -> GlobusResult<()> {
    match command {
        EndpointCommand::Server(server_args) => match server_args.command {
            ServerCommand::List { endpoint_id } => {
                server_list(&endpoint_id, client, writer).await
            }
        },
        EndpointCommand::ShowType { endpoint_id } => {
            let endpoint = Endpointish::new(client, endpoint_id).await?;
            writer.display(endpoint.data(), TextMode::Record(&ENDPOINT_TYPE_FIELDS))?;
            Ok(())
        }
    }
}

async fn server_list(
    endpoint_id: &Uuid,
    client: &dyn TransferClient,
    writer: &mut dyn OutputWriter,
) -> GlobusResult<()> {
    let (endpoint, server_list) = client.get_endpoint_w_server_list(endpoint_id).await?;

    match server_list {
        ServerList::S3 => {
            let s3_url = endpoint.get("s3_url").cloned().unwrap_or(Value::Null);
            let res = GlobusResponse::new(json!({ "s3_url": s3_url }));
            writer.display(&res, TextMode::Record(&S3_SERVER_FIELDS))?;
        }
        ServerList::Servers(servers) => {
            writer.display(&servers, TextMode::Table(&SERVER_LIST_FIELDS))?;
        }
    }
    Ok(())
}

pub async fn execute_collection_command(
    command: CollectionCommand,
    client: &dyn TransferClient,
    writer: &mut dyn OutputWriter,
) -> GlobusResult<()> {
    match command {
        CollectionCommand::EndpointId { collection_id } => {
            let collection = Endpointish::new(client, collection_id).await?;
            let endpoint_id =
                collection.get_collection_endpoint_id("globus collection endpoint-id")?;

            let res = GlobusResponse::new(json!({
                "collection_id": collection_id.to_string(),
                "endpoint_id": endpoint_id,
            }));
            writer.display(&res, TextMode::Raw(endpoint_id))?;
            Ok(())
        }
    }
}

pub async fn execute_timer_command(
    command: TimerCommand,
    client: &dyn TimerClient,
    writer: &mut dyn OutputWriter,
) -> GlobusResult<()> {
    match command {
        TimerCommand::Delete { job_id } => {
            let deleted = client.delete_job(&job_id).await?;
            tracing::info!(%job_id, "timer job deleted");
            writer.display(&deleted, TextMode::Record(&DELETED_JOB_FIELDS))?;
            Ok(())
        }
    }
}

fn message_or_success(res: &GlobusResponse) -> String {
    res.get_str("message")
        .map(str::to_string)
        .unwrap_or_else(|| "Success".to_string())
}

fn server_uri(server: &Value) -> String {
    server
        .get("uri")
        .and_then(Value::as_str)
        .filter(|uri| !uri.is_empty())
        .unwrap_or(GCP_SERVER_URI)
        .to_string()
}

fn endpoint_type_name(endpoint: &Value) -> String {
    EndpointType::determine(endpoint).to_string()
}

fn job_action_type(job: &Value) -> String {
    match job.get("callback_url").and_then(Value::as_str) {
        Some("https://actions.automate.globus.org/transfer/transfer/run") => "Transfer".to_string(),
        Some(url) if url.starts_with("https://flows.automate.globus.org") => "Flow".to_string(),
        Some(url) => url.to_string(),
        None => String::new(),
    }
}

fn job_interval(job: &Value) -> String {
    job.get("interval")
        .and_then(Value::as_f64)
        .map(|seconds| format_interval(seconds as u64))
        .unwrap_or_default()
}

/// `H:MM:SS`, prefixed with `N day(s), ` when at least a day long
pub fn format_interval(total_seconds: u64) -> String {
    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3_600;
    let minutes = (total_seconds % 3_600) / 60;
    let seconds = total_seconds % 60;
    let clock = format!("{hours}:{minutes:02}:{seconds:02}");
    match days {
        0 => clock,
        1 => format!("1 day, {clock}"),
        n => format!("{n} days, {clock}"),
    }
}
