use anyhow::{Context, Result};
use apiclient::{
    domain::{
        requests::conversation::{Attachment, FindAllConversations, SendMessageRequest},
        response::{account::Channel, conversation::ConversationStatus, session::Session},
    },
    state::AppState,
};
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use prometheus_client::encoding::text::encode;
use serde::Serialize;
use shared::{
    config::Config,
    utils::{Telemetry, init_logger},
};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "inbox", about = "Command-line client for the sales inbox API")]
struct Cli {
    /// Overrides API_BASE_URL.
    #[arg(long)]
    base_url: Option<String>,

    /// Print collected client metrics to stderr after the command.
    #[arg(long)]
    print_metrics: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List connected email and LinkedIn accounts.
    Accounts,
    /// List pipeline stages.
    Stages,
    /// List team members.
    Team,
    /// List routing rules.
    Rules,
    /// List conversations.
    Conversations {
        #[arg(long)]
        status: Option<ConversationStatus>,
        #[arg(long)]
        account_id: Option<String>,
        #[arg(long)]
        channel: Option<Channel>,
        #[arg(long)]
        search: Option<String>,
    },
    /// List messages of a conversation.
    Messages { conversation_id: String },
    /// Send a message to a conversation.
    Send {
        conversation_id: String,
        body: String,
        #[arg(long = "attach")]
        attachments: Vec<PathBuf>,
    },
    /// Store a session for subsequent requests.
    Login {
        #[arg(long)]
        token: String,
        #[arg(long)]
        user_id: String,
        #[arg(long)]
        role: Option<String>,
    },
    /// Remove the stored session.
    Logout,
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).context("Failed to format response")?
    );
    Ok(())
}

async fn read_attachments(paths: &[PathBuf]) -> Result<Vec<Attachment>> {
    let mut attachments = Vec::with_capacity(paths.len());

    for path in paths {
        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read attachment {}", path.display()))?;

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "attachment".to_string());

        attachments.push(Attachment {
            file_name,
            mime_type: None,
            bytes,
        });
    }

    Ok(attachments)
}

async fn run(state: &AppState, command: Command) -> Result<()> {
    let di = &state.di_container;

    match command {
        Command::Accounts => print_json(&di.account_client.find_all().await?),
        Command::Stages => print_json(&di.stage_client.find_all().await?),
        Command::Team => print_json(&di.team_member_client.find_all().await?),
        Command::Rules => print_json(&di.routing_rule_client.find_all().await?),
        Command::Conversations {
            status,
            account_id,
            channel,
            search,
        } => {
            let req = FindAllConversations {
                status,
                account_id,
                channel,
                search,
                ..Default::default()
            };
            print_json(&di.conversation_client.find_all(&req).await?)
        }
        Command::Messages { conversation_id } => {
            print_json(&di.conversation_client.find_messages(&conversation_id).await?)
        }
        Command::Send {
            conversation_id,
            body,
            attachments,
        } => {
            let req = SendMessageRequest {
                body,
                attachments: read_attachments(&attachments).await?,
            };
            print_json(
                &di.conversation_client
                    .send_message(&conversation_id, &req)
                    .await?,
            )
        }
        Command::Login {
            token,
            user_id,
            role,
        } => {
            let session = Session::new(token, user_id);
            let session = match role {
                Some(role) => session.with_role(role),
                None => session,
            };
            let raw = serde_json::to_string(&session).context("Failed to serialize session")?;
            state
                .session
                .write(&raw)
                .await
                .context("Failed to store session")?;
            info!("Session stored");
            Ok(())
        }
        Command::Logout => {
            state
                .session
                .clear()
                .await
                .context("Failed to remove session")?;
            info!("Session removed");
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let cli = Cli::parse();

    let mut config = Config::init().context("Failed to load configuration")?;
    if let Some(base_url) = &cli.base_url {
        config
            .set_base_url(base_url)
            .context("Invalid --base-url")?;
    }

    let providers = match &config.otel_endpoint {
        Some(endpoint) => {
            let telemetry = Telemetry::new("inbox", endpoint.clone());
            let logger_provider = telemetry.init_logger()?;
            let tracer_provider = telemetry.init_tracer()?;
            Some((tracer_provider, logger_provider))
        }
        None => None,
    };

    init_logger(
        providers.as_ref().map(|(_, logger)| logger),
        "inbox",
        config.dev_mode,
        config.enable_file_log,
    );

    let state = AppState::new(&config)
        .await
        .context("Failed to create AppState")?;

    let result = run(&state, cli.command).await;

    if cli.print_metrics {
        let mut buffer = String::new();
        encode(&mut buffer, &*state.registry.lock().await).context("Failed to encode metrics")?;
        eprintln!("{buffer}");
    }

    if let Some((tracer_provider, logger_provider)) = &providers {
        Telemetry::shutdown(tracer_provider, logger_provider)?;
    }

    result
}
