use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod ask_cmd;
mod tools_cmd;

#[derive(Parser)]
#[command(name = "gantry", about = "Gantry CLI - bridge an LLM chat client to an MCP tool server")]
struct Cli {
    /// MCP tool server endpoint
    #[arg(long, env = "GANTRY_MCP_URL", default_value = "http://localhost:3000/mcp")]
    mcp_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Answer a query, letting the model call tools on the MCP server
    Ask {
        /// The user query
        query: String,

        /// Chat-completion API root (OpenAI-compatible)
        #[arg(long, env = "LLM_URL", default_value = "https://api.openai.com/v1")]
        llm_url: String,

        /// Model name
        #[arg(long, env = "LLM_MODEL", default_value = "gpt-3.5-turbo")]
        model: String,

        /// API key for the chat-completion service
        #[arg(long, env = "LLM_API_KEY")]
        api_key: Option<String>,
    },

    /// List the tools the MCP server exposes
    ListTools,

    /// Invoke a single tool directly and print its output
    Call {
        /// Tool name
        tool: String,

        /// Tool arguments as a JSON object
        #[arg(long, default_value = "{}")]
        arguments: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Ask {
            query,
            llm_url,
            model,
            api_key,
        } => {
            ask_cmd::run(&cli.mcp_url, &llm_url, &model, api_key, &query).await?;
        }
        Commands::ListTools => {
            tools_cmd::list(&cli.mcp_url).await?;
        }
        Commands::Call { tool, arguments } => {
            tools_cmd::call(&cli.mcp_url, &tool, &arguments).await?;
        }
    }

    Ok(())
}
