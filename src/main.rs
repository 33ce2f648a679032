//! Cooking Agent CLI.
//!
//! Usage:
//!   cooking-agent chat                 Start an interactive conversation
//!   cooking-agent ask <message>        Answer a single message
//!   cooking-agent recipes <cuisine>    Run a tool directly (also: ingredients, tips)
//!   cooking-agent route <message>      Show how the keyword router reads a message
//!   cooking-agent check                Verify the chat-completion endpoint
//!   cooking-agent init                 Write a default config file

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::Path;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use cooking_agent::agent::{self, CookingAgent};
use cooking_agent::catalog::{self, Difficulty, RECIPE_CATALOG};
use cooking_agent::config::{self, CookingConfig, CONFIG_FILE};
use cooking_agent::inference::InferenceClient;
use cooking_agent::router;
use cooking_agent::tools;
use cooking_agent::types::DispatchMode;

// ---------------------------------------------------------------------------
// CLI definition
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(name = "cooking-agent")]
#[command(version)]
#[command(about = "Conversational cooking assistant")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to the cooking-agent home directory [default: ~/.cooking-agent].
    #[arg(long, global = true)]
    home: Option<String>,

    /// Log level (debug, info, warn, error). Overrides the config file.
    #[arg(long, global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start an interactive conversation (default).
    Chat {
        /// How turns reach the cooking tools.
        #[arg(long, value_enum)]
        mode: Option<DispatchMode>,
    },

    /// Answer a single message and exit.
    Ask {
        #[arg(long, value_enum)]
        mode: Option<DispatchMode>,

        #[arg(required = true, trailing_var_arg = true)]
        message: Vec<String>,
    },

    /// Search recipes by cuisine and difficulty.
    Recipes {
        cuisine: String,

        #[arg(long, short, default_value = tools::DEFAULT_DIFFICULTY)]
        difficulty: String,
    },

    /// List ingredients for a recipe.
    Ingredients {
        #[arg(required = true, trailing_var_arg = true)]
        recipe_name: Vec<String>,
    },

    /// Show cooking tips for a topic.
    Tips {
        #[arg(required = true, trailing_var_arg = true)]
        topic: Vec<String>,
    },

    /// List the cuisines, recipes and topics the tools know about.
    Catalog,

    /// Show which lookup the keyword router picks for a message.
    Route {
        #[arg(required = true, trailing_var_arg = true)]
        message: Vec<String>,
    },

    /// Send a test prompt to the configured chat-completion endpoint.
    Check,

    /// Write a default config file.
    Init {
        /// Overwrite an existing config file.
        #[arg(long)]
        force: bool,
    },
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let home_dir = config::resolve_home(cli.home.as_deref());
    let config_path = home_dir.join(CONFIG_FILE);
    let cfg = config::load_with_env(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

    // Initialize logging
    let log_level = cli.log_level.as_deref().unwrap_or(&cfg.log_level);
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    debug!("Using config {}", config_path.display());

    match cli.command.unwrap_or(Commands::Chat { mode: None }) {
        Commands::Chat { mode } => cmd_chat(cfg, mode).await,
        Commands::Ask { mode, message } => cmd_ask(cfg, mode, &message.join(" ")).await,
        Commands::Recipes {
            cuisine,
            difficulty,
        } => {
            print!("{}", tools::search_recipes(&cuisine, &difficulty));
            Ok(())
        }
        Commands::Ingredients { recipe_name } => {
            print!("{}", tools::extract_ingredients(&recipe_name.join(" ")));
            Ok(())
        }
        Commands::Tips { topic } => {
            print!("{}", tools::get_cooking_tips(&topic.join(" ")));
            Ok(())
        }
        Commands::Catalog => cmd_catalog(),
        Commands::Route { message } => cmd_route(&message.join(" ")),
        Commands::Check => cmd_check(cfg).await,
        Commands::Init { force } => cmd_init(&config_path, force),
    }
}

// ---------------------------------------------------------------------------
// Command implementations
// ---------------------------------------------------------------------------

async fn cmd_chat(cfg: CookingConfig, mode: Option<DispatchMode>) -> Result<()> {
    let agent = build_agent(&cfg, mode)?;

    let cancel = CancellationToken::new();
    let ctrl_c_cancel = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            ctrl_c_cancel.cancel();
        }
    });

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    agent::run_chat_loop(&agent, stdin, &mut stdout, cancel).await
}

async fn cmd_ask(cfg: CookingConfig, mode: Option<DispatchMode>, message: &str) -> Result<()> {
    let agent = build_agent(&cfg, mode)?;
    let mut conversation = agent.new_conversation();
    let reply = agent.respond(&mut conversation, message).await?;
    println!("{}", reply);
    info!("Used {} tokens", conversation.usage().total_tokens);
    Ok(())
}

fn cmd_catalog() -> Result<()> {
    println!("{}", "Cuisines".bold());
    for cuisine in RECIPE_CATALOG {
        let counts: Vec<String> = Difficulty::ALL
            .iter()
            .map(|d| format!("{} {}", cuisine.recipes(*d).len(), d))
            .collect();
        println!("  {:<10} {}", cuisine.name, counts.join(", ").dimmed());
    }

    println!("\n{}", "Ingredient lists".bold());
    for key in catalog::recipe_keys() {
        println!("  {}", catalog::title_case(key));
    }

    println!("\n{}", "Tip topics".bold());
    for topic in catalog::topics() {
        println!("  {}", topic);
    }
    Ok(())
}

fn cmd_route(message: &str) -> Result<()> {
    match router::route(message) {
        Some(intent) => {
            println!("{} {:?}\n", "Intent:".green().bold(), intent);
            print!("{}", intent.dispatch());
        }
        None => println!("{} none (the model would answer)", "Intent:".yellow().bold()),
    }
    Ok(())
}

async fn cmd_check(cfg: CookingConfig) -> Result<()> {
    require_credentials(&cfg);
    let client = InferenceClient::from_config(&cfg)?;

    let key_prefix: String = cfg.api_key.chars().take(10).collect();
    println!("Testing {} with endpoint: {}", cfg.provider, client.url());
    println!("Model: {}", cfg.effective_model());
    println!("Key (first 10 chars): {}...", key_prefix);

    match client.ping().await {
        Ok(reply) => {
            println!("\n{} Success!", "✅".green());
            println!("Response: {}", reply);
            Ok(())
        }
        Err(e) => {
            println!("\n{} Error: {:#}", "❌".red(), e);
            println!("\nPossible issues:");
            println!("1. The key may be expired or lack access to this model");
            println!("2. GitHub tokens need the 'models:read' scope");
            println!("3. Azure deployments must match AZURE_OPENAI_DEPLOYMENT");
            println!("4. Check the endpoint URL in {}", CONFIG_FILE);
            bail!("Connectivity check failed")
        }
    }
}

fn cmd_init(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "Config already exists at {} (use --force to overwrite)",
            config_path.display()
        );
    }
    config::save_config(&CookingConfig::default(), config_path)?;
    println!("Wrote default config to {}", config_path.display());
    Ok(())
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Exit with setup instructions when the provider cannot be reached.
fn require_credentials(cfg: &CookingConfig) {
    if let Err(e) = cfg.validate() {
        eprintln!("{} {}", "Error:".red().bold(), e);
        eprintln!("\nRun `cooking-agent init` to create a config file you can edit.");
        std::process::exit(1);
    }
}

fn build_agent(
    cfg: &CookingConfig,
    mode: Option<DispatchMode>,
) -> Result<CookingAgent<InferenceClient>> {
    require_credentials(cfg);
    let client = InferenceClient::from_config(cfg)?;
    let agent = CookingAgent::new(client, cfg).with_mode(mode.unwrap_or(cfg.mode));
    info!(
        "Cooking agent ready ({} via {}, mode: {})",
        cfg.effective_model(),
        cfg.provider,
        agent.mode()
    );
    Ok(agent)
}
