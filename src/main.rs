use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use leetquery::{
    interactive_ratatui::InteractiveSearch, output::format_question, trace, AuthSession,
    IdentitySession, Provider, QueryClient, SearchQuery, SettingsManager, MAX_QUESTIONS_LIMIT,
};
use std::io::{self, Write};
use std::sync::Arc;

#[derive(Parser)]
#[command(
    name = "leetquery",
    version,
    about = "Natural-language search for coding practice problems",
    long_about = None
)]
struct Cli {
    /// Natural-language description of the problem you are looking for
    query: Option<String>,

    /// Number of questions to request (default: the saved max-questions setting)
    #[arg(short = 'n', long)]
    num_questions: Option<usize>,

    /// Base URL of the search service
    #[arg(long, env = "LEETQUERY_BASE_URL", default_value = "http://127.0.0.1:8000")]
    base_url: String,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Show full problem descriptions without truncation
    #[arg(long)]
    full_text: bool,

    /// Interactive search mode
    #[arg(short = 'i', long)]
    interactive: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show or update stored settings
    Config {
        /// Set the OpenAI API key forwarded with each search
        #[arg(long)]
        api_key: Option<String>,
        /// Set the default number of questions (1-50)
        #[arg(long)]
        max_questions: Option<usize>,
    },
    /// Manage the signed-in identity session
    Auth {
        #[command(subcommand)]
        command: AuthCommands,
    },
}

#[derive(Subcommand)]
enum AuthCommands {
    /// Record a provider-issued token as the active session
    Login {
        /// Identity provider: google, microsoft, or apple
        #[arg(long)]
        provider: String,
        /// Token issued by the provider
        #[arg(long)]
        token: String,
        /// Display name to record with the session
        #[arg(long)]
        name: Option<String>,
        /// Email to record with the session
        #[arg(long)]
        email: Option<String>,
    },
    /// Drop the active session
    Logout,
    /// Show who is signed in
    Status,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    JsonL,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    trace::init_tracing();

    if let Some(command) = cli.command {
        return match command {
            Commands::Config {
                api_key,
                max_questions,
            } => run_config(api_key, max_questions),
            Commands::Auth { command } => run_auth(command),
        };
    }

    let settings_manager = SettingsManager::new()?;
    let session = Arc::new(AuthSession::initialize()?);
    let client = Arc::new(QueryClient::new(cli.base_url).with_session(session.clone()));

    if cli.interactive {
        let mut interactive = InteractiveSearch::new(client, settings_manager);
        return interactive.run();
    }

    // One-shot search mode - query is required.
    let query_text = cli.query.ok_or_else(|| {
        anyhow::anyhow!("Query argument is required (use --interactive for interactive mode)")
    })?;

    let settings = settings_manager.load()?;
    let limit = cli.num_questions.unwrap_or(settings.max_questions);

    let query = match SearchQuery::new(&query_text, &settings, limit) {
        Ok(query) => query,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let questions = match client.search(&query) {
        Ok(questions) => questions,
        Err(e) => {
            eprintln!("Search failed: {}", e.user_message());
            std::process::exit(1);
        }
    };

    // The server is expected to honor the limit; cap anyway.
    let shown = &questions[..questions.len().min(query.limit)];

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match cli.format {
        OutputFormat::Text => {
            if shown.is_empty() {
                println!("No matching problems found.");
            } else {
                println!("Found {} problems:\n", shown.len());
                for question in shown {
                    println!(
                        "{}\n",
                        format_question(question, !cli.no_color, cli.full_text)
                    );
                }
                if questions.len() > shown.len() {
                    eprintln!("(Showing {} of {} returned)", shown.len(), questions.len());
                }
            }
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "results": shown,
                "returned_count": questions.len(),
                "shown_count": shown.len(),
            });
            serde_json::to_writer_pretty(&mut handle, &output)?;
            writeln!(&mut handle)?;
        }
        OutputFormat::JsonL => {
            for question in shown {
                serde_json::to_writer(&mut handle, question)?;
                writeln!(&mut handle)?;
            }
        }
    }

    Ok(())
}

fn run_config(api_key: Option<String>, max_questions: Option<usize>) -> Result<()> {
    let manager = SettingsManager::new()?;

    if api_key.is_none() && max_questions.is_none() {
        let settings = manager.load()?;
        let key_display = if settings.api_key.is_empty() {
            "(not set)".to_string()
        } else {
            redact(&settings.api_key)
        };
        println!("api-key:       {key_display}");
        println!("max-questions: {}", settings.max_questions);
        return Ok(());
    }

    if let Some(n) = max_questions {
        if n == 0 || n > MAX_QUESTIONS_LIMIT {
            anyhow::bail!("max-questions must be between 1 and {MAX_QUESTIONS_LIMIT}");
        }
    }

    manager.update(|settings| {
        if let Some(key) = api_key {
            settings.api_key = key;
        }
        if let Some(n) = max_questions {
            settings.max_questions = n;
        }
    })?;
    println!("Settings saved.");

    Ok(())
}

fn run_auth(command: AuthCommands) -> Result<()> {
    let session = AuthSession::initialize()?;

    match command {
        AuthCommands::Login {
            provider,
            token,
            name,
            email,
        } => {
            let provider: Provider = provider.parse()?;
            let user = session.sign_in(provider, token, name, email)?;
            if user.display_name.is_empty() {
                println!("Signed in via {provider}.");
            } else {
                println!("Signed in as {} via {provider}.", user.display_name);
            }
        }
        AuthCommands::Logout => {
            session.sign_out()?;
            println!("Signed out.");
        }
        AuthCommands::Status => match session.current_user() {
            Some(user) => {
                let who = if user.display_name.is_empty() {
                    user.email.clone()
                } else if user.email.is_empty() {
                    user.display_name.clone()
                } else {
                    format!("{} <{}>", user.display_name, user.email)
                };
                println!("Signed in: {who}");
            }
            None => println!("Not signed in."),
        },
    }

    Ok(())
}

fn redact(key: &str) -> String {
    let visible: String = key.chars().take(5).collect();
    format!("{visible}...")
}
