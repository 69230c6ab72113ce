use clap::{Parser, Subcommand};
use juris::headless::{self, Format};
use juris_core::config::Config;
use juris_core::query::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
use juris_core::validation::ProcessNumberRule;
use juris_webhooks::WebhookClient;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "juris",
    version,
    about = "Consulta de processos e análise de jurisprudência no terminal"
)]
struct Cli {
    /// Read configuration from this file instead of ~/.config/juris/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write debug logs to /tmp/juris-debug.log (tail -f to inspect).
    #[arg(long, global = true)]
    debug: bool,

    /// Process-number rule: `minimo` (at least 20 digits) or `exato`.
    #[arg(long, global = true, value_name = "REGRA")]
    regra_numero: Option<ProcessNumberRule>,

    #[command(subcommand)]
    command: Option<Cmd>,
}

#[derive(Subcommand)]
enum Cmd {
    /// Look up one judicial process.
    Processo {
        /// CNJ process number, digits only (no dots or dashes).
        numero: String,
        /// State sigla (UF), e.g. SP.
        #[arg(long, short)]
        estado: String,
        /// Also request the AI summary of the movements.
        #[arg(long)]
        resumo: bool,
        /// Print JSON instead of the result card.
        #[arg(long)]
        json: bool,
    },
    /// Search case law on a theme.
    Jurisprudencia {
        tema: String,
        /// Keyword to narrow the search; repeatable.
        #[arg(long = "palavra-chave", short = 'k', value_name = "PALAVRA")]
        palavras_chave: Vec<String>,
        #[arg(long, default_value_t = DEFAULT_PAGE)]
        page: u32,
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        page_size: u32,
        /// Print JSON instead of the analysis.
        #[arg(long)]
        json: bool,
    },
    /// List the 27 Brazilian states.
    Estados,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "juris: query failed");
            eprintln!("erro: {e:#}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    init_logging(cli.debug, cli.command.is_some())?;

    let mut config = load_config(cli.config.as_deref())?;
    if let Some(rule) = cli.regra_numero {
        config.validation.process_number_rule = rule;
    }
    let client = WebhookClient::new(&config.webhooks);
    let runtime = tokio::runtime::Runtime::new()?;

    let Some(command) = cli.command else {
        let summary_enabled = client.has_summary();
        tracing::info!(summary_enabled, "juris: starting TUI");
        return juris_tui::run(config, client, runtime.handle().clone());
    };

    let output = match command {
        Cmd::Estados => headless::render_states(),
        Cmd::Processo { numero, estado, resumo, json } => {
            if resumo {
                headless::require_summary(&client)?;
            }
            let rule = config.validation.process_number_rule;
            let report = runtime.block_on(headless::lookup_process(
                &client, &numero, &estado, rule, resumo,
            ))?;
            headless::render_process(&report, format(json))?
        }
        Cmd::Jurisprudencia { tema, palavras_chave, page, page_size, json } => {
            let outcome = runtime.block_on(headless::search_jurisprudence(
                &client,
                &tema,
                &palavras_chave,
                page,
                page_size,
            ))?;
            headless::render_jurisprudence(&outcome, format(json))?
        }
    };
    print!("{output}");
    Ok(())
}

fn format(json: bool) -> Format {
    if json {
        Format::Json
    } else {
        Format::Text
    }
}

fn load_config(path: Option<&std::path::Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Ok(Config::load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "config: falling back to defaults");
            Config::defaults()
        })),
    }
}

/// The TUI owns the terminal, so without `--debug` it gets no subscriber;
/// headless commands log warnings to stderr.
fn init_logging(debug: bool, headless: bool) -> anyhow::Result<()> {
    let filter = |default: &str| {
        tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default))
    };

    if debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/juris-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(filter("debug"))
            .init();
        tracing::info!("juris debug log started; tail -f /tmp/juris-debug.log");
    } else if headless {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(filter("warn"))
            .init();
    }
    Ok(())
}
