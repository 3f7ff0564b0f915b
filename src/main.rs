use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};

use hacker_stories::api::StoriesClient;
use hacker_stories::config::Config;
use hacker_stories::logging;
use hacker_stories::storage::{self, KeyValueStore, PersistedValue, SEARCH_KEY};
use hacker_stories::stories::{sorted, total_comments, SortKey};
use hacker_stories::ui;

#[derive(Parser, Debug)]
#[command(name = "hacker-stories", version, about = "Search Hacker News stories from the terminal")]
struct Cli {
    /// Config file (default: <config_dir>/hacker-stories/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the search API base URL
    #[arg(long, value_name = "URL")]
    api_base: Option<String>,

    /// Start with this search term instead of the remembered one
    #[arg(long, value_name = "TERM")]
    term: Option<String>,

    /// Print one page of results to stdout and exit
    #[arg(long)]
    print: bool,

    /// Page to print
    #[arg(long, default_value_t = 0, requires = "print")]
    page: u32,

    /// Sort order for printed results
    #[arg(long, value_enum, default_value_t = SortArg::None, requires = "print")]
    sort: SortArg,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SortArg {
    None,
    Title,
    Author,
    Comments,
    Points,
}

impl From<SortArg> for SortKey {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::None => SortKey::None,
            SortArg::Title => SortKey::Title,
            SortArg::Author => SortKey::Author,
            SortArg::Comments => SortKey::Comment,
            SortArg::Points => SortKey::Point,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    if cli.print {
        logging::init_stderr_tracing(&config.logging).context("failed to set up logging")?;
        let term = match &cli.term {
            Some(term) => term.clone(),
            None => hydrate_term(&config).get().to_string(),
        };
        return runtime.block_on(print_stories(&config, &term, cli.page, cli.sort.into()));
    }

    logging::init_file_tracing(&config.logging).context("failed to open log file")?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting");

    let mut search_term = hydrate_term(&config);
    if let Some(term) = cli.term {
        if let Err(err) = search_term.set(term) {
            tracing::warn!("failed to persist search term: {}", err);
        }
    }

    ui::run(&config, search_term, runtime.handle().clone())?;
    Ok(())
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let path = cli.config.clone().unwrap_or_else(Config::config_path);
    let mut config = Config::load_from(&path)?;
    if let Some(base) = &cli.api_base {
        config.api.base_url = base.clone();
        config.validate()?;
    }
    Ok(config)
}

fn hydrate_term(config: &Config) -> PersistedValue<Box<dyn KeyValueStore>> {
    let store = storage::open_or_memory(&config.storage.resolved_path());
    PersistedValue::hydrate(store, SEARCH_KEY, config.search.default_term.clone())
}

async fn print_stories(config: &Config, term: &str, page: u32, sort: SortKey) -> anyhow::Result<()> {
    let client = StoriesClient::new(&config.api)?;
    let response = client
        .search(term, page)
        .await
        .with_context(|| format!("search for '{}' failed", term))?;

    let mut out = io::stdout().lock();
    for story in sorted(&response.hits, sort) {
        writeln!(
            out,
            "{:>6} {:>6}  {}  ({})",
            story.points, story.num_comments, story.title, story.author
        )?;
    }
    writeln!(
        out,
        "page {} | {} stories | {} comments",
        response.page,
        response.hits.len(),
        total_comments(&response.hits)
    )?;
    Ok(())
}
