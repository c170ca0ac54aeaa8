//! `solrq`: encode parameters and talk to a configured search endpoint.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use tracing::info;

use solrq_core::config::SolrqConfig;
use solrq_core::types::Response;
use solrq_http::{HttpTransport, QuickQuery, SolrClient};
use solrq_params::{FacetParams, PlainParams, Query, SuggestParams, UpdateParams};

#[derive(Debug, Parser)]
#[command(name = "solrq", version, about = "Query and update a Solr endpoint")]
struct Cli {
    /// Configuration file; defaults to ./solrq.toml plus SOLRQ_* variables.
    #[arg(long, global = true)]
    config: Option<String>,

    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    /// Client-wide request timeout; per-endpoint `timeout_ms` still applies.
    #[arg(long, global = true)]
    timeout_ms: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Args)]
struct Target {
    /// Endpoint name from the configuration, or a literal http(s) URL.
    #[arg(short, long)]
    endpoint: String,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the query string for key=value pairs.
    Encode {
        #[arg(value_parser = parse_pair)]
        pairs: Vec<(String, String)>,
    },
    Search {
        #[command(flatten)]
        target: Target,
        #[arg(short, long, default_value = "*:*")]
        q: String,
        #[arg(long)]
        rows: Option<u64>,
        #[arg(long)]
        start: Option<u64>,
        #[arg(long)]
        fq: Vec<String>,
        #[arg(long)]
        fl: Vec<String>,
        #[arg(long)]
        sort: Option<String>,
        #[arg(long)]
        facet_field: Vec<String>,
    },
    Suggest {
        #[command(flatten)]
        target: Target,
        text: String,
        #[arg(long)]
        dictionary: Vec<String>,
        #[arg(long)]
        count: Option<u32>,
    },
    /// Add the documents in a JSON file (one object or an array).
    Update {
        #[command(flatten)]
        target: Target,
        #[arg(long)]
        file: PathBuf,
        #[arg(long)]
        commit: bool,
    },
    Delete {
        #[command(flatten)]
        target: Target,
        #[arg(long)]
        id: Vec<String>,
        #[arg(long)]
        query: Vec<String>,
        #[arg(long)]
        commit: bool,
    },
    Commit {
        #[command(flatten)]
        target: Target,
    },
    Optimize {
        #[command(flatten)]
        target: Target,
    },
    Rollback {
        #[command(flatten)]
        target: Target,
    },
}

fn init_logging(level: &str) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("solrq={level},solrq_http={level}")));

    tracing_subscriber::registry().with(fmt::layer().with_writer(std::io::stderr)).with(filter).init();
}

fn parse_pair(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected key=value, got '{s}'")),
    }
}

fn transport(timeout_ms: Option<u64>) -> anyhow::Result<HttpTransport> {
    let Some(timeout_ms) = timeout_ms else {
        return Ok(HttpTransport::new()?);
    };
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_millis(timeout_ms))
        .build()
        .context("building HTTP client")?;
    Ok(HttpTransport::with_client(client))
}

fn connect(path: Option<&str>, timeout_ms: Option<u64>) -> anyhow::Result<SolrClient> {
    let config = match path {
        Some(path) => SolrqConfig::load_from(path).with_context(|| format!("loading {path}"))?,
        None => SolrqConfig::load().context("loading configuration")?,
    };
    info!(endpoints = config.endpoints.len(), "configuration loaded");
    Ok(SolrClient::with_transport(config, transport(timeout_ms)?))
}

fn print_response(response: &Response) -> anyhow::Result<()> {
    println!("{}", response.body);
    if !response.is_success() {
        bail!("endpoint answered with status {}", response.status);
    }
    Ok(())
}

fn read_docs(path: &Path) -> anyhow::Result<serde_json::Value> {
    let raw = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let config = cli.config.as_deref();
    let timeout_ms = cli.timeout_ms;

    let response = match cli.command {
        Command::Encode { pairs } => {
            let params: PlainParams = pairs.into_iter().collect();
            println!("{}", params.encode()?);
            return Ok(());
        }
        Command::Search { target, q, rows, start, fq, fl, sort, facet_field } => {
            let client = connect(config, timeout_ms)?;
            let quick = QuickQuery { rows, start, filters: fq, fields: fl, sort, ..QuickQuery::new(q) };
            if facet_field.is_empty() {
                client.q(target.endpoint, &quick)?
            } else {
                let facet = FacetParams { field: facet_field, ..Default::default() };
                let query = Query::batch([quick.to_query(), facet.into()]);
                client.search(target.endpoint, Some(&query))?
            }
        }
        Command::Suggest { target, text, dictionary, count } => {
            let client = connect(config, timeout_ms)?;
            let suggest = SuggestParams { dictionary, count, ..SuggestParams::new(text) };
            client.suggest(target.endpoint, &suggest)?
        }
        Command::Update { target, file, commit } => {
            let docs = read_docs(&file)?;
            connect(config, timeout_ms)?.add_docs(target.endpoint, docs, commit)?
        }
        Command::Delete { target, id, query, commit } => {
            if id.is_empty() && query.is_empty() {
                bail!("delete needs at least one --id or --query");
            }
            let update = UpdateParams { delete_id: id, delete_query: query, ..UpdateParams::default() };
            let update = if commit { update.with_commit() } else { update };
            connect(config, timeout_ms)?.update(target.endpoint, &update)?
        }
        Command::Commit { target } => connect(config, timeout_ms)?.commit(target.endpoint)?,
        Command::Optimize { target } => connect(config, timeout_ms)?.optimize(target.endpoint)?,
        Command::Rollback { target } => connect(config, timeout_ms)?.rollback(target.endpoint)?,
    };

    info!(status = response.status, "done");
    print_response(&response)
}
