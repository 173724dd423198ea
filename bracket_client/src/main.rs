//! Tournament bracket viewer.
//!
//! Fetches the matches of a competition from the tournament backend (or
//! reads them from a file), lays out the single-elimination bracket and
//! prints it as JSON, SVG or text.

use anyhow::{Context, Result, bail};
use bracket_layout::{BracketLayout, BracketView, layout_bracket, parse_match_payload};
use log::info;
use pico_args::Arguments;
use std::{
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};

use bracket_client::{
    api_client::{ApiClient, MatchEndpoint},
    config::{ClientConfig, ConfigError},
    render::{StatusPalette, render_svg, render_text},
};

const HELP: &str = "\
Render the bracket of a tournament competition

USAGE:
  bracket_client --competition ID [OPTIONS]
  bracket_client --input FILE [OPTIONS]

OPTIONS:
  --competition ID      Competition to fetch matches for
  --server URL          Backend base URL  [default: env BRACKET_API_URL or http://localhost:5000/api]
  --token TOKEN         Bearer token  [default: env BRACKET_API_TOKEN]
  --input FILE          Read a JSON match list instead of fetching
  --format FORMAT       json, svg or text  [default: text]
  --output FILE         Write the result to FILE instead of stdout
  --update-score ID     Submit a score for match ID before rendering
  --team1 N             Team 1 score for --update-score
  --team2 N             Team 2 score for --update-score

FLAGS:
  --query-endpoint      Use /matches?competition=ID instead of /matches/competition/ID
  -h, --help            Print help information

ENVIRONMENT:
  BRACKET_API_URL, BRACKET_API_TOKEN, BRACKET_TIMEOUT_SECS
  BRACKET_MATCH_WIDTH, BRACKET_MATCH_HEIGHT, BRACKET_HORIZONTAL_GAP, BRACKET_VERTICAL_GAP
";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Json,
    Svg,
    Text,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "svg" => Ok(OutputFormat::Svg),
            "text" | "txt" => Ok(OutputFormat::Text),
            other => Err(format!("unknown format {other:?}, expected json, svg or text")),
        }
    }
}

struct ScoreUpdate {
    match_id: String,
    team1: i64,
    team2: i64,
}

struct Args {
    competition: Option<String>,
    server_url: Option<String>,
    token: Option<String>,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    format: OutputFormat,
    endpoint: MatchEndpoint,
    score_update: Option<ScoreUpdate>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    let mut pargs = Arguments::from_env();

    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let args = parse_args(&mut pargs)?;

    env_logger::builder().format_target(false).init();

    run(args).await
}

fn parse_args(pargs: &mut Arguments) -> Result<Args> {
    let endpoint = if pargs.contains("--query-endpoint") {
        MatchEndpoint::Query
    } else {
        MatchEndpoint::ByCompetition
    };

    let score_update = match pargs.opt_value_from_str::<_, String>("--update-score")? {
        Some(match_id) => Some(ScoreUpdate {
            match_id,
            team1: pargs
                .value_from_str("--team1")
                .context("--update-score requires --team1")?,
            team2: pargs
                .value_from_str("--team2")
                .context("--update-score requires --team2")?,
        }),
        None => None,
    };

    let args = Args {
        competition: pargs.opt_value_from_str("--competition")?,
        server_url: pargs.opt_value_from_str("--server")?,
        token: pargs.opt_value_from_str("--token")?,
        input: pargs.opt_value_from_str("--input")?,
        output: pargs.opt_value_from_str("--output")?,
        format: pargs
            .opt_value_from_str("--format")?
            .unwrap_or(OutputFormat::Text),
        endpoint,
        score_update,
    };

    let remaining = pargs.clone().finish();
    if !remaining.is_empty() {
        bail!("Unexpected arguments: {:?}", remaining);
    }

    if args.input.is_some() && args.score_update.is_some() {
        bail!("--update-score needs a server; it cannot be combined with --input");
    }

    Ok(args)
}

async fn run(args: Args) -> Result<()> {
    let mut config = ClientConfig::from_env().context("Failed to load configuration")?;
    if let Some(server_url) = args.server_url.clone() {
        config.api_url = server_url;
    }
    if args.token.is_some() {
        config.api_token = args.token.clone();
    }
    config.validate().context("Invalid configuration")?;

    let layout = match &args.input {
        Some(path) => layout_from_file(path, &config)?,
        None => layout_from_server(&args, &config).await?,
    };

    let rendered = match args.format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(&layout).context("Failed to serialize layout")?
        }
        OutputFormat::Svg => render_svg(&layout, &config.geometry, &StatusPalette::default()),
        OutputFormat::Text => render_text(&layout),
    };

    match &args.output {
        Some(path) => {
            fs::write(path, rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Bracket written to {}", path.display());
        }
        None => print!("{rendered}"),
    }

    Ok(())
}

fn layout_from_file(path: &Path, config: &ClientConfig) -> Result<BracketLayout> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let payload: serde_json::Value = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse {} as JSON", path.display()))?;

    let matches = parse_match_payload(&payload);
    info!("Loaded {} matches from {}", matches.len(), path.display());

    Ok(layout_bracket(&matches, &config.geometry))
}

async fn layout_from_server(args: &Args, config: &ClientConfig) -> Result<BracketLayout> {
    let competition = args.competition.as_deref().ok_or_else(|| ConfigError::MissingRequired {
        var: "--competition".to_string(),
        hint: "Pass --competition ID, or --input FILE to render a saved match list".to_string(),
    })?;

    let client = ApiClient::with_timeout(config.api_url.clone(), config.timeout)?
        .with_token(config.api_token.clone())
        .with_endpoint(args.endpoint);

    if let Some(update) = &args.score_update {
        info!(
            "Submitting score {}-{} for match {}",
            update.team1, update.team2, update.match_id
        );
        client
            .update_score(&update.match_id, update.team1, update.team2)
            .await
            .context("Failed to update scores")?;
    }

    info!("Fetching matches for competition {competition} from {}", client.base_url());
    let mut view = BracketView::new(config.geometry);
    let layout = view
        .refresh(&client, competition)
        .await
        .context("Failed to load bracket data")?;

    Ok(layout.clone())
}
