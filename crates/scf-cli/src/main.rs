//! `scf` - switching cost facilitation command line

use anyhow::{bail, Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use scf_config::{ConfigProvider, DirectoryProvider, DocumentKind};
use scf_core::{
    AccountProfile, AnalysisDepth, AnalysisRequest, OrchestratorConfig,
    SwitchingCostOrchestrator, TimelineUrgency,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod report;

const DEFAULT_CONFIG_DIR: &str = "./config";

fn config_dir_arg() -> Arg {
    Arg::new("config-dir")
        .long("config-dir")
        .default_value(DEFAULT_CONFIG_DIR)
        .value_parser(value_parser!(PathBuf))
        .help("Directory holding industries/ and competitors/")
}

fn cli() -> Command {
    Command::new("scf")
        .version(scf_core::VERSION)
        .about("Switching cost facilitation analysis")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("log-json")
                .long("log-json")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Emit logs as JSON lines"),
        )
        .subcommand(
            Command::new("analyze")
                .about("Build a switching strategy for an industry/competitor pair")
                .arg(
                    Arg::new("industry")
                        .long("industry")
                        .required(true)
                        .help("Industry template key"),
                )
                .arg(
                    Arg::new("competitor")
                        .long("competitor")
                        .required(true)
                        .help("Competitor profile key"),
                )
                .arg(config_dir_arg())
                .arg(
                    Arg::new("account-profile")
                        .long("account-profile")
                        .value_parser(value_parser!(PathBuf))
                        .help("JSON file describing the prospect account"),
                )
                .arg(
                    Arg::new("depth")
                        .long("depth")
                        .default_value("comprehensive")
                        .value_parser(["basic", "comprehensive"])
                        .help("Analysis depth"),
                )
                .arg(
                    Arg::new("urgency")
                        .long("urgency")
                        .default_value("standard")
                        .value_parser(["standard", "urgent"])
                        .help("Timeline urgency"),
                )
                .arg(
                    Arg::new("timeout-secs")
                        .long("timeout-secs")
                        .value_parser(value_parser!(u64))
                        .help("Abort the analysis after this many seconds"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Output the strategy as JSON"),
                ),
        )
        .subcommand(
            Command::new("list")
                .about("List configured industries and competitors")
                .arg(config_dir_arg()),
        )
}

fn init_logging(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

async fn load_provider(args: &ArgMatches) -> Result<DirectoryProvider> {
    let dir = args
        .get_one::<PathBuf>("config-dir")
        .context("missing --config-dir")?;
    let provider = DirectoryProvider::load(dir)
        .await
        .with_context(|| format!("failed to load configuration from {}", dir.display()))?;
    tracing::info!(
        config_dir = %dir.display(),
        documents = provider.document_count(),
        "configuration loaded"
    );
    Ok(provider)
}

async fn read_account_profile(path: &Path) -> Result<AccountProfile> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read account profile {}", path.display()))?;
    let value: serde_json::Value = serde_json::from_str(&content)
        .with_context(|| format!("invalid JSON in {}", path.display()))?;
    match value {
        serde_json::Value::Object(profile) => Ok(profile),
        _ => bail!("account profile {} must be a JSON object", path.display()),
    }
}

async fn analyze(args: &ArgMatches) -> Result<()> {
    let industry = args.get_one::<String>("industry").context("missing --industry")?;
    let competitor = args
        .get_one::<String>("competitor")
        .context("missing --competitor")?;

    let depth: AnalysisDepth = args
        .get_one::<String>("depth")
        .map_or(Ok(AnalysisDepth::default()), |s| s.parse())
        .map_err(anyhow::Error::msg)?;
    let urgency: TimelineUrgency = args
        .get_one::<String>("urgency")
        .map_or(Ok(TimelineUrgency::default()), |s| s.parse())
        .map_err(anyhow::Error::msg)?;

    let mut request = AnalysisRequest::new(industry.as_str(), competitor.as_str())
        .with_depth(depth)
        .with_urgency(urgency);
    if let Some(path) = args.get_one::<PathBuf>("account-profile") {
        request = request.with_account_profile(read_account_profile(path).await?);
    }

    let mut config = OrchestratorConfig::new();
    if let Some(secs) = args.get_one::<u64>("timeout-secs") {
        config = config.with_task_timeout(Duration::from_secs(*secs));
    }

    let provider = load_provider(args).await?;
    let orchestrator = SwitchingCostOrchestrator::new(Arc::new(provider)).with_config(config);
    let strategy = orchestrator
        .analyze(&request)
        .await
        .with_context(|| format!("analysis failed for {industry}/{competitor}"))?;

    if args.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&strategy)?);
    } else {
        println!("{}", report::TextReport::new(&request, &strategy));
    }
    Ok(())
}

async fn list(args: &ArgMatches) -> Result<()> {
    let provider = load_provider(args).await?;
    for kind in DocumentKind::ALL {
        println!("{}:", kind.directory_name());
        for key in provider.keys(kind) {
            println!("  {key}");
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let matches = cli().get_matches();
    init_logging(matches.get_flag("log-json"));

    match matches.subcommand() {
        Some(("analyze", args)) => analyze(args).await,
        Some(("list", args)) => list(args).await,
        Some((other, _)) => bail!("unknown command: {other}"),
        None => bail!("no command given"),
    }
}
