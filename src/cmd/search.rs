use crate::reports;
use clap::{ArgMatches, Args};
use keyga::api;
use keyga::config::GaParams;
use keyga::corpus::Corpus;
use keyga::error::KgResult;
use keyga::geometry::Geometry;
use keyga::layouts::{get_all_layouts, Layout};
use keyga::optimizer::{Individual, ProgressCallback};
use tracing::{info, warn};

#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    /// Word list, one word per line.
    pub words: String,

    #[command(flatten)]
    pub params: GaParams,

    /// JSON file with GA parameters; explicit flags override it.
    #[arg(short = 'c', long)]
    pub config: Option<String>,

    #[arg(short = 'S', long)]
    pub seed: Option<u64>,

    /// Print the result as JSON instead of tables.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

struct CliLogger;
impl ProgressCallback for CliLogger {
    fn on_progress(&self, generation: usize, best: &Individual) {
        info!("Generation {}, Best cost: {:.4}", generation, best.cost);
    }
}

fn resolve_params(args: &SearchArgs, matches: &ArgMatches) -> KgResult<GaParams> {
    match &args.config {
        Some(path) => {
            info!("⚖️  Loading GA parameters from: {}", path);
            let mut params = GaParams::load_from_file(path)?;
            params.merge_from_cli(&args.params, matches);
            Ok(params)
        }
        None => Ok(args.params.clone()),
    }
}

pub fn run(args: &SearchArgs, geometry: Geometry, matches: &ArgMatches) -> KgResult<()> {
    let params = resolve_params(args, matches)?;
    params.validate()?;

    info!("📂 Loading Words: {}", args.words);
    let corpus = Corpus::load_from_file(&args.words)?;
    if corpus.is_empty() {
        warn!("⚠️  Corpus has no letter pairs; every layout costs 0.0");
    }

    info!(
        "🧬 Evolving {} layouts for {} generations",
        params.population_size, params.generations
    );
    let report = api::run_search(geometry.clone(), &corpus, params, args.seed, CliLogger)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Best layout found:");
    for row in &report.rows {
        println!("{}", row);
    }
    println!("Average distance per letter pair: {:.4}", report.cost);

    let best = Layout::from_slot_letters(&report.layout)?;
    reports::print_layout_grid("OPTIMIZED", &best, &geometry)?;

    let mut candidates: Vec<(String, Layout)> = get_all_layouts()
        .into_iter()
        .map(|(k, l)| (k.to_string(), l))
        .collect();
    candidates.push(("optimized".to_string(), best));
    let results = api::evaluate_layouts(geometry, &corpus, &candidates)?;
    reports::print_scoring_report(&results);

    Ok(())
}
