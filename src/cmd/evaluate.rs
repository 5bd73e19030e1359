use crate::reports;
use clap::Args;
use keyga::api;
use keyga::corpus::Corpus;
use keyga::error::KgResult;
use keyga::geometry::Geometry;
use keyga::layouts::{get_all_layouts, KnownLayout, Layout};
use std::str::FromStr;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct EvaluateArgs {
    /// Word list, one word per line.
    pub words: String,

    /// Known layout name or 26 letters in catalog order. All known layouts if omitted.
    #[arg(short, long)]
    pub layout: Option<String>,
}

fn resolve_layouts(filter: &Option<String>) -> KgResult<Vec<(String, Layout)>> {
    let Some(spec) = filter else {
        return Ok(get_all_layouts()
            .into_iter()
            .map(|(k, l)| (k.to_string(), l))
            .collect());
    };

    if let Ok(known) = KnownLayout::from_str(&spec.to_lowercase()) {
        return Ok(vec![(known.to_string(), known.layout())]);
    }
    Ok(vec![("custom".to_string(), Layout::from_slot_letters(spec)?)])
}

pub fn run(args: &EvaluateArgs, geometry: Geometry) -> KgResult<()> {
    let layouts = resolve_layouts(&args.layout)?;

    info!("📂 Loading Words: {}", args.words);
    let corpus = Corpus::load_from_file(&args.words)?;

    println!("\n🔎 === LAYOUT AUDIT === 🔎");
    for (name, layout) in &layouts {
        reports::print_layout_grid(name, layout, &geometry)?;
    }

    let results = api::evaluate_layouts(geometry, &corpus, &layouts)?;
    reports::print_scoring_report(&results);
    Ok(())
}
