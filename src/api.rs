use crate::config::GaParams;
use crate::corpus::Corpus;
use crate::error::KgResult;
use crate::geometry::{Geometry, Position, LETTERS};
use crate::layouts::Layout;
use crate::optimizer::{Optimizer, ProgressCallback};
use crate::render::render_rows;
use crate::scorer::{ScoreDetails, Scorer};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LetterAssignment {
    pub letter: char,
    pub position: Position,
}

/// Everything a consumer needs from a finished search.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SearchReport {
    /// Letters in catalog order, loadable with `Layout::from_slot_letters`.
    pub layout: String,
    pub assignments: Vec<LetterAssignment>,
    pub cost: f64,
    pub rows: Vec<String>,
    pub generations: usize,
    pub seed: Option<u64>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub layout_name: String,
    pub layout: String,
    pub cost: f64,
    pub pair_count: u64,
    pub same_key_pairs: u64,
    pub row_jumps: u64,
    pub row_jump_ratio: f64,
}

impl ValidationResult {
    fn new(name: &str, layout: &Layout, d: ScoreDetails) -> Self {
        Self {
            layout_name: name.to_string(),
            layout: layout.to_slot_letters(),
            cost: d.cost,
            pair_count: d.pair_count,
            same_key_pairs: d.same_key_pairs,
            row_jumps: d.row_jumps,
            row_jump_ratio: d.row_jump_ratio(),
        }
    }
}

pub fn assignments(layout: &Layout, geom: &Geometry) -> Vec<LetterAssignment> {
    LETTERS
        .iter()
        .enumerate()
        .map(|(i, &b)| LetterAssignment {
            letter: b as char,
            position: layout.position_of(i, geom),
        })
        .collect()
}

/// Service: run one full search and package the winner.
pub fn run_search<CB: ProgressCallback>(
    geometry: Geometry,
    corpus: &Corpus,
    params: GaParams,
    seed: Option<u64>,
    callback: CB,
) -> KgResult<SearchReport> {
    let scorer = Arc::new(Scorer::new(geometry, corpus)?);
    let optimizer = Optimizer::new(scorer.clone(), params)?;
    let result = optimizer.run(seed, callback);

    let rows = render_rows(&result.layout, &scorer.geometry)?;

    Ok(SearchReport {
        layout: result.layout.to_slot_letters(),
        assignments: assignments(&result.layout, &scorer.geometry),
        cost: result.cost,
        rows: rows.to_vec(),
        generations: result.generations,
        seed,
    })
}

/// Service: score named layouts against a corpus, best first.
pub fn evaluate_layouts(
    geometry: Geometry,
    corpus: &Corpus,
    layouts: &[(String, Layout)],
) -> KgResult<Vec<ValidationResult>> {
    let scorer = Scorer::new(geometry, corpus)?;
    let mut results: Vec<ValidationResult> = layouts
        .iter()
        .map(|(name, layout)| ValidationResult::new(name, layout, scorer.score_details(layout)))
        .collect();
    results.sort_by(|a, b| a.cost.total_cmp(&b.cost));
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layouts::KnownLayout;
    use crate::optimizer::SilentProgress;

    #[test]
    fn test_search_report_roundtrips_layout() {
        let corpus = Corpus::from_words(["the", "quick", "brown", "fox"]);
        let params = GaParams {
            population_size: 10,
            generations: 3,
            ..Default::default()
        };
        let report =
            run_search(Geometry::standard(), &corpus, params, Some(5), SilentProgress).unwrap();

        let layout = Layout::from_slot_letters(&report.layout).unwrap();
        assert_eq!(report.assignments, assignments(&layout, &Geometry::standard()));
        assert_eq!(report.rows.len(), 3);

        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"generations\":3"));
    }

    #[test]
    fn test_evaluate_sorts_best_first() {
        let corpus = Corpus::from_words(["abab", "cdcd"]);
        let layouts: Vec<(String, Layout)> = crate::layouts::get_all_layouts()
            .into_iter()
            .map(|(k, l)| (k.to_string(), l))
            .collect();
        let results = evaluate_layouts(Geometry::standard(), &corpus, &layouts).unwrap();

        assert_eq!(results.len(), 3);
        assert!(results.windows(2).all(|w| w[0].cost <= w[1].cost));
        // a-b and c-d are row neighbours on the alphabetical board
        assert_eq!(results[0].layout_name, KnownLayout::Alphabetical.to_string());
        assert_eq!(results[0].cost, 1.0);
    }
}
