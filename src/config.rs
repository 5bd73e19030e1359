use crate::error::{KeyGaError, KgResult};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GaParams {
    #[arg(long, default_value_t = 100)]
    pub population_size: usize,
    #[arg(long, default_value_t = 500)]
    pub generations: usize,
    /// Probability that a child receives one random letter swap.
    #[arg(long, default_value_t = 0.1)]
    pub mutation_rate: f64,
    /// Fraction of top-ranked layouts carried unchanged into the next generation.
    #[arg(long, default_value_t = 0.2)]
    pub elitism: f64,
    #[arg(long, default_value_t = 3)]
    pub tournament_size: usize,
    /// Generations between progress reports.
    #[arg(long, default_value_t = 50)]
    pub report_interval: usize,
}

impl Default for GaParams {
    fn default() -> Self {
        Self {
            population_size: 100,
            generations: 500,
            mutation_rate: 0.1,
            elitism: 0.2,
            tournament_size: 3,
            report_interval: 50,
        }
    }
}

impl GaParams {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> KgResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Overwrites fields the user typed on the command line, leaving values
    /// loaded from a file untouched where the CLI only supplied a default.
    pub fn merge_from_cli(&mut self, cli: &GaParams, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$field = cli.$field.clone();
                }
            };
        }

        update_if_present!(population_size, "population_size");
        update_if_present!(generations, "generations");
        update_if_present!(mutation_rate, "mutation_rate");
        update_if_present!(elitism, "elitism");
        update_if_present!(tournament_size, "tournament_size");
        update_if_present!(report_interval, "report_interval");
    }

    pub fn validate(&self) -> KgResult<()> {
        if self.population_size == 0 {
            return Err(KeyGaError::Config("population_size must be at least 1".into()));
        }
        if self.tournament_size == 0 {
            return Err(KeyGaError::Config("tournament_size must be at least 1".into()));
        }
        if self.tournament_size > self.population_size {
            return Err(KeyGaError::Config(format!(
                "tournament_size ({}) exceeds population_size ({})",
                self.tournament_size, self.population_size
            )));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(KeyGaError::Config(format!(
                "mutation_rate {} is outside [0, 1]",
                self.mutation_rate
            )));
        }
        if !(0.0..=1.0).contains(&self.elitism) {
            return Err(KeyGaError::Config(format!(
                "elitism {} is outside [0, 1]",
                self.elitism
            )));
        }
        if self.report_interval == 0 {
            return Err(KeyGaError::Config("report_interval must be at least 1".into()));
        }
        Ok(())
    }

    /// `floor(population_size * elitism)`. Zero is legal and disables elitism.
    pub fn elite_count(&self) -> usize {
        let count = (self.population_size as f64 * self.elitism).floor() as usize;
        count.min(self.population_size)
    }
}
