pub mod crossover;
pub mod initialization;
pub mod mutation;
pub mod runner;
pub mod selection;

pub use self::crossover::{order_crossover, order_crossover_with_cuts};
pub use self::initialization::random_layout;
pub use self::mutation::mutate;
pub use self::runner::{
    Individual, OptimizationResult, Optimizer, ProgressCallback, SilentProgress,
};
pub use self::selection::tournament_select;
