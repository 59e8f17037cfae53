#[cfg(feature = "cli")]
mod cli;
pub mod heuristic;

#[cfg(feature = "cli")]
pub use cli::*;
pub use heuristic::*;

mod prelude {
    pub use sa_types::*;
    pub use std::cmp::max;
}
