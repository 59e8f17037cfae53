//!
//! # A*SA library
//!
//! Aligns the sentences of two documents with A*, and flags aligned sentence
//! pairs that are suspiciously similar.
//!
//! It can be used in a few ways:
//! - Call `astar` directly using a heuristic, and `classify` on the path.
//! - Create a reusable `AstarSa` object with a typed heuristic.
//! - Create a simpler `AstarSaParams` object.
//!
//! The difference between `AstarSa` and `AstarSaParams` is that the first
//! requires an instantiated heuristic type, whereas the latter can be
//! configured using `HeuristicArgs` and instantiates the heuristic for you.
//!
mod alignment_graph;
mod astar;
mod bucket_queue;
mod classify;
mod config;
mod traceback;

pub mod cost_model;
pub mod stats;

// The main alignment functions.
pub use astar::astar;
pub use classify::{check_threshold, classify, similarity};
pub use config::DEFAULT_SIMILARITY_THRESHOLD;

mod prelude {
    pub use itertools::Itertools;
    pub use rustc_hash::FxHashMap as HashMap;
    pub use sa_types::*;
    pub use std::cmp::{max, min};

    pub use crate::config::*;
}

// ------------ Root alignment interface follows from here ------------

use sa_heuristic::{Heuristic, HeuristicArgs, HeuristicMapper};
use sa_types::{AlignError, AlignmentResult, Document, UnitMode};
use serde::{Deserialize, Serialize};
use stats::AstarStats;

fn default_similarity_threshold() -> f64 {
    DEFAULT_SIMILARITY_THRESHOLD
}

/// The main entrypoint for running A* with some parameters.
#[derive(clap::Args, Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[clap(next_help_heading = "Alignment")]
#[serde(deny_unknown_fields)]
pub struct AstarSaParams {
    /// The unit of the edit distance between two sentences.
    #[clap(short, long, default_value_t, value_enum, display_order = 5)]
    #[serde(default)]
    pub unit_mode: UnitMode,

    /// Parameters and settings for the heuristic.
    #[clap(flatten)]
    #[serde(default)]
    pub heuristic: HeuristicArgs,

    /// Aligned sentences with a similarity strictly above this are flagged.
    #[clap(short = 't', long = "threshold", default_value_t = DEFAULT_SIMILARITY_THRESHOLD, display_order = 5)]
    #[serde(default = "default_similarity_threshold")]
    pub similarity_threshold: f64,
}

impl Default for AstarSaParams {
    fn default() -> Self {
        Self {
            unit_mode: UnitMode::default(),
            heuristic: HeuristicArgs::default(),
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
        }
    }
}

/// Alternative configuration using a typed `Heuristic` instance instead of a fixed config.
#[derive(Debug, Clone, Copy)]
pub struct AstarSa<H: Heuristic> {
    pub unit_mode: UnitMode,
    pub h: H,
    pub similarity_threshold: f64,
}

impl<H: Heuristic> AstarSa<H> {
    pub fn new(unit_mode: UnitMode, h: H) -> Self {
        Self {
            unit_mode,
            h,
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
        }
    }

    pub fn align(
        &self,
        a: &Document,
        b: &Document,
    ) -> Result<(AlignmentResult, AstarStats), AlignError> {
        let threshold = check_threshold(self.similarity_threshold)?;
        let ((total_cost, alignment_path), mut stats) = astar(a, b, self.unit_mode, &self.h)?;

        let classify_start = instant::Instant::now();
        let plagiarism_candidates = classify(
            &alignment_path,
            &a.sizes(self.unit_mode),
            &b.sizes(self.unit_mode),
            threshold,
        );
        stats.timing.classify = classify_start.elapsed().as_secs_f64();
        stats.timing.total += stats.timing.classify;
        stats.flagged = plagiarism_candidates.iter().filter(|c| c.flagged).count();

        Ok((
            AlignmentResult {
                total_cost,
                alignment_path,
                plagiarism_candidates,
            },
            stats,
        ))
    }
}

impl AstarSaParams {
    pub fn new(unit_mode: UnitMode, heuristic: HeuristicArgs, similarity_threshold: f64) -> Self {
        Self {
            unit_mode,
            heuristic,
            similarity_threshold,
        }
    }

    pub fn aligner(&self) -> Box<dyn SentenceAligner> {
        struct Runner<'a> {
            params: &'a AstarSaParams,
        }
        impl HeuristicMapper for Runner<'_> {
            type R = Box<dyn SentenceAligner>;
            fn call<H: Heuristic + 'static>(&self, h: H) -> Box<dyn SentenceAligner> {
                Box::new(AstarSa {
                    unit_mode: self.params.unit_mode,
                    h,
                    similarity_threshold: self.params.similarity_threshold,
                })
            }
        }

        self.heuristic.map(Runner { params: self })
    }

    pub fn align(
        &self,
        a: &Document,
        b: &Document,
    ) -> Result<(AlignmentResult, AstarStats), AlignError> {
        self.aligner().align(a, b)
    }
}

/// Helper trait to work with a `Box<dyn SentenceAligner>` where the type of the
/// heuristic is hidden.
pub trait SentenceAligner: std::fmt::Debug + Send {
    fn align(&self, a: &Document, b: &Document)
        -> Result<(AlignmentResult, AstarStats), AlignError>;
}

impl<H: Heuristic> SentenceAligner for AstarSa<H> {
    fn align(
        &self,
        a: &Document,
        b: &Document,
    ) -> Result<(AlignmentResult, AstarStats), AlignError> {
        AstarSa::align(self, a, b)
    }
}
