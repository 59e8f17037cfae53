use std::{
    fmt::Display,
    sync::atomic::{AtomicBool, Ordering},
};

use derive_more::AddAssign;
use sa_types::{Cost, Document};

use sa_heuristic::HeuristicStats;

#[derive(Default, Clone, Copy, AddAssign, Debug)]
pub struct Timing {
    /// precomp + astar + traceback + classify
    pub total: f64,
    /// extracting units and building the heuristic
    pub precomp: f64,
    /// running A*
    pub astar: f64,

    pub traceback: f64,
    pub classify: f64,
}

#[derive(Default, Clone, AddAssign, Debug)]
pub struct AstarStats {
    /// Number of sentences in `a`.
    pub len_a: usize,
    /// Number of sentences in `b`.
    pub len_b: usize,
    /// The computed distance.
    pub distance: Cost,
    /// states popped from PQ and expanded
    pub expanded: usize,
    /// states pushed to PQ
    pub explored: usize,
    /// pushes that lowered the `g` of an already reached state
    pub improved: usize,
    /// popped states whose `g` was outdated and were skipped
    pub stale: usize,
    /// peak number of elements in the PQ
    pub max_queue: usize,
    /// Number of states allocated in the StateGrid
    pub grid_capacity: usize,
    /// Number of flagged candidates.
    pub flagged: usize,

    pub h: HeuristicStats,

    pub timing: Timing,
    pub sample_size: usize,
}

impl AstarStats {
    pub fn init(a: &Document, b: &Document) -> Self {
        Self {
            len_a: a.len(),
            len_b: b.len(),
            sample_size: 1,
            ..Default::default()
        }
    }

    fn format_raw<T: Display>(
        &self,
        align: char,
        width: usize,
        title: &str,
        val: T,
    ) -> (String, String) {
        if align == '<' {
            (format!("{:<width$}", title), format!("{:<width$}", val))
        } else {
            (format!("{:>width$}", title), format!("{:>width$}", val))
        }
    }

    fn format_flt<T: Display>(
        &self,
        align: char,
        mut width: usize,
        title: &str,
        val: T,
    ) -> (String, String) {
        let val = val.to_string();
        // make sure to not discard things before the decimal point.
        let point = val.find('.').unwrap_or(val.len());
        width = width.max(point);
        let mut val = val.as_str();
        if val.len() > width {
            val = &val[0..width];
        }
        if align == '<' {
            (format!("{:<width$}", title), format!("{:<width$}", val))
        } else {
            (format!("{:>width$}", title), format!("{:>width$}", val))
        }
    }

    fn format_avg<T: Display + num_traits::AsPrimitive<f32>>(
        &self,
        align: char,
        width: usize,
        title: &str,
        val: T,
    ) -> (String, String) {
        self.format_flt(align, width, title, val.as_() / self.sample_size as f32)
    }

    pub fn values(&self) -> (Vec<String>, Vec<String>) {
        let cells = (self.len_a * self.len_b).max(1);
        [
            self.format_raw('>', 7, "nr", self.sample_size),
            self.format_avg('>', 8, "|a|", self.len_a),
            self.format_avg('>', 8, "|b|", self.len_b),
            self.format_avg('>', 9, "expanded", self.expanded),
            self.format_avg('>', 9, "explored", self.explored),
            self.format_avg('>', 8, "improved", self.improved),
            self.format_avg('>', 7, "stale", self.stale),
            self.format_avg('>', 7, "max_q", self.max_queue),
            self.format_flt('>', 6, "band", self.expanded as f32 / cells as f32),
            self.format_avg('>', 8, "t", 1000. * self.timing.total),
            self.format_avg('>', 6, "pre", 1000. * self.timing.precomp),
            self.format_avg('>', 6, "A*", 1000. * self.timing.astar),
            self.format_avg('>', 6, "trace", 1000. * self.timing.traceback),
            self.format_avg('>', 6, "class", 1000. * self.timing.classify),
            self.format_avg('>', 8, "cost", self.distance),
            self.format_avg('>', 6, "h0", self.h.h0),
            self.format_avg('>', 6, "flag", self.flagged),
        ]
        .into_iter()
        .unzip()
    }

    /// Print a row of values, preceded by the header on the first call.
    pub fn print(&self) {
        static PRINTED_HEADER: AtomicBool = AtomicBool::new(false);
        let (header, values) = self.values();
        if !PRINTED_HEADER.swap(true, Ordering::Relaxed) {
            println!("{}", header.join(" "));
        }
        println!("{}", values.join(" "));
    }
}
