use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::heuristic::*;

/// The type of the heuristic. Defaults to Gap.
#[derive(Debug, PartialEq, Eq, Default, Clone, Copy, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeuristicType {
    /// A heuristic that returns 0. A* reduces to Dijkstra.
    Zero,
    /// Difference of the remaining sizes of both documents.
    #[default]
    Gap,
    /// Maximum of the remaining sizes of both documents. Not admissible.
    Max,
}

/// Heuristic arguments.
#[derive(Parser, Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[clap(next_help_heading = "Heuristic")]
#[serde(deny_unknown_fields)]
pub struct HeuristicArgs {
    #[clap(short = 'H', long, default_value_t, value_enum, display_order = 10)]
    #[serde(rename = "type", default)]
    pub heuristic: HeuristicType,
}

/// A summary string for reporting.
impl ToString for HeuristicArgs {
    fn to_string(&self) -> String {
        match self.heuristic {
            HeuristicType::Zero => "Zero (Dijkstra)".into(),
            HeuristicType::Gap => "Gap-cost to end".into(),
            HeuristicType::Max => "Max remaining size".into(),
        }
    }
}

pub trait HeuristicMapper {
    type R;
    fn call<H: Heuristic + 'static>(&self, h: H) -> Self::R;
}

impl HeuristicArgs {
    pub fn new(heuristic: HeuristicType) -> Self {
        Self { heuristic }
    }

    /// Apply a generic function F to the instantiated heuristic.
    pub fn map<F: HeuristicMapper>(&self, f: F) -> F::R {
        match self.heuristic {
            HeuristicType::Zero => f.call(ZeroCost),
            HeuristicType::Gap => f.call(GapCost),
            HeuristicType::Max => f.call(MaxCost),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Name;
    impl HeuristicMapper for Name {
        type R = (String, bool);
        fn call<H: Heuristic + 'static>(&self, h: H) -> Self::R {
            (h.name(), H::IS_ADMISSIBLE)
        }
    }

    #[test]
    fn map() {
        assert_eq!(HeuristicArgs::default().map(Name), ("Gap".into(), true));
        assert_eq!(
            HeuristicArgs::new(HeuristicType::Max).map(Name),
            ("Max".into(), false)
        );
        assert_eq!(
            HeuristicArgs::new(HeuristicType::Zero).map(Name),
            ("Zero".into(), true)
        );
    }

    #[test]
    fn summary() {
        assert_eq!(HeuristicArgs::default().to_string(), "Gap-cost to end");
        assert_eq!(
            HeuristicArgs::new(HeuristicType::Zero).to_string(),
            "Zero (Dijkstra)"
        );
    }
}
