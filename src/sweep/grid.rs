use super::SweepConfig;
use std::fmt;

/// One cell of a prior grid: the swept scales that label its effect distribution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridCell {
    pub slope_sd: f64,
    /// `None` for a model without group-level slopes.
    pub group_sd: Option<f64>,
}

impl fmt::Display for GridCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.group_sd {
            Some(g) => write!(f, "slope_sd={} group_sd={}", self.slope_sd, g),
            None => write!(f, "slope_sd={}", self.slope_sd),
        }
    }
}

/// Cross product of candidate slope SDs and group-level SDs, slope-major.
#[derive(Debug, Clone, PartialEq)]
pub struct PriorGrid {
    cells: Vec<GridCell>,
}

impl PriorGrid {
    /// Expand the candidate lists of `config`.
    ///
    /// An empty group-level list yields one cell per slope SD with `group_sd = None`. Values
    /// are not validated here; a bad value fails when its cell is simulated.
    pub fn from_config(config: &SweepConfig) -> Self {
        let cells = config
            .slope_sds
            .iter()
            .flat_map(|&slope_sd| {
                let groups: Vec<Option<f64>> = if config.group_sds.is_empty() {
                    vec![None]
                } else {
                    config.group_sds.iter().copied().map(Some).collect()
                };
                groups
                    .into_iter()
                    .map(move |group_sd| GridCell { slope_sd, group_sd })
            })
            .collect();
        Self { cells }
    }

    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
