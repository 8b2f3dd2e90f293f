//! Scenario files for the simulation driver

use anyhow::Context;
use hopnet_core::NodeId;
use hopnet_ring::{LookupTrace, RingNetwork};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A declarative simulation run: ring size, content placements, and the
/// lookups to execute once placement is done.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    /// Number of nodes in the ring
    pub size: usize,

    /// Content placements, applied in order before any query runs
    #[serde(default, rename = "place")]
    pub placements: Vec<Placement>,

    /// Lookups to run against the populated ring
    #[serde(default, rename = "query")]
    pub queries: Vec<Query>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Placement {
    /// Node the file is stored on
    pub node: NodeId,
    /// Content identifier
    pub file: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Query {
    /// Node the lookup starts from
    pub start: NodeId,
    /// Content identifier to locate
    pub file: String,
}

/// Outcome of one scenario query, in printable/serializable form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryReport {
    pub file: String,
    pub start: NodeId,
    pub found: Option<NodeId>,
    pub trace: LookupTrace,
}

impl Scenario {
    /// Load a scenario from a TOML file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read scenario file {}", path.display()))?;
        let scenario: Scenario = toml::from_str(&content)
            .with_context(|| format!("invalid scenario file {}", path.display()))?;
        Ok(scenario)
    }

    /// The built-in demo: 10 peers, two files, a lookup for each.
    pub fn demo() -> Self {
        Self {
            size: 10,
            placements: vec![
                Placement {
                    node: 2,
                    file: "arquivo1.txt".to_string(),
                },
                Placement {
                    node: 7,
                    file: "arquivo2.txt".to_string(),
                },
            ],
            queries: vec![
                Query {
                    start: 0,
                    file: "arquivo1.txt".to_string(),
                },
                Query {
                    start: 5,
                    file: "arquivo2.txt".to_string(),
                },
            ],
        }
    }

    /// Build the ring, apply every placement, then run every query in order.
    pub fn run(&self) -> hopnet_ring::Result<Vec<QueryReport>> {
        let mut network = RingNetwork::build(self.size)?;

        for placement in &self.placements {
            network.place_on(placement.node, &placement.file)?;
        }

        let mut reports = Vec::with_capacity(self.queries.len());
        for query in &self.queries {
            let lookup = network.locate(query.start, &query.file)?;
            reports.push(QueryReport {
                file: query.file.clone(),
                start: query.start,
                found: lookup.found,
                trace: lookup.trace,
            });
        }

        Ok(reports)
    }
}
