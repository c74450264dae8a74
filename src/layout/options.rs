use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::foundation::error::{DiagramError, DiagramResult};

/// Axis along which ranks are stacked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum RankDir {
    /// Ranks go down the screen.
    #[default]
    #[serde(rename = "TB")]
    TopToBottom,
    /// Ranks go up the screen.
    #[serde(rename = "BT")]
    BottomToTop,
    /// Ranks go right.
    #[serde(rename = "LR")]
    LeftToRight,
    /// Ranks go left.
    #[serde(rename = "RL")]
    RightToLeft,
}

impl RankDir {
    /// Return `true` when ranks advance along the x axis.
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::LeftToRight | Self::RightToLeft)
    }
}

/// Parameters passed through to the layered-layout engine.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutOptions {
    /// Rank direction.
    #[serde(alias = "rankdir")]
    pub rank_dir: RankDir,
    /// Gap between adjacent vertices within a rank.
    #[serde(alias = "nodesep")]
    pub node_sep: f64,
    /// Gap reserved around edge bends within a rank.
    #[serde(alias = "edgesep")]
    pub edge_sep: f64,
    /// Gap between adjacent ranks.
    #[serde(alias = "ranksep")]
    pub rank_sep: f64,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            rank_dir: RankDir::TopToBottom,
            node_sep: 128.0,
            edge_sep: 100.0,
            rank_sep: 128.0,
        }
    }
}

impl LayoutOptions {
    /// Default spacing with the given rank direction.
    pub fn with_rank_dir(rank_dir: RankDir) -> Self {
        Self {
            rank_dir,
            ..Self::default()
        }
    }

    /// Check that every spacing is finite and non-negative.
    pub fn validate(&self) -> DiagramResult<()> {
        for (name, v) in [
            ("node_sep", self.node_sep),
            ("edge_sep", self.edge_sep),
            ("rank_sep", self.rank_sep),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(DiagramError::validation(format!(
                    "{name} must be finite and >= 0, got {v}"
                )));
            }
        }
        Ok(())
    }

    /// Parse and validate options from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> DiagramResult<Self> {
        let opts: Self = serde_json::from_reader(r)
            .map_err(|e| DiagramError::serde(format!("parse layout options JSON: {e}")))?;
        opts.validate()?;
        Ok(opts)
    }

    /// Parse and validate options from a JSON string.
    pub fn from_json_str(s: &str) -> DiagramResult<Self> {
        Self::from_reader(s.as_bytes())
    }

    /// Parse and validate options from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> DiagramResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            DiagramError::validation(format!("open layout options '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/options.rs"]
mod tests;
