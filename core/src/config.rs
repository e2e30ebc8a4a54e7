//! Run configuration. Built by the CLI parser; every field has a default that
//! reproduces the plain `digraph tree { ... }` output.

use std::str::FromStr;

use crate::error::TreeDotError;
use crate::syntax::filter::FilterRule;

pub const DEFAULT_GRAPH_NAME: &str = "tree";

// ---------------------------------------------------------------------------
// OutputFormat — what gets written to stdout
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Dot,
    Terminal,
}

impl FromStr for OutputFormat {
    type Err = TreeDotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dot" => Ok(OutputFormat::Dot),
            "terminal" => Ok(OutputFormat::Terminal),
            other => Err(TreeDotError::Usage(format!(
                "Unknown format: {other} (expected dot or terminal)"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// DotOptions — presentation knobs for the DOT emitter
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotOptions {
    /// Name in the `digraph <name> {` line (default: "tree")
    pub graph_name: String,
    /// Prefix node and edge lines with one tab per depth level
    pub indent: bool,
    /// Draw the root as a filled black node
    pub highlight_root: bool,
    /// Escape `\` and `"` inside labels
    pub escape_labels: bool,
}

impl Default for DotOptions {
    fn default() -> Self {
        Self {
            graph_name: DEFAULT_GRAPH_NAME.to_string(),
            indent: false,
            highlight_root: false,
            escape_labels: false,
        }
    }
}

// ---------------------------------------------------------------------------
// FilterConfig — tag lists collected from the command line
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterConfig {
    /// Tags to keep. Empty means every node is a candidate.
    pub include: Vec<String>,
    /// Tags to drop; their children are hoisted into the parent.
    pub exclude: Vec<String>,
    /// Tags to drop together with everything below them.
    pub prune: Vec<String>,
}

impl FilterConfig {
    pub fn is_empty(&self) -> bool {
        self.include.is_empty() && self.exclude.is_empty() && self.prune.is_empty()
    }

    /// Turn the tag lists into rules. Without `include` tags every node is
    /// selected, so `--exclude` alone only removes what it names.
    pub fn rules(&self) -> Vec<FilterRule> {
        let mut rules = Vec::new();
        if self.is_empty() {
            return rules;
        }

        if self.include.is_empty() {
            rules.push(FilterRule::SelectAll);
        } else {
            rules.push(FilterRule::include(self.include.iter().cloned()));
        }
        if !self.exclude.is_empty() {
            rules.push(FilterRule::exclude(self.exclude.iter().cloned(), false));
        }
        if !self.prune.is_empty() {
            rules.push(FilterRule::exclude(self.prune.iter().cloned(), true));
        }
        rules
    }
}

// ---------------------------------------------------------------------------
// EmitConfig — everything a run needs besides the input path
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmitConfig {
    pub format: OutputFormat,
    pub dot: DotOptions,
    pub filter: FilterConfig,
    /// When non-empty, list nodes with these tags instead of rendering.
    pub collect: Vec<String>,
}
