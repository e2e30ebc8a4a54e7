//! treedot: render JSON parse trees as Graphviz DOT
//!
//! The input is `{ "<any key>": { "tree": <node> } }` where a node carries an
//! optional `tag`, optional `text` and optional `children`.
//!
//! ## Modules
//!
//! - `syntax`: input types, document reading, the arena tree, filtering and
//!   tag collection
//! - `emit`: DOT and terminal output
//! - `config`: run options
//! - `error`: error kinds

pub mod config;
pub mod emit;
pub mod error;
pub mod syntax;

use std::io::Write;
use std::path::Path;

use tracing::info;

pub use config::{DotOptions, EmitConfig, FilterConfig, OutputFormat};
pub use emit::{to_dot, DotEmitter, TerminalRenderer};
pub use error::{ParseError, Result, TreeDotError};
pub use syntax::tree::ParseTree;
pub use syntax::types::{Node, NodeData};

/// Read the document at `path` and write it to `out` as `config` asks.
///
/// Reading, parsing and filtering all finish before the first byte is
/// written, so a bad input never produces partial output.
pub fn convert<W: Write>(path: &Path, config: &EmitConfig, out: &mut W) -> Result<()> {
    let root = syntax::document::read_document(path)?;
    let tree = ParseTree::from_node(&root);
    let tree = syntax::filter::filter_tree(tree, &config.filter.rules())?;

    info!(
        path = %path.display(),
        nodes = tree.node_count(),
        format = ?config.format,
        "rendering tree"
    );
    emit::render(&tree, config, out)?;
    out.flush()?;
    Ok(())
}
