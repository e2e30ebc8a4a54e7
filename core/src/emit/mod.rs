//! Output generation:
//! - DOT (Graphviz) digraph text
//! - terminal tree drawing
//! - tag listings

pub mod dot;
pub mod terminal;

use std::io::Write;

use tracing::debug;

pub use dot::{to_dot, DotEmitter};
pub use terminal::{to_terminal, TerminalRenderer};

use crate::config::{EmitConfig, OutputFormat};
use crate::error::Result;
use crate::syntax::collect::collect;
use crate::syntax::tree::ParseTree;

/// Write `tree` to `out` as selected by `config`: a tag listing when
/// `config.collect` is set, otherwise the configured output format.
pub fn render<W: Write>(tree: &ParseTree, config: &EmitConfig, out: &mut W) -> Result<()> {
    if !config.collect.is_empty() {
        let matches = collect(tree, &config.collect);
        debug!(count = matches.len(), "collected tagged nodes");
        for found in matches {
            writeln!(out, "{}\t{}", found.id, found.label)?;
        }
        return Ok(());
    }

    match config.format {
        OutputFormat::Dot => DotEmitter::new(&config.dot).emit(tree, out),
        OutputFormat::Terminal => TerminalRenderer::new().render(tree, out),
    }
}
