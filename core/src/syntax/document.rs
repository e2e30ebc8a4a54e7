//! Reading the input document: `{ "<any key>": { "tree": <node> } }`.
//!
//! Only the first top-level key is looked at. `serde_json` is built with
//! `preserve_order`, so "first" means first in the file.
//!
//! Parse trees nest two JSON levels per tree level, which overruns
//! `serde_json`'s fixed 128-level limit on ordinary input. The limit is
//! disabled and deserialization runs on a growable stack instead.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{ParseError, Result, TreeDotError};
use crate::syntax::types::Node;

/// Parse document bytes and return the root node.
///
/// Fails when the input is not UTF-8 JSON, when there is no top-level key,
/// when the first key's value lacks a `tree` node, or when that node has no
/// `tag`.
pub fn parse_document(input: impl AsRef<[u8]>) -> Result<Node, ParseError> {
    let mut deserializer = serde_json::Deserializer::from_slice(input.as_ref());
    deserializer.disable_recursion_limit();
    let document = Map::<String, Value>::deserialize(serde_stacker::Deserializer::new(
        &mut deserializer,
    ))?;
    deserializer.end()?;

    let (key, container) = document
        .into_iter()
        .next()
        .ok_or(ParseError::EmptyDocument)?;

    let Value::Object(mut container) = container else {
        return Err(ParseError::ContainerNotObject { key });
    };

    let Some(tree) = container.remove("tree") else {
        return Err(ParseError::MissingTree { key });
    };

    let root = Node::deserialize(serde_stacker::Deserializer::new(tree))?;
    if root.tag.is_none() {
        return Err(ParseError::MissingRootTag);
    }

    debug!(root_key = %key, nodes = root.count(), "parsed document");
    Ok(root)
}

/// Read and parse the document at `path`.
pub fn read_document(path: &Path) -> Result<Node> {
    let content = fs::read(path).map_err(|source| TreeDotError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = content.len(), "read input");
    Ok(parse_document(&content)?)
}
