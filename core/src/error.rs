use std::io;
use std::path::PathBuf;

/// Everything that can stop a run before or during emission.
#[derive(Debug, thiserror::Error)]
pub enum TreeDotError {
    /// Wrong command line. The message is shown above the usage text.
    #[error("{0}")]
    Usage(String),

    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("failed to write output")]
    Output(#[from] io::Error),
}

/// The input is not JSON, or not shaped like `{ "<key>": { "tree": <node> } }`.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("document has no top-level key")]
    EmptyDocument,

    #[error("value under top-level key {key:?} is not an object")]
    ContainerNotObject { key: String },

    #[error("value under top-level key {key:?} has no `tree` field")]
    MissingTree { key: String },

    #[error("root of the tree has no `tag` field")]
    MissingRootTag,

    #[error("tree has no root node")]
    EmptyTree,
}

pub type Result<T, E = TreeDotError> = std::result::Result<T, E>;
