//! Engine errors.
//!
//! Every variant except [`Error::Callback`] signals a static mistake in the
//! declarative description, not a transient runtime condition. The engine is
//! deliberately fail-fast: an error aborts the running pass, nothing is
//! retried or swallowed, and no rollback of already-applied create/update
//! effects is attempted. The recovery path after an aborted pass is to
//! rebuild the tree from scratch.

use thiserror::Error;

/// Everything that can abort a reconciliation pass.
#[derive(Debug, Error)]
pub enum Error {
    /// A child was declared with an empty or whitespace-only name.
    #[error("every element needs a non-blank name (declaring a child of \"{parent}\")")]
    InvalidName {
        /// Path of the parent node the child was declared under.
        parent: String,
    },

    /// The same name was declared twice under one parent within one pass.
    #[error(
        "names must be unique within the children of each element: \
         \"{name}\" appears more than once under \"{parent}\""
    )]
    DuplicateVisit {
        /// The repeated child name.
        name: String,
        /// Path of the parent node.
        parent: String,
    },

    /// A name was re-declared with different context or element types than
    /// the node it resolved to was created with.
    #[error(
        "node \"{name}\" under \"{parent}\" was created with a different \
         context or element type"
    )]
    TypeMismatch {
        /// The conflicting child name.
        name: String,
        /// Path of the parent node.
        parent: String,
    },

    /// A switch declared the same case value twice in one pass.
    #[error("case \"{tag}\" is declared more than once in switch \"{switch}\"")]
    DuplicateCase {
        /// Path of the enclosing switch node.
        switch: String,
        /// Textual form of the duplicated case value.
        tag: String,
    },

    /// An application-supplied create/update/build callback failed. The
    /// underlying error propagates unmodified; sibling subtrees are not
    /// isolated from it.
    #[error(transparent)]
    Callback(Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl Error {
    /// Wrap an application error raised inside a builder callback.
    pub fn callback(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self::Callback(err.into())
    }
}

/// Engine result alias.
pub type Result<T, E = Error> = std::result::Result<T, E>;
