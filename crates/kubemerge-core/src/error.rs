use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    Cluster,
    User,
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cluster => write!(f, "cluster"),
            Self::User => write!(f, "user"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeError {
    ContextNotFound(String),
    BrokenReference { context: String, reference: String, kind: ReferenceKind },
    NameCollisionExhausted(String),
    Serialization(String),
}

impl fmt::Display for MergeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ContextNotFound(name) => write!(f, "context {name:?} not found in the incoming kubeconfig"),
            Self::BrokenReference { context, reference, kind } => {
                write!(f, "context {context:?} references missing {kind} {reference:?}")
            }
            Self::NameCollisionExhausted(name) => {
                write!(f, "could not allocate a collision-free name for {name:?}")
            }
            Self::Serialization(msg) => write!(f, "serializing an entry for name allocation: {msg}"),
        }
    }
}

impl std::error::Error for MergeError {}
