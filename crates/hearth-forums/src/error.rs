use hearth_router::SubforumId;
use thiserror::Error;

/// The subforum rows do not describe a forest
///
/// Every variant is a data-integrity fault: the rows must be fixed at the
/// source, and no partially built tree is ever handed out.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("subforum {id} points at parent {parent_id}, which does not exist")]
    DanglingParent { id: SubforumId, parent_id: SubforumId },

    #[error("subforum {0} appears more than once")]
    DuplicateId(SubforumId),

    #[error("subforum {0} is its own ancestor")]
    Cycle(SubforumId),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineageError {
    #[error("unknown subforum {0}")]
    UnknownSubforum(SubforumId),
}
