use thiserror::Error;

/// Errors surfaced by frontiers, searches and path reconstruction.
///
/// None of these are retried internally: the failing call is aborted and the
/// error handed back to the caller. A search that simply never reaches its
/// goal is not an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// An operation was called in a state where its contract does not hold,
    /// e.g. `get` on an empty frontier.
    #[error("precondition violated: {reason}")]
    PreconditionViolation { reason: &'static str },

    /// A graph reported a negative edge cost.
    #[error("invalid edge cost {cost}: costs must be non-negative")]
    InvalidCost { cost: i32 },

    /// Adding an edge cost or heuristic estimate to an accumulated cost
    /// overflowed `i32`.
    #[error("accumulated cost overflowed: {cost} + {step}")]
    CostOverflow { cost: i32, step: i32 },

    /// The goal was never discovered by the search that produced `came_from`.
    #[error("goal was not reached by the search")]
    UnreachableGoal,

    /// Walking the predecessor chain did not arrive at the start node.
    #[error("predecessor chain is malformed (gave up after {steps} steps)")]
    MalformedPredecessorChain { steps: usize },

    /// The caller's cancellation check asked the search to stop.
    #[error("search cancelled after {expanded} expansions")]
    Cancelled { expanded: usize },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SearchError>;
