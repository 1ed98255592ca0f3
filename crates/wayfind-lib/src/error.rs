use thiserror::Error;

/// Convenient result alias for the wayfind library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised by the input loader when the query text is malformed.
    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    /// Raised when an algorithm selector is not one of the supported tokens.
    #[error("unknown algorithm '{name}' (expected one of BFS, DFS, UCS, A*)")]
    UnknownAlgorithm { name: String },

    /// Raised when no route could be found between two locations.
    #[error("no route found between {start} and {goal}")]
    RouteNotFound { start: String, goal: String },

    /// Raised when A* encounters a location absent from the heuristic table.
    #[error("no heuristic estimate for location {location}")]
    HeuristicMissing { location: String },

    /// Raised when a predecessor chain is cyclic or dangling. Signals a
    /// defect in the search that recorded the chain, not bad user input.
    #[error("route reconstruction failed: predecessor chain does not terminate")]
    MalformedParentChain,

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
