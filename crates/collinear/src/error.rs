//! Error types for the geometry layer.
//!
//! The engine itself is infallible; these errors come from standalone line
//! construction and from coordinate parsing.

/// Result type alias
pub type Result<T> = std::result::Result<T, GeomError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeomError {
    /// Sloped line requested through two points sharing an x-coordinate.
    #[error("points share x = {x}; the line through them is vertical")]
    VerticalPair { x: String },

    /// The two points are identical, so no unique line passes through them.
    #[error("coincident points ({x}, {y}) do not determine a line")]
    CoincidentPoints { x: String, y: String },

    /// Coordinate text is not an exact decimal or fraction.
    #[error("invalid coordinate {text:?}: {reason}")]
    ParseCoord { text: String, reason: &'static str },
}
