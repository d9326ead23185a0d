use thiserror::Error;

/// Precondition violations of the fixed-header operations.
///
/// Every check runs before the document is touched, so an error always means
/// the tree is exactly as the caller left it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FixedHeaderError {
    #[error("table '{0}' not found in the document")]
    TableNotFound(String),

    #[error("table '{0}' is the document root and has no parent to wrap within")]
    NoParent(String),

    #[error("table '{0}' is already inside a fixed-header frame")]
    AlreadyWrapped(String),

    #[error("table '{0}' is not inside a fixed-header frame; wrap it first")]
    NotWrapped(String),

    #[error("table '{0}' has no live header section")]
    MissingHeader(String),

    #[error("element '{0}' has not been laid out")]
    NotRendered(String),

    #[error("table '{0}' already has a mirrored header")]
    AlreadyMirrored(String),

    #[error("table '{0}' has no mirrored header")]
    MissingMirror(String),
}

impl FixedHeaderError {
    /// Id of the element the error is about.
    pub fn element_id(&self) -> &str {
        match self {
            Self::TableNotFound(id)
            | Self::NoParent(id)
            | Self::AlreadyWrapped(id)
            | Self::NotWrapped(id)
            | Self::MissingHeader(id)
            | Self::NotRendered(id)
            | Self::AlreadyMirrored(id)
            | Self::MissingMirror(id) => id,
        }
    }
}

pub type Result<T> = std::result::Result<T, FixedHeaderError>;
