use alloc::string::String;

/// Errors reported while configuring a [`crate::VirtualList`].
///
/// Runtime operations never fail: load failures are reported by the caller through
/// [`crate::PageStatus::Failed`] and surface as a retry indicator instead.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("invalid length `{0}`")]
    InvalidLength(String),

    #[error("unsupported length unit `{unit}` in `{input}`")]
    UnsupportedUnit { input: String, unit: String },

    #[error("item height must be finite and positive, got {0}")]
    InvalidItemHeight(f32),

    #[error("page size is 0 and no item height is configured to derive it from")]
    UnresolvedPageSize,

    #[error("unknown page status code {0} (expected 0, 2 or 3)")]
    InvalidPageStatus(u8),
}

pub type Result<T, E = Error> = core::result::Result<T, E>;
