use crate::error::Error;

/// How rows are kept in the host.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    /// "Load more" list: every fetched row is appended and stays mounted.
    #[default]
    Append,
    /// Windowed list: only the slice under the viewport is mounted, and the wrapper is
    /// translated so the slice lines up with the real scroll position.
    Windowed,
}

/// Load state machine gating page requests.
///
/// Transitions: `Idle -> Loading -> {Idle, Error, Exhausted}`, `Error -> Idle` on retry.
/// `Exhausted` is terminal until a reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Error,
    Exhausted,
}

/// Outcome reported by the caller together with a page of data.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum PageStatus {
    /// The page loaded and more pages remain.
    #[default]
    More = 0,
    /// The fetch failed; no data is appended.
    Failed = 2,
    /// The page loaded and it was the last one.
    Exhausted = 3,
}

impl PageStatus {
    /// The load status a pending load settles into when this outcome arrives.
    pub fn load_status(self) -> LoadStatus {
        match self {
            Self::More => LoadStatus::Idle,
            Self::Failed => LoadStatus::Error,
            Self::Exhausted => LoadStatus::Exhausted,
        }
    }

    /// Whether data delivered with this outcome is appended to the buffer.
    pub fn carries_data(self) -> bool {
        !matches!(self, Self::Failed)
    }
}

impl TryFrom<u8> for PageStatus {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::More),
            2 => Ok(Self::Failed),
            3 => Ok(Self::Exhausted),
            other => Err(Error::InvalidPageStatus(other)),
        }
    }
}

/// What the trailing indicator region shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Indicator {
    /// Bouncing-dot loading animation.
    Loading,
    /// Error message plus a retry action. Hosts route activation to
    /// [`crate::VirtualList::retry`].
    Failed,
    /// "Reached the end" message.
    End,
}

impl From<LoadStatus> for Indicator {
    fn from(status: LoadStatus) -> Self {
        match status {
            LoadStatus::Idle | LoadStatus::Loading => Self::Loading,
            LoadStatus::Error => Self::Failed,
            LoadStatus::Exhausted => Self::End,
        }
    }
}

/// Cached geometry of one measured row.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PositionRecord {
    pub index: usize,
    pub height: f32,
    pub top: f32,
    pub bottom: f32,
}

/// The slice of the buffer currently mounted in windowed mode.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Window {
    pub start: usize,
    pub end: usize, // exclusive
    /// Translation applied to the inner wrapper (pixel offset of `start`).
    pub offset: f32,
}

impl Window {
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// A request for one page, emitted to the registered loader.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageRequest {
    /// 1-based page number.
    pub page: usize,
    pub page_size: usize,
    /// Bumped by `reset`/`cancel`; responses carrying an older generation are dropped.
    pub generation: u64,
}
