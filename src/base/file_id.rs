//! Compilation-unit identifiers.

/// A cheap, copyable identifier for one compilation unit handed to the
/// engine by the host. The host owns the mapping back to paths or
/// editor buffers; the engine only threads the id through diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FileId(u32);

impl FileId {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for FileId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}
