//! Marker trait for view state snapshots.

/// A complete, self-contained snapshot of what a view renders.
///
/// `Default` is the initial snapshot; `PartialEq` lets callers detect
/// whether a reduction changed anything.
pub trait UiState: Clone + PartialEq + Default + 'static {}
