//! Marker trait for intents.

/// Something the user did (or asked for) that may change a [`UiState`].
///
/// [`UiState`]: super::UiState
pub trait Intent: std::fmt::Debug + 'static {}
