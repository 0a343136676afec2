//! Browser location port for history and navigation operations.

use url::Url;

/// Port over the embedding shell's location capability.
///
/// The session core never touches the host location directly; this
/// abstraction makes the fragment extraction and logout navigation
/// testable without a real host shell.
pub trait BrowserLocation: Send + Sync {
    /// Returns the current location URL.
    fn current_url(&self) -> Url;

    /// Replaces the current history entry with `url`.
    ///
    /// This must never push a new entry: the scrubbed credential would
    /// otherwise be recoverable via back-navigation.
    fn replace_current_url(&self, url: &Url);

    /// Performs a full navigation to `url` (leaving the application).
    fn navigate_to(&self, url: &Url);
}
