// src/driver/browser.rs
use std::time::Duration;

use crate::error::Result;

/// The handful of page operations the schedule form needs.
///
/// Implementations report a dead page/session as
/// `HarvestError::SessionCrashed` and an element that never showed up as
/// `HarvestError::NavigationTimeout`; everything else is `HarvestError::Page`.
#[allow(async_fn_in_trait)]
pub trait Browser {
    /// Handle on one loaded document.
    type PageMark;

    async fn goto(&mut self, url: &str) -> Result<()>;

    /// Wait until at least one element matches `css`.
    async fn wait_for(&mut self, css: &str, timeout: Duration) -> Result<()>;

    /// Click the element whose visible text is exactly `text`.
    async fn click_text(&mut self, text: &str) -> Result<()>;

    /// Replace the value of the input matching `css`.
    async fn fill(&mut self, css: &str, value: &str) -> Result<()>;

    async fn click(&mut self, css: &str) -> Result<()>;

    /// Mark the current document, before an action that navigates away.
    async fn mark_page(&mut self) -> Result<Self::PageMark>;

    /// Wait until the document marked by `from` is gone and its replacement
    /// has finished loading. A page that never changes is a
    /// `HarvestError::NavigationTimeout`.
    async fn wait_for_navigation(&mut self, from: Self::PageMark, timeout: Duration) -> Result<()>;

    /// Current rendered document.
    async fn content(&mut self) -> Result<String>;

    /// Make sure there is a usable session, starting a new one if the old
    /// one is gone. A live session is left alone.
    async fn reopen(&mut self) -> Result<()>;
}
