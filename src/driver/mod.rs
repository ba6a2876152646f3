// src/driver/mod.rs
//! Drives the enquiry site's schedule form, one train at a time.
//!
//! ```text
//! Uninitialized ──initialize──▶ Ready ──fetch_schedule──▶ Submitting ──▶ Ready
//!                                 ▲                            │
//!                                 └────────recover──── Crashed ◀┘ (session lost)
//! ```

mod browser;
mod webdriver;

use std::time::Duration;

pub use browser::Browser;
pub use webdriver::WebDriverBrowser;

use crate::config::consts::*;
use crate::error::Result;

/// Anything that can turn a train number into a rendered schedule page.
/// The harvest loop only talks to this.
#[allow(async_fn_in_trait)]
pub trait ScheduleSource {
    async fn fetch_schedule(&mut self, train_no: &str) -> Result<String>;

    /// Rebuild the session after `HarvestError::SessionCrashed`.
    async fn recover(&mut self) -> Result<()>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DriverConfig {
    pub base_url: String,
    pub element_timeout: Duration,
    pub navigation_timeout: Duration,
    /// Pause after data rows appear, for late client-side rendering.
    pub settle: Duration,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            base_url: s!(MNTES_BASE_URL),
            element_timeout: ELEMENT_TIMEOUT,
            navigation_timeout: NAVIGATION_TIMEOUT,
            settle: SETTLE_DELAY,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DriverState {
    Uninitialized,
    Ready,
    Submitting,
    Crashed,
}

pub struct FormDriver<B: Browser> {
    browser: B,
    config: DriverConfig,
    state: DriverState,
}

impl<B: Browser> FormDriver<B> {
    pub fn new(browser: B, config: DriverConfig) -> Self {
        Self { browser, config, state: DriverState::Uninitialized }
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn into_browser(self) -> B {
        self.browser
    }

    /// Open the site and switch to the "Train Schedule" tab.
    /// The tab switch re-renders the form, hence the second wait.
    pub async fn initialize(&mut self) -> Result<()> {
        let res = self.open_schedule_form().await;
        self.settle_state(&res, DriverState::Ready);
        res
    }

    async fn open_schedule_form(&mut self) -> Result<()> {
        let timeout = self.config.element_timeout;
        self.browser.goto(&self.config.base_url).await?;
        self.browser.wait_for(TRAIN_INPUT, timeout).await?;
        self.browser.click_text(SCHEDULE_TAB_TEXT).await?;
        self.browser.wait_for(TRAIN_INPUT, timeout).await?;
        log::info!("Schedule form ready at {}", self.config.base_url);
        Ok(())
    }

    async fn submit(&mut self, train_no: &str) -> Result<String> {
        self.browser.fill(TRAIN_INPUT, train_no).await?;
        let before = self.browser.mark_page().await?;
        self.browser.click(SUBMIT_BUTTON).await?;
        self.browser.wait_for_navigation(before, self.config.navigation_timeout).await?;

        match self.browser.wait_for(DATA_ROW, self.config.element_timeout).await {
            Ok(()) => tokio::time::sleep(self.config.settle).await,
            // Specials and test entries have no schedule; the page says so.
            Err(e) if e.is_timeout() => log::debug!("{train_no}: no data rows rendered"),
            Err(e) => return Err(e),
        }
        self.browser.content().await
    }

    fn settle_state<T>(&mut self, res: &Result<T>, ok: DriverState) {
        self.state = match res {
            Ok(_) => ok,
            Err(e) if e.is_session_lost() => DriverState::Crashed,
            // An ordinary failure leaves the page where it was.
            Err(_) if self.state == DriverState::Submitting => DriverState::Ready,
            Err(_) => self.state,
        };
    }
}

impl<B: Browser> ScheduleSource for FormDriver<B> {
    async fn fetch_schedule(&mut self, train_no: &str) -> Result<String> {
        if self.state == DriverState::Uninitialized {
            self.initialize().await?;
        }
        self.state = DriverState::Submitting;
        let res = self.submit(train_no).await;
        self.settle_state(&res, DriverState::Ready);
        res
    }

    async fn recover(&mut self) -> Result<()> {
        log::warn!("Recovering schedule form (state {:?})", self.state);
        if let Err(e) = self.browser.reopen().await {
            self.state = DriverState::Crashed;
            return Err(e);
        }
        self.initialize().await
    }
}
