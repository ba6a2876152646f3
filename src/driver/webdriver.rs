// src/driver/webdriver.rs
// `Browser` over a chromedriver session (thirtyfour).
//
//   chromedriver --port=9515

use std::time::{Duration, Instant};

use thirtyfour::prelude::*;
use thirtyfour::{ChromeCapabilities, ChromiumLikeCapabilities};

use crate::config::consts::{NAVIGATION_TIMEOUT, POLL_INTERVAL};
use crate::error::{HarvestError, Result};

use super::browser::Browser;

pub struct WebDriverBrowser {
    server_url: String,
    caps: ChromeCapabilities,
    driver: WebDriver,
}

impl WebDriverBrowser {
    /// Start a Chrome session on the chromedriver at `server_url`.
    pub async fn launch(server_url: &str, user_agent: &str, headless: bool) -> Result<Self> {
        let mut caps = DesiredCapabilities::chrome();
        if headless {
            caps.set_headless().map_err(classify)?;
        }
        caps.add_arg(&format!("--user-agent={user_agent}")).map_err(classify)?;

        let driver = start_session(server_url, &caps).await?;
        Ok(Self { server_url: s!(server_url), caps, driver })
    }

    pub async fn quit(self) -> Result<()> {
        self.driver.quit().await.map_err(classify)
    }
}

async fn start_session(server_url: &str, caps: &ChromeCapabilities) -> Result<WebDriver> {
    log::info!("Starting browser session on {server_url}");
    let driver = WebDriver::new(server_url, caps.clone()).await.map_err(classify)?;
    driver.set_page_load_timeout(NAVIGATION_TIMEOUT).await.map_err(classify)?;
    Ok(driver)
}

/// Errors meaning the window or the whole session went away.
const SESSION_GONE: [&str; 6] = [
    "no such window",
    "invalid session id",
    "not reachable",
    "disconnected",
    "session deleted",
    "has been closed",
];

fn is_session_gone(err: &WebDriverError) -> bool {
    let msg = err.to_string().to_ascii_lowercase();
    SESSION_GONE.iter().any(|needle| msg.contains(needle))
}

fn classify(err: WebDriverError) -> HarvestError {
    if is_session_gone(&err) {
        HarvestError::SessionCrashed(err.to_string())
    } else {
        HarvestError::Page(err.to_string())
    }
}

impl Browser for WebDriverBrowser {
    type PageMark = WebElement;

    async fn goto(&mut self, url: &str) -> Result<()> {
        self.driver.goto(url).await.map_err(classify)
    }

    async fn wait_for(&mut self, css: &str, timeout: Duration) -> Result<()> {
        match self.driver.query(By::Css(css)).wait(timeout, POLL_INTERVAL).first().await {
            Ok(_) => Ok(()),
            Err(e) if is_session_gone(&e) => Err(classify(e)),
            Err(e) => {
                log::debug!("wait for {css:?}: {e}");
                Err(HarvestError::NavigationTimeout { selector: s!(css) })
            }
        }
    }

    async fn click_text(&mut self, text: &str) -> Result<()> {
        let xpath = format!("//*[normalize-space(text())='{text}']");
        let elem = self.driver.find(By::XPath(&xpath)).await.map_err(classify)?;
        elem.click().await.map_err(classify)
    }

    async fn fill(&mut self, css: &str, value: &str) -> Result<()> {
        let elem = self.driver.find(By::Css(css)).await.map_err(classify)?;
        elem.clear().await.map_err(classify)?;
        elem.send_keys(value).await.map_err(classify)
    }

    async fn click(&mut self, css: &str) -> Result<()> {
        let elem = self.driver.find(By::Css(css)).await.map_err(classify)?;
        elem.click().await.map_err(classify)
    }

    async fn mark_page(&mut self) -> Result<WebElement> {
        self.driver.find(By::Tag("html")).await.map_err(classify)
    }

    async fn wait_for_navigation(&mut self, from: WebElement, timeout: Duration) -> Result<()> {
        let deadline = Instant::now() + timeout;

        // readyState alone is already "complete" on the page we are leaving.
        match from.wait_until().wait(timeout, POLL_INTERVAL).stale().await {
            Ok(()) => {}
            Err(e) if is_session_gone(&e) => return Err(classify(e)),
            Err(e) => {
                log::debug!("previous page never went stale: {e}");
                return Err(HarvestError::NavigationTimeout { selector: s!("html (previous page)") });
            }
        }

        loop {
            let ret = self
                .driver
                .execute("return document.readyState;", Vec::new())
                .await
                .map_err(classify)?;
            if ret.json().as_str() == Some("complete") {
                return Ok(());
            }
            if Instant::now() >= deadline {
                return Err(HarvestError::NavigationTimeout { selector: s!("document.readyState") });
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }

    async fn content(&mut self) -> Result<String> {
        self.driver.source().await.map_err(classify)
    }

    async fn reopen(&mut self) -> Result<()> {
        match self.driver.title().await {
            Ok(_) => return Ok(()),
            Err(e) if !is_session_gone(&e) => return Ok(()),
            Err(e) => log::warn!("Browser session lost ({e}), starting a new one"),
        }
        let fresh = start_session(&self.server_url, &self.caps).await?;
        let old = std::mem::replace(&mut self.driver, fresh);
        if let Err(e) = old.quit().await {
            log::debug!("quit of dead session: {e}");
        }
        Ok(())
    }
}
