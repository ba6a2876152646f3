// src/config/consts.rs
use std::time::Duration;

// Catalog feeds
pub const INDIANRAILWAYS_STATIONS_URL: &str = "https://indianrailways.gov.in/index/index_data/data.js";
pub const MNTES_BASE_URL: &str = "https://enquiry.indianrail.gov.in/mntes/";
pub const MNTES_STATIONS_PATH: &str = "javascripts/station_data.js";
pub const MNTES_TRAINS_PATH: &str = "javascripts/train_data.js";
// Hour suffix of the ?v= stamp; the feeds refresh daily around these hours
pub const STATIONS_VERSION_HOUR: &str = "08";
pub const TRAINS_VERSION_HOUR: &str = "10";
pub const TRAIN_LIST_MARKER: &str = "arrTrainList";

// Net config
pub const FEED_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
pub const FEED_REFERER: &str = "https://indianrailways.gov.in/index/index.html";
pub const FEED_ACCEPT: &str = "*/*";
pub const FEED_TIMEOUT: Duration = Duration::from_secs(60);

// Browser
pub const WEBDRIVER_URL: &str = "http://localhost:9515";
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/145.0.0.0 Safari/537.36";
pub const BROWSER_HEADLESS: bool = true;
pub const ELEMENT_TIMEOUT: Duration = Duration::from_secs(10);
pub const NAVIGATION_TIMEOUT: Duration = Duration::from_secs(15);
pub const SETTLE_DELAY: Duration = Duration::from_millis(500);
pub const POLL_INTERVAL: Duration = Duration::from_millis(250);

// Schedule form
pub const TRAIN_INPUT: &str = "input[name='trainNo']";
pub const SUBMIT_BUTTON: &str = "input[value='Get Schedule']";
pub const SCHEDULE_TAB_TEXT: &str = "Train Schedule";
pub const DATA_ROW: &str = "table tr td";

// Harvest
pub const CHECKPOINT_EVERY: usize = 100;

// Local files
pub const DATA_DIR: &str = "data";
pub const SCHEDULES_FILE: &str = "schedules.json";
pub const PROGRESS_FILE: &str = "schedules_progress.json";
pub const FAILED_FILE: &str = "failed_trains.json";
pub const EDGES_FILE: &str = "edges.json";
pub const LOG_FILE: &str = "debug.log";
