//! WebDriver-backed browser engines.
//!
//! Each engine is driven through its own WebDriver server binary:
//! `chromedriver` for Chromium, `geckodriver` for Firefox, and
//! `WebKitWebDriver` for WebKit. `DriverProcess` owns the server child
//! process, `EngineSession` owns the WebDriver session on top of it.

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serde_json::json;

pub use driver::DriverProcess;
pub use session::EngineSession;

mod driver;
mod session;

/// A browser rendering engine the collector can drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Engine {
    Chromium,
    Firefox,
    Webkit,
}

impl Engine {
    /// All supported engines, in default launch (and output) order.
    pub fn all() -> Vec<Engine> {
        vec![Engine::Chromium, Engine::Firefox, Engine::Webkit]
    }

    pub fn name(self) -> &'static str {
        match self {
            Engine::Chromium => "chromium",
            Engine::Firefox => "firefox",
            Engine::Webkit => "webkit",
        }
    }

    /// Name of the WebDriver binary expected on PATH unless overridden
    /// through the config file.
    pub fn driver_binary(self) -> &'static str {
        match self {
            Engine::Chromium => "chromedriver",
            Engine::Firefox => "geckodriver",
            Engine::Webkit => "WebKitWebDriver",
        }
    }

    /// Capabilities for a new headless session.
    pub fn capabilities(self) -> fantoccini::wd::Capabilities {
        let mut caps = fantoccini::wd::Capabilities::new();
        match self {
            Engine::Chromium => {
                caps.insert(
                    "goog:chromeOptions".to_string(),
                    json!({ "args": ["--headless=new", "--disable-gpu", "--no-sandbox"] }),
                );
            }
            Engine::Firefox => {
                caps.insert(
                    "moz:firefoxOptions".to_string(),
                    json!({ "args": ["-headless"] }),
                );
            }
            // WebKitWebDriver has no headless switch; it renders offscreen.
            Engine::Webkit => {}
        }
        caps
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
