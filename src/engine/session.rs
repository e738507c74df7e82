use fantoccini::{Client, ClientBuilder};
use serde_json::Value;

use super::{DriverProcess, Engine};
use crate::collector::CollectError;
use crate::config::Config;

/// A live WebDriver session plus the driver process backing it.
///
/// Each session is owned by exactly one task end-to-end, so no
/// synchronization is needed around it.
pub struct EngineSession {
    engine: Engine,
    client: Client,
    driver: DriverProcess,
}

impl EngineSession {
    /// Spawns the engine's driver and opens a headless session against it.
    pub async fn launch(engine: Engine, config: &Config) -> Result<Self, CollectError> {
        let binary = config.driver_binary(engine);
        let driver = DriverProcess::spawn(engine, &binary, config.launch_timeout()).await?;

        let client = ClientBuilder::native()
            .capabilities(engine.capabilities())
            .connect(&driver.url())
            .await
            .map_err(|err| CollectError::Launch {
                engine,
                reason: err.to_string(),
            })?;

        Ok(Self {
            engine,
            client,
            driver,
        })
    }

    pub fn engine(&self) -> Engine {
        self.engine
    }

    /// Navigates the session to a blank document.
    pub async fn blank_page(&self) -> Result<(), CollectError> {
        self.client
            .goto("about:blank")
            .await
            .map_err(|source| CollectError::Session {
                engine: self.engine,
                source,
            })
    }

    /// Evaluates a script in the page's global context and returns its
    /// JSON value.
    pub async fn evaluate(&self, script: &str) -> Result<Value, CollectError> {
        self.client
            .execute(script, Vec::new())
            .await
            .map_err(|source| CollectError::Session {
                engine: self.engine,
                source,
            })
    }

    /// Ends the WebDriver session and stops the driver process.
    pub async fn close(self) -> Result<(), CollectError> {
        let Self {
            engine,
            client,
            driver,
        } = self;

        client
            .close()
            .await
            .map_err(|source| CollectError::Close { engine, source })?;

        // Dropping the handle kills the driver child.
        drop(driver);
        Ok(())
    }
}
