use std::net::TcpListener;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;

use tokio::net::TcpStream;
use tokio::process::{Child, Command};

use super::Engine;
use crate::collector::CollectError;

/// Poll interval while waiting for a freshly spawned driver to accept
/// connections.
const READY_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// A WebDriver server child process.
///
/// The child is spawned with `kill_on_drop`, so a run aborted partway
/// through does not leak driver processes.
#[derive(Debug)]
pub struct DriverProcess {
    engine: Engine,
    child: Child,
    port: u16,
}

impl DriverProcess {
    /// Spawns the driver binary on an ephemeral port and waits until it
    /// accepts TCP connections, bounded by `timeout`.
    pub async fn spawn(
        engine: Engine,
        binary: &Path,
        timeout: Duration,
    ) -> Result<Self, CollectError> {
        let port = free_port().map_err(|err| CollectError::Launch {
            engine,
            reason: format!("no free port: {err}"),
        })?;

        let child = Command::new(binary)
            .arg(format!("--port={port}"))
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|err| CollectError::Launch {
                engine,
                reason: format!("failed to spawn {}: {err}", binary.display()),
            })?;

        let mut driver = Self {
            engine,
            child,
            port,
        };
        driver.wait_ready(timeout).await?;
        Ok(driver)
    }

    /// Base URL the WebDriver client should connect to.
    pub fn url(&self) -> String {
        format!("http://127.0.0.1:{}", self.port)
    }

    async fn wait_ready(&mut self, timeout: Duration) -> Result<(), CollectError> {
        let deadline = tokio::time::Instant::now() + timeout;

        loop {
            if let Ok(Some(status)) = self.child.try_wait() {
                return Err(CollectError::Launch {
                    engine: self.engine,
                    reason: format!("driver exited during startup ({status})"),
                });
            }

            if TcpStream::connect(("127.0.0.1", self.port)).await.is_ok() {
                return Ok(());
            }

            if tokio::time::Instant::now() >= deadline {
                return Err(CollectError::Launch {
                    engine: self.engine,
                    reason: format!(
                        "driver did not accept connections within {}s",
                        timeout.as_secs()
                    ),
                });
            }

            tokio::time::sleep(READY_POLL_INTERVAL).await;
        }
    }
}

/// Asks the OS for a currently unused TCP port.
fn free_port() -> std::io::Result<u16> {
    let listener = TcpListener::bind(("127.0.0.1", 0))?;
    Ok(listener.local_addr()?.port())
}
