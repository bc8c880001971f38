//! System power-off

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{info, warn};

use crate::error::ShutdownError;

/// Terminal action run when the countdown reaches zero
#[async_trait]
pub trait Shutdown: Send + Sync {
    async fn power_off(&self) -> Result<(), ShutdownError>;
}

/// Runs a privileged power-off command
#[derive(Debug, Clone)]
pub struct CommandShutdown {
    argv: Vec<String>,
}

impl CommandShutdown {
    pub fn new(argv: Vec<String>) -> Self {
        Self { argv }
    }

    fn display(&self) -> String {
        self.argv.join(" ")
    }
}

#[async_trait]
impl Shutdown for CommandShutdown {
    async fn power_off(&self) -> Result<(), ShutdownError> {
        let (program, args) = self.argv.split_first().ok_or(ShutdownError::NoCommand)?;
        info!("Executing power-off: {}", self.display());

        let output = Command::new(program)
            .args(args)
            .output()
            .await
            .map_err(|source| ShutdownError::Spawn {
                command: self.display(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ShutdownError::Failed {
                command: self.display(),
                status: output.status.to_string(),
                stderr: stderr.trim().to_string(),
            });
        }

        info!("Power-off command executed");
        Ok(())
    }
}

/// Reports the terminal action without touching the machine
#[derive(Debug, Clone, Default)]
pub struct DryRunShutdown;

#[async_trait]
impl Shutdown for DryRunShutdown {
    async fn power_off(&self) -> Result<(), ShutdownError> {
        info!("Dry run: skipping power-off");
        Ok(())
    }
}

/// Warn early when the configured power-off program is missing
pub async fn check_poweroff_available(argv: &[String]) -> Result<(), ShutdownError> {
    let program = argv.first().ok_or(ShutdownError::NoCommand)?;
    if program.contains('/') && tokio::fs::metadata(program).await.is_err() {
        warn!("{} does not exist", program);
        return Err(ShutdownError::Unavailable {
            command: program.clone(),
        });
    }
    Ok(())
}
