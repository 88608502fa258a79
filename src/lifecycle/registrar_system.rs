use tracing::{error, info};

use crate::clients::RegistrarClient;
use crate::config::LedgerConfig;
use crate::framework::LedgerActor;

/// The runtime orchestrator for a shared ledger.
///
/// `RegistrarSystem` is responsible for:
/// - **Lifecycle Management**: spawning the [`LedgerActor`] and stopping it
/// - **Access**: handing out the [`RegistrarClient`] callers use
///
/// # Example
///
/// ```ignore
/// let system = RegistrarSystem::new(LedgerConfig::from_env()?);
///
/// system.client.add_course(cs101).await?;
/// system.client.add_student(john).await?;
/// let notice = system.client.register("S1001", "CS101").await?;
///
/// system.shutdown().await?;
/// ```
pub struct RegistrarSystem {
    /// Client for the ledger actor. Clone it to share across tasks.
    pub client: RegistrarClient,

    handle: tokio::task::JoinHandle<()>,
}

impl RegistrarSystem {
    /// Spawns the ledger actor on the current Tokio runtime.
    pub fn new(config: LedgerConfig) -> Self {
        let (actor, client) = LedgerActor::new(config);
        let handle = tokio::spawn(actor.run());
        Self { client, handle }
    }

    /// Gracefully shuts down the actor.
    ///
    /// Dropping the client closes the channel; the actor drains what is
    /// already queued and exits its loop. Clones of the client held elsewhere
    /// keep the actor alive until they are dropped too.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down registrar...");
        drop(self.client);

        if let Err(e) = self.handle.await {
            error!("Ledger actor failed: {:?}", e);
            return Err(format!("Ledger actor failed: {:?}", e));
        }

        info!("Registrar shutdown complete.");
        Ok(())
    }
}
