use tracing::{error, info};
use crate::actor_framework::ResourceActor;
use crate::app_system::{AppError, Config};
use crate::clients::UserClient;
use crate::domain::{seed_users, User};

/// Owns the user actor and the handle the HTTP layer talks to.
///
/// Responsible for starting the actor with its seed data and for awaiting it
/// on shutdown.
pub struct UserSystem {
    pub user_client: UserClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl UserSystem {
    pub fn start(config: &Config) -> Result<Self, AppError> {
        let (user_actor, user_resource_client) =
            ResourceActor::<User>::with_seed(config.channel_capacity, seed_users())?;
        let user_client = UserClient::new(user_resource_client);
        let user_handle = tokio::spawn(user_actor.run());

        info!(capacity = config.channel_capacity, "User system started");

        Ok(Self {
            user_client,
            handles: vec![user_handle],
        })
    }

    /// Drops this handle's client and waits for the actor to drain.
    ///
    /// Every other clone of the client must already be gone, otherwise the
    /// actor keeps running and this never returns.
    pub async fn shutdown(self) -> Result<(), AppError> {
        info!("Shutting down system...");
        drop(self.user_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Actor task failed");
                return Err(AppError::ActorTask(e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
