use tracing::{debug, info, instrument};
use crate::domain::{User, UserCreate};
use crate::user_actor::UserError;
use crate::actor_framework::ResourceClient;

/// Client for interacting with the User actor.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
}

impl_basic_client!(UserClient, User, UserError, user, users);

impl UserClient {
    #[instrument(fields(user_name = %payload.name), skip(self, payload))]
    pub async fn create_user(&self, payload: UserCreate) -> Result<User, UserError> {
        debug!("Sending request");
        let user = self.inner.create(payload).await?;
        info!(user_id = user.id, "User created");
        Ok(user)
    }
}
