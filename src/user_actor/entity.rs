use crate::actor_framework::Entity;
use crate::domain::{User, UserCreate};

impl Entity for User {
    type Id = u64;
    type CreatePayload = UserCreate;

    const KIND: &'static str = "user";

    fn id(&self) -> u64 {
        self.id
    }

    /// Creates a new User from a validated payload.
    ///
    /// # Arguments
    /// * `id` - Next id handed out by the actor
    /// * `payload` - Name and email, already checked by the request layer
    fn from_create(id: u64, payload: UserCreate) -> Result<Self, String> {
        Ok(Self {
            id,
            name: payload.name,
            email: payload.email,
        })
    }

    /// Re-checks the store invariant so seeded users obey it too.
    fn on_create(&mut self) -> Result<(), String> {
        if self.name.is_empty() {
            return Err("Name is required".to_string());
        }
        if self.email.is_empty() {
            return Err("Email is required".to_string());
        }
        Ok(())
    }
}
