/// Read-side client methods shared by every resource client.
macro_rules! impl_client_methods {
    ($client_name:ident, $entity:ty, $error:ty, $entity_name_snake:ident, $entity_name_plural:ident) => {
        paste::paste! {
            impl $client_name {
                #[tracing::instrument(skip(self))]
                pub async fn [<list_ $entity_name_plural>](&self) -> Result<Vec<$entity>, $error> {
                    tracing::debug!("Sending request");
                    self.inner.list().await.map_err(<$error>::from)
                }

                /// Test-only view of the actor's store size.
                #[cfg(test)]
                pub async fn [<$entity_name_snake _count>](&self) -> Result<usize, $error> {
                    self.inner.count().await.map_err(<$error>::from)
                }
            }
        }
    };
}

macro_rules! impl_client_new {
    ($client_name:ident, $entity:ty) => {
        impl $client_name {
            pub fn new(inner: crate::actor_framework::ResourceClient<$entity>) -> Self {
                Self { inner }
            }
        }
    };
}

macro_rules! impl_basic_client {
    ($client_name:ident, $entity:ty, $error:ty, $entity_name_snake:ident, $entity_name_plural:ident) => {
        impl_client_new!($client_name, $entity);
        impl_client_methods!($client_name, $entity, $error, $entity_name_snake, $entity_name_plural);
    };
}
