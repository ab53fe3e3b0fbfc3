use super::Engine;

use async_trait::async_trait;

use crate::{
    api::ProfileAPI,
    entities::{Member, ProfileUpdate},
    error::Error,
};

#[async_trait]
impl ProfileAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn profile(&self) -> Result<Member, Error> {
        let member = self.member.read().await;

        Ok(member.clone())
    }

    #[tracing::instrument(skip(self))]
    async fn save_profile(&self, update: ProfileUpdate) -> Result<Member, Error> {
        let mut member = self.member.write().await;

        member.apply(update);

        tracing::info!(member_id = %member.id, "profile saved");

        Ok(member.clone())
    }
}
