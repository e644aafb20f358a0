use crate::{
    application::{
        commands::optional_text,
        dto::GuestDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        errors::Resource,
        guest::{GuestFilter, GuestId, GuestRepository},
    },
};
use std::sync::Arc;

#[derive(Debug, Default)]
pub struct ListGuestsQuery {
    pub search: Option<String>,
    pub email: Option<String>,
}

pub struct GetGuestQuery {
    pub id: GuestId,
}

pub struct GuestQueryService {
    repo: Arc<dyn GuestRepository>,
}

impl GuestQueryService {
    pub fn new(repo: Arc<dyn GuestRepository>) -> Self {
        Self { repo }
    }

    pub async fn list_guests(&self, query: ListGuestsQuery) -> ApplicationResult<Vec<GuestDto>> {
        let filter = GuestFilter {
            search: optional_text(query.search),
            email: optional_text(query.email).map(|email| email.to_lowercase()),
        };
        let guests = self.repo.list(filter).await?;
        Ok(guests.into_iter().map(Into::into).collect())
    }

    pub async fn get_guest(&self, query: GetGuestQuery) -> ApplicationResult<GuestDto> {
        self.repo
            .find_by_id(query.id)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found(Resource::Guest, query.id))
    }
}
