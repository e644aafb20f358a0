// src/application/commands/guests.rs
use crate::{
    application::{
        commands::optional_text,
        dto::GuestDto,
        error::{ApplicationError, ApplicationResult},
        ports::ClockPort,
    },
    domain::{
        errors::{Resource, ValidationErrors},
        guest::{Email, Guest, GuestChanges, GuestId, GuestRepository, NewGuest, PersonName, Phone},
        id::EntityId,
    },
};
use std::sync::Arc;

#[derive(Debug, Default)]
pub struct CreateGuestCommand {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub nationality: Option<String>,
}

#[derive(Debug)]
pub struct UpdateGuestCommand {
    pub id: GuestId,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub nationality: Option<String>,
}

pub struct DeleteGuestCommand {
    pub id: GuestId,
}

impl CreateGuestCommand {
    fn validate(self) -> Result<NewGuest, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let first_name = errors
            .required("first_name", self.first_name)
            .and_then(|value| errors.check(PersonName::new("first_name", value)));
        let last_name = errors
            .required("last_name", self.last_name)
            .and_then(|value| errors.check(PersonName::new("last_name", value)));
        let email = errors
            .required("email", self.email)
            .and_then(|value| errors.check(Email::new(value)));
        let phone = errors
            .required("phone", self.phone)
            .and_then(|value| errors.check(Phone::new(value)));

        let (Some(first_name), Some(last_name), Some(email), Some(phone)) =
            (first_name, last_name, email, phone)
        else {
            return Err(errors);
        };

        Ok(NewGuest {
            first_name,
            last_name,
            email,
            phone,
            address: optional_text(self.address),
            nationality: optional_text(self.nationality),
        })
    }
}

impl UpdateGuestCommand {
    fn validate(self) -> Result<(GuestId, GuestChanges), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let changes = GuestChanges {
            first_name: errors.optional(self.first_name, |value| {
                PersonName::new("first_name", value)
            }),
            last_name: errors.optional(self.last_name, |value| PersonName::new("last_name", value)),
            email: errors.optional(self.email, Email::new),
            phone: errors.optional(self.phone, Phone::new),
            address: optional_text(self.address),
            nationality: optional_text(self.nationality),
        };

        if errors.is_empty() {
            Ok((self.id, changes))
        } else {
            Err(errors)
        }
    }
}

pub struct GuestCommandService {
    repo: Arc<dyn GuestRepository>,
    clock: Arc<ClockPort>,
}

impl GuestCommandService {
    pub fn new(repo: Arc<dyn GuestRepository>, clock: Arc<ClockPort>) -> Self {
        Self { repo, clock }
    }

    pub async fn create_guest(&self, command: CreateGuestCommand) -> ApplicationResult<GuestDto> {
        let new_guest = command.validate()?;
        let guest = Guest::create(GuestId::generate(), new_guest, self.clock.now());

        let created = self.repo.insert(guest).await?;
        tracing::info!(guest_id = %created.id, "guest registered");
        Ok(created.into())
    }

    pub async fn update_guest(&self, command: UpdateGuestCommand) -> ApplicationResult<GuestDto> {
        let (id, changes) = command.validate()?;
        let mut guest = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(Resource::Guest, id))?;

        guest.apply(changes, self.clock.now());
        let updated = self.repo.update(guest).await?;
        Ok(updated.into())
    }

    pub async fn delete_guest(&self, command: DeleteGuestCommand) -> ApplicationResult<()> {
        self.repo.delete(command.id).await?;
        tracing::info!(guest_id = %command.id, "guest deleted");
        Ok(())
    }
}
