//! Guest service - Room capacity, guest lifecycle and payment state.
//!
//! Every operation returns transport projections; entities never leave
//! this layer.

use async_trait::async_trait;
use chrono::Local;
use std::sync::Arc;
use std::time::Duration;

use crate::config::{ADMISSION_MAX_ATTEMPTS, ADMISSION_RETRY_BACKOFF_MS, ROOM_CAPACITY};
use crate::domain::{Guest, GuestInput, GuestView, NewGuest, RoomView};
use crate::errors::{AppError, AppResult, OptionExt, Resource};
use crate::infra::{is_write_conflict, UnitOfWork};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Guest service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait GuestService: Send + Sync {
    /// Admit a guest into a room that still has a free slot
    async fn add_guest(&self, input: GuestInput, room_number: i32) -> AppResult<GuestView>;

    /// List every guest
    async fn get_all_guests(&self) -> AppResult<Vec<GuestView>>;

    /// List the guests of one room
    async fn get_guests_by_room(&self, room_number: i32) -> AppResult<Vec<GuestView>>;

    /// Get guest by ID
    async fn get_guest_by_id(&self, id: i32) -> AppResult<GuestView>;

    /// Look up a guest for editing. Supplied fields are not applied.
    async fn update_guest(&self, input: GuestInput, id: i32) -> AppResult<GuestView>;

    /// Delete a guest and return the acknowledgement message
    async fn delete_guest(&self, id: i32) -> AppResult<String>;

    /// List rooms with at least one free slot
    async fn get_available_rooms(&self) -> AppResult<Vec<RoomView>>;

    /// Overwrite a guest's payment status. `month` is accepted but not stored.
    async fn update_payment_status(
        &self,
        id: i32,
        month: String,
        status: String,
    ) -> AppResult<GuestView>;

    /// Dashboard listing (all guests)
    async fn get_dashboard_stats(&self) -> AppResult<Vec<GuestView>>;
}

/// Concrete implementation of GuestService using Unit of Work.
pub struct GuestManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> GuestManager<U> {
    /// Create new guest service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }

    /// Check capacity and insert in one transaction.
    ///
    /// The room row lock serializes concurrent admissions to the same room
    /// where the backend supports it, so the count always sees every
    /// committed guest. SQLite instead refuses the later writer, which
    /// surfaces as a write conflict.
    async fn admit(&self, new_guest: NewGuest) -> AppResult<Guest> {
        let room_number = new_guest.room_number;

        self.uow
            .transaction(move |ctx| {
                Box::pin(async move {
                    if !ctx.rooms().lock(room_number).await? {
                        return Err(AppError::NotFound(Resource::Room));
                    }

                    let occupancy = ctx.guests().count_by_room(room_number).await?;
                    if occupancy >= ROOM_CAPACITY {
                        tracing::warn!(room_number, occupancy, "Rejected guest: room is full");
                        return Err(AppError::CapacityExceeded);
                    }

                    ctx.guests().create(new_guest).await
                })
            })
            .await
    }
}

#[async_trait]
impl<U: UnitOfWork> GuestService for GuestManager<U> {
    async fn add_guest(&self, input: GuestInput, room_number: i32) -> AppResult<GuestView> {
        let new_guest = NewGuest::admit(input, room_number, Local::now().date_naive());

        let mut attempt = 1;
        loop {
            let conflict = match self.admit(new_guest.clone()).await {
                Ok(guest) => {
                    tracing::info!(guest_id = guest.id, room_number, "Guest admitted");
                    return Ok(GuestView::from(guest));
                }
                Err(AppError::Database(e)) if is_write_conflict(&e) => e,
                Err(e) => return Err(e),
            };

            // Another admission committed first; judge against the settled count
            let occupancy = self.uow.guests().count_by_room(room_number).await?;
            if occupancy >= ROOM_CAPACITY {
                tracing::warn!(room_number, occupancy, "Rejected guest: room is full");
                return Err(AppError::CapacityExceeded);
            }

            if attempt >= ADMISSION_MAX_ATTEMPTS {
                tracing::error!(room_number, attempt, "Guest admission kept conflicting");
                return Err(AppError::Database(conflict));
            }

            tracing::debug!(room_number, attempt, "Guest admission conflicted, retrying");
            tokio::time::sleep(Duration::from_millis(
                ADMISSION_RETRY_BACKOFF_MS * u64::from(attempt),
            ))
            .await;
            attempt += 1;
        }
    }

    async fn get_all_guests(&self) -> AppResult<Vec<GuestView>> {
        let guests = self.uow.guests().find_all().await?;
        Ok(guests.iter().map(GuestView::from).collect())
    }

    async fn get_guests_by_room(&self, room_number: i32) -> AppResult<Vec<GuestView>> {
        let room = self
            .uow
            .rooms()
            .find_by_number(room_number)
            .await?
            .ok_or_not_found(Resource::Room)?;

        Ok(room.guests.iter().map(GuestView::from).collect())
    }

    async fn get_guest_by_id(&self, id: i32) -> AppResult<GuestView> {
        self.uow
            .guests()
            .find_by_id(id)
            .await?
            .map(GuestView::from)
            .ok_or_not_found(Resource::Guest)
    }

    async fn update_guest(&self, _input: GuestInput, id: i32) -> AppResult<GuestView> {
        // TODO: apply the supplied contact fields once edit semantics are agreed
        tracing::debug!(guest_id = id, "Guest update requested; fields left unchanged");
        self.get_guest_by_id(id).await
    }

    async fn delete_guest(&self, id: i32) -> AppResult<String> {
        self.uow
            .guests()
            .find_by_id(id)
            .await?
            .ok_or_not_found(Resource::Guest)?;

        self.uow.guests().delete_by_id(id).await?;

        tracing::info!(guest_id = id, "Guest deleted");
        Ok(format!("Guest with id : {} deleted successfully.", id))
    }

    async fn get_available_rooms(&self) -> AppResult<Vec<RoomView>> {
        let rooms = self.uow.rooms().find_available().await?;
        Ok(rooms.iter().map(RoomView::from).collect())
    }

    async fn update_payment_status(
        &self,
        id: i32,
        month: String,
        status: String,
    ) -> AppResult<GuestView> {
        let mut guest = self
            .uow
            .guests()
            .find_by_id(id)
            .await?
            .ok_or_not_found(Resource::Guest)?;

        tracing::debug!(guest_id = id, month = %month, status = %status, "Updating payment status");
        guest.update_payment_status(status);

        let saved = self.uow.guests().update(guest).await?;
        Ok(GuestView::from(saved))
    }

    async fn get_dashboard_stats(&self) -> AppResult<Vec<GuestView>> {
        self.get_all_guests().await
    }
}
