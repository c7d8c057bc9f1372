//! Transport projections.
//!
//! Pure conversions from entities to the JSON shapes the API returns.
//! A room's nested guests carry `roomNumber: null` so the outer room is
//! never repeated inside itself.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{Guest, Room};

/// Guest as returned by the guest endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GuestView {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Asha Rao")]
    pub name: Option<String>,
    #[schema(example = "asha@example.com")]
    pub email: Option<String>,
    #[schema(example = "9876543210")]
    pub phone: Option<String>,
    /// Number of the linked room, null when unlinked
    #[schema(example = 101)]
    pub room_number: Option<i32>,
    /// ISO-8601 calendar date
    #[schema(example = "2024-03-01")]
    pub admit_date: Option<String>,
    #[schema(example = "pending")]
    pub payment_status: String,
}

impl From<&Guest> for GuestView {
    fn from(guest: &Guest) -> Self {
        Self {
            id: guest.id,
            name: guest.name.clone(),
            email: guest.email.clone(),
            phone: guest.phone.clone(),
            room_number: guest.room_number,
            admit_date: guest.admit_date.map(|date| date.to_string()),
            payment_status: guest.payment_status.clone(),
        }
    }
}

impl From<Guest> for GuestView {
    fn from(guest: Guest) -> Self {
        GuestView::from(&guest)
    }
}

/// Guest nested inside a [`RoomView`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GuestSummary {
    pub id: i32,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Always null
    pub room_number: Option<i32>,
}

impl From<&Guest> for GuestSummary {
    fn from(guest: &Guest) -> Self {
        Self {
            id: guest.id,
            name: guest.name.clone(),
            email: guest.email.clone(),
            phone: guest.phone.clone(),
            room_number: None,
        }
    }
}

/// Room with its current guests
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoomView {
    #[schema(example = 102)]
    pub room_number: i32,
    pub guests: Vec<GuestSummary>,
}

impl From<&Room> for RoomView {
    fn from(room: &Room) -> Self {
        Self {
            room_number: room.room_number,
            guests: room.guests.iter().map(GuestSummary::from).collect(),
        }
    }
}

impl From<Room> for RoomView {
    fn from(room: Room) -> Self {
        RoomView::from(&room)
    }
}
