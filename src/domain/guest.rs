//! Guest domain entity and related types.

use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::config::DEFAULT_PAYMENT_STATUS;

/// Resident record bound to exactly one room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guest {
    pub id: i32,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Set once on admission
    pub admit_date: Option<NaiveDate>,
    pub payment_status: String,
    /// Back-reference to the owning room
    pub room_number: Option<i32>,
}

impl Guest {
    /// Overwrite the current payment status
    pub fn update_payment_status(&mut self, status: impl Into<String>) {
        self.payment_status = status.into();
    }
}

/// Guest request body.
///
/// Only the contact fields and an optional initial payment status are
/// read; anything else in the body is ignored.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GuestInput {
    #[schema(example = "Asha Rao")]
    pub name: Option<String>,
    #[schema(example = "asha@example.com")]
    pub email: Option<String>,
    #[schema(example = "9876543210")]
    pub phone: Option<String>,
    /// Defaults to "pending" when absent
    #[schema(example = "pending")]
    pub payment_status: Option<String>,
}

/// A guest ready to be inserted, already bound to a room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGuest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub admit_date: NaiveDate,
    pub payment_status: String,
    pub room_number: i32,
}

impl NewGuest {
    /// Admit a guest into `room_number` on `admit_date`.
    pub fn admit(input: GuestInput, room_number: i32, admit_date: NaiveDate) -> Self {
        Self {
            name: input.name,
            email: input.email,
            phone: input.phone,
            admit_date,
            payment_status: input
                .payment_status
                .unwrap_or_else(|| DEFAULT_PAYMENT_STATUS.to_string()),
            room_number,
        }
    }
}
