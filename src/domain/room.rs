//! Room domain entity.

use super::Guest;
use crate::config::ROOM_CAPACITY;

/// Fixed-capacity lodging unit keyed by an externally assigned number.
///
/// A room owns its guests: removing the room removes them too.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub room_number: i32,
    pub guests: Vec<Guest>,
}

impl Room {
    /// Create an empty room
    pub fn new(room_number: i32) -> Self {
        Self {
            room_number,
            guests: Vec::new(),
        }
    }

    /// Number of guests currently assigned
    pub fn occupancy(&self) -> u64 {
        self.guests.len() as u64
    }

    /// True while another guest can still be admitted
    pub fn has_vacancy(&self) -> bool {
        self.occupancy() < ROOM_CAPACITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guest(id: i32, room_number: i32) -> Guest {
        Guest {
            id,
            name: None,
            email: None,
            phone: None,
            admit_date: None,
            payment_status: "pending".to_string(),
            room_number: Some(room_number),
        }
    }

    #[test]
    fn test_vacancy_tracks_capacity() {
        let mut room = Room::new(101);
        assert!(room.has_vacancy());

        room.guests.push(guest(1, 101));
        assert!(room.has_vacancy());

        room.guests.push(guest(2, 101));
        assert_eq!(room.occupancy(), 2);
        assert!(!room.has_vacancy());
    }
}
