//! Room model.
//!
//! Rooms have a seating capacity, a feature set (lab benches, gym floor,
//! kiln), and periods during which they cannot be booked.

use serde::{Deserialize, Serialize};

use super::{Period, RoomId};

/// A room that can host sections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    /// Unique room identifier.
    pub id: RoomId,
    /// Seating capacity.
    pub capacity: u32,
    /// Features this room provides.
    #[serde(default)]
    pub features: Vec<String>,
    /// Periods at which this room cannot be booked.
    #[serde(default)]
    pub unavailable: Vec<Period>,
}

impl Room {
    /// Creates a room.
    pub fn new(id: impl Into<RoomId>, capacity: u32) -> Self {
        Self {
            id: id.into(),
            capacity,
            features: Vec::new(),
            unavailable: Vec::new(),
        }
    }

    /// Adds a feature (repeatable).
    pub fn with_feature(mut self, feature: impl Into<String>) -> Self {
        self.features.push(feature.into());
        self
    }

    /// Marks a period as unavailable.
    pub fn with_unavailable(mut self, period: Period) -> Self {
        self.unavailable.push(period);
        self
    }

    /// Whether this room provides every required feature.
    pub fn has_features(&self, required: &[String]) -> bool {
        required.iter().all(|f| self.features.contains(f))
    }

    /// Whether this room cannot be booked at the given period.
    pub fn is_unavailable_at(&self, period: Period) -> bool {
        self.unavailable.contains(&period)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_builder() {
        let r = Room::new("R101", 30)
            .with_feature("lab")
            .with_unavailable(Period::new(0, 0));

        assert_eq!(r.id, "R101");
        assert_eq!(r.capacity, 30);
        assert_eq!(r.features, vec!["lab"]);
        assert!(r.is_unavailable_at(Period::new(0, 0)));
        assert!(!r.is_unavailable_at(Period::new(0, 1)));
    }

    #[test]
    fn test_has_features() {
        let r = Room::new("SCI1", 25).with_feature("lab").with_feature("sink");

        assert!(r.has_features(&[]));
        assert!(r.has_features(&["lab".to_string()]));
        assert!(r.has_features(&["lab".to_string(), "sink".to_string()]));
        assert!(!r.has_features(&["gym".to_string()]));
        assert!(!r.has_features(&["lab".to_string(), "gym".to_string()]));
    }
}
