//! Phase 3: room assignment.
//!
//! Each section gets the smallest-capacity feasible room: capacity at
//! least the section's nominal capacity, feature set covering the
//! course's requirements, and free at every section period. Taking the
//! smallest viable room first preserves the large rooms for the larger
//! sections that come later.
//!
//! A section with no feasible room keeps `room_id = None`; downstream
//! validation classifies it.

use std::collections::{HashMap, HashSet};

use log::{debug, warn};

use crate::models::{Course, Period, Room, Section};

/// Assigns rooms to sections, in section order.
pub(crate) fn assign_rooms(sections: &mut [Section], courses: &[Course], rooms: &[Room]) {
    let course_by_id: HashMap<&str, &Course> =
        courses.iter().map(|c| (c.id.as_str(), c)).collect();

    let mut room_occupied: Vec<HashSet<Period>> = rooms
        .iter()
        .map(|r| r.unavailable.iter().copied().collect())
        .collect();

    for section in sections.iter_mut() {
        let required_features = course_by_id
            .get(section.course_id.as_str())
            .map(|c| c.required_features.as_slice())
            .unwrap_or(&[]);

        let mut candidates: Vec<usize> = rooms
            .iter()
            .enumerate()
            .filter(|(_, r)| r.capacity >= section.capacity && r.has_features(required_features))
            .map(|(idx, _)| idx)
            .collect();
        // Stable: equal capacities stay in input order
        candidates.sort_by_key(|&idx| rooms[idx].capacity);

        let chosen = candidates.into_iter().find(|&idx| {
            section
                .periods
                .iter()
                .all(|p| !room_occupied[idx].contains(p))
        });

        match chosen {
            Some(idx) => {
                debug!("Section {} takes room {}", section.id, rooms[idx].id);
                section.room_id = Some(rooms[idx].id.clone());
                room_occupied[idx].extend(section.periods.iter().copied());
            }
            None => {
                warn!("Section {} has no feasible room", section.id);
            }
        }
    }
}
