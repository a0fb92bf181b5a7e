use crate::modules::rosters::core::roster::Roster;
use std::collections::{BTreeMap, BTreeSet};

/// Students seen so far, grouped by course. A course only gets an entry once
/// a registration for it has been folded in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RosterState {
    pub courses: BTreeMap<String, BTreeSet<String>>,
}

impl RosterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Materializes each course's set as an ascending, duplicate-free list.
    pub fn into_roster(self) -> Roster {
        self.courses
            .into_iter()
            .map(|(course_id, students)| (course_id, students.into_iter().collect()))
            .collect()
    }
}
