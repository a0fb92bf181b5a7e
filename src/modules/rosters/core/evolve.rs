use crate::modules::rosters::core::registration::Registration;
use crate::modules::rosters::core::state::RosterState;

pub fn evolve(mut state: RosterState, registration: Registration) -> RosterState {
    state
        .courses
        .entry(registration.course_id)
        .or_default()
        .insert(registration.student_id);
    state
}
