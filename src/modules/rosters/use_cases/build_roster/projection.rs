use crate::modules::rosters::core::evolve::evolve;
use crate::modules::rosters::core::registration::Registration;
use crate::modules::rosters::core::roster::Roster;
use crate::modules::rosters::core::state::RosterState;

/// Builds the roster for a sequence of registrations.
///
/// Each course in the result lists its students once, in ascending byte
/// order. Identifiers are compared case-sensitively and never validated.
/// Inputs holding the same distinct pairs yield the same roster regardless
/// of order or repeats; an empty input yields an empty roster.
pub fn build_roster<I, R>(registrations: I) -> Roster
where
    I: IntoIterator<Item = R>,
    R: Into<Registration>,
{
    let mut seen = 0usize;
    let state = registrations
        .into_iter()
        .map(Into::into)
        .inspect(|_| seen += 1)
        .fold(RosterState::new(), evolve);
    let roster = state.into_roster();
    tracing::debug!(
        registrations = seen,
        courses = roster.len(),
        "built course roster"
    );
    roster
}
