// Composition root: the fixed sample the binary prints.

use crate::modules::rosters::core::registration::Registration;
use crate::modules::rosters::use_cases::build_roster::projection::build_roster;
use std::io::Write;

pub fn sample_registrations() -> Vec<Registration> {
    vec![
        Registration::new("s1", "CS101"),
        Registration::new("s2", "CS101"),
        Registration::new("s1", "MATH200"),
        // repeat of the first; appears once in the roster
        Registration::new("s1", "CS101"),
    ]
}

pub fn run(out: &mut impl Write) -> anyhow::Result<()> {
    let registrations = sample_registrations();
    tracing::info!(count = registrations.len(), "building sample roster");
    let roster = build_roster(registrations);
    serde_json::to_writer(&mut *out, &roster)?;
    writeln!(out)?;
    Ok(())
}
