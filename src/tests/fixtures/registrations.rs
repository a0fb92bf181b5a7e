// Shared registration fixtures for unit tests.

use rstest::fixture;

#[fixture]
pub fn sample_pairs() -> Vec<(&'static str, &'static str)> {
    vec![
        ("s1", "CS101"),
        ("s2", "CS101"),
        ("s1", "MATH200"),
        ("s1", "CS101"),
    ]
}
