// Decode registrations from JSON text.
//
// Elements may be `["student", "course"]` pairs or
// `{"student_id": ..., "course_id": ...}` objects. Anything else rejects the
// whole document; values are never coerced to strings.

use crate::modules::rosters::core::registration::Registration;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InboundError {
    #[error("malformed registrations: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RegistrationDto {
    Pair(String, String),
    Record { student_id: String, course_id: String },
}

impl From<RegistrationDto> for Registration {
    fn from(dto: RegistrationDto) -> Self {
        match dto {
            RegistrationDto::Pair(student_id, course_id) => Registration::new(student_id, course_id),
            RegistrationDto::Record {
                student_id,
                course_id,
            } => Registration::new(student_id, course_id),
        }
    }
}

pub fn parse_registrations(json: &str) -> Result<Vec<Registration>, InboundError> {
    let dtos: Vec<RegistrationDto> = serde_json::from_str(json)?;
    tracing::debug!(count = dtos.len(), "decoded registrations");
    Ok(dtos.into_iter().map(Into::into).collect())
}

#[cfg(test)]
mod rosters_json_inbound_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_decode_pairs_and_records() {
        let registrations = parse_registrations(
            r#"[["s1", "CS101"], {"student_id": "s2", "course_id": "MATH200"}]"#,
        )
        .unwrap();
        assert_eq!(
            registrations,
            vec![
                Registration::new("s1", "CS101"),
                Registration::new("s2", "MATH200"),
            ]
        );
    }

    #[rstest]
    fn it_should_decode_an_empty_array() {
        assert!(parse_registrations("[]").unwrap().is_empty());
    }

    #[rstest]
    #[case::number_student(r#"[[1, "CS101"]]"#)]
    #[case::null_course(r#"[["s1", null]]"#)]
    #[case::single_element(r#"[["s1"]]"#)]
    #[case::three_elements(r#"[["s1", "CS101", "x"]]"#)]
    #[case::missing_field(r#"[{"student_id": "s1"}]"#)]
    #[case::bare_string(r#"["s1"]"#)]
    #[case::not_an_array(r#"{"s1": "CS101"}"#)]
    #[case::truncated(r#"[["s1", "CS101"]"#)]
    fn it_should_reject_malformed_input(#[case] json: &str) {
        let result = parse_registrations(json);
        assert!(matches!(result, Err(InboundError::Malformed(_))));
    }

    #[rstest]
    fn it_should_describe_the_rejection() {
        let err = parse_registrations("[[1, 2]]").unwrap_err();
        assert!(err.to_string().starts_with("malformed registrations: "));
    }
}
