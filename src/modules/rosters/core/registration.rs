#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Registration {
    pub student_id: String,
    pub course_id: String,
}

impl Registration {
    pub fn new(student_id: impl Into<String>, course_id: impl Into<String>) -> Self {
        Self {
            student_id: student_id.into(),
            course_id: course_id.into(),
        }
    }
}

impl<S, C> From<(S, C)> for Registration
where
    S: Into<String>,
    C: Into<String>,
{
    fn from((student_id, course_id): (S, C)) -> Self {
        Self::new(student_id, course_id)
    }
}
