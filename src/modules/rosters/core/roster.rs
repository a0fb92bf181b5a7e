// Read model: course_id -> ascending, duplicate-free student ids.
//
// Courses are kept in ascending order too, so iteration and the serialized
// form are deterministic.

use std::collections::BTreeMap;
use std::collections::btree_map;

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Roster {
    courses: BTreeMap<String, Vec<String>>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn students(&self, course_id: &str) -> Option<&[String]> {
        self.courses.get(course_id).map(Vec::as_slice)
    }

    pub fn courses(&self) -> impl Iterator<Item = &str> {
        self.courses.keys().map(String::as_str)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, Vec<String>> {
        self.courses.iter()
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    pub fn into_inner(self) -> BTreeMap<String, Vec<String>> {
        self.courses
    }
}

impl FromIterator<(String, Vec<String>)> for Roster {
    fn from_iter<T: IntoIterator<Item = (String, Vec<String>)>>(iter: T) -> Self {
        Self {
            courses: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = (&'a String, &'a Vec<String>);
    type IntoIter = btree_map::Iter<'a, String, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
