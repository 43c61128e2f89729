//! Speaker roster and roster merging.

use crate::Person;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, instrument};

/// Mapping from speaker key to [`Person`].
///
/// Keys are the handles used in dialogue blocks (`[alice] |`) and mentions
/// (`@alice`). Entries are kept sorted by key.
///
/// # Examples
///
/// ```
/// use chatbox_core::{PeopleRoster, Person};
///
/// let mut roster = PeopleRoster::new();
/// roster.insert("alice", Person::new("Alice", "a.png"));
///
/// assert!(roster.contains("alice"));
/// assert_eq!(roster.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PeopleRoster(BTreeMap<String, Person>);

impl PeopleRoster {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a person, returning the entry it replaced.
    pub fn insert(&mut self, key: impl Into<String>, person: Person) -> Option<Person> {
        self.0.insert(key.into(), person)
    }

    /// Looks up a person by key.
    pub fn get(&self, key: &str) -> Option<&Person> {
        self.0.get(key)
    }

    /// Whether the roster has an entry for `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the roster is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Person)> {
        self.0.iter().map(|(key, person)| (key.as_str(), person))
    }

    /// Overlays `local` onto `base`.
    ///
    /// Every key in `local` replaces the whole record under the same key in
    /// `base`; keys only present in `base` are kept. Fields are never merged
    /// individually, so an override without an avatar has no avatar.
    ///
    /// # Examples
    ///
    /// ```
    /// use chatbox_core::{PeopleRoster, Person};
    ///
    /// let base: PeopleRoster = [("alice", Person::new("A", "a.png"))].into_iter().collect();
    /// let local: PeopleRoster = [
    ///     ("alice", Person::new("A2", "a2.png")),
    ///     ("bob", Person::new("B", "b.png")),
    /// ]
    /// .into_iter()
    /// .collect();
    ///
    /// let merged = PeopleRoster::merge(&base, &local);
    /// assert_eq!(merged.get("alice").unwrap().name().as_deref(), Some("A2"));
    /// assert!(merged.contains("bob"));
    /// ```
    #[instrument(skip_all, fields(base = base.len(), local = local.len()))]
    pub fn merge(base: &PeopleRoster, local: &PeopleRoster) -> PeopleRoster {
        let mut merged = base.clone();
        for (key, person) in local.iter() {
            if merged.insert(key, person.clone()).is_some() {
                debug!(key, "Document roster overrides base entry");
            }
        }
        merged
    }
}

impl<K: Into<String>> FromIterator<(K, Person)> for PeopleRoster {
    fn from_iter<I: IntoIterator<Item = (K, Person)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, person)| (key.into(), person))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_keeps_base_only_keys() {
        let base: PeopleRoster = [("carol", Person::new("C", "c.png"))].into_iter().collect();
        let local: PeopleRoster = [("bob", Person::new("B", "b.png"))].into_iter().collect();

        let merged = PeopleRoster::merge(&base, &local);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged.get("carol"), base.get("carol"));
    }

    #[test]
    fn test_merge_replaces_whole_record() {
        let base: PeopleRoster = [("alice", Person::new("A", "a.png"))].into_iter().collect();
        let partial = crate::PersonBuilder::default().name("A2").build().unwrap();
        let local: PeopleRoster = [("alice", partial)].into_iter().collect();

        let merged = PeopleRoster::merge(&base, &local);
        let alice = merged.get("alice").unwrap();
        assert_eq!(alice.name().as_deref(), Some("A2"));
        assert_eq!(alice.avatar(), &None);
    }

    #[test]
    fn test_merge_with_empty_sides() {
        let roster: PeopleRoster = [("alice", Person::new("A", "a.png"))].into_iter().collect();
        assert_eq!(PeopleRoster::merge(&roster, &PeopleRoster::new()), roster);
        assert_eq!(PeopleRoster::merge(&PeopleRoster::new(), &roster), roster);
    }
}
