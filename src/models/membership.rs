use crate::models::lunar_feature::{ClubCode, ObservingType};
use crate::utils::constants::DEFAULT_OBSERVING_CODE;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MembershipEntry {
    pub name: String,
    pub club: ClubCode,
    /// Raw observing-type code; absent in the file means `DEFAULT_OBSERVING_CODE`
    pub observing_code: i64,
}

impl MembershipEntry {
    pub fn new(name: String, club: ClubCode, observing_code: Option<i64>) -> Self {
        Self {
            name,
            club,
            observing_code: observing_code.unwrap_or(DEFAULT_OBSERVING_CODE),
        }
    }

    pub fn observing_type(&self) -> Option<ObservingType> {
        ObservingType::from_code(self.observing_code)
    }
}

/// Club features keyed by clean name. A later entry for a name replaces an earlier one.
#[derive(Debug, Clone, Default)]
pub struct Membership {
    entries: HashMap<String, MembershipEntry>,
}

impl Membership {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, entry: MembershipEntry) -> Option<MembershipEntry> {
        self.entries.insert(entry.name.clone(), entry)
    }

    pub fn get(&self, name: &str) -> Option<&MembershipEntry> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl FromIterator<MembershipEntry> for Membership {
    fn from_iter<I: IntoIterator<Item = MembershipEntry>>(iter: I) -> Self {
        let mut membership = Membership::new();
        for entry in iter {
            membership.insert(entry);
        }
        membership
    }
}
