//! Domain values shared by the client, the reconciler and the projector.

use std::ops::Deref;

use serde::{Deserialize, Serialize};

/// The complete remote collection at a point in time.
///
/// Items have no identity beyond their position: every mutating call
/// replaces the collection wholesale, and the list kept after a call is
/// always the one the remote store returned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoList(Vec<String>);

impl TodoList {
    pub fn new(items: Vec<String>) -> Self {
        Self(items)
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl Deref for TodoList {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<String>> for TodoList {
    fn from(items: Vec<String>) -> Self {
        Self(items)
    }
}

impl<S: Into<String>> FromIterator<S> for TodoList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl IntoIterator for TodoList {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
