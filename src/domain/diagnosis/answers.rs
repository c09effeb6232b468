//! AnswerSet - one respondent's Likert answers keyed by question id.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::{Likert, ValidationError};

/// Answers of one respondent. May be partial; unanswered questions are
/// simply absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet(BTreeMap<String, Likert>);

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records (or replaces) the answer to a question.
    pub fn insert(&mut self, question_id: impl Into<String>, value: Likert) {
        self.0.insert(question_id.into(), value);
    }

    /// Builder-style variant of [`AnswerSet::insert`].
    pub fn with(mut self, question_id: impl Into<String>, value: Likert) -> Self {
        self.insert(question_id, value);
        self
    }

    /// Records an answer given as a raw integer, rejecting values outside 1-5.
    pub fn insert_raw(
        &mut self,
        question_id: impl Into<String>,
        value: u8,
    ) -> Result<(), ValidationError> {
        let question_id = question_id.into();
        if question_id.trim().is_empty() {
            return Err(ValidationError::empty_field("question_id"));
        }
        let likert = Likert::try_from_u8(value)?;
        self.0.insert(question_id, likert);
        Ok(())
    }

    pub fn get(&self, question_id: &str) -> Option<Likert> {
        self.0.get(question_id).copied()
    }

    /// Merges `other` into this set; answers in `other` win.
    pub fn merge(&mut self, other: AnswerSet) {
        self.0.extend(other.0);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Likert)> {
        self.0.iter().map(|(id, v)| (id.as_str(), *v))
    }
}

impl<K: Into<String>> FromIterator<(K, Likert)> for AnswerSet {
    fn from_iter<T: IntoIterator<Item = (K, Likert)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}
