use chrono::{Local, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use tracing::info;

use crate::error::{Result, StoreError};

/// Child name -> that child's words.
pub type UserRecord = BTreeMap<String, ChildRecord>;

/// Words in the order they were added.
pub type ChildRecord = Vec<WordEntry>;

pub const MAX_CONFIDENCE: u8 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    pub word: String,
    /// Date the child first used the word, stored as `YYYY-MM-DD`.
    pub added_on: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speaks: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asl: Option<bool>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "clamped_confidence"
    )]
    pub confidence: Option<u8>,
}

/// Out-of-range confidences from a hand-edited file are clamped to `0..=100`
/// rather than failing the whole document.
fn clamped_confidence<'de, D>(deserializer: D) -> std::result::Result<Option<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<i64>::deserialize(deserializer)?;
    Ok(raw.map(|c| c.clamp(0, i64::from(MAX_CONFIDENCE)) as u8))
}

impl WordEntry {
    /// A word first used today.
    pub fn new(word: impl Into<String>) -> Self {
        Self::dated(word, today())
    }

    pub fn dated(word: impl Into<String>, added_on: NaiveDate) -> Self {
        WordEntry {
            word: word.into(),
            added_on,
            speaks: None,
            asl: None,
            confidence: None,
        }
    }

    pub fn with_modes(mut self, speaks: bool, asl: bool) -> Self {
        self.speaks = Some(speaks);
        self.asl = Some(asl);
        self
    }

    /// Values above 100 are clamped.
    pub fn with_confidence(mut self, confidence: u8) -> Self {
        self.confidence = Some(confidence.min(MAX_CONFIDENCE));
        self
    }

    pub fn speaks(&self) -> bool {
        self.speaks.unwrap_or(false)
    }

    pub fn asl(&self) -> bool {
        self.asl.unwrap_or(false)
    }

    /// "Speaks, ASL", or "Not specified" when neither is set.
    pub fn modes_label(&self) -> String {
        let mut modes = Vec::new();
        if self.speaks() {
            modes.push("Speaks");
        }
        if self.asl() {
            modes.push("ASL");
        }
        if modes.is_empty() {
            "Not specified".to_string()
        } else {
            modes.join(", ")
        }
    }
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Every registered user, their children and each child's words.
///
/// Serialized as `{ user: { child: [ WordEntry, ... ] } }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VocabularyStore {
    users: BTreeMap<String, UserRecord>,
}

impl VocabularyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn users(&self) -> impl Iterator<Item = &str> {
        self.users.keys().map(String::as_str)
    }

    /// Child names for `user`, sorted. Empty for unknown users.
    pub fn children(&self, user: &str) -> Vec<String> {
        self.users
            .get(user)
            .map(|record| record.keys().cloned().collect())
            .unwrap_or_default()
    }

    pub fn words(&self, user: &str, child: &str) -> Option<&[WordEntry]> {
        self.users
            .get(user)
            .and_then(|record| record.get(child))
            .map(Vec::as_slice)
    }

    /// Make sure `name` has a record. Returns the trimmed name.
    pub fn register_user(&mut self, name: &str) -> Result<String> {
        let name = non_empty(name, StoreError::EmptyName)?;
        if !self.users.contains_key(name) {
            info!(user = name, "registered user");
            self.users.insert(name.to_string(), UserRecord::new());
        }
        Ok(name.to_string())
    }

    /// Insert an empty word list for `child`, creating the user if needed.
    ///
    /// Returns `false` without touching the store when the child already exists.
    pub fn add_child(&mut self, user: &str, child: &str) -> Result<bool> {
        let user = non_empty(user, StoreError::EmptyName)?;
        let child = non_empty(child, StoreError::EmptyName)?;
        let record = self.users.entry(user.to_string()).or_default();
        if record.contains_key(child) {
            return Ok(false);
        }
        record.insert(child.to_string(), ChildRecord::new());
        info!(user, child, "added child");
        Ok(true)
    }

    /// Delete `child` and every word recorded for it.
    pub fn remove_child(&mut self, user: &str, child: &str) -> Result<ChildRecord> {
        let user = non_empty(user, StoreError::EmptyName)?;
        let child = non_empty(child, StoreError::EmptyName)?;
        let record = self
            .users
            .get_mut(user)
            .ok_or_else(|| StoreError::UnknownUser(user.to_string()))?;
        let words = record
            .remove(child)
            .ok_or_else(|| StoreError::unknown_child(user, child))?;
        info!(user, child, words = words.len(), "removed child");
        Ok(words)
    }

    /// Append `word`, dated today, to the end of the child's list.
    pub fn add_word(&mut self, user: &str, child: &str, word: &str) -> Result<()> {
        self.add_entry(user, child, WordEntry::new(word))
    }

    pub fn add_entry(&mut self, user: &str, child: &str, mut entry: WordEntry) -> Result<()> {
        entry.word = non_empty(&entry.word, StoreError::EmptyWord)?.to_string();
        let words = self.child_mut(user, child)?;
        info!(user, child, word = %entry.word, "added word");
        words.push(entry);
        Ok(())
    }

    /// Replace the entry at `index`, returning the previous one.
    pub fn update_word(
        &mut self,
        user: &str,
        child: &str,
        index: usize,
        mut entry: WordEntry,
    ) -> Result<WordEntry> {
        entry.word = non_empty(&entry.word, StoreError::EmptyWord)?.to_string();
        let words = self.child_mut(user, child)?;
        let len = words.len();
        let slot = words
            .get_mut(index)
            .ok_or(StoreError::WordIndexOutOfRange { index, len })?;
        info!(user, child, index, word = %entry.word, "updated word");
        Ok(std::mem::replace(slot, entry))
    }

    /// Delete the entry at `index`. Out-of-range indices are an error and change nothing.
    pub fn remove_word(&mut self, user: &str, child: &str, index: usize) -> Result<WordEntry> {
        let words = self.child_mut(user, child)?;
        if index >= words.len() {
            return Err(StoreError::WordIndexOutOfRange {
                index,
                len: words.len(),
            });
        }
        let removed = words.remove(index);
        info!(user, child, index, word = %removed.word, "removed word");
        Ok(removed)
    }

    fn child_mut(&mut self, user: &str, child: &str) -> Result<&mut ChildRecord> {
        let user = non_empty(user, StoreError::EmptyName)?;
        let child = non_empty(child, StoreError::EmptyName)?;
        self.users
            .get_mut(user)
            .ok_or_else(|| StoreError::UnknownUser(user.to_string()))?
            .get_mut(child)
            .ok_or_else(|| StoreError::unknown_child(user, child))
    }
}

fn non_empty(value: &str, err: StoreError) -> Result<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(err)
    } else {
        Ok(trimmed)
    }
}
