//! In-memory mailing list for launch-interest signups.

use chrono::{DateTime, Utc};
use std::sync::Mutex;

/// One collected signup.
#[derive(Debug, Clone)]
pub struct CollectedEmail {
    pub email: String,
    pub collected_at: DateTime<Utc>,
}

/// Deduplicated list of signup emails, in insertion order.
pub struct MailingList {
    entries: Mutex<Vec<CollectedEmail>>,
}

impl MailingList {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
        }
    }

    /// Record an email. Returns false when the address is empty or already
    /// on the list.
    pub fn add(&self, email: &str) -> bool {
        if email.is_empty() {
            return false;
        }
        let mut entries = self.entries.lock().unwrap();
        if entries.iter().any(|entry| entry.email == email) {
            return false;
        }
        entries.push(CollectedEmail {
            email: email.to_string(),
            collected_at: Utc::now(),
        });
        true
    }

    /// All collected addresses, oldest first.
    pub fn emails(&self) -> Vec<String> {
        let entries = self.entries.lock().unwrap();
        entries.iter().map(|entry| entry.email.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for MailingList {
    fn default() -> Self {
        Self::new()
    }
}
