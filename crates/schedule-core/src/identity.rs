use crate::entry::RawEntry;
use std::collections::{HashMap, HashSet};

pub const SLUG_MAX_LEN: usize = 30;

/// Lowercases, collapses every run of characters outside `[a-z0-9]` into one
/// hyphen, trims a leading/trailing hyphen and truncates to [`SLUG_MAX_LEN`].
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_hyphen = false;
    for ch in input.to_lowercase().chars() {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch);
        } else {
            pending_hyphen = true;
        }
    }
    // Slug is pure ASCII, so byte truncation is safe.
    slug.truncate(SLUG_MAX_LEN);
    slug
}

/// Hands out ids that are unique within one ingestion call. Dropped with the
/// call; nothing is remembered across batches.
#[derive(Debug, Default)]
pub struct IdAssigner {
    seen: HashMap<String, usize>,
    issued: HashSet<String>,
}

impl IdAssigner {
    pub fn new() -> Self {
        Self::default()
    }

    /// `{date}-{start}-{sport slug}-{event slug}`, built from the raw start
    /// string rather than the parsed minutes.
    pub fn base_key(raw: &RawEntry) -> String {
        format!(
            "{}-{}-{}-{}",
            raw.date,
            raw.start,
            slugify(&raw.sport),
            slugify(&raw.event)
        )
    }

    /// First occurrence of a base key gets the bare key, the n-th repeat gets
    /// `{key}-{n}`. A suffixed id can coincide with another record's bare
    /// key, so a candidate that was already handed out bumps the suffix.
    pub fn assign(&mut self, raw: &RawEntry) -> String {
        let base = Self::base_key(raw);
        let count = self.seen.entry(base.clone()).or_insert(0);
        let mut id = Self::candidate(&base, *count);
        while self.issued.contains(&id) {
            *count += 1;
            id = Self::candidate(&base, *count);
        }
        *count += 1;
        self.issued.insert(id.clone());
        id
    }

    fn candidate(base: &str, prior: usize) -> String {
        if prior == 0 {
            base.to_string()
        } else {
            format!("{base}-{prior}")
        }
    }
}
