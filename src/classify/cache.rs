//! Process-wide memoisation of layout-trait answers.
//!
//! Records are keyed by `TypeId` and hold each trait independently, filled
//! on first query. Lookups take the read lock; a miss computes outside any
//! lock, then re-checks under the write lock before inserting. Two threads
//! racing on the same type may both compute, but only one answer is stored.

use core::any::TypeId;
use std::collections::HashMap;
use std::sync::OnceLock;

use parking_lot::RwLock;

use super::{Classifier, TypeTrait};
use crate::layout::TypeDescriptor;

/// Memoised answers for one type. `None` means not yet asked.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TraitRecord {
    pub reference_free: Option<bool>,
    pub bitwise_equatable: Option<bool>,
}

impl TraitRecord {
    pub fn get(&self, query: TypeTrait) -> Option<bool> {
        match query {
            TypeTrait::ReferenceFree => self.reference_free,
            TypeTrait::BitwiseEquatable => self.bitwise_equatable,
        }
    }

    fn slot(&mut self, query: TypeTrait) -> &mut Option<bool> {
        match query {
            TypeTrait::ReferenceFree => &mut self.reference_free,
            TypeTrait::BitwiseEquatable => &mut self.bitwise_equatable,
        }
    }
}

/// Thread-safe trait cache. Entries are never invalidated.
#[derive(Debug, Default)]
pub struct TraitCache {
    records: RwLock<HashMap<TypeId, TraitRecord>>,
}

static GLOBAL: OnceLock<TraitCache> = OnceLock::new();

impl TraitCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide cache. Created on first use, never torn down.
    pub fn global() -> &'static TraitCache {
        GLOBAL.get_or_init(TraitCache::new)
    }

    /// Snapshot of the record for `ty`, if any query has reached it.
    pub fn record(&self, ty: &TypeDescriptor) -> Option<TraitRecord> {
        self.records.read().get(&ty.type_id()).copied()
    }

    /// Number of types with a record.
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    fn memoize(&self, ty: &'static TypeDescriptor, query: TypeTrait) -> bool {
        let id = ty.type_id();

        if let Some(answer) = self.records.read().get(&id).and_then(|r| r.get(query)) {
            return answer;
        }

        let computed = query.evaluate(ty);

        let mut records = self.records.write();
        let is_new = !records.contains_key(&id);
        let slot = records.entry(id).or_default().slot(query);
        let answer = *slot.get_or_insert(computed);
        drop(records);

        if is_new {
            tracing::debug!(ty = ty.name(), ?query, answer, "trait cache: new type");
        }
        answer
    }
}

impl Classifier for TraitCache {
    fn classify(&self, ty: &'static TypeDescriptor, query: TypeTrait) -> bool {
        self.memoize(ty, query)
    }
}
