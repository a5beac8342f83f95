use crate::domain::content::Content;
use crate::domain::content_definition::ContentDefinition;
use crate::domain::errors::{DomainError, DomainResult};
use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;
use tokio::sync::RwLock;

/// Documents that carry an optimistic-concurrency revision.
pub trait Revisioned {
    fn revision(&self) -> u64;
    fn set_revision(&mut self, revision: u64);
}

impl Revisioned for Content {
    fn revision(&self) -> u64 {
        self.revision
    }

    fn set_revision(&mut self, revision: u64) {
        self.revision = revision;
    }
}

impl Revisioned for ContentDefinition {
    fn revision(&self) -> u64 {
        self.revision
    }

    fn set_revision(&mut self, revision: u64) {
        self.revision = revision;
    }
}

/// Keyed document map with compare-and-swap writes. No lock is held while a
/// mutation runs; the write is refused if the revision moved meanwhile.
pub struct DocumentStore<K, V> {
    kind: &'static str,
    docs: RwLock<HashMap<K, V>>,
}

impl<K, V> DocumentStore<K, V>
where
    K: Eq + Hash + Copy + Display,
    V: Clone + Revisioned,
{
    pub fn new(kind: &'static str) -> Self {
        Self {
            kind,
            docs: RwLock::new(HashMap::new()),
        }
    }

    pub async fn insert(&self, key: K, mut doc: V) -> DomainResult<()> {
        let mut docs = self.docs.write().await;
        if docs.contains_key(&key) {
            return Err(DomainError::Conflict(format!(
                "{} {key} already exists",
                self.kind
            )));
        }
        doc.set_revision(0);
        docs.insert(key, doc);
        Ok(())
    }

    pub async fn get(&self, key: K) -> Option<V> {
        self.docs.read().await.get(&key).cloned()
    }

    pub async fn values(&self) -> Vec<V> {
        self.docs.read().await.values().cloned().collect()
    }

    /// Read, apply `mutation` outside the lock, then write back only if
    /// the stored revision is unchanged. Documents rejected by `visible`
    /// are reported as missing.
    pub async fn update<F>(
        &self,
        key: K,
        visible: impl Fn(&V) -> bool,
        mutation: F,
    ) -> DomainResult<V>
    where
        F: FnOnce(V) -> DomainResult<V>,
    {
        let loaded = self
            .get(key)
            .await
            .filter(|doc| visible(doc))
            .ok_or_else(|| DomainError::NotFound(format!("{} {key} not found", self.kind)))?;
        let expected = loaded.revision();

        let mut updated = mutation(loaded)?;

        let mut docs = self.docs.write().await;
        match docs.get(&key) {
            Some(current) if current.revision() == expected => {}
            _ => {
                return Err(DomainError::Conflict(format!(
                    "{} {key} update conflict, please retry",
                    self.kind
                )));
            }
        }
        updated.set_revision(expected + 1);
        docs.insert(key, updated.clone());
        Ok(updated)
    }
}
