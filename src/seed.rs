// src/seed.rs
use crate::error::{BoxError, StoreError};
use crate::grape::Grape;
use log::{debug, info};

/// The minimal surface the database phase needs from a collection.
#[allow(async_fn_in_trait)]
pub trait GrapeStore {
    /// Name of the target collection, for diagnostics.
    fn collection_name(&self) -> &str;

    /// Deletes every document and returns how many were removed.
    async fn remove_all(&self) -> Result<u64, BoxError>;

    async fn insert(&self, grape: &Grape) -> Result<(), BoxError>;

    /// Releases the underlying connection.
    async fn close(self)
    where
        Self: Sized;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub removed: u64,
    pub inserted: usize,
}

/// Replaces the contents of the store with `grapes`.
///
/// Existing documents are removed first, then each grape is inserted in
/// order. The first failure aborts the run.
pub async fn replace_all<S: GrapeStore>(
    store: &S,
    grapes: &[Grape],
) -> Result<SeedSummary, StoreError> {
    let removed = store
        .remove_all()
        .await
        .map_err(|source| StoreError::Delete {
            collection: store.collection_name().to_string(),
            source,
        })?;
    info!(
        "Removed {} existing grapes from {}",
        removed,
        store.collection_name()
    );

    for (index, grape) in grapes.iter().enumerate() {
        store
            .insert(grape)
            .await
            .map_err(|source| StoreError::Insert {
                index,
                name: grape.name.clone(),
                source,
            })?;
        debug!("Inserted {}", grape.name);
    }
    info!(
        "Inserted {} grapes into {}",
        grapes.len(),
        store.collection_name()
    );

    Ok(SeedSummary {
        removed,
        inserted: grapes.len(),
    })
}

/// Runs [`replace_all`] and then closes the store, whatever the outcome.
pub async fn replace_and_close<S: GrapeStore>(
    store: S,
    grapes: &[Grape],
) -> Result<SeedSummary, StoreError> {
    let result = replace_all(&store, grapes).await;
    store.close().await;
    result
}
