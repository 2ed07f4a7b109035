/// Process-wide cache of the subforum tree
///
/// The tree is read from a JSON file of subforum rows and served to every
/// request as a shared `Arc`. After `refresh` has elapsed the next request
/// reloads the file under the write lock and swaps the `Arc`; readers holding
/// the old tree keep it until they finish.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Context};
use hearth_forums::{SubforumRow, SubforumTree};
use tokio::sync::RwLock;
use tracing::{error, info};

use crate::AppError;

#[derive(Debug)]
pub struct ForumsCache {
    source: Option<PathBuf>,
    refresh: Duration,
    slot: RwLock<Slot>,
}

#[derive(Debug, Default)]
struct Slot {
    tree: Option<Arc<SubforumTree>>,
    loaded_at: Option<Instant>,
}

impl ForumsCache {
    /// Cache backed by a rows file, loaded on first use
    pub fn from_file(path: impl Into<PathBuf>, refresh: Duration) -> Self {
        ForumsCache {
            source: Some(path.into()),
            refresh,
            slot: RwLock::new(Slot::default()),
        }
    }

    /// Cache holding a fixed tree that is never reloaded
    pub fn from_tree(tree: SubforumTree) -> Self {
        ForumsCache {
            source: None,
            refresh: Duration::MAX,
            slot: RwLock::new(Slot {
                tree: Some(Arc::new(tree)),
                loaded_at: Some(Instant::now()),
            }),
        }
    }

    /// The current tree, reloading it first when stale
    ///
    /// A failed reload keeps serving the previous tree. With no tree at all
    /// every forum request fails until the next reload succeeds.
    pub async fn tree(&self) -> Result<Arc<SubforumTree>, AppError> {
        {
            let slot = self.slot.read().await;
            if !self.is_stale(&slot) {
                return current(&slot);
            }
        }

        let mut slot = self.slot.write().await;
        if self.is_stale(&slot) {
            if let Some(path) = &self.source {
                match load_tree(path).await {
                    Ok(tree) => {
                        info!("Loaded {} subforums from {:?}", tree.len(), path);
                        slot.tree = Some(Arc::new(tree));
                    }
                    Err(err) => error!("Subforum tree not reloaded: {:#}", err),
                }
            }
            slot.loaded_at = Some(Instant::now());
        }
        current(&slot)
    }

    fn is_stale(&self, slot: &Slot) -> bool {
        match (&self.source, slot.loaded_at) {
            (None, _) => false,
            (Some(_), None) => true,
            (Some(_), Some(at)) => at.elapsed() >= self.refresh,
        }
    }
}

fn current(slot: &Slot) -> Result<Arc<SubforumTree>, AppError> {
    slot.tree
        .clone()
        .ok_or_else(|| AppError::Internal(anyhow!("subforum tree unavailable")))
}

/// Reads rows, puts them in sibling order and builds the tree
pub async fn load_tree(path: &Path) -> anyhow::Result<SubforumTree> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read subforums file: {:?}", path))?;

    let mut rows: Vec<SubforumRow> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse subforums file: {:?}", path))?;
    SubforumRow::sort_canonical(&mut rows);

    SubforumTree::build(rows).with_context(|| format!("Invalid subforum rows in {:?}", path))
}
