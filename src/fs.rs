use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

/// An object that can be used to get and put blobs.
#[async_trait]
pub trait BlobStorageProvider: Sync {
    async fn maybe_get(&self, blob_name: &str) -> Result<Option<Vec<u8>>, std::io::Error>;
    async fn put(&self, blob_name: &str, contents: Vec<u8>) -> Result<Vec<u8>, std::io::Error>;
}

/// A [`BlobStorageProvider`] for local disk
pub struct LocalDisk;

#[async_trait]
impl BlobStorageProvider for LocalDisk {
    async fn maybe_get(&self, blob_name: &str) -> Result<Option<Vec<u8>>, std::io::Error> {
        if std::path::Path::new(blob_name).try_exists()? {
            Ok(Some(std::fs::read(blob_name)?))
        } else {
            Ok(None)
        }
    }

    async fn put(&self, blob_name: &str, contents: Vec<u8>) -> Result<Vec<u8>, std::io::Error> {
        let mut dir: std::path::PathBuf = blob_name.into();
        dir.pop();
        std::fs::create_dir_all(dir)?;
        std::fs::write(blob_name, &contents)?;
        log::debug!("{blob_name} - written");
        Ok(contents)
    }
}

/// A [`BlobStorageProvider`] held in memory, lost when dropped
#[derive(Default)]
pub struct InMemory {
    blobs: Mutex<HashMap<String, Vec<u8>>>,
}

impl InMemory {
    fn blobs(&self) -> Result<MutexGuard<'_, HashMap<String, Vec<u8>>>, std::io::Error> {
        self.blobs
            .lock()
            .map_err(|_| std::io::Error::other("in-memory storage poisoned"))
    }
}

#[async_trait]
impl BlobStorageProvider for InMemory {
    async fn maybe_get(&self, blob_name: &str) -> Result<Option<Vec<u8>>, std::io::Error> {
        Ok(self.blobs()?.get(blob_name).cloned())
    }

    async fn put(&self, blob_name: &str, contents: Vec<u8>) -> Result<Vec<u8>, std::io::Error> {
        self.blobs()?.insert(blob_name.to_string(), contents.clone());
        Ok(contents)
    }
}
