// active-chat-core/active-chat-core-client
//
// Copyright: 2025, Active Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;
use async_trait::async_trait;
use parking_lot::Mutex;
use tempfile::NamedTempFile;

use crate::domain::account::models::Identity;
use crate::domain::account::repos::IdentityRepository;

/// Identity storage backed by a JSON file, the desktop equivalent of the web
/// prototype's `localStorage` slot. Writes go through a temp file in the
/// same directory so a crash cannot leave a half-written identity behind.
pub struct FsIdentityRepository {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FsIdentityRepository {
    pub fn new(path: impl AsRef<Path>) -> Self {
        FsIdentityRepository {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    fn load(&self) -> Result<Option<Identity>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        Ok(Some(serde_json::from_reader(BufReader::new(file))?))
    }

    fn save(&self, identity: &Identity) -> Result<()> {
        let directory = self.path.parent().unwrap_or_else(|| Path::new("."));
        std::fs::create_dir_all(directory)?;

        let temp_file = NamedTempFile::new_in(directory)?;
        {
            let mut writer = BufWriter::new(&temp_file);
            serde_json::to_writer_pretty(&mut writer, identity)?;
            writer.flush()?;
        }
        temp_file.persist(&self.path)?;
        Ok(())
    }
}

#[async_trait]
impl IdentityRepository for FsIdentityRepository {
    async fn get(&self) -> Result<Option<Identity>> {
        let _guard = self.lock.lock();
        self.load()
    }

    async fn set(&self, identity: &Identity) -> Result<()> {
        let _guard = self.lock.lock();
        self.save(identity)
    }

    async fn clear(&self) -> Result<()> {
        let _guard = self.lock.lock();
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::domain::shared::models::UserId;

    use super::*;

    #[tokio::test]
    async fn test_round_trips_identity() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let repo = FsIdentityRepository::new(dir.path().join("identity.json"));

        assert_eq!(repo.get().await?, None);

        let identity = Identity::Anonymous {
            id: UserId::from("b7c0a2d4"),
            name: "Jane".to_string(),
        };
        repo.set(&identity).await?;
        assert_eq!(repo.get().await?, Some(identity));

        repo.clear().await?;
        assert_eq!(repo.get().await?, None);

        // Clearing an already-empty slot is fine.
        repo.clear().await?;
        Ok(())
    }
}
