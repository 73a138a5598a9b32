use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::{export::share::ExportFile, foundation::error::LoopedResult};

/// Directory that receives direct downloads.
#[derive(Clone, Debug)]
pub struct DownloadDir {
    dir: PathBuf,
}

impl DownloadDir {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path(&self) -> &Path {
        &self.dir
    }

    /// Write `file` into the directory and return its final path.
    ///
    /// Bytes go to a transient `.part` file that is renamed into place once complete; on any
    /// failure the transient file is removed, so no truncated download is ever left behind.
    pub fn save(&self, file: &ExportFile) -> LoopedResult<PathBuf> {
        std::fs::create_dir_all(&self.dir).with_context(|| {
            format!("failed to create download directory '{}'", self.dir.display())
        })?;

        let pending = PendingDownload::new(&self.dir, &file.name);
        pending.write(&file.bytes)?;
        pending.commit()
    }
}

struct PendingDownload {
    part: PathBuf,
    target: PathBuf,
    committed: bool,
}

impl PendingDownload {
    fn new(dir: &Path, name: &str) -> Self {
        Self {
            part: dir.join(format!("{name}.part")),
            target: dir.join(name),
            committed: false,
        }
    }

    fn write(&self, bytes: &[u8]) -> LoopedResult<()> {
        std::fs::write(&self.part, bytes)
            .with_context(|| format!("write download '{}'", self.part.display()))?;
        Ok(())
    }

    fn commit(mut self) -> LoopedResult<PathBuf> {
        std::fs::rename(&self.part, &self.target).with_context(|| {
            format!(
                "move download '{}' into place as '{}'",
                self.part.display(),
                self.target.display()
            )
        })?;
        self.committed = true;
        Ok(self.target.clone())
    }
}

impl Drop for PendingDownload {
    fn drop(&mut self) {
        if !self.committed {
            let _ = std::fs::remove_file(&self.part);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/export/download.rs"]
mod tests;
