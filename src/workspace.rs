use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWrite;

/// Name of the file written into the working directory.
pub const GITIGNORE: &str = ".gitignore";

/// Permission bits for a newly created file.
#[cfg(unix)]
const FILE_MODE: u32 = 0o644;

/// How the destination is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Create if missing, otherwise replace the contents.
    Truncate,
    /// Create if missing, otherwise write after the existing contents.
    Append,
}

pub type Destination = Box<dyn AsyncWrite + Send + Unpin>;

/// The local file a template lands in.
#[async_trait]
pub trait LocalTarget: Send + Sync {
    fn path(&self) -> &Path;
    async fn exists(&self) -> io::Result<bool>;
    async fn open(&self, mode: WriteMode) -> io::Result<Destination>;
}

/// A file on disk, `./.gitignore` by default.
#[derive(Debug, Clone)]
pub struct Workspace {
    path: PathBuf,
}

impl Workspace {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn current_dir() -> Self {
        Self::new(GITIGNORE)
    }
}

#[async_trait]
impl LocalTarget for Workspace {
    fn path(&self) -> &Path {
        &self.path
    }

    async fn exists(&self) -> io::Result<bool> {
        tokio::fs::try_exists(&self.path).await
    }

    async fn open(&self, mode: WriteMode) -> io::Result<Destination> {
        let mut options = OpenOptions::new();
        options.write(true).create(true);
        match mode {
            WriteMode::Truncate => options.truncate(true),
            WriteMode::Append => options.append(true),
        };
        #[cfg(unix)]
        options.mode(FILE_MODE);

        let file = options.open(&self.path).await?;
        Ok(Box::new(file))
    }
}
