use crate::loader::error::LoadingError;
use crate::loader::file::File;
use crate::loader::{Filter, LoaderTrait};
use async_stream::try_stream;
use async_walkdir::{DirEntry, Filtering, WalkDir};
use futures::{Stream, StreamExt};
use std::path::{Path, PathBuf};
use std::pin::Pin;
use tokio::fs;

#[derive(Clone, Debug)]
pub struct FileSystemLoader {
    base_path: PathBuf,
}

impl FileSystemLoader {
    #[must_use]
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    fn sub_path(&self, path: impl AsRef<Path>) -> PathBuf {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return self.base_path.clone();
        }
        self.base_path.join(path)
    }
}

impl LoaderTrait for FileSystemLoader {
    fn load_dir<'a, P: AsRef<Path>>(
        &'a self,
        path: P,
        filter: Filter,
    ) -> Pin<Box<dyn Stream<Item = Result<File, LoadingError>> + Send + 'a>> {
        let path = self.sub_path(path);
        tracing::trace!(?path, "loading directory");
        let mut walker = WalkDir::new(path).filter(move |entry| filter_entry(entry, filter));
        let stream = try_stream! {
            while let Some(entry) = walker.next().await {
                let entry = entry?;
                if entry.file_type().await?.is_file() {
                    yield read_file(&entry.path()).await?;
                }
            }
        };
        Box::pin(stream)
    }

    async fn load_file<P: AsRef<Path>>(&self, path: P) -> Result<File, LoadingError> {
        read_file(&self.sub_path(path)).await
    }
}

async fn read_file(path: &Path) -> Result<File, LoadingError> {
    tracing::trace!(?path, "loading file");
    let content = fs::read(path).await?;
    Ok(File::new(path.to_string_lossy().into(), content))
}

async fn filter_entry(entry: DirEntry, filter: Filter) -> Filtering {
    // Unreadable entries are skipped here and reported by the walker
    let Ok(file_type) = entry.file_type().await else {
        return Filtering::Ignore;
    };
    if file_type.is_dir() || filter.apply(entry.path()) {
        Filtering::Continue
    } else {
        Filtering::Ignore
    }
}
