use crate::loader::error::LoadingError;
use crate::loader::file::File;
use crate::loader::file_system::FileSystemLoader;
use futures::Stream;
use std::path::Path;
use std::pin::Pin;
use url::Url;

pub mod error;
pub mod file;
pub mod file_system;

#[derive(Debug, Clone, Copy, Default)]
pub enum Filter {
    Yaml,
    #[default]
    Any,
}

impl Filter {
    pub fn apply<P: AsRef<Path>>(&self, path: P) -> bool {
        let Some(extension) = path.as_ref().extension().and_then(|ext| ext.to_str()) else {
            return false;
        };
        match self {
            Filter::Yaml => ["yaml", "yml"].contains(&extension),
            Filter::Any => true,
        }
    }
}

/// Source of configuration files, selected by the URL scheme.
#[derive(Clone, Debug)]
pub enum Loader {
    FileSystem(FileSystemLoader),
}

impl Loader {
    pub fn from_url(url: &Url) -> Result<Self, LoadingError> {
        match url.scheme() {
            "file" => {
                let path = url
                    .to_file_path()
                    .map_err(|()| LoadingError::InvalidURL(url.to_string()))?;
                Ok(Loader::FileSystem(FileSystemLoader::new(path)))
            }
            scheme => Err(LoadingError::UnsupportedScheme(scheme.to_owned())),
        }
    }
}

impl LoaderTrait for Loader {
    fn load_dir<'a, P: AsRef<Path>>(
        &'a self,
        path: P,
        filter: Filter,
    ) -> Pin<Box<dyn Stream<Item = Result<File, LoadingError>> + Send + 'a>> {
        match self {
            Loader::FileSystem(loader) => loader.load_dir(path, filter),
        }
    }

    async fn load_file<P: AsRef<Path>>(&self, path: P) -> Result<File, LoadingError> {
        match self {
            Loader::FileSystem(loader) => loader.load_file(path).await,
        }
    }
}

pub trait LoaderTrait {
    /// Streams every file below `path` that passes `filter`.
    fn load_dir<'a, P: AsRef<Path>>(
        &'a self,
        path: P,
        filter: Filter,
    ) -> Pin<Box<dyn Stream<Item = Result<File, LoadingError>> + Send + 'a>>;
    fn load_file<P: AsRef<Path>>(&self, path: P) -> impl Future<Output = Result<File, LoadingError>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter() {
        assert!(Filter::Yaml.apply("catalog/rust.yaml"));
        assert!(Filter::Yaml.apply("catalog.yml"));
        assert!(!Filter::Yaml.apply("catalog.json"));
        assert!(!Filter::Yaml.apply("README"));
        assert!(Filter::Any.apply("catalog.json"));
    }

    #[test]
    fn test_from_url() {
        let url = Url::parse("file:///etc/lectern").unwrap();
        assert!(matches!(Loader::from_url(&url), Ok(Loader::FileSystem(_))));
        let url = Url::parse("s3://bucket/catalog").unwrap();
        assert!(matches!(Loader::from_url(&url), Err(LoadingError::UnsupportedScheme(scheme)) if scheme == "s3"));
    }
}
