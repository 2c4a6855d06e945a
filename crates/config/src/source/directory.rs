//! Search-path loader over plain directories.

use std::env;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::{SourceLoader, is_hidden};
use crate::constants::SEARCH_PATH_VAR;
use crate::error::ConfigError;

/// Looks resources up in an ordered list of root directories.
///
/// The first root containing a file with the requested relative name wins,
/// the way a class path resolves resources. Absolute names bypass the roots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryLoader {
    roots: Vec<PathBuf>,
}

impl DirectoryLoader {
    /// Create a loader over the given roots, searched in order.
    pub fn new<I, P>(roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            roots: roots.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a loader from a platform path list (`:`-separated on Unix, `;` on Windows).
    pub fn from_search_path(search_path: &str) -> Self {
        Self::new(env::split_paths(search_path).filter(|p| !p.as_os_str().is_empty()))
    }

    /// Create a loader from `PROPBIND_SEARCH_PATH`, falling back to the
    /// current directory when the variable is unset or blank.
    pub fn from_env() -> Self {
        match env::var(SEARCH_PATH_VAR) {
            Ok(value) if !value.trim().is_empty() => Self::from_search_path(value.trim()),
            _ => Self::new([PathBuf::from(".")]),
        }
    }

    /// The search roots, in lookup order.
    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    /// Resolve `name` to the first existing file under the roots.
    pub fn resolve(&self, name: &str) -> Option<PathBuf> {
        let relative = Path::new(name);
        if relative.is_absolute() {
            return relative.is_file().then(|| relative.to_path_buf());
        }
        self.roots
            .iter()
            .map(|root| root.join(relative))
            .find(|candidate| candidate.is_file())
    }

    fn resolve_dir(&self, directory: &str) -> Option<PathBuf> {
        let relative = Path::new(directory);
        if relative.is_absolute() {
            return relative.is_dir().then(|| relative.to_path_buf());
        }
        self.roots
            .iter()
            .map(|root| root.join(relative))
            .find(|candidate| candidate.is_dir())
    }
}

impl SourceLoader for DirectoryLoader {
    fn open(&self, name: &str) -> Result<Option<Box<dyn Read + '_>>, ConfigError> {
        let Some(path) = self.resolve(name) else {
            return Ok(None);
        };
        tracing::debug!(source = name, path = %path.display(), "Opening property source");

        let file = File::open(&path).map_err(|source| ConfigError::SourceRead {
            name: name.to_string(),
            source,
        })?;
        Ok(Some(Box::new(BufReader::new(file))))
    }

    fn list_files(&self, directory: &str) -> Result<Vec<String>, ConfigError> {
        let dir = self
            .resolve_dir(directory)
            .ok_or_else(|| ConfigError::DirectoryNotFound(directory.to_string()))?;

        let mut names = Vec::new();
        for entry in WalkDir::new(&dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|err| ConfigError::DirectoryRead {
                name: directory.to_string(),
                source: err.into(),
            })?;
            if entry.path().is_dir() {
                continue;
            }
            let name = entry.file_name().to_string_lossy();
            if is_hidden(&name) {
                continue;
            }
            names.push(name.into_owned());
        }
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_first_root_wins() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        fs::write(first.path().join("app.properties"), "A=first\n").unwrap();
        fs::write(second.path().join("app.properties"), "A=second\n").unwrap();
        fs::write(second.path().join("only-second.properties"), "B=1\n").unwrap();

        let loader = DirectoryLoader::new([first.path(), second.path()]);

        let mut content = String::new();
        loader
            .open("app.properties")
            .unwrap()
            .expect("resource should be found")
            .read_to_string(&mut content)
            .unwrap();
        assert_eq!(content, "A=first\n");
        assert_eq!(
            loader.resolve("only-second.properties"),
            Some(second.path().join("only-second.properties"))
        );
    }

    #[test]
    fn test_missing_resource_is_none() {
        let root = TempDir::new().unwrap();
        let loader = DirectoryLoader::new([root.path()]);
        assert!(loader.open("missing.properties").unwrap().is_none());
    }

    #[test]
    fn test_directory_is_not_a_resource() {
        let root = TempDir::new().unwrap();
        fs::create_dir(root.path().join("conf.properties")).unwrap();
        let loader = DirectoryLoader::new([root.path()]);
        assert!(loader.open("conf.properties").unwrap().is_none());
    }

    #[test]
    fn test_absolute_name_bypasses_roots() {
        let root = TempDir::new().unwrap();
        let elsewhere = TempDir::new().unwrap();
        let path = elsewhere.path().join("abs.properties");
        fs::write(&path, "X=1\n").unwrap();

        let loader = DirectoryLoader::new([root.path()]);
        assert!(loader.open(&path.to_string_lossy()).unwrap().is_some());
    }

    #[test]
    fn test_list_files_skips_directories_and_hidden_entries() {
        let root = TempDir::new().unwrap();
        let dir = root.path().join("statictest");
        fs::create_dir_all(dir.join("pic")).unwrap();
        fs::create_dir_all(dir.join("scripts")).unwrap();
        fs::write(dir.join("test.txt"), "x").unwrap();
        fs::write(dir.join("b.properties"), "x").unwrap();
        fs::write(dir.join(".hidden"), "x").unwrap();
        fs::write(dir.join("pic").join("nested.png"), "x").unwrap();

        let loader = DirectoryLoader::new([root.path()]);
        let names = loader.list_files("statictest").unwrap();

        assert_eq!(names, vec!["b.properties".to_string(), "test.txt".to_string()]);
    }

    #[test]
    fn test_list_files_missing_directory_errors() {
        let root = TempDir::new().unwrap();
        let loader = DirectoryLoader::new([root.path()]);
        let err = loader.list_files("missing_directory").unwrap_err();
        assert!(matches!(err, ConfigError::DirectoryNotFound(ref d) if d == "missing_directory"));
    }

    #[test]
    fn test_from_search_path_splits_platform_list() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        let joined = env::join_paths([first.path(), second.path()]).unwrap();

        let loader = DirectoryLoader::from_search_path(&joined.to_string_lossy());
        assert_eq!(
            loader.roots(),
            &[first.path().to_path_buf(), second.path().to_path_buf()]
        );
    }
}
