/// File-backed kinds. `set` opens (or creates) the named file as a side effect.
///
/// The value owns the handle from a successful `set` until the caller takes it
/// with `take` or drops the value.
use std::fs::File;
use std::path::{Path, PathBuf};

use tracing::trace;

use super::{Value, ValueError, bracketed};

/// An open file handle together with the path it was opened with.
#[derive(Debug)]
pub struct OpenedFile {
    pub path: PathBuf,
    pub file: File,
}

impl OpenedFile {
    fn open(raw: &str) -> Result<Self, ValueError> {
        let file = File::open(raw)?;
        Ok(Self {
            path: PathBuf::from(raw),
            file,
        })
    }

    fn create(raw: &str) -> Result<Self, ValueError> {
        let file = File::create(raw)?;
        Ok(Self {
            path: PathBuf::from(raw),
            file,
        })
    }

    fn display(&self) -> String {
        self.path.display().to_string()
    }
}

macro_rules! single_file_value {
    ($name:ident, $open:path, $what:literal) => {
        #[doc = concat!("A file argument value, opened ", $what, ".")]
        #[derive(Debug, Default)]
        pub struct $name(Option<OpenedFile>);

        impl $name {
            #[must_use]
            pub fn new(init: Option<OpenedFile>) -> Self {
                Self(init)
            }

            /// Whether a file is currently held.
            #[must_use]
            pub fn is_set(&self) -> bool {
                self.0.is_some()
            }

            #[must_use]
            pub fn path(&self) -> Option<&Path> {
                self.0.as_ref().map(|f| f.path.as_path())
            }

            #[must_use]
            pub fn file(&self) -> Option<&File> {
                self.0.as_ref().map(|f| &f.file)
            }

            pub fn file_mut(&mut self) -> Option<&mut File> {
                self.0.as_mut().map(|f| &mut f.file)
            }

            /// Hand the owned handle to the caller, leaving the value unset.
            pub fn take(&mut self) -> Option<OpenedFile> {
                self.0.take()
            }
        }

        impl Value for $name {
            fn set(&mut self, raw: &str) -> Result<(), ValueError> {
                let opened = $open(raw)?;
                trace!(path = raw, mode = $what, "opened file");
                self.0 = Some(opened);
                Ok(())
            }

            fn format(&self) -> String {
                self.0.as_ref().map(OpenedFile::display).unwrap_or_default()
            }
        }
    };
}

single_file_value!(OpenValue, OpenedFile::open, "for reading");
single_file_value!(CreateValue, OpenedFile::create, "for writing");

/// A repeated file argument value. Each `set` opens one more file for reading.
#[derive(Debug, Default)]
pub struct OpenListValue(Vec<OpenedFile>);

impl OpenListValue {
    #[must_use]
    pub fn new(init: Vec<OpenedFile>) -> Self {
        Self(init)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &OpenedFile> {
        self.0.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut OpenedFile> {
        self.0.iter_mut()
    }

    #[must_use]
    pub fn into_inner(self) -> Vec<OpenedFile> {
        self.0
    }
}

impl Value for OpenListValue {
    fn set(&mut self, raw: &str) -> Result<(), ValueError> {
        let opened = OpenedFile::open(raw)?;
        trace!(path = raw, count = self.0.len() + 1, "appended file");
        self.0.push(opened);
        Ok(())
    }

    fn format(&self) -> String {
        bracketed(self.0.iter().map(OpenedFile::display))
    }

    fn accumulates(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Read, Write};

    use super::*;

    fn fixture(dir: &tempfile::TempDir, name: &str, body: &str) -> String {
        let path = dir.path().join(name);
        std::fs::write(&path, body).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_open_reads_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = fixture(&dir, "in.txt", "hello");
        let mut v = OpenValue::default();
        v.set(&path).unwrap();
        assert_eq!(v.format(), path);

        let mut body = String::new();
        v.file_mut().unwrap().read_to_string(&mut body).unwrap();
        assert_eq!(body, "hello");
    }

    #[test]
    fn test_open_missing_file_leaves_value_unset() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.txt");
        let mut v = OpenValue::default();
        let err = v.set(&missing.to_string_lossy()).unwrap_err();
        match err {
            ValueError::Io(io) => assert_eq!(io.kind(), std::io::ErrorKind::NotFound),
            ValueError::Format(_) => panic!("expected an I/O error"),
        }
        assert!(!v.is_set());
        assert_eq!(v.format(), "");
    }

    #[test]
    fn test_open_failure_keeps_previous_handle() {
        let dir = tempfile::tempdir().unwrap();
        let path = fixture(&dir, "a.txt", "a");
        let mut v = OpenValue::default();
        v.set(&path).unwrap();
        assert!(v.set(&dir.path().join("missing").to_string_lossy()).is_err());
        assert_eq!(v.format(), path);
    }

    #[test]
    fn test_create_truncates_and_writes() {
        let dir = tempfile::tempdir().unwrap();
        let path = fixture(&dir, "out.txt", "old contents");
        let mut v = CreateValue::default();
        v.set(&path).unwrap();
        v.file_mut().unwrap().write_all(b"new").unwrap();
        let taken = v.take().unwrap();
        drop(taken);
        assert!(!v.is_set());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_create_in_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no/such/dir/out.txt");
        let mut v = CreateValue::default();
        assert!(matches!(
            v.set(&path.to_string_lossy()),
            Err(ValueError::Io(_))
        ));
        assert!(v.path().is_none());
    }

    #[test]
    fn test_open_list_accumulates_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let a = fixture(&dir, "a.txt", "a");
        let b = fixture(&dir, "b.txt", "b");
        let mut v = OpenListValue::default();
        assert_eq!(v.format(), "[]");
        v.set(&a).unwrap();
        v.set(&b).unwrap();
        assert!(v.set(&dir.path().join("c.txt").to_string_lossy()).is_err());
        assert_eq!(v.len(), 2);
        assert_eq!(v.format(), format!("[{a}, {b}]"));
        assert!(v.accumulates());
    }
}
