//! Wordlist sources
//!
//! Seeds are produced lazily and the sequence can be restarted, since the
//! search walks the list more than once.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// A restartable, ordered producer of seed words.
pub trait WordlistSource: Send + Sync {
    /// Returns a fresh iterator over every seed, from the first entry.
    fn seeds(&self) -> Box<dyn Iterator<Item = String> + '_>;

    /// Number of seeds a full pass yields.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Wordlist read from a text file, one whitespace-delimited token per seed.
///
/// A file that cannot be opened behaves like an empty list.
#[derive(Debug)]
pub struct FileWordlist {
    path: PathBuf,
    count: OnceLock<usize>,
}

impl FileWordlist {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            count: OnceLock::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WordlistSource for FileWordlist {
    fn seeds(&self) -> Box<dyn Iterator<Item = String> + '_> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!("Cannot open wordlist {:?}: {}", self.path, _e);
                return Box::new(std::iter::empty());
            }
        };

        // Lines are split on raw bytes: common leaked lists are not valid UTF-8 throughout.
        Box::new(
            BufReader::new(file)
                .split(b'\n')
                .map_while(|line| match line {
                    Ok(line) => Some(line),
                    Err(_e) => {
                        #[cfg(feature = "tracing")]
                        tracing::warn!("Read error in wordlist {:?}, stopping: {}", self.path, _e);
                        None
                    }
                })
                .flat_map(|line| {
                    String::from_utf8_lossy(&line)
                        .split_whitespace()
                        .map(str::to_owned)
                        .collect::<Vec<_>>()
                }),
        )
    }

    fn len(&self) -> usize {
        *self.count.get_or_init(|| {
            let count = self.seeds().count();
            #[cfg(feature = "tracing")]
            tracing::info!("Wordlist {:?} holds {} entries", self.path, count);
            count
        })
    }
}

/// Wordlist held in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryWordlist {
    words: Vec<String>,
}

impl MemoryWordlist {
    pub fn new(words: Vec<String>) -> Self {
        Self { words }
    }
}

impl<S: Into<String>> FromIterator<S> for MemoryWordlist {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

impl WordlistSource for MemoryWordlist {
    fn seeds(&self) -> Box<dyn Iterator<Item = String> + '_> {
        Box::new(self.words.iter().cloned())
    }

    fn len(&self) -> usize {
        self.words.len()
    }
}
