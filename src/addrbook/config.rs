use crate::book::DEFAULT_PAGE_SIZE;
use crate::error::{BookError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_BOOK_FILE: &str = "address_book.json";

/// Configuration for addrbook, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookConfig {
    /// Contacts shown per page when listing
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Snapshot file; relative names resolve inside the data directory
    #[serde(default = "default_book_file")]
    pub book_file: String,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_book_file() -> String {
    DEFAULT_BOOK_FILE.to_string()
}

impl Default for BookConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            book_file: DEFAULT_BOOK_FILE.to_string(),
        }
    }
}

impl BookConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(BookError::Io)?;
        let mut config: BookConfig = serde_json::from_str(&content).map_err(|e| {
            BookError::CorruptData(format!("{}: {}", config_path.display(), e))
        })?;
        if config.page_size == 0 {
            tracing::warn!(path = %config_path.display(), "page_size 0 in config, using 1");
            config.page_size = 1;
        }
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(BookError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(BookError::encode)?;
        fs::write(config_path, content).map_err(BookError::Io)?;
        Ok(())
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
    }

    /// Absolute path of the snapshot file for a data directory.
    pub fn book_path(&self, data_dir: &Path) -> PathBuf {
        let file = Path::new(&self.book_file);
        if file.is_absolute() {
            file.to_path_buf()
        } else {
            data_dir.join(file)
        }
    }

    /// Look up a key by its CLI name.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "page-size" => Some(self.page_size.to_string()),
            "book-file" => Some(self.book_file.clone()),
            _ => None,
        }
    }

    /// Set a key by its CLI name.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "page-size" => {
                let size = value.trim().parse::<usize>().map_err(|_| {
                    BookError::InvalidFormat {
                        field: "page-size",
                        value: value.to_string(),
                    }
                })?;
                self.set_page_size(size);
            }
            "book-file" => {
                if value.trim().is_empty() {
                    return Err(BookError::InvalidFormat {
                        field: "book-file",
                        value: value.to_string(),
                    });
                }
                self.book_file = value.trim().to_string();
            }
            _ => {
                return Err(BookError::InvalidFormat {
                    field: "config key",
                    value: key.to_string(),
                })
            }
        }
        Ok(())
    }

    pub fn keys() -> &'static [&'static str] {
        &["page-size", "book-file"]
    }
}
