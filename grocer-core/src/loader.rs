//! Reads whitespace-separated item names from a file into a table.

use crate::error::LoadError;
use crate::table::FrequencyTable;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info, warn};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// ASCII whitespace as the C locale sees it, vertical tab included.
fn is_separator(byte: &u8) -> bool {
    byte.is_ascii_whitespace() || *byte == 0x0b
}

/// Non-empty runs of bytes between separators.
pub fn tokens(line: &[u8]) -> impl Iterator<Item = &[u8]> {
    line.split(is_separator).filter(|token| !token.is_empty())
}

pub struct Loader {
    pub show_progress: bool,
}

impl Default for Loader {
    fn default() -> Self {
        Loader {
            show_progress: true,
        }
    }
}

impl Loader {
    pub fn new() -> Loader {
        Default::default()
    }

    pub fn quiet() -> Loader {
        Loader {
            show_progress: false,
        }
    }

    /// Builds a table from every token of the file at `path`. The load is
    /// all or nothing: on error no partial table is handed back.
    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<FrequencyTable, LoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| {
            warn!("input {} unavailable: {}", path.display(), source);
            LoadError::Open {
                path: path.to_path_buf(),
                source,
            }
        })?;
        let len = file.metadata().map(|meta| meta.len()).unwrap_or(0);

        let progress = self.progress_bar(len);
        let loaded = self.load_reader(BufReader::new(file), &progress);
        progress.finish_and_clear();

        match loaded {
            Ok(table) => {
                info!(
                    "loaded {} tokens ({} distinct items) from {}",
                    table.total(),
                    table.len(),
                    path.display()
                );
                Ok(table)
            }
            Err(source) => {
                warn!("input {} unreadable: {}", path.display(), source);
                Err(LoadError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        }
    }

    /// Splits `reader` on whitespace, line by line, advancing `progress` by
    /// the bytes consumed. Bytes are taken as they are, UTF-8 or not.
    pub fn load_reader<R: BufRead>(
        &self,
        mut reader: R,
        progress: &ProgressBar,
    ) -> io::Result<FrequencyTable> {
        let mut table = FrequencyTable::new();
        let mut lines = 0;
        let mut line = Vec::new();
        loop {
            line.clear();
            let read = reader.read_until(b'\n', &mut line)?;
            if read == 0 {
                break;
            }
            table.ingest(tokens(&line));
            lines += 1;
            progress.inc(read as u64);
        }
        debug!("read {} lines, {} tokens", lines, table.total());
        Ok(table)
    }

    fn progress_bar(&self, len: u64) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }
        let sty = ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {bytes:>7}/{total_bytes:7} {msg}")
            .progress_chars("##-");

        let progress = ProgressBar::new(len);
        progress.set_style(sty);
        progress.set_message("Loading items");
        progress
    }
}
