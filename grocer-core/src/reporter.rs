use crate::table::FrequencyTable;
use std::io::{self, Write};

pub const DEFAULT_MARKER: char = '*';

/// Renders a `name` followed by one `marker` per occurrence.
pub fn histogram_bar(name: &[u8], count: u64, marker: char) -> Vec<u8> {
    let mut buf = [0u8; 4];
    let marker = marker.encode_utf8(&mut buf).as_bytes();
    let mut bar = Vec::with_capacity(name.len() + 1 + count as usize * marker.len());
    bar.extend_from_slice(name);
    bar.push(b' ');
    for _ in 0..count {
        bar.extend_from_slice(marker);
    }
    bar
}

/// Text reports over a loaded table, written to any sink.
pub struct Reporter<'a> {
    pub table: &'a FrequencyTable,
    pub marker: char,
}

impl<'a> Reporter<'a> {
    pub fn new(table: &'a FrequencyTable) -> Reporter<'a> {
        Reporter {
            table,
            marker: DEFAULT_MARKER,
        }
    }

    pub fn with_marker(mut self, marker: char) -> Reporter<'a> {
        self.marker = marker;
        self
    }

    /// One `"<name> <count>"` line per entry, sorted by name. Names are
    /// written as stored, byte for byte.
    pub fn frequencies<W: Write>(&self, mut out: W) -> io::Result<()> {
        for (name, count) in self.table.enumerate() {
            out.write_all(name)?;
            writeln!(out, " {}", count)?;
        }
        out.flush()
    }

    pub fn histogram<W: Write>(&self, mut out: W) -> io::Result<()> {
        for (name, count) in self.table.enumerate() {
            out.write_all(&histogram_bar(name, count, self.marker))?;
            out.write_all(b"\n")?;
        }
        out.flush()
    }
}
