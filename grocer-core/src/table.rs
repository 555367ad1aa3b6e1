use crate::error::BackupError;
use crate::util::Counter;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use log::debug;
use std::io::Write;
use std::iter::FromIterator;

/// Folds ASCII uppercase letters to lowercase, leaving every other byte as is.
pub fn normalize(raw: &[u8]) -> Vec<u8> {
    raw.to_ascii_lowercase()
}

/// Case-insensitive multiset of item names with sorted enumeration.
///
/// Names are byte strings: input that is not UTF-8 is counted verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: Counter<Vec<u8>>,
}

impl FrequencyTable {
    pub fn new() -> FrequencyTable {
        Default::default()
    }

    /// Counts every token under its normalized name and returns how many
    /// tokens were taken. Tokens are opaque: punctuation is kept.
    pub fn ingest<I, S>(&mut self, tokens: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[u8]>,
    {
        let mut taken = 0;
        for token in tokens {
            self.counts.record(normalize(token.as_ref()));
            taken += 1;
        }
        taken
    }

    /// Occurrences of `item`, compared case-insensitively. Absent items are 0.
    pub fn lookup<K: AsRef<[u8]>>(&self, item: K) -> u64 {
        self.counts.get(normalize(item.as_ref()).as_slice())
    }

    /// `(name, count)` pairs in ascending byte order of the name.
    pub fn enumerate(&self) -> impl Iterator<Item = (&[u8], u64)> + '_ {
        self.counts.iter().map(|(name, count)| (name.as_slice(), count))
    }

    /// Number of distinct items.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of tokens ingested so far.
    pub fn total(&self) -> u64 {
        self.counts.total()
    }

    /// Writes one `"<name> <count>\n"` line per entry, in enumeration order,
    /// and returns the number of lines written.
    pub fn write_backup<W: Write>(&self, sink: W) -> Result<usize, BackupError> {
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .delimiter(b' ')
            .quote_style(QuoteStyle::Never)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(sink);

        let mut lines = 0;
        for (name, count) in self.enumerate() {
            let count = count.to_string();
            writer.write_record(&[name, count.as_bytes()])?;
            lines += 1;
        }
        writer.flush()?;
        debug!("wrote {} backup lines", lines);
        Ok(lines)
    }
}

impl<S: AsRef<[u8]>> Extend<S> for FrequencyTable {
    fn extend<I: IntoIterator<Item = S>>(&mut self, tokens: I) {
        self.ingest(tokens);
    }
}

impl<S: AsRef<[u8]>> FromIterator<S> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = S>>(tokens: I) -> Self {
        let mut table = FrequencyTable::new();
        table.ingest(tokens);
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    fn groceries() -> FrequencyTable {
        vec!["Apples", "bananas", "apples", "GRAPES", "apples"]
            .into_iter()
            .collect()
    }

    fn entries(table: &FrequencyTable) -> Vec<(String, u64)> {
        table
            .enumerate()
            .map(|(name, count)| (String::from_utf8_lossy(name).into_owned(), count))
            .collect()
    }

    fn pairs(expected: &[(&str, u64)]) -> Vec<(String, u64)> {
        expected
            .iter()
            .map(|(name, count)| (name.to_string(), *count))
            .collect()
    }

    fn backup_bytes(table: &FrequencyTable) -> Vec<u8> {
        let mut out = Vec::new();
        table.write_backup(&mut out).unwrap();
        out
    }

    fn backup_text(table: &FrequencyTable) -> String {
        String::from_utf8(backup_bytes(table)).unwrap()
    }

    struct BrokenSink;

    impl Write for BrokenSink {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "disk full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::Other, "disk full"))
        }
    }

    #[test]
    fn normalize_folds_ascii_only() {
        assert_eq!(normalize(b"GrAPes"), b"grapes");
        assert_eq!(normalize("ÄPFEL".as_bytes()), "Äpfel".as_bytes());
        assert_eq!(normalize(b"Zucchini-2!"), b"zucchini-2!");
        assert_eq!(normalize(b"CAF\xc9"), b"caf\xc9");
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let mut table = FrequencyTable::new();
        table.ingest(vec!["Apple"]);
        assert_eq!(table.lookup("apple"), 1);
        assert_eq!(table.lookup("APPLE"), 1);
        assert_eq!(table.lookup("Apple"), 1);
    }

    #[test]
    fn lookup_counts_matching_tokens() {
        let tokens = ["Peas", "corn", "PEAS", "peas", "Corn", "kale"];
        let table: FrequencyTable = tokens.iter().collect();
        for token in tokens.iter() {
            let expected = tokens
                .iter()
                .filter(|t| t.to_ascii_lowercase() == token.to_ascii_lowercase())
                .count() as u64;
            assert_eq!(table.lookup(token), expected);
        }
        assert_eq!(table.total(), tokens.len() as u64);
    }

    #[test]
    fn lookup_miss_is_zero_and_does_not_insert() {
        let table = groceries();
        let before = entries(&table);
        assert_eq!(table.lookup("cherries"), 0);
        assert_eq!(table.lookup("cherries"), 0);
        assert_eq!(entries(&table), before);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn enumerate_is_sorted_regardless_of_ingest_order() {
        let table: FrequencyTable = vec!["banana", "apple", "apple"].into_iter().collect();
        assert_eq!(entries(&table), pairs(&[("apple", 2), ("banana", 1)]));
    }

    #[test]
    fn enumerate_end_to_end() {
        let table = groceries();
        let expected = pairs(&[("apples", 3), ("bananas", 1), ("grapes", 1)]);
        assert_eq!(entries(&table), expected);
        assert_eq!(entries(&table), expected);
    }

    #[test]
    fn punctuation_is_part_of_the_key() {
        let table: FrequencyTable = vec!["apples,", "apples"].into_iter().collect();
        assert_eq!(table.lookup("apples,"), 1);
        assert_eq!(table.lookup("apples"), 1);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn non_utf8_names_are_counted_verbatim() {
        let tokens: Vec<&[u8]> = vec![&b"Caf\xe9"[..], &b"caf\xe9"[..], &b"CAF\xe9"[..]];
        let table: FrequencyTable = tokens.into_iter().collect();
        assert_eq!(table.lookup(&b"caf\xe9"[..]), 3);
        assert_eq!(backup_bytes(&table), b"caf\xe9 3\n".to_vec());
    }

    #[test]
    fn empty_table() {
        let mut table = FrequencyTable::new();
        assert_eq!(table.ingest(Vec::<String>::new()), 0);
        assert!(table.is_empty());
        assert_eq!(table.enumerate().count(), 0);
        assert_eq!(table.lookup("anything"), 0);
        assert_eq!(backup_text(&table), "");
    }

    #[test]
    fn backup_format_is_exact() {
        let table = groceries();
        assert_eq!(backup_text(&table), "apples 3\nbananas 1\ngrapes 1\n");
    }

    #[test]
    fn backup_is_idempotent() {
        let table = groceries();
        assert_eq!(backup_bytes(&table), backup_bytes(&table));
    }

    #[test]
    fn backup_never_quotes_names() {
        let table: FrequencyTable = vec!["\"organic\"", "o'neil's"].into_iter().collect();
        assert_eq!(backup_text(&table), "\"organic\" 1\no'neil's 1\n");
    }

    #[test]
    fn backup_reports_line_count() {
        let mut out = Vec::new();
        assert_eq!(groceries().write_backup(&mut out).unwrap(), 3);
    }

    #[test]
    fn backup_write_failure_is_signalled() {
        let table = groceries();
        match table.write_backup(BrokenSink) {
            Err(BackupError::Write(_)) => {}
            other => panic!("expected write failure, got {:?}", other),
        }
        assert_eq!(table.lookup("apples"), 3);
    }

    #[test]
    fn extend_keeps_counting() {
        let mut table = groceries();
        table.extend(vec!["GRAPES"]);
        assert_eq!(table.lookup("grapes"), 2);
    }
}
