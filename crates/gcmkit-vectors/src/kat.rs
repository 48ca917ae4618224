use std::collections::BTreeMap;
use std::io::{BufRead, Write};

use log::debug;

use crate::emit::kat_byte_list;
use crate::error::VectorError;

/// Fields that appear in the `vector_data_t` descriptor, file name to C name.
const KAT_FIELDS: [(&str, &str); 3] = [("KEY", "key"), ("PLAINTEXT", "plain"), ("CIPHERTEXT", "cipher")];

fn c_name(file_key: &str) -> &str {
    KAT_FIELDS
        .iter()
        .find(|(k, _)| *k == file_key)
        .map_or(file_key, |(_, c)| *c)
}

/// One AES known-answer test, opened by `COUNT = n`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KatRecord {
    pub count: u64,
    /// Decoded fields keyed by C name (`key`, `plain`, `cipher`, or the file's own name).
    pub fields: BTreeMap<String, Vec<u8>>,
}

impl KatRecord {
    pub fn new(count: u64) -> Self {
        Self { count, fields: BTreeMap::new() }
    }

    pub fn get(&self, c_field: &str) -> Option<&[u8]> {
        self.fields.get(c_field).map(Vec::as_slice)
    }

    pub fn prefix(&self) -> String {
        format!("count{}", self.count)
    }

    pub fn write_c<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        let prefix = self.prefix();

        for (_, name) in KAT_FIELDS {
            if let Some(data) = self.get(name) {
                writeln!(out, "const uint8_t {}{}[] = {{ {} }};", prefix, name, kat_byte_list(data))?;
            }
        }

        writeln!(out, "const vector_data_t {} = {{", prefix)?;
        writeln!(out, "    .count = {},", self.count)?;
        for (_, name) in KAT_FIELDS {
            if self.get(name).is_some() {
                writeln!(out, "    .{} = {}{},", name, prefix, name)?;
            } else {
                writeln!(out, "    .{} = NULL,", name)?;
            }
        }
        writeln!(out, "}};")?;
        writeln!(out)
    }
}

/// Streams AES KAT files (`COUNT`/`KEY`/`PLAINTEXT`/`CIPHERTEXT` blocks).
///
/// Lines outside a block are skipped. Inside a block every line up to the
/// closing blank line must be `NAME = hex`.
pub struct KatIngest<W: Write> {
    out: W,
    current: Option<KatRecord>,
    names: Vec<String>,
    line_no: usize,
}

impl<W: Write> KatIngest<W> {
    pub fn new(out: W) -> Self {
        Self { out, current: None, names: Vec::new(), line_no: 0 }
    }

    pub fn ingest<R: BufRead>(&mut self, reader: R) -> Result<(), VectorError> {
        self.line_no = 0;
        for line in reader.lines() {
            let line = line?;
            self.feed_line(&line)?;
        }
        Ok(())
    }

    pub fn feed_line(&mut self, raw: &str) -> Result<(), VectorError> {
        self.line_no += 1;
        let line = raw.trim();

        let Some(record) = self.current.as_mut() else {
            if line.starts_with("COUNT") {
                self.current = Some(KatRecord::new(self.parse_count(line)?));
            }
            return Ok(());
        };

        if line.is_empty() {
            if let Some(record) = self.current.take() {
                record.write_c(&mut self.out)?;
                self.names.push(record.prefix());
            }
            return Ok(());
        }

        let mut parts = line.split('=');
        let (key, value) = match (parts.next(), parts.next(), parts.next()) {
            (Some(k), Some(v), None) => (k.trim(), v.trim()),
            _ => return Err(VectorError::MalformedKatLine { line: self.line_no, text: line.to_string() }),
        };
        let data = hex::decode(value).map_err(|source| VectorError::KatDecode {
            line: self.line_no,
            field: key.to_string(),
            source,
        })?;
        record.fields.insert(c_name(key).to_string(), data);
        Ok(())
    }

    fn parse_count(&self, line: &str) -> Result<u64, VectorError> {
        let text = line.split('=').nth(1).unwrap_or("").trim();
        text.parse().map_err(|_| VectorError::BadCount { line: self.line_no, text: text.to_string() })
    }

    pub fn emitted(&self) -> usize {
        self.names.len()
    }

    /// Writes the `test_vectors[]` index and returns the number of records.
    pub fn finish(mut self) -> Result<usize, VectorError> {
        if let Some(record) = &self.current {
            debug!("end of input: unterminated KAT record {} dropped", record.prefix());
        }
        writeln!(self.out, "const vector_data_t * const test_vectors[] = {{")?;
        for name in &self.names {
            writeln!(self.out, "    &{},", name)?;
        }
        writeln!(self.out, "}};")?;
        self.out.flush()?;
        Ok(self.names.len())
    }
}
