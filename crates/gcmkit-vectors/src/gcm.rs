use std::io::{BufRead, Write};

use log::{debug, trace};

use crate::emit::{write_count_define, write_gcm_record};
use crate::error::VectorError;
use crate::filter::{BitLengthFilter, GroupFilter};
use crate::line::Line;
use crate::params::{GroupParams, ParamValue};
use crate::record::{GcmRecord, RawRecord};

/// Streams GCM vector files into `gcm_test_vector_t` initializers.
///
/// Group headers persist across records and across inputs. A record is
/// emitted when a blank line closes it and the group passes the filter;
/// a record still open at end of input is dropped.
pub struct GcmVectorIngest<W: Write, F: GroupFilter = BitLengthFilter> {
    out: W,
    filter: F,
    group: GroupParams,
    record: RawRecord,
    emitted: usize,
    line_no: usize,
}

impl<W: Write> GcmVectorIngest<W> {
    /// AES-128 with 96-bit IVs.
    pub fn with_default_filter(out: W) -> Self {
        Self::new(out, BitLengthFilter::default())
    }
}

impl<W: Write, F: GroupFilter> GcmVectorIngest<W, F> {
    pub fn new(out: W, filter: F) -> Self {
        Self {
            out,
            filter,
            group: GroupParams::new(),
            record: RawRecord::default(),
            emitted: 0,
            line_no: 0,
        }
    }

    /// Reads one input to the end. Line numbers restart at 1 for each input.
    pub fn ingest<R: BufRead>(&mut self, reader: R) -> Result<(), VectorError> {
        self.line_no = 0;
        for line in reader.lines() {
            let line = line?;
            self.feed_line(&line)?;
        }
        Ok(())
    }

    pub fn feed_line(&mut self, line: &str) -> Result<(), VectorError> {
        self.line_no += 1;

        match Line::classify(line) {
            Line::Blank => self.close_record()?,
            Line::Comment => {}
            Line::Header { key, value } => {
                let value = ParamValue::parse(value);
                debug!("line {}: group {} = {}", self.line_no, key, value);
                self.group.set(key, value);
            }
            Line::Field { key, value } => self.record.insert(key, value),
            Line::Other => trace!("line {}: ignored {:?}", self.line_no, line),
        }
        Ok(())
    }

    fn close_record(&mut self) -> Result<(), VectorError> {
        if self.record.is_empty() {
            return Ok(());
        }
        let raw = std::mem::take(&mut self.record);

        if !self.filter.accepts(&self.group) {
            debug!("line {}: record skipped by group filter", self.line_no);
            return Ok(());
        }

        let record = GcmRecord::decode(&raw)
            .map_err(|e| VectorError::from_field(e, self.line_no, self.emitted, raw.clone()))?;

        write_gcm_record(&mut self.out, self.emitted, &record)?;
        self.emitted += 1;
        Ok(())
    }

    pub fn emitted(&self) -> usize {
        self.emitted
    }

    pub fn group(&self) -> &GroupParams {
        &self.group
    }

    /// Writes the count directive and returns the number of records emitted.
    pub fn finish(mut self) -> Result<usize, VectorError> {
        if !self.record.is_empty() {
            debug!("end of input: unterminated record with {} fields dropped", self.record.len());
        }
        write_count_define(&mut self.out, self.emitted)?;
        self.out.flush()?;
        Ok(self.emitted)
    }
}
