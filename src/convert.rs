//! CSV in, JSON Lines (and optionally a JSON array) out.
//!
//! This is the file-handling shell around [`enrich`]: it owns every
//! fallible operation, while enrichment of a single row cannot fail.

use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use incident_types::{EnrichedRecord, SourceRecord};
use tracing::{debug, info, warn};

use crate::enrich::{enrich, unread_columns};
use crate::error::{Error, Result};

/// Where to read from and write to.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub input: PathBuf,
    pub jsonl: PathBuf,
    /// Also write a pretty-printed JSON array here, if set.
    pub json_array: Option<PathBuf>,
}

/// Counters reported after a conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertStats {
    /// Rows enriched and written.
    pub rows: usize,
    /// Rows that could not be decoded and were dropped.
    pub skipped: usize,
    pub with_county: usize,
    pub with_year: usize,
}

impl ConvertStats {
    fn record(&mut self, out: &EnrichedRecord) {
        self.rows += 1;
        if out.county.is_known() {
            self.with_county += 1;
        }
        if out.year.is_known() {
            self.with_year += 1;
        }
    }
}

/// Enriched rows of one CSV table, in input order.
#[derive(Debug, Default)]
pub struct Conversion {
    pub records: Vec<EnrichedRecord>,
    pub stats: ConvertStats,
}

/// Read a headered CSV table and enrich every row.
///
/// A row that cannot be decoded (e.g. invalid UTF-8) is logged and skipped;
/// only an unreadable header row fails the whole table.
pub fn enrich_csv<R: Read>(reader: R) -> std::result::Result<Conversion, csv::Error> {
    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let columns = rdr.headers()?.len();
    debug!(columns, "CSV header read");

    let mut conv = Conversion::default();
    for (i, row) in rdr.deserialize::<SourceRecord>().enumerate() {
        match row {
            Ok(rec) => {
                if conv.records.is_empty() {
                    let unread = unread_columns(&rec);
                    if !unread.is_empty() {
                        debug!(?unread, "columns not used by any output field");
                    }
                }
                let out = enrich(&rec);
                conv.stats.record(&out);
                conv.records.push(out);
            }
            Err(e) => {
                warn!(record = i + 1, error = %e, "skipping undecodable CSV row");
                conv.stats.skipped += 1;
            }
        }
    }
    Ok(conv)
}

/// One compact JSON object per line.
pub fn write_jsonl<W: Write>(mut w: W, records: &[EnrichedRecord]) -> io::Result<()> {
    for r in records {
        serde_json::to_writer(&mut w, r)?;
        w.write_all(b"\n")?;
    }
    w.flush()
}

/// All records as one pretty-printed JSON array.
pub fn write_json_array<W: Write>(mut w: W, records: &[EnrichedRecord]) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut w, records)?;
    w.flush()
}

/// Create `path` (and its parent directories) and hand a buffered writer to `f`.
fn write_file<F>(path: &Path, f: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> io::Result<()>,
{
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }
    let file = File::create(path).map_err(|e| Error::io(path, e))?;
    let mut w = BufWriter::new(file);
    f(&mut w).map_err(|e| Error::io(path, e))?;
    info!(path = %path.display(), "wrote output");
    Ok(())
}

/// Run a full conversion described by `opts`.
pub fn convert_file(opts: &ConvertOptions) -> Result<ConvertStats> {
    let file = File::open(&opts.input).map_err(|e| Error::io(&opts.input, e))?;
    let conv = enrich_csv(BufReader::new(file)).map_err(|source| Error::Csv {
        path: opts.input.clone(),
        source,
    })?;

    write_file(&opts.jsonl, |w| write_jsonl(w, &conv.records))?;
    if let Some(path) = &opts.json_array {
        write_file(path, |w| write_json_array(w, &conv.records))?;
    }

    let stats = conv.stats;
    info!(
        rows = stats.rows,
        skipped = stats.skipped,
        with_county = stats.with_county,
        with_year = stats.with_year,
        "conversion finished"
    );
    Ok(stats)
}
