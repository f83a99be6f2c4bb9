//! Streaming decoder for the gzipped, tab-separated sales reports returned by
//! the App Store Connect `salesReports` endpoint.
//!
//! The decoder favours returning every well-formed row over strict
//! validation: short or otherwise unreadable lines are skipped (and counted),
//! numeric columns that fail to parse default to zero, and only stream-level
//! failures (bad gzip data, I/O errors) abort decoding.

use async_compression::tokio::bufread::GzipDecoder;
use csv_async::{AsyncReader, AsyncReaderBuilder, StringRecord};
use tokio::io::AsyncBufRead;
use tracing::{debug, warn};

use crate::{
    constants::SALES_REPORT_MIN_COLUMNS, domain::entities::sales_report_row::SalesReportRow,
    errors::ReportDecodeError,
};

// Column positions in the Sales Summary report.
const COL_PROVIDER: usize = 0;
const COL_SKU: usize = 2;
const COL_TITLE: usize = 4;
const COL_PRODUCT_TYPE: usize = 6;
const COL_UNITS: usize = 7;
const COL_PROCEEDS: usize = 8;
const COL_BEGIN_DATE: usize = 9;
const COL_CUSTOMER_CURRENCY: usize = 11;
const COL_COUNTRY_CODE: usize = 12;

/// Lazy, non-restartable sequence of rows from a compressed sales report.
pub struct SalesReportRows<R> {
    reader: Option<AsyncReader<GzipDecoder<R>>>,
    record: StringRecord,
    skipped: usize,
}

impl<R> std::fmt::Debug for SalesReportRows<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SalesReportRows")
            .field("finished", &self.reader.is_none())
            .field("skipped", &self.skipped)
            .finish()
    }
}

impl<R> SalesReportRows<R>
where
    R: AsyncBufRead + Unpin + Send,
{
    /// Wraps a gzip byte stream and consumes the header line.
    ///
    /// Errors here (bad gzip magic, truncated stream, missing header) are
    /// fatal: no rows are produced.
    pub async fn open(compressed: R) -> Result<Self, ReportDecodeError> {
        let mut decompressed = GzipDecoder::new(compressed);
        decompressed.multiple_members(true);

        // Quotes in the report are not escaped, so they are treated as data.
        let reader = AsyncReaderBuilder::new()
            .delimiter(b'\t')
            .quoting(false)
            .flexible(true)
            .has_headers(false)
            .create_reader(decompressed);

        let mut rows = Self {
            reader: Some(reader),
            record: StringRecord::new(),
            skipped: 0,
        };
        rows.read_header().await?;
        Ok(rows)
    }

    /// A sequence that yields nothing, used when no report is published yet.
    pub fn empty() -> Self {
        Self {
            reader: None,
            record: StringRecord::new(),
            skipped: 0,
        }
    }

    async fn read_header(&mut self) -> Result<(), ReportDecodeError> {
        let Some(reader) = self.reader.as_mut() else {
            return Ok(());
        };
        match reader.read_record(&mut self.record).await {
            Ok(true) => Ok(()),
            Ok(false) => Err(ReportDecodeError::MissingHeader),
            Err(e) if is_stream_error(&e) => Err(ReportDecodeError::Stream(e)),
            // An unreadable header is still the header.
            Err(e) => {
                debug!(error = %e, "discarding unreadable sales report header");
                Ok(())
            }
        }
    }

    /// Returns the next well-formed row, `None` at end of stream.
    pub async fn next_row(&mut self) -> Result<Option<SalesReportRow>, ReportDecodeError> {
        let Some(reader) = self.reader.as_mut() else {
            return Ok(None);
        };
        loop {
            match reader.read_record(&mut self.record).await {
                Ok(true) => {
                    if let Some(row) = parse_row(&self.record) {
                        return Ok(Some(row));
                    }
                    debug!(
                        columns = self.record.len(),
                        "skipping short sales report line"
                    );
                    self.skipped += 1;
                }
                Ok(false) => {
                    self.reader = None;
                    if self.skipped > 0 {
                        warn!(skipped = self.skipped, "skipped malformed sales report lines");
                    }
                    return Ok(None);
                }
                Err(e) if is_stream_error(&e) => {
                    self.reader = None;
                    return Err(ReportDecodeError::Stream(e));
                }
                Err(e) => {
                    debug!(error = %e, "skipping unreadable sales report line");
                    self.skipped += 1;
                }
            }
        }
    }

    /// Number of lines dropped so far because they were short or unreadable.
    pub fn skipped_rows(&self) -> usize {
        self.skipped
    }

    /// Drains the remaining rows.
    pub async fn collect_rows(mut self) -> Result<Vec<SalesReportRow>, ReportDecodeError> {
        let mut rows = Vec::new();
        while let Some(row) = self.next_row().await? {
            rows.push(row);
        }
        Ok(rows)
    }
}

/// I/O failures come from the underlying byte stream or the decompressor;
/// everything else is confined to a single line.
fn is_stream_error(e: &csv_async::Error) -> bool {
    matches!(e.kind(), csv_async::ErrorKind::Io(_))
}

fn parse_row(record: &StringRecord) -> Option<SalesReportRow> {
    if record.len() < SALES_REPORT_MIN_COLUMNS {
        return None;
    }
    let field = |i: usize| record.get(i).unwrap_or_default().to_owned();

    Some(SalesReportRow {
        provider_code: field(COL_PROVIDER),
        sku: field(COL_SKU),
        title: field(COL_TITLE),
        product_type: field(COL_PRODUCT_TYPE),
        units: record
            .get(COL_UNITS)
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(0),
        proceeds: record
            .get(COL_PROCEEDS)
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(0.0),
        begin_date: field(COL_BEGIN_DATE),
        customer_currency: field(COL_CUSTOMER_CURRENCY),
        country_code: field(COL_COUNTRY_CODE),
        ..Default::default()
    })
}
