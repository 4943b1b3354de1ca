use crate::domain::payment::PaymentRequest;
use crate::error::{Result, SiteDataError};
use std::io::Read;

/// Reads payment requests from a CSV source.
///
/// Expects a `payment, amount` header. Whitespace is trimmed and record
/// lengths are flexible, so a malformed row yields an error for that row
/// only.
pub struct PaymentRequestReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> PaymentRequestReader<R> {
    /// Creates a new `PaymentRequestReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes requests.
    pub fn requests(self) -> impl Iterator<Item = Result<PaymentRequest>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(SiteDataError::from))
    }
}
