/// One line of a daily Sales Summary report.
///
/// `provider_country`, `developer`, `version` and `end_date` exist in the
/// report (columns 1, 3, 5 and 10) but are not mapped yet and stay empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SalesReportRow {
    pub provider_code: String,
    pub provider_country: String,
    pub sku: String,
    pub developer: String,
    pub title: String,
    pub version: String,
    /// "1" = free, "F1" = paid, "IA1" = in-app purchase, etc.
    pub product_type: String,
    /// Defaults to 0 when the column cannot be parsed. Refund lines carry
    /// negative values.
    pub units: i64,
    /// Amount actually paid out, in the proceeds currency. Defaults to 0.0
    /// when the column cannot be parsed.
    pub proceeds: f64,
    /// YYYY-MM-DD.
    pub begin_date: String,
    pub end_date: String,
    pub customer_currency: String,
    pub country_code: String,
}
