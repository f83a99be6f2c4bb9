#![allow(dead_code)]

use serde::Deserialize;

/// Response of `GET /v1/vendors`. Only the fields needed to scope report
/// requests are modelled.
#[derive(Debug, Deserialize)]
pub(crate) struct VendorsResponseModel {
    pub(crate) data: Vec<VendorModel>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct VendorModel {
    pub(crate) id: String,
    pub(crate) attributes: VendorAttributesModel,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct VendorAttributesModel {
    /// Account identifier required by the `salesReports` filters.
    pub(crate) vendor_number: String,
}
