#![allow(dead_code)]

use serde::Deserialize;

/// https://developer.apple.com/documentation/appstoreconnectapi/pageddocumentlinks
#[derive(Debug, Deserialize)]
pub(crate) struct DocumentLinksModel {
    #[serde(rename = "self")]
    pub(crate) self_link: String,
    pub(crate) next: Option<String>,
}

/// https://developer.apple.com/documentation/appstoreconnectapi/paginginformation
#[derive(Debug, Deserialize)]
pub(crate) struct PagingInformationModel {
    pub(crate) paging: PagingModel,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PagingModel {
    pub(crate) total: u32,
    pub(crate) limit: u32,
}
