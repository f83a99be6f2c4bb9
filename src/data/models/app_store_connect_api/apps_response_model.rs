#![allow(dead_code)]

use serde::Deserialize;

use super::common::{DocumentLinksModel, PagingInformationModel};

/// Response of `GET /v1/apps`:
/// https://developer.apple.com/documentation/appstoreconnectapi/appsresponse
#[derive(Debug, Deserialize)]
pub(crate) struct AppsResponseModel {
    pub(crate) data: Vec<AppModel>,
    pub(crate) links: Option<DocumentLinksModel>,
    pub(crate) meta: Option<PagingInformationModel>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AppModel {
    #[serde(rename = "type")]
    pub(crate) resource_type: String,
    pub(crate) id: String,
    pub(crate) attributes: AppAttributesModel,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AppAttributesModel {
    pub(crate) name: String,
    pub(crate) bundle_id: String,
    pub(crate) sku: String,
    pub(crate) primary_locale: String,
    #[serde(default)]
    pub(crate) is_orphaned: bool,
    pub(crate) content_rights_declaration: Option<String>,
}
