pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod app_store_connect_api_datasource;
        pub(crate) mod authenticated_transport;
        pub(crate) mod credential_issuer;
    }
    pub(crate) mod decoders {
        pub(crate) mod sales_report_decoder;
    }
    pub(crate) mod models {
        pub(crate) mod app_store_connect_api {
            pub(crate) mod apps_response_model;
            pub(crate) mod common;
            pub(crate) mod vendors_response_model;
        }
    }
    pub(crate) mod repositories {
        pub(crate) mod app_store_connect_repository_impl;
    }
}

pub mod domain {
    pub mod entities {
        pub mod app;
        pub mod sales_report_row;
    }
    pub mod repositories {
        pub mod app_store_connect_repository;
    }
}

mod constants;
pub mod errors;
pub mod secrets;
pub mod util;

pub use data::{
    datasources::app_store_connect_api_datasource::ReportBody,
    decoders::sales_report_decoder::SalesReportRows,
};
