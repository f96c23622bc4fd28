use std::path::Path;

use poem::{
    endpoint::StaticFilesEndpoint,
    get,
    http::StatusCode,
    middleware::{CatchPanic, SetHeader},
    post, Endpoint, EndpointExt, Error, Route,
};
use tracing::error;

use crate::{db::Store, middleware::AccessLog};

pub mod enquate;
pub mod page;
pub mod params;

/// Logs `err` and hides it behind a bare 500.
pub fn internal_error(err: anyhow::Error) -> Error {
    error!("{:?}", err);
    Error::from_status(StatusCode::INTERNAL_SERVER_ERROR)
}

fn cors_headers() -> SetHeader {
    SetHeader::new()
        .overriding("Access-Control-Allow-Origin", "*")
        .overriding(
            "Access-Control-Allow-Headers",
            "Origin, X-Requested-With, Content-Type, Accept, Authorization",
        )
}

pub fn build_app(store: Store, static_dir: &Path) -> impl Endpoint {
    Route::new()
        .at("/", get(page::index))
        .at(
            "/enquates",
            post(enquate::submit_enquate).get(enquate::list_enquates.with(cors_headers())),
        )
        .at("/result", get(page::result))
        .nest("/static", StaticFilesEndpoint::new(static_dir))
        .with(AccessLog)
        .data(store)
        .with(CatchPanic::new())
}
