use poem::{
    handler,
    web::{Data, Html, Json},
    Result,
};
use tracing::{debug, info};

use crate::{
    api::{
        internal_error,
        params::enquate_params::{EnquateForm, EnquateParams},
    },
    db::{opinion, Store},
    view::OpinionJson,
};

pub const SUBMITTED_FRAGMENT: &str = "<p>回答が送信されました。</p>";

#[handler]
pub async fn submit_enquate(
    form: EnquateForm,
    Data(store): Data<&Store>,
) -> Result<Html<&'static str>> {
    let params = EnquateParams::from_form(form);

    let saved = opinion::insert(store.conn(), &params.topic, &params.content)
        .await
        .map_err(internal_error)?;

    info!("opinion {} saved, topic={:?}", saved.id, saved.topic);

    Ok(Html(SUBMITTED_FRAGMENT))
}

#[handler]
pub async fn list_enquates(Data(store): Data<&Store>) -> Result<Json<Vec<OpinionJson>>> {
    let opinions = opinion::list_recent(store.conn())
        .await
        .map_err(internal_error)?;

    let body: Vec<OpinionJson> = opinions.iter().map(OpinionJson::from_model).collect();
    debug!("{} opinions listed as json", body.len());

    Ok(Json(body))
}
