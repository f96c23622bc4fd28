use poem::{
    handler,
    web::{Data, Html},
    Result,
};
use tracing::debug;

use crate::{
    api::internal_error,
    db::{opinion, Store},
    view::{template, OpinionView},
};

#[handler]
pub fn index() -> Html<&'static str> {
    Html(template::render_index())
}

#[handler]
pub async fn result(Data(store): Data<&Store>) -> Result<Html<String>> {
    let opinions = opinion::list_recent(store.conn())
        .await
        .map_err(internal_error)?;

    let views: Vec<OpinionView> = opinions.iter().map(OpinionView::from_model).collect();
    debug!("{:?}", views);

    Ok(Html(template::render_list(&views)))
}
