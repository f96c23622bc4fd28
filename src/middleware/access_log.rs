use poem::{Endpoint, IntoResponse, Middleware, Request, Response, Result};
use tracing::{debug, error};

/// Logs method, path and status of every request.
pub struct AccessLog;

impl<E: Endpoint> Middleware<E> for AccessLog {
    type Output = AccessLogEndpoint<E>;

    fn transform(&self, ep: E) -> Self::Output {
        AccessLogEndpoint(ep)
    }
}

pub struct AccessLogEndpoint<E>(pub E);

impl<E: Endpoint> Endpoint for AccessLogEndpoint<E> {
    type Output = Response;

    async fn call(&self, req: Request) -> Result<Self::Output> {
        let method = req.method().clone();
        let path = req.uri().path().to_string();

        match self.0.call(req).await {
            Ok(resp) => {
                let resp = resp.into_response();
                debug!("{} {} -> {}", method, path, resp.status());
                Ok(resp)
            }
            Err(err) if err.status().is_server_error() => {
                error!("{} {} -> {}", method, path, err.status());
                Err(err)
            }
            Err(err) => {
                debug!("{} {} -> {}", method, path, err.status());
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use poem::{handler, http::StatusCode, test::TestClient, EndpointExt, Error};

    use super::*;

    #[handler]
    fn ok() -> &'static str {
        "ok"
    }

    #[handler]
    fn fail() -> Result<&'static str> {
        Err(Error::from_status(StatusCode::NOT_FOUND))
    }

    #[tokio::test]
    async fn passes_responses_through() {
        let cli = TestClient::new(ok.with(AccessLog));
        let resp = cli.get("/").send().await;
        resp.assert_status_is_ok();
        resp.assert_text("ok").await;
    }

    #[handler]
    fn broken() -> Result<&'static str> {
        Err(Error::from_status(StatusCode::INTERNAL_SERVER_ERROR))
    }

    #[tokio::test]
    async fn passes_server_errors_through() {
        let cli = TestClient::new(broken.with(AccessLog));
        cli.get("/")
            .send()
            .await
            .assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn passes_errors_through() {
        let cli = TestClient::new(fail.with(AccessLog));
        cli.get("/").send().await.assert_status(StatusCode::NOT_FOUND);
    }
}
