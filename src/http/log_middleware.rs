use std::time::Instant;

use http::Extensions;
use log::{debug, warn};
use reqwest::{Request, Response};
use reqwest_middleware::{Middleware, Next, Result};

pub struct LogMiddleware;

#[async_trait::async_trait]
impl Middleware for LogMiddleware {
    async fn handle(
        &self,
        req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> Result<Response> {
        let method = req.method().clone();
        let url = req.url().to_string();
        let started = Instant::now();
        debug!("--> {method} {url}");

        match next.run(req, extensions).await {
            Ok(response) => {
                let status = response.status();
                let elapsed = started.elapsed().as_millis();
                if status.is_success() {
                    debug!("<-- {status} {url} ({elapsed} ms)");
                } else {
                    warn!("<-- {status} {url} ({elapsed} ms)");
                }
                Ok(response)
            }
            Err(err) => {
                warn!("<-- failed {method} {url}: {err}");
                Err(err)
            }
        }
    }
}
