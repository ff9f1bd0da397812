use http::Extensions;
use reqwest::header::{HeaderName, HeaderValue, USER_AGENT};
use reqwest::{Request, Response};
use reqwest_middleware::{Middleware, Next, Result};

use crate::http::random_headers::{
    DEFAULT_PLATFORM, DEFAULT_USER_AGENT, PlatformInfo, get_random_platform_info,
    get_random_user_agent,
};

pub const SEC_CH_UA_PLATFORM: HeaderName = HeaderName::from_static("sec-ch-ua-platform");

/// Sets the User-Agent and its matching platform hint on every outgoing request.
pub struct UserAgentMiddleware {
    pub rotate: bool,
}

impl UserAgentMiddleware {
    fn identity(&self) -> (PlatformInfo, String) {
        if self.rotate {
            let platform = get_random_platform_info();
            let user_agent = get_random_user_agent(&platform);
            (platform, user_agent)
        } else {
            (DEFAULT_PLATFORM.clone(), DEFAULT_USER_AGENT.to_string())
        }
    }
}

#[async_trait::async_trait]
impl Middleware for UserAgentMiddleware {
    async fn handle(
        &self,
        mut req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> Result<Response> {
        let (platform, user_agent) = self.identity();
        match HeaderValue::from_str(&user_agent) {
            Ok(value) => {
                req.headers_mut().insert(USER_AGENT, value);
            }
            Err(err) => log::warn!("invalid user agent {user_agent:?}: {err}"),
        }
        // client hints carry the platform as a quoted string
        let hint = format!("\"{}\"", platform.sec_ch_ua_platform);
        if let Ok(value) = HeaderValue::from_str(&hint) {
            req.headers_mut().insert(SEC_CH_UA_PLATFORM, value);
        }
        next.run(req, extensions).await
    }
}
