// src/core/net.rs

// Blocking HTTP(S) GET. One agent per process; redirects are followed
// (GitHub "raw" links bounce through a 302). Bodies are read to the end
// without a size cap; a full campus schedule can run past ten megabytes.

use std::io::Read;
use std::sync::OnceLock;
use std::time::Duration;

use ureq::{Agent, AgentBuilder};

use crate::config::consts::{HTTP_TIMEOUT_SECS, USER_AGENT};
use crate::error::LoadError;

static AGENT: OnceLock<Agent> = OnceLock::new();

fn agent() -> &'static Agent {
    AGENT.get_or_init(|| {
        AgentBuilder::new()
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()
    })
}

pub fn http_get(url: &str) -> Result<String, LoadError> {
    let http_err = |msg: String| LoadError::Http { url: s!(url), msg };

    logd!("Net: GET {}", url);
    let resp = agent().get(url).call().map_err(|e| http_err(e.to_string()))?;

    let status = resp.status();
    if !(200..300).contains(&status) {
        return Err(http_err(format!("unexpected status {status}")));
    }

    let mut body = String::new();
    resp.into_reader()
        .read_to_string(&mut body)
        .map_err(|e| http_err(e.to_string()))?;
    logd!("Net: {} → {} bytes", url, body.len());
    Ok(body)
}
