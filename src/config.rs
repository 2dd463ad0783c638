//! Runtime configuration from environment variables (with `.env` support in
//! dev via `dotenvy`, loaded by the binary entrypoint).

use std::net::SocketAddr;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

pub const ENV_BIND_ADDR: &str = "AVIS_BIND_ADDR";
pub const ENV_DEV_LOG: &str = "AVIS_DEV_LOG";

/// Listen address for the HTTP surface. Falls back to the default on a
/// missing or unparsable value.
pub fn bind_addr() -> SocketAddr {
    std::env::var(ENV_BIND_ADDR)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or_else(|| {
            DEFAULT_BIND_ADDR
                .parse()
                .expect("default bind address parses")
        })
}

/// Dev logging gate: AVIS_DEV_LOG=1 AND a dev environment (debug build or
/// APP_ENV in {local, development, dev}).
pub fn dev_logging_enabled() -> bool {
    let on = std::env::var(ENV_DEV_LOG).ok().as_deref() == Some("1");
    if !on {
        return false;
    }
    if cfg!(debug_assertions) {
        return true;
    }
    matches!(
        std::env::var("APP_ENV")
            .unwrap_or_default()
            .to_ascii_lowercase()
            .as_str(),
        "local" | "development" | "dev"
    )
}

/// Short anonymized id for a feedback text: first 6 bytes of its SHA-256,
/// hex-encoded. Diagnostics only; raw text is never logged.
pub fn anon_hash(text: &str) -> String {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    let digest = hasher.finalize();
    let mut out = String::with_capacity(12);
    for b in digest.iter().take(6) {
        use std::fmt::Write as _;
        let _ = write!(&mut out, "{:02x}", b);
    }
    out
}
