//! REST server settings resolved at startup.

use axum::http::HeaderValue;
use std::net::SocketAddr;

pub const ENV_REST_ADDR: &str = "BOOKCAT_REST_ADDR";
pub const ENV_CORS_ORIGIN: &str = "BOOKCAT_CORS_ORIGIN";
pub const ENV_MAX_UPLOAD_BYTES: &str = "BOOKCAT_MAX_UPLOAD_BYTES";

pub const DEFAULT_REST_ADDR: &str = "0.0.0.0:3000";
/// 10 MiB.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, thiserror::Error)]
pub enum RestConfigError {
    #[error("BOOKCAT_REST_ADDR is not a socket address: '{0}'")]
    InvalidAddr(String),
    #[error("BOOKCAT_CORS_ORIGIN is not a valid origin: '{0}'")]
    InvalidCorsOrigin(String),
    #[error("BOOKCAT_MAX_UPLOAD_BYTES must be a positive integer, got '{0}'")]
    InvalidUploadLimit(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RestConfig {
    pub addr: SocketAddr,
    /// When set, only this origin may make credentialed cross-origin calls. Otherwise CORS is
    /// permissive.
    pub cors_origin: Option<HeaderValue>,
    pub max_upload_bytes: usize,
}

impl RestConfig {
    pub fn from_lookup<F>(lookup: F) -> Result<Self, RestConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let addr_raw = value(ENV_REST_ADDR).unwrap_or_else(|| DEFAULT_REST_ADDR.into());
        let addr = addr_raw
            .parse()
            .map_err(|_| RestConfigError::InvalidAddr(addr_raw.clone()))?;

        let max_upload_bytes = match value(ENV_MAX_UPLOAD_BYTES) {
            Some(raw) => match raw.parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => return Err(RestConfigError::InvalidUploadLimit(raw)),
            },
            None => DEFAULT_MAX_UPLOAD_BYTES,
        };

        let cors_origin = value(ENV_CORS_ORIGIN)
            .map(|raw| {
                HeaderValue::from_str(&raw).map_err(|_| RestConfigError::InvalidCorsOrigin(raw))
            })
            .transpose()?;

        Ok(Self {
            addr,
            cors_origin,
            max_upload_bytes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = RestConfig::from_lookup(|_| None).unwrap();

        assert_eq!(cfg.addr, "0.0.0.0:3000".parse().unwrap());
        assert_eq!(cfg.cors_origin, None);
        assert_eq!(cfg.max_upload_bytes, 10_485_760);
    }

    #[test]
    fn test_overrides() {
        let cfg = RestConfig::from_lookup(|name| match name {
            ENV_REST_ADDR => Some("127.0.0.1:8080".into()),
            ENV_CORS_ORIGIN => Some("http://localhost:5173".into()),
            ENV_MAX_UPLOAD_BYTES => Some("1024".into()),
            _ => None,
        })
        .unwrap();

        assert_eq!(cfg.addr.port(), 8080);
        assert_eq!(
            cfg.cors_origin,
            Some(HeaderValue::from_static("http://localhost:5173"))
        );
        assert_eq!(cfg.max_upload_bytes, 1024);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let bad_addr = RestConfig::from_lookup(|name| {
            (name == ENV_REST_ADDR).then(|| "localhost".to_string())
        });
        assert!(matches!(bad_addr, Err(RestConfigError::InvalidAddr(_))));

        let bad_origin = RestConfig::from_lookup(|name| {
            (name == ENV_CORS_ORIGIN).then(|| "http://bad\norigin".to_string())
        });
        assert!(matches!(
            bad_origin,
            Err(RestConfigError::InvalidCorsOrigin(_))
        ));

        for limit in ["0", "-5", "ten"] {
            let bad_limit = RestConfig::from_lookup(|name| {
                (name == ENV_MAX_UPLOAD_BYTES).then(|| limit.to_string())
            });
            assert!(matches!(
                bad_limit,
                Err(RestConfigError::InvalidUploadLimit(_))
            ));
        }
    }
}
