//! Secure channel establishment for the GigaChat gRPC host.
//!
//! The API is fronted by a certificate authority that is not in the usual
//! system roots, so callers supply the trust anchor explicitly. Trust is a
//! scoped value passed into the factory; server identity verification stays
//! strict, with only the expected domain name overridable for hosts dialed
//! by address.

use std::path::{Path, PathBuf};
use std::time::Duration;

use thiserror::Error;
use tonic::transport::{Certificate, Channel, ClientTlsConfig, Endpoint};

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("failed to read certificate {path}: {source}")]
    CertificateRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid endpoint address {address}: {reason}")]
    InvalidEndpoint { address: String, reason: String },

    #[error("gRPC transport error: {0}")]
    Grpc(#[from] tonic::transport::Error),
}

/// A PEM certificate used as the TLS trust root for the channel.
#[derive(Debug, Clone)]
pub struct TrustAnchor {
    certificate: Certificate,
}

impl TrustAnchor {
    /// Read a PEM certificate from disk. The file is read once, up front;
    /// an unreadable path fails here rather than at connect time.
    pub fn from_pem_file(path: impl AsRef<Path>) -> Result<Self, TransportError> {
        let path = path.as_ref();
        let pem = std::fs::read(path).map_err(|source| TransportError::CertificateRead {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), "loaded TLS trust anchor");
        Ok(Self::from_pem(pem))
    }

    pub fn from_pem(pem: impl AsRef<[u8]>) -> Self {
        Self {
            certificate: Certificate::from_pem(pem),
        }
    }
}

/// Channel-level knobs beyond the trust anchor.
#[derive(Debug, Clone, Default)]
pub struct ChannelOptions {
    /// Expected server name when it differs from the dialed host.
    pub domain_name: Option<String>,
    /// Connect and per-request deadline applied at the endpoint.
    pub timeout: Option<Duration>,
}

/// Establish a TLS channel to `api_host` (`host[:port]`, dialed as https).
pub async fn connect(
    api_host: &str,
    trust: &TrustAnchor,
    options: &ChannelOptions,
) -> Result<Channel, TransportError> {
    let address = format!("https://{api_host}");

    let mut tls = ClientTlsConfig::new().ca_certificate(trust.certificate.clone());
    if let Some(domain) = &options.domain_name {
        tls = tls.domain_name(domain.clone());
    }

    let mut endpoint =
        Endpoint::from_shared(address.clone()).map_err(|e| TransportError::InvalidEndpoint {
            address,
            reason: e.to_string(),
        })?;
    endpoint = endpoint.tls_config(tls)?;
    if let Some(timeout) = options.timeout {
        endpoint = endpoint.timeout(timeout).connect_timeout(timeout);
    }

    let channel = endpoint.connect().await?;
    tracing::debug!(host = api_host, "gRPC channel established");
    Ok(channel)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_certificate_reports_path() {
        let err = TrustAnchor::from_pem_file("/definitely/not/there.pem").unwrap_err();
        match err {
            TransportError::CertificateRead { path, .. } => {
                assert_eq!(path, PathBuf::from("/definitely/not/there.pem"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
