//! Throwaway transport identity for local HTTPS.
//!
//! Browsers only hand out the microphone in a secure context, so the server
//! terminates TLS with a short-lived self-signed certificate generated at
//! every startup.

use anyhow::{Context, Result};
use rcgen::{CertificateParams, DistinguishedName, DnType, KeyPair};
use std::net::{IpAddr, Ipv4Addr, UdpSocket};
use time::{Duration, OffsetDateTime};

/// Generate a self-signed certificate for `localhost`.
///
/// Returns (certificate, private key) as PEM strings.
pub fn generate_self_signed_cert(validity_days: i64) -> Result<(String, String)> {
    let mut params = CertificateParams::new(vec!["localhost".to_string()])
        .context("failed to build certificate parameters")?;

    let mut dn = DistinguishedName::new();
    dn.push(DnType::CommonName, "localhost");
    params.distinguished_name = dn;

    params.not_before = OffsetDateTime::now_utc();
    params.not_after = params.not_before + Duration::days(validity_days);

    let key_pair = KeyPair::generate().context("failed to generate certificate key pair")?;
    let cert = params
        .self_signed(&key_pair)
        .context("failed to self-sign certificate")?;

    Ok((cert.pem(), key_pair.serialize_pem()))
}

/// Best-effort outbound-route local IP, loopback on any failure.
///
/// Connecting a UDP socket never sends a packet; it only asks the kernel
/// which interface would route there.
pub fn local_ip() -> IpAddr {
    fn probe() -> std::io::Result<IpAddr> {
        let socket = UdpSocket::bind("0.0.0.0:0")?;
        socket.connect("8.8.8.8:80")?;
        Ok(socket.local_addr()?.ip())
    }

    probe().unwrap_or(IpAddr::V4(Ipv4Addr::LOCALHOST))
}
