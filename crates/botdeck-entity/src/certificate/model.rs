//! TLS certificate record and derived lifecycle health.
//!
//! Display only: issuance and renewal (ACME) belong to an out-of-scope
//! collaborator. The dashboard derives health from the stored expiry.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use botdeck_core::types::id::CertificateId;

/// Days remaining at which a certificate is flagged as expiring soon.
const WARNING_DAYS: i64 = 30;
/// Days remaining at which a certificate is flagged as critical.
const CRITICAL_DAYS: i64 = 7;

/// A TLS certificate protecting a webhook domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certificate {
    /// Unique certificate record identifier.
    pub id: CertificateId,
    /// Domain the certificate covers.
    pub domain: String,
    /// Issuing authority, e.g. "Let's Encrypt".
    pub issuer: String,
    /// Start of the validity window.
    pub issued_at: DateTime<Utc>,
    /// End of the validity window.
    pub expires_at: DateTime<Utc>,
    /// Whether the renewal collaborator is expected to renew this
    /// certificate automatically.
    pub auto_renew: bool,
}

/// Lifecycle health derived from a certificate's expiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum CertificateHealth {
    /// More than 30 days remaining.
    Valid { days_remaining: i64 },
    /// 30 days or fewer remaining.
    ExpiringSoon { days_remaining: i64 },
    /// 7 days or fewer remaining.
    Critical { days_remaining: i64 },
    /// Validity window has ended.
    Expired,
}

impl Certificate {
    /// Whole days until expiry, rounded up; zero or negative once expired.
    pub fn days_until_expiry(&self, now: DateTime<Utc>) -> i64 {
        let seconds = (self.expires_at - now).num_seconds();
        if seconds <= 0 {
            return seconds / 86_400;
        }
        seconds.div_euclid(86_400) + i64::from(seconds.rem_euclid(86_400) > 0)
    }

    /// Derive lifecycle health at the given instant.
    pub fn health(&self, now: DateTime<Utc>) -> CertificateHealth {
        let days_remaining = self.days_until_expiry(now);
        if days_remaining <= 0 {
            CertificateHealth::Expired
        } else if days_remaining <= CRITICAL_DAYS {
            CertificateHealth::Critical { days_remaining }
        } else if days_remaining <= WARNING_DAYS {
            CertificateHealth::ExpiringSoon { days_remaining }
        } else {
            CertificateHealth::Valid { days_remaining }
        }
    }
}
