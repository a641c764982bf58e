//! Aggregate SSL certificate health for the webhook settings view.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use botdeck_entity::certificate::{Certificate, CertificateHealth};

/// Counters over a bot's certificates, bucketed by health.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CertificateReport {
    pub total: usize,
    pub valid: usize,
    pub expiring_soon: usize,
    pub critical: usize,
    pub expired: usize,
    pub auto_renew_enabled: usize,
}

impl CertificateReport {
    pub fn assess(certificates: &[Certificate], now: DateTime<Utc>) -> Self {
        let mut report = CertificateReport {
            total: certificates.len(),
            ..CertificateReport::default()
        };
        for cert in certificates {
            match cert.health(now) {
                CertificateHealth::Valid { .. } => report.valid += 1,
                CertificateHealth::ExpiringSoon { .. } => report.expiring_soon += 1,
                CertificateHealth::Critical { .. } => report.critical += 1,
                CertificateHealth::Expired => report.expired += 1,
            }
            if cert.auto_renew {
                report.auto_renew_enabled += 1;
            }
        }
        report
    }

    /// Whether any certificate needs operator attention.
    pub fn has_warnings(&self) -> bool {
        self.expiring_soon + self.critical + self.expired > 0
    }
}

/// Certificates that are expiring, critical or expired, worst first.
pub fn needing_attention(
    certificates: &[Certificate],
    now: DateTime<Utc>,
) -> Vec<&Certificate> {
    let mut flagged: Vec<&Certificate> = certificates
        .iter()
        .filter(|cert| !matches!(cert.health(now), CertificateHealth::Valid { .. }))
        .collect();
    flagged.sort_by_key(|cert| cert.days_until_expiry(now));
    flagged
}
