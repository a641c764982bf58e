//! TLS certificate domain entities.

pub mod model;

pub use model::{Certificate, CertificateHealth};
