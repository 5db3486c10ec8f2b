use async_trait::async_trait;
use axum::http::request::Parts;

/// Decision port for the external payment-verification collaborator.
///
/// The gateway itself performs no payment logic; it only asks whether a
/// request to the issuance endpoint may proceed. The real facilitator runs
/// out of process, so the default implementation lets everything through.
#[async_trait]
pub trait PaymentGate: Send + Sync {
    async fn allow(&self, parts: &Parts) -> bool;
}

pub struct AllowAll;

#[async_trait]
impl PaymentGate for AllowAll {
    async fn allow(&self, _parts: &Parts) -> bool {
        true
    }
}
