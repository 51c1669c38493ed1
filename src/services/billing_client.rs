// ============================================================================
// BILLING CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP al billing endpoint.
// La URL base se inyecta al construir, para poder sustituirla en tests.
// ============================================================================

use crate::config::CONFIG;
use crate::error::SubmitError;
use crate::models::{BillingRequest, BillingResponse};
use gloo_net::http::Request;

/// Cliente del billing endpoint - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct BillingClient {
    base_url: String,
}

impl BillingClient {
    /// Cliente apuntando a la URL configurada para el entorno actual
    pub fn new() -> Self {
        Self::with_base_url(CONFIG.backend_url())
    }

    /// Cliente apuntando a una URL explícita
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL de la ruta de registro de transacciones
    pub fn transaction_url(&self) -> String {
        format!("{}/transactions/billingTransaction", self.base_url)
    }

    /// Registrar una transacción de compra
    pub async fn record_transaction(
        &self,
        request: &BillingRequest,
    ) -> Result<BillingResponse, SubmitError> {
        let url = self.transaction_url();

        log::info!(
            "💳 Registrando transacción: producto {} x{}",
            request.product_id,
            request.quantity
        );

        let response = Request::post(&url)
            .json(request)
            .map_err(|e| SubmitError::Parse(format!("Serialization error: {}", e)))?
            .send()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))?;

        if !response.ok() {
            let status = response.status();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(SubmitError::Http { status, message });
        }

        response
            .json::<BillingResponse>()
            .await
            .map_err(|e| SubmitError::Parse(e.to_string()))
    }
}

impl Default for BillingClient {
    fn default() -> Self {
        Self::new()
    }
}
