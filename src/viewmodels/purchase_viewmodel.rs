// ============================================================================
// PURCHASE VIEWMODEL - Handshake de envío de la compra
// ============================================================================
// SOLO lógica de negocio: valida el request, lo envía al billing endpoint e
// interpreta el indicador de éxito de la respuesta. Sin DOM.
// ============================================================================

use crate::error::SubmitError;
use crate::models::{BillingRequest, BillingResponse};
use crate::services::BillingClient;

/// ViewModel de compra - SOLO lógica de negocio
pub struct PurchaseViewModel {
    api_client: BillingClient,
}

impl PurchaseViewModel {
    pub fn new() -> Self {
        Self {
            api_client: BillingClient::new(),
        }
    }

    /// Con un cliente explícito (URL sustituible en tests)
    pub fn with_client(api_client: BillingClient) -> Self {
        Self { api_client }
    }

    /// Enviar la compra al billing endpoint.
    /// Un 2xx con `success: false` es rechazo de aplicación, no éxito.
    pub async fn submit_purchase(
        &self,
        request: &BillingRequest,
    ) -> Result<BillingResponse, SubmitError> {
        let response = self.api_client.record_transaction(request).await?;
        Self::check_success(response)
    }

    fn check_success(response: BillingResponse) -> Result<BillingResponse, SubmitError> {
        if response.success {
            Ok(response)
        } else {
            Err(SubmitError::Rejected(
                response
                    .message
                    .unwrap_or_else(|| "sin detalle del servidor".to_string()),
            ))
        }
    }
}

impl Default for PurchaseViewModel {
    fn default() -> Self {
        Self::new()
    }
}

/// Mensaje de cara al usuario por clase de fallo de envío
pub fn submit_failure_message(error: &SubmitError) -> String {
    match error {
        SubmitError::Rejected(detail) => format!("❌ Compra rechazada: {}", detail),
        SubmitError::Http { status, .. } => format!("❌ Error del servidor (HTTP {}).", status),
        SubmitError::Parse(_) => "❌ Respuesta del servidor ilegible.".to_string(),
        SubmitError::Network(_) => "🚫 Error de red o servidor no disponible.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_flag_true_passes_through() {
        let response = BillingResponse {
            success: true,
            message: None,
        };
        assert!(PurchaseViewModel::check_success(response).is_ok());
    }

    #[test]
    fn success_flag_false_becomes_rejection() {
        let response = BillingResponse {
            success: false,
            message: Some("stock insuficiente".to_string()),
        };
        assert_eq!(
            PurchaseViewModel::check_success(response),
            Err(SubmitError::Rejected("stock insuficiente".to_string()))
        );
    }

    #[test]
    fn rejection_without_message_still_carries_detail() {
        let response = BillingResponse {
            success: false,
            message: None,
        };
        match PurchaseViewModel::check_success(response) {
            Err(SubmitError::Rejected(detail)) => assert!(!detail.is_empty()),
            other => panic!("se esperaba Rejected, llegó {:?}", other),
        }
    }

    #[test]
    fn failure_messages_are_distinct_per_class() {
        let messages = [
            submit_failure_message(&SubmitError::Network("timeout".into())),
            submit_failure_message(&SubmitError::Http {
                status: 502,
                message: "Bad Gateway".into(),
            }),
            submit_failure_message(&SubmitError::Parse("eof".into())),
            submit_failure_message(&SubmitError::Rejected("sin stock".into())),
        ];

        for (i, a) in messages.iter().enumerate() {
            for b in messages.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
