// ============================================================================
// PURCHASE MODELS - Borrador de compra y contrato de wire con el backend
// ============================================================================

use crate::error::{DecodeError, DraftError};
use serde::{Deserialize, Serialize};

/// Borrador de compra en curso: escaneo + entrada del usuario.
/// Cantidad y precio se guardan como texto crudo hasta la validación.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PurchaseDraft {
    pub product_id: String,
    pub quantity: String,
    pub selling_price: String,
}

impl PurchaseDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Los tres campos están presentes
    pub fn is_complete(&self) -> bool {
        !self.product_id.trim().is_empty()
            && !self.quantity.trim().is_empty()
            && !self.selling_price.trim().is_empty()
    }

    /// Volver al estado inicial (tras un envío exitoso)
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Validar y convertir al request de billing.
    /// Cualquier violación aborta SIN request de red.
    pub fn to_request(&self) -> Result<BillingRequest, DraftError> {
        if !self.is_complete() {
            return Err(DraftError::MissingFields);
        }

        let quantity: u32 = self
            .quantity
            .trim()
            .parse()
            .map_err(|_| DraftError::InvalidQuantity(self.quantity.clone()))?;
        if quantity == 0 {
            return Err(DraftError::InvalidQuantity(self.quantity.clone()));
        }

        let selling_price: f64 = self
            .selling_price
            .trim()
            .parse()
            .map_err(|_| DraftError::InvalidPrice(self.selling_price.clone()))?;
        if selling_price < 0.0 || !selling_price.is_finite() {
            return Err(DraftError::InvalidPrice(self.selling_price.clone()));
        }

        Ok(BillingRequest {
            product_id: self.product_id.trim().to_string(),
            quantity,
            selling_price,
        })
    }
}

/// Payload esperado dentro del código QR.
/// Se parsea a mano (via Value) para distinguir "no es JSON" de
/// "falta productId"; en el wire el campo es camelCase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrPayload {
    pub product_id: String,
}

impl QrPayload {
    /// Parsear el texto decodificado. Debe ser un objeto JSON con un campo
    /// `productId` string no vacío; cualquier otra forma es error de formato.
    pub fn parse(text: &str) -> Result<Self, DecodeError> {
        let value: serde_json::Value =
            serde_json::from_str(text).map_err(|e| DecodeError::InvalidJson(e.to_string()))?;

        match value.get("productId").and_then(|v| v.as_str()) {
            Some(id) if !id.trim().is_empty() => Ok(Self {
                product_id: id.to_string(),
            }),
            _ => Err(DecodeError::MissingProductId),
        }
    }
}

/// Request al billing endpoint (camelCase en el wire)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingRequest {
    pub product_id: String,
    pub quantity: u32,
    pub selling_price: f64,
}

/// Respuesta del billing endpoint con su indicador de éxito
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(product: &str, quantity: &str, price: &str) -> PurchaseDraft {
        PurchaseDraft {
            product_id: product.to_string(),
            quantity: quantity.to_string(),
            selling_price: price.to_string(),
        }
    }

    #[test]
    fn parse_extracts_product_id() {
        let payload = QrPayload::parse(r#"{"productId":"SKU123"}"#).unwrap();
        assert_eq!(payload.product_id, "SKU123");
    }

    #[test]
    fn parse_rejects_non_json() {
        assert!(matches!(
            QrPayload::parse("not-json"),
            Err(DecodeError::InvalidJson(_))
        ));
    }

    #[test]
    fn parse_rejects_missing_or_non_string_product_id() {
        assert_eq!(
            QrPayload::parse(r#"{"product":"SKU123"}"#),
            Err(DecodeError::MissingProductId)
        );
        assert_eq!(
            QrPayload::parse(r#"{"productId":42}"#),
            Err(DecodeError::MissingProductId)
        );
        assert_eq!(
            QrPayload::parse(r#"{"productId":""}"#),
            Err(DecodeError::MissingProductId)
        );
    }

    #[test]
    fn to_request_parses_quantity_and_price() {
        let request = draft("SKU123", "4", "9.99").to_request().unwrap();
        assert_eq!(
            request,
            BillingRequest {
                product_id: "SKU123".to_string(),
                quantity: 4,
                selling_price: 9.99,
            }
        );
    }

    #[test]
    fn request_serializes_with_camel_case_wire_names() {
        let request = draft("SKU123", "4", "9.99").to_request().unwrap();
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "productId": "SKU123",
                "quantity": 4,
                "sellingPrice": 9.99,
            })
        );
    }

    #[test]
    fn incomplete_draft_never_builds_a_request() {
        assert_eq!(
            draft("", "4", "9.99").to_request(),
            Err(DraftError::MissingFields)
        );
        assert_eq!(
            draft("SKU123", "", "9.99").to_request(),
            Err(DraftError::MissingFields)
        );
        assert_eq!(
            draft("SKU123", "4", "  ").to_request(),
            Err(DraftError::MissingFields)
        );
    }

    #[test]
    fn quantity_must_be_positive_integer() {
        assert!(matches!(
            draft("SKU123", "0", "9.99").to_request(),
            Err(DraftError::InvalidQuantity(_))
        ));
        assert!(matches!(
            draft("SKU123", "-1", "9.99").to_request(),
            Err(DraftError::InvalidQuantity(_))
        ));
        assert!(matches!(
            draft("SKU123", "dos", "9.99").to_request(),
            Err(DraftError::InvalidQuantity(_))
        ));
    }

    #[test]
    fn price_must_be_non_negative_decimal() {
        assert!(matches!(
            draft("SKU123", "4", "-0.5").to_request(),
            Err(DraftError::InvalidPrice(_))
        ));
        assert!(matches!(
            draft("SKU123", "4", "caro").to_request(),
            Err(DraftError::InvalidPrice(_))
        ));
        // Precio cero es válido (no negativo)
        assert!(draft("SKU123", "4", "0").to_request().is_ok());
    }

    #[test]
    fn clear_resets_every_field() {
        let mut d = draft("SKU123", "4", "9.99");
        d.clear();
        assert_eq!(d, PurchaseDraft::default());
        assert!(!d.is_complete());
    }

    #[test]
    fn response_success_flag_deserializes_with_and_without_message() {
        let ok: BillingResponse = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert!(ok.success);
        assert_eq!(ok.message, None);

        let rejected: BillingResponse =
            serde_json::from_str(r#"{"success":false,"message":"stock insuficiente"}"#).unwrap();
        assert!(!rejected.success);
        assert_eq!(rejected.message.as_deref(), Some("stock insuficiente"));
    }
}
