// ============================================================================
// ERROR - Taxonomía de errores de la aplicación
// ============================================================================
// Cada clase recuperable tiene su mensaje de cara al usuario (Display).
// Nada se reintenta automáticamente: el control vuelve siempre al usuario.
// ============================================================================

use thiserror::Error;

/// Errores de formato del payload decodificado por el scanner
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("el texto decodificado no es JSON válido: {0}")]
    InvalidJson(String),

    #[error("el payload no contiene un campo productId válido")]
    MissingProductId,
}

/// Errores de validación del borrador de compra (antes de cualquier request)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DraftError {
    #[error("faltan campos obligatorios: producto, cantidad y precio")]
    MissingFields,

    #[error("la cantidad debe ser un entero positivo: {0}")]
    InvalidQuantity(String),

    #[error("el precio debe ser un decimal no negativo: {0}")]
    InvalidPrice(String),
}

/// Errores del envío al billing endpoint, uno por clase de fallo
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("error de red o servidor no disponible: {0}")]
    Network(String),

    #[error("el servidor respondió HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("respuesta del servidor ilegible: {0}")]
    Parse(String),

    #[error("el servidor rechazó la transacción: {0}")]
    Rejected(String),
}
