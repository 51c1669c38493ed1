// ============================================================================
// SCANNER MODULE - Ciclo de vida del decodificador QR
// ============================================================================

pub mod controller;
pub mod html5_qrcode;
pub mod session;

pub use controller::{start_scanner, stop_scanner, SCANNER_VIEWPORT_ID};
pub use html5_qrcode::Html5Qrcode;
pub use session::{ScannerPhase, ScannerSession, SessionError};
