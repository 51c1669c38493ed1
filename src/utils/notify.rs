// ============================================================================
// NOTIFY - Mensajes síncronos de cara al usuario
// ============================================================================

/// Mostrar un alert nativo. Si no hay window (o el alert falla), el mensaje
/// queda al menos en el log.
pub fn alert(message: &str) {
    match web_sys::window() {
        Some(win) => {
            if win.alert_with_message(message).is_err() {
                log::warn!("⚠️ [NOTIFY] No se pudo mostrar alert: {}", message);
            }
        }
        None => log::warn!("⚠️ [NOTIFY] Sin window para alert: {}", message),
    }
}
