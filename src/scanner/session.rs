// ============================================================================
// SCANNER SESSION - Máquina de estados de la sesión del decodificador
// ============================================================================
// Invariante: como mucho UNA sesión activa. Un nuevo arranque solo puede
// partir de Idle; las transiciones están guardadas en vez de usar flags
// booleanos sueltos. Genérica sobre el handle para poder testearla fuera
// del navegador.
// ============================================================================

use thiserror::Error;

/// Fase observable de la sesión
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScannerPhase {
    Idle,
    Starting,
    Running,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    #[error("ya hay una sesión de scanner activa (fase {0:?})")]
    AlreadyActive(ScannerPhase),
}

/// Sesión del scanner: ausente, arrancando, o corriendo con su handle
#[derive(Debug)]
pub enum ScannerSession<H> {
    Idle,
    Starting,
    Running(H),
}

impl<H> ScannerSession<H> {
    pub fn new() -> Self {
        ScannerSession::Idle
    }

    pub fn phase(&self) -> ScannerPhase {
        match self {
            ScannerSession::Idle => ScannerPhase::Idle,
            ScannerSession::Starting => ScannerPhase::Starting,
            ScannerSession::Running(_) => ScannerPhase::Running,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, ScannerSession::Idle)
    }

    pub fn is_running(&self) -> bool {
        matches!(self, ScannerSession::Running(_))
    }

    /// Idle → Starting. Cualquier otra fase es un arranque ilegal.
    pub fn begin_start(&mut self) -> Result<(), SessionError> {
        match self {
            ScannerSession::Idle => {
                *self = ScannerSession::Starting;
                Ok(())
            }
            _ => Err(SessionError::AlreadyActive(self.phase())),
        }
    }

    /// Starting → Running(handle). Si la sesión fue liberada mientras el
    /// arranque estaba en vuelo, devuelve el handle para que el caller lo
    /// detenga de inmediato.
    pub fn confirm_started(&mut self, handle: H) -> Result<(), H> {
        match self {
            ScannerSession::Starting => {
                *self = ScannerSession::Running(handle);
                Ok(())
            }
            _ => Err(handle),
        }
    }

    /// Starting → Idle tras un fallo de arranque
    pub fn start_failed(&mut self) {
        if matches!(self, ScannerSession::Starting) {
            *self = ScannerSession::Idle;
        }
    }

    /// Liberar la sesión (→ Idle). El handle sale de la máquina de estados
    /// exactamente una vez: la segunda llamada devuelve None.
    pub fn release(&mut self) -> Option<H> {
        match std::mem::replace(self, ScannerSession::Idle) {
            ScannerSession::Running(handle) => Some(handle),
            _ => None,
        }
    }
}

impl<H> Default for ScannerSession<H> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_lifecycle_idle_starting_running_idle() {
        let mut session: ScannerSession<&str> = ScannerSession::new();
        assert_eq!(session.phase(), ScannerPhase::Idle);

        session.begin_start().unwrap();
        assert_eq!(session.phase(), ScannerPhase::Starting);

        session.confirm_started("decoder").unwrap();
        assert!(session.is_running());

        assert_eq!(session.release(), Some("decoder"));
        assert!(session.is_idle());
    }

    #[test]
    fn start_is_illegal_unless_idle() {
        let mut session: ScannerSession<()> = ScannerSession::new();
        session.begin_start().unwrap();
        assert_eq!(
            session.begin_start(),
            Err(SessionError::AlreadyActive(ScannerPhase::Starting))
        );

        session.confirm_started(()).unwrap();
        assert_eq!(
            session.begin_start(),
            Err(SessionError::AlreadyActive(ScannerPhase::Running))
        );
    }

    #[test]
    fn release_yields_the_handle_exactly_once() {
        let mut session: ScannerSession<u32> = ScannerSession::new();
        session.begin_start().unwrap();
        session.confirm_started(7).unwrap();

        assert_eq!(session.release(), Some(7));
        assert_eq!(session.release(), None);
        assert!(session.is_idle());
    }

    #[test]
    fn confirm_after_release_returns_the_handle_back() {
        // Teardown durante el arranque: la sesión vuelve a Idle y el handle
        // recién creado se devuelve al caller para que lo detenga.
        let mut session: ScannerSession<u32> = ScannerSession::new();
        session.begin_start().unwrap();
        assert_eq!(session.release(), None); // Starting → Idle, sin handle

        assert_eq!(session.confirm_started(9), Err(9));
        assert!(session.is_idle());
    }

    #[test]
    fn start_failed_only_applies_while_starting() {
        let mut session: ScannerSession<u32> = ScannerSession::new();
        session.begin_start().unwrap();
        session.start_failed();
        assert!(session.is_idle());

        // Desde Running no degrada la sesión
        session.begin_start().unwrap();
        session.confirm_started(3).unwrap();
        session.start_failed();
        assert!(session.is_running());
    }
}
