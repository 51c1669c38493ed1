// ============================================================================
// CONFIG - Configuración de la aplicación
// ============================================================================
// Los valores se fijan en tiempo de compilación via option_env! (cargados
// desde .env por build.rs). La URL del billing endpoint NUNCA se usa
// directamente desde aquí en los servicios: se inyecta al construir el
// cliente, para poder sustituirla en tests.
// ============================================================================

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url_development: String,
    pub backend_url_production: String,
    pub environment: String,
    pub enable_logging: bool,
    pub scanner_config: ScannerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScannerConfig {
    /// Frames por segundo que procesa el decodificador
    pub fps: u32,
    /// Lado (px) de la región cuadrada de decodificación
    pub qrbox_size: u32,
    /// Delay (ms) antes de inicializar el decoder, para que el DOM esté listo
    pub init_delay_ms: u32,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            fps: 10,
            qrbox_size: 250,
            init_delay_ms: 100,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url_development: "http://localhost:3000".to_string(),
            backend_url_production: "https://billing.example.com/api".to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            scanner_config: ScannerConfig::default(),
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self {
            backend_url_development: option_env!("BACKEND_URL_DEVELOPMENT")
                .unwrap_or("http://localhost:3000")
                .to_string(),
            backend_url_production: option_env!("BACKEND_URL_PRODUCTION")
                .unwrap_or("https://billing.example.com/api")
                .to_string(),
            environment: option_env!("ENVIRONMENT").unwrap_or("development").to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true")
                .parse()
                .unwrap_or(true),
            scanner_config: ScannerConfig {
                fps: option_env!("SCANNER_FPS").unwrap_or("10").parse().unwrap_or(10),
                qrbox_size: option_env!("SCANNER_QRBOX_SIZE")
                    .unwrap_or("250")
                    .parse()
                    .unwrap_or(250),
                init_delay_ms: option_env!("SCANNER_INIT_DELAY_MS")
                    .unwrap_or("100")
                    .parse()
                    .unwrap_or(100),
            },
        }
    }

    /// Obtiene la URL del backend según el entorno actual
    pub fn backend_url(&self) -> &str {
        match self.environment.as_str() {
            "production" => &self.backend_url_production,
            _ => &self.backend_url_development,
        }
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
