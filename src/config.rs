use serde::{Deserialize, Serialize};

pub const DEFAULT_SUCCESS_MESSAGE: &str =
    "Thank you! Your message has been sent successfully. I'll get back to you soon!";
pub const DEFAULT_SENDING_LABEL: &str = "Sending...";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    pub log_level: String,
    pub timing: TimingConfig,
    pub success_message: String,
    pub sending_label: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            timing: TimingConfig::default(),
            success_message: DEFAULT_SUCCESS_MESSAGE.to_string(),
            sending_label: DEFAULT_SENDING_LABEL.to_string(),
        }
    }
}

/// Tiempos de los timers (milisegundos)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimingConfig {
    /// Latencia simulada del envío del formulario
    pub submit_delay_ms: u32,
    /// Tiempo que permanece visible el mensaje de éxito
    pub success_clear_ms: u32,
    /// Pausa entre `animation: none` y la animación real (re-trigger)
    pub animation_restart_ms: u32,
    pub fade_duration_ms: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: 1500,
            success_clear_ms: 5000,
            animation_restart_ms: 10,
            fade_duration_ms: 300,
        }
    }
}

impl TimingConfig {
    /// Valor CSS de la animación de entrada de las cards, p.ej. `fadeIn 0.3s ease-in`
    pub fn fade_animation(&self) -> String {
        format!("fadeIn {}s ease-in", self.fade_duration_ms as f64 / 1000.0)
    }
}

fn env_u32(value: Option<&str>, default: u32) -> u32 {
    value.and_then(|v| v.trim().parse().ok()).unwrap_or(default)
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = TimingConfig::default();
        Self {
            log_level: option_env!("PORTFOLIO_LOG_LEVEL")
                .unwrap_or("info")
                .to_string(),
            timing: TimingConfig {
                submit_delay_ms: env_u32(
                    option_env!("PORTFOLIO_SUBMIT_DELAY_MS"),
                    defaults.submit_delay_ms,
                ),
                success_clear_ms: env_u32(
                    option_env!("PORTFOLIO_SUCCESS_CLEAR_MS"),
                    defaults.success_clear_ms,
                ),
                animation_restart_ms: env_u32(
                    option_env!("PORTFOLIO_ANIMATION_RESTART_MS"),
                    defaults.animation_restart_ms,
                ),
                fade_duration_ms: env_u32(
                    option_env!("PORTFOLIO_FADE_DURATION_MS"),
                    defaults.fade_duration_ms,
                ),
            },
            ..Self::default()
        }
    }

    /// Nivel de log para wasm-logger (`info` si el valor no es válido)
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timings() {
        let timing = TimingConfig::default();
        assert_eq!(timing.submit_delay_ms, 1500);
        assert_eq!(timing.success_clear_ms, 5000);
        assert_eq!(timing.animation_restart_ms, 10);
        assert_eq!(timing.fade_animation(), "fadeIn 0.3s ease-in");
    }

    #[test]
    fn test_env_u32_falls_back_on_garbage() {
        assert_eq!(env_u32(Some("250"), 10), 250);
        assert_eq!(env_u32(Some(" 42 "), 10), 42);
        assert_eq!(env_u32(Some("abc"), 10), 10);
        assert_eq!(env_u32(None, 10), 10);
    }

    #[test]
    fn test_log_level_parsing() {
        let mut config = AppConfig::default();
        assert_eq!(config.log_level(), log::Level::Info);
        config.log_level = "debug".to_string();
        assert_eq!(config.log_level(), log::Level::Debug);
        config.log_level = "ruido".to_string();
        assert_eq!(config.log_level(), log::Level::Info);
    }
}
