use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub app_name: String,
    pub environment: String,
    pub enable_logging: bool,
    pub timing: TimingConfig,
    pub shelter_config: ShelterConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_name: "DisasterHaven".to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            timing: TimingConfig::default(),
            shelter_config: ShelterConfig::default(),
        }
    }
}

/// Latencias simuladas (no hay backend real)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimingConfig {
    pub simulated_latency_ms: u32,
    pub profile_save_ms: u32,
    pub toast_duration_ms: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            simulated_latency_ms: 1500,
            profile_save_ms: 1000,
            toast_duration_ms: 5000,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShelterConfig {
    pub default_max_distance_miles: u32,
    pub max_distance_limit_miles: u32,
    pub distance_step_miles: u32,
}

impl Default for ShelterConfig {
    fn default() -> Self {
        Self {
            default_max_distance_miles: 50,
            max_distance_limit_miles: 100,
            distance_step_miles: 5,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            app_name: option_env!("APP_NAME")
                .unwrap_or("DisasterHaven").to_string(),
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development").to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            timing: TimingConfig {
                simulated_latency_ms: option_env!("SIMULATED_LATENCY_MS")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.timing.simulated_latency_ms),
                profile_save_ms: option_env!("PROFILE_SAVE_MS")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.timing.profile_save_ms),
                toast_duration_ms: option_env!("TOAST_DURATION_MS")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.timing.toast_duration_ms),
            },
            shelter_config: ShelterConfig {
                default_max_distance_miles: option_env!("DEFAULT_MAX_DISTANCE_MILES")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.shelter_config.default_max_distance_miles),
                ..defaults.shelter_config
            },
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Verifica si el modo de logging está habilitado
    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
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
    fn defaults_match_simulated_timings() {
        let config = AppConfig::default();
        assert_eq!(config.timing.simulated_latency_ms, 1500);
        assert_eq!(config.timing.profile_save_ms, 1000);
        assert_eq!(config.shelter_config.default_max_distance_miles, 50);
        assert!(!config.is_production());
    }
}
