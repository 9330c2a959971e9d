use std::env;
use std::fs;
use std::path::Path;

// Claves que lee src/config.rs con option_env!
const KNOWN_KEYS: &[&str] = &[
    "APP_NAME",
    "ENVIRONMENT",
    "ENABLE_LOGGING",
    "SIMULATED_LATENCY_MS",
    "PROFILE_SAVE_MS",
    "TOAST_DURATION_MS",
    "DEFAULT_MAX_DISTANCE_MILES",
];

fn main() {
    for key in KNOWN_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }

    let env_file = Path::new(".env");
    if !env_file.exists() {
        println!("cargo:rerun-if-changed=build.rs");
        return;
    }
    println!("cargo:rerun-if-changed=.env");

    let Ok(contents) = fs::read_to_string(env_file) else {
        println!("cargo:warning=.env no se pudo leer, se usan valores por defecto");
        return;
    };

    for (number, raw) in contents.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            println!("cargo:warning=.env:{} sin '=', ignorada", number + 1);
            continue;
        };
        let key = key.trim();
        let value = value.trim().trim_matches('"');

        if !KNOWN_KEYS.contains(&key) {
            println!("cargo:warning=.env:{} clave desconocida {}", number + 1, key);
            continue;
        }

        // Las variables del entorno tienen prioridad sobre .env
        if env::var(key).is_err() {
            println!("cargo:rustc-env={}={}", key, value);
        }
    }

    println!("cargo:rerun-if-changed=build.rs");
}
