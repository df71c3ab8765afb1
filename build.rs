use std::env;
use std::fs;
use std::path::Path;

fn main() {
    // Variables PORTFOLIO_* opcionales desde .env (tiempos, nivel de log)
    let env_file = Path::new(".env");

    if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");

        if let Ok(contents) = fs::read_to_string(env_file) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }

                // KEY=VALUE, solo las claves del portfolio
                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"');

                    if !key.starts_with("PORTFOLIO_") {
                        continue;
                    }

                    // La variable de entorno real tiene prioridad
                    if env::var(key).is_err() {
                        println!("cargo:rustc-env={}={}", key, value);
                    }
                }
            }
        }
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=PORTFOLIO_SUBMIT_DELAY_MS");
    println!("cargo:rerun-if-env-changed=PORTFOLIO_SUCCESS_CLEAR_MS");
    println!("cargo:rerun-if-env-changed=PORTFOLIO_ANIMATION_RESTART_MS");
    println!("cargo:rerun-if-env-changed=PORTFOLIO_FADE_DURATION_MS");
    println!("cargo:rerun-if-env-changed=PORTFOLIO_LOG_LEVEL");
}
