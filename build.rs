use std::env;
use std::fs;
use std::path::Path;

// Reenvía las entradas de .env como variables de compilación (option_env!)
fn main() {
    let env_file = Path::new(".env");

    // Siempre: un .env creado después del primer build también recompila
    println!("cargo:rerun-if-changed=.env");

    if env_file.exists() {
        if let Ok(contents) = fs::read_to_string(env_file) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }

                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"');

                    // El entorno real tiene prioridad sobre .env
                    if env::var(key).is_err() {
                        println!("cargo:rustc-env={}={}", key, value);
                    }
                }
            }
        }
    }

    for key in [
        "BASE_URL",
        "MOUNT_ELEMENT_ID",
        "APP_TITLE",
        "DEFAULT_VIEW",
        "WEEK_STARTS_ON",
        "ENABLE_LOGGING",
        "LOG_LEVEL",
    ] {
        println!("cargo:rerun-if-env-changed={}", key);
    }
    println!("cargo:rerun-if-changed=build.rs");
}
