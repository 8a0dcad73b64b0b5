use std::env;
use std::fs;
use std::path::Path;

/// Claves que `AppConfig::from_env()` lee con `option_env!`
const CONFIG_KEYS: &[&str] = &[
    "BACKEND_URL",
    "MAPBOX_ACCESS_TOKEN",
    "MAP_STYLE",
    "DEFAULT_MAP_CENTER_LNG",
    "DEFAULT_MAP_CENTER_LAT",
    "DEFAULT_MAP_ZOOM",
    "MATCH_PROFILE",
    "MATCH_RADIUS",
    "GEOLOCATION_TIMEOUT_MS",
    "ENABLE_LOGGING",
];

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env.example");
    for key in CONFIG_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }

    let env_file = Path::new(".env");
    if !env_file.exists() {
        println!("cargo:warning=No hay archivo .env, se usan los valores por defecto (ver .env.example)");
        return;
    }
    println!("cargo:rerun-if-changed=.env");

    let contents = match fs::read_to_string(env_file) {
        Ok(contents) => contents,
        Err(e) => {
            println!("cargo:warning=No se pudo leer .env: {}", e);
            return;
        }
    };

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        let value = value.trim().trim_matches('"');

        if !CONFIG_KEYS.contains(&key) {
            println!("cargo:warning=Clave desconocida en .env: {}", key);
            continue;
        }

        // La variable del entorno real tiene prioridad sobre .env
        if env::var(key).is_err() {
            println!("cargo:rustc-env={}={}", key, value);
        }
    }
}
