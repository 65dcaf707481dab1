use crate::errors::AppError;
use crate::models::Store;
use crate::store::migrate_legacy;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::{error, info};

pub fn resolve_data_path() -> Result<PathBuf, std::io::Error> {
    if let Ok(path) = env::var("ATTENDANCE_DATA_PATH") {
        return Ok(PathBuf::from(path));
    }

    Ok(PathBuf::from("data/attendance.json"))
}

/// Loads the store, upgrading legacy-shaped subjects in place. A missing
/// file is an empty store; an unreadable or unparseable file is logged and
/// treated the same way.
pub async fn load_data(path: &Path) -> Store {
    let bytes = match fs::read(path).await {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Store::default(),
        Err(err) => {
            error!("failed to read data file: {err}");
            return Store::default();
        }
    };

    let mut document: serde_json::Value = match serde_json::from_slice(&bytes) {
        Ok(document) => document,
        Err(err) => {
            error!("failed to parse data file: {err}");
            return Store::default();
        }
    };

    let upgraded = migrate_legacy(&mut document);
    let store: Store = match serde_json::from_value(document) {
        Ok(store) => store,
        Err(err) => {
            error!("data file does not match the store schema: {err}");
            return Store::default();
        }
    };

    if upgraded {
        info!("upgraded legacy subjects in data file");
        if let Err(err) = persist_data(path, &store).await {
            error!("failed to rewrite upgraded data file: {}", err.message);
        }
    }

    store
}

pub async fn persist_data(path: &Path, data: &Store) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(data).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    Ok(())
}
