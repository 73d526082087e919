// core/src/package.rs
//
// JSON-inngang for (kode, felter)-pakker. Tolerant på form: både
// objektform og legacy tuppelform aksepteres, som i resten av stacken.
use serde::Deserialize;
use serde_path_to_error as spte;
use thiserror::Error;

use crate::dispatch::{build_training, BuildError};

#[derive(Debug, Deserialize)]
struct PackageObject {
    #[serde(alias = "code")]
    workout_type: String,
    #[serde(alias = "fields")]
    data: Vec<f64>,
}

// Prøv objekt først, deretter legacy ["RUN", [15000, 1, 75]]
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PackageIn {
    Object(PackageObject),
    Legacy(String, Vec<f64>),
}

#[derive(Debug, Error)]
pub enum PackageError {
    #[error("ugyldig pakke-json ved {path}: {message}")]
    Parse { path: String, message: String },
    #[error(transparent)]
    Build(#[from] BuildError),
    #[error("kunne ikke serialisere rapport: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Tar én pakke som JSON, bygger økta og returnerer rapporten som JSON.
///
/// Inn: `{"workout_type": "RUN", "data": [15000, 1, 75]}` (alias `code`/`fields`)
/// eller `["RUN", [15000, 1, 75]]`. Ut: serialisert `Report`.
pub fn process_package_json(pkg_json: &str) -> Result<String, PackageError> {
    let mut de = serde_json::Deserializer::from_str(pkg_json);
    let pkg: PackageIn = spte::deserialize(&mut de).map_err(|e| PackageError::Parse {
        path: e.path().to_string(),
        message: e.inner().to_string(),
    })?;

    let (code, data) = match pkg {
        PackageIn::Object(o) => (o.workout_type, o.data),
        PackageIn::Legacy(code, data) => (code, data),
    };

    let report = build_training(&code, &data)?.training_info();
    Ok(serde_json::to_string(&report)?)
}
