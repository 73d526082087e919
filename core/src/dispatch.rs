// core/src/dispatch.rs
use std::fmt;
use std::str::FromStr;

use log::{debug, warn};
use thiserror::Error;

use crate::metrics::{packages_built_total, packages_rejected_total};
use crate::models::{Running, SportsWalking, Swimming, Training, Workout};

/// Lukket sett av pakkekoder på ledningen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkoutCode {
    Swm,
    Run,
    Wlk,
}

impl WorkoutCode {
    /// Antall posisjonsfelter varianten krever.
    pub fn arity(self) -> usize {
        match self {
            WorkoutCode::Run => 3, // action, duration, weight
            WorkoutCode::Wlk => 4, // + height
            WorkoutCode::Swm => 5, // + length_pool, count_pool
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            WorkoutCode::Swm => "SWM",
            WorkoutCode::Run => "RUN",
            WorkoutCode::Wlk => "WLK",
        }
    }
}

impl fmt::Display for WorkoutCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkoutCode {
    type Err = BuildError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SWM" => Ok(WorkoutCode::Swm),
            "RUN" => Ok(WorkoutCode::Run),
            "WLK" => Ok(WorkoutCode::Wlk),
            other => Err(BuildError::UnknownWorkoutType(other.to_string())),
        }
    }
}

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("ukjent treningskode: {0:?}")]
    UnknownWorkoutType(String),
    #[error("{code}: forventet {expected} felter, fikk {got}")]
    ArityMismatch {
        code: WorkoutCode,
        expected: usize,
        got: usize,
    },
    #[error("{code}: ugyldig {field} = {value} (må være {requirement})")]
    InvalidPrecondition {
        code: WorkoutCode,
        field: &'static str,
        value: f64,
        requirement: &'static str,
    },
}

fn require_positive(code: WorkoutCode, field: &'static str, value: f64) -> Result<(), BuildError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(BuildError::InvalidPrecondition {
            code,
            field,
            value,
            requirement: "> 0",
        })
    }
}

/// Bygger riktig variant fra (kode, posisjonsfelter).
///
/// Feiler før noen beregning kjører: ukjent kode, feil feltantall eller
/// ugyldige forutsetninger gir aldri en halvbygd økt.
pub fn build_training(code: &str, data: &[f64]) -> Result<Workout, BuildError> {
    let result = build_inner(code, data);
    match &result {
        Ok(w) => {
            packages_built_total().inc();
            debug!("bygget {} fra {} felter", w.label(), data.len());
        }
        Err(e) => {
            packages_rejected_total().inc();
            warn!("avviste pakke {:?}: {}", code, e);
        }
    }
    result
}

fn build_inner(code: &str, data: &[f64]) -> Result<Workout, BuildError> {
    let code = WorkoutCode::from_str(code)?;

    if data.len() != code.arity() {
        return Err(BuildError::ArityMismatch {
            code,
            expected: code.arity(),
            got: data.len(),
        });
    }

    // Fail fast i stedet for å regne på søppel (valg dokumentert i DESIGN.md).
    if data[0] < 0.0 {
        return Err(BuildError::InvalidPrecondition {
            code,
            field: "action",
            value: data[0],
            requirement: ">= 0",
        });
    }
    require_positive(code, "duration", data[1])?;

    let base = Training {
        action: data[0] as u32,
        duration_h: data[1],
        weight_kg: data[2],
    };

    match code {
        WorkoutCode::Run => Ok(Workout::Running(Running { base })),
        WorkoutCode::Wlk => {
            require_positive(code, "height", data[3])?;
            Ok(Workout::SportsWalking(SportsWalking {
                base,
                height_cm: data[3],
            }))
        }
        WorkoutCode::Swm => {
            require_positive(code, "length_pool", data[3])?;
            require_positive(code, "count_pool", data[4])?;
            Ok(Workout::Swimming(Swimming {
                base,
                length_pool_m: data[3],
                count_pool: data[4] as u32,
            }))
        }
    }
}
