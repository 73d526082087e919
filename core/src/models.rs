use serde::{Deserialize, Serialize};

/// Felles sensorfelter for én økt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Training {
    pub action: u32,     // skritt eller svømmetak
    pub duration_h: f64, // timer, må være > 0
    pub weight_kg: f64,  // kg
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Running {
    pub base: Training,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SportsWalking {
    pub base: Training,
    pub height_cm: f64, // cm, må være > 0
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swimming {
    pub base: Training,
    pub length_pool_m: f64, // bassenglengde i meter
    pub count_pool: u32,    // antall bassenglengder
}

/// Lukket sett av økt-typer. Ingen konstruerbar "basistrening" –
/// kaloriformelen finnes kun per variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Workout {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

impl Workout {
    pub fn base(&self) -> &Training {
        match self {
            Workout::Running(r) => &r.base,
            Workout::SportsWalking(w) => &w.base,
            Workout::Swimming(s) => &s.base,
        }
    }

    /// Typenavnet slik det vises i rapporten.
    pub fn label(&self) -> &'static str {
        match self {
            Workout::Running(_) => "Running",
            Workout::SportsWalking(_) => "SportsWalking",
            Workout::Swimming(_) => "Swimming",
        }
    }
}

/// Ferdig beregnet sammendrag for én økt.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Report {
    pub training_type: String,
    pub duration_h: f64,
    pub distance_km: f64,
    pub speed_kmh: f64,
    pub calories_kcal: f64,
}

impl Report {
    /// Én rapportlinje, fast feltrekkefølge, alle tall med tre desimaler.
    /// Avrunding er Rusts standard `{:.3}` (nærmeste, på eksakt binærverdi).
    pub fn render(&self) -> String {
        format!(
            "Økt: {}; Varighet: {:.3} t.; Distanse: {:.3} km; Snittfart: {:.3} km/t; Kalorier: {:.3}.",
            self.training_type, self.duration_h, self.distance_km, self.speed_kmh, self.calories_kcal
        )
    }
}
