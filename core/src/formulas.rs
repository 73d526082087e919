// core/src/formulas.rs
use crate::models::{Report, Running, SportsWalking, Swimming, Training, Workout};

pub const M_IN_KM: f64 = 1000.0;      // meter per km
pub const MIN_PER_H: f64 = 60.0;      // minutter per time
pub const LEN_STEP_KM: f64 = 0.65;    // km per skritt (løp/gange)
pub const LEN_STROKE_KM: f64 = 1.38;  // km per svømmetak

// Empiriske kalorikonstanter – faste, ikke konfigurerbare.
const RUN_SPEED_MULT: f64 = 18.0;
const RUN_SPEED_SHIFT: f64 = 1.79;
const WLK_WEIGHT_FACTOR: f64 = 0.035;
const WLK_SPEED_FACTOR: f64 = 0.029;
const KMH_TO_MS: f64 = 0.278;         // km/t → m/s
const CM_PER_M: f64 = 100.0;
const SWM_SPEED_SHIFT: f64 = 1.1;
const SWM_WEIGHT_MULT: f64 = 2.0;

impl Training {
    fn distance_km(&self, step_len_km: f64) -> f64 {
        self.action as f64 * step_len_km / M_IN_KM
    }

    /// Snittfart fra skrittdistanse. Forutsetter duration_h > 0.
    fn speed_kmh(&self, step_len_km: f64) -> f64 {
        self.distance_km(step_len_km) / self.duration_h
    }

    fn duration_min(&self) -> f64 {
        self.duration_h * MIN_PER_H
    }
}

impl Running {
    pub fn spent_calories(&self) -> f64 {
        let speed = self.base.speed_kmh(LEN_STEP_KM);
        (RUN_SPEED_MULT * speed + RUN_SPEED_SHIFT) * self.base.weight_kg / M_IN_KM
            * self.base.duration_min()
    }
}

impl SportsWalking {
    pub fn spent_calories(&self) -> f64 {
        let speed_ms = self.base.speed_kmh(LEN_STEP_KM) * KMH_TO_MS;
        let height_m = self.height_cm / CM_PER_M;
        (WLK_WEIGHT_FACTOR * self.base.weight_kg
            + speed_ms.powi(2) / height_m * WLK_SPEED_FACTOR * self.base.weight_kg)
            * self.base.duration_min()
    }
}

impl Swimming {
    /// Snittfart fra bassenggeometri – uavhengig av `action`.
    pub fn speed_kmh(&self) -> f64 {
        self.length_pool_m * self.count_pool as f64 / M_IN_KM / self.base.duration_h
    }

    pub fn spent_calories(&self) -> f64 {
        (self.speed_kmh() + SWM_SPEED_SHIFT) * SWM_WEIGHT_MULT * self.base.weight_kg
            * self.base.duration_h
    }
}

impl Workout {
    fn step_len_km(&self) -> f64 {
        match self {
            Workout::Swimming(_) => LEN_STROKE_KM,
            _ => LEN_STEP_KM,
        }
    }

    /// Distanse i km: `action * skrittlengde / 1000` for alle varianter.
    /// Gjelder også svømming – distansen følger registrerte tak, ikke basseng.
    pub fn distance_km(&self) -> f64 {
        self.base().distance_km(self.step_len_km())
    }

    /// Snittfart i km/t. Løp/gange deler skrittformelen; svømming har
    /// egen bassengformel – eksplisitt valg per variant, ikke arv.
    pub fn speed_kmh(&self) -> f64 {
        match self {
            Workout::Swimming(s) => s.speed_kmh(),
            _ => self.base().speed_kmh(self.step_len_km()),
        }
    }

    /// Kalorier (kcal) etter variantens formel. Ren funksjon av feltene.
    pub fn spent_calories(&self) -> f64 {
        match self {
            Workout::Running(r) => r.spent_calories(),
            Workout::SportsWalking(w) => w.spent_calories(),
            Workout::Swimming(s) => s.spent_calories(),
        }
    }

    /// Sammendrag for økta: typenavn, varighet og de tre beregnede verdiene.
    pub fn training_info(&self) -> Report {
        Report {
            training_type: self.label().to_string(),
            duration_h: self.base().duration_h,
            distance_km: self.distance_km(),
            speed_kmh: self.speed_kmh(),
            calories_kcal: self.spent_calories(),
        }
    }
}
