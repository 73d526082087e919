pub mod cli;
pub mod dispatch;
pub mod formulas;
pub mod metrics;
pub mod models;
pub mod package;

pub use dispatch::{build_training, BuildError, WorkoutCode};
pub use models::{Report, Running, SportsWalking, Swimming, Training, Workout};
pub use package::{process_package_json, PackageError};
