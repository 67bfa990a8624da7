pub mod play;
pub mod session;
pub mod simulate;

pub use play::PlayMode;
pub use session::Session;
pub use simulate::{SimulateConfig, SimulateMode, SimulationReport};
