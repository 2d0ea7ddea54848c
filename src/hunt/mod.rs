//! Hunt Module
//!
//! Hunter and prey actors plus the catch simulation they rely on.
//!
//! ## Module Structure
//!
//! - `actor`: Capabilities shared by every species
//! - `simulator`: Catch-feasibility strategy and its default model
//! - `hunter`: Hunter trait and the white shark
//! - `prey`: Prey trait and the tuna
//! - `doubles`: Stubs and mocks for every seam

pub mod actor;
pub mod simulator;
pub mod hunter;
pub mod prey;
pub mod doubles;

// Re-export key types
pub use actor::Actor;
pub use simulator::{CatchSimulator, DefaultCatchSimulator, SimulatorConfig, Subject};
pub use hunter::{HuntError, Hunter, WhiteShark, WhiteSharkConfig};
pub use prey::{Prey, Tuna};
