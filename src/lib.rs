pub mod action;
pub mod actuators;
pub mod bus;
pub mod config;
pub mod engine;
pub mod event;
pub mod memory;
pub mod normalize;
pub mod personality;
pub mod services;
pub mod skills;
pub mod state;
pub mod vision;

// Re-export the types callers touch on every turn
pub use action::{Action, ActionKind};
pub use bus::EventBus;
pub use engine::{DecisionEngine, EngineConfig, EngineDeps};
pub use event::{Event, EventKind};
