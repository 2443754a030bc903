pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{CopyArgs, InteractionArgs};

pub use adapters::{ScriptedSource, Step, TcpProbe};
pub use config::{CopySettings, InteractionSettings};
pub use core::{
    copy_semantics::CopySemanticsDemo, engine::DemoEngine, interaction::InteractionDemo,
    narrator::Narrator,
};
pub use utils::error::{DemoError, Result};
