pub mod copy_semantics;
pub mod duplication;
pub mod engine;
pub mod interaction;
pub mod narrator;

pub use crate::domain::model::{CopyReport, InteractionReport, Readiness};
pub use crate::domain::ports::{Demonstration, NonBlockingSource};
pub use crate::utils::error::Result;
