// Adapters layer: concrete non-blocking sources (real socket, scripted fake).

pub mod scripted;
pub mod tcp_probe;

pub use scripted::{ScriptedSource, Step};
pub use tcp_probe::TcpProbe;
