use crate::domain::ports::NonBlockingSource;
use crate::utils::error::{DemoError, Result};
use std::collections::VecDeque;
use std::io;

/// What a scripted call does when it is reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Succeed; for reads, deliver these bytes (truncated to the buffer).
    Ready(Vec<u8>),
    WouldBlock,
    Fail(io::ErrorKind),
}

impl Step {
    fn into_io(self) -> io::Result<Vec<u8>> {
        match self {
            Step::Ready(bytes) => Ok(bytes),
            Step::WouldBlock => Err(io::ErrorKind::WouldBlock.into()),
            Step::Fail(kind) => Err(kind.into()),
        }
    }
}

/// Deterministic stand-in for a non-blocking socket.
///
/// Connect and read calls consume their own queue of [`Step`]s. Once a queue
/// runs dry every further call on it would block, like a peer that never
/// answers.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    target: String,
    /// Host and port whose lookup fails in `prepare`.
    unresolvable: Option<(String, u16)>,
    connects: VecDeque<Step>,
    reads: VecDeque<Step>,
}

impl Default for ScriptedSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self {
            target: "scripted peer".to_string(),
            unresolvable: None,
            connects: VecDeque::new(),
            reads: VecDeque::new(),
        }
    }

    /// A peer that is still connecting and has sent nothing.
    pub fn pending() -> Self {
        Self::new().connect(Step::WouldBlock).read(Step::WouldBlock)
    }

    /// A peer whose name cannot be looked up.
    pub fn unresolvable(host: &str, port: u16) -> Self {
        let mut source = Self::new().with_target(format!("{}:{}", host, port));
        source.unresolvable = Some((host.to_string(), port));
        source
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = target.into();
        self
    }

    pub fn connect(mut self, step: Step) -> Self {
        self.connects.push_back(step);
        self
    }

    pub fn read(mut self, step: Step) -> Self {
        self.reads.push_back(step);
        self
    }
}

impl NonBlockingSource for ScriptedSource {
    fn target(&self) -> String {
        self.target.clone()
    }

    fn prepare(&mut self) -> Result<()> {
        match &self.unresolvable {
            Some((host, port)) => Err(DemoError::ResolveError {
                host: host.clone(),
                port: *port,
                source: io::Error::new(io::ErrorKind::NotFound, "scripted lookup failure"),
            }),
            None => Ok(()),
        }
    }

    fn try_connect(&mut self) -> io::Result<()> {
        let step = self.connects.pop_front().unwrap_or(Step::WouldBlock);
        step.into_io().map(|_| ())
    }

    fn try_read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let step = self.reads.pop_front().unwrap_or(Step::WouldBlock);
        let bytes = step.into_io()?;
        let n = bytes.len().min(buf.len());
        buf[..n].copy_from_slice(&bytes[..n]);
        Ok(n)
    }
}
