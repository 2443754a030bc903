use crate::core::narrator::Narrator;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::io;

/// A resource whose calls return immediately.
///
/// Calls that cannot complete right away fail with
/// [`io::ErrorKind::WouldBlock`] instead of waiting.
pub trait NonBlockingSource {
    fn target(&self) -> String;

    /// Blocking setup done once before the first connect, such as a name
    /// lookup. Its failure is fatal.
    fn prepare(&mut self) -> Result<()> {
        Ok(())
    }

    fn try_connect(&mut self) -> io::Result<()>;
    fn try_read(&mut self, buf: &mut [u8]) -> io::Result<usize>;
}

// Not `Send`: demos share their narrator through `Rc` on a single thread.
#[async_trait(?Send)]
pub trait Demonstration {
    type Report;

    fn title(&self) -> &str;
    async fn run(&mut self, narrator: &Narrator) -> Result<Self::Report>;
}
