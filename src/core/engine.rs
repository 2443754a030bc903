use crate::core::narrator::Narrator;
use crate::core::Demonstration;
use crate::utils::error::Result;
use std::time::Instant;

pub struct DemoEngine<D: Demonstration> {
    demo: D,
}

impl<D: Demonstration> DemoEngine<D> {
    pub fn new(demo: D) -> Self {
        Self { demo }
    }

    pub async fn run(&mut self, narrator: &Narrator) -> Result<D::Report> {
        let title = self.demo.title().to_string();
        tracing::info!("Starting demo: {}", title);
        let started = Instant::now();

        narrator.say(format!("=== {} ===", title));
        narrator.blank();

        match self.demo.run(narrator).await {
            Ok(report) => {
                tracing::info!("Finished demo: {} in {:?}", title, started.elapsed());
                Ok(report)
            }
            Err(e) => {
                tracing::error!("Demo '{}' failed: {}", title, e);
                Err(e)
            }
        }
    }

    pub fn into_inner(self) -> D {
        self.demo
    }
}
