use anyhow::Context;
use clap::Parser;
use concept_demos::utils::{logger, validation::Validate};
use concept_demos::{CopyArgs, CopySemanticsDemo, DemoEngine, Narrator};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = CopyArgs::parse();

    if args.json {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_cli_logger(args.verbose);
    }

    let settings = args.settings().context("failed to load settings")?;
    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        return Err(e.into());
    }
    tracing::debug!("Settings: {:?}", settings);

    let narrator = Narrator::stdout();
    let mut engine = DemoEngine::new(CopySemanticsDemo::new(settings));
    let report = engine.run(&narrator).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(())
}
