use anyhow::Context;
use clap::Parser;
use concept_demos::core::{Demonstration, InteractionReport};
use concept_demos::utils::{logger, validation::Validate};
use concept_demos::{
    DemoEngine, InteractionArgs, InteractionDemo, Narrator, ScriptedSource, TcpProbe,
};

async fn run_demo<D>(demo: D, narrator: &Narrator) -> concept_demos::Result<InteractionReport>
where
    D: Demonstration<Report = InteractionReport>,
{
    DemoEngine::new(demo).run(narrator).await
}

fn main() -> anyhow::Result<()> {
    let args = InteractionArgs::parse();

    if args.json {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_cli_logger(args.verbose);
    }

    let mut settings = args.settings().context("failed to load settings")?;
    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        return Err(e.into());
    }

    // The blocking phase reads this very file unless told otherwise.
    let source_path = settings
        .source
        .get_or_insert_with(|| concat!(env!("CARGO_MANIFEST_DIR"), "/", file!()).to_string())
        .clone();
    tracing::debug!("Settings: {:?}", settings);

    // One thread, cooperative scheduling: tasks only switch at their awaits.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to build the runtime")?;

    let narrator = Narrator::stdout();
    let report = if settings.offline {
        let source = ScriptedSource::pending()
            .with_target(format!("{}:{} (offline)", settings.host, settings.port));
        runtime.block_on(run_demo(
            InteractionDemo::new(&source_path, source, &settings),
            &narrator,
        ))
    } else {
        // The lookup happens when phase 2 first touches the socket.
        let source = TcpProbe::new(settings.host.clone(), settings.port);
        runtime.block_on(run_demo(
            InteractionDemo::new(&source_path, source, &settings),
            &narrator,
        ))
    };

    let report = match report {
        Ok(report) => report,
        Err(e) => {
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            return Err(e.into());
        }
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(())
}
