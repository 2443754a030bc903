use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// The binaries are crates of their own and need their own directives.
const DEFAULT_DIRECTIVES: &str = "concept_demos=info,interaction_demo=info,copy_demo=info";
const VERBOSE_DIRECTIVES: &str =
    "concept_demos=debug,interaction_demo=debug,copy_demo=debug,info";

fn default_filter(verbose: bool) -> EnvFilter {
    let directives = if verbose {
        VERBOSE_DIRECTIVES
    } else {
        DEFAULT_DIRECTIVES
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives))
}

// Logs go to stderr; stdout carries the narration.
pub fn init_cli_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(default_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

pub fn init_json_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(default_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .json(),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives_cover_both_binaries() {
        for directives in [DEFAULT_DIRECTIVES, VERBOSE_DIRECTIVES] {
            let filter = EnvFilter::new(directives).to_string();
            assert!(filter.contains("interaction_demo="));
            assert!(filter.contains("copy_demo="));
            assert!(filter.contains("concept_demos="));
        }
    }
}
