use crate::config::toml_config::{CopyOverrides, InteractionOverrides, SettingsFile};
use crate::config::{CopySettings, InteractionSettings};
use crate::utils::error::Result;
use clap::Parser;

/// Layers defaults, then the settings file, then the command line.
fn load_file(path: Option<&str>) -> Result<SettingsFile> {
    match path {
        Some(path) => {
            tracing::debug!("Loading settings from {}", path);
            SettingsFile::from_file(path)
        }
        None => Ok(SettingsFile::default()),
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "interaction-demo")]
#[command(about = "Blocking vs non-blocking calls, synchronous vs asynchronous interactions")]
pub struct InteractionArgs {
    /// Host probed by the non-blocking socket [default: example.com]
    #[arg(long)]
    pub host: Option<String>,

    /// Port probed by the non-blocking socket [default: 80]
    #[arg(long)]
    pub port: Option<u16>,

    /// Size of the single non-blocking read [default: 1024]
    #[arg(long)]
    pub read_buffer: Option<usize>,

    /// Number of concurrent tasks in the async phase [default: 2]
    #[arg(long)]
    pub tasks: Option<usize>,

    /// Suspension of each async task, in milliseconds [default: 1000]
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// File read by the blocking phase [default: this program's source]
    #[arg(long)]
    pub source: Option<String>,

    /// Probe a scripted peer instead of the network; `--offline=false` undoes
    /// a settings file that turned it on
    #[arg(
        long,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_name = "BOOL"
    )]
    pub offline: Option<bool>,

    /// TOML settings file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Print the report as JSON after the narration
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl InteractionArgs {
    pub fn settings(&self) -> Result<InteractionSettings> {
        let mut settings = InteractionSettings::default();
        load_file(self.config.as_deref())?.apply_interaction(&mut settings);

        InteractionOverrides {
            host: self.host.clone(),
            port: self.port,
            read_buffer: self.read_buffer,
            tasks: self.tasks,
            delay_ms: self.delay_ms,
            source: self.source.clone(),
            offline: self.offline,
        }
        .apply(&mut settings);

        Ok(settings)
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "copy-demo")]
#[command(about = "Shallow vs deep copy of an object graph")]
pub struct CopyArgs {
    /// Starting value of the immutable field [default: 1]
    #[arg(long, allow_hyphen_values = true)]
    pub initial: Option<i64>,

    /// Starting contents of the nested sequence [default: 1,2]
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    pub items: Option<Vec<i64>>,

    /// Value appended after copying [default: 3]
    #[arg(long, allow_hyphen_values = true)]
    pub append: Option<i64>,

    /// TOML settings file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Print the report as JSON after the narration
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl CopyArgs {
    pub fn settings(&self) -> Result<CopySettings> {
        let mut settings = CopySettings::default();
        load_file(self.config.as_deref())?.apply_copy(&mut settings);

        CopyOverrides {
            initial: self.initial,
            items: self.items.clone(),
            append: self.append,
        }
        .apply(&mut settings);

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_no_arguments_gives_defaults() {
        let args = InteractionArgs::parse_from(["interaction-demo"]);
        assert_eq!(args.settings().unwrap(), InteractionSettings::default());

        let args = CopyArgs::parse_from(["copy-demo"]);
        assert_eq!(args.settings().unwrap(), CopySettings::default());
    }

    #[test]
    fn test_command_line_beats_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[interaction]\ntasks = 5\ndelay_ms = 10\n")
            .unwrap();
        let path = temp_file.path().to_str().unwrap();

        let args = InteractionArgs::parse_from([
            "interaction-demo",
            "--config",
            path,
            "--tasks",
            "3",
            "--offline",
        ]);
        let settings = args.settings().unwrap();

        assert_eq!(settings.tasks, 3);
        assert_eq!(settings.delay_ms, 10);
        assert!(settings.offline);
    }

    #[test]
    fn test_offline_can_be_switched_off_from_the_command_line() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[interaction]\noffline = true\n").unwrap();
        let path = temp_file.path().to_str().unwrap();

        let args = InteractionArgs::parse_from(["interaction-demo", "--config", path]);
        assert!(args.settings().unwrap().offline);

        let args =
            InteractionArgs::parse_from(["interaction-demo", "--config", path, "--offline=false"]);
        assert!(!args.settings().unwrap().offline);

        let args = InteractionArgs::parse_from(["interaction-demo", "--offline=true"]);
        assert!(args.settings().unwrap().offline);
    }

    #[test]
    fn test_items_are_comma_separated() {
        let args = CopyArgs::parse_from(["copy-demo", "--items", "7,8,9", "--append", "-1"]);
        let settings = args.settings().unwrap();

        assert_eq!(settings.items, vec![7, 8, 9]);
        assert_eq!(settings.append, -1);
    }
}
