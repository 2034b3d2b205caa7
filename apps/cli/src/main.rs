use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use console::style;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use captionfile_core::{
    CaptionError, DataUriSaver, DirectorySaver, SaveLocation, StdoutSaver, TimestampFormat,
    download, get_output_dir, load_captions, output_filename, render_captions, validate_captions,
};

/// CLI wrapper for TimestampFormat (needed for clap ValueEnum)
#[derive(Clone, Copy, Default, ValueEnum)]
enum CliFormat {
    #[default]
    Srt,
    #[value(alias = "vtt")]
    Webvtt,
}

impl From<CliFormat> for TimestampFormat {
    fn from(cli: CliFormat) -> Self {
        match cli {
            CliFormat::Srt => TimestampFormat::Srt,
            CliFormat::Webvtt => TimestampFormat::WebVtt,
        }
    }
}

#[derive(Parser)]
#[command(name = "captionfile")]
#[command(about = "Convert caption JSON into SRT or WebVTT subtitle files")]
struct Cli {
    /// JSON file with captions: an array of {start, end, text} or a transcript with segments
    input: PathBuf,

    /// Subtitle format to write
    #[arg(short, long, default_value = "srt")]
    format: CliFormat,

    /// Directory to save into. Defaults to the user's download directory.
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output file name. Defaults to the input name with the format's extension.
    #[arg(short, long)]
    name: Option<String>,

    /// Write the subtitles to stdout instead of a file
    #[arg(long, conflicts_with_all = ["data_uri", "output_dir"])]
    stdout: bool,

    /// Print a data URI with the subtitles instead of writing a file
    #[arg(long, conflicts_with = "output_dir")]
    data_uri: bool,

    /// Fail on captions with invalid timing instead of warning
    #[arg(long)]
    strict: bool,
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "captionfile=info,captionfile_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() {
    init_logging();

    if let Err(e) = run(Cli::parse()).await {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let format: TimestampFormat = cli.format.into();

    let captions = load_captions(&cli.input).await?;
    info!(input = %cli.input.display(), count = captions.len(), "captions loaded");

    for (index, issue) in validate_captions(&captions) {
        if cli.strict {
            return Err(CaptionError::InvalidCaption { index, issue }.into());
        }
        warn!(index, %issue, "invalid caption timing, writing as-is");
    }

    let text = render_captions(&captions, format);
    let filename = cli
        .name
        .unwrap_or_else(|| output_filename(&cli.input, format));

    let location = if cli.stdout {
        download(&StdoutSaver, &filename, &text).await?
    } else if cli.data_uri {
        download(&DataUriSaver, &filename, &text).await?
    } else {
        let dir = cli.output_dir.unwrap_or_else(get_output_dir);
        download(&DirectorySaver::new(dir), &filename, &text).await?
    };

    match location {
        SaveLocation::Stdout => {}
        SaveLocation::DataUri(uri) => println!("{}", uri),
        SaveLocation::File(path) => {
            eprintln!(
                "{} {} {} captions {}",
                style("✓").green().bold(),
                style("Saved:").dim(),
                captions.len(),
                style(format!("({})", format)).dim()
            );
            println!("{}", style(path.display()).cyan());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_defaults() {
        let cli = Cli::try_parse_from(["captionfile", "talk.json"]).unwrap();
        assert_eq!(TimestampFormat::from(cli.format), TimestampFormat::Srt);
        assert!(!cli.stdout && !cli.data_uri && !cli.strict);
        assert!(cli.output_dir.is_none());
    }

    #[test]
    fn test_cli_format_alias() {
        let cli = Cli::try_parse_from(["captionfile", "talk.json", "-f", "vtt"]).unwrap();
        assert_eq!(TimestampFormat::from(cli.format), TimestampFormat::WebVtt);
    }

    #[test]
    fn test_cli_sinks_conflict() {
        assert!(Cli::try_parse_from(["captionfile", "a.json", "--stdout", "--data-uri"]).is_err());
        assert!(Cli::try_parse_from(["captionfile", "a.json", "--stdout", "-o", "out"]).is_err());
        assert!(Cli::try_parse_from(["captionfile", "a.json", "--data-uri", "-o", "out"]).is_err());
    }

    #[tokio::test]
    async fn test_run_data_uri_writes_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("talk.json");
        std::fs::write(&input, r#"[{"start": 0, "end": 1.5, "text": "Hi"}]"#).unwrap();

        let cli = Cli::try_parse_from([
            "captionfile",
            input.to_str().unwrap(),
            "--data-uri",
            "-f",
            "webvtt",
        ])
        .unwrap();
        assert!(cli.data_uri);
        run(cli).await.unwrap();

        let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
        assert!(!dir.path().join("talk.vtt").exists());
    }

    #[tokio::test]
    async fn test_run_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("talk.json");
        std::fs::write(&input, r#"[{"start": 0, "end": 1.5, "text": "Hi"}]"#).unwrap();

        let cli = Cli::try_parse_from([
            "captionfile",
            input.to_str().unwrap(),
            "-o",
            dir.path().to_str().unwrap(),
        ])
        .unwrap();
        run(cli).await.unwrap();

        let written = std::fs::read_to_string(dir.path().join("talk.srt")).unwrap();
        assert_eq!(written, "1\n00:00:00,000 --> 00:00:01,500\nHi\n\n");
    }

    #[tokio::test]
    async fn test_run_strict_rejects_invalid_timing() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("bad.json");
        std::fs::write(&input, r#"[{"start": 2, "end": 1, "text": "oops"}]"#).unwrap();

        let cli = Cli::try_parse_from([
            "captionfile",
            input.to_str().unwrap(),
            "-o",
            dir.path().to_str().unwrap(),
            "--strict",
        ])
        .unwrap();
        let err = run(cli).await.unwrap_err();
        assert!(err.to_string().contains("Caption 1 is invalid"));
        assert!(!dir.path().join("bad.srt").exists());
    }
}
