mod app;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use dicta_core::{
    GroqConfig, GroqTranscriber, GroqTransformer, Pipeline, StylePreset, load_audio_file,
    set_verbose,
};

#[derive(Parser)]
#[command(
    name = "dicta",
    version,
    about = "Voice dictation: record or load audio, transcribe it, and restyle the text"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Voice model for transcription
    #[arg(long, global = true, default_value = "distil-whisper-large-v3-en")]
    voice_model: String,

    /// Text model for style transforms
    #[arg(long, global = true, default_value = "llama-3.2-3b-preview")]
    text_model: String,

    /// Print diagnostic output to stderr
    #[arg(long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Record from the microphone until Enter, then transcribe
    Record {
        /// Restyle the transcript with a preset (improve, concise,
        /// professional, funny, casual, mario, homer)
        #[arg(long)]
        improve: Option<StylePreset>,

        /// Copy the result to the clipboard
        #[arg(long)]
        copy: bool,
    },
    /// Transcribe an audio file
    File {
        path: PathBuf,

        #[arg(long)]
        improve: Option<StylePreset>,

        #[arg(long)]
        copy: bool,
    },
    /// Rewrite text from stdin under a style preset
    Improve {
        style: StylePreset,

        #[arg(long)]
        copy: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    set_verbose(cli.verbose);

    let config = GroqConfig::from_env()?;
    let mut pipeline = Pipeline::new(
        GroqTranscriber::new(config.clone()),
        GroqTransformer::new(config),
    );
    pipeline.set_voice_model(&cli.voice_model)?;
    pipeline.set_text_model(&cli.text_model)?;

    match cli.command {
        Command::Record { improve, copy } => {
            let payload = app::record_until_enter()?;
            pipeline.submit_audio(payload).await?;
            app::finish(&mut pipeline, improve, copy).await
        }
        Command::File {
            path,
            improve,
            copy,
        } => {
            let payload = load_audio_file(&path)?;
            pipeline.submit_audio(payload).await?;
            app::finish(&mut pipeline, improve, copy).await
        }
        Command::Improve { style, copy } => {
            let text = app::read_stdin_text()?;
            pipeline.edit_text(text);
            app::finish(&mut pipeline, Some(style), copy).await
        }
    }
}
