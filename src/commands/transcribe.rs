use crate::{
    api::{OpenAi, Transcriber},
    libs::{config::Config, messages::Message},
    msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::Args;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct TranscribeArgs {
    /// Audio recording (webm, m4a, mp3, wav, ...)
    audio: PathBuf,

    /// Write the transcript to this file instead of printing it
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub async fn cmd(args: TranscribeArgs) -> Result<()> {
    let client = OpenAi::from_env(Config::read()?.openai_settings())?;

    msg_info!(Message::TranscribingAudio(args.audio.display().to_string()));
    let transcript = client.transcribe(&args.audio).await?;

    match args.output {
        Some(path) => {
            fs::write(&path, format!("{}\n", transcript))?;
            msg_success!(Message::ExportCompleted(path.display().to_string()));
        }
        None => {
            msg_print!(Message::TranscriptHeader);
            msg_print!(transcript);
        }
    }
    Ok(())
}
