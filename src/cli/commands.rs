use std::path::Path;

use anyhow::{anyhow, Result};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::cli::args::{InputArgs, RuntimeArgs};
use crate::config::settings::Settings;
use crate::meme::MEMES;
use crate::roast::{Attachment, RoastInput, RoastLevel, Roaster};
use crate::session::history::History;
use crate::utils::format;

pub async fn handle_roast(
    settings: &Settings,
    text: Option<String>,
    input_args: &InputArgs,
    runtime: &RuntimeArgs,
) -> Result<()> {
    let input = build_input(text, input_args)?;
    if input.is_empty() {
        return Err(anyhow!(
            "Nothing to roast. Provide text, --photo, or --audio (or use `roast interactive`)."
        ));
    }

    let roaster = Roaster::new(&effective_settings(settings, runtime))?;
    let mut history = History::new();
    run_one(&roaster, settings, runtime, input, input_args, &mut history).await
}

pub async fn handle_interactive(
    settings: &Settings,
    input_args: &InputArgs,
    runtime: &RuntimeArgs,
) -> Result<()> {
    use dialoguer::Input;

    // Construct once so a missing API key blocks before the first prompt.
    let roaster = Roaster::new(&effective_settings(settings, runtime))?;
    let mut history = History::new();

    println!("{}", style("Interactive roast session. Ctrl+C to exit.").cyan());
    loop {
        let line: String = Input::new().with_prompt("You").interact_text()?;
        if line.trim().is_empty() {
            continue;
        }
        let input = RoastInput {
            text: line,
            ..Default::default()
        };
        run_one(&roaster, settings, runtime, input, input_args, &mut history).await?;
        println!(
            "{}",
            style(format!("{} roast(s) this session", history.len())).dim()
        );
    }
}

/// One submit/response cycle. Requests are strictly sequential: the next
/// submission is not accepted until this one has resolved, so overlapping
/// roasts cannot race.
async fn run_one(
    roaster: &Roaster,
    settings: &Settings,
    runtime: &RuntimeArgs,
    input: RoastInput,
    input_args: &InputArgs,
    history: &mut History,
) -> Result<()> {
    let level = input_args.level.unwrap_or(settings.level);
    let no_go = resolve_no_go(input_args, settings);

    let pb = ProgressBar::new_spinner().with_message("Preparing the roast...");
    pb.set_style(ProgressStyle::with_template("{spinner} {msg}").unwrap());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    let output = roaster.roast(&input, level, &no_go, history).await;
    pb.finish_and_clear();

    println!();
    println!("{}", format::roast_banner(level));
    println!("{}", output.text_roast);
    println!();
    println!(
        "{} {} \"{}\"",
        style("Meme:").cyan(),
        output.meme.record.name,
        output.meme.caption
    );
    println!("{}", style(output.meme.record.file).dim());

    let audio_roast = output.audio_roast.clone();
    history.push(input, output);

    if runtime.speak || settings.speak {
        let voice = runtime.voice.as_deref().or(settings.voice.as_deref());
        speak_roast(voice, &audio_roast, level).await;
    }
    Ok(())
}

fn build_input(text: Option<String>, input_args: &InputArgs) -> Result<RoastInput> {
    let photo = match &input_args.photo {
        Some(path) => Some(Attachment::photo(path)?),
        None => None,
    };
    let audio = match &input_args.audio {
        Some(path) => Some(Attachment::audio(path)?),
        None => None,
    };
    Ok(RoastInput {
        text: text.unwrap_or_default(),
        photo,
        audio,
        transcript: input_args.transcript.clone(),
    })
}

fn effective_settings(settings: &Settings, runtime: &RuntimeArgs) -> Settings {
    let mut settings = settings.clone();
    if let Some(model) = &runtime.model {
        settings.model = Some(model.clone());
    }
    settings
}

fn resolve_no_go(input_args: &InputArgs, settings: &Settings) -> Vec<String> {
    match &input_args.no_go {
        Some(raw) => raw
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect(),
        None => settings.no_go_topics.clone(),
    }
}

#[cfg(feature = "speech")]
async fn speak_roast(voice: Option<&str>, text: &str, level: RoastLevel) {
    use crate::speech::{speak_blocking, SpeechParams, SystemSpeech};

    let params = SpeechParams::for_level(level);
    match SystemSpeech::new(voice) {
        Ok(mut player) => {
            if let Err(e) = speak_blocking(&mut player, text, &params).await {
                println!("{}", format::error(&format!("Speech playback failed: {:#}", e)));
            }
        }
        Err(e) => println!("{}", format::error(&format!("Speech unavailable: {:#}", e))),
    }
}

#[cfg(not(feature = "speech"))]
async fn speak_roast(_voice: Option<&str>, _text: &str, _level: RoastLevel) {
    println!(
        "{}",
        format::warn("Built without speech support; rebuild with `--features speech`")
    );
}

pub fn handle_memes() -> Result<()> {
    for meme in MEMES {
        println!("{}  {}", style(meme.name).cyan(), meme.description);
    }
    Ok(())
}

#[cfg(feature = "speech")]
pub fn handle_voices() -> Result<()> {
    use crate::speech::{SpeechPlayer, SystemSpeech};

    let player = SystemSpeech::new(None)?;
    let voices = player.voices()?;
    if voices.is_empty() {
        println!("{}", format::warn("No voices available on this platform"));
        return Ok(());
    }
    for voice in voices {
        println!("{} ({})", voice.name, voice.language);
    }
    Ok(())
}

#[cfg(not(feature = "speech"))]
pub fn handle_voices() -> Result<()> {
    println!(
        "{}",
        format::warn("Built without speech support; rebuild with `--features speech`")
    );
    Ok(())
}

pub fn handle_config_list(settings: &Settings) -> Result<()> {
    println!("model: {}", settings.model.as_deref().unwrap_or("(default)"));
    println!("API key set: {}", settings.api_key.is_some());
    println!("level: {}", settings.level);
    println!("speak: {}", settings.speak);
    println!("voice: {}", settings.voice.as_deref().unwrap_or("(auto)"));
    println!("no-go topics: {}", settings.no_go_topics.join(", "));
    Ok(())
}

/// `config_path` is the `--config` override; the file that was loaded is
/// the file that gets written back.
pub fn handle_config_set(
    settings: &mut Settings,
    key: &str,
    value: &str,
    config_path: Option<&Path>,
) -> Result<()> {
    match key {
        "api-key" | "api_key" => settings.api_key = Some(value.to_owned()),
        "model" => settings.model = Some(value.to_owned()),
        "base-url" | "base_url" => settings.base_url = Some(value.to_owned()),
        "voice" => settings.voice = Some(value.to_owned()),
        "speak" => settings.speak = value.parse().unwrap_or(false),
        "level" => {
            settings.level = match value.to_lowercase().as_str() {
                "light" => RoastLevel::Light,
                "medium" => RoastLevel::Medium,
                "brutal" => RoastLevel::Brutal,
                other => return Err(anyhow!("Unknown level: {}", other)),
            }
        }
        "no-go" | "no_go" => {
            settings.no_go_topics = value
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        }
        _ => {
            println!("Unknown config key: {}", key);
            return Ok(());
        }
    }
    settings.save_with(config_path)?;
    println!("{}", format::success("Config saved"));
    Ok(())
}
