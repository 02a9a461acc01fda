//! Command handlers for the authoring shell
//!
//! Every handler reports through the localized label catalog and returns
//! `Err(message)` without partial state changes when the core rejects an
//! operation.

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use feint_core::{
    AppConfig, ListError, RunToken, ScenarioRecord, ValidationError, parse_buttons, parse_delay,
    parse_icon,
};

use crate::context::CliContext;
use crate::labels::{self, UiStrings};
use crate::presenter::{ConsolePresenter, ConsoleStage};

async fn strings_for(ctx: &CliContext) -> &'static UiStrings {
    labels::for_language(ctx.language().await)
}

fn validation_message(strings: &UiStrings, err: &ValidationError) -> String {
    match err {
        ValidationError::EmptyTitle => strings.empty_title.to_string(),
        ValidationError::EmptyMessage => strings.empty_message.to_string(),
        ValidationError::UnknownIcon { value } => format!("{} '{value}'", strings.unknown_icon),
        ValidationError::UnknownButtons { value } => {
            format!("{} '{value}'", strings.unknown_buttons)
        }
    }
}

fn list_message(strings: &UiStrings, err: &ListError) -> String {
    match err {
        ListError::Locked => strings.locked.to_string(),
        ListError::OutOfRange { index, len } => {
            format!("{} ({}/{len})", strings.bad_position, index + 1)
        }
        ListError::UnknownId => strings.bad_position.to_string(),
    }
}

fn persist(config: &AppConfig, strings: &UiStrings) -> Result<(), String> {
    config
        .save()
        .map_err(|e| format!("{}: {e}", strings.save_failed))
}

/// Positions are 1-based at the shell; the core is 0-based.
fn to_index(position: usize, strings: &UiStrings) -> Result<usize, String> {
    position
        .checked_sub(1)
        .ok_or_else(|| strings.bad_position.to_string())
}

pub async fn greet(ctx: &CliContext) {
    let strings = strings_for(ctx).await;
    println!("{}", strings.banner);
}

pub async fn add_scenario(
    ctx: &CliContext,
    title: String,
    message: String,
    icon: String,
    buttons: String,
    delay_ms: Option<String>,
) -> Result<(), String> {
    let strings = strings_for(ctx).await;

    let icon = parse_icon(&icon).map_err(|e| validation_message(strings, &e))?;
    let buttons = parse_buttons(&buttons).map_err(|e| validation_message(strings, &e))?;
    let delay = parse_delay(delay_ms.as_deref());

    let record = ScenarioRecord::new(title, message, icon, buttons, delay)
        .map_err(|e| validation_message(strings, &e))?;

    let mut list = ctx.scenarios.write().await;
    list.add(record).map_err(|e| list_message(strings, &e))?;
    println!("{} {}", strings.scenario_added, list.len());
    Ok(())
}

pub async fn remove_scenario(ctx: &CliContext, position: usize) -> Result<(), String> {
    let strings = strings_for(ctx).await;
    let index = to_index(position, strings)?;

    let mut list = ctx.scenarios.write().await;
    let removed = list
        .remove_at(index)
        .map_err(|e| list_message(strings, &e))?;
    println!("{} {}", strings.scenario_removed, removed.title());
    Ok(())
}

pub async fn set_delay(ctx: &CliContext, position: usize, delay_ms: String) -> Result<(), String> {
    let strings = strings_for(ctx).await;
    let index = to_index(position, strings)?;
    let delay = parse_delay(Some(&delay_ms));

    let mut list = ctx.scenarios.write().await;
    list.set_delay_at(index, delay)
        .map_err(|e| list_message(strings, &e))?;
    println!("{}: {}ms", strings.delay_updated, delay.as_millis());
    Ok(())
}

pub async fn list_scenarios(ctx: &CliContext) -> Result<(), String> {
    let strings = strings_for(ctx).await;
    let list = ctx.scenarios.read().await;

    if list.is_empty() {
        println!("{}", strings.list_empty);
        return Ok(());
    }

    println!(
        "{:<4} {:<28} {:<10} {:<10} {}",
        "#", strings.col_title, strings.col_icon, strings.col_buttons, strings.col_delay
    );
    println!("{}", "─".repeat(64));
    for (position, (_, record)) in list.iter().enumerate() {
        println!(
            "{:<4} {:<28} {:<10} {:<10} {}ms",
            position + 1,
            record.title(),
            record.icon().name(),
            record.buttons().name(),
            record.delay().as_millis()
        );
    }
    Ok(())
}

pub async fn run_scenarios(ctx: &CliContext) -> Result<(), String> {
    let strings = strings_for(ctx).await;

    let (settings, language, sound_file, volume) = {
        let config = ctx.config.read().await;
        (
            config.playback_settings(),
            config.language,
            config.audio.sound_file.clone(),
            config.audio.volume,
        )
    };

    let (snapshot, permit) = {
        let list = ctx.scenarios.read().await;
        if list.is_empty() {
            return Err(strings.run_empty.to_string());
        }
        let permit = list.begin_run().map_err(|e| list_message(strings, &e))?;
        (list.snapshot(), permit)
    };

    let engine = Arc::clone(&ctx.engine);
    let outcome = tokio::task::spawn_blocking(move || {
        let _permit = permit;
        let mut engine = engine.blocking_lock();

        let audio = engine.audio_mut();
        match &sound_file {
            Some(path) => audio.configure(path.clone()),
            None => audio.clear(),
        }
        audio.set_volume(volume);

        let presenter = ConsolePresenter::new(language);
        let stage = ConsoleStage::new(language);
        let token = RunToken::new();
        engine.run(&snapshot, settings, &presenter, &stage, &token)
    })
    .await
    .map_err(|e| e.to_string())?;

    match outcome {
        Ok(report) if report.interrupted => {
            println!("{} ({})", strings.run_interrupted, report.presented);
        }
        Ok(report) => {
            println!("{} ({})", strings.run_finished, report.presented);
        }
        Err(err) => return Err(format!("{}: {err}", strings.run_failed)),
    }
    Ok(())
}

pub async fn set_hide_window(ctx: &CliContext, on: bool) -> Result<(), String> {
    let strings = strings_for(ctx).await;
    let mut config = ctx.config.write().await;
    config.hide_window = on;
    persist(&config, strings)?;
    println!("{}", if on { strings.hide_on } else { strings.hide_off });
    Ok(())
}

pub async fn set_use_sound(ctx: &CliContext, on: bool) -> Result<(), String> {
    let strings = strings_for(ctx).await;
    let mut config = ctx.config.write().await;
    config.audio.enabled = on;
    if !on {
        // Disabling the toggle also forgets the selection
        config.audio.sound_file = None;
    }
    persist(&config, strings)?;
    println!("{}", if on { strings.sound_on } else { strings.sound_off });
    Ok(())
}

pub async fn select_sound(ctx: &CliContext, path: PathBuf) -> Result<(), String> {
    let strings = strings_for(ctx).await;
    let mut config = ctx.config.write().await;
    if !config.audio.enabled {
        return Err(strings.sound_disabled.to_string());
    }
    config.audio.sound_file = Some(path.clone());
    persist(&config, strings)?;
    println!("{} {}", strings.sound_selected, path.display());
    Ok(())
}

pub async fn set_volume(ctx: &CliContext, level: u8) -> Result<(), String> {
    let strings = strings_for(ctx).await;
    let mut config = ctx.config.write().await;
    config.audio.volume = level.min(100);
    persist(&config, strings)?;
    println!("{} {}", strings.volume_set, config.audio.volume);
    Ok(())
}

pub async fn set_language(ctx: &CliContext, language: Option<String>) -> Result<(), String> {
    let strings = strings_for(ctx).await;

    let mut config = ctx.config.write().await;
    let target = match language {
        Some(name) => name
            .parse()
            .map_err(|_| strings.unknown_language.to_string())?,
        // No argument means toggle
        None => config.language.toggled(),
    };
    config.language = target;
    persist(&config, strings)?;

    println!("{}", labels::for_language(target).language_switched);
    Ok(())
}

pub async fn show_config(ctx: &CliContext) -> Result<(), String> {
    let strings = strings_for(ctx).await;
    let config = ctx.config.read().await;
    let on_off = |flag: bool| if flag { strings.on } else { strings.off };

    println!("{}", strings.cfg_header);
    println!("  {}: {}", strings.cfg_language, config.language);
    println!("  {}: {}", strings.cfg_hide, on_off(config.hide_window));
    println!("  {}: {}", strings.cfg_sound, on_off(config.audio.enabled));
    match &config.audio.sound_file {
        Some(path) => println!("  {}: {}", strings.cfg_sound_file, path.display()),
        None => println!("  {}: {}", strings.cfg_sound_file, strings.cfg_none),
    }
    println!("  {}: {}", strings.cfg_volume, config.audio.volume);
    Ok(())
}

pub async fn exit(ctx: &CliContext) {
    let strings = strings_for(ctx).await;
    let _ = writeln!(std::io::stdout(), "{}", strings.bye);
    let _ = std::io::stdout().flush();
}
