use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;

use anyhow::{Context, Result};
use engine_logging::{engine_info, engine_warn};
use genform_core::{update, AppState, AppViewModel, Msg};

use super::config::AppConfig;
use super::effects::EffectRunner;
use super::input::{parse_line, Command};
use super::{logging, ui};

/// Everything the main loop reacts to.
pub enum UiEvent {
    Msg(Msg),
    Help,
    Quit,
}

pub fn run_app() -> Result<()> {
    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = AppConfig::load(config_path.as_deref())?;
    logging::initialize(&config.log);
    engine_info!(
        "Starting genform: base_url={} output_dir={:?}",
        config.base_url,
        config.output_dir
    );

    let (ui_tx, ui_rx) = mpsc::channel::<UiEvent>();
    let runner = EffectRunner::new(config.engine_config(), ui_tx.clone())
        .context("failed to start the request engine")?;
    spawn_stdin_reader(ui_tx);

    let mut stdout = io::stdout();
    let mut state = AppState::new();
    print_lines(&mut stdout, &ui::render::header())?;
    print_view(&mut stdout, &state.view())?;

    while let Ok(event) = ui_rx.recv() {
        match event {
            UiEvent::Msg(msg) => {
                let (next, effects) = update(std::mem::take(&mut state), msg);
                state = next;
                runner.enqueue(effects);
                if state.consume_dirty() {
                    print_view(&mut stdout, &state.view())?;
                }
            }
            UiEvent::Help => print_lines(&mut stdout, &ui::render::help())?,
            UiEvent::Quit => break,
        }
    }

    engine_info!("Exiting genform");
    Ok(())
}

fn spawn_stdin_reader(ui_tx: mpsc::Sender<UiEvent>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    engine_warn!("Failed to read stdin: {}", err);
                    break;
                }
            };
            let events = match parse_line(&line) {
                Command::Quit => vec![UiEvent::Quit],
                Command::Help => vec![UiEvent::Help],
                command => command.into_msgs().into_iter().map(UiEvent::Msg).collect(),
            };
            for event in events {
                if ui_tx.send(event).is_err() {
                    return;
                }
            }
        }
        // EOF quits.
        let _ = ui_tx.send(UiEvent::Quit);
    });
}

fn print_view(out: &mut impl Write, view: &AppViewModel) -> Result<()> {
    print_lines(out, &ui::render::render(view))
}

fn print_lines(out: &mut impl Write, lines: &[String]) -> Result<()> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    out.flush()?;
    Ok(())
}
