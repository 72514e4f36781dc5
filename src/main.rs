use hrm::app::App;
use hrm::cli::{parse_args, run_cli_command, CliCommand, CliOptions};
use hrm::config::AppConfig;
use hrm::error::{HrmResult, UiError};
use hrm::input::{Command, CommandRegistry, ModalType};
use hrm::logging::init_logging;
use hrm::terminal::{setup_panic_hook, TerminalManager};
use hrm::ui::{self, interaction::handle_click_action};

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use futures::StreamExt;
use ratatui::{backend::Backend, Terminal};
use std::time::Duration;

fn main() -> Result<()> {
    let command = parse_args(std::env::args())?;
    if let Some(result) = run_cli_command(&command) {
        return result;
    }
    let options = match command {
        CliCommand::RunTui(options) => options,
        _ => CliOptions::default(),
    };

    color_eyre::install()?;
    setup_panic_hook();

    let config = AppConfig::from_env()?.merge_cli(&options);
    if let Err(err) = init_logging(&config) {
        eprintln!("Warning: logging disabled: {}", err.user_message());
    }
    tracing::info!(?config, "starting");

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let mut app = App::with_config(&config);
    let mut manager = TerminalManager::new()?;
    let size = manager.size()?;
    app.update_terminal_dimensions(size.width, size.height);

    let result = runtime.block_on(run_app(manager.terminal(), &mut app, &config));
    manager.restore()?;

    if let Err(err) = result {
        tracing::error!(
            code = err.error_code(),
            category = %err.category(),
            error = %err,
            "event loop failed"
        );
        eprintln!("{}\n{}", err.user_message(), err.recovery_hint());
        return Err(err.into());
    }
    tracing::info!("exiting");
    Ok(())
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App, config: &AppConfig) -> HrmResult<()> {
    let registry = CommandRegistry::new();
    let mut events = EventStream::new();
    let mut ticker = tokio::time::interval(Duration::from_millis(config.tick_ms));

    while !app.should_quit {
        if let Err(err) = ui::draw(terminal, app) {
            if !err.is_recoverable() {
                return Err(err.into());
            }
            tracing::warn!(code = err.error_code(), error = %err, "frame skipped");
        }

        tokio::select! {
            _ = ticker.tick() => app.tick(),

            event = events.next() => match event {
                Some(Ok(event)) => handle_event(app, &registry, event),
                Some(Err(err)) => return Err(UiError::event_stream(err).into()),
                None => break,
            },
        }
    }

    Ok(())
}

fn handle_event(app: &mut App, registry: &CommandRegistry, event: Event) {
    match event {
        Event::Resize(width, height) => app.update_terminal_dimensions(width, height),
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            let context = app.build_input_context();
            if let Some(cmd) = registry.dispatch(key, &context) {
                app.execute_command(cmd);
            }
        }
        Event::Mouse(mouse) => handle_mouse(app, mouse),
        Event::Paste(text) => {
            let context = app.build_input_context();
            if context.modal == ModalType::Form && !context.focused_is_choice {
                for c in text.chars().filter(|c| !c.is_control()) {
                    app.execute_command(Command::FormInsertChar(c));
                }
            }
        }
        _ => {}
    }
}

fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(action) = app.hit_registry.hit_test(mouse.column, mouse.row) {
                handle_click_action(app, action);
            }
        }
        MouseEventKind::Moved => {
            if app.hit_registry.update_hover(mouse.column, mouse.row) {
                app.mark_dirty();
            }
        }
        MouseEventKind::ScrollDown if !app.has_modal() => {
            app.execute_command(Command::SelectNext);
        }
        MouseEventKind::ScrollUp if !app.has_modal() => {
            app.execute_command(Command::SelectPrevious);
        }
        _ => {}
    }
}
