//! CLI entry point for alacritty-themes.

mod cli;

use alacritty_themes::backup::BackupManager;
use alacritty_themes::config::{apply_theme, create_config, current_theme, CreateConfigResult};
use alacritty_themes::logging::init_logging;
use alacritty_themes::platform::{Environment, SystemEnvironment};
use alacritty_themes::render::Renderer;
use alacritty_themes::settings::Settings;
use alacritty_themes::themes::ThemeCatalog;
use clap::Parser;
use tokio::runtime::Handle;

use cli::Action;

#[tokio::main]
async fn main() {
    let args = cli::Args::parse();
    let env = SystemEnvironment;
    let settings = Settings::resolve(args.directory.as_deref(), args.no_color, &env);
    init_logging(&settings.log_filter);

    let renderer = Renderer::new(settings.color);
    let backups = BackupManager::new(Handle::current());

    let outcome = run(&args.action(), &env, &settings, &backups, &renderer);

    // Backups run detached; settle them here so a failed copy is fatal
    // instead of disappearing with the runtime.
    let settled = backups.settle().await;

    if let Err(msg) = outcome {
        renderer.error(&msg);
        std::process::exit(1);
    }
    if let Err(err) = settled {
        renderer.error(&err.to_string());
        std::process::exit(1);
    }
}

fn run(
    action: &Action,
    env: &dyn Environment,
    settings: &Settings,
    backups: &BackupManager,
    renderer: &Renderer,
) -> Result<(), String> {
    match action {
        Action::Create => run_create(env, renderer),
        Action::Current => run_current(env, &load_catalog(settings)?, renderer),
        Action::List => run_list(env, &load_catalog(settings)?, renderer),
        Action::Apply(selector) => {
            run_apply(env, &load_catalog(settings)?, backups, renderer, selector)
        }
    }
}

fn load_catalog(settings: &Settings) -> Result<ThemeCatalog, String> {
    ThemeCatalog::load(settings.themes_dir.as_deref()).map_err(|err| match &settings.themes_dir {
        Some(dir) => format!("failed to read themes directory `{}`: {err}", dir.display()),
        None => err.to_string(),
    })
}

fn run_create(env: &dyn Environment, renderer: &Renderer) -> Result<(), String> {
    match create_config(env).map_err(|err| err.to_string())? {
        CreateConfigResult::Created { path } => {
            renderer.section("created alacritty config");
            renderer.field("path", &path.display().to_string());
        }
        CreateConfigResult::AlreadyExists { path } => {
            renderer.warn("an alacritty config already exists; leaving it untouched");
            renderer.field("path", &path.display().to_string());
        }
    }
    Ok(())
}

fn run_current(
    env: &dyn Environment,
    catalog: &ThemeCatalog,
    renderer: &Renderer,
) -> Result<(), String> {
    match current_theme(env, catalog).map_err(|err| err.to_string())? {
        Some(name) => println!("{name}"),
        None => renderer.warn("the configured colors do not match any available theme"),
    }
    Ok(())
}

fn run_list(
    env: &dyn Environment,
    catalog: &ThemeCatalog,
    renderer: &Renderer,
) -> Result<(), String> {
    if catalog.is_empty() {
        let source = catalog
            .directory()
            .map(|dir| format!(" in `{}`", dir.display()))
            .unwrap_or_default();
        renderer.warn(&format!("no themes found{source}"));
        return Ok(());
    }
    // Marking the active theme is best-effort; a missing config is fine here.
    let active = match current_theme(env, catalog) {
        Ok(active) => active,
        Err(err) => {
            tracing::debug!(error = %err, "could not determine current theme");
            None
        }
    };
    renderer.theme_list(&catalog.themes(), active.as_deref());
    Ok(())
}

fn run_apply(
    env: &dyn Environment,
    catalog: &ThemeCatalog,
    backups: &BackupManager,
    renderer: &Renderer,
    selector: &str,
) -> Result<(), String> {
    let theme = catalog.select(selector).map_err(|err| err.to_string())?;
    let path = apply_theme(env, backups, &theme).map_err(|err| err.to_string())?;
    renderer.section(&format!("applied theme: {}", theme.name));
    renderer.field("config", &path.display().to_string());
    Ok(())
}
