use anyhow::{Context, Result};
use dish_configurator::cli::{parse_args, Cli};
use dish_configurator::config::{AppConfig, RunMode};
use dish_configurator::console::{load_script, Console, Step};
use dish_configurator::logging::init_tracing;
use dish_configurator::{DishSession, IngredientCategory};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

/// Applies the flag selections, generates once and optionally orders.
fn run_one_shot(cli: &Cli, config: &AppConfig) -> Result<()> {
    let mut session = DishSession::new();
    session.select_ingredients(IngredientCategory::Vegetable, &cli.vegetables)?;
    session.select_ingredients(IngredientCategory::Protein, &cli.proteins)?;
    if let Some(health) = &cli.health {
        session.set_health(health)?;
    }
    if let Some(spice) = &cli.spice {
        session.set_spice(spice)?;
    }

    session.generate();
    if cli.order {
        session.place_order();
    }

    let console = Console::with_session(session);
    if config.json_output {
        println!("{}", console.snapshot_json());
    } else if let Some(text) = console.session().displayed_text() {
        println!("{}", text);
    }
    Ok(())
}

async fn run_script_file(path: &std::path::Path, config: &AppConfig) -> Result<()> {
    let script = load_script(path).await?;
    let mut console = Console::new();
    for output in console.run_script(&script) {
        println!("{}\n", output);
    }
    if let Some(json) = console.closing_output(config.json_output) {
        println!("{}", json);
    }
    Ok(())
}

async fn run_interactive(config: &AppConfig) -> Result<()> {
    let mut console = Console::new();
    println!("{}", dish_configurator::render::render_panel(console.session()));
    println!("Type 'help' for commands.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush().context("Failed to flush stdout")?;

        let Some(line) = lines.next_line().await.context("Failed to read from stdin")? else {
            break;
        };
        match console.execute_line(&line) {
            Step::Continue(Some(text)) => println!("{}", text),
            Step::Continue(None) => {}
            Step::Quit => break,
        }
    }
    if let Some(json) = console.closing_output(config.json_output) {
        println!("{}", json);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let cli = parse_args();
    let config = AppConfig::from_env_and_cli(&cli);
    init_tracing(&config.log_filter);
    info!(mode = ?config.mode, json = config.json_output, "starting dish configurator");

    match &config.mode {
        RunMode::OneShot => run_one_shot(&cli, &config),
        RunMode::Script(path) => run_script_file(path, &config).await,
        RunMode::Interactive => run_interactive(&config).await,
    }
}
