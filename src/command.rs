use crate::catalog::IngredientCategory;
use crate::error::{ConfiguratorError, ConfiguratorResult};

/// A single user action, parsed from one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Toggle {
        category: IngredientCategory,
        id: &'static str,
    },
    Health(String),
    Spice(String),
    Generate,
    Order,
    Show,
    Catalog,
    Json,
    Help,
    Quit,
}

pub const HELP_TEXT: &str = "\
Commands:
  veg <name>        toggle a vegetable
  protein <name>    toggle a non-veg item
  health <value>    choose the health condition
  spice <value>     choose the spice level
  generate          generate the dish
  order             order the generated dish
  show              print the configurator panel
  catalog           list available choices
  json              print the session as JSON
  help              print this help
  quit              leave";

fn ingredient(category: IngredientCategory, arg: &str) -> ConfiguratorResult<Command> {
    if arg.is_empty() {
        return Err(ConfiguratorError::MissingArgument("ingredient name"));
    }
    let id = category.resolve(arg)?;
    Ok(Command::Toggle { category, id })
}

/// Parses one command line. Returns `Ok(None)` for blank lines and
/// `#` comments.
pub fn parse_command(line: &str) -> ConfiguratorResult<Option<Command>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (keyword, arg) = match line.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim()),
        None => (line, ""),
    };

    let command = match keyword.to_ascii_lowercase().as_str() {
        "veg" | "vegetable" => ingredient(IngredientCategory::Vegetable, arg)?,
        "protein" | "nonveg" => ingredient(IngredientCategory::Protein, arg)?,
        "health" if arg.is_empty() => return Err(ConfiguratorError::MissingArgument("health condition")),
        "health" => Command::Health(arg.to_string()),
        "spice" if arg.is_empty() => return Err(ConfiguratorError::MissingArgument("spice level")),
        "spice" => Command::Spice(arg.to_string()),
        "generate" => Command::Generate,
        "order" => Command::Order,
        "show" => Command::Show,
        "catalog" => Command::Catalog,
        "json" => Command::Json,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => return Err(ConfiguratorError::InvalidCommand(line.to_string())),
    };
    Ok(Some(command))
}
