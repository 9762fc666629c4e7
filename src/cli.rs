use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Customize a dish and order it", long_about = None)]
pub struct Cli {
    /// Vegetable to select (repeatable)
    #[arg(short, long = "vegetable", value_name = "NAME")]
    pub vegetables: Vec<String>,

    /// Non-veg item to select (repeatable)
    #[arg(short, long = "protein", value_name = "NAME")]
    pub proteins: Vec<String>,

    /// Health condition, e.g. Diabetes
    #[arg(long)]
    pub health: Option<String>,

    /// Spice level: Mild, Medium or Spicy
    #[arg(long)]
    pub spice: Option<String>,

    /// Place an order after generating
    #[arg(long)]
    pub order: bool,

    /// Print the session as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Run commands from a file, one per line
    #[arg(long, value_name = "FILE", conflicts_with = "interactive")]
    pub script: Option<PathBuf>,

    /// Read commands from stdin
    #[arg(short, long)]
    pub interactive: bool,
}

pub fn parse_args() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeatable_ingredient_flags() {
        let cli = Cli::try_parse_from([
            "dish-configurator",
            "-v",
            "Bell Pepper",
            "--vegetable",
            "Ginger",
            "-p",
            "Chicken",
            "--spice",
            "Medium",
            "--order",
        ])
        .unwrap();
        assert_eq!(cli.vegetables, vec!["Bell Pepper", "Ginger"]);
        assert_eq!(cli.proteins, vec!["Chicken"]);
        assert_eq!(cli.spice.as_deref(), Some("Medium"));
        assert!(cli.order);
        assert!(!cli.interactive);
    }

    #[test]
    fn test_script_conflicts_with_interactive() {
        let result = Cli::try_parse_from(["dish-configurator", "--script", "a.txt", "-i"]);
        assert!(result.is_err());
    }
}
