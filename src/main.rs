use anyhow::{Context, Result};
use bracket_page::{BracketPage, Command, CommandOutcome, PageConfig};
use clap::{Parser, ValueEnum};
use mimalloc::MiMalloc;
use std::path::PathBuf;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

const OUTLINE_CAP: usize = 500;

#[derive(Parser, Debug)]
#[command(name = "bracketeer")]
#[command(about = "Build the tournament sign-up page and replay button clicks against it")]
struct Args {
    /// TOML file overriding element ids and sizes
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Rows present after a reset
    #[arg(short, long)]
    players: Option<u32>,

    /// Type a name into a player input, as N=NAME
    #[arg(short, long = "name", value_parser = parse_name)]
    names: Vec<(u32, String)>,

    /// Buttons to click, in order
    #[arg(value_enum)]
    commands: Vec<Click>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Click {
    Add,
    Reset,
    Generate,
}

impl From<Click> for Command {
    fn from(click: Click) -> Self {
        match click {
            Click::Add => Command::AddPlayer,
            Click::Reset => Command::ResetPlayers,
            Click::Generate => Command::GenerateBracket,
        }
    }
}

fn parse_name(arg: &str) -> Result<(u32, String), String> {
    let (player, name) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected N=NAME, got {arg:?}"))?;
    let player = player
        .trim()
        .parse()
        .map_err(|_| format!("{player:?} is not a player number"))?;
    Ok((player, name.to_string()))
}

fn load_config(args: &Args) -> Result<PageConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            PageConfig::from_toml_str(&text)
                .with_context(|| format!("parsing {}", path.display()))?
        }
        None => PageConfig::default(),
    };
    if let Some(players) = args.players {
        config.default_player_count = players;
    }
    Ok(config)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let config = load_config(&args)?;
    let mut page = BracketPage::new(config).context("building the page")?;

    for (player, name) in &args.names {
        page.set_player_name(*player, name)
            .with_context(|| format!("typing into player {player}"))?;
    }

    let mut entrants = None;
    for click in &args.commands {
        let button_id = {
            let config = page.config();
            match click {
                Click::Add => config.add_player_button_id.clone(),
                Click::Reset => config.reset_players_button_id.clone(),
                Click::Generate => config.generate_bracket_button_id.clone(),
            }
        };
        log::debug!("click #{button_id} ({:?})", Command::from(*click));
        match page.click(&button_id)? {
            CommandOutcome::Rows { rows } => log::info!("{rows} player rows"),
            CommandOutcome::Entrants(list) => entrants = Some(list),
        }
    }

    for line in page.outline(OUTLINE_CAP) {
        println!("{line}");
    }
    if let Some(entrants) = entrants {
        println!();
        for (seed, entrant) in entrants.iter().enumerate() {
            let name = if entrant.name.is_empty() {
                "(empty)"
            } else {
                entrant.name.as_str()
            };
            println!("{:>2}. {name}  #{}", seed + 1, entrant.input_id);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_arguments_split_on_the_first_equals() {
        assert_eq!(parse_name("2=Ada=L"), Ok((2, "Ada=L".to_string())));
        assert!(parse_name("Ada").is_err());
        assert!(parse_name("two=Ada").is_err());
    }

    #[test]
    fn players_flag_overrides_the_default_count() {
        let args = Args::parse_from(["bracketeer", "--players", "6", "add"]);
        assert_eq!(load_config(&args).unwrap().default_player_count, 6);
        assert!(matches!(args.commands[..], [Click::Add]));
    }
}
