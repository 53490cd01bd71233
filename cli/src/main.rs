use std::{fs, path::Path, path::PathBuf};

use clap::{Parser, Subcommand};
use encoding_rs::Encoding;
use fighter_engine::api::{simulate_fight, SimulationResult, DEFAULT_MAX_EXCHANGES};
use fighter_engine::content::{builtin_roster, builtin_rosters, RosterFile, RosterFormat};
use fighter_engine::{damage, Creature};
use tracing_subscriber::EnvFilter;

#[derive(Subcommand)]
enum Cmd {
    /// Run a fight between two rosters until one side is wiped out
    Simulate {
        /// Roster file (JSON, or YAML by .yaml/.yml extension) with teamA and teamB
        #[arg(long, conflicts_with = "builtin", required_unless_present = "builtin")]
        teams: Option<PathBuf>,
        /// Name of a built-in roster instead of a file
        #[arg(long)]
        builtin: Option<String>,
        /// Safety cap on exchanges
        #[arg(long, default_value_t = DEFAULT_MAX_EXCHANGES)]
        max_exchanges: u32,
        /// Print the result as JSON instead of the log
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Damage one strike deals for the given attack and defence
    Damage {
        #[arg(long)]
        attack: u32,
        #[arg(long)]
        defence: u32,
    },
    /// Print a built-in roster file (stdout)
    Sample {
        /// Built-in roster name
        #[arg(long, default_value = "starter")]
        name: String,
    },
    /// List built-in roster names
    Builtins,
}

#[derive(Parser)]
#[command(name = "fighter-cli")]
#[command(about = "Roaming fighter CLI harness")]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Cmd::Simulate {
            teams,
            builtin,
            max_exchanges,
            json,
        } => {
            let roster = match (teams, builtin) {
                (Some(path), _) => read_roster(&path)?,
                (None, Some(name)) => builtin_roster(&name)?,
                (None, None) => anyhow::bail!("either --teams or --builtin is required"),
            };
            let res = simulate_fight(&roster, max_exchanges)?;
            tracing::info!(exchanges = res.exchanges, status = ?res.status, "simulation finished");
            if json {
                println!("{}", serde_json::to_string_pretty(&res)?);
            } else {
                print_result(&res);
            }
        }
        Cmd::Damage { attack, defence } => {
            let attacker = Creature::new("Attacker", attack, 0, 1);
            let defender = Creature::new("Defender", 0, defence, 1);
            println!(
                "attack={} defence={} => damage={}",
                attack,
                defence,
                damage(&attacker, &defender)
            );
        }
        Cmd::Sample { name } => {
            let rosters = builtin_rosters();
            let (text, _) = rosters
                .get(name.as_str())
                .ok_or_else(|| anyhow::anyhow!("unknown built-in roster '{}'", name))?;
            print!("{}", text);
        }
        Cmd::Builtins => {
            let mut names: Vec<_> = builtin_rosters().into_keys().collect();
            names.sort_unstable();
            for name in names {
                println!("{}", name);
            }
        }
    }
    Ok(())
}

fn read_text_auto(path: &Path) -> anyhow::Result<String> {
    let bytes = fs::read(path)?;
    if let Some((enc, bom_len)) = Encoding::for_bom(&bytes) {
        let (cow, _, _) = enc.decode(&bytes[bom_len..]);
        Ok(cow.into_owned())
    } else {
        Ok(String::from_utf8(bytes)?)
    }
}

fn read_roster(path: &Path) -> anyhow::Result<RosterFile> {
    tracing::debug!(path = %path.display(), "loading roster");
    let text = read_text_auto(path)
        .map_err(|e| anyhow::anyhow!("failed to read roster {}: {}", path.display(), e))?;
    RosterFile::parse(&text, RosterFormat::from_path(path))
}

fn print_result(res: &SimulationResult) {
    for line in &res.log {
        println!("{}", line);
    }
    println!();
    println!("fight:      {}", res.fight_id);
    println!("exchanges:  {}", res.exchanges);
    match res.winner {
        Some(side) => println!("winner:     {}", side),
        None => println!("winner:     none (undecided)"),
    }
    for (label, roster) in [("team A:", &res.team_a), ("team B:", &res.team_b)] {
        let line = roster
            .iter()
            .map(|c| format!("{} {} HP", c.name, c.health))
            .collect::<Vec<_>>()
            .join(", ");
        println!("{:<11} {}", label, line);
    }
}
