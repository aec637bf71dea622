//! Command-line front end. Every command prints one JSON document.

use std::path::PathBuf;

use anyhow::{bail, Context};
use chrono::NaiveDate;
use pokedream_domain::common::parse_date;
use pokedream_domain::{CreationSubject, RuleId, TrainerId};
use pokedream_engine::api::{CreationRecord, RuleView, StatsRecord};
use pokedream_engine::infrastructure::ports::LedgerScope;
use pokedream_engine::App;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tokio::io::AsyncReadExt;

pub const USAGE: &str = "Usage: pokedream-engine <command> [options]

Commands:
  today [--trainer ID] [--date YYYY-MM-DD]          Today's (or a given day's) rotation challenge
  generate [--trainer ID]                           Today's generated challenge
  history --trainer ID                              Completed challenges with totals
  random                                            A random challenge
  list [challenges|achievements] [--tag TAG]        List a catalog
  check-creation --trainer ID [--challenge ID] [FILE|-]
                                                    Challenges completed by a creation
                                                    (--challenge also takes today's daily_<date> id)
  check-stats --trainer ID [FILE|-]                 Achievements newly unlocked by stats
  progress [FILE|-]                                 Achievement progress for stats
  ack --trainer ID <challenges|achievements> ID...  Record displayed unlocks
  ledger --trainer ID <challenges|achievements>     Show a trainer's ledger

JSON input is read from FILE, or from stdin when FILE is '-' or omitted.";

/// Parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Today {
        trainer: Option<TrainerId>,
        date: Option<NaiveDate>,
    },
    Generate { trainer: Option<TrainerId> },
    History { trainer: TrainerId },
    Random,
    List { scope: LedgerScope, tag: Option<String> },
    CheckCreation {
        trainer: TrainerId,
        challenge: Option<String>,
        input: Input,
    },
    CheckStats { trainer: TrainerId, input: Input },
    Progress { input: Input },
    Ack {
        trainer: TrainerId,
        scope: LedgerScope,
        ids: Vec<RuleId>,
    },
    Ledger { trainer: TrainerId, scope: LedgerScope },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

/// Options and positionals after the command name.
struct Args {
    trainer: Option<String>,
    challenge: Option<String>,
    tag: Option<String>,
    date: Option<String>,
    positional: Vec<String>,
}

impl Args {
    fn parse(mut raw: impl Iterator<Item = String>) -> anyhow::Result<Self> {
        let mut args = Args {
            trainer: None,
            challenge: None,
            tag: None,
            date: None,
            positional: Vec::new(),
        };
        while let Some(arg) = raw.next() {
            let slot = match arg.as_str() {
                "--trainer" => Some(&mut args.trainer),
                "--challenge" => Some(&mut args.challenge),
                "--tag" => Some(&mut args.tag),
                "--date" => Some(&mut args.date),
                _ => None,
            };
            match slot {
                Some(slot) => {
                    let value = raw
                        .next()
                        .with_context(|| format!("Missing value for {arg}"))?;
                    *slot = Some(value);
                }
                None => args.positional.push(arg),
            }
        }
        Ok(args)
    }

    fn trainer(&self) -> anyhow::Result<TrainerId> {
        match self.trainer.as_deref().map(str::trim) {
            Some(id) if !id.is_empty() => Ok(TrainerId::new(id)),
            _ => bail!("--trainer is required"),
        }
    }

    fn input(&self) -> anyhow::Result<Input> {
        match self.positional.as_slice() {
            [] => Ok(Input::Stdin),
            [path] if path == "-" => Ok(Input::Stdin),
            [path] => Ok(Input::File(PathBuf::from(path))),
            _ => bail!("Expected at most one input file"),
        }
    }

    fn scope(&self, index: usize) -> anyhow::Result<LedgerScope> {
        let raw = self
            .positional
            .get(index)
            .context("Expected a scope: challenges or achievements")?;
        Ok(raw.parse()?)
    }
}

impl Command {
    pub fn parse(mut raw: impl Iterator<Item = String>) -> anyhow::Result<Self> {
        let Some(name) = raw.next() else {
            bail!("{USAGE}");
        };
        let args = Args::parse(raw)?;

        let command = match name.as_str() {
            "today" => Command::Today {
                trainer: args.trainer().ok(),
                date: args.date.as_deref().map(parse_date).transpose()?,
            },
            "generate" => Command::Generate {
                trainer: args.trainer().ok(),
            },
            "history" => Command::History {
                trainer: args.trainer()?,
            },
            "random" => Command::Random,
            "list" => Command::List {
                scope: if args.positional.is_empty() {
                    LedgerScope::Challenges
                } else {
                    args.scope(0)?
                },
                tag: args.tag.clone(),
            },
            "check-creation" => Command::CheckCreation {
                trainer: args.trainer()?,
                challenge: args.challenge.clone(),
                input: args.input()?,
            },
            "check-stats" => Command::CheckStats {
                trainer: args.trainer()?,
                input: args.input()?,
            },
            "progress" => Command::Progress {
                input: args.input()?,
            },
            "ack" => {
                let ids: Vec<RuleId> = args
                    .positional
                    .iter()
                    .skip(1)
                    .map(|id| RuleId::new(id.as_str()))
                    .collect();
                if ids.is_empty() {
                    bail!("ack needs at least one id");
                }
                Command::Ack {
                    trainer: args.trainer()?,
                    scope: args.scope(0)?,
                    ids,
                }
            }
            "ledger" => Command::Ledger {
                trainer: args.trainer()?,
                scope: args.scope(0)?,
            },
            other => bail!("Unknown command: {other}\n\n{USAGE}"),
        };
        Ok(command)
    }
}

async fn read_json<T: DeserializeOwned>(input: &Input) -> anyhow::Result<T> {
    let raw = match input {
        Input::Stdin => {
            let mut buf = String::new();
            tokio::io::stdin()
                .read_to_string(&mut buf)
                .await
                .context("reading stdin")?;
            buf
        }
        Input::File(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("reading {}", path.display()))?,
    };
    serde_json::from_str(&raw).context("parsing input JSON")
}

pub async fn run(app: &App, command: Command) -> anyhow::Result<Value> {
    let output = match command {
        Command::Today { trainer, date } => {
            let today = app
                .use_cases
                .challenge
                .today
                .execute(trainer.as_ref(), date)
                .await?;
            serde_json::to_value(today)?
        }
        Command::Generate { trainer } => serde_json::to_value(
            app.use_cases
                .challenge
                .generate
                .execute(trainer.as_ref())
                .await?,
        )?,
        Command::History { trainer } => {
            serde_json::to_value(app.use_cases.challenge.history.execute(&trainer).await?)?
        }
        Command::Random => serde_json::to_value(app.use_cases.challenge.random.execute()?)?,
        Command::List { scope, tag } => {
            let catalog = match scope {
                LedgerScope::Challenges => &app.challenges,
                LedgerScope::Achievements => &app.achievements,
            };
            let views: Vec<RuleView<'_>> = match tag {
                Some(tag) => catalog
                    .rules_by_tag(&tag)
                    .into_iter()
                    .map(RuleView::from)
                    .collect(),
                None => catalog.all_rules().iter().map(RuleView::from).collect(),
            };
            serde_json::to_value(views)?
        }
        Command::CheckCreation {
            trainer,
            challenge,
            input,
        } => {
            let record: CreationRecord = read_json(&input).await?;
            let completed = app
                .use_cases
                .challenge
                .check
                .execute(&trainer, CreationSubject::from(record), challenge.as_deref())
                .await?;
            json!({ "completed": completed })
        }
        Command::CheckStats { trainer, input } => {
            let record: StatsRecord = read_json(&input).await?;
            let unlocked = app
                .use_cases
                .achievement
                .check
                .execute(&trainer, record.into())
                .await?;
            json!({ "unlocked": unlocked })
        }
        Command::Progress { input } => {
            let record: StatsRecord = read_json(&input).await?;
            serde_json::to_value(app.use_cases.achievement.progress.execute(record.into()))?
        }
        Command::Ack {
            trainer,
            scope,
            ids,
        } => serde_json::to_value(
            app.use_cases
                .ledger
                .acknowledge
                .execute(&trainer, scope, &ids)
                .await?,
        )?,
        Command::Ledger { trainer, scope } => {
            let ledger = app.use_cases.ledger.view.execute(&trainer, scope).await?;
            json!({ "trainer": trainer, "scope": scope, "granted": ledger })
        }
    };
    Ok(output)
}
