//! Generated daily challenge.
//!
//! Unlike the fixed rotation, this challenge is assembled from a template and
//! word lists, seeded by the MD5 of the UTC date. Every process computes the
//! same challenge for the same day without sharing state, and the picks match
//! the backend's generator for that date.
//!
//! Only the required types are checkable. Culture and theme are left to the
//! trainer's honesty, so a template with no types accepts any creation.

use std::sync::Arc;

use chrono::NaiveDate;
use md5::{Digest, Md5};
use pokedream_domain::{
    seconds_until_reset, Condition, DomainError, Reward, Rule, RuleCatalog, TrainerId,
};
use serde::Serialize;

use super::ChallengeError;
use crate::infrastructure::ports::{ClockPort, LedgerRepo, LedgerScope};

pub const GENERATED_TAG: &str = "generated";

/// Generated challenge ids are this prefix followed by the ISO date
pub const GENERATED_ID_PREFIX: &str = "daily_";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Type1,
    Type2,
    Culture,
    Theme,
}

struct Template {
    text: &'static str,
    slots: &'static [Slot],
}

const TEMPLATES: &[Template] = &[
    Template {
        text: "Create a {type1}/{type2} type Pokémon",
        slots: &[Slot::Type1, Slot::Type2],
    },
    Template {
        text: "Create a {type1} type Pokémon inspired by {culture} culture",
        slots: &[Slot::Type1, Slot::Culture],
    },
    Template {
        text: "Create a pure {type1} type Pokémon",
        slots: &[Slot::Type1],
    },
    Template {
        text: "Create a Pokémon based on {theme}",
        slots: &[Slot::Theme],
    },
    Template {
        text: "Create a {type1} type Pokémon based on {theme}",
        slots: &[Slot::Type1, Slot::Theme],
    },
    Template {
        text: "Create a Pokémon inspired by {culture} mythology",
        slots: &[Slot::Culture],
    },
    Template {
        text: "Create a {type1}/{type2} Pokémon from {culture} folklore",
        slots: &[Slot::Type1, Slot::Type2, Slot::Culture],
    },
];

const TYPES: &[&str] = &[
    "Fire", "Water", "Grass", "Electric", "Ice", "Fighting", "Poison", "Ground", "Flying",
    "Psychic", "Bug", "Rock", "Ghost", "Dragon", "Dark", "Steel", "Fairy", "Normal",
];

const CULTURES: &[&str] = &[
    "Japanese",
    "Mexican",
    "Egyptian",
    "Greek",
    "Norse",
    "Chinese",
    "Indian",
    "Celtic",
    "African",
    "Native American",
    "Hawaiian",
    "Brazilian",
    "Korean",
    "Vietnamese",
    "Thai",
    "Indonesian",
    "Peruvian",
    "Aztec",
    "Mayan",
    "Polynesian",
];

const THEMES: &[&str] = &[
    "a kitchen appliance",
    "a musical instrument",
    "a weather phenomenon",
    "a gemstone or crystal",
    "a deep sea creature",
    "a desert animal",
    "a mythical beast",
    "a piece of furniture",
    "a sports equipment",
    "a cosmic object",
    "a garden plant",
    "a winter holiday",
    "a tropical fruit",
    "a construction vehicle",
    "a nocturnal animal",
    "an ancient artifact",
    "a natural disaster",
    "a carnival attraction",
    "a breakfast food",
    "an office supply",
    "a vintage toy",
    "a haunted object",
    "a robot companion",
    "a forest spirit",
];

/// The generated challenge for one day.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedChallenge {
    /// `daily_<YYYY-MM-DD>`
    pub id: String,
    pub challenge: String,
    pub date: NaiveDate,
    /// First four bytes of the date's MD5, hex encoded
    pub seed: String,
    pub types: Vec<String>,
    pub culture: Option<String>,
    pub theme: Option<String>,
    /// Seconds until the next UTC midnight
    pub seconds_until_reset: u32,
    /// Only known when a trainer was given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    /// Checkable form of the challenge
    pub rule: Rule,
}

pub struct GenerateDailyChallenge {
    ledgers: Arc<dyn LedgerRepo>,
    clock: Arc<dyn ClockPort>,
}

impl GenerateDailyChallenge {
    pub fn new(ledgers: Arc<dyn LedgerRepo>, clock: Arc<dyn ClockPort>) -> Self {
        Self { ledgers, clock }
    }

    pub async fn execute(
        &self,
        trainer: Option<&TrainerId>,
    ) -> Result<GeneratedChallenge, ChallengeError> {
        let mut challenge = generated_today(self.clock.as_ref());
        if let Some(trainer) = trainer {
            let ledger = self.ledgers.get(trainer, LedgerScope::Challenges).await?;
            challenge.completed = Some(ledger.contains(&challenge.id));
        }

        tracing::debug!(
            challenge_id = %challenge.id,
            seed = %challenge.seed,
            "Generated daily challenge"
        );
        Ok(challenge)
    }
}

/// The generated challenge for the clock's current UTC date.
pub fn generated_today(clock: &dyn ClockPort) -> GeneratedChallenge {
    let now = clock.now().naive_utc();
    let mut challenge = generate_for(now.date());
    challenge.seconds_until_reset = seconds_until_reset(now);
    challenge
}

/// Find a challenge by id in `catalog`, or today's generated challenge.
///
/// Generated challenges from other days are not accepted.
pub fn resolve_challenge(
    catalog: &RuleCatalog,
    clock: &dyn ClockPort,
    id: &str,
) -> Result<Rule, DomainError> {
    match catalog.rule_by_id(id) {
        Ok(rule) => Ok(rule.clone()),
        Err(not_found) => {
            let generated = generated_today(clock);
            if generated.id == id {
                Ok(generated.rule)
            } else {
                Err(not_found)
            }
        }
    }
}

fn seed_for(date: NaiveDate) -> [u8; 4] {
    let digest = Md5::digest(date.format("%Y-%m-%d").to_string().as_bytes());
    [digest[0], digest[1], digest[2], digest[3]]
}

fn pick<'a>(items: &[&'a str], seed: u64, offset: u64) -> &'a str {
    // Lists are non-empty consts and the modulus is below their length
    items[((seed + offset) % items.len() as u64) as usize]
}

/// Build the challenge for `date`. `seconds_until_reset` is left at zero;
/// it depends on the time of day, not the date.
pub fn generate_for(date: NaiveDate) -> GeneratedChallenge {
    let seed_bytes = seed_for(date);
    let seed = u64::from(u32::from_be_bytes(seed_bytes));
    let template = &TEMPLATES[(seed % TEMPLATES.len() as u64) as usize];

    let mut type1: Option<&str> = None;
    let mut type2: Option<&str> = None;
    let mut culture: Option<&str> = None;
    let mut theme: Option<&str> = None;
    let mut offset = 0u64;

    for slot in template.slots {
        match slot {
            Slot::Type1 => {
                type1 = Some(pick(TYPES, seed, offset));
                offset += 7;
            }
            Slot::Type2 => {
                let mut candidate = pick(TYPES, seed, offset);
                while Some(candidate) == type1 {
                    offset += 1;
                    candidate = pick(TYPES, seed, offset);
                }
                type2 = Some(candidate);
                offset += 11;
            }
            Slot::Culture => {
                culture = Some(pick(CULTURES, seed, offset));
                offset += 13;
            }
            Slot::Theme => {
                theme = Some(pick(THEMES, seed, offset));
                offset += 17;
            }
        }
    }

    let challenge = template
        .text
        .replace("{type1}", type1.unwrap_or_default())
        .replace("{type2}", type2.unwrap_or_default())
        .replace("{culture}", culture.unwrap_or_default())
        .replace("{theme}", theme.unwrap_or_default());
    let types: Vec<String> = type1.into_iter().chain(type2).map(String::from).collect();
    let id = format!("{}{}", GENERATED_ID_PREFIX, date.format("%Y-%m-%d"));

    let rule = Rule::new(id.as_str(), "Daily Challenge")
        .with_description(challenge.as_str())
        .with_tag(GENERATED_TAG)
        .with_reward(Reward::default())
        .with_condition(condition_for(&types));

    GeneratedChallenge {
        id,
        challenge,
        date,
        seed: hex::encode(seed_bytes),
        types,
        culture: culture.map(String::from),
        theme: theme.map(String::from),
        seconds_until_reset: 0,
        completed: None,
        rule,
    }
}

fn condition_for(types: &[String]) -> Condition {
    if types.is_empty() {
        Condition::AnyCreation
    } else {
        Condition::types(types.iter().cloned())
    }
}
