//! Trainer achievements, checked against aggregate creation statistics.

use crate::entities::{Rule, RuleCatalog};
use crate::error::DomainError;
use crate::value_objects::{Condition, Counter, Reward};

pub const MILESTONE: &str = "milestone";
pub const SHINY: &str = "shiny";
pub const TYPE_DISCOVERY: &str = "type-discovery";
pub const TYPE_SPECIALIST: &str = "type-specialist";

enum Tally {
    Total,
    Shinies,
    DistinctTypes,
    OfType(&'static str),
}

struct AchievementDef {
    id: &'static str,
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    tally: Tally,
    at_least: u64,
}

const fn def(
    id: &'static str,
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    tally: Tally,
    at_least: u64,
) -> AchievementDef {
    AchievementDef {
        id,
        icon,
        title,
        description,
        tally,
        at_least,
    }
}

const MILESTONES: &[AchievementDef] = &[
    def("first", "🥚", "First Steps", "Create your first Pokémon", Tally::Total, 1),
    def("five", "⭐", "Budding Trainer", "Create 5 Pokémon", Tally::Total, 5),
    def("ten", "🏆", "Rising Star", "Create 10 Pokémon", Tally::Total, 10),
    def("twentyfive", "👑", "Regional Expert", "Create 25 Pokémon", Tally::Total, 25),
    def("fifty", "🌟", "Pokémon Master", "Create 50 Pokémon", Tally::Total, 50),
    def("hundred", "💫", "Living Legend", "Create 100 Pokémon", Tally::Total, 100),
];

const SHINIES: &[AchievementDef] = &[
    def("shiny", "✨", "Lucky Find", "Find a shiny Pokémon", Tally::Shinies, 1),
    def("shiny3", "🔮", "Fortune Favors", "Find 3 shiny Pokémon", Tally::Shinies, 3),
    def("shiny5", "💎", "Shiny Hunter", "Find 5 shiny Pokémon", Tally::Shinies, 5),
    def("shiny10", "🌠", "Shiny Collector", "Find 10 shiny Pokémon", Tally::Shinies, 10),
];

const TYPE_DISCOVERIES: &[AchievementDef] = &[
    def("types5", "🎨", "Type Explorer", "Discover 5 different types", Tally::DistinctTypes, 5),
    def("types10", "🎭", "Type Enthusiast", "Discover 10 different types", Tally::DistinctTypes, 10),
    def("types15", "🎪", "Type Specialist", "Discover 15 different types", Tally::DistinctTypes, 15),
    def("types18", "🌈", "Type Master", "Discover all 18 types", Tally::DistinctTypes, 18),
];

const TYPE_SPECIALISTS: &[AchievementDef] = &[
    def("fire_fan", "🔥", "Fire Enthusiast", "Create 5 Fire-type Pokémon", Tally::OfType("Fire"), 5),
    def("water_fan", "💧", "Water Enthusiast", "Create 5 Water-type Pokémon", Tally::OfType("Water"), 5),
    def("grass_fan", "🌿", "Grass Enthusiast", "Create 5 Grass-type Pokémon", Tally::OfType("Grass"), 5),
    def("dragon_fan", "🐲", "Dragon Tamer", "Create 5 Dragon-type Pokémon", Tally::OfType("Dragon"), 5),
    def("ghost_fan", "👻", "Ghost Whisperer", "Create 5 Ghost-type Pokémon", Tally::OfType("Ghost"), 5),
    def("psychic_fan", "🔮", "Mind Bender", "Create 5 Psychic-type Pokémon", Tally::OfType("Psychic"), 5),
];

impl AchievementDef {
    fn to_rule(&self, group: &str) -> Rule {
        let counter = match self.tally {
            Tally::Total => Counter::TotalCreations,
            Tally::Shinies => Counter::RareCount,
            Tally::DistinctTypes => Counter::DistinctCategories,
            Tally::OfType(category) => Counter::category(category),
        };
        Rule::new(self.id, self.title)
            .with_description(self.description)
            .with_tag(group)
            .with_condition(Condition::at_least(counter, self.at_least))
            .with_reward(Reward::badge(self.icon))
    }
}

/// Every achievement in display order.
pub fn achievements() -> Result<RuleCatalog, DomainError> {
    let groups: [(&str, &[AchievementDef]); 4] = [
        (MILESTONE, MILESTONES),
        (SHINY, SHINIES),
        (TYPE_DISCOVERY, TYPE_DISCOVERIES),
        (TYPE_SPECIALIST, TYPE_SPECIALISTS),
    ];
    let rules = groups
        .iter()
        .flat_map(|(group, defs)| defs.iter().map(move |def| def.to_rule(group)))
        .collect();
    RuleCatalog::new(rules)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unlock::{progress, unlock_delta};
    use crate::value_objects::{AggregateStats, Subject, UnlockLedger};

    fn ids(rules: &[&Rule]) -> Vec<String> {
        rules.iter().map(|r| r.id().to_string()).collect()
    }

    #[test]
    fn test_achievements_build() {
        let catalog = achievements().unwrap();
        assert_eq!(catalog.len(), 20);
        assert_eq!(catalog.rules_by_tag(MILESTONE).len(), 6);
        assert_eq!(
            catalog.rule_by_id("types18").unwrap().reward().icon.as_deref(),
            Some("🌈")
        );
    }

    #[test]
    fn test_new_trainer_with_one_shiny() {
        let catalog = achievements().unwrap();
        let stats: Subject = AggregateStats::new(1, 1).with_category("Fire", 1).into();

        let delta = unlock_delta(&catalog, &stats, &UnlockLedger::new());

        assert_eq!(ids(&delta), vec!["first", "shiny"]);
    }

    #[test]
    fn test_type_specialist_reads_exact_category() {
        let catalog = achievements().unwrap();
        let stats: Subject = AggregateStats::new(12, 0)
            .with_category("Fire", 5)
            .with_category("Water", 4)
            .with_category("Grass", 3)
            .into();
        let ledger: UnlockLedger = ["first", "five", "ten"].into_iter().collect();

        let delta = unlock_delta(&catalog, &stats, &ledger);

        assert_eq!(ids(&delta), vec!["fire_fan"]);
    }

    #[test]
    fn test_progress_summary() {
        let catalog = achievements().unwrap();
        let mut stats = AggregateStats::new(25, 0);
        for category in ["Fire", "Water", "Grass", "Bug", "Ice"] {
            stats = stats.with_category(category, 5);
        }

        let summary = progress(&catalog, &stats.into());

        // first, five, ten, twentyfive, types5, fire_fan, water_fan, grass_fan
        assert_eq!(summary.unlocked, 8);
        assert_eq!(summary.total, 20);
    }
}
