//! The daily challenge rotation.

use crate::entities::{Rule, RuleCatalog};
use crate::error::DomainError;
use crate::value_objects::{Condition, Difficulty, Reward, RARE_FLAG};

pub const TYPE_COMBINATION: &str = "type-combination";
pub const CULTURAL: &str = "cultural";
pub const CONCEPT: &str = "concept";
pub const SPECIAL: &str = "special";

enum Requirement {
    Types(&'static [&'static str]),
    Keywords(&'static [&'static str]),
    Rare,
}

struct ChallengeDef {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    hint: &'static str,
    requirement: Requirement,
    difficulty: Difficulty,
    xp: u32,
}

use Difficulty::{Easy, Hard, Legendary, Medium};
use Requirement::{Keywords, Rare, Types};

const TYPE_COMBINATIONS: &[ChallengeDef] = &[
    ChallengeDef {
        id: "bug-steel",
        title: "Industrial Evolution",
        description: "Create a Bug/Steel type Pokémon",
        hint: "Think mechanical insects, clockwork beetles...",
        requirement: Types(&["Bug", "Steel"]),
        difficulty: Medium,
        xp: 50,
    },
    ChallengeDef {
        id: "fire-water",
        title: "Elemental Paradox",
        description: "Create a Fire/Water type Pokémon",
        hint: "Steam-powered? Hot springs? Volcanic ocean vents?",
        requirement: Types(&["Fire", "Water"]),
        difficulty: Hard,
        xp: 100,
    },
    ChallengeDef {
        id: "ghost-fairy",
        title: "Spectral Blessing",
        description: "Create a Ghost/Fairy type Pokémon",
        hint: "Will-o-wisps, spirit guardians, haunted dolls...",
        requirement: Types(&["Ghost", "Fairy"]),
        difficulty: Medium,
        xp: 50,
    },
    ChallengeDef {
        id: "dragon-ice",
        title: "Frozen Fury",
        description: "Create a Dragon/Ice type Pokémon",
        hint: "Frost wyrms, glacial serpents, arctic dragons...",
        requirement: Types(&["Dragon", "Ice"]),
        difficulty: Medium,
        xp: 50,
    },
    ChallengeDef {
        id: "psychic-dark",
        title: "Mind Games",
        description: "Create a Psychic/Dark type Pokémon",
        hint: "Nightmare beings, shadow psychics, dark prophets...",
        requirement: Types(&["Psychic", "Dark"]),
        difficulty: Hard,
        xp: 75,
    },
    ChallengeDef {
        id: "electric-ground",
        title: "Grounded Energy",
        description: "Create an Electric/Ground type Pokémon",
        hint: "Lightning rods, magnetic moles, storm burrowers...",
        requirement: Types(&["Electric", "Ground"]),
        difficulty: Medium,
        xp: 50,
    },
    ChallengeDef {
        id: "fire-grass",
        title: "Burning Bloom",
        description: "Create a Fire/Grass type Pokémon",
        hint: "Sun flowers, volcanic plants, pepper Pokémon...",
        requirement: Types(&["Fire", "Grass"]),
        difficulty: Medium,
        xp: 50,
    },
    ChallengeDef {
        id: "ice-fighting",
        title: "Cold Warrior",
        description: "Create an Ice/Fighting type Pokémon",
        hint: "Arctic martial artists, frozen warriors, ice monks...",
        requirement: Types(&["Ice", "Fighting"]),
        difficulty: Medium,
        xp: 50,
    },
    ChallengeDef {
        id: "poison-fairy",
        title: "Toxic Beauty",
        description: "Create a Poison/Fairy type Pokémon",
        hint: "Poisonous flowers, venomous pixies, deadly cute...",
        requirement: Types(&["Poison", "Fairy"]),
        difficulty: Medium,
        xp: 50,
    },
    ChallengeDef {
        id: "rock-ghost",
        title: "Living Fossil",
        description: "Create a Rock/Ghost type Pokémon",
        hint: "Haunted fossils, possessed statues, ancient spirits...",
        requirement: Types(&["Rock", "Ghost"]),
        difficulty: Medium,
        xp: 50,
    },
];

const CULTURAL_INSPIRATIONS: &[ChallengeDef] = &[
    ChallengeDef {
        id: "japanese",
        title: "Land of the Rising Sun",
        description: "Create a Pokémon inspired by Japanese mythology",
        hint: "Yokai, samurai, shrine spirits, kitsune, oni, tanuki...",
        requirement: Keywords(&[
            "japan", "japanese", "yokai", "samurai", "oni", "kitsune", "tanuki", "shrine",
            "origami",
        ]),
        difficulty: Medium,
        xp: 50,
    },
    ChallengeDef {
        id: "egyptian",
        title: "Pharaoh's Dream",
        description: "Create a Pokémon inspired by ancient Egypt",
        hint: "Pyramids, scarabs, Anubis, sphinxes, mummies, the Nile...",
        requirement: Keywords(&[
            "egypt", "pharaoh", "pyramid", "scarab", "anubis", "sphinx", "mummy", "nile",
            "hieroglyph",
        ]),
        difficulty: Medium,
        xp: 50,
    },
    ChallengeDef {
        id: "nordic",
        title: "Valhalla's Champion",
        description: "Create a Pokémon inspired by Norse mythology",
        hint: "Vikings, runes, Yggdrasil, frost giants, Valkyries...",
        requirement: Keywords(&[
            "norse", "viking", "nordic", "rune", "odin", "thor", "frost", "valkyrie", "yggdrasil",
        ]),
        difficulty: Medium,
        xp: 50,
    },
    ChallengeDef {
        id: "mexican",
        title: "Día de los Muertos",
        description: "Create a Pokémon inspired by Mexican culture",
        hint: "Sugar skulls, alebrijes, Aztec gods, Quetzalcoatl...",
        requirement: Keywords(&[
            "mexican", "aztec", "maya", "alebrije", "calavera", "quetzal", "lucha", "cactus",
        ]),
        difficulty: Medium,
        xp: 50,
    },
    ChallengeDef {
        id: "chinese",
        title: "Eastern Dragon",
        description: "Create a Pokémon inspired by Chinese mythology",
        hint: "Dragons, phoenixes, jade, the Zodiac, lanterns...",
        requirement: Keywords(&[
            "chinese", "china", "dragon", "phoenix", "jade", "zodiac", "lunar", "panda", "lantern",
        ]),
        difficulty: Medium,
        xp: 50,
    },
    ChallengeDef {
        id: "african",
        title: "Safari Dreams",
        description: "Create a Pokémon inspired by African wildlife or mythology",
        hint: "Savanna animals, Anansi, tribal patterns, baobab trees...",
        requirement: Keywords(&[
            "african", "safari", "savanna", "tribal", "anansi", "lion", "elephant", "baobab",
        ]),
        difficulty: Medium,
        xp: 50,
    },
    ChallengeDef {
        id: "greek",
        title: "Mount Olympus",
        description: "Create a Pokémon inspired by Greek mythology",
        hint: "Gods, titans, heroes, minotaurs, hydras, pegasus...",
        requirement: Keywords(&[
            "greek", "olympus", "titan", "hydra", "pegasus", "minotaur", "medusa", "centaur",
        ]),
        difficulty: Medium,
        xp: 50,
    },
    ChallengeDef {
        id: "indian",
        title: "Mystic Subcontinent",
        description: "Create a Pokémon inspired by Indian mythology",
        hint: "Elephants, cobras, peacocks, mandalas, lotus flowers...",
        requirement: Keywords(&[
            "indian", "india", "elephant", "cobra", "peacock", "mandala", "lotus", "tiger",
            "ganesh",
        ]),
        difficulty: Medium,
        xp: 50,
    },
    ChallengeDef {
        id: "celtic",
        title: "Ancient Druids",
        description: "Create a Pokémon inspired by Celtic mythology",
        hint: "Druids, faeries, leprechauns, standing stones, clovers...",
        requirement: Keywords(&[
            "celtic", "druid", "faerie", "leprechaun", "clover", "irish", "scotland", "stone",
        ]),
        difficulty: Medium,
        xp: 50,
    },
    ChallengeDef {
        id: "polynesian",
        title: "Island Spirits",
        description: "Create a Pokémon inspired by Polynesian culture",
        hint: "Tiki, ocean voyagers, volcanoes, tribal tattoos, Maui...",
        requirement: Keywords(&[
            "polynesian", "hawaii", "tiki", "maori", "ocean", "island", "volcano", "tribal",
        ]),
        difficulty: Medium,
        xp: 50,
    },
];

const CONCEPTS: &[ChallengeDef] = &[
    ChallengeDef {
        id: "food-pokemon",
        title: "Gourmet Creature",
        description: "Create a Pokémon based on food or cooking",
        hint: "Sushi, pizza, sentient vegetables, dessert creatures...",
        requirement: Keywords(&[
            "food", "cook", "chef", "sushi", "pizza", "cake", "fruit", "vegetable", "candy",
            "dessert",
        ]),
        difficulty: Easy,
        xp: 30,
    },
    ChallengeDef {
        id: "music-pokemon",
        title: "Symphony Spirit",
        description: "Create a Pokémon based on music or instruments",
        hint: "Guitar, drums, singing creatures, sound wave beings...",
        requirement: Keywords(&[
            "music", "instrument", "guitar", "drum", "sing", "melody", "rhythm", "piano", "flute",
        ]),
        difficulty: Medium,
        xp: 50,
    },
    ChallengeDef {
        id: "space-pokemon",
        title: "Cosmic Entity",
        description: "Create a Pokémon from outer space",
        hint: "Stars, nebulae, black holes, aliens, comets, asteroids...",
        requirement: Keywords(&[
            "space", "star", "cosmic", "nebula", "galaxy", "alien", "meteor", "comet", "moon",
            "planet",
        ]),
        difficulty: Medium,
        xp: 50,
    },
    ChallengeDef {
        id: "ocean-depths",
        title: "Abyssal Horror",
        description: "Create a Pokémon from the deep sea",
        hint: "Anglerfish, giant squid, bioluminescence, trenches...",
        requirement: Keywords(&[
            "deep",
            "ocean",
            "abyss",
            "anglerfish",
            "squid",
            "bioluminescent",
            "trench",
            "pressure",
        ]),
        difficulty: Medium,
        xp: 50,
    },
    ChallengeDef {
        id: "fossil-pokemon",
        title: "Prehistoric Revival",
        description: "Create a fossil Pokémon from a prehistoric era",
        hint: "Dinosaurs, trilobites, ancient plants, amber...",
        requirement: Keywords(&[
            "fossil",
            "prehistoric",
            "dinosaur",
            "ancient",
            "extinct",
            "trilobite",
            "amber",
            "jurassic",
        ]),
        difficulty: Medium,
        xp: 50,
    },
    ChallengeDef {
        id: "tech-pokemon",
        title: "Digital Entity",
        description: "Create a Pokémon based on technology",
        hint: "Robots, AI, viruses, circuits, holographic beings...",
        requirement: Keywords(&[
            "robot", "tech", "digital", "cyber", "AI", "machine", "circuit", "computer",
            "hologram",
        ]),
        difficulty: Medium,
        xp: 50,
    },
    ChallengeDef {
        id: "weather-pokemon",
        title: "Storm Bringer",
        description: "Create a Pokémon that embodies weather phenomena",
        hint: "Hurricanes, tornadoes, lightning storms, blizzards...",
        requirement: Keywords(&[
            "weather",
            "storm",
            "hurricane",
            "tornado",
            "lightning",
            "blizzard",
            "rain",
            "thunder",
            "cloud",
        ]),
        difficulty: Medium,
        xp: 50,
    },
    ChallengeDef {
        id: "crystal-pokemon",
        title: "Gem Guardian",
        description: "Create a Pokémon made of or inspired by crystals/gems",
        hint: "Diamonds, amethyst, crystal caves, precious gems...",
        requirement: Keywords(&[
            "crystal", "gem", "diamond", "amethyst", "ruby", "sapphire", "jewel", "prism",
        ]),
        difficulty: Easy,
        xp: 30,
    },
    ChallengeDef {
        id: "plant-pokemon",
        title: "Botanical Beast",
        description: "Create a unique plant-based Pokémon",
        hint: "Carnivorous plants, ancient trees, magical flowers...",
        requirement: Keywords(&[
            "plant",
            "flower",
            "tree",
            "vine",
            "botanical",
            "carnivorous",
            "forest",
            "garden",
            "seed",
        ]),
        difficulty: Easy,
        xp: 30,
    },
    ChallengeDef {
        id: "time-pokemon",
        title: "Temporal Anomaly",
        description: "Create a Pokémon related to time",
        hint: "Clocks, hourglasses, time loops, ancient/futuristic...",
        requirement: Keywords(&[
            "time", "clock", "hourglass", "temporal", "future", "past", "ancient", "eternal",
        ]),
        difficulty: Hard,
        xp: 75,
    },
];

const SPECIALS: &[ChallengeDef] = &[
    ChallengeDef {
        id: "shiny-hunter",
        title: "Shiny Hunter",
        description: "Find a shiny Pokémon! (1/4096 chance)",
        hint: "Keep creating... luck will find you eventually!",
        requirement: Rare,
        difficulty: Legendary,
        xp: 500,
    },
    ChallengeDef {
        id: "cute-pokemon",
        title: "Adorable Creation",
        description: "Create the cutest Pokémon you can imagine",
        hint: "Big eyes, fluffy, small, round, pastel colors...",
        requirement: Keywords(&[
            "cute", "adorable", "fluffy", "small", "baby", "round", "soft", "cuddly",
        ]),
        difficulty: Easy,
        xp: 30,
    },
    ChallengeDef {
        id: "scary-pokemon",
        title: "Nightmare Fuel",
        description: "Create a genuinely terrifying Pokémon",
        hint: "Horror themes, dark creatures, things that lurk in shadows...",
        requirement: Keywords(&[
            "scary", "horror", "dark", "nightmare", "terror", "creepy", "sinister", "shadow",
        ]),
        difficulty: Medium,
        xp: 50,
    },
    ChallengeDef {
        id: "legendary-concept",
        title: "Legendary Aspirations",
        description: "Create a Pokémon worthy of legendary status",
        hint: "God-like beings, ancient guardians, cosmic entities...",
        requirement: Keywords(&[
            "legendary", "mythical", "god", "guardian", "ancient", "powerful", "cosmic", "divine",
        ]),
        difficulty: Hard,
        xp: 100,
    },
    ChallengeDef {
        id: "starter-style",
        title: "Starter Material",
        description: "Create a Pokémon that could be a regional starter",
        hint: "Fire, Water, or Grass type with evolution potential...",
        requirement: Keywords(&["starter", "first", "partner", "beginning", "young", "evolve"]),
        difficulty: Medium,
        xp: 50,
    },
];

impl ChallengeDef {
    fn to_rule(&self, group: &str) -> Rule {
        let condition = match self.requirement {
            Types(types) => Condition::types(types.iter().copied()),
            Keywords(keywords) => Condition::keywords(keywords.iter().copied()),
            Rare => Condition::flag(RARE_FLAG),
        };
        Rule::new(self.id, self.title)
            .with_description(self.description)
            .with_hint(self.hint)
            .with_tag(self.difficulty.as_str())
            .with_tag(group)
            .with_condition(condition)
            .with_reward(Reward::challenge(self.difficulty, self.xp))
    }
}

/// Every daily challenge in rotation order.
///
/// Each rule is tagged with its difficulty (`"easy"` … `"legendary"`) and its
/// group ([`TYPE_COMBINATION`], [`CULTURAL`], [`CONCEPT`], [`SPECIAL`]).
pub fn daily_challenges() -> Result<RuleCatalog, DomainError> {
    let groups: [(&str, &[ChallengeDef]); 4] = [
        (TYPE_COMBINATION, TYPE_COMBINATIONS),
        (CULTURAL, CULTURAL_INSPIRATIONS),
        (CONCEPT, CONCEPTS),
        (SPECIAL, SPECIALS),
    ];
    let rules = groups
        .iter()
        .flat_map(|(group, defs)| defs.iter().map(move |def| def.to_rule(group)))
        .collect();
    RuleCatalog::new(rules)
}
