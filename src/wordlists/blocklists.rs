//! Hand-maintained block lists for curated word lists
//!
//! Candidate-level lists keep words out of guesses and answers alike.
//! Answer-level lists only keep words from being chosen as answers; they stay
//! guessable.

use rustc_hash::FxHashSet;
use std::sync::LazyLock;

/// Explicit adult, profane or otherwise unsuitable terms
pub const CUSTOM_BLOCK: &[&str] = &[
    "sex", "sexy", "sext", "porno", "porn", "xxx", "nude", "nudes", "naked", "boob", "boobs",
    "penis", "vulva", "anus", "dildo", "fetish", "bdsm", "strip", "stripper", "whore", "slut",
    "sluts", "cunt", "cunts", "fuck", "fucks", "fucked", "fucking", "shit", "shits", "shitty",
    "bitch", "bitches", "bastard", "bastards", "dick", "dicks", "pussy", "twat", "twats", "wank",
    "wanks",
    // topics and substances
    "gay", "gin", "rum", "beer", "booze", "vodka", "drunk", "drugs", "drug", "smoke", "cigar",
    "vape", "hookah",
];

/// Acronyms that show up as lower-case tokens
pub const ABBREVIATIONS: &[&str] = &[
    "fbi", "cia", "nsa", "dna", "rna", "usa", "uk", "eu", "un", "nato", "nasa", "gps", "cpu",
    "gpu", "api", "html", "http", "https", "sql", "tcp", "udp", "dvd", "cd", "tv", "sms", "mri",
    "ct", "faq", "diy",
];

pub const INTERJECTIONS: &[&str] = &[
    "aah", "aaah", "aaaah", "hah", "haha", "hee", "heh", "hmm", "huh", "hon", "hoo", "oh", "ooh",
    "uh", "um", "aha", "aw", "aww", "eh", "hm", "hmmm", "ha", "ho", "yo", "yow", "whoa", "woah",
];

pub const ARCHAIC: &[&str] = &[
    "thee", "thou", "thy", "hath", "doth", "shalt", "whilst", "unto", "ye", "art", "hast", "ere",
];

/// Words ending in `s` that are not plurals
pub const NON_PLURAL_S: &[&str] = &[
    "as", "is", "was", "his", "its", "this", "thus", "us", "yes", "gas", "bus",
];

const ANSWER_INTERJECTIONS: &[&str] = &[
    "agh", "ahh", "ahem", "ahhh", "argh", "blah", "boo", "beep", "erm", "mmm", "nah", "ohh",
    "ohhh", "oooh", "psst", "shh", "shhh", "ugh", "uhh", "umm", "unh", "wow", "yah", "yay", "yep",
    "yea",
];

const ANSWER_NONLEXICAL: &[&str] = &["aii", "iii"];

const ANSWER_ABBREVIATIONS: &[&str] = &[
    "asap", "ceo", "etc", "iot", "mrs", "sec", "seo", "pro", "sub", "cctv",
];

const ANSWER_FOREIGN: &[&str] = &[
    "aye", "bon", "eun", "oui", "que", "raj", "jai", "jin", "tae", "rio", "san", "bien", "ciao",
    "casa", "bhai", "feng",
];

const ANSWER_COLLOQUIAL: &[&str] = &[
    "nah", "yah", "yea", "yep", "dawg", "dude", "dope", "dork", "bout",
];

const ANSWER_FRAGMENTS: &[&str] = &[
    "isn", "til", "wha", "tha", "aren", "cant", "dont", "didn", "doin", "areyou", "couldn",
    "wouldn",
];

const ANSWER_NAMES: &[&str] = &["jax", "lex", "rio", "raj", "jin", "jai", "tae"];

const ANSWER_AMBIGUOUS: &[&str] = &["pub", "bra", "bro", "spa"];

/// Bodily functions, insults, violence and substances
const ANSWER_SENSITIVE: &[&str] = &[
    "bomb", "bums", "cult", "dead", "doom", "dumb", "dung", "fart", "feds", "guns", "hate",
    "kill", "poop", "puke", "abused", "addict", "badass", "battle", "bloods", "bloody", "bodies",
    "corpse", "damned", "drunks", "killer", "morons", "murder", "poison", "pooped", "stupid",
    "terror", "weapon",
];

/// Reviewed by hand: places, people, slang, dialect spellings and dark themes
const ANSWER_MANUAL_BLOCK: &[&str] = &[
    // three letters
    "ain", "die", "doc", "doo", "had", "med", "non", "pee", "sin", "yen",
    // four letters
    "afar", "aahs", "ammo", "arab", "blog", "both", "choi", "cuba", "daft", "data", "demo",
    "disc", "disk", "dorm", "duct", "envy", "epic", "euro", "exam", "feet", "folk", "foul",
    "fury", "gang", "geez", "goin", "gosh", "guru", "hasn", "hari", "heil", "hell", "hiya",
    "hyah", "hyun", "iife", "iike", "info", "into", "iove", "iraq", "iowa", "jail", "jerk",
    "junk", "kang", "kitt", "lapd", "limo", "lire", "mein", "memo", "mold", "mutt", "mwah",
    "nder", "nope", "nypd", "oath", "ohio", "omen", "oppa", "oral", "perp", "peru", "phew",
    "posh", "prep", "prom", "punk", "quiz", "quid", "raja", "raju", "reno", "riot", "scam",
    "scum", "shan", "shot", "sire", "slay", "some", "stab", "thug", "thud", "thus", "ting",
    "tong", "toto", "turd", "unit", "upon", "user", "vain", "vent", "vega", "vibe", "void",
    "whew", "whoo", "wimp", "with", "woof", "xiao", "yang", "yeah", "yeon", "ying", "yoon",
    "yuck", "yuki", "yuan", "zhao", "zoey",
    // six letters
    "abduct", "accuse", "aditya", "afghan", "alaska", "albany", "alvaro", "amazon", "ambush",
    "annika", "arabia", "arabic", "arctic", "armani", "armory", "armpit", "arouse", "arkady",
    "attack", "attila", "auggie", "avenge", "bandit", "banish", "barack", "barbed", "bashir",
    "baltic", "beirut", "bengal", "betcha", "bieber", "biggie", "bikini", "blimey", "bodily",
    "bojack", "bombay", "bombed", "bomber", "borgia", "bosnia", "boston", "brando", "brazil",
    "bullet", "cahill", "callen", "callin", "canton", "carnal", "cartel", "cayman", "chandi",
    "chandu", "chanel", "charly", "chopin", "christ", "climax", "cognac", "combat", "corset",
    "cortez", "crotch", "crusoe", "cursed", "daimon", "dakota", "dancin", "dagger", "danube",
    "darlin", "deadly", "deepak", "defeat", "denzel", "detain", "dharma", "diablo", "diaper",
    "disarm", "disney", "dosage", "dooley", "donner", "drivin", "duress", "dunbar", "eiffel",
    "eureka", "europe", "fallin", "farnon", "farted", "fawlty", "feelin", "felony", "filthy",
    "figaro", "forbid", "forged", "forman", "forthe", "foryou", "franco", "fresno", "fuhrer",
    "gandhi", "ganesh", "gaulle", "geisha", "ghetto", "gettin", "google", "gotcha", "gotham",
    "grammy", "greece", "guinea", "guilty", "gunman", "gunmen", "gunned", "hahaha", "hangin",
    "harass", "harlot", "hatred", "havana", "hawaii", "hearst", "hefner", "hernia", "hikaru",
    "hitman", "hitomi", "holdin", "holdup", "hooray", "hurrah", "hurray", "hottie", "iittle",
    "indian", "injure", "injury", "inmate", "invade", "jailed", "jailer", "jagger", "jawohl",
    "jekyll", "jewish", "jonesy", "joseon", "julien", "jumong", "kaylie", "keaton", "keepin",
    "keisha", "kepler", "kerala", "kidnap", "kiddin", "killed", "killin", "kimchi", "kimono",
    "kisser", "kickin", "kraang", "krusty", "kosovo", "kuwait", "leavin", "lethal", "liquor",
    "lisbon", "lookie", "lookin", "lookit", "louvre", "luthor", "madrid", "maggot", "makoto",
    "malibu", "manila", "mannix", "manure", "marple", "martyr", "messin", "mexico", "morbid",
    "mormon", "morgue", "mornin", "mortar", "mosque", "mossad", "mstoll", "mulder", "mumbai",
    "munich", "musket", "muzzle", "naruto", "nassau", "neelix", "newark", "nikhil", "noriko",
    "nothin", "norway", "occult", "oregon", "ortega", "oughta", "pacino", "pawnee", "peeing",
    "peking", "pelvic", "perish", "persia", "petrov", "phaser", "picard", "pilate", "pimple",
    "pirate", "pistol", "plague", "playin", "poirot", "popeye", "prague", "pratap", "prenup",
    "prison", "probst", "psycho", "puerto", "punish", "punjab", "puking", "pusher", "puttin",
    "quebec", "racism", "racist", "rajesh", "ramesh", "ramiro", "rashid", "raylan", "renoir",
    "revoir", "righto", "righty", "ritual", "robbed", "robber", "rockin", "romero", "rommel",
    "rommie", "roxton", "runnin", "rupaul", "saigon", "sachin", "saddam", "sakura", "salaam",
    "sameer", "sasaki", "saturn", "scotch", "scooby", "senora", "sensei", "serbia", "sergey",
    "sewage", "shakin", "sheikh", "sicily", "singin", "sinbad", "sittin", "slayer", "sleazy",
    "smoked", "smoker", "smokey", "smokin", "sniper", "snitch", "soviet", "spleen", "stalin",
    "stayin", "stewie", "stolen", "strike", "struck", "suarez", "summat", "sultan", "sunbae",
    "sutter", "suzuki", "sweden", "syrian", "takeda", "takumi", "taelon", "tahiti", "taipei",
    "taiwan", "talkin", "tampon", "tehran", "tellin", "threat", "thrash", "tigger", "tinkle",
    "tintin", "tissue", "toledo", "toilet", "topher", "toyota", "trauma", "tucson", "tycoon",
    "tyrant", "uganda", "undead", "unholy", "verona", "vienna", "viktor", "vikram", "victim",
    "vishal", "vishnu", "voight", "vulcan", "vulgar", "warsaw", "waitin", "weirdo", "weller",
    "whisky", "whoosh", "woulda", "workin", "xander", "yakuza", "yamada", "yamato", "yippee",
    "zodiac", "zombie", "zordon", "zurich", "booger", "breast", "coulda", "hijack", "hobson",
    "moreau", "ofyour",
];

/// Every word kept out of the answer pool
pub static ANSWER_BLOCK: LazyLock<FxHashSet<&'static str>> = LazyLock::new(|| {
    [
        ANSWER_INTERJECTIONS,
        ANSWER_NONLEXICAL,
        ANSWER_ABBREVIATIONS,
        ANSWER_FOREIGN,
        ANSWER_COLLOQUIAL,
        ANSWER_FRAGMENTS,
        ANSWER_NAMES,
        ANSWER_AMBIGUOUS,
        ANSWER_SENSITIVE,
        ANSWER_MANUAL_BLOCK,
    ]
    .concat()
    .into_iter()
    .collect()
});

/// Archaic words, abbreviations and interjections, combined
pub static NON_WORDS: LazyLock<FxHashSet<&'static str>> =
    LazyLock::new(|| [ARCHAIC, ABBREVIATIONS, INTERJECTIONS].concat().into_iter().collect());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answer_block_merges_every_category() {
        for word in ["wow", "iii", "ceo", "ciao", "dude", "dont", "jax", "spa", "kill", "reno"] {
            assert!(ANSWER_BLOCK.contains(word), "{word} should be blocked");
        }
        assert!(!ANSWER_BLOCK.contains("lamp"));
    }

    #[test]
    fn manual_block_keeps_common_function_words_out_of_answers() {
        for word in ["had", "into", "upon", "some"] {
            assert!(ANSWER_BLOCK.contains(word), "{word} should be blocked");
        }
        assert!(!ANSWER_BLOCK.contains("n"));
    }

    #[test]
    fn non_words_cover_archaic_and_acronyms() {
        assert!(NON_WORDS.contains("thou"));
        assert!(NON_WORDS.contains("nasa"));
        assert!(NON_WORDS.contains("hmm"));
        assert!(!NON_WORDS.contains("cat"));
    }

    #[test]
    fn block_lists_are_lowercase_ascii() {
        let all = [CUSTOM_BLOCK, ABBREVIATIONS, INTERJECTIONS, ARCHAIC, NON_PLURAL_S].concat();
        for word in all.iter().chain(ANSWER_BLOCK.iter()) {
            assert!(word.bytes().all(|b| b.is_ascii_lowercase()), "{word}");
        }
    }
}
