//! Curated word lists for style checking.
//!
//! Default inventories for the three checkers: weasel-word patterns, "to be"
//! conjugations, and irregular past participles. All three can be replaced or
//! extended through configuration.

/// Default weasel-word patterns.
///
/// Entries are regex fragments, not literal words: multi-word phrases and
/// small alternations (e.g. `(?:are|is) a number`) are permitted. Each entry
/// is boundary-anchored as a whole when the scan pattern is built.
pub const DEFAULT_WEASEL_WORDS: &[&str] = &[
    "many",
    "various",
    "very",
    "fairly",
    "several",
    "extremely",
    "exceedingly",
    "quite",
    "remarkably",
    "few",
    "surprisingly",
    "mostly",
    "largely",
    "huge",
    "tiny",
    "(?:are|is) a number",
    "excellent",
    "interestingly",
    "significantly",
    "substantially",
    "clearly",
    "vast",
    "relatively",
    "completely",
];

/// Conjugations of "to be" that can open a passive construction.
pub const TO_BE_VERBS: &[&str] = &["am", "is", "are", "was", "were", "be", "been", "being"];

/// Irregular English past participles.
///
/// The fixed inventory scanned for after a to-be verb. Regular `-ed`
/// participles are intentionally absent: matching every `-ed` word after "is"
/// produces far more noise than signal, so only the irregular forms that
/// cannot be recognized by suffix are listed.
pub const IRREGULAR_PAST_PARTICIPLES: &[&str] = &[
    "awoken",
    "been",
    "born",
    "beat",
    "become",
    "begun",
    "bent",
    "beset",
    "bet",
    "bid",
    "bidden",
    "bound",
    "bitten",
    "bled",
    "blown",
    "broken",
    "bred",
    "brought",
    "broadcast",
    "built",
    "burnt",
    "burst",
    "bought",
    "caught",
    "chosen",
    "clung",
    "come",
    "cost",
    "crept",
    "cut",
    "dealt",
    "dug",
    "dived",
    "done",
    "drawn",
    "dreamt",
    "driven",
    "drunk",
    "eaten",
    "fallen",
    "fed",
    "felt",
    "fought",
    "found",
    "fit",
    "fled",
    "flung",
    "flown",
    "forbidden",
    "forgotten",
    "foregone",
    "forgiven",
    "forsaken",
    "frozen",
    "gotten",
    "given",
    "gone",
    "ground",
    "grown",
    "hung",
    "heard",
    "hidden",
    "hit",
    "held",
    "hurt",
    "kept",
    "knelt",
    "knit",
    "known",
    "laid",
    "led",
    "leapt",
    "learnt",
    "left",
    "lent",
    "let",
    "lain",
    "lighted",
    "lost",
    "made",
    "meant",
    "met",
    "misspelt",
    "mistaken",
    "mown",
    "overcome",
    "overdone",
    "overtaken",
    "overthrown",
    "paid",
    "pled",
    "proven",
    "put",
    "quit",
    "read",
    "rid",
    "ridden",
    "rung",
    "risen",
    "run",
    "sawn",
    "said",
    "seen",
    "sought",
    "sold",
    "sent",
    "set",
    "sewn",
    "shaken",
    "shaven",
    "shorn",
    "shed",
    "shone",
    "shod",
    "shot",
    "shown",
    "shrunk",
    "shut",
    "sung",
    "sunk",
    "sat",
    "slept",
    "slain",
    "slid",
    "slung",
    "slit",
    "smitten",
    "sown",
    "spoken",
    "sped",
    "spent",
    "spilt",
    "spun",
    "spit",
    "split",
    "spread",
    "sprung",
    "stood",
    "stolen",
    "stuck",
    "stung",
    "stunk",
    "stridden",
    "struck",
    "strung",
    "striven",
    "sworn",
    "swept",
    "swollen",
    "swum",
    "swung",
    "taken",
    "taught",
    "torn",
    "told",
    "thought",
    "thrived",
    "thrown",
    "thrust",
    "trodden",
    "understood",
    "upheld",
    "upset",
    "woken",
    "woven",
    "wed",
    "wept",
    "wound",
    "won",
    "withheld",
    "withstood",
    "wrung",
    "written",
];
