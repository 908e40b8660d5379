//! Named word and phrase tables consulted by rules.
//!
//! Rules reference a lexicon by [`LexiconId`] instead of embedding word lists
//! in their patterns: a cheap structural pre-match captures a token, and the
//! lowercase token is looked up here in O(1). Word sets are tables whose
//! values are empty. Table values may hold several alternatives separated by
//! `|`, best first.

use std::sync::LazyLock;

use quill_core::FxHashMap;
use serde::{Deserialize, Serialize};

use super::morphology;

/// Identifier of a built-in lexicon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LexiconId {
    BaseVerbs,
    ThirdPersonVerbs,
    PerceptionAndModalWords,
    SubjunctiveTriggers,
    RomanNumeralContext,
    BeAgreement,
    AuxAgreement,
    PastParticiples,
    Overregularized,
    ConsonantSoundVowelWords,
    VowelSoundWords,
    NegativeToAny,
    WordSwaps,
    IngNouns,
    Misspellings,
    MissingApostrophes,
    Redundancies,
    WordyPhrases,
    StrongWords,
    Cliches,
    HedgingPhrases,
    Contractions,
    InformalWords,
    VagueWords,
    AdjectivalParticiples,
    BritishToAmerican,
    AmericanToBritish,
    CommonWords,
    Abbreviations,
    RepeatableWords,
    NegationWords,
    ConditionalWords,
    PastMarkers,
    PresentMarkers,
    FutureMarkers,
}

impl LexiconId {
    /// Every lexicon, in declaration order.
    pub fn all() -> &'static [LexiconId] {
        use LexiconId::*;
        &[
            BaseVerbs, ThirdPersonVerbs, PerceptionAndModalWords, SubjunctiveTriggers,
            RomanNumeralContext, BeAgreement, AuxAgreement, PastParticiples,
            Overregularized, ConsonantSoundVowelWords, VowelSoundWords, NegativeToAny,
            WordSwaps, IngNouns, Misspellings, MissingApostrophes, Redundancies,
            WordyPhrases, StrongWords, Cliches, HedgingPhrases, Contractions,
            InformalWords, VagueWords, AdjectivalParticiples, BritishToAmerican,
            AmericanToBritish, CommonWords, Abbreviations, RepeatableWords,
            NegationWords, ConditionalWords, PastMarkers, PresentMarkers, FutureMarkers,
        ]
    }

    /// The built lexicon for this id.
    pub fn lexicon(self) -> &'static Lexicon {
        &LEXICONS[self as usize]
    }
}

/// A lowercase lookup table.
#[derive(Debug, Default)]
pub struct Lexicon {
    entries: FxHashMap<String, String>,
}

impl Lexicon {
    fn from_table(table: &[(&str, &str)]) -> Self {
        let entries = table
            .iter()
            .map(|(k, v)| (normalize(k), (*v).to_string()))
            .collect();
        Self { entries }
    }

    fn from_words(words: &[&str]) -> Self {
        let entries = words.iter().map(|w| (normalize(w), String::new())).collect();
        Self { entries }
    }

    /// Whether the (normalized) word or phrase is present.
    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(&normalize(word))
    }

    /// The raw value stored for a word, if any.
    pub fn get(&self, word: &str) -> Option<&str> {
        self.entries.get(&normalize(word)).map(String::as_str)
    }

    /// All alternatives stored for a word, best first. Empty if absent.
    pub fn alternatives(&self, word: &str) -> Vec<&str> {
        match self.get(word) {
            Some(v) => v.split('|').map(str::trim).collect(),
            None => Vec::new(),
        }
    }

    /// Keys of the lexicon (normalized), in arbitrary order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Lowercase, fold typographic apostrophes, and collapse inner whitespace.
pub fn normalize(word: &str) -> String {
    let folded = word.trim().replace('\u{2019}', "'").to_lowercase();
    let mut out = String::with_capacity(folded.len());
    for (i, part) in folded.split_whitespace().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(part);
    }
    out
}

static LEXICONS: LazyLock<Vec<Lexicon>> =
    LazyLock::new(|| LexiconId::all().iter().map(|id| build(*id)).collect());

fn build(id: LexiconId) -> Lexicon {
    use LexiconId::*;
    match id {
        BaseVerbs => Lexicon::from_words(BASE_VERBS),
        ThirdPersonVerbs => {
            let entries = BASE_VERBS
                .iter()
                .map(|base| (morphology::third_person_singular(base), (*base).to_string()))
                .collect();
            Lexicon { entries }
        }
        PerceptionAndModalWords => Lexicon::from_words(PERCEPTION_AND_MODAL_WORDS),
        SubjunctiveTriggers => Lexicon::from_words(&[
            "if", "wish", "wished", "wishes", "as", "though", "suppose", "supposing",
            "unless", "whether", "imagine", "lest",
        ]),
        RomanNumeralContext => Lexicon::from_words(&[
            "war", "chapter", "part", "phase", "stage", "king", "queen", "henry", "louis",
            "george", "edward", "elizabeth", "charles", "james", "type", "class", "act",
            "volume", "section", "level", "book", "appendix", "figure", "table",
        ]),
        BeAgreement => Lexicon::from_table(&[
            ("is", "are"),
            ("was", "were"),
            ("are", "is"),
            ("were", "was"),
        ]),
        AuxAgreement => Lexicon::from_table(&[
            ("don't", "doesn't"),
            ("do not", "does not"),
            ("have", "has"),
            ("haven't", "hasn't"),
            ("have not", "has not"),
        ]),
        PastParticiples => Lexicon::from_table(PAST_PARTICIPLES),
        Overregularized => Lexicon::from_table(OVERREGULARIZED),
        ConsonantSoundVowelWords => Lexicon::from_words(&[
            "university", "universities", "unique", "uniform", "union", "unit", "united",
            "universal", "universe", "user", "users", "useful", "usual", "usually", "usage",
            "utility", "utensil", "utopia", "euro", "euros", "european", "eulogy", "one",
            "once", "ewe", "unicorn", "uranium", "urinal", "use", "used",
        ]),
        VowelSoundWords => Lexicon::from_words(&[
            "hour", "hours", "hourly", "honest", "honestly", "honesty", "honor", "honour",
            "honorable", "honourable", "honorary", "heir", "heiress", "herb", "herbs", "x",
            "x-ray", "mba", "fbi", "mri", "sql",
        ]),
        NegativeToAny => Lexicon::from_table(&[
            ("nothing", "anything"),
            ("nobody", "anybody"),
            ("nowhere", "anywhere"),
            ("no one", "anyone"),
            ("none", "any"),
            ("no", "any"),
        ]),
        WordSwaps => Lexicon::from_table(&[
            ("your", "you're"),
            ("its", "it's"),
            ("their", "there"),
            ("there", "their"),
            ("then", "than"),
            ("of", "have"),
            ("loose", "lose"),
            ("effect", "affect"),
            ("to", "too"),
            ("less", "fewer"),
            ("accept", "except"),
            ("i", "me"),
        ]),
        IngNouns => Lexicon::from_words(ING_NOUNS),
        Misspellings => Lexicon::from_table(MISSPELLINGS),
        MissingApostrophes => Lexicon::from_table(MISSING_APOSTROPHES),
        Redundancies => Lexicon::from_table(REDUNDANCIES),
        WordyPhrases => Lexicon::from_table(WORDY_PHRASES),
        StrongWords => Lexicon::from_table(STRONG_WORDS),
        Cliches => Lexicon::from_table(CLICHES),
        HedgingPhrases => Lexicon::from_words(&[
            "i think that", "i believe that", "i feel that", "it seems that",
            "in my opinion", "sort of", "kind of", "more or less", "to some extent",
            "it could be argued that", "i guess",
        ]),
        Contractions => Lexicon::from_table(CONTRACTIONS),
        InformalWords => Lexicon::from_table(INFORMAL_WORDS),
        VagueWords => Lexicon::from_words(&[
            "thing", "things", "stuff", "something", "somehow", "somewhat", "various",
            "aspect", "aspects", "factor", "factors",
        ]),
        AdjectivalParticiples => Lexicon::from_words(&[
            "tired", "interested", "excited", "bored", "worried", "married", "used",
            "supposed", "concerned", "pleased", "surprised", "scared", "based", "located",
            "involved", "related", "required", "satisfied", "disappointed", "confused",
            "embarrassed", "amazed", "annoyed", "frightened", "qualified", "prepared",
            "allowed", "finished", "done", "gone", "dressed", "engaged", "retired",
            "exhausted", "focused", "committed", "determined", "experienced", "skilled",
            "shed", "sacred", "naked", "wicked", "beloved", "aged", "ashamed", "rugged",
            "need", "indeed",
        ]),
        BritishToAmerican => Lexicon::from_table(BRITISH_TO_AMERICAN),
        AmericanToBritish => {
            let entries = BRITISH_TO_AMERICAN
                .iter()
                .map(|(uk, us)| (normalize(us), (*uk).to_string()))
                .collect();
            Lexicon { entries }
        }
        CommonWords => Lexicon::from_words(COMMON_WORDS),
        Abbreviations => Lexicon::from_words(&[
            "e.g", "i.e", "etc", "vs", "mr", "mrs", "ms", "dr", "st", "jr", "sr", "prof",
            "a.m", "p.m", "approx", "dept", "no", "fig", "inc", "ltd", "co", "u.s",
        ]),
        RepeatableWords => Lexicon::from_words(&["that", "had", "is", "do", "bye", "no", "very", "so"]),
        NegationWords => Lexicon::from_words(&[
            "not", "no", "never", "nor", "neither", "without", "don't", "doesn't", "didn't",
            "isn't", "aren't", "wasn't", "weren't", "can't", "cannot", "won't", "wouldn't",
            "shouldn't", "couldn't", "hardly", "barely",
        ]),
        ConditionalWords => Lexicon::from_words(&[
            "if", "unless", "whether", "would", "could", "might", "suppose", "supposing",
            "assuming", "provided", "perhaps", "maybe",
        ]),
        PastMarkers => Lexicon::from_words(PAST_MARKERS),
        PresentMarkers => Lexicon::from_words(&[
            "is", "are", "am", "has", "does", "isn't", "aren't", "doesn't", "hasn't",
            "today", "now", "currently", "nowadays", "presently",
        ]),
        FutureMarkers => Lexicon::from_words(&[
            "will", "shall", "won't", "tomorrow", "soon", "someday", "eventually",
        ]),
    }
}

const BASE_VERBS: &[&str] = &[
    "run", "go", "do", "have", "want", "like", "make", "take", "come", "see", "know",
    "think", "say", "get", "give", "work", "play", "walk", "talk", "eat", "write", "live",
    "seem", "feel", "try", "leave", "call", "ask", "use", "find", "tell", "become", "show",
    "mean", "keep", "begin", "help", "start", "move", "believe", "bring", "happen", "sit",
    "stand", "lose", "pay", "meet", "include", "continue", "learn", "change", "lead",
    "understand", "watch", "follow", "stop", "create", "speak", "allow", "add", "spend",
    "grow", "open", "win", "teach", "offer", "remember", "love", "consider", "appear",
    "buy", "wait", "serve", "die", "send", "expect", "build", "stay", "fall", "reach",
    "remain", "suggest", "raise", "pass", "sell", "require", "report", "decide", "pull",
    "jump", "swim", "sing", "drive", "fly", "cook", "clean", "dance", "sleep", "study",
    "enjoy", "hope", "carry", "travel", "listen", "look", "play", "agree", "arrive",
    "break", "catch", "choose", "cry", "drink", "fix", "hate", "laugh", "miss", "push",
    "wash", "wish", "worry", "finish", "explain", "answer", "visit", "prefer", "smile",
];

const PERCEPTION_AND_MODAL_WORDS: &[&str] = &[
    "make", "makes", "made", "let", "lets", "help", "helps", "helped", "see", "sees", "saw",
    "seen", "watch", "watches", "watched", "hear", "hears", "heard", "feel", "feels", "felt",
    "notice", "notices", "noticed", "have", "has", "had", "do", "does", "did", "will",
    "would", "can", "could", "shall", "should", "must", "might", "may", "to", "lest",
];

const PAST_PARTICIPLES: &[(&str, &str)] = &[
    ("went", "gone"), ("came", "come"), ("ran", "run"), ("saw", "seen"), ("did", "done"),
    ("ate", "eaten"), ("wrote", "written"), ("took", "taken"), ("gave", "given"),
    ("spoke", "spoken"), ("broke", "broken"), ("began", "begun"), ("drank", "drunk"),
    ("drove", "driven"), ("chose", "chosen"), ("forgot", "forgotten"), ("swam", "swum"),
    ("rode", "ridden"), ("sang", "sung"), ("stole", "stolen"), ("threw", "thrown"),
    ("knew", "known"), ("grew", "grown"), ("flew", "flown"), ("fell", "fallen"),
    ("hid", "hidden"), ("wore", "worn"), ("tore", "torn"), ("shook", "shaken"),
    ("rang", "rung"), ("sank", "sunk"), ("froze", "frozen"), ("woke", "woken"),
];

const OVERREGULARIZED: &[(&str, &str)] = &[
    ("goed", "went"), ("runned", "ran"), ("eated", "ate"), ("buyed", "bought"),
    ("bringed", "brought"), ("catched", "caught"), ("teached", "taught"),
    ("thinked", "thought"), ("swimmed", "swam"), ("writed", "wrote"), ("speaked", "spoke"),
    ("knowed", "knew"), ("growed", "grew"), ("throwed", "threw"), ("drinked", "drank"),
    ("drived", "drove"), ("falled", "fell"), ("feeled", "felt"), ("finded", "found"),
    ("gived", "gave"), ("hided", "hid"), ("holded", "held"), ("keeped", "kept"),
    ("leaved", "left"), ("maked", "made"), ("meeted", "met"), ("payed", "paid"),
    ("sayed", "said"), ("selled", "sold"), ("sended", "sent"), ("sitted", "sat"),
    ("sleeped", "slept"), ("standed", "stood"), ("taked", "took"), ("telled", "told"),
    ("understanded", "understood"), ("winned", "won"), ("breaked", "broke"),
    ("choosed", "chose"), ("forgetted", "forgot"), ("comed", "came"),
];

const ING_NOUNS: &[&str] = &[
    "thing", "things", "morning", "evening", "building", "wedding", "feeling", "feelings",
    "being", "ceiling", "clothing", "meeting", "painting", "drawing", "king", "ring",
    "spring", "string", "wing", "darling", "sibling", "siblings", "pudding", "setting",
    "settings", "writing", "reading", "training", "funding", "housing", "earnings",
    "savings", "belongings", "understanding", "opening", "ending", "beginning", "offering",
    "saying", "marketing", "planning", "learning", "booking", "parking", "listing",
    "rating", "ranking", "shopping", "heading", "filling", "lightning", "warning",
    "upbringing", "surroundings", "recording", "recordings", "handwriting", "cooking",
    "singing", "swimming", "spending", "timing", "wording", "thinking", "finding",
    "findings", "tracking", "hearing", "paintings", "drawings", "stocking", "evenings",
    "mornings", "buildings", "meetings", "teaching", "teachings", "offspring", "duckling",
    "something", "nothing", "anything", "everything", "swing", "bedding", "lighting",
    "heating", "seating", "plumbing", "flooring", "stuffing", "icing", "lining", "landing",
    "fishing", "boxing", "fencing", "coating", "packaging", "mapping", "spelling",
];

const MISSPELLINGS: &[(&str, &str)] = &[
    ("teh", "the"), ("recieve", "receive"), ("recieved", "received"), ("seperate", "separate"),
    ("seperately", "separately"), ("definately", "definitely"), ("definitly", "definitely"),
    ("occured", "occurred"), ("occurence", "occurrence"), ("untill", "until"),
    ("wich", "which"), ("accomodate", "accommodate"), ("acheive", "achieve"),
    ("adress", "address"), ("arguement", "argument"), ("begining", "beginning"),
    ("beleive", "believe"), ("calender", "calendar"), ("comming", "coming"),
    ("commited", "committed"), ("concious", "conscious"), ("enviroment", "environment"),
    ("existance", "existence"), ("foriegn", "foreign"), ("goverment", "government"),
    ("grammer", "grammar"), ("happend", "happened"), ("independant", "independent"),
    ("knowlege", "knowledge"), ("neccessary", "necessary"), ("noticable", "noticeable"),
    ("occassion", "occasion"), ("persistant", "persistent"), ("posession", "possession"),
    ("prefered", "preferred"), ("publically", "publicly"), ("realy", "really"),
    ("recomend", "recommend"), ("reccomend", "recommend"), ("refered", "referred"),
    ("relevent", "relevant"), ("succesful", "successful"), ("suprise", "surprise"),
    ("tommorow", "tomorrow"), ("tomorow", "tomorrow"), ("truely", "truly"), ("wierd", "weird"),
    ("writting", "writing"), ("alot", "a lot"), ("thier", "their"), ("becuase", "because"),
    ("freind", "friend"), ("freinds", "friends"), ("embarass", "embarrass"),
    ("harrass", "harass"), ("millenium", "millennium"), ("mispell", "misspell"),
    ("resturant", "restaurant"), ("tounge", "tongue"), ("agressive", "aggressive"),
    ("apparant", "apparent"), ("basicly", "basically"), ("buisness", "business"),
    ("cemetary", "cemetery"), ("collegue", "colleague"), ("completly", "completely"),
    ("concensus", "consensus"), ("dissapoint", "disappoint"), ("familar", "familiar"),
    ("finaly", "finally"), ("geting", "getting"), ("gaurd", "guard"),
    ("immediatly", "immediately"), ("intresting", "interesting"), ("libary", "library"),
    ("liason", "liaison"), ("neice", "niece"), ("privelege", "privilege"),
    ("quizes", "quizzes"), ("rythm", "rhythm"), ("sieze", "seize"),
    ("threshhold", "threshold"), ("vaccuum", "vacuum"), ("acknowlege", "acknowledge"),
    ("beautifull", "beautiful"), ("carefull", "careful"), ("differnt", "different"),
    ("embarassed", "embarrassed"), ("exellent", "excellent"), ("febuary", "February"),
    ("guarentee", "guarantee"), ("hieght", "height"), ("maintainance", "maintenance"),
    ("mischievious", "mischievous"), ("occurance", "occurrence"), ("paralell", "parallel"),
    ("peice", "piece"), ("posible", "possible"), ("probaly", "probably"),
    ("responsability", "responsibility"), ("sucess", "success"), ("temperture", "temperature"),
    ("wensday", "Wednesday"), ("yeild", "yield"),
];

const MISSING_APOSTROPHES: &[(&str, &str)] = &[
    ("dont", "don't"), ("doesnt", "doesn't"), ("didnt", "didn't"), ("cant", "can't"),
    ("isnt", "isn't"), ("arent", "aren't"), ("wasnt", "wasn't"), ("werent", "weren't"),
    ("havent", "haven't"), ("hasnt", "hasn't"), ("couldnt", "couldn't"),
    ("shouldnt", "shouldn't"), ("wouldnt", "wouldn't"), ("youre", "you're"),
    ("theyre", "they're"), ("thats", "that's"), ("whats", "what's"), ("youve", "you've"), ("theyve", "they've"), ("wouldve", "would've"),
    ("couldve", "could've"), ("shouldve", "should've"), ("hadnt", "hadn't"),
];

const REDUNDANCIES: &[(&str, &str)] = &[
    ("advance planning", "planning"), ("end result", "result"), ("past history", "history"),
    ("free gift", "gift"), ("close proximity", "proximity"),
    ("absolutely essential", "essential"), ("added bonus", "bonus"),
    ("basic fundamentals", "fundamentals"), ("completely finished", "finished"),
    ("each and every", "each|every"), ("future plans", "plans"),
    ("unexpected surprise", "surprise"), ("final outcome", "outcome"),
    ("joint collaboration", "collaboration"), ("revert back", "revert"),
    ("repeat again", "repeat"), ("true fact", "fact"), ("new innovation", "innovation"),
    ("past experience", "experience"), ("sum total", "total"),
    ("collaborate together", "collaborate"), ("combine together", "combine"),
    ("merge together", "merge"), ("return back", "return"), ("still remains", "remains"),
    ("period of time", "period"), ("personal opinion", "opinion"),
    ("various different", "various"), ("exact same", "same"), ("postpone until later", "postpone"),
    ("brief summary", "summary"), ("first began", "began"), ("mutual cooperation", "cooperation"),
    ("over exaggerate", "exaggerate"), ("plan ahead", "plan"), ("reply back", "reply"),
];

const WORDY_PHRASES: &[(&str, &str)] = &[
    ("in order to", "to"), ("due to the fact that", "because"),
    ("at this point in time", "now|currently"), ("in the event that", "if"),
    ("for the purpose of", "to|for"), ("in spite of the fact that", "although"),
    ("with regard to", "about|regarding"), ("in the near future", "soon"),
    ("a large number of", "many"), ("the majority of", "most"), ("is able to", "can"),
    ("has the ability to", "can"), ("prior to", "before"), ("subsequent to", "after"),
    ("at the present time", "currently|now"), ("in a timely manner", "promptly"),
    ("make a decision", "decide"), ("give consideration to", "consider"),
    ("conduct an investigation", "investigate"), ("take into consideration", "consider"),
    ("on a daily basis", "daily"), ("owing to the fact that", "because"),
    ("in light of the fact that", "because"), ("until such time as", "until"),
    ("with the exception of", "except"), ("in the absence of", "without"),
    ("a sufficient number of", "enough"), ("has the capacity to", "can"),
    ("in close proximity to", "near"), ("at all times", "always"),
];

const STRONG_WORDS: &[(&str, &str)] = &[
    ("good", "excellent|great|outstanding"), ("bad", "terrible|awful"),
    ("big", "huge|enormous"), ("small", "tiny|minuscule"), ("happy", "delighted|thrilled"),
    ("sad", "miserable|heartbroken"), ("important", "crucial|essential"),
    ("tired", "exhausted"), ("hungry", "starving|famished"), ("cold", "freezing|frigid"),
    ("hot", "scorching|sweltering"), ("fast", "rapid|swift"), ("slow", "sluggish"),
    ("smart", "brilliant"), ("old", "ancient"), ("pretty", "beautiful|gorgeous"),
    ("ugly", "hideous"), ("scared", "terrified"), ("angry", "furious"),
    ("difficult", "challenging|arduous"), ("easy", "effortless"), ("funny", "hilarious"),
    ("clean", "spotless"), ("dirty", "filthy"), ("loud", "deafening"), ("quiet", "silent"),
];

const CLICHES: &[(&str, &str)] = &[
    ("at the end of the day", "ultimately"), ("think outside the box", "think creatively"),
    ("low-hanging fruit", "easy wins"), ("in today's fast-paced world", "today"),
    ("touch base", "talk|check in"), ("circle back", "follow up"),
    ("game changer", "breakthrough"), ("at this juncture", "now"),
    ("it goes without saying", "clearly"), ("needless to say", "clearly"),
    ("best of both worlds", "ideal balance"), ("few and far between", "rare"),
    ("in the nick of time", "just in time"), ("last but not least", "finally"),
    ("only time will tell", "we will see"), ("the ball is in your court", "it is your decision"),
    ("a level playing field", "fair conditions"), ("push the envelope", "innovate"),
    ("paradigm shift", "fundamental change"), ("move the needle", "make progress"),
];

const CONTRACTIONS: &[(&str, &str)] = &[
    ("don't", "do not"), ("can't", "cannot"), ("won't", "will not"), ("isn't", "is not"),
    ("aren't", "are not"), ("doesn't", "does not"), ("didn't", "did not"),
    ("wasn't", "was not"), ("weren't", "were not"), ("haven't", "have not"),
    ("hasn't", "has not"), ("couldn't", "could not"), ("shouldn't", "should not"),
    ("wouldn't", "would not"), ("it's", "it is"), ("i'm", "I am"), ("you're", "you are"),
    ("they're", "they are"), ("we're", "we are"), ("let's", "let us"),
    ("that's", "that is"), ("there's", "there is"), ("i've", "I have"),
    ("we've", "we have"), ("they've", "they have"), ("i'll", "I will"),
    ("we'll", "we will"), ("they'll", "they will"),
];

const INFORMAL_WORDS: &[(&str, &str)] = &[
    ("gonna", "going to"), ("wanna", "want to"), ("gotta", "have to"), ("kinda", "kind of"),
    ("sorta", "sort of"), ("yeah", "yes"), ("nope", "no"), ("lots", "many"),
    ("okay", "acceptable"), ("guys", "everyone"),
    ("awesome", "excellent|impressive"), ("tons", "a great deal"), ("kids", "children"),
    ("folks", "people"), ("dunno", "do not know"), ("lemme", "let me"), ("gimme", "give me"),
    ("y'all", "you all"), ("ain't", "is not"),
];

const BRITISH_TO_AMERICAN: &[(&str, &str)] = &[
    ("colour", "color"), ("colours", "colors"), ("favour", "favor"), ("favourite", "favorite"),
    ("honour", "honor"), ("behaviour", "behavior"), ("neighbour", "neighbor"),
    ("organise", "organize"), ("organised", "organized"), ("organisation", "organization"),
    ("realise", "realize"), ("realised", "realized"), ("recognise", "recognize"),
    ("analyse", "analyze"), ("apologise", "apologize"), ("centre", "center"),
    ("theatre", "theater"), ("metre", "meter"), ("travelled", "traveled"),
    ("travelling", "traveling"), ("cancelled", "canceled"), ("grey", "gray"),
    ("defence", "defense"), ("catalogue", "catalog"),
    ("labour", "labor"), ("flavour", "flavor"),
    ("humour", "humor"), ("rumour", "rumor"), ("optimise", "optimize"),
    ("prioritise", "prioritize"), ("summarise", "summarize"), ("emphasise", "emphasize"),
];

const COMMON_WORDS: &[&str] = &[
    "the", "be", "to", "of", "and", "a", "in", "that", "have", "i", "it", "for", "not", "on",
    "with", "he", "as", "you", "do", "at", "this", "but", "his", "by", "from", "they", "we",
    "say", "her", "she", "or", "an", "will", "my", "one", "all", "would", "there", "their",
    "what", "so", "up", "out", "if", "about", "who", "get", "which", "go", "me", "when",
    "make", "can", "like", "time", "no", "just", "him", "know", "take", "people", "into",
    "year", "your", "good", "some", "could", "them", "see", "other", "than", "then", "now",
    "look", "only", "come", "its", "over", "think", "also", "back", "after", "use", "two",
    "how", "our", "work", "first", "well", "way", "even", "new", "want", "because", "any",
    "these", "give", "day", "most", "us", "is", "are", "was", "were", "has", "had", "run",
    "going", "very", "really", "more", "less", "need", "home",
];

const PAST_MARKERS: &[&str] = &[
    "was", "were", "had", "did", "wasn't", "weren't", "hadn't", "didn't", "yesterday",
    "ago", "previously", "formerly", "went", "came", "saw", "took", "made", "said", "got",
    "gave", "knew", "thought", "told", "found", "became", "left", "felt", "brought",
    "began", "kept", "held", "wrote", "stood", "heard", "ran", "met", "paid", "sat",
    "spoke", "ate", "drank", "drove", "bought", "taught", "caught", "sold", "sent",
    "slept", "won", "chose", "fell", "grew", "threw", "flew", "broke", "forgot",
    "understood",
];
