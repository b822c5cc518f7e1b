pub mod catalog;
pub mod composer;
pub mod inflection;
pub mod sentence;
pub mod text_cleanup;
pub mod unit_policy;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub use catalog::{Catalog, CatalogError, GrammarUnit, Group, UnitTags};
pub use composer::{AuxiliaryResolution, SentenceForm, resolve_auxiliary};
pub use inflection::{VerbForm, inflect, present_simple};
pub use sentence::{GenerationResult, assemble, generate};
pub use unit_policy::{apply_unit, select_group, select_unit};

#[derive(
    Copy,
    Clone,
    Debug,
    serde::Serialize,
    serde::Deserialize,
    Hash,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    tsify::Tsify,
    schemars::JsonSchema,
    parse_display::FromStr,
)]
#[tsify(into_wasm_abi, from_wasm_abi)]
pub enum PartOfSpeech {
    #[serde(rename = "verb")]
    #[from_str(regex = "verb")]
    Verb,
    #[serde(rename = "adj")]
    #[from_str(regex = "adj(ective)?")]
    Adjective,
    #[serde(rename = "adv")]
    #[from_str(regex = "adv(erb)?")]
    Adverb,
    #[serde(rename = "noun")]
    #[from_str(regex = "noun")]
    Noun,
    #[serde(rename = "prep")]
    #[from_str(regex = "prep(osition)?")]
    Preposition,
}

impl std::fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let word = match self {
            PartOfSpeech::Verb => "verb",
            PartOfSpeech::Adjective => "adjective",
            PartOfSpeech::Adverb => "adverb",
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Preposition => "preposition",
        };
        write!(f, "{word}")
    }
}

/// A word in its citation form, plus whatever irregular forms it has.
///
/// Missing forms are never guessed from the ones that are present, except
/// that a missing past participle reuses the past tense (see [`inflect`]).
#[derive(
    Clone,
    Debug,
    serde::Serialize,
    serde::Deserialize,
    Hash,
    Eq,
    PartialEq,
    tsify::Tsify,
    schemars::JsonSchema,
)]
#[tsify(into_wasm_abi, from_wasm_abi)]
pub struct Lemma {
    #[serde(rename = "type")]
    pub part_of_speech: PartOfSpeech,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub past: Option<String>,
    #[serde(default, rename = "pp", skip_serializing_if = "Option::is_none")]
    pub past_participle: Option<String>,
    #[serde(default, rename = "ing", skip_serializing_if = "Option::is_none")]
    pub present_participle: Option<String>,
}

impl Lemma {
    /// A regular verb with no overrides.
    pub fn verb(text: impl Into<String>) -> Self {
        Self {
            part_of_speech: PartOfSpeech::Verb,
            text: text.into(),
            base: None,
            past: None,
            past_participle: None,
            present_participle: None,
        }
    }

    pub fn word(part_of_speech: PartOfSpeech, text: impl Into<String>) -> Self {
        Self {
            part_of_speech,
            ..Self::verb(text)
        }
    }

    pub fn with_past(mut self, past: impl Into<String>) -> Self {
        self.past = Some(past.into());
        self
    }

    pub fn with_past_participle(mut self, past_participle: impl Into<String>) -> Self {
        self.past_participle = Some(past_participle.into());
        self
    }

    pub fn with_present_participle(mut self, present_participle: impl Into<String>) -> Self {
        self.present_participle = Some(present_participle.into());
        self
    }

    pub fn is_verb(&self) -> bool {
        self.part_of_speech == PartOfSpeech::Verb
    }
}

#[derive(
    Copy,
    Clone,
    Debug,
    serde::Serialize,
    serde::Deserialize,
    Hash,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    tsify::Tsify,
    schemars::JsonSchema,
    parse_display::Display,
    parse_display::FromStr,
)]
#[tsify(into_wasm_abi, from_wasm_abi)]
pub enum Subject {
    #[display("I")]
    #[serde(rename = "I")]
    I,
    #[display("you")]
    #[serde(rename = "you")]
    You,
    #[display("we")]
    #[serde(rename = "we")]
    We,
    #[display("they")]
    #[serde(rename = "they")]
    They,
    #[display("he")]
    #[serde(rename = "he")]
    He,
    #[display("she")]
    #[serde(rename = "she")]
    She,
    #[display("it")]
    #[serde(rename = "it")]
    It,
    #[display("plural-noun")]
    #[serde(rename = "N (số nhiều)")]
    PluralNoun,
    #[display("singular-noun")]
    #[serde(rename = "danh từ số ít")]
    SingularNoun,
}

impl Subject {
    pub const ALL: [Subject; 9] = [
        Subject::I,
        Subject::You,
        Subject::We,
        Subject::They,
        Subject::He,
        Subject::She,
        Subject::It,
        Subject::PluralNoun,
        Subject::SingularNoun,
    ];

    /// The words that stand in subject position.
    pub fn text(&self) -> &'static str {
        match self {
            Subject::I => "I",
            Subject::You => "you",
            Subject::We => "we",
            Subject::They => "they",
            Subject::He => "he",
            Subject::She => "she",
            Subject::It => "it",
            Subject::PluralNoun => "the students",
            Subject::SingularNoun => "the student",
        }
    }

    pub fn is_third_person_singular(&self) -> bool {
        matches!(
            self,
            Subject::He | Subject::She | Subject::It | Subject::SingularNoun
        )
    }

    pub fn be_present(&self) -> &'static str {
        match self {
            Subject::I => "am",
            s if s.is_third_person_singular() => "is",
            _ => "are",
        }
    }

    pub fn be_past(&self) -> &'static str {
        if *self == Subject::I || self.is_third_person_singular() {
            "was"
        } else {
            "were"
        }
    }

    pub fn have_present(&self) -> &'static str {
        if self.is_third_person_singular() {
            "has"
        } else {
            "have"
        }
    }
}

#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    serde::Serialize,
    serde::Deserialize,
    Hash,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    tsify::Tsify,
    schemars::JsonSchema,
    parse_display::Display,
    parse_display::FromStr,
)]
#[tsify(into_wasm_abi, from_wasm_abi)]
#[serde(rename_all = "snake_case")]
#[display(style = "snake_case")]
pub enum Tense {
    #[default]
    Present,
    Past,
    Future,
}

impl Tense {
    pub const ALL: [Tense; 3] = [Tense::Present, Tense::Past, Tense::Future];
}

#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    serde::Serialize,
    serde::Deserialize,
    Hash,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    tsify::Tsify,
    schemars::JsonSchema,
    parse_display::Display,
    parse_display::FromStr,
)]
#[tsify(into_wasm_abi, from_wasm_abi)]
#[serde(rename_all = "snake_case")]
#[display(style = "snake_case")]
pub enum Aspect {
    #[default]
    Simple,
    Progressive,
    Perfect,
    PerfectProgressive,
}

impl Aspect {
    pub const ALL: [Aspect; 4] = [
        Aspect::Simple,
        Aspect::Progressive,
        Aspect::Perfect,
        Aspect::PerfectProgressive,
    ];
}

#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    serde::Serialize,
    serde::Deserialize,
    Hash,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    tsify::Tsify,
    schemars::JsonSchema,
    parse_display::Display,
    parse_display::FromStr,
)]
#[tsify(into_wasm_abi, from_wasm_abi)]
#[serde(rename_all = "snake_case")]
#[display(style = "snake_case")]
pub enum Voice {
    #[default]
    Active,
    Passive,
}

impl Voice {
    pub const ALL: [Voice; 2] = [Voice::Active, Voice::Passive];
}

#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    serde::Serialize,
    serde::Deserialize,
    Hash,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    tsify::Tsify,
    schemars::JsonSchema,
    parse_display::Display,
    parse_display::FromStr,
)]
#[tsify(into_wasm_abi, from_wasm_abi)]
#[serde(rename_all = "snake_case")]
#[display(style = "snake_case")]
pub enum Polarity {
    #[default]
    Affirmative,
    Negative,
    Interrogative,
}

impl Polarity {
    pub const ALL: [Polarity; 3] = [
        Polarity::Affirmative,
        Polarity::Negative,
        Polarity::Interrogative,
    ];
}

/// The grammatical switches that drive sentence generation.
///
/// `short_answer` and `use_contractions` are carried for the presentation
/// layer and have no effect on the generated sentence.
#[derive(
    Copy,
    Clone,
    Debug,
    serde::Serialize,
    serde::Deserialize,
    Hash,
    Eq,
    PartialEq,
    tsify::Tsify,
    schemars::JsonSchema,
)]
#[tsify(into_wasm_abi, from_wasm_abi)]
pub struct Flags {
    pub tense: Tense,
    pub aspect: Aspect,
    pub voice: Voice,
    pub polarity: Polarity,
    /// "be going to" future; wins over `tense` and `aspect`.
    #[serde(default)]
    pub near_future: bool,
    #[serde(default)]
    pub short_answer: bool,
    #[serde(default, rename = "contractions")]
    pub use_contractions: bool,
}

impl Default for Flags {
    fn default() -> Self {
        Self {
            tense: Tense::Present,
            aspect: Aspect::Simple,
            voice: Voice::Active,
            polarity: Polarity::Affirmative,
            near_future: false,
            short_answer: false,
            use_contractions: true,
        }
    }
}

impl std::fmt::Display for Flags {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} | {} | {} | {} | near_future: {}",
            self.tense, self.aspect, self.voice, self.polarity, self.near_future
        )
    }
}

/// Everything a caller hands over for one generation call.
#[derive(
    Clone,
    Debug,
    serde::Serialize,
    serde::Deserialize,
    PartialEq,
    Eq,
    tsify::Tsify,
    schemars::JsonSchema,
)]
#[tsify(into_wasm_abi, from_wasm_abi)]
pub struct GrammarState {
    pub subject: Subject,
    pub lemma: Lemma,
    pub flags: Flags,
    #[serde(default, rename = "unitId")]
    pub unit_id: Option<String>,
}

impl Default for GrammarState {
    fn default() -> Self {
        Self {
            subject: Subject::I,
            lemma: Lemma::verb("work")
                .with_past("worked")
                .with_past_participle("worked")
                .with_present_participle("working"),
            flags: Flags::default(),
            unit_id: Some("1-1".to_string()),
        }
    }
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
pub fn generate_sentence(state: GrammarState) -> GenerationResult {
    sentence::generate(&state, Catalog::builtin())
}

/// Flags after selecting `unit_id`, or the given flags unchanged if the unit is unknown.
#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
pub fn flags_for_unit(unit_id: String, flags: Flags) -> Flags {
    match Catalog::builtin().find_unit_by_id(&unit_id) {
        Some(unit) => apply_unit(unit, &flags),
        None => flags,
    }
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
pub fn units_in_group(group_id: u32) -> Vec<GrammarUnit> {
    Catalog::builtin()
        .find_units_by_group(group_id)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_be_agreement() {
        assert_eq!(Subject::I.be_present(), "am");
        assert_eq!(Subject::I.be_past(), "was");
        assert_eq!(Subject::SingularNoun.be_present(), "is");
        assert_eq!(Subject::It.be_past(), "was");
        assert_eq!(Subject::You.be_present(), "are");
        assert_eq!(Subject::PluralNoun.be_past(), "were");
    }

    #[test]
    fn test_have_agreement() {
        assert_eq!(Subject::I.have_present(), "have");
        assert_eq!(Subject::She.have_present(), "has");
        assert_eq!(Subject::They.have_present(), "have");
    }

    #[test]
    fn test_state_wire_names() {
        let json = r#"{
            "subject": "danh từ số ít",
            "lemma": { "type": "verb", "text": "go", "past": "went", "pp": "gone" },
            "flags": {
                "tense": "past",
                "aspect": "perfect_progressive",
                "voice": "active",
                "polarity": "negative",
                "near_future": false,
                "short_answer": false,
                "contractions": true
            },
            "unitId": "2-4"
        }"#;
        let state: GrammarState = serde_json::from_str(json).unwrap();
        assert_eq!(state.subject, Subject::SingularNoun);
        assert_eq!(state.lemma.past_participle.as_deref(), Some("gone"));
        assert_eq!(state.lemma.base, None);
        assert_eq!(state.flags.aspect, Aspect::PerfectProgressive);
        assert!(state.flags.use_contractions);
        assert_eq!(state.unit_id.as_deref(), Some("2-4"));
    }

    #[test]
    fn test_parse_from_arguments() {
        assert_eq!("perfect_progressive".parse::<Aspect>().unwrap(), Aspect::PerfectProgressive);
        assert_eq!("plural-noun".parse::<Subject>().unwrap(), Subject::PluralNoun);
        assert_eq!("I".parse::<Subject>().unwrap(), Subject::I);
        assert_eq!("adjective".parse::<PartOfSpeech>().unwrap(), PartOfSpeech::Adjective);
        assert_eq!("adj".parse::<PartOfSpeech>().unwrap(), PartOfSpeech::Adjective);
        assert!("sometimes".parse::<Tense>().is_err());
    }

    #[test]
    fn test_flags_summary() {
        let flags = Flags {
            tense: Tense::Past,
            aspect: Aspect::PerfectProgressive,
            voice: Voice::Passive,
            ..Flags::default()
        };
        assert_eq!(
            flags.to_string(),
            "past | perfect_progressive | passive | affirmative | near_future: false"
        );
    }

    #[test]
    fn test_default_state_is_initial_page() {
        let result = generate_sentence(GrammarState::default());
        assert_eq!(result.english, "I work.");
        assert_eq!(result.error, None);
    }
}
