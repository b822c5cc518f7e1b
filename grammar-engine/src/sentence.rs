//! Turns a resolved auxiliary into the final English sentence and gloss.

use crate::catalog::Catalog;
use crate::composer::{AuxiliaryResolution, SentenceForm, resolve_auxiliary};
use crate::text_cleanup::{capitalize_first, collapse_whitespace, finish_sentence};
use crate::{Aspect, Flags, GrammarState, Lemma, Subject, Tense};

pub const NOT_APPLICABLE_ENGLISH: &str = "N/A";
pub const NOT_APPLICABLE_GLOSS: &str = "Không áp dụng";
pub const NOT_APPLICABLE_ERROR: &str = "KHÔNG ÁP DỤNG VỚI ĐIỂM NGỮ PHÁP NÀY";

const GLOSS_PREFIX: &str = "(Dịch mẫu)";

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
pub struct GenerationResult {
    #[serde(rename = "en")]
    pub english: String,
    /// Templated placeholder, not a translation.
    #[serde(rename = "vi")]
    pub gloss: String,
    /// Only set when the selected unit does not apply.
    pub error: Option<String>,
}

impl GenerationResult {
    pub fn not_applicable() -> Self {
        Self {
            english: NOT_APPLICABLE_ENGLISH.to_string(),
            gloss: NOT_APPLICABLE_GLOSS.to_string(),
            error: Some(NOT_APPLICABLE_ERROR.to_string()),
        }
    }

    pub fn is_applicable(&self) -> bool {
        self.error.is_none()
    }
}

/// Word order for a resolved verb phrase, normalized.
pub fn assemble(subject: Subject, resolution: &AuxiliaryResolution) -> String {
    let AuxiliaryResolution {
        auxiliary,
        verb_phrase,
        form,
    } = resolution;

    match form {
        SentenceForm::QuestionWithBe
        | SentenceForm::QuestionWithHave
        | SentenceForm::QuestionWithWill => finish_sentence(
            [capitalize_first(auxiliary).as_str(), subject.text(), verb_phrase.as_str()],
            '?',
        ),
        SentenceForm::QuestionWithDo => {
            finish_sentence([auxiliary.as_str(), subject.text(), verb_phrase.as_str()], '?')
        }
        SentenceForm::Statement => finish_sentence(
            [
                capitalize_first(subject.text()).as_str(),
                auxiliary.as_str(),
                verb_phrase.as_str(),
            ],
            '.',
        ),
    }
}

/// Copular sentence used for every part of speech other than verbs.
fn copular_sentence(subject: Subject, lemma: &Lemma) -> GenerationResult {
    GenerationResult {
        english: finish_sentence(
            [
                capitalize_first(subject.text()).as_str(),
                subject.be_present(),
                lemma.text.as_str(),
            ],
            '.',
        ),
        gloss: collapse_whitespace(&format!(
            "{GLOSS_PREFIX} {} là/thì {}.",
            subject.text(),
            lemma.text
        )),
        error: None,
    }
}

fn gloss_marker(flags: &Flags) -> &'static str {
    if flags.tense == Tense::Past {
        "đã"
    } else if flags.aspect == Aspect::Progressive {
        "đang"
    } else {
        ""
    }
}

fn gloss(subject: Subject, lemma: &Lemma, flags: &Flags) -> String {
    collapse_whitespace(&format!(
        "{GLOSS_PREFIX} {} {} {}.",
        subject.text(),
        gloss_marker(flags),
        lemma.text
    ))
}

/// The whole pipeline for one state: applicability, then copular or verbal
/// sentence. Never fails; the not-applicable case is reported in the result.
pub fn generate(state: &GrammarState, catalog: &Catalog) -> GenerationResult {
    let GrammarState {
        subject,
        lemma,
        flags,
        unit_id,
    } = state;

    let unit = unit_id.as_deref().and_then(|id| catalog.find_unit_by_id(id));
    if let Some(unit) = unit {
        if !unit.applicable {
            log::debug!("unit {} is marked not applicable", unit.id);
            return GenerationResult::not_applicable();
        }
    }

    if !lemma.is_verb() {
        return copular_sentence(*subject, lemma);
    }

    let resolution = resolve_auxiliary(*subject, lemma, flags);
    GenerationResult {
        english: assemble(*subject, &resolution),
        gloss: gloss(*subject, lemma, flags),
        error: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PartOfSpeech, Polarity, Voice};

    fn state(subject: Subject, lemma: Lemma, flags: Flags) -> GrammarState {
        GrammarState {
            subject,
            lemma,
            flags,
            unit_id: None,
        }
    }

    fn english(subject: Subject, lemma: Lemma, flags: Flags) -> String {
        generate(&state(subject, lemma, flags), &Catalog::default()).english
    }

    #[test]
    fn test_statement_without_auxiliary() {
        assert_eq!(english(Subject::He, Lemma::verb("work"), Flags::default()), "He works.");
        assert_eq!(
            english(Subject::PluralNoun, Lemma::verb("study"), Flags::default()),
            "The students study."
        );
    }

    #[test]
    fn test_questions_capitalize_the_auxiliary() {
        let flags = Flags {
            aspect: Aspect::Perfect,
            polarity: Polarity::Interrogative,
            ..Flags::default()
        };
        assert_eq!(
            english(Subject::SingularNoun, Lemma::verb("work"), flags),
            "Has the student worked?"
        );

        let flags = Flags {
            tense: Tense::Future,
            ..flags
        };
        assert_eq!(
            english(Subject::They, Lemma::verb("work"), flags),
            "Will they have worked?"
        );
    }

    #[test]
    fn test_do_question() {
        let flags = Flags {
            polarity: Polarity::Interrogative,
            ..Flags::default()
        };
        assert_eq!(english(Subject::It, Lemma::verb("fix"), flags), "Does it fix?");
        assert_eq!(english(Subject::I, Lemma::verb("fix"), flags), "Do I fix?");
    }

    #[test]
    fn test_assemble_directly() {
        let resolution = AuxiliaryResolution {
            auxiliary: "had".to_string(),
            verb_phrase: "been  going".to_string(),
            form: SentenceForm::QuestionWithHave,
        };
        assert_eq!(assemble(Subject::We, &resolution), "Had we been going?");
    }

    #[test]
    fn test_passive_gap_still_produces_a_sentence() {
        let flags = Flags {
            voice: Voice::Passive,
            aspect: Aspect::PerfectProgressive,
            ..Flags::default()
        };
        assert_eq!(english(Subject::It, Lemma::verb("finish"), flags), "It finished.");

        let flags = Flags {
            polarity: Polarity::Interrogative,
            ..flags
        };
        assert_eq!(english(Subject::It, Lemma::verb("finish"), flags), "it finished?");
    }

    #[test]
    fn test_copular_template() {
        let result = generate(
            &state(
                Subject::I,
                Lemma::word(PartOfSpeech::Adjective, "happy"),
                Flags {
                    tense: Tense::Past,
                    polarity: Polarity::Negative,
                    ..Flags::default()
                },
            ),
            &Catalog::default(),
        );
        assert_eq!(result.english, "I am happy.");
        assert_eq!(result.gloss, "(Dịch mẫu) I là/thì happy.");
        assert_eq!(result.error, None);

        assert_eq!(
            english(
                Subject::SingularNoun,
                Lemma::word(PartOfSpeech::Noun, "a nurse"),
                Flags::default()
            ),
            "The student is a nurse."
        );
    }

    #[test]
    fn test_gloss_markers() {
        let lemma = Lemma::verb("work");
        let past = Flags {
            tense: Tense::Past,
            aspect: Aspect::Progressive,
            ..Flags::default()
        };
        assert_eq!(gloss(Subject::He, &lemma, &past), "(Dịch mẫu) he đã work.");

        let progressive = Flags {
            aspect: Aspect::Progressive,
            ..Flags::default()
        };
        assert_eq!(gloss(Subject::We, &lemma, &progressive), "(Dịch mẫu) we đang work.");
        assert_eq!(gloss(Subject::I, &lemma, &Flags::default()), "(Dịch mẫu) I work.");
    }

    #[test]
    fn test_unknown_unit_is_applicable() {
        let mut s = state(Subject::He, Lemma::verb("work"), Flags::default());
        s.unit_id = Some("no-such-unit".to_string());
        let result = generate(&s, Catalog::builtin());
        assert!(result.is_applicable());
        assert_eq!(result.english, "He works.");
    }
}
