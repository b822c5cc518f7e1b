//! Auxiliary resolution: picks the auxiliary, the rest of the verb phrase
//! and the word order for one (subject, lemma, flags) combination.
//!
//! The table is keyed by voice, near-future, tense, aspect and polarity, in
//! that order of precedence. Combinations the table does not model resolve
//! to an empty auxiliary instead of failing:
//!
//! - active future perfect progressive
//! - passive perfect progressive (every tense)
//! - passive future progressive

use crate::inflection::{VerbForm, inflect, present_simple};
use crate::{Aspect, Flags, Lemma, Polarity, Subject, Tense, Voice};

/// Word order template used by [`crate::assemble`].
#[derive(
    Copy,
    Clone,
    Debug,
    Hash,
    Eq,
    PartialEq,
    serde::Serialize,
    serde::Deserialize,
    parse_display::Display,
)]
#[serde(rename_all = "snake_case")]
#[display(style = "snake_case")]
pub enum SentenceForm {
    Statement,
    QuestionWithBe,
    QuestionWithHave,
    QuestionWithWill,
    /// The auxiliary is already capitalized ("Do", "Does", "Did").
    QuestionWithDo,
}

impl SentenceForm {
    pub fn is_question(&self) -> bool {
        !matches!(self, SentenceForm::Statement)
    }
}

#[derive(Clone, Debug, Hash, Eq, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AuxiliaryResolution {
    /// Finite auxiliary, with "not" attached for negatives. May be empty.
    pub auxiliary: String,
    /// Everything after the subject in a question, or after the auxiliary in a statement.
    pub verb_phrase: String,
    pub form: SentenceForm,
}

impl AuxiliaryResolution {
    fn new(auxiliary: impl Into<String>, verb_phrase: impl Into<String>, form: SentenceForm) -> Self {
        Self {
            auxiliary: auxiliary.into(),
            verb_phrase: verb_phrase.into(),
            form,
        }
    }

    /// Auxiliary that is fronted in questions and takes "not" in negatives.
    fn invertible(
        auxiliary: &str,
        verb_phrase: impl Into<String>,
        polarity: Polarity,
        question: SentenceForm,
    ) -> Self {
        match polarity {
            Polarity::Affirmative => Self::new(auxiliary, verb_phrase, SentenceForm::Statement),
            Polarity::Negative => Self::new(negate(auxiliary), verb_phrase, SentenceForm::Statement),
            Polarity::Interrogative => Self::new(auxiliary, verb_phrase, question),
        }
    }

    /// Simple aspect: affirmative statements carry the inflected verb alone,
    /// negatives and questions fall back on do-support.
    fn do_support(
        do_form: &str,
        inflected: String,
        base: String,
        polarity: Polarity,
    ) -> Self {
        match polarity {
            Polarity::Affirmative => Self::new("", inflected, SentenceForm::Statement),
            Polarity::Negative => Self::new(negate(do_form), base, SentenceForm::Statement),
            Polarity::Interrogative => Self::new(
                crate::text_cleanup::capitalize_first(do_form),
                base,
                SentenceForm::QuestionWithDo,
            ),
        }
    }

    fn unmodeled(lemma: &Lemma) -> Self {
        Self::new("", lemma.text.clone(), SentenceForm::Statement)
    }
}

fn negate(auxiliary: &str) -> String {
    format!("{auxiliary} not").trim_start().to_string()
}

pub fn resolve_auxiliary(subject: Subject, lemma: &Lemma, flags: &Flags) -> AuxiliaryResolution {
    let resolution = match flags.voice {
        Voice::Active => resolve_active(subject, lemma, flags),
        Voice::Passive => resolve_passive(subject, lemma, flags),
    };
    log::debug!(
        "resolved {subject} / {} / {flags} -> aux {:?}, verb phrase {:?}, {}",
        lemma.text,
        resolution.auxiliary,
        resolution.verb_phrase,
        resolution.form
    );
    resolution
}

fn resolve_active(subject: Subject, lemma: &Lemma, flags: &Flags) -> AuxiliaryResolution {
    use AuxiliaryResolution as R;
    use SentenceForm::*;

    let polarity = flags.polarity;
    let base = inflect(lemma, VerbForm::Base);

    if flags.near_future {
        return R::invertible(
            subject.be_present(),
            format!("going to {base}"),
            polarity,
            QuestionWithBe,
        );
    }

    let ing = || inflect(lemma, VerbForm::PresentParticiple);
    let past_participle = || inflect(lemma, VerbForm::PastParticiple);

    match (flags.tense, flags.aspect) {
        (Tense::Present, Aspect::Simple) => {
            let do_form = if subject.is_third_person_singular() {
                "does"
            } else {
                "do"
            };
            R::do_support(
                do_form,
                present_simple(lemma, subject.is_third_person_singular()),
                base,
                polarity,
            )
        }
        (Tense::Present, Aspect::Progressive) => {
            R::invertible(subject.be_present(), ing(), polarity, QuestionWithBe)
        }
        (Tense::Present, Aspect::Perfect) => R::invertible(
            subject.have_present(),
            past_participle(),
            polarity,
            QuestionWithHave,
        ),
        (Tense::Present, Aspect::PerfectProgressive) => R::invertible(
            subject.have_present(),
            format!("been {}", ing()),
            polarity,
            QuestionWithHave,
        ),

        (Tense::Past, Aspect::Simple) => {
            R::do_support("did", inflect(lemma, VerbForm::PastTense), base, polarity)
        }
        (Tense::Past, Aspect::Progressive) => {
            R::invertible(subject.be_past(), ing(), polarity, QuestionWithBe)
        }
        (Tense::Past, Aspect::Perfect) => {
            R::invertible("had", past_participle(), polarity, QuestionWithHave)
        }
        (Tense::Past, Aspect::PerfectProgressive) => R::invertible(
            "had",
            format!("been {}", ing()),
            polarity,
            QuestionWithHave,
        ),

        (Tense::Future, Aspect::Simple) => R::invertible("will", base, polarity, QuestionWithWill),
        (Tense::Future, Aspect::Progressive) => R::invertible(
            "will",
            format!("be {}", ing()),
            polarity,
            QuestionWithWill,
        ),
        (Tense::Future, Aspect::Perfect) => R::invertible(
            "will",
            format!("have {}", past_participle()),
            polarity,
            QuestionWithWill,
        ),
        (Tense::Future, Aspect::PerfectProgressive) => {
            log::debug!("active future perfect progressive is not modeled");
            R::unmodeled(lemma)
        }
    }
}

/// The chain of "be" forms that precedes the past participle, or `None`
/// where the combination is not modeled.
fn passive_be_chain(subject: Subject, flags: &Flags) -> Option<String> {
    if flags.near_future {
        return Some(format!("{} going to be", subject.be_present()));
    }

    match (flags.tense, flags.aspect) {
        (Tense::Present, Aspect::Simple) => Some(subject.be_present().to_string()),
        (Tense::Present, Aspect::Progressive) => Some(format!("{} being", subject.be_present())),
        (Tense::Present, Aspect::Perfect) => Some(format!("{} been", subject.have_present())),
        (Tense::Past, Aspect::Simple) => Some(subject.be_past().to_string()),
        (Tense::Past, Aspect::Progressive) => Some(format!("{} being", subject.be_past())),
        (Tense::Past, Aspect::Perfect) => Some("had been".to_string()),
        (Tense::Future, Aspect::Simple) => Some("will be".to_string()),
        (Tense::Future, Aspect::Perfect) => Some("will have been".to_string()),
        (Tense::Future, Aspect::Progressive) | (_, Aspect::PerfectProgressive) => None,
    }
}

fn resolve_passive(subject: Subject, lemma: &Lemma, flags: &Flags) -> AuxiliaryResolution {
    let past_participle = inflect(lemma, VerbForm::PastParticiple);
    let chain = passive_be_chain(subject, flags).unwrap_or_else(|| {
        log::debug!(
            "passive {} {} is not modeled, leaving the auxiliary empty",
            flags.tense,
            flags.aspect
        );
        String::new()
    });

    if flags.polarity == Polarity::Affirmative {
        return AuxiliaryResolution::new(chain, past_participle, SentenceForm::Statement);
    }

    let (first, rest) = chain.split_once(' ').unwrap_or((chain.as_str(), ""));
    let verb_phrase = crate::text_cleanup::collapse_whitespace(&format!("{rest} {past_participle}"));
    AuxiliaryResolution::invertible(
        first,
        verb_phrase,
        flags.polarity,
        SentenceForm::QuestionWithBe,
    )
}
