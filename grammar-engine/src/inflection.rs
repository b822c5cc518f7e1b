//! Verb inflection: irregular overrides first, then regular suffixes.
//!
//! Only the suffix rules below are modeled. There is no consonant doubling
//! ("stop" -> "stoped") and no "ie" handling ("lie" -> "lieing"); callers
//! that need those forms supply them as overrides on the [`Lemma`].

use crate::Lemma;

#[derive(
    Copy,
    Clone,
    Debug,
    Hash,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    parse_display::Display,
    parse_display::FromStr,
)]
#[display(style = "snake_case")]
pub enum VerbForm {
    Base,
    PresentParticiple,
    PastTense,
    PastParticiple,
    ThirdPersonSingularPresent,
}

impl VerbForm {
    pub const ALL: [VerbForm; 5] = [
        VerbForm::Base,
        VerbForm::PresentParticiple,
        VerbForm::PastTense,
        VerbForm::PastParticiple,
        VerbForm::ThirdPersonSingularPresent,
    ];
}

fn given(form: &Option<String>) -> Option<&str> {
    form.as_deref().filter(|form| !form.is_empty())
}

/// The stem regular suffixes attach to. A lemma without `base` uses its text.
pub fn base_form(lemma: &Lemma) -> &str {
    given(&lemma.base).unwrap_or(&lemma.text)
}

pub fn inflect(lemma: &Lemma, form: VerbForm) -> String {
    let base = base_form(lemma);
    match form {
        VerbForm::Base => base.to_string(),
        VerbForm::PresentParticiple => given(&lemma.present_participle)
            .map(str::to_string)
            .unwrap_or_else(|| format!("{base}ing")),
        VerbForm::PastTense => given(&lemma.past)
            .map(str::to_string)
            .unwrap_or_else(|| format!("{base}ed")),
        VerbForm::PastParticiple => given(&lemma.past_participle)
            .or_else(|| given(&lemma.past))
            .map(str::to_string)
            .unwrap_or_else(|| format!("{base}ed")),
        VerbForm::ThirdPersonSingularPresent => third_person_singular(base),
    }
}

/// Present simple form of the main verb for a subject.
pub fn present_simple(lemma: &Lemma, third_person_singular: bool) -> String {
    if third_person_singular {
        inflect(lemma, VerbForm::ThirdPersonSingularPresent)
    } else {
        inflect(lemma, VerbForm::Base)
    }
}

fn third_person_singular(base: &str) -> String {
    const SIBILANT_ENDINGS: [&str; 5] = ["s", "x", "z", "ch", "sh"];

    if SIBILANT_ENDINGS.iter().any(|ending| base.ends_with(ending)) {
        return format!("{base}es");
    }

    if let Some(stem) = base.strip_suffix('y') {
        if stem.chars().last().is_some_and(is_consonant) {
            return format!("{stem}ies");
        }
    }

    format!("{base}s")
}

fn is_consonant(c: char) -> bool {
    c.is_ascii_lowercase() && !matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_verb() {
        let work = Lemma::verb("work");
        assert_eq!(inflect(&work, VerbForm::Base), "work");
        assert_eq!(inflect(&work, VerbForm::PresentParticiple), "working");
        assert_eq!(inflect(&work, VerbForm::PastTense), "worked");
        assert_eq!(inflect(&work, VerbForm::PastParticiple), "worked");
        assert_eq!(inflect(&work, VerbForm::ThirdPersonSingularPresent), "works");
    }

    #[test]
    fn test_irregular_overrides_win() {
        let go = Lemma::verb("go").with_past("went").with_past_participle("gone");
        assert_eq!(inflect(&go, VerbForm::PastTense), "went");
        assert_eq!(inflect(&go, VerbForm::PastParticiple), "gone");
        // no override given for -ing, so the regular rule applies
        assert_eq!(inflect(&go, VerbForm::PresentParticiple), "going");
    }

    #[test]
    fn test_past_participle_falls_back_to_past() {
        let buy = Lemma::verb("buy").with_past("bought");
        assert_eq!(inflect(&buy, VerbForm::PastParticiple), "bought");
    }

    #[test]
    fn test_base_override_is_the_stem() {
        let lemma = Lemma {
            base: Some("watch".to_string()),
            ..Lemma::verb("to watch")
        };
        assert_eq!(inflect(&lemma, VerbForm::Base), "watch");
        assert_eq!(inflect(&lemma, VerbForm::ThirdPersonSingularPresent), "watches");
        assert_eq!(inflect(&lemma, VerbForm::PastTense), "watched");
    }

    #[test]
    fn test_empty_override_is_ignored() {
        let lemma = Lemma {
            base: Some(String::new()),
            ..Lemma::verb("play").with_past("")
        };
        assert_eq!(inflect(&lemma, VerbForm::Base), "play");
        assert_eq!(inflect(&lemma, VerbForm::PastTense), "played");
    }

    #[test]
    fn test_third_person_singular_endings() {
        let cases = [
            ("watch", "watches"),
            ("wash", "washes"),
            ("fix", "fixes"),
            ("buzz", "buzzes"),
            ("pass", "passes"),
            ("study", "studies"),
            ("cry", "cries"),
            ("play", "plays"),
            ("enjoy", "enjoys"),
            ("go", "gos"),
            ("work", "works"),
        ];
        for (base, expected) in cases {
            assert_eq!(
                inflect(&Lemma::verb(base), VerbForm::ThirdPersonSingularPresent),
                expected,
                "third person singular of {base}"
            );
        }
    }

    #[test]
    fn test_no_spelling_adjustments() {
        assert_eq!(inflect(&Lemma::verb("stop"), VerbForm::PastTense), "stoped");
        assert_eq!(inflect(&Lemma::verb("lie"), VerbForm::PresentParticiple), "lieing");
        assert_eq!(inflect(&Lemma::verb("make"), VerbForm::PresentParticiple), "makeing");
    }

    #[test]
    fn test_present_simple() {
        let study = Lemma::verb("study");
        assert_eq!(present_simple(&study, true), "studies");
        assert_eq!(present_simple(&study, false), "study");
    }
}
