//! Verb completion
//!
//! Tab completes the input only when exactly one verb starts with it. There
//! is no cycling and no candidate list.

/// Outcome of a completion request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// Exactly one verb matched; the input becomes `"<verb> "`
    Unique(String),
    /// Several verbs matched
    Ambiguous(Vec<&'static str>),
    /// Nothing matched
    NoMatch,
}

impl Completion {
    /// The replacement input, if the completion should be applied
    pub fn replacement(&self) -> Option<&str> {
        match self {
            Completion::Unique(text) => Some(text),
            _ => None,
        }
    }
}

/// Complete `input` against `verbs`
pub fn complete<'a, I>(input: &str, verbs: I) -> Completion
where
    I: IntoIterator<Item = &'a &'static str>,
{
    let matching: Vec<&'static str> = verbs
        .into_iter()
        .copied()
        .filter(|verb| verb.starts_with(input))
        .collect();

    match matching.as_slice() {
        [] => Completion::NoMatch,
        [only] => Completion::Unique(format!("{} ", only)),
        _ => Completion::Ambiguous(matching),
    }
}
