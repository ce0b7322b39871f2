use crate::grammar::Grammar;
use smallvec::SmallVec;

/// Named captures of one matched line, borrowed from the line itself.
#[derive(Debug, Clone)]
pub struct FieldMap<'a> {
    grammar: Grammar,
    fields: SmallVec<[(&'static str, &'a str); 9]>,
}

impl<'a> FieldMap<'a> {
    pub(crate) fn new(grammar: Grammar) -> Self {
        Self {
            grammar,
            fields: SmallVec::new(),
        }
    }

    pub(crate) fn insert(&mut self, name: &'static str, value: &'a str) {
        self.fields.push((name, value));
    }

    pub fn grammar(&self) -> Grammar {
        self.grammar
    }

    pub fn get(&self, name: &str) -> Option<&'a str> {
        self.fields
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| *value)
    }

    /// Like [`FieldMap::get`], but an absent field reads as empty.
    pub fn value(&self, name: &str) -> &'a str {
        self.get(name).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'a str)> + '_ {
        self.fields.iter().copied()
    }
}
