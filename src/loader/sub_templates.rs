use indexmap::IndexMap;

/// Named template bodies that the main template can refer to by key.
///
/// Built once while resolving the template argument and read-only afterward.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubTemplates {
    templates: IndexMap<String, String>,
}

impl SubTemplates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `body` under `name`, returning the body it replaced, if any.
    pub(crate) fn insert(
        &mut self,
        name: impl Into<String>,
        body: impl Into<String>,
    ) -> Option<String> {
        self.templates.insert(name.into(), body.into())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.templates.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.templates.iter().map(|(name, body)| (name.as_str(), body.as_str()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SubTemplates {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut sub_templates = Self::new();
        for (name, body) in iter {
            sub_templates.insert(name, body);
        }
        sub_templates
    }
}
