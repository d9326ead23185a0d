use std::fmt;

/// Ordered set of class names attached to an element.
///
/// Insertion order is kept so a copied list renders the same way as the
/// original. Adding a class that is already present is a no-op.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClassList(Vec<String>);

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a whitespace-separated class attribute.
    pub fn parse(classes: &str) -> Self {
        let mut list = Self::new();
        list.add_all(classes);
        list
    }

    pub fn contains(&self, class: &str) -> bool {
        self.0.iter().any(|c| c == class)
    }

    /// Returns true if the class was not present before.
    pub fn add(&mut self, class: &str) -> bool {
        if class.is_empty() || self.contains(class) {
            return false;
        }
        self.0.push(class.to_string());
        true
    }

    /// Add every whitespace-separated class in `classes`.
    pub fn add_all(&mut self, classes: &str) {
        for class in classes.split_whitespace() {
            self.add(class);
        }
    }

    /// Returns true if the class was present.
    pub fn remove(&mut self, class: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|c| c != class);
        self.0.len() != before
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(" "))
    }
}
