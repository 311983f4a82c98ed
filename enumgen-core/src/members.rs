use std::slice;

/// An ordered, editable list of enum member names.
///
/// Order is significant: it decides declaration order in the generated source, and with it the
/// values assigned by the positional modes. Duplicate names are representable while the list is
/// being authored, but they cannot coexist in the generated enum, so
/// [`crate::def::EnumDef::collisions`] flags them before export.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberList {
    names: Vec<String>,
}

impl MemberList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a name to the end of the list.
    pub fn push(&mut self, name: impl Into<String>) {
        self.names.push(name.into());
    }

    /// Inserts a name at `index`, shifting the names after it.
    ///
    /// # Panics
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, name: impl Into<String>) {
        self.names.insert(index, name.into());
    }

    /// Removes and returns the name at `index`, or `None` if there is no such member.
    pub fn remove(&mut self, index: usize) -> Option<String> {
        (index < self.names.len()).then(|| self.names.remove(index))
    }

    /// Moves the name at `from` so that it ends up at index `to`.
    ///
    /// Returns `false` (and leaves the list untouched) if either index is out of bounds.
    pub fn move_member(&mut self, from: usize, to: usize) -> bool {
        if from >= self.names.len() || to >= self.names.len() {
            return false;
        }
        let name = self.names.remove(from);
        self.names.insert(to, name);
        true
    }

    /// Replaces the whole list with `names`, keeping their order.
    ///
    /// This is what a folder scan does: the scanned names displace whatever was in the list
    /// before.
    pub fn replace_all(&mut self, names: impl IntoIterator<Item = impl Into<String>>) {
        self.names.clear();
        self.names.extend(names.into_iter().map(Into::into));
    }

    pub fn clear(&mut self) {
        self.names.clear();
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn iter(&self) -> slice::Iter<'_, String> {
        self.names.iter()
    }
}

impl<S> FromIterator<S> for MemberList
where
    S: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a MemberList {
    type Item = &'a String;
    type IntoIter = slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::MemberList;

    #[test]
    fn editing_operations() {
        let mut members = MemberList::new();
        members.push("Value1");
        members.push("Value3");
        members.insert(1, "Value2");
        assert_eq!(members.names(), ["Value1", "Value2", "Value3"]);

        assert_eq!(members.remove(0), Some("Value1".to_string()));
        assert_eq!(members.remove(7), None);
        assert_eq!(members.names(), ["Value2", "Value3"]);
    }

    #[test]
    fn moving_members_keeps_the_rest_in_order() {
        let mut members: MemberList = ["a", "b", "c", "d"].into_iter().collect();
        assert!(members.move_member(3, 0));
        assert_eq!(members.names(), ["d", "a", "b", "c"]);
        assert!(members.move_member(0, 2));
        assert_eq!(members.names(), ["a", "b", "d", "c"]);
        assert!(!members.move_member(0, 4));
        assert_eq!(members.names(), ["a", "b", "d", "c"]);
    }

    #[test]
    fn replace_all_displaces_previous_content() {
        let mut members: MemberList = ["Value1", "Value2", "Value3"].into_iter().collect();
        members.replace_all(["cat", "dog"]);
        assert_eq!(members.names(), ["cat", "dog"]);
    }
}
