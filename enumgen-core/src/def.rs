use std::collections::BTreeMap;
use std::fmt;

use crate::members::MemberList;
use crate::values::{assign_values, Member, ValueError, ValueMode};

/// A fully resolved enum: namespace, type name, and explicitly valued members.
///
/// Resolved once per export and immutable afterwards; editing happens on the [`MemberList`], not
/// here. The definition is language-agnostic, so it does not know whether its names are legal in
/// the output language; the emitter checks that when it is asked to produce source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDef {
    namespace: String,
    name: String,
    members: Vec<Member>,
}

impl EnumDef {
    /// Resolves `members` into a definition, assigning values with `mode`.
    pub fn resolve(
        namespace: impl Into<String>,
        name: impl Into<String>,
        members: &MemberList,
        mode: ValueMode,
    ) -> Result<Self, ValueError> {
        Ok(Self {
            namespace: namespace.into(),
            name: name.into(),
            members: assign_values(members.names(), mode)?,
        })
    }

    /// Assembles a definition from members that already carry their values, e.g. ones read back
    /// from a previously generated file.
    pub fn from_parts(
        namespace: impl Into<String>,
        name: impl Into<String>,
        members: Vec<Member>,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            members,
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// Finds members that cannot coexist in the generated enum.
    ///
    /// Two kinds of clash are reported: the same name declared more than once, and two or more
    /// differently named members resolving to one value (which `FileHash` mode can produce, since
    /// a 32-bit hash has collisions). Neither is fatal here. Callers get a report and decide for
    /// themselves whether to export anyway and let the C# compiler have the last word.
    pub fn collisions(&self) -> Vec<Collision> {
        let mut count_by_name = BTreeMap::<&str, usize>::new();
        let mut names_by_value = BTreeMap::<i32, Vec<&str>>::new();
        for member in &self.members {
            *count_by_name.entry(member.name.as_str()).or_default() += 1;
            names_by_value
                .entry(member.value)
                .or_default()
                .push(member.name.as_str());
        }

        let mut collisions: Vec<Collision> = count_by_name
            .into_iter()
            .filter(|&(_, count)| count > 1)
            .map(|(name, count)| Collision::Name {
                name: name.to_owned(),
                count,
            })
            .collect();
        for (value, mut names) in names_by_value {
            names.sort_unstable();
            names.dedup();
            if names.len() > 1 {
                collisions.push(Collision::Value {
                    value,
                    names: names.into_iter().map(str::to_owned).collect(),
                });
            }
        }
        collisions
    }
}

/// A group of members that would clash in the generated source. See [`EnumDef::collisions`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Collision {
    /// One name declared `count` times.
    Name { name: String, count: usize },
    /// Two or more distinct names resolving to the same value.
    Value { value: i32, names: Vec<String> },
}

impl fmt::Display for Collision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Collision::Name { name, count } => {
                write!(f, "member {name:?} is declared {count} times")
            }
            Collision::Value { value, names } => {
                write!(f, "members {names:?} all resolve to the value {value}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Collision, EnumDef};
    use crate::members::MemberList;
    use crate::values::ValueMode;

    #[test]
    fn distinct_members_do_not_collide() {
        let members: MemberList = ["Value1", "Value2", "Value3"].into_iter().collect();
        let def = EnumDef::resolve("TestNameSpace", "HogeType", &members, ValueMode::Increment)
            .unwrap();
        assert!(def.collisions().is_empty());
    }

    #[test]
    fn duplicate_names_are_reported_once() {
        let members: MemberList = ["Cat", "Dog", "Cat"].into_iter().collect();
        let def =
            EnumDef::resolve("Game", "Pets", &members, ValueMode::Increment).unwrap();
        assert_eq!(
            def.collisions(),
            [Collision::Name {
                name: "Cat".to_string(),
                count: 2,
            }]
        );
    }

    #[test]
    fn hash_collisions_are_reported_with_the_shared_value() {
        // "costarring" and "liquid" are a known FNV-1a collision.
        let members: MemberList = ["costarring", "liquid"].into_iter().collect();
        let def = EnumDef::resolve("Game", "Unlucky", &members, ValueMode::FileHash).unwrap();
        assert_eq!(
            def.collisions(),
            [Collision::Value {
                value: 0x5e4daa9d,
                names: vec!["costarring".to_string(), "liquid".to_string()],
            }]
        );
    }

    #[test]
    fn duplicate_names_under_file_hash_are_not_double_counted() {
        let members: MemberList = ["Cat", "Cat"].into_iter().collect();
        let def = EnumDef::resolve("Game", "Pets", &members, ValueMode::FileHash).unwrap();
        // The shared value comes from the duplicated name, so only the name clash is reported.
        assert_eq!(
            def.collisions(),
            [Collision::Name {
                name: "Cat".to_string(),
                count: 2,
            }]
        );
    }
}
