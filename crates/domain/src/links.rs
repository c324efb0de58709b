//! Weak cross-link model.
//!
//! A link records a relation between components and supports lookup and
//! display, nothing more: deleting the referenced component neither blocks
//! on nor repairs the referencing link. Consumers resolve lazily and
//! tolerate dangling identifiers.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{ComponentId, ComponentKind, DomainError};

/// A caller-held set of selected link targets, as edited by a link picker.
///
/// Toggling is add-if-absent / remove-if-present. Insertion order is kept;
/// the set does not deduplicate identifiers pushed in from elsewhere (see
/// [`LinkPolicy`] for opt-in strictness).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LinkSelection {
    ids: Vec<ComponentId>,
}

impl LinkSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_selected(&self, id: ComponentId) -> bool {
        self.ids.contains(&id)
    }

    /// Add the id when absent, remove it when present.
    pub fn toggle(&mut self, id: ComponentId) {
        if let Some(pos) = self.ids.iter().position(|existing| *existing == id) {
            self.ids.remove(pos);
        } else {
            self.ids.push(id);
        }
    }

    pub fn ids(&self) -> &[ComponentId] {
        &self.ids
    }

    pub fn into_ids(self) -> Vec<ComponentId> {
        self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl FromIterator<ComponentId> for LinkSelection {
    fn from_iter<I: IntoIterator<Item = ComponentId>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

/// Opt-in validation for link writes.
///
/// The observed system allows self-links, duplicate entries, and untyped
/// single-link targets; the permissive default preserves that. Strictness
/// is a caller decision, not a store rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinkPolicy {
    pub forbid_self_links: bool,
    pub forbid_duplicates: bool,
    pub enforce_link_kinds: bool,
}

impl LinkPolicy {
    /// The default: everything the store accepts is allowed.
    pub fn permissive() -> Self {
        Self::default()
    }

    pub fn strict() -> Self {
        Self {
            forbid_self_links: true,
            forbid_duplicates: true,
            enforce_link_kinds: true,
        }
    }

    /// Validate a multi-link set against this policy. `owner` is the
    /// component being edited, or `None` while it is still unsaved.
    pub fn validate_multi(
        &self,
        owner: Option<ComponentId>,
        links: &[ComponentId],
    ) -> Result<(), DomainError> {
        if self.forbid_self_links {
            if let Some(owner) = owner {
                if links.contains(&owner) {
                    return Err(DomainError::constraint(format!(
                        "component {owner} may not link to itself"
                    )));
                }
            }
        }
        if self.forbid_duplicates {
            let mut seen = std::collections::HashSet::new();
            for id in links {
                if !seen.insert(id) {
                    return Err(DomainError::constraint(format!(
                        "duplicate link target {id}"
                    )));
                }
            }
        }
        Ok(())
    }

    /// Validate a single-link target's kind against the conventional
    /// expectation. A no-op unless `enforce_link_kinds` is set.
    pub fn validate_single(
        &self,
        expected: ComponentKind,
        actual: ComponentKind,
    ) -> Result<(), DomainError> {
        if self.enforce_link_kinds && expected != actual {
            return Err(DomainError::constraint(format!(
                "link target is a {} but a {} was expected",
                actual.key(),
                expected.key()
            )));
        }
        Ok(())
    }
}

/// Normalize a raw single-link field value in place.
///
/// Form submissions encode "no selection" as the empty string, which is not
/// a valid identifier and must persist as null.
pub fn normalize_link_field(value: &mut Value) {
    if matches!(value, Value::String(s) if s.is_empty()) {
        *value = Value::Null;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_adds_then_removes() {
        let a = ComponentId::new();
        let b = ComponentId::new();
        let mut selection = LinkSelection::new();

        selection.toggle(a);
        selection.toggle(b);
        assert!(selection.is_selected(a));
        assert!(selection.is_selected(b));
        assert_eq!(selection.len(), 2);

        selection.toggle(a);
        assert!(!selection.is_selected(a));
        assert_eq!(selection.ids(), &[b]);
    }

    // The source system never decided whether self-links are legal; the
    // permissive default keeps them, strict mode rejects them.
    #[test]
    fn self_links_allowed_by_default_rejected_by_strict_policy() {
        let me = ComponentId::new();
        let links = vec![me];

        assert!(LinkPolicy::permissive()
            .validate_multi(Some(me), &links)
            .is_ok());
        assert!(LinkPolicy::strict()
            .validate_multi(Some(me), &links)
            .is_err());
    }

    // Same ambiguity for duplicates accumulated by concurrent toggles.
    #[test]
    fn duplicates_allowed_by_default_rejected_by_strict_policy() {
        let target = ComponentId::new();
        let links = vec![target, target];

        assert!(LinkPolicy::permissive().validate_multi(None, &links).is_ok());
        assert!(LinkPolicy::strict().validate_multi(None, &links).is_err());
    }

    #[test]
    fn single_link_kind_check_only_applies_in_strict_mode() {
        let permissive = LinkPolicy::permissive();
        assert!(permissive
            .validate_single(ComponentKind::Settlement, ComponentKind::Monster)
            .is_ok());

        let strict = LinkPolicy::strict();
        assert!(strict
            .validate_single(ComponentKind::Settlement, ComponentKind::Monster)
            .is_err());
        assert!(strict
            .validate_single(ComponentKind::Settlement, ComponentKind::Settlement)
            .is_ok());
    }

    #[test]
    fn empty_string_normalizes_to_null() {
        let mut value = Value::String(String::new());
        normalize_link_field(&mut value);
        assert!(value.is_null());

        let id = ComponentId::new().to_string();
        let mut kept = Value::String(id.clone());
        normalize_link_field(&mut kept);
        assert_eq!(kept, Value::String(id));

        let mut null = Value::Null;
        normalize_link_field(&mut null);
        assert!(null.is_null());
    }
}
