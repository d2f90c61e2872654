use crate::contact::{Contact, ContactId};
use crate::generator::ContactGenerator;
use log::{debug, warn};
use thiserror::Error;

/// Contacts every directory starts with, ahead of the generated batch.
pub const SEED_CONTACTS: [(&str, &str); 2] = [
    ("John Doe", "123-456-7890"),
    ("Jane Smith", "987-654-3210"),
];

pub const DEFAULT_GENERATED_COUNT: usize = 100;

/// Largest generated batch `initialize` will produce.
pub const MAX_GENERATED_COUNT: usize = 100_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("contact store is full at {0} contacts")]
pub struct StoreFull(pub usize);

/// Append-only, ordered list of contacts.
///
/// Ids are `position + 1`; nothing is ever removed, so an id is never reused.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactStore {
    contacts: Vec<Contact>,
}

impl ContactStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed pair followed by `count` generated contacts, `count` capped at
    /// [`MAX_GENERATED_COUNT`].
    pub fn initialize(generator: &mut impl ContactGenerator, count: usize) -> Self {
        if count > MAX_GENERATED_COUNT {
            warn!("event=generated_count_capped requested={count} max={MAX_GENERATED_COUNT}");
        }
        let count = count.min(MAX_GENERATED_COUNT);
        let mut store = Self {
            contacts: Vec::with_capacity(SEED_CONTACTS.len().saturating_add(count)),
        };
        let seeds = SEED_CONTACTS
            .iter()
            .map(|(name, number)| (name.to_string(), number.to_string()));
        let generated = (0..count).map(|_| (generator.next_name(), generator.next_number()));
        for (name, number) in seeds.chain(generated) {
            if let Err(err) = store.append(name, number) {
                warn!("event=store_initialize_truncated reason=\"{err}\"");
                break;
            }
        }
        debug!("event=store_initialized count={}", store.len());
        store
    }

    /// Adds a contact with id `len + 1`. Name and number are taken as-is.
    ///
    /// Fails only once every `u32` id has been handed out.
    pub fn append(
        &mut self,
        name: impl Into<String>,
        number: impl Into<String>,
    ) -> Result<&Contact, StoreFull> {
        let id = next_id(self.contacts.len()).ok_or(StoreFull(self.contacts.len()))?;
        self.contacts.push(Contact::new(id, name, number));
        Ok(&self.contacts[self.contacts.len() - 1])
    }

    pub fn get(&self, id: ContactId) -> Option<&Contact> {
        let idx = (id.0 as usize).checked_sub(1)?;
        self.contacts.get(idx)
    }

    pub fn contains(&self, id: ContactId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn as_slice(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Contact> {
        self.contacts.iter()
    }
}

fn next_id(len: usize) -> Option<ContactId> {
    u32::try_from(len)
        .ok()
        .and_then(|n| n.checked_add(1))
        .map(ContactId)
}

impl<'a> IntoIterator for &'a ContactStore {
    type Item = &'a Contact;
    type IntoIter = std::slice::Iter<'a, Contact>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::RandomContactGenerator;
    use std::collections::HashSet;

    #[test]
    fn initialize_puts_seed_pair_first() {
        let store = ContactStore::initialize(&mut RandomContactGenerator::seeded(1), 100);
        assert_eq!(store.len(), 102);
        let first = store.get(ContactId(1)).unwrap();
        assert_eq!(first.name, "John Doe");
        assert_eq!(first.number, "123-456-7890");
        let second = store.get(ContactId(2)).unwrap();
        assert_eq!(second.name, "Jane Smith");
        assert_eq!(second.number, "987-654-3210");
    }

    #[test]
    fn generated_ids_continue_after_seed() {
        let store = ContactStore::initialize(&mut RandomContactGenerator::seeded(2), 5);
        let ids: Vec<u32> = store.iter().map(|c| c.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn ids_are_unique() {
        let store = ContactStore::initialize(&mut RandomContactGenerator::seeded(4), 100);
        let ids: HashSet<ContactId> = store.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), store.len());
    }

    #[test]
    fn append_assigns_len_plus_one() {
        let mut store = ContactStore::initialize(&mut RandomContactGenerator::seeded(5), 100);
        let before = store.len();
        let id = store.append("X", "Y").unwrap().id;
        assert_eq!(store.len(), before + 1);
        assert_eq!(id, ContactId(before as u32 + 1));
    }

    #[test]
    fn append_accepts_empty_fields() {
        let mut store = ContactStore::new();
        let contact = store.append("", "").unwrap();
        assert_eq!(contact.id, ContactId(1));
        assert!(contact.name.is_empty());
    }

    #[test]
    fn duplicate_names_are_kept() {
        let mut store = ContactStore::new();
        store.append("Arjun", "1").unwrap();
        store.append("Arjun", "2").unwrap();
        assert_eq!(store.iter().filter(|c| c.name == "Arjun").count(), 2);
    }

    #[test]
    fn get_rejects_zero_and_out_of_range() {
        let mut store = ContactStore::new();
        store.append("A", "1").unwrap();
        assert!(store.get(ContactId(0)).is_none());
        assert!(store.get(ContactId(2)).is_none());
        assert!(store.contains(ContactId(1)));
    }

    #[test]
    fn initialize_caps_huge_counts() {
        struct Counting(usize);
        impl ContactGenerator for Counting {
            fn next_name(&mut self) -> String {
                self.0 += 1;
                "N".to_string()
            }
            fn next_number(&mut self) -> String {
                "0".to_string()
            }
        }
        let mut generator = Counting(0);
        let store = ContactStore::initialize(&mut generator, usize::MAX);
        assert_eq!(generator.0, MAX_GENERATED_COUNT);
        assert_eq!(store.len(), SEED_CONTACTS.len() + MAX_GENERATED_COUNT);
    }

    #[test]
    fn next_id_stops_at_u32_limit() {
        assert_eq!(next_id(0), Some(ContactId(1)));
        assert_eq!(next_id(u32::MAX as usize - 1), Some(ContactId(u32::MAX)));
        assert_eq!(next_id(u32::MAX as usize), None);
    }
}
