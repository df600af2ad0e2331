//! The bounded in-memory contact collection.

use super::contact::Contact;
use super::errors::{BookError, BookResult};
use super::search::{cmp_ignore_ascii_case, contains_ignore_ascii_case};

/// Default capacity of a contact book.
pub const DEFAULT_CAPACITY: usize = 100;

/// A bounded, ordered collection of contacts.
///
/// Invariants:
/// - size never exceeds `capacity`
/// - no two contacts share a name under ASCII case-insensitive
///   comparison
/// - no two contacts share a phone number
///
/// There is no ordering invariant at rest. [`ContactBook::list`] and
/// [`ContactBook::search`] both sort the collection in place as a
/// side effect, so callers must not rely on insertion order surviving
/// either operation.
#[derive(Debug, Clone)]
pub struct ContactBook {
    contacts: Vec<Contact>,
    capacity: usize,
}

impl ContactBook {
    /// Creates an empty book with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty book bounded at `capacity` contacts.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            contacts: Vec::new(),
            capacity,
        }
    }

    /// Number of contacts currently held.
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    /// Returns true if the book holds no contacts.
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// The fixed upper bound on the number of contacts.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The contacts in their current order.
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// Returns true if a contact with this name exists
    /// (case-insensitive). Used by the driver's re-prompt loop.
    pub fn contains_name(&self, name: &str) -> bool {
        self.contacts
            .iter()
            .any(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// Returns true if a contact with this phone number exists.
    pub fn contains_phone(&self, phone: i64) -> bool {
        self.contacts.iter().any(|c| c.phone == phone)
    }

    /// Appends a contact at the end of the book.
    ///
    /// # Errors
    ///
    /// - [`BookError::Full`] if the book is at capacity
    /// - [`BookError::DuplicateName`] if a contact with the same name
    ///   (case-insensitive) exists
    /// - [`BookError::DuplicatePhone`] if a contact with the same
    ///   phone number exists
    ///
    /// On any error the book is unchanged. A successful insert does
    /// not reorder existing contacts.
    pub fn insert(&mut self, contact: Contact) -> BookResult<()> {
        if self.contacts.len() >= self.capacity {
            return Err(BookError::Full {
                capacity: self.capacity,
            });
        }
        if self.contains_name(&contact.name) {
            return Err(BookError::DuplicateName(contact.name));
        }
        if self.contains_phone(contact.phone) {
            return Err(BookError::DuplicatePhone(contact.phone));
        }
        self.contacts.push(contact);
        Ok(())
    }

    /// Sorts the book in place and returns all contacts, ascending by
    /// name under ASCII case folding.
    ///
    /// The sort is unstable and the comparator has no tie-break, so
    /// the relative order of names differing only in case is
    /// unspecified (names are unique case-insensitively, so ties
    /// cannot actually occur between distinct contacts).
    ///
    /// # Errors
    ///
    /// [`BookError::Empty`] if the book holds no contacts, so the
    /// caller can tell the user rather than render nothing.
    pub fn list(&mut self) -> BookResult<&[Contact]> {
        if self.contacts.is_empty() {
            return Err(BookError::Empty);
        }
        self.sort_by_name();
        Ok(&self.contacts)
    }

    /// Finds every contact whose name contains `query` as a
    /// contiguous substring, ignoring ASCII case.
    ///
    /// Sorts the book in place first, exactly as [`ContactBook::list`]
    /// does; search always leaves the collection sorted even though
    /// matching does not need it. Matches come back in that sorted
    /// order. An `Ok` with an empty vector means "no match".
    ///
    /// # Errors
    ///
    /// - [`BookError::EmptyQuery`] for an empty query, a distinct
    ///   outcome from finding nothing
    /// - [`BookError::Empty`] if the book holds no contacts
    pub fn search(&mut self, query: &str) -> BookResult<Vec<&Contact>> {
        if self.contacts.is_empty() {
            return Err(BookError::Empty);
        }
        if query.is_empty() {
            return Err(BookError::EmptyQuery);
        }
        self.sort_by_name();
        Ok(self
            .contacts
            .iter()
            .filter(|c| contains_ignore_ascii_case(&c.name, query))
            .collect())
    }

    /// Overwrites all four fields of the first contact whose name
    /// matches `name` case-insensitively, in current book order.
    ///
    /// The replacement's name and phone are NOT re-checked for
    /// uniqueness against the other contacts, so an edit can
    /// introduce a duplicate. This reproduces the behavior of the
    /// system this one replaces; see DESIGN.md and the
    /// `edit_does_not_recheck_uniqueness` test before changing it.
    ///
    /// # Errors
    ///
    /// [`BookError::NotFound`] if no contact's name matches.
    pub fn edit(&mut self, name: &str, replacement: Contact) -> BookResult<()> {
        match self
            .contacts
            .iter_mut()
            .find(|c| c.name.eq_ignore_ascii_case(name))
        {
            Some(slot) => {
                *slot = replacement;
                Ok(())
            }
            None => Err(BookError::NotFound(name.to_string())),
        }
    }

    /// Removes the first contact whose name matches `name`
    /// case-insensitively and returns it. Remaining contacts shift
    /// one position earlier, preserving their relative order.
    ///
    /// # Errors
    ///
    /// [`BookError::NotFound`] if no contact's name matches.
    pub fn delete(&mut self, name: &str) -> BookResult<Contact> {
        match self
            .contacts
            .iter()
            .position(|c| c.name.eq_ignore_ascii_case(name))
        {
            Some(index) => Ok(self.contacts.remove(index)),
            None => Err(BookError::NotFound(name.to_string())),
        }
    }

    fn sort_by_name(&mut self) {
        self.contacts
            .sort_unstable_by(|a, b| cmp_ignore_ascii_case(&a.name, &b.name));
    }
}

impl Default for ContactBook {
    fn default() -> Self {
        Self::new()
    }
}
