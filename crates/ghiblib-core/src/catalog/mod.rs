//! The in-memory film catalog.

mod document;

use crate::error::{Error, Result};
use crate::model::{FieldUpdate, Work, WorkField};

/// An ordered collection of films.
///
/// Lookups by title resolve to the first match in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    works: Vec<Work>,
}

impl Catalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_works(works: Vec<Work>) -> Self {
        Self { works }
    }

    #[must_use]
    pub fn works(&self) -> &[Work] {
        &self.works
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.works.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.works.is_empty()
    }

    fn position(&self, title: &str) -> Option<usize> {
        self.works.iter().position(|work| work.title == title)
    }
}

// Mutation
impl Catalog {
    /// Append a film. Duplicate titles are allowed.
    pub fn add(&mut self, work: Work) {
        log::debug!("Adding film {:?}", work.title);
        self.works.push(work);
    }

    /// Remove the first film with the given title.
    ///
    /// Returns `false` and leaves the catalog untouched when no film matches.
    pub fn remove(&mut self, title: &str) -> bool {
        match self.position(title) {
            Some(index) => {
                self.works.remove(index);
                log::debug!("Removed film {:?}", title);
                true
            }
            None => false,
        }
    }

    /// Apply `update` to the first film with the given title.
    ///
    /// Returns `false` without mutating anything when no film matches.
    pub fn update(&mut self, title: &str, update: FieldUpdate) -> bool {
        let Some(work) = self.works.iter_mut().find(|work| work.title == title) else {
            return false;
        };
        log::debug!("Updating {} of film {:?}", update.field(), title);
        update.apply(work);
        true
    }

    /// Update a field named by text, coercing the raw value to its type.
    ///
    /// Unknown field names and values that fail coercion are errors; a
    /// missing title is `Ok(false)`.
    pub fn update_field(&mut self, title: &str, field_name: &str, raw_value: &str) -> Result<bool> {
        let field: WorkField = field_name.parse()?;
        let update = FieldUpdate::parse(field, raw_value)?;
        Ok(self.update(title, update))
    }
}

// Queries
impl Catalog {
    /// The first film with the given title.
    pub fn get(&self, title: &str) -> Result<&Work> {
        self.works
            .iter()
            .find(|work| work.title == title)
            .ok_or_else(|| Error::NotFound {
                title: title.to_string(),
            })
    }

    pub fn filter_by_genre(&self, genre: &str) -> Vec<&Work> {
        self.filter(|work| work.genre == genre)
    }

    pub fn filter_by_director(&self, director: &str) -> Vec<&Work> {
        self.filter(|work| work.director == director)
    }

    pub fn filter_by_year(&self, year: i32) -> Vec<&Work> {
        self.filter(|work| work.release_year == year)
    }

    fn filter(&self, predicate: impl Fn(&Work) -> bool) -> Vec<&Work> {
        self.works.iter().filter(|&work| predicate(work)).collect()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Work;
    type IntoIter = std::slice::Iter<'a, Work>;

    fn into_iter(self) -> Self::IntoIter {
        self.works.iter()
    }
}
