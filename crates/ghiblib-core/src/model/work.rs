use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::{Person, Place};

/// A cataloged film.
///
/// The title is the lookup key for catalog operations. It is not required to
/// be unique; lookups resolve to the first match in catalog order.
///
/// The serde representation is the persisted document format: `rating` is
/// always written (as `null` when absent), and `rating`, `characters` and
/// `settings` may be omitted when reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Work {
    pub title: String,
    pub director: String,
    pub release_year: i32,
    pub genre: String,
    pub plot_summary: String,

    #[serde(default)]
    pub rating: Option<f64>,

    #[serde(default)]
    pub characters: Vec<Person>,

    #[serde(default)]
    pub settings: Vec<Place>,
}

impl Work {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            director: String::new(),
            release_year: 0,
            genre: String::new(),
            plot_summary: String::new(),
            rating: None,
            characters: Vec::new(),
            settings: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_director(mut self, director: impl Into<String>) -> Self {
        self.director = director.into();
        self
    }

    #[must_use]
    pub fn with_release_year(mut self, year: i32) -> Self {
        self.release_year = year;
        self
    }

    #[must_use]
    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = genre.into();
        self
    }

    #[must_use]
    pub fn with_plot_summary(mut self, plot: impl Into<String>) -> Self {
        self.plot_summary = plot.into();
        self
    }

    #[must_use]
    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    #[must_use]
    pub fn with_character(mut self, person: Person) -> Self {
        self.characters.push(person);
        self
    }

    /// Replace the character list with an already-collected batch.
    #[must_use]
    pub fn with_characters(mut self, characters: Vec<Person>) -> Self {
        self.characters = characters;
        self
    }

    #[must_use]
    pub fn with_setting(mut self, place: Place) -> Self {
        self.settings.push(place);
        self
    }

    /// Replace the setting list with an already-collected batch.
    #[must_use]
    pub fn with_settings(mut self, settings: Vec<Place>) -> Self {
        self.settings = settings;
        self
    }
}

fn join_names<'a>(names: impl Iterator<Item = &'a str>) -> String {
    names.collect::<Vec<_>>().join(", ")
}

impl fmt::Display for Work {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Title: {}", self.title)?;
        writeln!(f, "Director: {}", self.director)?;
        writeln!(f, "Release Year: {}", self.release_year)?;
        writeln!(f, "Genre: {}", self.genre)?;
        writeln!(f, "Plot Summary: {}", self.plot_summary)?;
        match self.rating {
            Some(rating) => writeln!(f, "Rating: {}", rating)?,
            None => writeln!(f, "Rating: not rated")?,
        }
        writeln!(
            f,
            "Characters: {}",
            join_names(self.characters.iter().map(|c| c.name.as_str()))
        )?;
        write!(
            f,
            "Settings: {}",
            join_names(self.settings.iter().map(|s| s.name.as_str()))
        )
    }
}
