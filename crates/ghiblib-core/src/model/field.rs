//! Typed, field-level updates to a [`Work`].
//!
//! Updates name their target with a closed [`WorkField`] and carry an
//! already-coerced value in a [`FieldUpdate`], so a catalog never assigns a
//! field that does not exist or a value of the wrong type.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::model::Work;

/// The fields of a [`Work`] that can be updated by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkField {
    Title,
    Director,
    ReleaseYear,
    Genre,
    PlotSummary,
    Rating,
}

impl WorkField {
    pub const ALL: [Self; 6] = [
        Self::Title,
        Self::Director,
        Self::ReleaseYear,
        Self::Genre,
        Self::PlotSummary,
        Self::Rating,
    ];

    /// The name used for this field in the persisted document.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Director => "director",
            Self::ReleaseYear => "release_year",
            Self::Genre => "genre",
            Self::PlotSummary => "plot_summary",
            Self::Rating => "rating",
        }
    }
}

impl fmt::Display for WorkField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "title" => Ok(Self::Title),
            "director" => Ok(Self::Director),
            "release_year" | "releaseYear" => Ok(Self::ReleaseYear),
            "genre" => Ok(Self::Genre),
            "plot_summary" | "plotSummary" => Ok(Self::PlotSummary),
            "rating" => Ok(Self::Rating),
            other => Err(Error::UnknownField(other.to_string())),
        }
    }
}

/// A new value for one field of a [`Work`].
#[derive(Debug, Clone, PartialEq)]
pub enum FieldUpdate {
    Title(String),
    Director(String),
    ReleaseYear(i32),
    Genre(String),
    PlotSummary(String),
    /// `None` clears the rating.
    Rating(Option<f64>),
}

impl FieldUpdate {
    /// Coerce raw text into a typed update for `field`.
    ///
    /// Release years must be integers. A blank rating clears it; anything
    /// else must be a finite number.
    pub fn parse(field: WorkField, raw: &str) -> Result<Self> {
        let invalid = || Error::InvalidInput {
            field: field.as_str(),
            value: raw.to_string(),
        };

        let update = match field {
            WorkField::Title => Self::Title(raw.to_string()),
            WorkField::Director => Self::Director(raw.to_string()),
            WorkField::Genre => Self::Genre(raw.to_string()),
            WorkField::PlotSummary => Self::PlotSummary(raw.to_string()),
            WorkField::ReleaseYear => {
                Self::ReleaseYear(raw.trim().parse().map_err(|_| invalid())?)
            }
            WorkField::Rating => Self::Rating(parse_rating(raw).ok_or_else(invalid)?),
        };
        Ok(update)
    }

    /// The field this update targets.
    #[must_use]
    pub const fn field(&self) -> WorkField {
        match self {
            Self::Title(_) => WorkField::Title,
            Self::Director(_) => WorkField::Director,
            Self::ReleaseYear(_) => WorkField::ReleaseYear,
            Self::Genre(_) => WorkField::Genre,
            Self::PlotSummary(_) => WorkField::PlotSummary,
            Self::Rating(_) => WorkField::Rating,
        }
    }

    pub fn apply(self, work: &mut Work) {
        match self {
            Self::Title(title) => work.title = title,
            Self::Director(director) => work.director = director,
            Self::ReleaseYear(year) => work.release_year = year,
            Self::Genre(genre) => work.genre = genre,
            Self::PlotSummary(plot) => work.plot_summary = plot,
            Self::Rating(rating) => work.rating = rating,
        }
    }
}

/// Parse an optional rating. `Some(None)` is a blank entry; `None` is invalid.
pub fn parse_rating(raw: &str) -> Option<Option<f64>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Some(None);
    }
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Some(Some(value)),
        _ => None,
    }
}
