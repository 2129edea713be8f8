//! The interactive menu loop.
//!
//! A [`Session`] owns the catalog for the lifetime of the process and maps
//! each menu choice onto a catalog operation. Catalog errors are printed and
//! the loop carries on; only a failure of the console itself ends the
//! session early.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use ghiblib_core::model::field::parse_rating;
use ghiblib_core::{Catalog, Error, Person, Place, Work};

use crate::console::Console;
use crate::menu::{Menu, MenuChoice};

const RULE: &str = "---------------------------------------";

/// Whether the loop should keep going after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

#[derive(Debug)]
pub struct Session<R, W> {
    catalog: Catalog,
    console: Console<R, W>,
    default_path: Option<PathBuf>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(console: Console<R, W>) -> Self {
        Self {
            catalog: Catalog::new(),
            console,
            default_path: None,
        }
    }

    #[must_use]
    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// File used by save and load when the filename prompt is left blank.
    #[must_use]
    pub fn with_default_path(mut self, path: Option<PathBuf>) -> Self {
        self.default_path = path;
        self
    }

    pub fn into_parts(self) -> (Catalog, Console<R, W>) {
        (self.catalog, self.console)
    }

    /// Load the default library file before the menu starts.
    ///
    /// Does nothing when no default path is set or the file does not exist
    /// yet; a file that fails to load is reported and the catalog is kept.
    pub fn autoload(&mut self) -> io::Result<()> {
        let Some(path) = self.default_path.clone() else {
            return Ok(());
        };
        if !path.exists() {
            log::debug!("Skipping autoload, {} does not exist", path.display());
            return Ok(());
        }

        match self.catalog.import_from_json(&path) {
            Ok(count) => self
                .console
                .say(format!("Loaded {} films from {}", count, path.display())),
            Err(e) => self.report(&e),
        }
    }

    /// Run the menu until the user exits or input ends.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.console.say(Menu)?;
            let Some(input) = self.console.prompt("\nEnter your choice: ")? else {
                log::debug!("Input closed at menu prompt");
                break;
            };

            let Some(choice) = MenuChoice::parse(&input) else {
                self.console.say("Invalid input. Please try again!")?;
                continue;
            };

            match self.dispatch(choice) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => break,
                Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                    log::debug!("Input closed during {:?}", choice);
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        }
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice) -> io::Result<Flow> {
        match choice {
            MenuChoice::Add => self.add_film()?,
            MenuChoice::Remove => self.remove_film()?,
            MenuChoice::Update => self.update_film()?,
            MenuChoice::ByGenre => self.films_by_genre()?,
            MenuChoice::ByDirector => self.films_by_director()?,
            MenuChoice::ByYear => self.films_by_year()?,
            MenuChoice::DisplayAll => self.display_all()?,
            MenuChoice::Save => self.save()?,
            MenuChoice::Load => self.load()?,
            MenuChoice::Exit => {
                self.console.say(
                    "\nThank you for using the Ghibli Film Library Manager! \
                     I hope it gives you thrilling adventures and learnings!\n\n\
                     Studio Ghibli films are like dreams you wish you could wake up and live in. \
                     - Hayao Miyazaki",
                )?;
                return Ok(Flow::Exit);
            }
        }
        Ok(Flow::Continue)
    }

    fn report(&mut self, error: &Error) -> io::Result<()> {
        self.console.say(format!("\nError: {}", error))
    }
}

// Catalog edits
impl<R: BufRead, W: Write> Session<R, W> {
    fn add_film(&mut self) -> io::Result<()> {
        let title = self.console.ask("Enter Ghibli film title: ")?;
        let director = self.console.ask("Enter director: ")?;
        let release_year = self.ask_year()?;
        let genre = self.console.ask("Enter film genre: ")?;
        let plot_summary = self.console.ask("Enter plot summary: ")?;
        let characters = self.ask_characters()?;
        let settings = self.ask_settings()?;

        let raw_rating = self.console.ask("Enter rating (optional): ")?;
        let Some(rating) = parse_rating(&raw_rating) else {
            return self.report(&Error::InvalidInput {
                field: "rating",
                value: raw_rating,
            });
        };

        let mut work = Work::new(title)
            .with_director(director)
            .with_release_year(release_year)
            .with_genre(genre)
            .with_plot_summary(plot_summary)
            .with_characters(characters)
            .with_settings(settings);
        work.rating = rating;

        self.catalog.add(work);
        self.console.say("\nGhibli Film added successfully!")
    }

    /// Re-prompt until the entry is a whole number.
    fn ask_year(&mut self) -> io::Result<i32> {
        loop {
            let raw = self.console.ask("Enter release year: ")?;
            match raw.trim().parse() {
                Ok(year) => return Ok(year),
                Err(_) => self.console.say("Please enter a valid year.")?,
            }
        }
    }

    fn ask_characters(&mut self) -> io::Result<Vec<Person>> {
        let mut characters = Vec::new();
        loop {
            let name = self
                .console
                .ask("Enter character name (or tap enter to finish): ")?;
            if name.is_empty() {
                return Ok(characters);
            }
            let roles = self.console.ask("Enter character role: ")?;
            let description = self.console.ask("Enter character description: ")?;
            characters.push(Person::new(name, roles, description));
        }
    }

    fn ask_settings(&mut self) -> io::Result<Vec<Place>> {
        let mut settings = Vec::new();
        loop {
            let name = self
                .console
                .ask("Enter setting name (or tap enter to finish): ")?;
            if name.is_empty() {
                return Ok(settings);
            }
            let description = self.console.ask("Enter ghibli film setting description: ")?;
            settings.push(Place::new(name, description));
        }
    }

    fn remove_film(&mut self) -> io::Result<()> {
        let title = self.console.ask("Enter title of the film to remove: ")?;
        if self.catalog.remove(&title) {
            self.console.say("\nGhibli Film removed successfully!")
        } else {
            self.report(&Error::NotFound { title })
        }
    }

    fn update_film(&mut self) -> io::Result<()> {
        let title = self.console.ask("Enter title of the film to update: ")?;
        let field = self.console.ask(
            "Enter attribute to update (title/director/release_year/genre/plot_summary/rating): ",
        )?;
        let value = self
            .console
            .ask(&format!("Enter new value for {}: ", field.trim()))?;

        match self.catalog.update_field(&title, &field, &value) {
            Ok(true) => self.console.say("\nGhibli Film updated successfully!"),
            Ok(false) => self.report(&Error::NotFound { title }),
            Err(e) => self.report(&e),
        }
    }
}

// Queries
impl<R: BufRead, W: Write> Session<R, W> {
    fn films_by_genre(&mut self) -> io::Result<()> {
        let genre = self.console.ask("Enter film genre: ")?;
        let works = self.catalog.filter_by_genre(&genre);
        list(&mut self.console, &works, "\nNo films found in this genre.")
    }

    fn films_by_director(&mut self) -> io::Result<()> {
        let director = self.console.ask("Enter director: ")?;
        let works = self.catalog.filter_by_director(&director);
        list(&mut self.console, &works, "\nNo films found directed by this director.")
    }

    fn films_by_year(&mut self) -> io::Result<()> {
        let raw = self.console.ask("Enter release year: ")?;
        let Ok(year) = raw.trim().parse::<i32>() else {
            return self.report(&Error::InvalidInput {
                field: "release_year",
                value: raw,
            });
        };
        let works = self.catalog.filter_by_year(year);
        list(&mut self.console, &works, "\nNo films found released in this year.")
    }

    fn display_all(&mut self) -> io::Result<()> {
        if self.catalog.is_empty() {
            return self.console.say("\nThe library is empty.");
        }

        let mut text = String::new();
        for work in &self.catalog {
            text.push_str(&section("FILM DETAILS"));
            text.push_str(&work.to_string());
            text.push('\n');
            text.push_str(&section("CHARACTERS"));
            for person in &work.characters {
                text.push_str(&person.to_string());
                text.push('\n');
            }
            text.push_str(&section("SETTINGS"));
            for place in &work.settings {
                text.push_str(&place.to_string());
                text.push('\n');
            }
        }
        self.console.say(text.trim_end())
    }
}

fn list<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    works: &[&Work],
    empty_message: &str,
) -> io::Result<()> {
    if works.is_empty() {
        return console.say(empty_message);
    }
    for work in works {
        console.say(format!("\n{}", work))?;
    }
    Ok(())
}

fn section(heading: &str) -> String {
    format!("\n{RULE}\n{heading:^39}\n{RULE}\n")
}

// Persistence
impl<R: BufRead, W: Write> Session<R, W> {
    /// Ask for a filename, falling back to the configured default when blank.
    fn ask_path(&mut self, verb: &str) -> io::Result<Option<PathBuf>> {
        let label = match &self.default_path {
            Some(path) => format!("Enter filename to {} JSON data [{}]: ", verb, path.display()),
            None => format!("Enter filename to {} JSON data: ", verb),
        };
        let raw = self.console.ask(&label)?;
        let raw = raw.trim();

        if !raw.is_empty() {
            return Ok(Some(PathBuf::from(raw)));
        }
        if self.default_path.is_none() {
            self.report(&Error::InvalidInput {
                field: "filename",
                value: String::new(),
            })?;
        }
        Ok(self.default_path.clone())
    }

    fn save(&mut self) -> io::Result<()> {
        let Some(path) = self.ask_path("save")? else {
            return Ok(());
        };
        match self.catalog.export_to_json(&path) {
            Ok(()) => self.console.say(format!(
                "\nSaved {} films to {} successfully!",
                self.catalog.len(),
                path.display()
            )),
            Err(e) => self.report(&e),
        }
    }

    fn load(&mut self) -> io::Result<()> {
        let Some(path) = self.ask_path("load")? else {
            return Ok(());
        };
        match self.catalog.import_from_json(&path) {
            Ok(count) => self.console.say(format!(
                "\nLoaded {} films from {} successfully!",
                count,
                path.display()
            )),
            Err(e) => self.report(&e),
        }
    }
}
