use std::fmt;

/// One entry of the numbered main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Exit,
    Add,
    Remove,
    Update,
    ByGenre,
    ByDirector,
    ByYear,
    DisplayAll,
    Save,
    Load,
}

impl MenuChoice {
    /// Menu order as displayed; `Exit` is listed last but selected with 0.
    pub const ALL: [Self; 10] = [
        Self::Add,
        Self::Remove,
        Self::Update,
        Self::ByGenre,
        Self::ByDirector,
        Self::ByYear,
        Self::DisplayAll,
        Self::Save,
        Self::Load,
        Self::Exit,
    ];

    /// Parse the user's selection. Surrounding whitespace is ignored.
    pub fn parse(input: &str) -> Option<Self> {
        let choice = match input.trim() {
            "0" => Self::Exit,
            "1" => Self::Add,
            "2" => Self::Remove,
            "3" => Self::Update,
            "4" => Self::ByGenre,
            "5" => Self::ByDirector,
            "6" => Self::ByYear,
            "7" => Self::DisplayAll,
            "8" => Self::Save,
            "9" => Self::Load,
            _ => return None,
        };
        Some(choice)
    }

    pub const fn number(self) -> u8 {
        match self {
            Self::Exit => 0,
            Self::Add => 1,
            Self::Remove => 2,
            Self::Update => 3,
            Self::ByGenre => 4,
            Self::ByDirector => 5,
            Self::ByYear => 6,
            Self::DisplayAll => 7,
            Self::Save => 8,
            Self::Load => 9,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Exit => "Exit",
            Self::Add => "Add Film",
            Self::Remove => "Remove Film",
            Self::Update => "Update Film",
            Self::ByGenre => "Classify by Genre",
            Self::ByDirector => "Classify by Director",
            Self::ByYear => "Classify by Year",
            Self::DisplayAll => "Display Information",
            Self::Save => "Save to JSON",
            Self::Load => "Load from JSON",
        }
    }
}

/// The main menu banner and option box.
#[derive(Debug, Clone, Copy, Default)]
pub struct Menu;

impl fmt::Display for Menu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\n---------------------------------------")?;
        writeln!(f, "  STUDIO GHIBLI FILM LIBRARY MANAGER")?;
        writeln!(f, "---------------------------------------")?;
        writeln!(f, " ╔═════════════════════════════════════╗")?;
        for choice in MenuChoice::ALL {
            let entry = format!("{}. {}", choice.number(), choice.label());
            writeln!(f, " ║  {:<35}║", entry)?;
        }
        write!(f, " ╚═════════════════════════════════════╝")
    }
}
