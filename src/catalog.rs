//! Theme catalog: the fixed letter pools and their closed dictionaries.

use std::collections::HashSet;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    pub id: &'static str,
    pub name: &'static str,
    /// Letter pool; repeated characters produce repeated tiles.
    pub letters: &'static str,
    /// Lower-case accepted answers for this theme only.
    pub dictionary: HashSet<&'static str>,
}

impl Theme {
    fn new(id: &'static str, name: &'static str, letters: &'static str, words: &[&'static str]) -> Self {
        Self {
            id,
            name,
            letters,
            dictionary: words.iter().copied().collect(),
        }
    }

    pub fn accepts(&self, word: &str) -> bool {
        self.dictionary.contains(word)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeCatalog {
    themes: Vec<Theme>,
}

impl ThemeCatalog {
    pub fn standard() -> Self {
        let themes = vec![
            Theme::new(
                "space",
                "Space",
                "PLANETS",
                &[
                    "plan", "planet", "planets", "pan", "pet", "pets", "lap", "sat", "tan", "net",
                    "set", "ant", "lane", "plea", "lean",
                ],
            ),
            Theme::new(
                "myth",
                "Mythology",
                "OLYMPUS",
                &[
                    "ply", "opus", "soup", "plus", "soup", "mop", "sum", "plys", "you", "us", "my",
                    "spum",
                ],
            ),
            Theme::new(
                "ocean",
                "Ocean",
                "CORALBE",
                &["coral", "coal", "oral", "car", "arc", "bar", "lab", "able", "core", "race", "care"],
            ),
        ];
        Self { themes }
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    /// Wraps `index` around the catalog size.
    pub fn normalize(&self, index: usize) -> usize {
        index % self.len()
    }

    pub fn get(&self, index: usize) -> &Theme {
        &self.themes[self.normalize(index)]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Theme> {
        self.themes.iter()
    }
}

impl Default for ThemeCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
