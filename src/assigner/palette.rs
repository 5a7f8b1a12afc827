use crate::{
    error::{Error, Result},
    types::ColorClass,
};
use itertools::Itertools;
use std::{fmt, str::FromStr};

pub const DEFAULT_PALETTE: [&str; 4] = ["red", "green", "blue", "gray"];

/// An ordered, non-empty list of color names.
///
/// Class ids wrap around modulo the palette length, so distinct classes may
/// share a color once they outnumber the palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<String>,
}

impl Palette {
    pub fn new<I, S>(colors: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let colors: Vec<String> = colors.into_iter().map(Into::into).collect();
        if colors.is_empty() {
            Err(Error::EmptyPalette)
        } else {
            Ok(Self { colors })
        }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    pub fn color(&self, class: ColorClass) -> &str {
        &self.colors[class % self.colors.len()]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_PALETTE.iter().map(|&c| String::from(c)).collect(),
        }
    }
}

impl FromStr for Palette {
    type Err = Error;

    /// Parses a comma separated list such as `red,green`.
    fn from_str(s: &str) -> Result<Self> {
        Self::new(s.split(',').map(str::trim).filter(|c| !c.is_empty()))
    }
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.colors.iter().join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraparound() {
        let palette = Palette::default();
        assert_eq!(palette.len(), 4);
        assert_eq!(palette.color(0), "red");
        assert_eq!(palette.color(3), "gray");
        assert_eq!(palette.color(4), "red");
        assert_eq!(palette.color(9), "green");
    }

    #[test]
    fn test_from_str() {
        let palette: Palette = "cyan, magenta".parse().unwrap();
        assert_eq!(palette.colors(), &["cyan", "magenta"]);
        assert_eq!(palette.to_string(), "cyan,magenta");
        assert!(matches!(" , ".parse::<Palette>(), Err(Error::EmptyPalette)));
        assert!(matches!(
            Palette::new(Vec::<String>::new()),
            Err(Error::EmptyPalette)
        ));
    }
}
