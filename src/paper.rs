use std::str::FromStr;

/// Roll paper widths supported by the printers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaperWidth {
    TwoInch,
    ThreeInch,
    FourInch,
}

impl PaperWidth {
    /// Printable width in dots.
    pub fn dots(&self) -> u32 {
        match self {
            Self::TwoInch => 384,
            Self::ThreeInch => 576,
            Self::FourInch => 832,
        }
    }

    /// Bytes per packed raster line.
    pub fn row_bytes(&self) -> usize {
        (self.dots() as usize + 7) / 8
    }

    pub fn from_inches(inches: u8) -> Option<Self> {
        match inches {
            2 => Some(Self::TwoInch),
            3 => Some(Self::ThreeInch),
            4 => Some(Self::FourInch),
            _ => None,
        }
    }
}

impl Default for PaperWidth {
    fn default() -> Self {
        Self::FourInch
    }
}

impl FromStr for PaperWidth {
    type Err = String;

    /// Accepts `2`, `3`, `4`, optionally followed by `in` or `inch`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        let digits = s.trim_end_matches("inch").trim_end_matches("in").trim();
        digits
            .parse::<u8>()
            .ok()
            .and_then(Self::from_inches)
            .ok_or_else(|| format!("Unknown paper width '{}', expected 2, 3 or 4", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dots_and_row_bytes() {
        assert_eq!(PaperWidth::TwoInch.dots(), 384);
        assert_eq!(PaperWidth::TwoInch.row_bytes(), 48);
        assert_eq!(PaperWidth::ThreeInch.row_bytes(), 72);
        assert_eq!(PaperWidth::FourInch.row_bytes(), 104);
        assert_eq!(PaperWidth::default(), PaperWidth::FourInch);
    }

    #[test]
    fn parses_inches() {
        assert_eq!("2".parse(), Ok(PaperWidth::TwoInch));
        assert_eq!("3in".parse(), Ok(PaperWidth::ThreeInch));
        assert_eq!(" 4 inch".parse(), Ok(PaperWidth::FourInch));
        assert!("5".parse::<PaperWidth>().is_err());
        assert!("wide".parse::<PaperWidth>().is_err());
    }
}
