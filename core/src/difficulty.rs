/// Difficulty levels used by the Andoku archive file naming scheme.
///
/// Standard archives ship as `std_n_1.adkb` through `std_n_9.adkb`, one file
/// per level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Difficulty {
    VeryEasy = 1,
    Easy = 2,
    Moderate = 3,
    Challenging = 4,
    Tricky = 5,
    Hard = 6,
    VeryHard = 7,
    Extreme = 8,
    UltraExtreme = 9,
}

impl Difficulty {
    pub const ALL: [Difficulty; 9] = [
        Difficulty::VeryEasy,
        Difficulty::Easy,
        Difficulty::Moderate,
        Difficulty::Challenging,
        Difficulty::Tricky,
        Difficulty::Hard,
        Difficulty::VeryHard,
        Difficulty::Extreme,
        Difficulty::UltraExtreme,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::VeryEasy => "Very Easy",
            Difficulty::Easy => "Easy",
            Difficulty::Moderate => "Moderate",
            Difficulty::Challenging => "Challenging",
            Difficulty::Tricky => "Tricky",
            Difficulty::Hard => "Hard",
            Difficulty::VeryHard => "Very Hard",
            Difficulty::Extreme => "Extreme",
            Difficulty::UltraExtreme => "Ultra Extreme",
        }
    }

    pub fn level(&self) -> u8 {
        *self as u8
    }

    /// Standard archive file name for this level, e.g. `std_n_3.adkb`.
    pub fn archive_filename(&self) -> String {
        format!("std_n_{}.adkb", self.level())
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = u8;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.level() == level)
            .ok_or(level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_roundtrip() {
        for d in Difficulty::ALL {
            assert_eq!(Difficulty::try_from(d.level()), Ok(d));
        }
        assert_eq!(Difficulty::try_from(0), Err(0));
        assert_eq!(Difficulty::try_from(10), Err(10));
    }

    #[test]
    fn test_archive_filename() {
        assert_eq!(Difficulty::VeryEasy.archive_filename(), "std_n_1.adkb");
        assert_eq!(Difficulty::UltraExtreme.archive_filename(), "std_n_9.adkb");
    }
}
