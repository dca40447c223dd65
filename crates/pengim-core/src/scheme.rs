//! Output scheme identifiers.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown output scheme: {0}")]
pub struct UnknownScheme(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Scheme {
    /// Gengdang Pêng'im
    Gdpi,
    /// Gaginang Peng'im
    Ggnn,
    /// Tie-lo
    Tlo,
    Duffus,
    /// Sinwenz
    Sinwz,
    /// 15-initial rime-table notation (十五音)
    Zapngou,
    /// Tai-lo, closest Taiwanese syllable
    Tailo,
}

/// How a scheme spells tone and joins syllables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    /// Trailing tone digits, separators echoed.
    PlainDigits,
    /// Combining tone mark inside the body, syllables hyphen-joined.
    Diacritic,
    /// Trailing citation digit, glide letters, hyphen-joined.
    Sinwenz,
    /// Bracketed rime-table characters.
    RimeTable,
}

impl Scheme {
    pub const ALL: [Scheme; 7] = [
        Scheme::Gdpi,
        Scheme::Ggnn,
        Scheme::Tlo,
        Scheme::Duffus,
        Scheme::Sinwz,
        Scheme::Zapngou,
        Scheme::Tailo,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Scheme::Gdpi => "gdpi",
            Scheme::Ggnn => "ggnn",
            Scheme::Tlo => "tlo",
            Scheme::Duffus => "duffus",
            Scheme::Sinwz => "sinwz",
            Scheme::Zapngou => "zapngou",
            Scheme::Tailo => "tailo",
        }
    }

    /// Catalog column the scheme reads, `None` for hardcoded inventories.
    ///
    /// The rime-table notation spells finals from the Dieghv column and
    /// initials from its own table.
    pub fn catalog_key(self) -> Option<&'static str> {
        match self {
            Scheme::Gdpi => Some("gdpi"),
            Scheme::Ggnn => Some("ggnn"),
            Scheme::Tlo => Some("tlo"),
            Scheme::Tailo => Some("tailo"),
            Scheme::Zapngou => Some("dieghv"),
            Scheme::Duffus | Scheme::Sinwz => None,
        }
    }

    pub fn family(self) -> Family {
        match self {
            Scheme::Gdpi | Scheme::Ggnn => Family::PlainDigits,
            Scheme::Tlo | Scheme::Duffus | Scheme::Tailo => Family::Diacritic,
            Scheme::Sinwz => Family::Sinwenz,
            Scheme::Zapngou => Family::RimeTable,
        }
    }
}

impl FromStr for Scheme {
    type Err = UnknownScheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gdpi" => Ok(Scheme::Gdpi),
            "ggnn" => Ok(Scheme::Ggnn),
            "tlo" => Ok(Scheme::Tlo),
            "duffus" => Ok(Scheme::Duffus),
            "sinwz" => Ok(Scheme::Sinwz),
            "zapngou" | "dieghv" => Ok(Scheme::Zapngou),
            "tailo" => Ok(Scheme::Tailo),
            _ => Err(UnknownScheme(s.to_string())),
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_parse_back() {
        for scheme in Scheme::ALL {
            assert_eq!(scheme.id().parse::<Scheme>(), Ok(scheme));
        }
    }

    #[test]
    fn dieghv_is_an_alias() {
        assert_eq!("dieghv".parse::<Scheme>(), Ok(Scheme::Zapngou));
    }

    #[test]
    fn unknown_id() {
        let err = "pinyin".parse::<Scheme>().unwrap_err();
        assert_eq!(err.to_string(), "unknown output scheme: pinyin");
        assert!("TLO".parse::<Scheme>().is_err());
    }

    #[test]
    fn hardcoded_schemes_have_no_catalog_column() {
        assert_eq!(Scheme::Duffus.catalog_key(), None);
        assert_eq!(Scheme::Sinwz.catalog_key(), None);
        assert_eq!(Scheme::Zapngou.catalog_key(), Some("dieghv"));
    }
}
