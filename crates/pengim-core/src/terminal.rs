//! Closed terminal vocabulary shared with the external parser.
//!
//! Each category is its own enum so that a syllable cannot hold, say, a
//! coda where an initial belongs. Variants carry the parser's symbol name
//! (`INIT_BH`, `MED_UAI`, ...), which is also the key used by the terminal
//! catalog and by the serialized parse tree.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {category} terminal: {symbol}")]
pub struct TerminalParseError {
    pub category: Category,
    pub symbol: String,
}

/// Catalog section a terminal belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Initial,
    Medial,
    CodaStop,
    CodaNasal,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Initial,
        Category::Medial,
        Category::CodaStop,
        Category::CodaNasal,
    ];

    /// Section name in the catalog file.
    pub fn section(self) -> &'static str {
        match self {
            Category::Initial => "initials",
            Category::Medial => "medials",
            Category::CodaStop => "codastops",
            Category::CodaNasal => "codanasals",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.section())
    }
}

macro_rules! terminal_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $category:expr, {
            $($variant:ident => $symbol:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[derive(serde::Serialize, serde::Deserialize)]
        #[serde(try_from = "String", into = "&'static str")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn symbol(self) -> &'static str {
                match self {
                    $($name::$variant => $symbol),+
                }
            }
        }

        impl FromStr for $name {
            type Err = TerminalParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($symbol => Ok($name::$variant),)+
                    _ => Err(TerminalParseError {
                        category: $category,
                        symbol: s.to_string(),
                    }),
                }
            }
        }

        impl TryFrom<String> for $name {
            type Error = TerminalParseError;

            fn try_from(s: String) -> Result<Self, Self::Error> {
                s.parse()
            }
        }

        impl From<$name> for &'static str {
            fn from(t: $name) -> Self {
                t.symbol()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.symbol())
            }
        }

        impl From<$name> for Terminal {
            fn from(t: $name) -> Self {
                Terminal::$name(t)
            }
        }
    };
}

terminal_enum!(
    /// Syllable-initial consonant. The null initial has no variant.
    Initial, Category::Initial, {
        Bh => "INIT_BH",
        P => "INIT_P",
        B => "INIT_B",
        M => "INIT_M",
        Ng => "INIT_NG",
        N => "INIT_N",
        Gh => "INIT_GH",
        K => "INIT_K",
        G => "INIT_G",
        D => "INIT_D",
        T => "INIT_T",
        Z => "INIT_Z",
        C => "INIT_C",
        S => "INIT_S",
        H => "INIT_H",
        R => "INIT_R",
        L => "INIT_L",
    }
);

terminal_enum!(
    /// Vowel nucleus with any glide. `M` and `Ng` are the syllabic nasals.
    Medial, Category::Medial, {
        Ai => "MED_AI",
        Au => "MED_AU",
        Ia => "MED_IA",
        Iau => "MED_IAU",
        Ieu => "MED_IEU",
        Iou => "MED_IOU",
        Iu => "MED_IU",
        Ie => "MED_IE",
        Io => "MED_IO",
        Oi => "MED_OI",
        Ou => "MED_OU",
        Uai => "MED_UAI",
        Ua => "MED_UA",
        Ue => "MED_UE",
        Ui => "MED_UI",
        A => "MED_A",
        V => "MED_V",
        E => "MED_E",
        I => "MED_I",
        O => "MED_O",
        U => "MED_U",
        M => "MED_M",
        Ng => "MED_NG",
    }
);

terminal_enum!(
    CodaStop, Category::CodaStop, {
        P => "COD_P",
        K => "COD_K",
        H => "COD_H",
        T => "COD_T",
    }
);

terminal_enum!(
    CodaNasal, Category::CodaNasal, {
        M => "COD_M",
        Ng => "COD_NG",
        N => "COD_N",
    }
);

/// Any terminal, tagged with its category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Terminal {
    Initial(Initial),
    Medial(Medial),
    CodaStop(CodaStop),
    CodaNasal(CodaNasal),
}

impl Terminal {
    pub fn category(self) -> Category {
        match self {
            Terminal::Initial(_) => Category::Initial,
            Terminal::Medial(_) => Category::Medial,
            Terminal::CodaStop(_) => Category::CodaStop,
            Terminal::CodaNasal(_) => Category::CodaNasal,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Terminal::Initial(t) => t.symbol(),
            Terminal::Medial(t) => t.symbol(),
            Terminal::CodaStop(t) => t.symbol(),
            Terminal::CodaNasal(t) => t.symbol(),
        }
    }

    /// Parse a symbol name within a known category.
    pub fn parse_in(category: Category, symbol: &str) -> Result<Terminal, TerminalParseError> {
        Ok(match category {
            Category::Initial => Terminal::Initial(symbol.parse()?),
            Category::Medial => Terminal::Medial(symbol.parse()?),
            Category::CodaStop => Terminal::CodaStop(symbol.parse()?),
            Category::CodaNasal => Terminal::CodaNasal(symbol.parse()?),
        })
    }

    /// Every terminal in the vocabulary, category by category.
    pub fn all() -> impl Iterator<Item = Terminal> {
        Initial::ALL
            .iter()
            .copied()
            .map(Terminal::from)
            .chain(Medial::ALL.iter().copied().map(Terminal::from))
            .chain(CodaStop::ALL.iter().copied().map(Terminal::from))
            .chain(CodaNasal::ALL.iter().copied().map(Terminal::from))
    }
}

impl fmt::Display for Terminal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
