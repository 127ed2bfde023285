use crate::db::DatabaseError;
use serde::{Deserialize, Serialize};

/// Macro to generate enum with as_str + std::str::FromStr pattern.
/// Serde uses the same wire label as `as_str`.
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $s)] $variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = DatabaseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(DatabaseError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(AgeBracket {
    EighteenToTwentyFive => "18-25",
    TwentySixToThirtyFive => "26-35",
    ThirtySixToFortyFive => "36-45",
    FortySixToFiftyFive => "46-55",
    FiftySixToSixtyFive => "56-65",
    SixtyFivePlus => "65+",
});

impl Default for AgeBracket {
    fn default() -> Self {
        Self::TwentySixToThirtyFive
    }
}

str_enum!(Gender {
    Male => "male",
    Female => "female",
    Other => "other",
});

impl Default for Gender {
    fn default() -> Self {
        Self::Male
    }
}

str_enum!(AnalysisSource {
    OpenAi => "openai",
    LocalAnalysis => "local_analysis",
});
