use crate::terminology::TerminologyError;
use serde::{Deserialize, Serialize};

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = TerminologyError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(TerminologyError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(SemanticGroup {
    Drug => "drug",
    AnatomicalSite => "anatomical_site",
    Disorder => "disorder",
    Finding => "finding",
    Lab => "lab",
    Procedure => "procedure",
    Entity => "entity",
});

impl SemanticGroup {
    /// Every group, for exhaustive passes over the closed set.
    pub const ALL: [SemanticGroup; 7] = [
        SemanticGroup::Drug,
        SemanticGroup::AnatomicalSite,
        SemanticGroup::Disorder,
        SemanticGroup::Finding,
        SemanticGroup::Lab,
        SemanticGroup::Procedure,
        SemanticGroup::Entity,
    ];
}
