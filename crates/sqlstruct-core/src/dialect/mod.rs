//! Tag dialect support

use std::str::FromStr;

/// Supported struct tag dialects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TagDialect {
    /// `xorm:"varchar(255) not null pk 'id'"`
    Bare,
    /// `gorm:"type:varchar(255);column:id;not null;PRIMARY_KEY"`
    #[default]
    TypePrefixed,
}

impl TagDialect {
    /// Struct tag key the dialect is written under
    pub fn tag_key(&self) -> &'static str {
        match self {
            TagDialect::Bare => "xorm",
            TagDialect::TypePrefixed => "gorm",
        }
    }
}

impl FromStr for TagDialect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "xorm" | "bare" => Ok(TagDialect::Bare),
            "gorm" | "type-prefixed" | "typed" => Ok(TagDialect::TypePrefixed),
            _ => Err(format!(
                "Unknown tag dialect: '{}'. Supported dialects: gorm, xorm.",
                s
            )),
        }
    }
}

impl std::fmt::Display for TagDialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag_key())
    }
}
