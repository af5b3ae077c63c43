//! Tag body assembly for both dialects
//!
//! Flag order is fixed: auto-increment, not null, default, primary key,
//! unique.

use crate::schema::Column;

/// `(a,b,c)` for enum members, else `(<length>)`, else nothing
fn type_args(column: &Column) -> String {
    if !column.enum_values.is_empty() {
        format!("({})", column.enum_values.join(","))
    } else if let Some(length) = &column.length {
        format!("({})", length)
    } else {
        String::new()
    }
}

/// Bare tag body, e.g. `varchar(255) not null default 'x' unique 'email'`
pub fn bare_tag(column: &Column) -> String {
    let mut parts = vec![format!("{}{}", column.sql_type, type_args(column))];

    if column.auto_increment {
        parts.push("autoincr".to_string());
    }
    if column.not_null {
        parts.push("not null".to_string());
    }
    if let Some(default) = &column.default {
        parts.push(format!("default '{}'", default));
    }
    if column.is_primary_key {
        parts.push("pk".to_string());
    }
    if column.is_unique {
        parts.push("unique".to_string());
    }
    parts.push(format!("'{}'", column.name));

    parts.join(" ")
}

/// Type-prefixed tag body, e.g. `type:varchar(255);column:email;not null;UNIQUE`
pub fn type_prefixed_tag(column: &Column) -> String {
    let mut tag = format!(
        "type:{}{};column:{}",
        column.sql_type,
        type_args(column),
        column.name
    );

    if column.auto_increment {
        tag.push_str(";AUTO_INCREMENT");
    }
    if column.not_null {
        tag.push_str(";not null");
    }
    if let Some(default) = &column.default {
        tag.push_str(";default:");
        tag.push_str(default);
    }
    if column.is_primary_key {
        tag.push_str(";PRIMARY_KEY");
    }
    if column.is_unique {
        tag.push_str(";UNIQUE");
    }

    tag
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_args_take_precedence_over_length() {
        let column = Column::new("state", "enum")
            .with_length("10")
            .with_enum_values(["a", "b", "c"]);
        assert_eq!(type_prefixed_tag(&column), "type:enum(a,b,c);column:state");
        assert_eq!(bare_tag(&column), "enum(a,b,c) 'state'");
    }

    #[test]
    fn test_default_value() {
        let column = Column::new("status", "tinyint").not_null().with_default("1");
        assert_eq!(
            type_prefixed_tag(&column),
            "type:tinyint;column:status;not null;default:1"
        );
        assert_eq!(bare_tag(&column), "tinyint not null default '1' 'status'");
    }

    #[test]
    fn test_all_flags_in_order() {
        let column = Column::new("id", "int")
            .with_length("11")
            .auto_increment()
            .not_null()
            .with_default("0")
            .primary_key()
            .unique();
        assert_eq!(
            type_prefixed_tag(&column),
            "type:int(11);column:id;AUTO_INCREMENT;not null;default:0;PRIMARY_KEY;UNIQUE"
        );
        assert_eq!(
            bare_tag(&column),
            "int(11) autoincr not null default '0' pk unique 'id'"
        );
    }
}
