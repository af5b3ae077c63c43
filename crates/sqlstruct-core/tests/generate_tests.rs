// Integration tests for CREATE TABLE -> struct generation
use pretty_assertions::assert_eq;
use sqlstruct_core::error::{DiagnosticKind, Error};
use sqlstruct_core::render::{render, render_bare, render_type_prefixed};
use sqlstruct_core::schema::{SchemaExtractor, Table};
use sqlstruct_core::TagDialect;

fn extract(sql: &str) -> Table {
    SchemaExtractor::new().extract_sql(sql).unwrap().table
}

fn field_lines(output: &str) -> Vec<&str> {
    output
        .lines()
        .filter(|line| line.starts_with('\t'))
        .collect()
}

const USERS_SQL: &str = "CREATE TABLE users (id INT AUTO_INCREMENT NOT NULL, email VARCHAR(255) NOT NULL, PRIMARY KEY(id), UNIQUE KEY(email));";

#[test]
fn test_users_end_to_end_gorm() {
    let output = render_type_prefixed(&extract(USERS_SQL));

    let expected = concat!(
        "type Users struct {\n",
        "\tId int64 `gorm:\"type:int;column:id;AUTO_INCREMENT;not null;PRIMARY_KEY\"`\n",
        "\tEmail string `gorm:\"type:varchar(255);column:email;not null;UNIQUE\"`\n",
        "}\n",
    );
    assert_eq!(output, expected);
}

#[test]
fn test_users_end_to_end_xorm() {
    let output = render_bare(&extract(USERS_SQL));

    let expected = concat!(
        "type Users struct {\n",
        "\tId int64 `xorm:\"int autoincr not null pk 'id'\"`\n",
        "\tEmail string `xorm:\"varchar(255) not null unique 'email'\"`\n",
        "}\n",
    );
    assert_eq!(output, expected);
}

#[test]
fn test_column_order_preserved() {
    let table = extract(
        r#"
        CREATE TABLE events (
            zeta INT,
            alpha VARCHAR(10),
            mid DATE,
            beta BLOB
        )
    "#,
    );
    let output = render(&table, TagDialect::TypePrefixed);
    let names: Vec<&str> = field_lines(&output)
        .iter()
        .map(|line| line.trim_start().split(' ').next().unwrap())
        .collect();
    assert_eq!(names, vec!["Zeta", "Alpha", "Mid", "Beta"]);
}

#[test]
fn test_primary_key_only_on_key_column() {
    let table = extract(
        "CREATE TABLE t (id INT NOT NULL, other_id INT NOT NULL, name TEXT, PRIMARY KEY (id))",
    );

    for (dialect, flag) in [(TagDialect::TypePrefixed, ";PRIMARY_KEY"), (TagDialect::Bare, " pk ")] {
        let output = render(&table, dialect);
        let lines = field_lines(&output);
        let flagged: Vec<bool> = lines.iter().map(|line| line.contains(flag)).collect();
        assert_eq!(flagged, vec![true, false, false], "{dialect}");
    }
}

#[test]
fn test_unique_key_only_on_key_column() {
    let table = extract(
        "CREATE TABLE t (id INT, email VARCHAR(100), name VARCHAR(100), UNIQUE KEY uq_email (email))",
    );

    for (dialect, flag) in [(TagDialect::TypePrefixed, ";UNIQUE"), (TagDialect::Bare, " unique ")] {
        let output = render(&table, dialect);
        let lines = field_lines(&output);
        let flagged: Vec<bool> = lines.iter().map(|line| line.contains(flag)).collect();
        assert_eq!(flagged, vec![false, true, false], "{dialect}");
    }
}

#[test]
fn test_type_mapping() {
    let table = extract(
        r#"
        CREATE TABLE everything (
            a VARCHAR(20),
            b TEXT,
            c ENUM('x', 'y'),
            d INT,
            e TINYINT(1),
            f DOUBLE,
            g FLOAT,
            h DATE,
            i DATETIME,
            j TIME,
            k TIMESTAMP,
            l BLOB,
            m BIGINT
        )
    "#,
    );
    let output = render_type_prefixed(&table);
    let lines = field_lines(&output);

    let expected = [
        ("A string", "type:varchar(20);"),
        ("B string", "type:text;"),
        ("C string", "type:enum(x,y);"),
        ("D int64", "type:int;"),
        ("E int", "type:tinyint(1);"),
        ("F float64", "type:double;"),
        ("G float64", "type:float;"),
        ("H time.Time", "type:date;"),
        ("I time.Time", "type:datetime;"),
        ("J time.Time", "type:time;"),
        ("K time.Time", "type:timestamp;"),
        ("L []byte", "type:blob;"),
        ("M UNKNOWN_TYPE", "type:bigint;"),
    ];
    assert_eq!(lines.len(), expected.len());
    for (line, (field, tag_start)) in lines.iter().zip(expected) {
        assert!(line.starts_with(&format!("\t{} `gorm:\"{}", field, tag_start)), "{line}");
    }

    let bare = render_bare(&table);
    let bare_lines = field_lines(&bare);
    assert!(bare_lines[0].contains("`xorm:\"varchar(20) 'a'\"`"));
    assert!(bare_lines[12].starts_with("\tM UNKNOWN_TYPE `xorm:\"bigint 'm'\"`"));
}

#[test]
fn test_enum_column_with_default() {
    let table = extract(
        "CREATE TABLE accounts (state ENUM('active','suspended','closed') NOT NULL DEFAULT 'active')",
    );
    assert_eq!(
        render_type_prefixed(&table),
        "type Accounts struct {\n\tState string `gorm:\"type:enum(active,suspended,closed);column:state;not null;default:active\"`\n}\n"
    );
    assert_eq!(
        render_bare(&table),
        "type Accounts struct {\n\tState string `xorm:\"enum(active,suspended,closed) not null default 'active' 'state'\"`\n}\n"
    );
}

#[test]
fn test_rendering_is_deterministic() {
    let table = extract(USERS_SQL);
    assert_eq!(render_bare(&table), render_bare(&table));
    assert_eq!(render_type_prefixed(&table), render_type_prefixed(&table));
    assert_eq!(extract(USERS_SQL), table);
}

#[test]
fn test_missing_table_spec() {
    let result = SchemaExtractor::new().extract_sql("CREATE TABLE users_copy AS SELECT * FROM users");
    assert_eq!(
        result.unwrap_err(),
        Error::MissingTableSpec {
            table: "users_copy".to_string()
        }
    );
}

#[test]
fn test_non_ddl_is_unsupported() {
    let err = SchemaExtractor::new()
        .extract_sql("INSERT INTO users (id) VALUES (1)")
        .unwrap_err();
    assert!(matches!(err, Error::UnsupportedStatement { .. }));
    assert!(err.to_string().starts_with("unsupported statement: INSERT"));
}

#[test]
fn test_parse_error() {
    let err = SchemaExtractor::new()
        .extract_sql("CREATE TABLE users (id INT,")
        .unwrap_err();
    assert!(matches!(err, Error::Parse { .. }));
}

#[test]
fn test_secondary_index_produces_warning_and_output() {
    let extraction = SchemaExtractor::new()
        .extract_sql("CREATE TABLE t (id INT, name VARCHAR(10), PRIMARY KEY (id), KEY idx_name (name))")
        .unwrap();

    assert_eq!(extraction.diagnostics.len(), 1);
    assert_eq!(
        extraction.diagnostics[0].kind,
        DiagnosticKind::UnrecognizedIndexKind
    );
    assert_eq!(
        render_type_prefixed(&extraction.table),
        concat!(
            "type T struct {\n",
            "\tId int64 `gorm:\"type:int;column:id;PRIMARY_KEY\"`\n",
            "\tName string `gorm:\"type:varchar(10);column:name\"`\n",
            "}\n",
        )
    );
}

#[test]
fn test_inline_primary_key_and_unique() {
    let table = extract(
        "CREATE TABLE t (id INT AUTO_INCREMENT PRIMARY KEY, code CHAR(3) UNIQUE, amount DOUBLE DEFAULT 0.5)",
    );
    assert_eq!(
        render_bare(&table),
        concat!(
            "type T struct {\n",
            "\tId int64 `xorm:\"int autoincr pk 'id'\"`\n",
            "\tCode UNKNOWN_TYPE `xorm:\"char(3) unique 'code'\"`\n",
            "\tAmount float64 `xorm:\"double default '0.5' 'amount'\"`\n",
            "}\n",
        )
    );
}

#[test]
fn test_check_constraint_adds_no_warning() {
    let extraction = SchemaExtractor::new()
        .extract_sql("CREATE TABLE t (age INT NOT NULL, CHECK (age > 0))")
        .unwrap();
    assert!(extraction.diagnostics.is_empty());
    assert_eq!(extraction.table.column_names(), vec!["age"]);
}

#[test]
fn test_default_null_renders_without_default() {
    let table = extract("CREATE TABLE t (s ENUM('a','b') DEFAULT NULL)");
    assert_eq!(
        render_bare(&table),
        "type T struct {\n\tS string `xorm:\"enum(a,b) 's'\"`\n}\n"
    );
    assert_eq!(
        render_type_prefixed(&table),
        "type T struct {\n\tS string `gorm:\"type:enum(a,b);column:s\"`\n}\n"
    );
}
