use sqlmodel::config::GeneratorSettings;
use sqlmodel::prelude::*;
use sqlmodel::schema::SchemaDefinition;
use sqlmodel::sql::validate::validate_sql;

const LIBRARY: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/schema/fixtures/library.toml");

fn library() -> SchemaDefinition {
    SchemaDefinition::from_file(LIBRARY).unwrap()
}

fn render(g: &SqlStatementGenerator, statements: &[SqlStatement]) -> Vec<String> {
    statements.iter().map(|s| g.export(s).unwrap()).collect()
}

#[test]
fn test_library_schema_on_postgres() {
    let g = SqlStatementGenerator::new(Dialect::Postgres);
    let statements = library().to_statements().unwrap();
    let sql = render(&g, &statements);

    assert_eq!(
        sql,
        vec![
            "create sequence book_seq start with 1 increment by 1".to_string(),
            "create table author (id bigint not null, name varchar(80) not null, born date, primary key (id))"
                .to_string(),
            "create table edition (isbn varchar(13) not null, printing integer not null, price decimal(19,2), \
             primary key (printing, isbn))"
                .to_string(),
            "create table book (id bigint GENERATED BY DEFAULT AS IDENTITY, title varchar(200) not null, \
             author_id bigint not null, edition_printing integer, edition_isbn varchar(13), primary key (id), \
             foreign key (author_id) references author (id), \
             foreign key (edition_printing, edition_isbn) references edition (printing, isbn), \
             unique (edition_printing, edition_isbn))"
                .to_string(),
            "create table author_book (author_id bigint not null, book_id bigint not null, \
             foreign key (author_id) references author (id), foreign key (book_id) references book (id))"
                .to_string(),
        ]
    );

    for (statement, text) in statements.iter().zip(&sql) {
        if matches!(statement, SqlStatement::CreateTable(_) | SqlStatement::CreateJoinTable(_)) {
            validate_sql(text, Dialect::Postgres).unwrap();
        }
    }
}

#[test]
fn test_library_drop_statements() {
    let g = SqlStatementGenerator::new(Dialect::Derby);
    let sql = render(&g, &library().to_drop_statements());
    assert_eq!(
        sql,
        vec![
            "drop table author_book",
            "drop table book",
            "drop table edition",
            "drop table author",
            "drop sequence book_seq restrict",
        ]
    );
}

#[test]
fn test_settings_flow_into_schema_output() {
    let settings = GeneratorSettings::from_toml(
        r#"
dialect = "oracle"
default_precision = 10
"#,
    )
    .unwrap();
    let g = SqlStatementGenerator::from_settings(&settings).unwrap();
    let statements = library().to_statements().unwrap();

    assert_eq!(
        g.export(&statements[2]).unwrap(),
        "create table edition (isbn varchar2(13) not null, printing number(10) not null, price number(10,2), \
         primary key (printing, isbn))"
    );
}

#[test]
fn test_mysql_rejects_schema_sequences() {
    let g = SqlStatementGenerator::new(Dialect::MySql);
    let statements = library().to_statements().unwrap();

    let err = g.export(&statements[0]).unwrap_err();
    assert!(matches!(err, SqlError::Unsupported { dialect: "mysql", .. }));

    // tables still render
    let book = g.export(&statements[3]).unwrap();
    assert!(book.starts_with("create table book (id bigint not null AUTO_INCREMENT, title varchar(200) not null"));
    validate_sql(&book, Dialect::MySql).unwrap();
}

#[test]
fn test_exported_statements_serialize_to_json() {
    let g = SqlStatementGenerator::new(Dialect::H2);
    let exported: Vec<ExportedStatement> = library()
        .to_drop_statements()
        .iter()
        .map(|s| g.export_statement(s).unwrap())
        .collect();

    let json = serde_json::to_value(&exported).unwrap();
    assert_eq!(json[0]["sql"], "drop table author_book");
    assert_eq!(json[0]["parameters"], serde_json::json!([]));
    assert_eq!(json.as_array().map(Vec::len), Some(5));
}

#[test]
fn test_missing_schema_file() {
    let err = SchemaDefinition::from_file("does/not/exist.toml").unwrap_err();
    assert!(matches!(err, SqlError::Schema(ref m) if m.contains("does/not/exist.toml")));
}

#[test]
fn test_composite_reference_needs_matching_columns() {
    let schema = SchemaDefinition::from_toml(
        r#"
[[tables]]
name = "edition"

[tables.primary_key]
columns = [{ name = "isbn", type = "varchar", length = 13 }, { name = "printing", type = "int" }]

[[tables]]
name = "review"
primary_key = { columns = [{ name = "id", type = "bigint" }] }

[[tables.foreign_keys]]
references = "edition"
columns = ["edition_isbn"]
"#,
    )
    .unwrap();

    assert_eq!(
        schema.to_statements().unwrap_err(),
        SqlError::JoinColumnCountMismatch {
            expected: 2,
            actual: 1
        }
    );
}
