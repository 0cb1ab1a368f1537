use std::sync::Arc;

use sqlmodel::config::GeneratorSettings;
use sqlmodel::prelude::*;
use sqlmodel::sql::name::DefaultNameTranslator;

fn citizen() -> FromTable {
    FromTable::new("citizen").with_alias("c")
}

fn select_by_name() -> SqlSelect {
    let c = citizen();
    SqlSelect::builder()
        .from(c.clone())
        .value(c.column("id"))
        .condition(c.column("name").eq(param("name")))
        .build()
        .unwrap()
}

// ============================================================================
// Sequence next value
// ============================================================================

#[test]
fn test_oracle_next_value() {
    let g = SqlStatementGenerator::new(Dialect::Oracle);
    assert_eq!(
        g.sequence_next_value_statement(None, "citizen_seq").unwrap(),
        "select citizen_seq.nextval from dual"
    );
}

#[test]
fn test_next_value_forms() {
    let next = |d| {
        SqlStatementGenerator::new(d)
            .sequence_next_value_statement(None, "s")
            .unwrap()
    };

    assert_eq!(next(Dialect::Ansi), "VALUES (NEXT VALUE FOR s)");
    assert_eq!(next(Dialect::Derby), "VALUES (NEXT VALUE FOR s)");
    assert_eq!(next(Dialect::H2), "VALUES NEXT VALUE FOR s");
    assert_eq!(next(Dialect::MariaDb), "select nextval(s)");
    assert_eq!(next(Dialect::Postgres), "select nextval('s')");
}

#[test]
fn test_next_value_with_schema() {
    let oracle = SqlStatementGenerator::new(Dialect::Oracle);
    assert_eq!(
        oracle.sequence_next_value_statement(Some("app"), "citizen_seq").unwrap(),
        "select app.citizen_seq.nextval from dual"
    );

    // empty schema is the same as none
    assert_eq!(
        oracle.sequence_next_value_statement(Some(""), "citizen_seq").unwrap(),
        "select citizen_seq.nextval from dual"
    );

    let postgres = SqlStatementGenerator::new(Dialect::Postgres).with_quoted_identifiers(true);
    assert_eq!(
        postgres.sequence_next_value_statement(Some("app"), "seq").unwrap(),
        r#"select nextval('"app"."seq"')"#
    );
}

#[test]
fn test_mysql_next_value_unsupported() {
    let err = SqlStatementGenerator::new(Dialect::MySql)
        .sequence_next_value_statement(None, "s")
        .unwrap_err();
    assert_eq!(
        err,
        SqlError::Unsupported {
            dialect: "mysql",
            feature: "sequences".to_string()
        }
    );
}

// ============================================================================
// Dialect selection
// ============================================================================

#[test]
fn test_parse_dialect_names() {
    assert_eq!(Dialect::parse("PostgreSQL").unwrap(), Dialect::Postgres);
    assert_eq!(Dialect::parse(" mariadb ").unwrap(), Dialect::MariaDb);
    assert_eq!("generic".parse::<Dialect>().unwrap(), Dialect::Ansi);
    assert_eq!(
        Dialect::parse("sybase").unwrap_err(),
        SqlError::UnknownDialect("sybase".to_string())
    );
    assert_eq!(Dialect::default(), Dialect::Ansi);
}

#[test]
fn test_every_dialect_renders_the_same_model() {
    let select = select_by_name();
    for dialect in Dialect::ALL {
        let exported = SqlStatementGenerator::new(dialect)
            .export_statement(&select.clone().into())
            .unwrap();
        assert!(exported.sql.starts_with("select c.id from citizen"), "{}", exported.sql);
        assert!(exported.sql.ends_with("where c.name = ?"), "{}", exported.sql);
        assert_eq!(exported.parameters, vec![Some("name".to_string())]);
    }
}

#[test]
fn test_quoting_per_dialect() {
    let select = select_by_name();
    let quoted = |d| {
        SqlStatementGenerator::new(d)
            .with_quoted_identifiers(true)
            .export_select(&select)
            .unwrap()
    };

    assert_eq!(
        quoted(Dialect::Postgres),
        r#"select "c"."id" from "citizen" AS "c" where "c"."name" = ?"#
    );
    assert_eq!(
        quoted(Dialect::MySql),
        "select `c`.`id` from `citizen` AS `c` where `c`.`name` = ?"
    );
    assert_eq!(
        quoted(Dialect::Oracle),
        r#"select "c"."id" from "citizen" "c" where "c"."name" = ?"#
    );
}

#[test]
fn test_string_literal_quoting() {
    let c = citizen();
    let select = SqlSelect::builder()
        .from(c.clone())
        .value(c.column("id"))
        .condition(c.column("name").eq(lit_str(r"O'Brien\")))
        .build()
        .unwrap();
    let render = |d| SqlStatementGenerator::new(d).export_select(&select).unwrap();

    assert!(render(Dialect::Ansi).ends_with(r"c.name = 'O''Brien\'"));
    assert!(render(Dialect::MySql).ends_with(r"name = 'O''Brien\\'"));
}

// ============================================================================
// Customisation
// ============================================================================

#[derive(Debug)]
struct UpperCaseTables;

impl NameTranslator for UpperCaseTables {
    fn to_column_name(
        &self,
        table_alias: Option<&str>,
        column_name: &str,
        column_alias: Option<&str>,
    ) -> String {
        DefaultNameTranslator::new().to_column_name(table_alias, column_name, column_alias)
    }

    fn to_table_name(&self, table_alias: Option<&str>, table_name: &str) -> String {
        DefaultNameTranslator::new().to_table_name(table_alias, &table_name.to_uppercase())
    }

    fn alias_declaration(&self, alias: &str) -> String {
        DefaultNameTranslator::new().alias_declaration(alias)
    }
}

#[test]
fn test_custom_name_translator() {
    let g = SqlStatementGenerator::new(Dialect::H2).with_name_translator(Arc::new(UpperCaseTables));
    assert_eq!(
        g.export_select(&select_by_name()).unwrap(),
        "select c.id from CITIZEN AS c where c.name = ?"
    );
}

#[derive(Debug)]
struct Minimal;

impl SqlDialect for Minimal {
    fn name(&self) -> &'static str {
        "minimal"
    }
}

#[test]
fn test_dialect_hooks_default_to_ansi() {
    let minimal = Minimal;
    let ansi = Dialect::Ansi;
    assert_eq!(minimal.format_bool(true), ansi.format_bool(true));
    assert_eq!(minimal.empty_conjunction(), "1=1");
    assert_eq!(minimal.empty_disjunction(), "1=2");
    assert_eq!(minimal.sequence_next_value("s"), ansi.sequence_next_value("s"));
    assert!(minimal.supports_sequences());
    assert!(minimal.aliases_dml_target());
}

#[test]
fn test_generator_from_settings() {
    let settings = GeneratorSettings::from_toml(
        r#"
dialect = "mysql"
quote_identifiers = true
default_precision = 12
default_scale = 3
"#,
    )
    .unwrap();

    let g = SqlStatementGenerator::from_settings(&settings).unwrap();
    assert_eq!(g.dialect(), Dialect::MySql);
    assert_eq!(g.default_precision(), 12);
    assert_eq!(g.default_scale(), 3);
    assert_eq!(
        g.export_drop_table(&SqlDropTable::new("citizen")).unwrap(),
        "drop table `citizen`"
    );

    let defaults = SqlStatementGenerator::from_settings(&GeneratorSettings::default()).unwrap();
    assert_eq!(defaults.dialect(), Dialect::Ansi);
    assert_eq!(defaults.default_precision(), 19);
    assert_eq!(defaults.default_scale(), 2);
}
