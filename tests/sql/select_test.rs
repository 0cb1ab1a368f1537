use insta::assert_snapshot;
use sqlmodel::prelude::*;
use sqlmodel::sql::validate::validate_sql;

fn citizen() -> FromTable {
    FromTable::new("citizen").with_alias("c")
}

fn address() -> FromTable {
    FromTable::new("address").with_alias("a")
}

fn export(dialect: Dialect, select: &SqlSelect) -> String {
    SqlStatementGenerator::new(dialect)
        .export_select(select)
        .unwrap()
}

/// `select c.name from citizen AS c where <condition>`
fn name_where(condition: Condition) -> SqlSelect {
    let c = citizen();
    SqlSelect::builder()
        .from(c.clone())
        .value(c.column("name"))
        .condition(condition)
        .build()
        .unwrap()
}

/// `select <value> from citizen AS c`
fn project(value: Value) -> SqlSelect {
    SqlSelect::builder()
        .from(citizen())
        .value(value)
        .build()
        .unwrap()
}

// ============================================================================
// Basic shape
// ============================================================================

#[test]
fn test_select_with_condition() {
    let c = citizen();
    let select = name_where(c.column("last_name").eq("Smith"));
    let sql = export(Dialect::Ansi, &select);
    assert_eq!(sql, "select c.name from citizen AS c where c.last_name = 'Smith'");
    validate_sql(&sql, Dialect::Ansi).unwrap();
}

#[test]
fn test_select_oracle_table_alias() {
    let c = citizen();
    let select = name_where(c.column("last_name").eq("Smith"));
    assert_eq!(
        export(Dialect::Oracle, &select),
        "select c.name from citizen c where c.last_name = 'Smith'"
    );
}

#[test]
fn test_select_distinct() {
    let c = citizen();
    let distinct = SqlSelect::builder()
        .from(c.clone())
        .value(c.column("name"))
        .distinct()
        .build()
        .unwrap();
    let plain = project(c.column("name").into());

    for dialect in Dialect::ALL {
        assert!(export(dialect, &distinct).starts_with("select distinct "));
        assert!(!export(dialect, &plain).contains("distinct"));
    }
}

#[test]
fn test_column_and_value_aliases() {
    let c = citizen();
    let select = SqlSelect::builder()
        .from(c.clone())
        .value(c.column("name").with_alias("n"))
        .value(c.column("age").times(2).alias("double_age"))
        .build()
        .unwrap();
    assert_eq!(
        export(Dialect::Ansi, &select),
        "select c.name AS n, c.age * 2 AS double_age from citizen AS c"
    );
}

#[test]
fn test_multiple_tables() {
    let c = citizen();
    let a = address();
    let select = SqlSelect::builder()
        .from(c.clone())
        .from(a.clone())
        .values(vec![c.column("name"), a.column("street")])
        .condition(c.column("address_id").eq(a.column("id")))
        .build()
        .unwrap();
    let sql = export(Dialect::Postgres, &select);
    assert_eq!(
        sql,
        "select c.name, a.street from citizen AS c, address AS a where c.address_id = a.id"
    );
    validate_sql(&sql, Dialect::Postgres).unwrap();
}

// ============================================================================
// Joins
// ============================================================================

#[test]
fn test_inner_join() {
    let c = citizen();
    let a = address();
    let join = FromJoin::on_columns(
        JoinType::Inner,
        a.clone(),
        vec![c.column("address_id")],
        vec![a.column("id")],
    )
    .unwrap();
    let select = SqlSelect::builder()
        .from(c.clone())
        .join(join)
        .values(vec![c.column("name"), a.column("street")])
        .build()
        .unwrap();
    let sql = export(Dialect::Ansi, &select);
    assert_eq!(
        sql,
        "select c.name, a.street from citizen AS c inner join address AS a on c.address_id = a.id"
    );
    validate_sql(&sql, Dialect::Ansi).unwrap();
}

#[test]
fn test_outer_joins_on_composite_keys() {
    let c = citizen();
    let a = address();
    let join = FromJoin::on_columns(
        JoinType::Left,
        a.clone(),
        vec![c.column("address_id"), c.column("address_version")],
        vec![a.column("id"), a.column("version")],
    )
    .unwrap();
    let select = SqlSelect::builder()
        .from(c.clone())
        .join(join)
        .value(c.column("name"))
        .build()
        .unwrap();
    let sql = export(Dialect::MySql, &select);
    assert_eq!(
        sql,
        "select c.name from citizen AS c left outer join address AS a \
         on c.address_id = a.id and c.address_version = a.version"
    );
    validate_sql(&sql, Dialect::MySql).unwrap();

    let right = FromJoin::new(JoinType::Right, a.clone(), c.column("address_id").eq(a.column("id")));
    let select = SqlSelect::builder()
        .from(c.clone())
        .join(right)
        .value(c.column("name"))
        .build()
        .unwrap();
    assert!(export(Dialect::Ansi, &select).contains(" right outer join address AS a on "));
}

#[test]
fn test_join_column_mismatch() {
    let c = citizen();
    let a = address();
    let err = FromJoin::on_columns(
        JoinType::Inner,
        a.clone(),
        vec![c.column("address_id"), c.column("x")],
        vec![a.column("id")],
    )
    .unwrap_err();
    assert_eq!(
        err,
        SqlError::JoinColumnCountMismatch {
            expected: 2,
            actual: 1
        }
    );
}

// ============================================================================
// Clauses
// ============================================================================

#[test]
fn test_group_by_having_order_by() {
    let c = citizen();
    let select = SqlSelect::builder()
        .from(c.clone())
        .value(c.column("city"))
        .value(count_star().alias("total"))
        .group_by(GroupBy::new(vec![c.column("city").into()]).with_having(count_star().gt(5)))
        .order_by(vec![OrderBy::asc(c.column("city"))])
        .build()
        .unwrap();
    let sql = export(Dialect::Ansi, &select);
    assert_snapshot!(sql, @"select c.city, COUNT(*) AS total from citizen AS c group by c.city having COUNT(*) > 5 order by c.city ASC");
    validate_sql(&sql, Dialect::Ansi).unwrap();
}

#[test]
fn test_order_by_without_direction() {
    let c = citizen();
    let select = SqlSelect::builder()
        .from(c.clone())
        .value(c.column("name"))
        .order_by(vec![OrderBy::new(c.column("name")), OrderBy::desc(c.column("age"))])
        .build()
        .unwrap();
    assert_eq!(
        export(Dialect::H2, &select),
        "select c.name from citizen AS c order by c.name, c.age DESC"
    );
}

#[test]
fn test_pagination_per_dialect() {
    let c = citizen();
    let select = SqlSelect::builder()
        .from(c.clone())
        .value(c.column("name"))
        .order_by(vec![OrderBy::desc(c.column("name"))])
        .limit(10)
        .offset(20)
        .build()
        .unwrap();

    let base = "select c.name from citizen AS c order by c.name DESC";
    let ansi = export(Dialect::Ansi, &select);
    assert_eq!(ansi, format!("{} offset 20 rows fetch next 10 rows only", base));
    validate_sql(&ansi, Dialect::Ansi).unwrap();

    let pg = export(Dialect::Postgres, &select);
    assert_eq!(pg, format!("{} limit 10 offset 20", base));
    validate_sql(&pg, Dialect::Postgres).unwrap();

    assert_eq!(export(Dialect::MariaDb, &select), format!("{} limit 10 offset 20", base));
}

#[test]
fn test_limit_only() {
    let c = citizen();
    let select = SqlSelect::builder()
        .from(c.clone())
        .value(c.column("name"))
        .limit(5)
        .build()
        .unwrap();
    assert_eq!(
        export(Dialect::Postgres, &select),
        "select c.name from citizen AS c limit 5"
    );
    assert_eq!(
        export(Dialect::Oracle, &select),
        "select c.name from citizen c fetch next 5 rows only"
    );
}

#[test]
fn test_pagination_beyond_i64() {
    let c = citizen();
    let select = SqlSelect::builder()
        .from(c.clone())
        .value(c.column("name"))
        .limit(u64::MAX)
        .offset(1 << 63)
        .build()
        .unwrap();

    assert_eq!(
        export(Dialect::Ansi, &select),
        "select c.name from citizen AS c offset 9223372036854775808 rows \
         fetch next 18446744073709551615 rows only"
    );
    assert_eq!(
        export(Dialect::Postgres, &select),
        "select c.name from citizen AS c limit 18446744073709551615 offset 9223372036854775808"
    );
}

#[test]
fn test_locking_clauses() {
    let c = citizen();
    let lock = |mode: ForUpdate| {
        SqlSelect::builder()
            .from(c.clone())
            .value(c.column("name"))
            .for_update(mode)
            .build()
            .unwrap()
    };
    let write = lock(ForUpdate::PessimisticWrite);
    let read = lock(ForUpdate::PessimisticRead);

    assert_eq!(
        export(Dialect::Ansi, &write),
        "select c.name from citizen AS c FOR UPDATE"
    );
    assert_eq!(
        export(Dialect::Derby, &read),
        "select c.name from citizen AS c FOR UPDATE WITH RS"
    );
    assert_eq!(
        export(Dialect::Postgres, &read),
        "select c.name from citizen AS c FOR SHARE"
    );
}

// ============================================================================
// Subqueries
// ============================================================================

#[test]
fn test_subquery_source() {
    let c = citizen();
    let inner = SqlSelect::builder()
        .from(c.clone())
        .value(c.column("id"))
        .condition(c.column("active").is_true())
        .build()
        .unwrap();
    let sub = SubQuery::new(inner, "s");
    let id = sub.column("id");
    let select = SqlSelect::builder().from(sub).value(id).build().unwrap();

    assert_eq!(
        export(Dialect::Ansi, &select),
        "select s.id from (select c.id from citizen AS c where c.active = TRUE) AS s"
    );
    assert_eq!(
        export(Dialect::Oracle, &select),
        "select s.id from (select c.id from citizen c where c.active = 1) s"
    );
}

#[test]
fn test_in_subquery_and_exists() {
    let c = citizen();
    let a = address();
    let owners = SqlSelect::builder()
        .from(a.clone())
        .value(a.column("citizen_id"))
        .build()
        .unwrap();
    let sql = export(Dialect::Ansi, &name_where(c.column("id").in_subquery(owners)));
    assert_eq!(
        sql,
        "select c.name from citizen AS c where c.id in (select a.citizen_id from address AS a)"
    );
    validate_sql(&sql, Dialect::Ansi).unwrap();

    let correlated = SqlSelect::builder()
        .from(a.clone())
        .value(a.column("id"))
        .condition(a.column("citizen_id").eq(c.column("id")))
        .build()
        .unwrap();
    let sql = export(Dialect::Ansi, &name_where(not_exists(correlated)));
    assert!(
        sql.ends_with("where not exists (select a.id from address AS a where a.citizen_id = c.id)"),
        "{}",
        sql
    );
}

#[test]
fn test_scalar_subquery_value() {
    let c = citizen();
    let a = address();
    let street_count = SqlSelect::builder()
        .from(a.clone())
        .value(count_star())
        .condition(a.column("citizen_id").eq(c.column("id")))
        .build()
        .unwrap();
    let select = SqlSelect::builder()
        .from(c.clone())
        .value(Value::from(street_count).alias("streets"))
        .build()
        .unwrap();
    assert_eq!(
        export(Dialect::Ansi, &select),
        "select (select COUNT(*) from address AS a where a.citizen_id = c.id) AS streets from citizen AS c"
    );
}

// ============================================================================
// Conditions
// ============================================================================

#[test]
fn test_not_in_list() {
    let c = citizen();
    let sql = export(
        Dialect::Ansi,
        &name_where(c.column("id").not_in_list(vec![lit_int(1), lit_int(2), lit_int(3)])),
    );
    assert!(sql.ends_with("where c.id not in (1, 2, 3)"), "{}", sql);
    validate_sql(&sql, Dialect::Ansi).unwrap();
}

#[test]
fn test_empty_in_lists_and_logic_nodes() {
    let c = citizen();
    let in_empty = export(Dialect::Ansi, &name_where(c.column("id").in_list(vec![])));
    assert!(in_empty.ends_with("where 1=2"));

    let not_in_empty = export(Dialect::Ansi, &name_where(c.column("id").not_in_list(vec![])));
    assert!(not_in_empty.ends_with("where 1=1"));

    assert!(export(Dialect::Ansi, &name_where(and(vec![]))).ends_with("where 1=1"));
    assert!(export(Dialect::Ansi, &name_where(or(vec![]))).ends_with("where 1=2"));
}

#[test]
fn test_nesting_follows_builder_flag() {
    let c = citizen();
    let alternatives = or(vec![c.column("b").eq(2), c.column("b").eq(3)]);

    let nested = and(vec![c.column("a").eq(1), alternatives.clone().nested()]);
    assert!(export(Dialect::Ansi, &name_where(nested))
        .ends_with("where c.a = 1 and (c.b = 2 or c.b = 3)"));

    let flat = and(vec![c.column("a").eq(1), alternatives]);
    assert!(export(Dialect::Ansi, &name_where(flat)).ends_with("where c.a = 1 and c.b = 2 or c.b = 3"));
}

#[test]
fn test_comparison_operators() {
    let c = citizen();
    let condition = and(vec![
        c.column("a").ne(1),
        c.column("b").gte(2),
        c.column("c").lt(3),
        c.column("d").lte(4),
        c.column("e").is_not_null(),
    ]);
    assert!(export(Dialect::Ansi, &name_where(condition))
        .ends_with("where c.a <> 1 and c.b >= 2 and c.c < 3 and c.d <= 4 and c.e is not null"));
}

#[test]
fn test_between_and_like() {
    let c = citizen();
    let sql = export(
        Dialect::Ansi,
        &name_where(and(vec![
            c.column("age").between(18, 65),
            c.column("score").not_between(1, 2),
            c.column("name").not_like("A%"),
        ])),
    );
    assert!(
        sql.ends_with("where c.age between 18 and 65 and c.score not between 1 and 2 and c.name not like 'A%'"),
        "{}",
        sql
    );
    validate_sql(&sql, Dialect::Ansi).unwrap();
}

#[test]
fn test_like_escape() {
    let c = citizen();
    let custom = name_where(c.column("name").like_escape("A!%%", '!'));
    assert!(export(Dialect::Ansi, &custom).ends_with("where c.name like 'A!%%' escape '!'"));
    assert!(export(Dialect::MySql, &custom).ends_with("where c.name like 'A!%%' escape '!'"));

    let backslash = name_where(c.column("name").like_escape("x%", '\\'));
    assert!(export(Dialect::Ansi, &backslash).ends_with("where c.name like 'x%' escape '\\'"));
    assert!(export(Dialect::MySql, &backslash).ends_with("where c.name like 'x%'"));
    assert!(export(Dialect::MariaDb, &backslash).ends_with("where c.name like 'x%'"));
}

#[test]
fn test_boolean_literals_follow_dialect() {
    let c = citizen();
    let select = name_where(c.column("active").eq(true));
    assert!(export(Dialect::Postgres, &select).ends_with("c.active = TRUE"));
    assert!(export(Dialect::MySql, &select).ends_with("c.active = 1"));
    assert!(export(Dialect::Oracle, &select).ends_with("c.active = 1"));
}

#[test]
fn test_literals() {
    let c = citizen();
    let select = name_where(and(vec![
        c.column("nick").eq(lit_str("O'Neil")),
        c.column("ratio").eq(lit_float(0.5)),
        c.column("deleted").is_null(),
        c.column("x").eq(lit_null()),
    ]));
    assert!(export(Dialect::Ansi, &select)
        .ends_with("c.nick = 'O''Neil' and c.ratio = 0.5 and c.deleted is null and c.x = NULL"));
}

// ============================================================================
// Functions and expressions
// ============================================================================

#[test]
fn test_concat_operator_or_function() {
    let t = FromTable::new("t");
    let select = SqlSelect::builder()
        .from(t.clone())
        .value(concat(vec![t.column("a").into(), t.column("b").into()]))
        .build()
        .unwrap();
    assert_eq!(export(Dialect::Ansi, &select), "select a||b from t");
    assert_eq!(export(Dialect::MySql, &select), "select CONCAT(a,b) from t");
    assert_eq!(export(Dialect::MariaDb, &select), "select CONCAT(a,b) from t");
}

#[test]
fn test_function_templates() {
    let c = citizen();
    let cases: Vec<(Value, &str)> = vec![
        (abs(c.column("a")), "ABS(c.a)"),
        (avg(c.column("a")), "AVG(c.a)"),
        (sum(c.column("a")), "SUM(c.a)"),
        (min(c.column("a")), "MIN(c.a)"),
        (max(c.column("a")), "MAX(c.a)"),
        (sqrt(c.column("a")), "SQRT(c.a)"),
        (length(c.column("name")), "LENGTH(c.name)"),
        (lower(c.column("name")), "LOWER(c.name)"),
        (upper(c.column("name")), "UPPER(c.name)"),
        (count(c.column("id")), "COUNT(c.id)"),
        (count_distinct(c.column("city")), "COUNT(DISTINCT c.city)"),
        (modulo(c.column("a"), 2), "MOD(c.a, 2)"),
        (nullif(c.column("a"), 0), "NULLIF(c.a, 0)"),
        (
            coalesce(vec![c.column("nick").into(), lit_str("n/a")]),
            "COALESCE(c.nick, 'n/a')",
        ),
        (
            trim(c.column("name"), Some(TrimType::Both), Some('x')),
            "TRIM(BOTH 'x' FROM c.name)",
        ),
        (
            trim(c.column("name"), Some(TrimType::Leading), None),
            "TRIM(LEADING FROM c.name)",
        ),
        (trim(c.column("name"), None, Some(' ')), "TRIM(' ' FROM c.name)"),
        (trim(c.column("name"), None, None), "TRIM(c.name)"),
        (
            substring(c.column("name"), 1, Some(lit_int(3))),
            "SUBSTRING(c.name, 1, 3)",
        ),
        (locate(lit_str("a"), c.column("name"), None), "LOCATE('a', c.name)"),
        (
            locate(lit_str("a"), c.column("name"), Some(lit_int(2))),
            "LOCATE('a', c.name, 2)",
        ),
        (negation(c.column("a")), "-c.a"),
        (negation(c.column("a").plus(1)), "-(c.a + 1)"),
        (negation(negation(c.column("a"))), "-(-c.a)"),
        (negation(lit_int(-5)), "-(-5)"),
        (negation(lit_float(-0.5)), "-(-0.5)"),
        (current_date(), "CURRENT_DATE"),
        (current_timestamp(), "CURRENT_TIMESTAMP"),
    ];

    for (value, expected) in cases {
        let sql = export(Dialect::Ansi, &project(value));
        assert_eq!(sql, format!("select {} from citizen AS c", expected));
    }
}

#[test]
fn test_function_dialect_spellings() {
    let c = citizen();
    let name = || c.column("name");

    let sub = project(substring(name(), 2, None));
    assert_eq!(export(Dialect::Oracle, &sub), "select SUBSTR(c.name, 2) from citizen c");
    assert_eq!(export(Dialect::Derby, &sub), "select SUBSTR(c.name, 2) from citizen AS c");

    let loc = project(locate(lit_str("a"), name(), None));
    assert_eq!(export(Dialect::Oracle, &loc), "select INSTR(c.name, 'a') from citizen c");
    assert_eq!(
        export(Dialect::Postgres, &loc),
        "select POSITION('a' IN c.name) from citizen AS c"
    );

    assert_eq!(
        export(Dialect::MySql, &project(current_date())),
        "select CURRENT_DATE() from citizen AS c"
    );
    assert_eq!(
        export(Dialect::Oracle, &project(current_time())),
        "select CURRENT_TIMESTAMP from citizen c"
    );
}

#[test]
fn test_arithmetic_keeps_grouping() {
    let c = citizen();
    let value = c.column("a").plus(c.column("b")).times(2);
    assert_eq!(
        export(Dialect::Ansi, &project(value)),
        "select (c.a + c.b) * 2 from citizen AS c"
    );

    let value = c.column("a").minus(c.column("b").divided_by(4));
    assert_eq!(
        export(Dialect::Ansi, &project(value)),
        "select c.a - (c.b / 4) from citizen AS c"
    );
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_missing_from() {
    let err = SqlSelect::builder()
        .value(lit_int(1))
        .build()
        .unwrap_err();
    assert_eq!(err, SqlError::MissingFrom);
}

#[test]
fn test_no_values() {
    let err = SqlSelect::builder().from(citizen()).build().unwrap_err();
    assert!(matches!(err, SqlError::EmptyStatement { statement: "select", .. }));
}

#[test]
fn test_multiple_top_level_conditions() {
    let c = citizen();
    let err = SqlSelect::builder()
        .from(c.clone())
        .value(c.column("name"))
        .conditions(vec![c.column("a").eq(1), c.column("b").eq(2)])
        .build()
        .unwrap_err();
    assert_eq!(err, SqlError::MultipleConditions { count: 2 });
}

#[test]
fn test_locate_start_unsupported_on_postgres() {
    let c = citizen();
    let select = project(locate(lit_str("a"), c.column("name"), Some(lit_int(2))));
    let err = SqlStatementGenerator::new(Dialect::Postgres)
        .export_select(&select)
        .unwrap_err();
    assert!(matches!(err, SqlError::Unsupported { dialect: "postgres", .. }));
    assert!(err.to_string().contains("LOCATE"));
}

#[test]
fn test_non_finite_literal() {
    let err = SqlStatementGenerator::new(Dialect::Ansi)
        .export_select(&project(lit_float(f64::INFINITY)))
        .unwrap_err();
    assert_eq!(
        err,
        SqlError::NonFiniteLiteral {
            value: "inf".to_string()
        }
    );
}
