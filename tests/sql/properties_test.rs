//! Behaviour that must hold for every statement and dialect.

use std::sync::Arc;
use std::thread;

use sqlmodel::prelude::*;

fn citizen() -> FromTable {
    FromTable::new("citizen").with_alias("c")
}

/// A select touching joins, subqueries, grouping and pagination.
fn busy_select() -> SqlSelect {
    let c = citizen();
    let a = FromTable::new("address").with_alias("a");
    let p = FromTable::new("passport").with_alias("p");

    let passports = SqlSelect::builder()
        .from(p.clone())
        .value(p.column("citizen_id"))
        .condition(p.column("expires").gt(param("today")))
        .build()
        .unwrap();

    SqlSelect::builder()
        .distinct()
        .from(c.clone())
        .join(
            FromJoin::on_columns(
                JoinType::Left,
                a.clone(),
                vec![c.column("id")],
                vec![a.column("citizen_id")],
            )
            .unwrap(),
        )
        .value(c.column("name"))
        .value(count(a.column("id")).alias("addresses"))
        .condition(and(vec![
            c.column("name").like(param("pattern")),
            or(vec![
                c.column("age").between(param("low"), param("high")),
                c.column("id").in_subquery(passports),
            ])
            .nested(),
        ]))
        .group_by(GroupBy::new(vec![c.column("name").into()]).with_having(count(a.column("id")).gt(param("min"))))
        .order_by(vec![OrderBy::asc(c.column("name"))])
        .limit(10)
        .offset(20)
        .build()
        .unwrap()
}

#[test]
fn test_export_is_deterministic() {
    let select = busy_select();
    for dialect in Dialect::ALL {
        let g = SqlStatementGenerator::new(dialect);
        let first = g.export_select(&select).unwrap();
        let second = g.export_select(&select).unwrap();
        let cloned = g.clone().export_select(&select.clone()).unwrap();
        assert_eq!(first, second);
        assert_eq!(first, cloned);
    }
}

#[test]
fn test_placeholders_follow_text_order() {
    let select = busy_select();
    for dialect in Dialect::ALL {
        let exported = SqlStatementGenerator::new(dialect)
            .export_statement(&select.clone().into())
            .unwrap();
        let labels: Vec<&str> = exported
            .parameters
            .iter()
            .map(|p| p.as_deref().unwrap_or("?"))
            .collect();
        assert_eq!(labels, ["pattern", "low", "high", "today", "min"], "{}", dialect);
        assert_eq!(exported.sql.matches('?').count(), exported.parameters.len());
    }
}

#[test]
fn test_distinct_and_nesting_survive_every_dialect() {
    let select = busy_select();
    for dialect in Dialect::ALL {
        let sql = SqlStatementGenerator::new(dialect).export_select(&select).unwrap();
        assert!(sql.starts_with("select distinct c.name, COUNT(a.id) AS addresses from citizen"), "{}", sql);
        assert!(
            sql.contains("where c.name like ? and (c.age between ? and ? or c.id in (select p.citizen_id from passport"),
            "{}",
            sql
        );
        assert!(sql.contains("group by c.name having COUNT(a.id) > ? order by c.name ASC"), "{}", sql);
    }
}

#[test]
fn test_statement_model_is_not_modified_by_export() {
    let select = busy_select();
    let before = select.clone();
    for dialect in Dialect::ALL {
        SqlStatementGenerator::new(dialect).export_select(&select).unwrap();
    }
    assert_eq!(select, before);
}

#[test]
fn test_concurrent_export_matches_sequential() {
    let select = busy_select();
    let generators: Vec<SqlStatementGenerator> =
        Dialect::ALL.iter().map(|d| SqlStatementGenerator::new(*d)).collect();
    let expected: Vec<String> = generators
        .iter()
        .map(|g| g.export_select(&select).unwrap())
        .collect();

    let shared = Arc::new(generators);
    thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let generators = Arc::clone(&shared);
                let select = &select;
                s.spawn(move || {
                    generators
                        .iter()
                        .map(|g| g.export_select(select).unwrap())
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
