//! End-to-end scenarios through the public API.
//!
//! Each test pins an exact output string; the builders are only reached via
//! the crate root re-exports.

use squbix::{
    BuildQuery, CreateQuery, QueryError, QueryResult, create_query, delete_query,
    normalize_whitespace, read_query, update_query,
};

// ── Literal scenarios ───────────────────────────────────────────────────────

#[test]
fn select_single_field() {
    assert_eq!(
        read_query("t").add_select("f").build_query(),
        Ok("SELECT f FROM t".to_string())
    );
}

#[test]
fn insert_single_row() {
    assert_eq!(
        create_query("t").add_field(["a", "b"]).add_value("(1,2)").build_query(),
        Ok("INSERT INTO t (a, b) VALUES (1,2)".to_string())
    );
}

#[test]
fn update_without_condition() {
    let err = update_query("t").add_set_field("a = 1").build_query().unwrap_err();
    assert_eq!(err, QueryError::MissingUpdateCondition);
    assert!(err.to_string().starts_with("no update condition specified"));
}

#[test]
fn delete_everything() {
    assert_eq!(delete_query("t").build_query(), Ok("DELETE FROM t".to_string()));
}

#[test]
fn select_with_cte_limit_offset() {
    assert_eq!(
        read_query("t")
            .add_select("f")
            .add_cte("c AS (SELECT 1)")
            .add_limit(10)
            .add_offset(5)
            .build_query(),
        Ok("WITH c AS (SELECT 1) SELECT f FROM t LIMIT 10 OFFSET 5".to_string())
    );
}

// ── Realistic usage ─────────────────────────────────────────────────────────

fn upsert_prices(rows: &[(i64, i64)]) -> QueryResult<String> {
    let values: Vec<String> = rows
        .iter()
        .map(|(id, price)| format!("({}, {})", id, price))
        .collect();

    create_query("prices")
        .add_field(["product_id", "price"])
        .add_value(values)
        .add_on_conflict(
            r#"
            ON CONFLICT (product_id)
            DO UPDATE SET price = EXCLUDED.price
            "#,
        )
        .build_query()
}

#[test]
fn generated_value_rows() {
    assert_eq!(
        upsert_prices(&[(1, 100), (2, 250)]).unwrap(),
        "INSERT INTO prices (product_id, price) VALUES (1, 100), (2, 250) \
         ON CONFLICT (product_id) DO UPDATE SET price = EXCLUDED.price"
    );
    assert_eq!(upsert_prices(&[]), Err(QueryError::MissingValue));
}

#[test]
fn report_query_with_multiline_fragments() {
    let sql = read_query("orders o")
        .add_cte(
            "recent AS (
                SELECT id FROM orders
                WHERE created_at > NOW() - INTERVAL '7 days'
            )",
        )
        .add_select([
            "c.name",
            "COUNT(o.id) AS order_count",
        ])
        .add_join([
            "INNER JOIN recent r ON r.id = o.id",
            "INNER JOIN customers c ON c.id = o.customer_id",
        ])
        .add_where(["o.status = 'paid'", "c.country = :country"])
        .add_group_by("c.name")
        .add_order_by("order_count DESC")
        .add_limit(20)
        .build_query()
        .unwrap();

    assert_eq!(
        sql,
        "WITH recent AS ( SELECT id FROM orders WHERE created_at > NOW() - INTERVAL '7 days' ) \
         SELECT c.name, COUNT(o.id) AS order_count FROM orders o \
         INNER JOIN recent r ON r.id = o.id INNER JOIN customers c ON c.id = o.customer_id \
         WHERE o.status = 'paid' AND c.country = :country \
         GROUP BY c.name ORDER BY order_count DESC LIMIT 20"
    );
    assert_eq!(normalize_whitespace(&sql), sql);
}

#[test]
fn failed_build_returns_no_sql() {
    let qb = CreateQuery::default().add_field("a").add_value("(1)");
    let result = qb.build_query();
    assert!(matches!(result, Err(ref e) if e.is_missing_table()));
}

#[test]
fn generic_over_builders() {
    fn render(qb: &impl BuildQuery) -> String {
        match qb.build_query() {
            Ok(sql) => sql,
            Err(err) => format!("{}: {}", qb.kind(), err),
        }
    }

    assert_eq!(render(&delete_query("t").add_where("id = 1")), "DELETE FROM t WHERE id = 1");
    assert_eq!(
        render(&read_query("t")),
        "SELECT: no field selected, add it using add_select method"
    );
}
