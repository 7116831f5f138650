use {
    catalog::{Catalog, Error},
    def::{ScanType, Value},
    parser::Parser,
};

fn columns(catalog: &Catalog, table: &str) -> Vec<(String, bool)> {
    catalog
        .table(table)
        .unwrap()
        .columns
        .iter()
        .map(|col| (col.name.clone(), col.is_primary_key))
        .collect()
}

fn owned(expected: &[(&str, bool)]) -> Vec<(String, bool)> {
    expected
        .iter()
        .map(|(name, pk)| (name.to_string(), *pk))
        .collect()
}

#[test]
fn replay_users_migration() {
    let sql = "
        CREATE TABLE users (id INT PRIMARY KEY, name VARCHAR(50));
        ALTER TABLE users ADD COLUMN age INT AFTER id;
        ALTER TABLE users DROP COLUMN name;
        DROP TABLE users;
    ";
    let expected = [
        Some(owned(&[("id", true), ("name", false)])),
        Some(owned(&[("id", true), ("age", false), ("name", false)])),
        Some(owned(&[("id", true), ("age", false)])),
        None,
    ];

    let mut catalog = Catalog::new();
    let stmts = Parser::parse(sql).unwrap();
    assert_eq!(stmts.len(), expected.len());

    for (stmt, expected) in std::iter::zip(stmts, expected) {
        catalog.apply(stmt).unwrap();

        let actual = catalog.table("users").map(|_| columns(&catalog, "users"));
        assert_eq!(actual, expected);
    }

    assert!(catalog.tables().is_empty());
}

#[test]
fn column_details_after_replay() {
    let mut catalog = Catalog::new();
    let applied = catalog
        .apply_sql(
            "
            SET NAMES utf8mb4;
            CREATE TABLE `orders` (
              `id` bigint unsigned NOT NULL AUTO_INCREMENT COMMENT 'order id',
              `amount` decimal(12,2) NOT NULL DEFAULT '0.00',
              `paid` tinyint(1) NOT NULL DEFAULT 0,
              `status` enum('new','paid') DEFAULT 'new',
              `created_at` timestamp NULL DEFAULT CURRENT_TIMESTAMP,
              `placed_on` date DEFAULT NULL,
              PRIMARY KEY (`id`),
              KEY `idx_status` (`status`)
            ) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4 COMMENT='customer orders';
            ",
        )
        .unwrap();
    assert_eq!(applied, 1);

    let table = catalog.table("orders").unwrap();
    assert_eq!(table.comment, "customer orders");
    assert_eq!(table.primary_key(), vec!["id"]);

    let id = table.column("id").unwrap();
    assert_eq!(id.column_type, "bigint unsigned");
    assert_eq!(id.scan_type, ScanType::Int64);
    assert!(id.is_auto_increment && !id.is_nullable);
    assert_eq!(id.comment.as_deref(), Some("order id"));

    let amount = table.column("amount").unwrap();
    assert_eq!(amount.column_type, "decimal(12,2)");
    assert_eq!((amount.precision, amount.scale), (Some(12), Some(2)));
    assert_eq!(amount.default_value.as_deref(), Some("0.00"));

    let paid = table.column("paid").unwrap();
    assert_eq!(paid.column_type, "tinyint(1)");
    assert_eq!(paid.scan_type, ScanType::Int32);
    assert_eq!(paid.default_value.as_deref(), Some("0"));

    let status = table.column("status").unwrap();
    assert_eq!(status.column_type, "enum('new','paid')");
    assert!(status.is_nullable);

    let created_at = table.column("created_at").unwrap();
    assert_eq!(created_at.default_value.as_deref(), Some("CURRENT_TIMESTAMP"));
    assert_eq!(created_at.scan_type, ScanType::Int64);

    let placed_on = table.column("placed_on").unwrap();
    assert_eq!(placed_on.default_value, None);
    assert_eq!(placed_on.scan_type, ScanType::Timestamp);

    let indexes = table
        .indexes
        .iter()
        .map(|index| (index.name.as_str(), index.is_primary_key, index.is_unique))
        .collect::<Vec<_>>();
    assert_eq!(indexes, vec![("", true, false), ("idx_status", false, false)]);

    assert_eq!(
        table.sample_row(),
        vec![
            Value::Int64(1),
            Value::String("0.00".to_string()),
            Value::Int32(0),
            Value::String("new".to_string()),
            Value::Int64(1),
            Value::Timestamp(946_684_800),
        ]
    );
}

#[test]
fn reads_are_stable() {
    let mut catalog = Catalog::new();
    catalog
        .apply_sql("CREATE TABLE a (x INT); CREATE TABLE b (y TEXT);")
        .unwrap();

    let first = catalog.tables().clone();
    let second = catalog.tables().clone();

    assert_eq!(first, second);
    assert_eq!(
        first.keys().map(String::as_str).collect::<Vec<_>>(),
        vec!["a", "b"]
    );
}

#[test]
fn parse_failure_applies_nothing() {
    let mut catalog = Catalog::new();

    let result = catalog.apply_sql("CREATE TABLE a (x INT); CREATE TABLE b (y INT,);");

    assert!(matches!(result, Err(Error::Parse { .. })));
    assert!(catalog.tables().is_empty());
}

#[test]
fn replay_stops_at_first_failure() {
    let mut catalog = Catalog::new();

    let result = catalog.apply_sql(
        "CREATE TABLE a (x INT);
         ALTER TABLE b ADD y INT;
         CREATE TABLE c (z INT);",
    );

    assert_eq!(
        result,
        Err(Error::TableNotFound {
            name: "b".to_string()
        })
    );
    assert!(catalog.table("a").is_some());
    assert!(catalog.table("c").is_none());
}
