#![allow(dead_code)]

use fluentsql::{Dataset, SqlStatement, eq, insert, select, table};

#[derive(Debug, Clone, Dataset)]
#[db(table = "users")]
struct User {
    id: i64,
    #[db(column = "user_name")]
    name: String,
    email: Option<String>,
    #[db(skip)]
    cached_score: f64,
}

#[derive(Dataset)]
struct AuditLogEntry {
    id: i64,
    r#type: String,
}

#[derive(Dataset)]
#[db(table = "auth.sessions")]
struct Session<T> {
    token: String,
    #[db(skip)]
    payload: T,
}

#[test]
fn derive_table_and_columns() {
    assert_eq!(User::TABLE, "users");
    assert_eq!(User::COLUMNS, &["id", "user_name", "email"]);
}

#[test]
fn derive_default_table_is_snake_case() {
    assert_eq!(AuditLogEntry::TABLE, "audit_log_entry");
    assert_eq!(AuditLogEntry::COLUMNS, &["id", "type"]);
}

#[test]
fn derive_generic_struct() {
    assert_eq!(<Session<Vec<u8>> as Dataset>::TABLE, "auth.sessions");
    assert_eq!(<Session<()> as Dataset>::COLUMNS, &["token"]);
}

#[test]
fn select_from_dataset() {
    let sql = select()
        .from_dataset::<User>()
        .filter(eq("id", 1))
        .to_sql()
        .unwrap();
    assert_eq!(sql, "SELECT id, user_name, email FROM users WHERE id = 1;");
}

#[test]
fn dataset_table_ref_can_be_aliased() {
    let u = User::table_ref().alias("u");
    let sql = select()
        .field(u.col("user_name"))
        .from(&u)
        .filter(eq(u.col("id"), 7))
        .to_sql()
        .unwrap();
    assert_eq!(sql, "SELECT u.user_name FROM users AS u WHERE u.id = 7;");
}

#[test]
fn insert_with_dataset_columns() {
    let sql = insert(User::COLUMNS)
        .into_table(table(User::TABLE))
        .values((1, "alice", None::<&str>))
        .to_sql()
        .unwrap();
    assert_eq!(
        sql,
        "INSERT INTO users ( id, user_name, email ) VALUES ( 1, 'alice', NULL );"
    );
}
