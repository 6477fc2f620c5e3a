//! Basic usage of marginalia-sql: tokenize and parse SQL with comments.

use marginalia_sql::{parse_one, tokenize, DialectType};

fn main() -> marginalia_sql::Result<()> {
    let sql = "SELECT 4 // the answer, halved";

    println!("Tokens for {:?} (snowflake):", sql);
    for token in tokenize(sql, DialectType::Snowflake)? {
        println!("  {}", token);
    }

    let ast = parse_one(sql, DialectType::Snowflake)?;
    println!("AST: {}", ast);

    let bare = parse_one("SELECT 4", DialectType::Snowflake)?;
    println!("Equivalent to bare SELECT: {}", ast == bare);

    Ok(())
}
