//! Comment transparency tests.
//!
//! Comments of every supported form must vanish between tokenization and
//! parsing: the AST for a query with comments is identical to the AST for
//! the same query without them, in every dialect.

use marginalia_sql::{
    parse_one, strip_comments, tokenize, DialectType, Expression, Parser, TokenType, Tokenizer,
    TokenizerConfig,
};

const ALL_DIALECTS: [DialectType; 3] = [
    DialectType::Ansi,
    DialectType::Postgres,
    DialectType::Snowflake,
];

#[test]
fn snowflake_comment_styles_share_one_ast() {
    let base = parse_one("SELECT 1", DialectType::Snowflake).unwrap();
    for sql in [
        "SELECT 1 -- traditional SQL comment",
        "SELECT 1 /* block comment */",
        "SELECT 1 // C++ style comment",
        "SELECT 1 {# template comment #}",
        "-- leading comment\nSELECT 1",
        "SELECT /* mid */ 1",
    ] {
        let parsed = parse_one(sql, DialectType::Snowflake).unwrap();
        assert_eq!(parsed, base, "comment changed the AST for {:?}", sql);
    }
}

#[test]
fn comments_are_transparent_at_every_whitespace_position() {
    // Insert each comment form at each whitespace gap of the base query.
    let base_sql = "SELECT a, b, 3";
    for dialect in ALL_DIALECTS {
        let base = parse_one(base_sql, dialect).unwrap();
        for comment in ["/* c */", "{# c #}"] {
            for gap in 0..=3 {
                let mut parts: Vec<&str> = base_sql.split(' ').collect();
                parts.insert(gap + 1, comment);
                let sql = parts.join(" ");
                let parsed = parse_one(&sql, dialect).unwrap();
                assert_eq!(parsed, base, "dialect {:?}, query {:?}", dialect, sql);
            }
        }
    }
}

#[test]
fn double_slash_is_a_comment_in_snowflake() {
    let tokens = tokenize("SELECT 4 // 2", DialectType::Snowflake).unwrap();

    let comments: Vec<_> = tokens
        .iter()
        .filter(|t| t.token_type == TokenType::Comment)
        .collect();
    assert_eq!(comments.len(), 1);
    assert!(comments[0].text.starts_with("//"));

    let slashes = tokens
        .iter()
        .filter(|t| t.token_type == TokenType::Slash)
        .count();
    assert_eq!(slashes, 0, "// must not produce division tokens");

    assert_eq!(
        parse_one("SELECT 4 // 2", DialectType::Snowflake).unwrap(),
        parse_one("SELECT 4", DialectType::Snowflake).unwrap()
    );
}

#[test]
fn double_slash_is_not_a_comment_in_ansi() {
    // Without a // comment rule the slashes tokenize separately, and the
    // statement must fail to parse rather than silently succeed.
    let tokens = tokenize("SELECT 1 // 2", DialectType::Ansi).unwrap();
    let slashes = tokens
        .iter()
        .filter(|t| t.token_type == TokenType::Slash)
        .count();
    assert_eq!(slashes, 2);

    let result = parse_one("SELECT 1 // 2", DialectType::Ansi);
    assert!(result.is_err(), "ANSI // must not parse as a comment");
}

#[test]
fn template_comment_is_one_token_in_every_dialect() {
    for dialect in ALL_DIALECTS {
        let tokens = tokenize("SELECT 1 {# x #}", dialect).unwrap();
        let comments: Vec<_> = tokens
            .iter()
            .filter(|t| t.token_type == TokenType::Comment)
            .collect();
        assert_eq!(comments.len(), 1, "dialect {:?}", dialect);
        assert_eq!(comments[0].text, "{# x #}");

        assert_eq!(
            parse_one("SELECT 1 {# x #}", dialect).unwrap(),
            parse_one("SELECT 1", dialect).unwrap()
        );
    }
}

#[test]
fn template_comment_survives_an_emptied_line_comment_list() {
    // A dialect override may drop every single-line comment style, but the
    // template form is hardwired ahead of the configured rules.
    let mut config = TokenizerConfig::default();
    config.line_comments.clear();
    let tokenizer = Tokenizer::new(config);

    let tokens = tokenizer.tokenize("SELECT 1 {# x #}").unwrap();
    let comments: Vec<_> = tokens
        .iter()
        .filter(|t| t.token_type == TokenType::Comment)
        .collect();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].text, "{# x #}");

    let ast = Parser::new(tokens).parse().unwrap();
    assert_eq!(ast, Expression::select(vec![Expression::number("1")]));
}

#[test]
fn template_comment_swallows_nested_comment_markers() {
    let sql = "SELECT 1 {# template -- comment with // and /* */ #}";
    for dialect in ALL_DIALECTS {
        let tokens = tokenize(sql, dialect).unwrap();
        let comments: Vec<_> = tokens
            .iter()
            .filter(|t| t.token_type == TokenType::Comment)
            .collect();
        assert_eq!(comments.len(), 1, "dialect {:?}", dialect);
        assert_eq!(
            comments[0].text,
            "{# template -- comment with // and /* */ #}"
        );
    }
}

#[test]
fn comment_markers_inside_strings_are_literal_text() {
    let ast = parse_one("SELECT '// not a comment'", DialectType::Snowflake).unwrap();
    assert_eq!(
        ast,
        Expression::select(vec![Expression::string("// not a comment")])
    );

    let ast = parse_one("SELECT '-- nor /* this */'", DialectType::Ansi).unwrap();
    assert_eq!(
        ast,
        Expression::select(vec![Expression::string("-- nor /* this */")])
    );
}

#[test]
fn stripping_is_idempotent() {
    let tokens = tokenize(
        "SELECT 1 /* a */, 2 -- b\n, 3 {# c #}",
        DialectType::Snowflake,
    )
    .unwrap();

    let once = strip_comments(tokens);
    let twice = strip_comments(once.clone());
    assert_eq!(once, twice);
}

#[test]
fn unterminated_comments_are_lenient() {
    let base = parse_one("SELECT 1", DialectType::Snowflake).unwrap();
    for sql in [
        "SELECT 1 /* open",
        "SELECT 1 {# open",
        "SELECT 1 -- open",
        "SELECT 1 // open",
    ] {
        let parsed = parse_one(sql, DialectType::Snowflake).unwrap();
        assert_eq!(parsed, base, "unterminated comment broke {:?}", sql);
    }
}

#[test]
fn concrete_scenarios() {
    assert_eq!(
        parse_one("SELECT 1 -- traditional SQL comment", DialectType::Snowflake).unwrap(),
        Expression::select(vec![Expression::number("1")])
    );
    assert_eq!(
        parse_one("SELECT 1 /* block comment */", DialectType::Ansi).unwrap(),
        Expression::select(vec![Expression::number("1")])
    );
}

#[test]
fn dialect_resolution_by_name() {
    let by_name = marginalia_sql::parse_one_by_name("SELECT 1 // hi", "SNOWFLAKE").unwrap();
    let by_type = parse_one("SELECT 1", DialectType::Snowflake).unwrap();
    assert_eq!(by_name, by_type);
}

#[test]
fn ast_serialization_shape() {
    let ast = parse_one("SELECT 1, x", DialectType::Ansi).unwrap();
    let json = serde_json::to_value(&ast).unwrap();
    assert!(json.get("select").is_some(), "unexpected shape: {}", json);
}
