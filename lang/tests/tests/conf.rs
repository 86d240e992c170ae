use parlance_dialects::*;
use parlance_tests::{assert_flags, assert_same_except};
use pretty_assertions::assert_eq;

#[test]
fn resolve_with_overrides() {
    let conf: DialectConf = r#"
        base = "Scala212"

        [overrides]
        allow_literal_types = true
        toplevel_separator = ";"
    "#
    .parse()
    .unwrap();
    assert_eq!(conf.base, "Scala212");
    assert!(!conf.overrides.is_empty());
    let dialect = conf.resolve().unwrap();
    assert_flags!(dialect, { allow_literal_types: true, allow_trailing_commas: true });
    assert_eq!(dialect.toplevel_separator, ";");
    assert_same_except!(dialect, SCALA212, [allow_literal_types, toplevel_separator]);
    assert_eq!(dialect.name(), None);
}

#[test]
fn resolve_without_overrides_is_anonymous() {
    let conf = DialectConf::from_toml(r#"base = "Dotty""#).unwrap();
    assert!(conf.overrides.is_empty());
    let dialect = conf.resolve().unwrap();
    assert_eq!(dialect.flags(), DOTTY.flags());
    assert!(dialect != *DOTTY);
    assert!(!dialect.is_standard());
}

#[test]
fn unknown_base() {
    let conf = DialectConf::from_toml(r#"base = "Scala3""#).unwrap();
    match conf.resolve() {
        | Err(DialectError::UnknownDialect(name)) => assert_eq!(name, "Scala3"),
        | other => panic!("expected an unknown dialect, got {:?}", other),
    }
}

#[test]
fn malformed_conf() {
    let unknown_flag = DialectConf::from_toml(
        r#"
        base = "Scala211"
        [overrides]
        allow_everything = true
    "#,
    );
    assert!(matches!(unknown_flag, Err(DialectError::Conf(_))));
    let missing_base = DialectConf::from_toml("[overrides]\nallow_or_types = true\n");
    assert!(matches!(missing_base, Err(DialectError::Conf(_))));
    let wrong_type = DialectConf::from_toml("base = \"Scala211\"\n[overrides]\nallow_or_types = 1\n");
    assert!(matches!(wrong_type, Err(DialectError::Conf(_))));
}
