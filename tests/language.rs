use pretty_assertions::assert_eq;

use gutenshelf::types::language::Language;

#[test]
fn resolves_every_recognized_input() {
    let table = [
        ("english", "en"),
        ("ingles", "en"),
        ("inglés", "en"),
        ("en", "en"),
        ("in", "en"),
        ("español", "es"),
        ("es", "es"),
        ("frances", "fr"),
        ("francés", "fr"),
        ("fr", "fr"),
        ("portugues", "pt"),
        ("portugués", "pt"),
        ("pt", "pt"),
        ("finlandés", "fi"),
        ("finlandes", "fi"),
        ("fi", "fi"),
    ];
    for (input, code) in table {
        let language = Language::from_input(input);
        assert_eq!(language.map(|x| x.code()), Some(code), "input `{input}`");
    }
}

#[test]
fn ignores_case_and_accents() {
    assert_eq!(Language::from_input("Español"), Some(Language::Spanish));
    assert_eq!(Language::from_input("ESPANOL"), Some(Language::Spanish));
    assert_eq!(Language::from_input("FRANCÉS"), Some(Language::French));
    assert_eq!(Language::from_input("  Finlandés "), Some(Language::Finnish));
}

#[test]
fn rejects_unknown_languages() {
    assert_eq!(Language::from_input("klingon"), None);
    assert_eq!(Language::from_input(""), None);
    assert_eq!(Language::from_input("e"), None);
    assert!("klingon".parse::<Language>().is_err());
}

#[test]
fn parses_through_from_str() {
    assert_eq!("pt".parse::<Language>(), Ok(Language::Portuguese));
}
