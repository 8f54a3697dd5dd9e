//!
//! Pointcut Parsing Integration Tests
//!
//! Drives the public API from text to AST: every shape, the wildcard
//! forms, the canonical rendering and the error surface.
//!

use pointcut::ast::{
    IdentifierName, MatchType, ParameterList, ParameterModifier, PointcutKind, QualifiedName,
    Scope, TypeName, Visibility,
};
use pointcut::lexer::TokenKind;
use pointcut::parser::ParseError;
use pointcut::{Error, Pointcut, parse_pointcut};

fn parse(text: &str) -> Pointcut {
    parse_pointcut(text).unwrap_or_else(|e| panic!("Failed to parse {:?}: {}", text, e))
}

fn rendered(text: &str) -> String {
    parse(text).to_string()
}

#[test]
fn test_method_scenario() {
    let pointcut = parse("public string Namespace.Class.Method()");
    let method = pointcut.as_method().expect("method shape");

    assert_eq!(method.visibility, Visibility::Public);
    assert_eq!(method.scope, Scope::Any);
    assert_eq!(method.return_type.to_string(), "string");
    assert_eq!(method.declared_type.to_string(), "Namespace.Class");
    assert_eq!(method.method_name.to_string(), "Method");
    assert_eq!(method.parameters, ParameterList::EMPTY);
}

#[test]
fn test_property_scenario() {
    let pointcut = parse("- Namespace.SubNamespace.Class.Property.property");
    let property = pointcut.as_property().expect("property shape");

    assert_eq!(property.visibility, Visibility::Private);
    assert_eq!(property.declared_type.to_string(), "Namespace.SubNamespace.Class");
    assert_eq!(property.name.to_string(), "Property");
    assert!(property.is_get && property.is_set);
}

#[test]
fn test_constructor_scenario() {
    let pointcut = parse("public *.new(ref int, out int)");
    let ctor = pointcut.as_constructor().expect("constructor shape");

    assert_eq!(ctor.visibility, Visibility::Public);
    assert!(ctor.declared_type.is_any());
    let modifiers: Vec<_> = ctor.parameters.iter().map(|p| p.modifier).collect();
    assert_eq!(modifiers, vec![ParameterModifier::Ref, ParameterModifier::Out]);
    for parameter in ctor.parameters.iter() {
        assert_eq!(parameter.type_name.to_string(), "int");
    }
}

#[test]
fn test_wildcard_scenario() {
    let pointcut = parse("*.*()");
    let method = pointcut.as_method().expect("method shape");

    assert_eq!(method.visibility, Visibility::Any);
    assert_eq!(method.scope, Scope::Any);
    assert!(method.return_type.is_none());
    assert!(method.declared_type.is_none());
    assert!(method.method_name.is_any());
    assert_eq!(method.parameters, ParameterList::EMPTY);
}

#[test]
fn test_empty_text_is_rejected() {
    assert!(matches!(parse_pointcut(""), Err(Error::Source(_))));
}

#[test]
fn test_shapes_and_kinds() {
    let cases = [
        ("Namespace.Class.Field", PointcutKind::Member),
        ("Namespace.Class.new", PointcutKind::Constructor),
        ("Namespace.Class.ctor(int)", PointcutKind::Constructor),
        ("Namespace.Class.Method(..)", PointcutKind::Method),
        ("Namespace.Class.Name.get", PointcutKind::GetProperty),
        ("Namespace.Class.Name.set", PointcutKind::SetProperty),
        ("Namespace.Class.Name.property", PointcutKind::Property),
        ("Namespace.Class.Name.prop", PointcutKind::Property),
    ];

    for (text, kind) in cases {
        assert_eq!(parse(text).kind(), kind, "kind of {:?}", text);
    }
}

#[test]
fn test_wildcard_placement() {
    let cases = [
        ("Class.Name()", MatchType::Strict, "Name"),
        ("Class.*Name()", MatchType::EndsWith, "*Name"),
        ("Class.Name*()", MatchType::StartsWith, "Name*"),
        ("Class.*Name*()", MatchType::Contains, "*Name*"),
        ("Class.*()", MatchType::Any, "*"),
    ];

    for (text, match_type, notation) in cases {
        let pointcut = parse(text);
        let name = &pointcut.as_method().expect("method shape").method_name;
        assert_eq!(name.match_type(), match_type, "match type of {:?}", text);
        assert_eq!(name.to_string(), notation);
    }
}

#[test]
fn test_type_and_name_round_trip() {
    let pointcut = parse("static System.Collections.*List* My*.Service*.*Async(..)");
    let method = pointcut.as_method().expect("method shape");

    assert_eq!(method.return_type.to_string(), "System.Collections.*List*");
    assert_eq!(method.declared_type.to_string(), "My*.Service*");
    assert_eq!(method.method_name.to_string(), "*Async");
}

#[test]
fn test_sentinels_compare_by_tag() {
    let any = parse("*.*(..)");
    let empty = parse("*.*()");

    let any_params = &any.as_method().expect("method shape").parameters;
    let empty_params = &empty.as_method().expect("method shape").parameters;
    assert_eq!(any_params, &ParameterList::ANY);
    assert_eq!(empty_params, &ParameterList::EMPTY);
    assert_eq!(any_params.len(), empty_params.len());
    assert_ne!(any_params, empty_params);

    assert_ne!(QualifiedName::ANY, QualifiedName::NONE);
    assert_eq!(
        TypeName::from_segments(&[IdentifierName::ANY]),
        TypeName::NONE
    );
}

#[test]
fn test_canonical_rendering() {
    insta::assert_snapshot!(rendered("*.*()"), @"* *.*()");
    insta::assert_snapshot!(rendered("*Method()"), @"public *.*Method()");
    insta::assert_snapshot!(
        rendered("#internal static string Namespace.Class.Method(out int,ref *)"),
        @"protected internal static string Namespace.Class.Method(out int, ref *)"
    );
    insta::assert_snapshot!(rendered("+ *.new"), @"public *.*.new(..)");
    insta::assert_snapshot!(rendered("Namespace.Class.ctor()"), @"public Namespace.Class.new()");
    insta::assert_snapshot!(rendered("- int Class.Count.get"), @"private int Class.Count.get");
    insta::assert_snapshot!(rendered("Class.Name.prop"), @"public Class.Name.property");
    insta::assert_snapshot!(rendered("instance Class.Field*"), @"public instance Class.Field*");
}

#[test]
fn test_rendering_reparses_to_equal_ast() {
    let corpus = [
        "public string Namespace.Class.Method()",
        "- Namespace.SubNamespace.Class.Property.property",
        "public *.new(ref int, out int)",
        "Namespace.Class.ctor",
        "*.*()",
        "* * *.*(..)",
        "Get*()",
        "protected *Service.Handle*(System.String, *)",
        "internal static int Counter.Value.set",
        "Namespace.Class.Field",
        "static int *.*Class*.Count*",
    ];

    for text in corpus {
        let first = parse(text);
        let second = parse(&first.to_string());
        assert_eq!(first, second, "{:?} rendered as {:?}", text, first.to_string());
    }
}

#[test]
fn test_parameters_json() {
    let pointcut = parse("Class.Method(out int)");
    let method = pointcut.as_method().expect("method shape");

    insta::assert_json_snapshot!(method.parameters, @r#"
    {
      "parameters": [
        {
          "modifier": "Out",
          "type_name": {
            "namespace": "none",
            "type_name": {
              "name": "int",
              "match_type": "Strict"
            }
          }
        }
      ]
    }
    "#);
}

#[test]
fn test_pointcut_json_tag() {
    let json = serde_json::to_value(parse("Class.Name.get")).expect("serializable");
    assert_eq!(json["shape"], "property");
    assert_eq!(json["visibility"], "Public");
    assert_eq!(json["is_get"], true);
    assert_eq!(json["is_set"], false);
}

#[test]
fn test_lex_errors() {
    match parse_pointcut("Namespace.Class.Method(int[])") {
        Err(Error::Lex(e)) => assert_eq!(e.span().start, 26),
        other => panic!("Expected lex error, got {:?}", other),
    }
    assert!(matches!(parse_pointcut("Class.9Lives()"), Err(Error::Lex(_))));
}

#[test]
fn test_parameter_list_errors() {
    let cases = [
        ("Class.Method(int", TokenKind::RightParen),
        ("Class.Method(int int)", TokenKind::RightParen),
        ("Class.Method(.)", TokenKind::Dot),
        ("Class.Method(..", TokenKind::RightParen),
        ("Class.Method(int,)", TokenKind::Identifier),
        ("Class.Method(ref)", TokenKind::Identifier),
    ];

    for (text, expected) in cases {
        match parse_pointcut(text) {
            Err(Error::Parse(ParseError::Expected { expected: kind, .. })) => {
                assert_eq!(kind, expected, "expected kind for {:?}", text)
            }
            other => panic!("Expected parse error for {:?}, got {:?}", text, other),
        }
    }
}

#[test]
fn test_lenient_prefix() {
    let pointcut = parse("!& Class.Method()");
    assert_eq!(pointcut.visibility(), Visibility::Public);
    assert_eq!(pointcut.kind(), PointcutKind::Member);
}
