/*
 * Binding Parser Tests
 *
 * Tokenizing canonical attribute text and classifying values
 */

use component_tag_compiler::template_parser::{
    compile_attribute_echos, tokenize_attributes, Attribute, AttributeKind, AttributeParser, ParsedAttributes,
    RawAttribute,
};
use component_tag_compiler::{BladeEchoCompiler, EchoCompiler, EchoSegment};

fn parse(text: &str) -> ParsedAttributes {
    let echo = BladeEchoCompiler::default();
    AttributeParser::new(&echo).parse(text)
}

fn humanize(parsed: &ParsedAttributes) -> Vec<(String, String, AttributeKind)> {
    parsed
        .attributes
        .iter()
        .map(|attribute| (attribute.name.clone(), attribute.value.clone(), attribute.kind))
        .collect()
}

fn entry(name: &str, value: &str, kind: AttributeKind) -> (String, String, AttributeKind) {
    (name.to_string(), value.to_string(), kind)
}

mod tokenizer {
    use super::*;

    #[test]
    fn should_tokenize_all_value_forms() {
        assert_eq!(
            tokenize_attributes(" a=\"1\" b='2' c=3 d"),
            vec![
                RawAttribute { name: "a", value: Some("\"1\"") },
                RawAttribute { name: "b", value: Some("'2'") },
                RawAttribute { name: "c", value: Some("3") },
                RawAttribute { name: "d", value: None },
            ]
        );
    }

    #[test]
    fn should_keep_spaces_inside_quoted_values() {
        assert_eq!(
            tokenize_attributes(" bind:show=\"$a && $b\""),
            vec![RawAttribute { name: "bind:show", value: Some("\"$a && $b\"") }]
        );
    }

    #[test]
    fn should_accept_event_and_namespaced_names() {
        let names: Vec<_> = tokenize_attributes(" @click.prevent=\"go\" wire:model.live=\"q\"")
            .into_iter()
            .map(|attribute| attribute.name)
            .collect();
        assert_eq!(names, vec!["@click.prevent", "wire:model.live"]);
    }

    #[test]
    fn should_yield_nothing_for_blank_text() {
        assert!(tokenize_attributes("").is_empty());
        assert!(tokenize_attributes("   \n\t").is_empty());
    }
}

mod classification {
    use super::*;

    #[test]
    fn should_quote_literal_values() {
        let parsed = parse(" type=\"danger\" message='Oops'");
        assert_eq!(
            humanize(&parsed),
            vec![
                entry("type", "'danger'", AttributeKind::Literal),
                entry("message", "'Oops'", AttributeKind::Literal),
            ]
        );
        assert!(parsed.bound.is_empty());
    }

    #[test]
    fn should_keep_bound_values_raw() {
        let parsed = parse(" bind:user=\"$user\" bind:count=3");
        assert_eq!(
            humanize(&parsed),
            vec![
                entry("user", "$user", AttributeKind::Bound),
                entry("count", "3", AttributeKind::Bound),
            ]
        );
        assert!(parsed.is_bound("user"));
        assert!(parsed.is_bound("count"));
    }

    #[test]
    fn should_bind_valueless_attribute_to_true() {
        let parsed = parse(" disabled bind:readonly");
        assert_eq!(
            humanize(&parsed),
            vec![
                entry("disabled", "true", AttributeKind::Bound),
                entry("readonly", "true", AttributeKind::Bound),
            ]
        );
        assert!(parsed.is_bound("disabled"));
    }

    #[test]
    fn should_unwrap_escaped_colon_as_literal() {
        let parsed = parse(" ::class=\"{ 'active': on }\"");
        assert_eq!(
            humanize(&parsed),
            vec![entry(":class", "'{ \\'active\\': on }'", AttributeKind::Literal)]
        );
        assert!(!parsed.is_bound(":class"));
    }

    #[test]
    fn should_classify_attribute_bag_spread() {
        let parsed = parse(" bind:attributes=\"$attributes->merge(['a' => 1])\"");
        assert_eq!(
            humanize(&parsed),
            vec![entry(
                "attributes",
                "$attributes->merge(['a' => 1])",
                AttributeKind::AttributeBagSpread
            )]
        );
        assert!(parsed.is_bound("attributes"));
    }

    #[test]
    fn should_yield_empty_collection_for_blank_text() {
        assert_eq!(parse("  "), ParsedAttributes::default());
    }
}

mod duplicates {
    use super::*;

    #[test]
    fn should_let_last_occurrence_win_in_first_position() {
        let parsed = parse(" a=\"1\" b=\"2\" a=\"3\"");
        assert_eq!(
            humanize(&parsed),
            vec![
                entry("a", "'3'", AttributeKind::Literal),
                entry("b", "'2'", AttributeKind::Literal),
            ]
        );
    }

    #[test]
    fn should_clear_bound_mark_when_literal_wins() {
        let parsed = parse(" bind:a=\"$x\" a=\"plain\"");
        assert_eq!(parsed.attributes.get("a"), Some(&Attribute::literal("a", "'plain'")));
        assert!(!parsed.is_bound("a"));
    }

    #[test]
    fn should_start_every_parse_with_no_marks() {
        let echo = BladeEchoCompiler::default();
        let parser = AttributeParser::new(&echo);
        let first = parser.parse(" bind:a=\"$x\"");
        let second = parser.parse(" a=\"y\"");
        assert!(first.is_bound("a"));
        assert!(second.bound.is_empty());
    }
}

mod echoes {
    use super::*;

    #[test]
    fn should_splice_echo_expressions() {
        let parsed = parse(" title=\"Hello {{ $name }}\"");
        assert_eq!(
            parsed.attributes.get("title").map(|attribute| attribute.value.as_str()),
            Some("'Hello '.e($name).''")
        );
    }

    #[test]
    fn should_escape_quotes_in_text_only() {
        let echo = BladeEchoCompiler::default();
        assert_eq!(
            compile_attribute_echos(&echo, "it's {!! $a['k'] !!}"),
            "it\\'s '.$a['k'].'"
        );
    }

    struct UpperEcho;

    impl EchoCompiler for UpperEcho {
        fn compile_echos(&self, value: &str) -> Vec<EchoSegment> {
            vec![EchoSegment::Expr(format!("strtoupper('{}')", value))]
        }
    }

    #[test]
    fn should_use_supplied_echo_compiler() {
        let parsed = AttributeParser::new(&UpperEcho).parse(" label=\"hi\"");
        assert_eq!(
            parsed.attributes.get("label").map(|attribute| attribute.value.as_str()),
            Some("''.strtoupper('hi').''")
        );
    }
}
