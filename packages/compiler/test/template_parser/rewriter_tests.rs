/*
 * Attribute Rewriter Tests
 *
 * Shorthand expansion passes, individually and in sequence
 */

use component_tag_compiler::config::{DEFAULT_CLASS_HELPER, DEFAULT_STYLE_HELPER};
use component_tag_compiler::template_parser::rewriter::{
    expand_attribute_bag, expand_short_bindings, normalize_bind_prefix,
};
use component_tag_compiler::template_parser::AttributeRewriter;

fn rewriter() -> AttributeRewriter<'static> {
    AttributeRewriter::new(DEFAULT_CLASS_HELPER, DEFAULT_STYLE_HELPER)
}

mod short_bindings {
    use super::*;

    #[test]
    fn should_expand_dollar_shorthand() {
        assert_eq!(expand_short_bindings(" :$type"), " :type=\"$type\"");
        assert_eq!(
            expand_short_bindings(" :$type :$message"),
            " :type=\"$type\" :message=\"$message\""
        );
    }

    #[test]
    fn should_require_leading_whitespace() {
        assert_eq!(expand_short_bindings(":$type"), ":$type");
    }

    #[test]
    fn should_not_expand_inside_quoted_value() {
        assert_eq!(expand_short_bindings(" title=\"Price :$amount\""), " title=\"Price :$amount\"");
        assert_eq!(
            expand_short_bindings(" title='a :$b' :$c"),
            " title='a :$b' :c=\"$c\""
        );
    }
}

mod attribute_bag {
    use super::*;

    #[test]
    fn should_expand_standalone_attributes_echo() {
        assert_eq!(expand_attribute_bag(" {{ $attributes }}"), " :attributes=\"$attributes\"");
        assert_eq!(
            expand_attribute_bag(" {{ $attributes->merge(['class' => 'x']) }}"),
            " :attributes=\"$attributes->merge(['class' => 'x'])\""
        );
    }

    #[test]
    fn should_ignore_other_echoes() {
        assert_eq!(expand_attribute_bag(" title=\"{{ $title }}\""), " title=\"{{ $title }}\"");
        assert_eq!(expand_attribute_bag(" {{ $attributesCount }}"), " {{ $attributesCount }}");
    }

    #[test]
    fn should_not_expand_attributes_echo_inside_quoted_value() {
        let text = " title=\"Hi {{ $attributes->get('x') }}\"";
        assert_eq!(expand_attribute_bag(text), text);
    }
}

mod helpers {
    use super::*;

    #[test]
    fn should_expand_class_helper_with_nested_parens() {
        assert_eq!(
            rewriter().expand_helpers(" @class(['p-4', \"font-bold\" => f($a, g($b))])"),
            format!(" :class=\"{}(['p-4', 'font-bold' => f($a, g($b))])\"", DEFAULT_CLASS_HELPER)
        );
    }

    #[test]
    fn should_expand_style_helper() {
        assert_eq!(
            rewriter().expand_helpers(" @style(['color: red' => $danger])"),
            format!(" :style=\"{}(['color: red' => $danger])\"", DEFAULT_STYLE_HELPER)
        );
    }

    #[test]
    fn should_leave_unbalanced_helper_untouched() {
        assert_eq!(rewriter().expand_helpers(" @class(['a'"), " @class(['a'");
    }

    #[test]
    fn should_not_expand_helper_inside_quoted_value() {
        let text = " title=\"@class(['a'])\"";
        assert_eq!(rewriter().expand_helpers(text), text);
    }
}

mod bind_prefix {
    use super::*;

    #[test]
    fn should_rewrite_single_colon() {
        assert_eq!(normalize_bind_prefix(" :type=\"$type\""), " bind:type=\"$type\"");
        assert_eq!(normalize_bind_prefix(":type=\"$type\""), " bind:type=\"$type\"");
    }

    #[test]
    fn should_keep_escaped_double_colon() {
        assert_eq!(normalize_bind_prefix(" ::class=\"{ a: b }\""), " ::class=\"{ a: b }\"");
    }

    #[test]
    fn should_not_rewrite_colon_inside_quoted_value() {
        let text = " title=\"a :b=c\" alt=' :d=e'";
        assert_eq!(normalize_bind_prefix(text), text);
    }

    #[test]
    fn should_ignore_colon_without_value() {
        assert_eq!(normalize_bind_prefix(" :disabled"), " :disabled");
    }
}

mod full_rewrite {
    use super::*;

    #[test]
    fn should_run_all_passes_in_order() {
        assert_eq!(
            rewriter().rewrite(" :$type @class(['a' => $b]) {{ $attributes }} title=\"Hi\""),
            format!(
                " bind:type=\"$type\" bind:class=\"{}(['a' => $b])\" bind:attributes=\"$attributes\" title=\"Hi\"",
                DEFAULT_CLASS_HELPER
            )
        );
    }

    #[test]
    fn should_be_idempotent_on_canonical_text() {
        let canonical = rewriter().rewrite(" :$type @style(['x']) size=\"lg\"");
        assert_eq!(rewriter().rewrite(&canonical), canonical);
    }

    #[test]
    fn should_keep_quoted_literals_intact() {
        let text = " title=\"Hi {{ $attributes->get('n') }} :$amount :x=y @class(['a'])\"";
        assert_eq!(rewriter().rewrite(text), text);
    }

    #[test]
    fn should_leave_plain_attributes_alone() {
        assert_eq!(rewriter().rewrite(" type=\"danger\" wire:model=\"x\""), " type=\"danger\" wire:model=\"x\"");
    }
}
