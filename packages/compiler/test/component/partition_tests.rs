/**
 * Data/Attribute Partitioner Tests
 */

#[path = "../util/mod.rs"]
mod utils;

use component_tag_compiler::component::{camel_case_keys, partition_data_and_attributes};
use component_tag_compiler::{Attribute, AttributeList, ParameterNameSet, ResolvedTarget};
use utils::Fixture;

fn names(list: &AttributeList) -> Vec<&str> {
    list.names().collect()
}

fn attributes() -> AttributeList {
    [
        Attribute::literal("type", "'danger'"),
        Attribute::literal("class", "'mb-4'"),
        Attribute::bound("user-name", "$user->name"),
        Attribute::literal("message", "'Oops'"),
    ]
    .into_iter()
    .collect()
}

#[test]
fn should_split_by_camel_cased_parameter_names() {
    let parameters: ParameterNameSet = ["message", "type", "userName"].iter().map(|s| s.to_string()).collect();
    let (data, rest) = partition_data_and_attributes(Some(&parameters), attributes());
    assert_eq!(names(&data), vec!["type", "user-name", "message"]);
    assert_eq!(names(&rest), vec!["class"]);
}

#[test]
fn should_give_both_sides_everything_without_parameters() {
    let (data, rest) = partition_data_and_attributes(None, attributes());
    assert_eq!(data, attributes());
    assert_eq!(rest, attributes());
}

#[test]
fn should_put_everything_in_attributes_for_empty_parameter_set() {
    let (data, rest) = partition_data_and_attributes(Some(&ParameterNameSet::new()), attributes());
    assert!(data.is_empty());
    assert_eq!(rest, attributes());
}

#[test]
fn should_camel_case_data_keys() {
    let data = camel_case_keys(attributes());
    assert_eq!(names(&data), vec!["type", "class", "userName", "message"]);
    assert_eq!(data.get("userName").map(|attribute| attribute.value.as_str()), Some("$user->name"));
}

mod through_compiler {
    use super::*;

    #[test]
    fn should_use_constructor_parameters_of_typed_component() {
        let fixture = Fixture::new().with_type("App\\Alert", &["type", "message"]);
        let compiler = fixture.compiler();
        let parsed = compiler.parse_attributes(" type=\"danger\" message=\"Oops\"");
        let (data, rest) = compiler
            .partition_data_and_attributes(&ResolvedTarget::TypedComponent("App\\Alert".into()), parsed.attributes);
        assert_eq!(names(&data), vec!["type", "message"]);
        assert!(rest.is_empty());
    }

    #[test]
    fn should_treat_constructorless_type_as_having_no_parameters() {
        let fixture = Fixture::new().with_constructorless_type("App\\Divider");
        let compiler = fixture.compiler();
        let parsed = compiler.parse_attributes(" class=\"my-2\"");
        let (data, rest) = compiler
            .partition_data_and_attributes(&ResolvedTarget::TypedComponent("App\\Divider".into()), parsed.attributes);
        assert!(data.is_empty());
        assert_eq!(names(&rest), vec!["class"]);
    }

    #[test]
    fn should_share_attributes_with_view_components() {
        let fixture = Fixture::new();
        let compiler = fixture.compiler();
        let parsed = compiler.parse_attributes(" title=\"Hi\"");
        let (data, rest) = compiler
            .partition_data_and_attributes(&ResolvedTarget::ViewComponent("components.card".into()), parsed.attributes);
        assert_eq!(data, rest);
        assert_eq!(names(&data), vec!["title"]);
    }
}
