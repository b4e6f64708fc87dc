//! Data/Attribute Partitioner
//!
//! Splits a component tag's attributes into constructor data and the
//! attributes forwarded to the component's attribute bag.

use crate::schema::ParameterNameSet;
use crate::template_parser::{Attribute, AttributeList};
use crate::util::camel_case;

/// Split `attributes` by the constructor `parameters` of a typed
/// component: attributes whose camel-cased name is a parameter become
/// data, the rest stay attributes. Relative order is kept on both
/// sides.
///
/// Without parameter metadata (view-backed components) both sides get
/// the full collection.
pub fn partition_data_and_attributes(
    parameters: Option<&ParameterNameSet>,
    attributes: AttributeList,
) -> (AttributeList, AttributeList) {
    let Some(parameters) = parameters else {
        return (attributes.clone(), attributes);
    };

    let mut data = AttributeList::new();
    let mut rest = AttributeList::new();
    for attribute in attributes {
        if parameters.contains(&camel_case(&attribute.name)) {
            data.insert(attribute);
        } else {
            rest.insert(attribute);
        }
    }
    (data, rest)
}

/// Rename data entries to the camel-cased parameter names the
/// constructor receives them under
pub fn camel_case_keys(data: AttributeList) -> AttributeList {
    data.into_iter()
        .map(|attribute| Attribute {
            name: camel_case(&attribute.name),
            ..attribute
        })
        .collect()
}
