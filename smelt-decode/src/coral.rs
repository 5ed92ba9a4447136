//! The Coral/JSON front end: assembles decoded shapes and operation
//! definitions into a unified [`ServiceModel`].

use std::collections::BTreeMap;

use smelt_model::{
    DefaultInputLocation, ErrorBinding, Member, OperationDescription, OperationInputDescription,
    OperationOutputDescription, ServiceDescription, ServiceModel, StructureDescription,
};

use crate::{
    CoralDocument, DecodedShape, Error, MemberLocation, RawOperation, Result, StructureAttributes,
    decode_shape,
};

/// HTTP status used for errors whose shape declares none.
const DEFAULT_ERROR_STATUS: u16 = 400;

/// Build a [`ServiceModel`] from a parsed Coral document.
///
/// `fallback_service_name` keys the service description when the document's
/// metadata carries no service name.
pub fn build_service_model(
    document: &CoralDocument,
    fallback_service_name: &str,
) -> Result<ServiceModel> {
    let mut fields = BTreeMap::new();
    let mut structures: BTreeMap<String, StructureAttributes> = BTreeMap::new();

    for (name, raw) in &document.shapes {
        match decode_shape(name, raw)? {
            DecodedShape::Field(constraint) => {
                fields.insert(name.clone(), constraint);
            }
            DecodedShape::Structure(attributes) => {
                structures.insert(name.clone(), attributes);
            }
        }
    }

    let metadata = &document.metadata;
    let content_type = format!("application/x-amz-{}", metadata.protocol_name);
    let default_input_location = default_input_location(&metadata.protocol_name);

    let mut model = ServiceModel {
        field_descriptions: fields,
        ..Default::default()
    };

    for (operation_name, operation) in &document.operations {
        let description = build_operation(
            operation_name,
            operation,
            &mut structures,
            &mut model,
            default_input_location,
        )?;
        model
            .operation_descriptions
            .insert(operation_name.clone(), description);
    }

    for (name, attributes) in structures {
        model.structure_descriptions.insert(
            name,
            StructureDescription {
                members: attributes.members,
                documentation: attributes.documentation,
            },
        );
    }

    let service_name = metadata
        .service_name
        .clone()
        .unwrap_or_else(|| fallback_service_name.to_string());
    model.service_descriptions.insert(
        service_name,
        ServiceDescription {
            operations: model.operation_descriptions.keys().cloned().collect(),
            api_version: metadata.api_version.clone(),
            endpoint_prefix: metadata.endpoint_prefix.clone(),
            signature_version: metadata.signature_version.clone(),
            content_type,
        },
    );

    Ok(model)
}

/// Query-family protocols default unbound inputs to the query string;
/// everything else serializes them into the body.
fn default_input_location(protocol_name: &str) -> DefaultInputLocation {
    if protocol_name.starts_with("query") || protocol_name.starts_with("ec2") {
        DefaultInputLocation::Query
    } else {
        DefaultInputLocation::Body
    }
}

fn build_operation(
    operation_name: &str,
    operation: &RawOperation,
    structures: &mut BTreeMap<String, StructureAttributes>,
    model: &mut ServiceModel,
    default_input_location: DefaultInputLocation,
) -> Result<OperationDescription> {
    let input = match &operation.input {
        Some(reference) => {
            if !structures.contains_key(&reference.shape) {
                return Err(Box::new(Error::DanglingReference {
                    operation: operation_name.to_string(),
                    shape: reference.shape.clone(),
                }));
            }
            Some(reference.shape.clone())
        }
        None => None,
    };

    // Result-wrapper indirection is applied before member-location
    // classification so the synthesized structure is what gets classified.
    let output = match &operation.output {
        Some(reference) => {
            if !structures.contains_key(&reference.shape) {
                return Err(Box::new(Error::DanglingReference {
                    operation: operation_name.to_string(),
                    shape: reference.shape.clone(),
                }));
            }
            match &reference.result_wrapper {
                Some(wrapper) => Some(synthesize_wrapper(
                    operation_name,
                    &reference.shape,
                    wrapper,
                    structures,
                )?),
                None => Some(reference.shape.clone()),
            }
        }
        None => None,
    };

    let input_description = match &input {
        Some(name) => build_input_description(
            name,
            &structures[name],
            operation,
            default_input_location,
        )?,
        None => OperationInputDescription {
            default_input_location,
            path_template: operation.http.as_ref().map(|h| h.request_uri.clone()),
            ..Default::default()
        },
    };

    let output_description = match &output {
        Some(name) => build_output_description(operation_name, name, &structures[name])?,
        None => OperationOutputDescription::default(),
    };

    let mut errors = Vec::new();
    for reference in &operation.errors {
        let attributes = structures.get(&reference.shape);
        let http_status = attributes
            .and_then(|a| a.http_status)
            .unwrap_or(DEFAULT_ERROR_STATUS);
        errors.push(ErrorBinding {
            type_name: reference.shape.clone(),
            http_status,
        });

        model.error_types.insert(reference.shape.clone());
        if let Some(code) = attributes.and_then(|a| a.error_code.clone()) {
            model.error_code_mappings.insert(reference.shape.clone(), code);
        }
    }

    Ok(OperationDescription {
        input,
        output,
        http_verb: operation.http.as_ref().map(|h| h.method.clone()),
        http_url: operation.http.as_ref().map(|h| h.request_uri.clone()),
        errors,
        input_description,
        output_description,
        documentation: operation.documentation.clone(),
    })
}

/// Synthesize the one-member wrapper structure `<Output>For<Operation>`
/// some wire protocols impose between the declared output and the body.
fn synthesize_wrapper(
    operation_name: &str,
    output_shape: &str,
    wrapper: &str,
    structures: &mut BTreeMap<String, StructureAttributes>,
) -> Result<String> {
    let synthesized_name = format!("{output_shape}For{operation_name}");
    if structures.contains_key(&synthesized_name) {
        return Err(Box::new(Error::WrapperCollision {
            operation: operation_name.to_string(),
            structure: synthesized_name,
        }));
    }

    let mut attributes = StructureAttributes::default();
    attributes.members.insert(
        wrapper.to_string(),
        Member {
            field_name: output_shape.to_string(),
            position: 0,
            required: true,
            location_name: None,
            documentation: None,
        },
    );
    structures.insert(synthesized_name.clone(), attributes);
    Ok(synthesized_name)
}

fn build_input_description(
    structure_name: &str,
    attributes: &StructureAttributes,
    operation: &RawOperation,
    default_input_location: DefaultInputLocation,
) -> Result<OperationInputDescription> {
    let mut description = OperationInputDescription {
        default_input_location,
        path_template: operation.http.as_ref().map(|h| h.request_uri.clone()),
        payload_member: attributes.payload.clone(),
        ..Default::default()
    };

    for (member_name, _) in ordered_members(attributes) {
        match attributes.member_locations.get(member_name) {
            Some(MemberLocation::Uri) => description.path_fields.push(member_name.to_string()),
            Some(MemberLocation::Query) => description.query_fields.push(member_name.to_string()),
            Some(MemberLocation::Header) | Some(MemberLocation::Headers) => {
                description.header_fields.push(member_name.to_string());
            }
            None => description.body_fields.push(member_name.to_string()),
        }
    }

    // A bound member cannot double as the raw body payload.
    if let Some(payload) = &attributes.payload {
        if let Some(location) = attributes.member_locations.get(payload) {
            return Err(Box::new(Error::PayloadConflict {
                structure: structure_name.to_string(),
                member: payload.clone(),
                location: location.as_str().to_string(),
            }));
        }
    }

    Ok(description)
}

fn build_output_description(
    operation_name: &str,
    structure_name: &str,
    attributes: &StructureAttributes,
) -> Result<OperationOutputDescription> {
    let mut description = OperationOutputDescription {
        payload_member: attributes.payload.clone(),
        ..Default::default()
    };

    for (member_name, _) in ordered_members(attributes) {
        match attributes.member_locations.get(member_name) {
            Some(MemberLocation::Header) | Some(MemberLocation::Headers) => {
                description.header_fields.push(member_name.to_string());
            }
            Some(location @ (MemberLocation::Uri | MemberLocation::Query)) => {
                return Err(Box::new(Error::InvalidOutputLocation {
                    operation: operation_name.to_string(),
                    structure: structure_name.to_string(),
                    member: member_name.to_string(),
                    location: location.as_str().to_string(),
                }));
            }
            None => description.body_fields.push(member_name.to_string()),
        }
    }

    Ok(description)
}

/// Members in position order, which the decoder assigned from the sorted,
/// deprecated-filtered member set.
fn ordered_members(attributes: &StructureAttributes) -> Vec<(&str, &Member)> {
    let mut members: Vec<_> = attributes
        .members
        .iter()
        .map(|(name, member)| (name.as_str(), member))
        .collect();
    members.sort_by_key(|(_, member)| member.position);
    members
}
