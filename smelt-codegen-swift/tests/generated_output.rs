//! Integration tests for the Swift backend: a Coral document goes in, the
//! generated package contents are inspected.

use smelt_codegen::GenerationConfig;
use smelt_codegen_swift::{ConcreteClientKind, Generator, PreviewFile};
use smelt_decode::{CoralDocument, build_service_model};
use smelt_model::{
    AdditionalHttpClient, ApplicationDescription, HttpClientConfiguration, ModelOverride,
    ServiceModel, overrides,
};

const WIDGET_MODEL: &str = r#"{
    "metadata": {
        "protocolName": "json",
        "endpointPrefix": "widget",
        "apiVersion": "2023-01-01",
        "signatureVersion": "v4"
    },
    "operations": {
        "GetWidget": {
            "http": {"method": "GET", "requestUri": "/widget/{Id}"},
            "input": {"shape": "GetWidgetRequest"},
            "output": {"shape": "GetWidgetResponse"},
            "errors": [{"shape": "NoSuchWidget"}]
        },
        "GetObject": {
            "http": {"method": "GET", "requestUri": "/object/{Key}"},
            "input": {"shape": "GetObjectRequest"},
            "output": {"shape": "GetObjectResponse"}
        },
        "DeleteWidget": {
            "http": {"method": "DELETE", "requestUri": "/widget/{Id}"},
            "input": {"shape": "GetWidgetRequest"}
        }
    },
    "shapes": {
        "GetWidgetRequest": {
            "type": "structure",
            "required": ["Id"],
            "members": {
                "Id": {"shape": "WidgetId", "location": "uri"},
                "Name": {"shape": "WidgetName"}
            }
        },
        "GetWidgetResponse": {
            "type": "structure",
            "members": {
                "Name": {"shape": "WidgetName"},
                "Status": {"shape": "WidgetStatus"}
            }
        },
        "GetObjectRequest": {
            "type": "structure",
            "required": ["Key"],
            "members": {
                "Key": {"shape": "ObjectKey", "location": "uri"}
            }
        },
        "GetObjectResponse": {
            "type": "structure",
            "members": {
                "ContentLength": {"shape": "ContentLength", "location": "header"},
                "Body": {"shape": "ObjectBody"}
            }
        },
        "NoSuchWidget": {
            "type": "structure",
            "members": {"message": {"shape": "WidgetName"}},
            "error": {"code": "NoSuchWidget.NotFound", "httpStatusCode": 404},
            "exception": true
        },
        "WidgetId": {"type": "string", "min": 1, "max": 128},
        "WidgetName": {"type": "string"},
        "WidgetStatus": {"type": "string", "enum": ["ACTIVE", "DELETED"]},
        "ObjectKey": {"type": "string"},
        "ObjectBody": {"type": "blob"},
        "ContentLength": {"type": "long"}
    }
}"#;

fn widget_model() -> ServiceModel {
    let document = CoralDocument::from_json_str(WIDGET_MODEL, "model.json").unwrap();
    build_service_model(&document, "Widget").unwrap()
}

fn http_config_with_data_client() -> HttpClientConfiguration {
    let mut config = HttpClientConfiguration::default();
    config.additional_clients.insert(
        "dataHttpClient".to_string(),
        AdditionalHttpClient {
            operations: vec!["GetObject".to_string()],
        },
    );
    config
}

fn preview_file<'a>(files: &'a [PreviewFile], suffix: &str) -> &'a PreviewFile {
    files
        .iter()
        .find(|f| f.path.ends_with(suffix))
        .unwrap_or_else(|| panic!("{suffix} not generated"))
}

#[test]
fn file_manifests_declared_up_front() {
    let model = widget_model();
    let application = ApplicationDescription::new("Widget", "/tmp/out");
    let http_config = HttpClientConfiguration::default();
    let config = GenerationConfig::default();
    let generator = Generator::new(&model, &application, &http_config, &config);

    insta::assert_snapshot!(generator.model_file_names().join("\n"), @r"
    WidgetModelErrors.swift
    WidgetModelStructures.swift
    WidgetModelDefaultInstances.swift
    WidgetModelOperations.swift
    WidgetModelTypes.swift
    ");

    insta::assert_snapshot!(generator.client_file_names().join("\n"), @r"
    AWSWidgetClient.swift
    WidgetClientProtocol.swift
    WidgetOperationsClientOutput.swift
    AWSWidgetClientConfiguration.swift
    AWSWidgetClientGenerator.swift
    WidgetInvocationsReporting.swift
    WidgetOperationsReporting.swift
    MockWidgetClient.swift
    WidgetOperationsClientInput.swift
    ThrowingWidgetClient.swift
    ");
}

#[test]
fn preview_matches_declared_manifest() {
    let model = widget_model();
    let application = ApplicationDescription::new("Widget", "/tmp/out");
    let http_config = HttpClientConfiguration::default();
    let config = GenerationConfig::default();
    let generator = Generator::new(&model, &application, &http_config, &config);

    let model_paths: Vec<String> = generator
        .preview_model()
        .unwrap()
        .into_iter()
        .map(|f| f.path)
        .collect();
    let expected: Vec<String> = generator
        .model_file_names()
        .into_iter()
        .map(|name| format!("WidgetModel/{name}"))
        .collect();
    assert_eq!(model_paths, expected);

    let client_paths: Vec<String> = generator
        .preview_client()
        .unwrap()
        .into_iter()
        .map(|f| f.path)
        .collect();
    let expected: Vec<String> = generator
        .client_file_names()
        .into_iter()
        .map(|name| format!("WidgetClient/{name}"))
        .collect();
    assert_eq!(client_paths, expected);
}

#[test]
fn additional_http_client_routing() {
    let model = widget_model();
    let application = ApplicationDescription::new("Widget", "/tmp/out");
    let http_config = http_config_with_data_client();
    let config = GenerationConfig::default();
    let generator = Generator::new(&model, &application, &http_config, &config);

    let files = generator.preview_client().unwrap();
    let client = &preview_file(&files, "AWSWidgetClient.swift").content;

    // GetObject routes through the alternate transport; everything else
    // uses the default handle.
    let get_object_body = client
        .split("func getObject")
        .nth(1)
        .expect("getObject body not generated");
    let get_object_body: String = get_object_body
        .split("func ")
        .next()
        .unwrap()
        .to_string();
    assert!(get_object_body.contains("dataHttpClient.executeWithOutput("));

    let get_widget_body = client.split("func getWidget").nth(1).unwrap();
    let get_widget_body: String = get_widget_body.split("func ").next().unwrap().to_string();
    assert!(get_widget_body.contains(" httpClient.executeWithOutput("));
    assert!(!get_widget_body.contains("dataHttpClient"));

    // Both transports are declared, initialized, and shut down.
    assert!(client.contains("public let httpClient: HTTPOperationsClient"));
    assert!(client.contains("public let dataHttpClient: HTTPOperationsClient"));
    assert!(client.contains("try self.dataHttpClient.shutdown()"));
}

#[test]
fn protocol_declares_both_invocation_styles() {
    let model = widget_model();
    let application = ApplicationDescription::new("Widget", "/tmp/out");
    let http_config = HttpClientConfiguration::default();
    let config = GenerationConfig::default();
    let generator = Generator::new(&model, &application, &http_config, &config);

    let files = generator.preview_client().unwrap();
    let protocol = &preview_file(&files, "WidgetClientProtocol.swift").content;

    assert!(protocol.contains("public protocol WidgetClientProtocol {"));
    assert!(protocol.contains(
        "func getWidget(input: GetWidgetRequest, completion: @escaping (Result<GetWidgetResponse, WidgetError>) -> Void) throws"
    ));
    assert!(protocol.contains(
        "func getWidget(input: GetWidgetRequest) async throws -> GetWidgetResponse"
    ));
    // DeleteWidget has no output: error-only completion, async without a
    // return type.
    assert!(protocol.contains(
        "func deleteWidget(input: GetWidgetRequest, completion: @escaping (WidgetError?) -> Void) throws"
    ));
    assert!(protocol.contains("func deleteWidget(input: GetWidgetRequest) async throws\n"));
    // Function typealiases for the mock overrides.
    assert!(protocol.contains("typealias GetWidgetAsyncType ="));
    assert!(protocol.contains("typealias GetWidgetCallbackType ="));
}

#[test]
fn mock_client_returns_defaults_and_honors_overrides() {
    let model = widget_model();
    let application = ApplicationDescription::new("Widget", "/tmp/out");
    let http_config = HttpClientConfiguration::default();
    let config = GenerationConfig::default();
    let generator = Generator::new(&model, &application, &http_config, &config);

    let files = generator.preview_client().unwrap();
    let mock = &preview_file(&files, "MockWidgetClient.swift").content;

    assert!(mock.contains("public struct MockWidgetClient: WidgetClientProtocol {"));
    assert!(mock.contains("let getWidgetAsyncOverride: GetWidgetAsyncType?"));
    assert!(mock.contains("return GetWidgetResponse.__default"));
    // No-output operation completes with nil.
    assert!(mock.contains("completion(nil)"));

    let throwing = &preview_file(&files, "ThrowingWidgetClient.swift").content;
    assert!(throwing.contains("public struct ThrowingWidgetClient: WidgetClientProtocol {"));
    assert!(throwing.contains("throw error"));
    assert!(throwing.contains("completion(.failure(error))"));
    assert!(throwing.contains("completion(error)"));
}

#[test]
fn model_structures_follow_positions_and_wire_names() {
    let model = widget_model();
    let application = ApplicationDescription::new("Widget", "/tmp/out");
    let http_config = HttpClientConfiguration::default();
    let config = GenerationConfig::default();
    let generator = Generator::new(&model, &application, &http_config, &config);

    let files = generator.preview_model().unwrap();
    let structures = &preview_file(&files, "WidgetModelStructures.swift").content;

    assert!(structures.contains("public struct GetWidgetRequest: Codable, Equatable {"));
    // Sorted member order: Id before Name.
    let id_index = structures.find("public var id: WidgetId").unwrap();
    let name_index = structures.find("public var name: WidgetName?").unwrap();
    assert!(id_index < name_index);
    // Wire keys preserved through CodingKeys.
    assert!(structures.contains("case id = \"Id\""));
    // Constraint validation embedded for the bounded field.
    assert!(structures.contains("try id.validateAsWidgetId()"));

    let types = &preview_file(&files, "WidgetModelTypes.swift").content;
    assert!(types.contains("public typealias WidgetId = String"));
    assert!(types.contains("public enum WidgetStatus: String, Codable, CustomStringConvertible {"));
    assert!(types.contains("case active = \"ACTIVE\""));
    assert!(types.contains("func validateAsWidgetId() throws {"));
}

#[test]
fn enum_naming_override_uses_upper_camel_cases() {
    let model = widget_model();
    let mut model_override = ModelOverride::default();
    model_override
        .upper_camel_case_enums
        .insert("WidgetStatus".to_string());
    let model = overrides::apply(&model, &model_override).unwrap();

    let application = ApplicationDescription::new("Widget", "/tmp/out");
    let http_config = HttpClientConfiguration::default();
    let config = GenerationConfig::default();
    let generator = Generator::new(&model, &application, &http_config, &config);

    let files = generator.preview_model().unwrap();
    let types = &preview_file(&files, "WidgetModelTypes.swift").content;
    assert!(types.contains("case Active = \"ACTIVE\""));
    assert!(types.contains("case Deleted = \"DELETED\""));
}

#[test]
fn default_instances_use_raw_type_override_literals() {
    let model = widget_model();
    let mut model_override = ModelOverride::default();
    model_override.raw_types.insert(
        "WidgetId".to_string(),
        smelt_model::RawTypeMapping {
            raw_type_name: "Int".to_string(),
            default_value: "12".to_string(),
        },
    );
    let model = overrides::apply(&model, &model_override).unwrap();

    let application = ApplicationDescription::new("Widget", "/tmp/out");
    let http_config = HttpClientConfiguration::default();
    let config = GenerationConfig::default();
    let generator = Generator::new(&model, &application, &http_config, &config);

    let files = generator.preview_model().unwrap();
    let types = &preview_file(&files, "WidgetModelTypes.swift").content;
    assert!(types.contains("public typealias WidgetId = Int"));

    let defaults = &preview_file(&files, "WidgetModelDefaultInstances.swift").content;
    assert!(defaults.contains("id: 12)"));
}

#[test]
fn operations_client_input_partitions_bindings() {
    let model = widget_model();
    let application = ApplicationDescription::new("Widget", "/tmp/out");
    let http_config = HttpClientConfiguration::default();
    let config = GenerationConfig::default();
    let generator = Generator::new(&model, &application, &http_config, &config);

    let files = generator.preview_client().unwrap();
    let inputs = &preview_file(&files, "WidgetOperationsClientInput.swift").content;

    let get_widget = inputs
        .split("struct GetWidgetOperationHTTPRequestInput")
        .nth(1)
        .unwrap();
    let get_widget: &str = get_widget.split("struct ").next().unwrap();
    assert!(get_widget.contains("self.pathEncodable = encodable"));
    assert!(get_widget.contains("self.bodyEncodable = encodable"));
    assert!(get_widget.contains("self.queryEncodable = nil"));
    assert!(get_widget.contains("self.pathTemplate = \"/widget/{Id}\""));

    let outputs = &preview_file(&files, "WidgetOperationsClientOutput.swift").content;
    // GetObject's header-bound member rides alongside the body.
    assert!(outputs.contains("public let contentLength: ContentLength?"));
}

#[test]
fn missing_http_verb_is_fatal_for_the_concrete_client_only() {
    let mut model = widget_model();
    model
        .operation_descriptions
        .get_mut("GetWidget")
        .unwrap()
        .http_verb = None;

    let application = ApplicationDescription::new("Widget", "/tmp/out");
    let http_config = HttpClientConfiguration::default();
    let config = GenerationConfig::default();
    let generator = Generator::new(&model, &application, &http_config, &config);

    let err = generator.preview_client().unwrap_err();
    assert!(err.to_string().contains("no HTTP verb"));

    // The model package does not require verbs.
    assert!(generator.preview_model().is_ok());
}

#[test]
fn api_gateway_client_prefixes_stage() {
    let model = widget_model();
    let application = ApplicationDescription::new("Widget", "/tmp/out");
    let http_config = HttpClientConfiguration::default();
    let config = GenerationConfig::default();
    let generator = Generator::new(&model, &application, &http_config, &config)
        .with_client_kind(ConcreteClientKind::ApiGateway);

    assert_eq!(generator.client_file_names()[0], "APIGatewayWidgetClient.swift");

    let files = generator.preview_client().unwrap();
    let client = &preview_file(&files, "APIGatewayWidgetClient.swift").content;
    assert!(client.contains("public struct APIGatewayWidgetClient: WidgetClientProtocol {"));
    assert!(client.contains("let operationPath = \"/\\(stage)\" + WidgetModelOperations.getWidget.operationPath"));

    let configuration = &preview_file(&files, "APIGatewayWidgetClientConfiguration.swift").content;
    assert!(configuration.contains("public let stage: String"));
}

#[test]
fn model_errors_cover_declared_and_synthetic_errors() {
    let model = widget_model();
    let mut model_override = ModelOverride::default();
    model_override
        .additional_errors
        .insert("ThrottlingException".to_string());
    let model = overrides::apply(&model, &model_override).unwrap();

    let application = ApplicationDescription::new("Widget", "/tmp/out");
    let http_config = HttpClientConfiguration::default();
    let config = GenerationConfig::default();
    let generator = Generator::new(&model, &application, &http_config, &config);

    let files = generator.preview_model().unwrap();
    let errors = &preview_file(&files, "WidgetModelErrors.swift").content;

    assert!(errors.contains("public enum WidgetError: Swift.Error, Decodable {"));
    // Structure-backed error decodes its payload; the synthetic one only
    // carries the message.
    assert!(errors.contains("case noSuchWidget(NoSuchWidget)"));
    assert!(errors.contains("case throttlingException(message: String?)"));
    // Wire identity comes from the declared code, falling back to the name.
    assert!(errors.contains("private let noSuchWidgetIdentity = \"NoSuchWidget.NotFound\""));
    assert!(errors.contains("private let throttlingExceptionIdentity = \"ThrottlingException\""));
}

#[test]
fn generation_is_deterministic() {
    let model = widget_model();
    let application = ApplicationDescription::new("Widget", "/tmp/out");
    let http_config = http_config_with_data_client();
    let config = GenerationConfig::default();
    let generator = Generator::new(&model, &application, &http_config, &config);

    let first = generator.preview_client().unwrap();
    let second = generator.preview_client().unwrap();
    assert_eq!(first, second);

    let first_model = generator.preview_model().unwrap();
    let second_model = generator.preview_model().unwrap();
    assert_eq!(first_model, second_model);
}

#[test]
fn generate_writes_declared_files_to_disk() {
    let temp = tempfile::TempDir::new().unwrap();
    let model = widget_model();
    let application =
        ApplicationDescription::new("Widget", temp.path()).with_description("Widget service");
    let http_config = HttpClientConfiguration::default();
    let config = GenerationConfig::default();
    let generator = Generator::new(&model, &application, &http_config, &config);

    let summary = generator.generate_model().unwrap();
    assert_eq!(summary.written.len(), 5);
    assert!(summary.skipped.is_empty());

    let summary = generator.generate_client().unwrap();
    assert_eq!(summary.written.len(), 10);

    for name in generator.model_file_names() {
        assert!(temp.path().join("WidgetModel").join(name).exists());
    }
    for name in generator.client_file_names() {
        assert!(temp.path().join("WidgetClient").join(name).exists());
    }

    let client = std::fs::read_to_string(
        temp.path().join("WidgetClient").join("AWSWidgetClient.swift"),
    )
    .unwrap();
    assert!(client.starts_with("// Code generated by smelt. DO NOT EDIT."));
    // The application description flows into the type documentation.
    assert!(client.contains("/// Widget service"));
}

#[test]
fn custom_file_header_is_emitted_after_the_marker() {
    let model = widget_model();
    let application = ApplicationDescription::new("Widget", "/tmp/out");
    let http_config = HttpClientConfiguration::default();
    let config = GenerationConfig {
        custom_file_header: Some("// Copyright Example Corp.".to_string()),
        ..Default::default()
    };
    let generator = Generator::new(&model, &application, &http_config, &config);

    for file in generator
        .preview_model()
        .unwrap()
        .into_iter()
        .chain(generator.preview_client().unwrap())
    {
        assert!(
            file.content.contains("// Copyright Example Corp."),
            "{} lacks the custom header",
            file.path
        );
    }
}
