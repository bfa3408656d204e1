//! Integration tests for the GraphQL mutation fields.

use std::sync::Arc;

use async_graphql::dynamic::Schema;
use serde_json::json;
use veterinary_core::Rol;
use veterinary_db_memory::InMemoryUserService;
use veterinary_graphql::{
    GraphQLContext, GraphQLRequest, GraphQLResponse, SchemaBuilderConfig,
    VeterinarySchemaBuilder, execute,
};

fn build_schema() -> Schema {
    let service = Arc::new(InMemoryUserService::with_roles([
        Rol::new(1, "ADMIN", "Administrador"),
        Rol::new(3, "RECEPCION", "Recepcionista"),
    ]));
    let context = GraphQLContext::builder()
        .with_service(service)
        .build()
        .expect("context");
    VeterinarySchemaBuilder::new(context, SchemaBuilderConfig::default())
        .build()
        .expect("schema should build")
}

async fn run(schema: &Schema, query: &str) -> GraphQLResponse {
    execute(schema, GraphQLRequest::new(query)).await
}

async fn save_ana(schema: &Schema) -> String {
    let response = run(
        schema,
        r#"mutation { saveUser(input: { nombre: "Ana", activo: true, rol: { id: "3" } }) { id } }"#,
    )
    .await;
    assert!(response.is_ok(), "errors: {:?}", response.errors);
    response.data["saveUser"]["id"]
        .as_str()
        .expect("saved user has an id")
        .to_string()
}

// =============================================================================
// saveUser
// =============================================================================

#[tokio::test]
async fn test_save_user_then_read_back() {
    let schema = build_schema();
    let id = save_ana(&schema).await;

    let response = run(
        &schema,
        &format!(
            r#"{{ findUserById(id: "{id}") {{ nombre apellidoPaterno email activo rol {{ id nombre }} }} }}"#
        ),
    )
    .await;

    assert!(response.is_ok(), "errors: {:?}", response.errors);
    assert_eq!(
        response.data["findUserById"],
        json!({
            "nombre": "Ana",
            "apellidoPaterno": null,
            "email": null,
            "activo": true,
            "rol": {"id": "3", "nombre": "RECEPCION"}
        })
    );
}

#[tokio::test]
async fn test_save_user_with_variables() {
    let schema = build_schema();

    let request = GraphQLRequest::new(
        "mutation Save($input: UserInput!) { saveUser(input: $input) { id nombre celular } }",
    )
    .with_variables(json!({
        "input": {"nombre": "Luis", "celular": "+56933333333", "rol": {"id": 1}}
    }));

    let response = execute(&schema, request).await;

    assert!(response.is_ok(), "errors: {:?}", response.errors);
    assert_eq!(
        response.data["saveUser"],
        json!({"id": "1", "nombre": "Luis", "celular": "+56933333333"})
    );
}

#[tokio::test]
async fn test_save_user_ignores_supplied_id() {
    let schema = build_schema();
    save_ana(&schema).await;

    let response = run(
        &schema,
        r#"mutation { saveUser(input: { id: "1", nombre: "Otra" }) { id } }"#,
    )
    .await;

    assert!(response.is_ok());
    assert_eq!(response.data["saveUser"]["id"], "2");
}

#[tokio::test]
async fn test_save_user_unknown_rol() {
    let schema = build_schema();

    let response = run(
        &schema,
        r#"mutation { saveUser(input: { nombre: "Ana", rol: { id: "42" } }) { id } }"#,
    )
    .await;

    assert_eq!(response.data, json!({"saveUser": null}));
    assert_eq!(response.errors[0]["path"], json!(["saveUser"]));
    assert_eq!(response.errors[0]["extensions"]["code"], "SERVICE_ERROR");
    assert_eq!(response.errors[0]["extensions"]["category"], "validation");
}

#[tokio::test]
async fn test_save_user_non_numeric_rol_id() {
    let schema = build_schema();

    let response = run(
        &schema,
        r#"mutation { saveUser(input: { rol: { id: "admin" } }) { id } }"#,
    )
    .await;

    assert_eq!(response.data, json!({"saveUser": null}));
    assert_eq!(response.errors[0]["path"], json!(["saveUser"]));
    assert_eq!(response.errors[0]["extensions"]["code"], "INVALID_ARGUMENT");
}

// =============================================================================
// updateUser
// =============================================================================

#[tokio::test]
async fn test_update_user_replaces_fields() {
    let schema = build_schema();
    let id = save_ana(&schema).await;

    let response = run(
        &schema,
        &format!(
            r#"mutation {{ updateUser(input: {{ id: "{id}", nombre: "Ana María", activo: false, rol: {{ id: "1" }} }}) {{ id nombre activo rol {{ nombre }} }} }}"#
        ),
    )
    .await;

    assert!(response.is_ok(), "errors: {:?}", response.errors);
    assert_eq!(
        response.data["updateUser"],
        json!({"id": id, "nombre": "Ana María", "activo": false, "rol": {"nombre": "ADMIN"}})
    );
}

#[tokio::test]
async fn test_update_user_is_full_replacement() {
    let schema = build_schema();
    let id = save_ana(&schema).await;

    let response = run(
        &schema,
        &format!(r#"mutation {{ updateUser(input: {{ id: "{id}", email: "ana@vet.cl" }}) {{ id }} }}"#),
    )
    .await;
    assert!(response.is_ok(), "errors: {:?}", response.errors);

    let response = run(
        &schema,
        &format!(r#"{{ findUserById(id: "{id}") {{ nombre email activo rol {{ id }} }} }}"#),
    )
    .await;
    assert_eq!(
        response.data,
        json!({"findUserById": {"nombre": null, "email": "ana@vet.cl", "activo": null, "rol": null}})
    );
}

#[tokio::test]
async fn test_update_user_without_id_is_rejected() {
    let schema = build_schema();

    let response = run(
        &schema,
        r#"mutation { updateUser(input: { nombre: "Sin id" }) { id } }"#,
    )
    .await;

    assert_eq!(response.data, json!({"updateUser": null}));
    assert_eq!(response.errors[0]["path"], json!(["updateUser"]));
    assert_eq!(response.errors.len(), 1);
    assert_eq!(response.errors[0]["extensions"]["code"], "INVALID_ARGUMENT");

    // Nothing was created
    let response = run(&schema, "{ findAll { id } }").await;
    assert_eq!(response.data["findAll"], json!([]));
}

#[tokio::test]
async fn test_update_missing_user_is_not_found() {
    let schema = build_schema();

    let response = run(
        &schema,
        r#"mutation { updateUser(input: { id: "77", nombre: "Nadie" }) { id } }"#,
    )
    .await;

    assert_eq!(response.data, json!({"updateUser": null}));
    assert_eq!(response.errors[0]["path"], json!(["updateUser"]));
    assert_eq!(response.errors[0]["extensions"]["code"], "NOT_FOUND");
}

// =============================================================================
// deleteUser
// =============================================================================

#[tokio::test]
async fn test_delete_user_then_read_is_null() {
    let schema = build_schema();
    for _ in 0..5 {
        save_ana(&schema).await;
    }

    let response = run(&schema, "mutation { deleteUser(id: 5) }").await;

    assert!(response.is_ok(), "errors: {:?}", response.errors);
    let message = response.data["deleteUser"].as_str().unwrap();
    assert!(message.contains('5'));

    let response = run(&schema, r#"{ findUserById(id: "5") { id } }"#).await;
    assert!(response.is_ok());
    assert_eq!(response.data, json!({"findUserById": null}));
}

#[tokio::test]
async fn test_delete_missing_user_is_not_found() {
    let schema = build_schema();

    let response = run(&schema, r#"mutation { deleteUser(id: "5") }"#).await;

    assert_eq!(response.data, json!({"deleteUser": null}));
    assert_eq!(response.errors[0]["path"], json!(["deleteUser"]));
    assert_eq!(response.errors[0]["extensions"]["code"], "NOT_FOUND");
    assert_eq!(response.errors[0]["extensions"]["category"], "not_found");
}

#[tokio::test]
async fn test_delete_non_numeric_id() {
    let schema = build_schema();

    let response = run(&schema, r#"mutation { deleteUser(id: "cinco") }"#).await;

    assert_eq!(response.data, json!({"deleteUser": null}));
    assert_eq!(response.errors[0]["path"], json!(["deleteUser"]));
    assert_eq!(response.errors[0]["extensions"]["code"], "INVALID_ARGUMENT");
}

// =============================================================================
// Error isolation
// =============================================================================

#[tokio::test]
async fn test_failing_mutation_between_successful_ones() {
    let schema = build_schema();

    let response = run(
        &schema,
        r#"mutation {
            first: saveUser(input: { nombre: "Ana" }) { id nombre }
            missing: deleteUser(id: "99")
            second: saveUser(input: { nombre: "Luis" }) { id nombre }
        }"#,
    )
    .await;

    assert_eq!(
        response.data,
        json!({
            "first": {"id": "1", "nombre": "Ana"},
            "missing": null,
            "second": {"id": "2", "nombre": "Luis"}
        })
    );
    assert_eq!(response.errors.len(), 1);
    assert_eq!(response.errors[0]["path"], json!(["missing"]));
    assert_eq!(response.errors[0]["extensions"]["code"], "NOT_FOUND");
}
