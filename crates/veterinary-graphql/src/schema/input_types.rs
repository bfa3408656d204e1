//! Input types for GraphQL mutations.
//!
//! `UserInput` mirrors the `User` object field for field, with `id` optional
//! so the same input serves creation and updates. Roles are referenced by id
//! only through `RolInput`.

use async_graphql::dynamic::{InputObject, InputValue, TypeRef};

/// GraphQL type name of the user input object.
pub const USER_INPUT_TYPE: &str = "UserInput";

/// GraphQL type name of the role reference input object.
pub const ROL_INPUT_TYPE: &str = "RolInput";

/// String fields shared by `User` and `UserInput`, in schema order.
const USER_STRING_FIELDS: [&str; 8] = [
    "nombre",
    "apellidoPaterno",
    "apellidoMaterno",
    "rut",
    "direccion",
    "celular",
    "email",
    "password",
];

/// Creates the `UserInput` input type.
///
/// ```graphql
/// input UserInput {
///   id: ID
///   nombre: String
///   ...
///   activo: Boolean
///   rol: RolInput
/// }
/// ```
pub fn create_user_input() -> InputObject {
    let input = InputObject::new(USER_INPUT_TYPE)
        .description("Input for creating or updating a user. `id` is required for updates.")
        .field(
            InputValue::new("id", TypeRef::named(TypeRef::ID))
                .description("Id of the user to update; ignored on creation"),
        );

    USER_STRING_FIELDS
        .into_iter()
        .fold(input, |input, name| {
            input.field(InputValue::new(name, TypeRef::named(TypeRef::STRING)))
        })
        .field(InputValue::new("activo", TypeRef::named(TypeRef::BOOLEAN)))
        .field(
            InputValue::new("rol", TypeRef::named(ROL_INPUT_TYPE))
                .description("Role reference by id"),
        )
}

/// Creates the `RolInput` input type.
pub fn create_rol_input() -> InputObject {
    InputObject::new(ROL_INPUT_TYPE)
        .description("Reference to an existing role")
        .field(InputValue::new("id", TypeRef::named_nn(TypeRef::ID)))
}
