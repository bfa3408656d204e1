//! Output object types.
//!
//! `User` and `Rol` are resolved from typed parent values: root resolvers
//! hand back `FieldValue::owned_any(User)` and each field below downcasts
//! its parent and reads one attribute.

use async_graphql::Value;
use async_graphql::dynamic::{Field, FieldFuture, FieldValue, Object, TypeRef};
use veterinary_core::{Rol, User};

/// GraphQL type name of the user object.
pub const USER_TYPE: &str = "User";

/// GraphQL type name of the role object.
pub const ROL_TYPE: &str = "Rol";

type Getter<T> = fn(&T) -> Option<Value>;

fn string(value: &Option<String>) -> Option<Value> {
    value.clone().map(Value::String)
}

/// Builds a scalar field that reads one attribute of a typed parent.
fn scalar_field<T: Send + Sync + 'static>(
    name: &str,
    type_ref: TypeRef,
    getter: Getter<T>,
) -> Field {
    Field::new(name, type_ref, move |ctx| {
        FieldFuture::new(async move {
            let parent = ctx.parent_value.try_downcast_ref::<T>()?;
            Ok(getter(parent).map(FieldValue::value))
        })
    })
}

/// Creates the `User` object type.
///
/// ```graphql
/// type User {
///   id: ID
///   nombre: String
///   apellidoPaterno: String
///   apellidoMaterno: String
///   rut: String
///   direccion: String
///   celular: String
///   email: String
///   password: String
///   activo: Boolean
///   rol: Rol
/// }
/// ```
pub fn create_user_type() -> Object {
    let id_type = || TypeRef::named(TypeRef::ID);
    let str_type = || TypeRef::named(TypeRef::STRING);

    let fields: [(&str, TypeRef, Getter<User>); 10] = [
        ("id", id_type(), |u| u.id.map(|id| Value::String(id.to_string()))),
        ("nombre", str_type(), |u| string(&u.nombre)),
        ("apellidoPaterno", str_type(), |u| string(&u.apellido_paterno)),
        ("apellidoMaterno", str_type(), |u| string(&u.apellido_materno)),
        ("rut", str_type(), |u| string(&u.rut)),
        ("direccion", str_type(), |u| string(&u.direccion)),
        ("celular", str_type(), |u| string(&u.celular)),
        ("email", str_type(), |u| string(&u.email)),
        ("password", str_type(), |u| string(&u.password)),
        ("activo", TypeRef::named(TypeRef::BOOLEAN), |u| u.activo.map(Value::Boolean)),
    ];

    let user = Object::new(USER_TYPE).description("A user of the veterinary system");
    let user = fields
        .into_iter()
        .fold(user, |obj, (name, type_ref, getter)| {
            obj.field(scalar_field(name, type_ref, getter))
        });

    user.field(
        Field::new("rol", TypeRef::named(ROL_TYPE), |ctx| {
            FieldFuture::new(async move {
                let user = ctx.parent_value.try_downcast_ref::<User>()?;
                Ok(user.rol.clone().map(FieldValue::owned_any))
            })
        })
        .description("Role assigned to the user"),
    )
}

/// Creates the `Rol` object type.
pub fn create_rol_type() -> Object {
    Object::new(ROL_TYPE)
        .description("A role a user can hold")
        .field(scalar_field::<Rol>("id", TypeRef::named(TypeRef::ID), |r| {
            Some(Value::String(r.id.to_string()))
        }))
        .field(scalar_field::<Rol>("nombre", TypeRef::named(TypeRef::STRING), |r| {
            string(&r.nombre)
        }))
        .field(scalar_field::<Rol>("descripcion", TypeRef::named(TypeRef::STRING), |r| {
            string(&r.descripcion)
        }))
}
