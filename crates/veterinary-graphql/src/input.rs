//! Mutation input mapping.
//!
//! `UserInput` is the typed form of the GraphQL `UserInput` input object. The
//! engine validates the argument against the schema first; the resolvers then
//! deserialize it into these structs and map them onto a domain [`User`].
//! The same mapping serves `saveUser` and `updateUser`; only the service call
//! that follows differs.

use serde::Deserialize;
use veterinary_core::{Rol, User, UserId, parse_id};

use crate::error::GraphQLError;

/// A GraphQL `ID` as received from a client.
///
/// `ID` literals may be written as strings or integers, so both forms are
/// accepted and parsed to a numeric identifier on use.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum IdInput {
    Int(i64),
    Text(String),
}

impl IdInput {
    /// Parses the id into its numeric form.
    pub fn parse(&self) -> Result<UserId, GraphQLError> {
        match self {
            Self::Int(id) => Ok(*id),
            Self::Text(raw) => Ok(parse_id(raw)?),
        }
    }
}

impl From<&str> for IdInput {
    fn from(raw: &str) -> Self {
        Self::Text(raw.to_string())
    }
}

/// Input object `RolInput`: a role referenced by id.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RolInput {
    pub id: IdInput,
}

/// Input object `UserInput`.
///
/// Every field is optional; `id` is only meaningful for updates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInput {
    pub id: Option<IdInput>,
    pub nombre: Option<String>,
    pub apellido_paterno: Option<String>,
    pub apellido_materno: Option<String>,
    pub rut: Option<String>,
    pub direccion: Option<String>,
    pub celular: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub activo: Option<bool>,
    pub rol: Option<RolInput>,
}

impl UserInput {
    /// Returns `true` if the input names the user it targets.
    pub fn has_id(&self) -> bool {
        self.id.is_some()
    }

    /// Maps the input onto a domain user.
    ///
    /// Strings and `activo` pass through untouched. `id` and `rol.id` are
    /// parsed to numeric ids; the role is a bare reference for the service
    /// to resolve.
    ///
    /// # Errors
    ///
    /// Returns `GraphQLError::InvalidArgument` if an id is not numeric.
    pub fn into_user(self) -> Result<User, GraphQLError> {
        let id = self.id.as_ref().map(IdInput::parse).transpose()?;
        let rol = self
            .rol
            .as_ref()
            .map(|rol| rol.id.parse().map(Rol::reference))
            .transpose()?;

        Ok(User {
            id,
            nombre: self.nombre,
            apellido_paterno: self.apellido_paterno,
            apellido_materno: self.apellido_materno,
            rut: self.rut,
            direccion: self.direccion,
            celular: self.celular,
            email: self.email,
            password: self.password,
            activo: self.activo,
            rol,
        })
    }
}
