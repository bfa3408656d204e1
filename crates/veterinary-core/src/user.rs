use serde::{Deserialize, Serialize};

use crate::id::UserId;

/// A role a user can hold (administrator, veterinarian, receptionist, ...).
///
/// Clients only ever reference a role by id; `nombre` and `descripcion` are
/// filled in by the service that owns the role catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rol {
    pub id: UserId,
    #[serde(default)]
    pub nombre: Option<String>,
    #[serde(default)]
    pub descripcion: Option<String>,
}

impl Rol {
    pub fn new(id: UserId, nombre: impl Into<String>, descripcion: impl Into<String>) -> Self {
        Self {
            id,
            nombre: Some(nombre.into()),
            descripcion: Some(descripcion.into()),
        }
    }

    /// A role carrying only its id, as received from mutation input.
    pub fn reference(id: UserId) -> Self {
        Self {
            id,
            nombre: None,
            descripcion: None,
        }
    }

    pub fn is_reference(&self) -> bool {
        self.nombre.is_none() && self.descripcion.is_none()
    }
}

/// A backend user of the veterinary system.
///
/// `id` is `None` until the user has been persisted.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default)]
    pub id: Option<UserId>,
    #[serde(default)]
    pub nombre: Option<String>,
    #[serde(default)]
    pub apellido_paterno: Option<String>,
    #[serde(default)]
    pub apellido_materno: Option<String>,
    #[serde(default)]
    pub rut: Option<String>,
    #[serde(default)]
    pub direccion: Option<String>,
    #[serde(default)]
    pub celular: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub activo: Option<bool>,
    #[serde(default)]
    pub rol: Option<Rol>,
}

impl User {
    pub fn with_id(mut self, id: UserId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_rol(mut self, rol: Rol) -> Self {
        self.rol = Some(rol);
        self
    }
}
