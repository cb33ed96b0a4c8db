use std::borrow::Cow;

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer};
use thiserror::Error;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::domain::product::{NewProduct, ProductStatus, UnknownProductStatus, UpdateProduct};

/// Result type returned by the product form helpers.
pub type ProductFormResult<T> = Result<T, ProductFormError>;

/// Errors that can occur while processing product payloads.
#[derive(Debug, Error)]
pub enum ProductFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// Only reachable if `validate_status` and `ProductStatus::from_str` disagree.
    #[error(transparent)]
    Status(#[from] UnknownProductStatus),
    /// Only reachable if a `required` rule is dropped from a field.
    #[error("missing field `{0}`")]
    MissingField(&'static str),
}

/// JSON body accepted when creating or replacing a product.
///
/// Fields are optional at the serde level so that a missing field is reported
/// by validation alongside every other problem instead of aborting parsing.
#[derive(Debug, Default, Clone, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct ProductForm {
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
    #[validate(required, length(min = 1))]
    pub description: Option<String>,
    #[validate(required, length(min = 1))]
    pub manager: Option<String>,
    #[validate(required, length(min = 1))]
    pub password: Option<String>,
    /// Optional sales label, `FOR_SALE` when omitted. An explicit `null` is rejected.
    #[serde(default, deserialize_with = "non_null_string")]
    #[validate(custom(function = "validate_status"))]
    pub status: Option<String>,
}

/// Validated contents of a [`ProductForm`].
struct ProductFields {
    name: String,
    description: String,
    manager: String,
    password: String,
    status: ProductStatus,
}

impl ProductForm {
    /// Validates the payload into a domain `NewProduct`.
    pub fn into_new_product(self) -> ProductFormResult<NewProduct> {
        let fields = self.into_fields()?;

        Ok(
            NewProduct::new(fields.name, fields.description, fields.manager, fields.password)
                .with_status(fields.status),
        )
    }

    /// Validates the payload into a full-replacement `UpdateProduct`.
    pub fn into_update_product(
        self,
        updated_at: NaiveDateTime,
    ) -> ProductFormResult<UpdateProduct> {
        let fields = self.into_fields()?;

        Ok(UpdateProduct {
            name: fields.name,
            description: fields.description,
            manager: fields.manager,
            password: fields.password,
            status: fields.status,
            updated_at,
        })
    }

    fn into_fields(self) -> ProductFormResult<ProductFields> {
        self.validate()?;

        let status = match self.status {
            Some(value) => value.parse()?,
            None => ProductStatus::default(),
        };

        Ok(ProductFields {
            name: self.name.ok_or(ProductFormError::MissingField("name"))?,
            description: self
                .description
                .ok_or(ProductFormError::MissingField("description"))?,
            manager: self.manager.ok_or(ProductFormError::MissingField("manager"))?,
            password: self
                .password
                .ok_or(ProductFormError::MissingField("password"))?,
            status,
        })
    }
}

/// JSON body accepted when deleting a product.
#[derive(Debug, Default, Clone, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct PasswordForm {
    #[validate(required, length(min = 1))]
    pub password: Option<String>,
}

impl PasswordForm {
    /// Validates the payload and returns the supplied password.
    pub fn into_password(self) -> ProductFormResult<String> {
        self.validate()?;
        self.password
            .ok_or(ProductFormError::MissingField("password"))
    }
}

/// Deserializes a present key as a string, so `null` fails while `#[serde(default)]`
/// still covers an absent key.
fn non_null_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(Some)
}

fn validate_status(value: &str) -> Result<(), ValidationError> {
    match value.parse::<ProductStatus>() {
        Ok(_) => Ok(()),
        Err(_) => Err(ValidationError::new("status").with_message(Cow::Borrowed(
            "status must be one of FOR_SALE, SOLD_OUT",
        ))),
    }
}
