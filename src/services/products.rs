use chrono::{NaiveDateTime, Utc};
use serde::Serialize;

use crate::domain::product::{Product, ProductStatus, utc_timestamp};
use crate::forms::products::{PasswordForm, ProductForm};
use crate::repository::{ProductReader, ProductWriter};
use crate::services::{ServiceError, ServiceResult};

/// Product as exposed by read endpoints, without the delete password.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProductView {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub manager: String,
    pub status: ProductStatus,
    #[serde(serialize_with = "utc_timestamp::serialize")]
    pub created_at: NaiveDateTime,
    #[serde(serialize_with = "utc_timestamp::serialize")]
    pub updated_at: NaiveDateTime,
}

impl From<Product> for ProductView {
    fn from(product: Product) -> Self {
        let Product {
            id,
            name,
            description,
            manager,
            status,
            created_at,
            updated_at,
            ..
        } = product;

        Self {
            id,
            name,
            description,
            manager,
            status,
            created_at,
            updated_at,
        }
    }
}

/// Parses a path identifier.
///
/// Only the canonical decimal form names a product, so `+1`, `01` and ` 1`
/// are rejected. Identifiers that cannot name a stored product are reported
/// as `NotFound` rather than as a bad request.
pub fn parse_product_id(raw: &str) -> ServiceResult<i32> {
    match raw.parse::<i32>() {
        Ok(id) if id.to_string() == raw => Ok(id),
        _ => Err(ServiceError::NotFound),
    }
}

/// Creates a new product and returns the stored record.
pub fn create_product<R>(repo: &R, form: ProductForm) -> ServiceResult<Product>
where
    R: ProductWriter + ?Sized,
{
    let new_product = form
        .into_new_product()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_product(&new_product).map_err(ServiceError::from)
}

/// Lists every product, newest first.
pub fn list_products<R>(repo: &R) -> ServiceResult<Vec<ProductView>>
where
    R: ProductReader + ?Sized,
{
    let products = repo.list_products().map_err(ServiceError::from)?;
    Ok(products.into_iter().map(ProductView::from).collect())
}

/// Loads a single product by its path identifier.
pub fn get_product<R>(repo: &R, product_id: &str) -> ServiceResult<ProductView>
where
    R: ProductReader + ?Sized,
{
    let product_id = parse_product_id(product_id)?;

    repo.get_product_by_id(product_id)
        .map_err(ServiceError::from)?
        .map(ProductView::from)
        .ok_or(ServiceError::NotFound)
}

/// Replaces every field of an existing product.
pub fn update_product<R>(repo: &R, product_id: &str, form: ProductForm) -> ServiceResult<Product>
where
    R: ProductWriter + ?Sized,
{
    let update = form
        .into_update_product(Utc::now().naive_utc())
        .map_err(|err| ServiceError::Form(err.to_string()))?;
    let product_id = parse_product_id(product_id)?;

    repo.update_product(product_id, &update)
        .map_err(ServiceError::from)
}

/// Deletes a product when the supplied password matches the stored one.
pub fn delete_product<R>(repo: &R, product_id: &str, form: PasswordForm) -> ServiceResult<()>
where
    R: ProductReader + ProductWriter + ?Sized,
{
    let password = form
        .into_password()
        .map_err(|err| ServiceError::Form(err.to_string()))?;
    let product_id = parse_product_id(product_id)?;

    let product = repo
        .get_product_by_id(product_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)?;

    // Plain equality against the stored plaintext value.
    if product.password != password {
        return Err(ServiceError::PasswordMismatch);
    }

    repo.delete_product(product_id).map_err(ServiceError::from)
}
