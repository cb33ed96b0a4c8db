use actix_web::http::StatusCode;
use actix_web::{Responder, delete, get, post, put, web};

use crate::forms::products::{PasswordForm, ProductForm};
use crate::repository::DieselRepository;
use crate::routes::{acknowledge, respond, run_blocking, service_error_response};
use crate::services::products;

#[post("/products")]
pub async fn add_product(
    repo: web::Data<DieselRepository>,
    form: web::Json<ProductForm>,
) -> impl Responder {
    let form = form.into_inner();

    match run_blocking(move || products::create_product(repo.get_ref(), form)).await {
        Ok(product) => {
            log::info!("Created product {}", product.id);
            respond(StatusCode::CREATED, "Product created.", product)
        }
        Err(err) => service_error_response(err, "create product"),
    }
}

#[get("/products")]
pub async fn show_products(repo: web::Data<DieselRepository>) -> impl Responder {
    match run_blocking(move || products::list_products(repo.get_ref())).await {
        Ok(items) => respond(StatusCode::OK, "Products loaded.", items),
        Err(err) => service_error_response(err, "list products"),
    }
}

#[get("/products/{product_id}")]
pub async fn show_product(
    path: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let product_id = path.into_inner();
    let lookup_id = product_id.clone();

    match run_blocking(move || products::get_product(repo.get_ref(), &lookup_id)).await {
        Ok(product) => respond(StatusCode::OK, "Product loaded.", product),
        Err(err) => service_error_response(err, &format!("load product {product_id}")),
    }
}

#[put("/products/{product_id}")]
pub async fn replace_product(
    path: web::Path<String>,
    repo: web::Data<DieselRepository>,
    form: web::Json<ProductForm>,
) -> impl Responder {
    let product_id = path.into_inner();
    let target_id = product_id.clone();
    let form = form.into_inner();

    match run_blocking(move || products::update_product(repo.get_ref(), &target_id, form)).await {
        Ok(product) => {
            log::info!("Updated product {}", product.id);
            respond(StatusCode::OK, "Product updated.", product)
        }
        Err(err) => service_error_response(err, &format!("update product {product_id}")),
    }
}

#[delete("/products/{product_id}")]
pub async fn remove_product(
    path: web::Path<String>,
    repo: web::Data<DieselRepository>,
    form: web::Json<PasswordForm>,
) -> impl Responder {
    let product_id = path.into_inner();
    let target_id = product_id.clone();
    let form = form.into_inner();

    match run_blocking(move || products::delete_product(repo.get_ref(), &target_id, form)).await {
        Ok(()) => {
            log::info!("Deleted product {product_id}");
            acknowledge(StatusCode::OK, "Product deleted.")
        }
        Err(err) => service_error_response(err, &format!("delete product {product_id}")),
    }
}
