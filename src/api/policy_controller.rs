use actix_web::{http::header, web, HttpResponse};
use log::info;

use crate::{
    api::{controller_context::DatabaseContext, server_today},
    config::db::Pool,
    constants,
    error::ServiceError,
    models::{
        policy::{CreatePolicyDTO, UpdatePolicyDTO},
        response::ResponseBody,
    },
    services::policy_service,
};

// GET api/policy
pub async fn find_all(pool: web::Data<Pool>) -> Result<HttpResponse, ServiceError> {
    info!("Listing policies");
    let policies = DatabaseContext::new(pool)
        .run_query(policy_service::list_policies_reader())
        .await?;
    Ok(HttpResponse::Ok().json(ResponseBody::new(constants::MESSAGE_OK, policies)))
}

// GET api/policy/{id}
pub async fn find_by_id(
    id: web::Path<i32>,
    pool: web::Data<Pool>,
) -> Result<HttpResponse, ServiceError> {
    let id = id.into_inner();
    info!("Fetching policy {}", id);
    let policy = DatabaseContext::new(pool)
        .run_query(policy_service::find_policy_by_id_reader(id))
        .await?;
    Ok(HttpResponse::Ok().json(ResponseBody::new(constants::MESSAGE_OK, policy)))
}

// POST api/policy
pub async fn insert(
    new_policy: web::Json<CreatePolicyDTO>,
    pool: web::Data<Pool>,
) -> Result<HttpResponse, ServiceError> {
    info!("Creating policy");
    let reader =
        policy_service::create_policy_reader(new_policy.into_inner(), server_today())?;
    let created = DatabaseContext::new(pool).run_query(reader).await?;

    Ok(HttpResponse::Created()
        .insert_header((
            header::LOCATION,
            format!("{}/{}", constants::POLICY_SCOPE, created.id),
        ))
        .json(ResponseBody::new(constants::MESSAGE_CREATED, created)))
}

// PUT api/policy/{id}
pub async fn update(
    id: web::Path<i32>,
    updated_policy: web::Json<UpdatePolicyDTO>,
    pool: web::Data<Pool>,
) -> Result<HttpResponse, ServiceError> {
    let id = id.into_inner();
    info!("Updating policy {}", id);
    let reader = policy_service::update_policy_reader(
        id,
        updated_policy.into_inner(),
        server_today(),
    )?;
    DatabaseContext::new(pool).run_query(reader).await?;
    Ok(HttpResponse::NoContent().finish())
}

// DELETE api/policy/{id}
pub async fn delete(
    id: web::Path<i32>,
    pool: web::Data<Pool>,
) -> Result<HttpResponse, ServiceError> {
    let id = id.into_inner();
    info!("Deleting policy {}", id);
    DatabaseContext::new(pool)
        .run_query(policy_service::delete_policy_reader(id))
        .await?;
    Ok(HttpResponse::NoContent().finish())
}
