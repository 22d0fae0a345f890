use actix_web::{http::header, web, HttpResponse};
use log::info;

use crate::{
    api::{controller_context::DatabaseContext, server_today},
    config::db::Pool,
    constants,
    error::ServiceError,
    models::{
        client::{CreateClientDTO, UpdateClientDTO},
        response::ResponseBody,
    },
    services::client_service,
};

// GET api/client
pub async fn find_all(pool: web::Data<Pool>) -> Result<HttpResponse, ServiceError> {
    info!("Listing clients");
    let clients = DatabaseContext::new(pool)
        .run_query(client_service::list_clients_reader())
        .await?;
    Ok(HttpResponse::Ok().json(ResponseBody::new(constants::MESSAGE_OK, clients)))
}

// GET api/client/{id}
pub async fn find_by_id(
    id: web::Path<i32>,
    pool: web::Data<Pool>,
) -> Result<HttpResponse, ServiceError> {
    let id = id.into_inner();
    info!("Fetching client {}", id);
    let client = DatabaseContext::new(pool)
        .run_query(client_service::find_client_by_id_reader(id))
        .await?;
    Ok(HttpResponse::Ok().json(ResponseBody::new(constants::MESSAGE_OK, client)))
}

// POST api/client
pub async fn insert(
    new_client: web::Json<CreateClientDTO>,
    pool: web::Data<Pool>,
) -> Result<HttpResponse, ServiceError> {
    info!("Creating client");
    let reader =
        client_service::create_client_reader(new_client.into_inner(), server_today())?;
    let created = DatabaseContext::new(pool).run_query(reader).await?;

    Ok(HttpResponse::Created()
        .insert_header((
            header::LOCATION,
            format!("{}/{}", constants::CLIENT_SCOPE, created.id),
        ))
        .json(ResponseBody::new(constants::MESSAGE_CREATED, created)))
}

// PUT api/client/{id}
pub async fn update(
    id: web::Path<i32>,
    updated_client: web::Json<UpdateClientDTO>,
    pool: web::Data<Pool>,
) -> Result<HttpResponse, ServiceError> {
    let id = id.into_inner();
    info!("Updating client {}", id);
    let reader = client_service::update_client_reader(
        id,
        updated_client.into_inner(),
        server_today(),
    )?;
    DatabaseContext::new(pool).run_query(reader).await?;
    Ok(HttpResponse::NoContent().finish())
}

// DELETE api/client/{id}
pub async fn delete(
    id: web::Path<i32>,
    pool: web::Data<Pool>,
) -> Result<HttpResponse, ServiceError> {
    let id = id.into_inner();
    info!("Deleting client {}", id);
    DatabaseContext::new(pool)
        .run_query(client_service::delete_client_reader(id))
        .await?;
    Ok(HttpResponse::NoContent().finish())
}
