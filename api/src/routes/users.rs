//! User population endpoints.

use actix_web::{HttpResponse, get, web};
use payloads::Endpoint;

use crate::{Faults, fixtures, time::TimeSource};

use super::{APIError, RangeQuery, prepare};

#[tracing::instrument(skip(faults, time_source))]
#[get("/users/stats")]
pub async fn stats(
    query: web::Query<RangeQuery>,
    faults: web::Data<Faults>,
    time_source: web::Data<TimeSource>,
) -> Result<HttpResponse, APIError> {
    let range = prepare(Endpoint::UsersStats, &query, &faults, &time_source)?;
    Ok(HttpResponse::Ok().json(fixtures::users_stats(&range)))
}

#[tracing::instrument(skip(faults, time_source))]
#[get("/users/active")]
pub async fn active(
    query: web::Query<RangeQuery>,
    faults: web::Data<Faults>,
    time_source: web::Data<TimeSource>,
) -> Result<HttpResponse, APIError> {
    let range = prepare(Endpoint::UsersActive, &query, &faults, &time_source)?;
    Ok(HttpResponse::Ok().json(fixtures::active_users(&range)))
}

#[tracing::instrument(skip(faults, time_source))]
#[get("/users/dau")]
pub async fn dau(
    query: web::Query<RangeQuery>,
    faults: web::Data<Faults>,
    time_source: web::Data<TimeSource>,
) -> Result<HttpResponse, APIError> {
    let range = prepare(Endpoint::UsersDau, &query, &faults, &time_source)?;
    Ok(HttpResponse::Ok().json(fixtures::daily_active(&range)))
}

#[tracing::instrument(skip(faults, time_source))]
#[get("/users/mau")]
pub async fn mau(
    query: web::Query<RangeQuery>,
    faults: web::Data<Faults>,
    time_source: web::Data<TimeSource>,
) -> Result<HttpResponse, APIError> {
    let range = prepare(Endpoint::UsersMau, &query, &faults, &time_source)?;
    Ok(HttpResponse::Ok().json(fixtures::monthly_active(&range)))
}

#[tracing::instrument(skip(faults, time_source))]
#[get("/users/gender")]
pub async fn gender(
    query: web::Query<RangeQuery>,
    faults: web::Data<Faults>,
    time_source: web::Data<TimeSource>,
) -> Result<HttpResponse, APIError> {
    let range = prepare(Endpoint::UsersGender, &query, &faults, &time_source)?;
    Ok(HttpResponse::Ok().json(fixtures::genders(&range)))
}

#[tracing::instrument(skip(faults, time_source))]
#[get("/users/language")]
pub async fn language(
    query: web::Query<RangeQuery>,
    faults: web::Data<Faults>,
    time_source: web::Data<TimeSource>,
) -> Result<HttpResponse, APIError> {
    let range = prepare(Endpoint::UsersLanguage, &query, &faults, &time_source)?;
    Ok(HttpResponse::Ok().json(fixtures::languages(&range)))
}

#[tracing::instrument(skip(faults, time_source))]
#[get("/users/regions")]
pub async fn regions(
    query: web::Query<RangeQuery>,
    faults: web::Data<Faults>,
    time_source: web::Data<TimeSource>,
) -> Result<HttpResponse, APIError> {
    let range = prepare(Endpoint::UsersRegions, &query, &faults, &time_source)?;
    Ok(HttpResponse::Ok().json(fixtures::regions(&range)))
}

#[tracing::instrument(skip(faults, time_source))]
#[get("/users/age-groups")]
pub async fn age_groups(
    query: web::Query<RangeQuery>,
    faults: web::Data<Faults>,
    time_source: web::Data<TimeSource>,
) -> Result<HttpResponse, APIError> {
    let range = prepare(Endpoint::UsersAgeGroups, &query, &faults, &time_source)?;
    Ok(HttpResponse::Ok().json(fixtures::age_groups(&range)))
}
