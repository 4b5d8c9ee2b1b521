use actix_web::{HttpResponse, get, web};
use payloads::Endpoint;

use crate::{Faults, fixtures, time::TimeSource};

use super::{APIError, RangeQuery, prepare};

#[tracing::instrument(skip(faults, time_source))]
#[get("/ratings/summary")]
pub async fn summary(
    query: web::Query<RangeQuery>,
    faults: web::Data<Faults>,
    time_source: web::Data<TimeSource>,
) -> Result<HttpResponse, APIError> {
    let range = prepare(Endpoint::RatingsSummary, &query, &faults, &time_source)?;
    Ok(HttpResponse::Ok().json(fixtures::rating_summary(&range)))
}

#[tracing::instrument(skip(faults, time_source))]
#[get("/ratings/histogram")]
pub async fn histogram(
    query: web::Query<RangeQuery>,
    faults: web::Data<Faults>,
    time_source: web::Data<TimeSource>,
) -> Result<HttpResponse, APIError> {
    let range = prepare(Endpoint::RatingsHistogram, &query, &faults, &time_source)?;
    Ok(HttpResponse::Ok().json(fixtures::rating_histogram(&range)))
}

#[tracing::instrument(skip(faults, time_source))]
#[get("/ratings/trend")]
pub async fn trend(
    query: web::Query<RangeQuery>,
    faults: web::Data<Faults>,
    time_source: web::Data<TimeSource>,
) -> Result<HttpResponse, APIError> {
    let range = prepare(Endpoint::RatingsTrend, &query, &faults, &time_source)?;
    Ok(HttpResponse::Ok().json(fixtures::rating_trend(&range)))
}

#[tracing::instrument(skip(faults, time_source))]
#[get("/ratings/top-users")]
pub async fn top_users(
    query: web::Query<RangeQuery>,
    faults: web::Data<Faults>,
    time_source: web::Data<TimeSource>,
) -> Result<HttpResponse, APIError> {
    let range = prepare(Endpoint::RatingsTopUsers, &query, &faults, &time_source)?;
    Ok(HttpResponse::Ok().json(fixtures::top_users(&range)))
}
