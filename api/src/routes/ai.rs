//! Assistant activity endpoints.

use actix_web::{HttpResponse, get, web};
use payloads::Endpoint;

use crate::{Faults, fixtures, time::TimeSource};

use super::{APIError, RangeQuery, prepare};

#[tracing::instrument(skip(faults, time_source))]
#[get("/ai/messages-per-day")]
pub async fn messages_per_day(
    query: web::Query<RangeQuery>,
    faults: web::Data<Faults>,
    time_source: web::Data<TimeSource>,
) -> Result<HttpResponse, APIError> {
    let range = prepare(Endpoint::AiMessagesPerDay, &query, &faults, &time_source)?;
    Ok(HttpResponse::Ok().json(fixtures::messages_per_day(&range)))
}

#[tracing::instrument(skip(faults, time_source))]
#[get("/ai/topics")]
pub async fn topics(
    query: web::Query<RangeQuery>,
    faults: web::Data<Faults>,
    time_source: web::Data<TimeSource>,
) -> Result<HttpResponse, APIError> {
    let range = prepare(Endpoint::AiTopics, &query, &faults, &time_source)?;
    Ok(HttpResponse::Ok().json(fixtures::topics(&range)))
}

#[tracing::instrument(skip(faults, time_source))]
#[get("/ai/doctors")]
pub async fn doctors(
    query: web::Query<RangeQuery>,
    faults: web::Data<Faults>,
    time_source: web::Data<TimeSource>,
) -> Result<HttpResponse, APIError> {
    let range = prepare(Endpoint::AiDoctors, &query, &faults, &time_source)?;
    Ok(HttpResponse::Ok().json(fixtures::doctors(&range)))
}

#[tracing::instrument(skip(faults, time_source))]
#[get("/ai/peak-hours")]
pub async fn peak_hours(
    query: web::Query<RangeQuery>,
    faults: web::Data<Faults>,
    time_source: web::Data<TimeSource>,
) -> Result<HttpResponse, APIError> {
    let range = prepare(Endpoint::AiPeakHours, &query, &faults, &time_source)?;
    Ok(HttpResponse::Ok().json(fixtures::peak_hours(&range)))
}
