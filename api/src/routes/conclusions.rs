use actix_web::{HttpResponse, get, web};
use payloads::Endpoint;

use crate::{Faults, fixtures, time::TimeSource};

use super::{APIError, RangeQuery, prepare};

#[tracing::instrument(skip(faults, time_source))]
#[get("/conclusions/count")]
pub async fn count(
    query: web::Query<RangeQuery>,
    faults: web::Data<Faults>,
    time_source: web::Data<TimeSource>,
) -> Result<HttpResponse, APIError> {
    let range = prepare(Endpoint::ConclusionsCount, &query, &faults, &time_source)?;
    Ok(HttpResponse::Ok().json(fixtures::conclusions_count(&range)))
}

#[tracing::instrument(skip(faults, time_source))]
#[get("/conclusions/timeseries")]
pub async fn timeseries(
    query: web::Query<RangeQuery>,
    faults: web::Data<Faults>,
    time_source: web::Data<TimeSource>,
) -> Result<HttpResponse, APIError> {
    let range = prepare(Endpoint::ConclusionsTimeseries, &query, &faults, &time_source)?;
    Ok(HttpResponse::Ok().json(fixtures::conclusions_timeseries(&range)))
}
