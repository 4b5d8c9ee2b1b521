pub mod ai;
pub mod conclusions;
pub mod ratings;
pub mod users;

use actix_web::{
    HttpResponse, Responder, ResponseError, body::BoxBody,
    dev::HttpServiceFactory, get, web,
};
use jiff::civil::Date;
use payloads::{DateRange, Endpoint, RangeKey};
use serde::Deserialize;

use crate::{Faults, time::TimeSource};

pub fn api_services() -> impl HttpServiceFactory {
    web::scope("/api").service(health_check).service(
        web::scope("/analytics")
            .service(users::stats)
            .service(users::active)
            .service(users::dau)
            .service(users::mau)
            .service(users::gender)
            .service(users::language)
            .service(users::regions)
            .service(users::age_groups)
            .service(ratings::summary)
            .service(ratings::histogram)
            .service(ratings::trend)
            .service(ratings::top_users)
            .service(ai::messages_per_day)
            .service(ai::topics)
            .service(ai::doctors)
            .service(ai::peak_hours)
            .service(conclusions::count)
            .service(conclusions::timeseries),
    )
}

#[get("/health_check")]
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().body("healthy")
}

/// Query accepted by every analytics endpoint. The cache-busting `_`
/// parameter is ignored.
#[derive(Debug, Deserialize)]
pub struct RangeQuery {
    pub date_from: Option<Date>,
    pub date_to: Option<Date>,
}

impl RangeQuery {
    /// Missing bounds default to the 7 days ending today.
    fn resolve(&self, today: Date) -> Result<DateRange, APIError> {
        let default = RangeKey::SevenDays.resolve(today);
        let to = self.date_to.unwrap_or(default.to);
        let from = match self.date_from {
            Some(from) => from,
            None => RangeKey::SevenDays.resolve(to).from,
        };
        if from > to {
            return Err(APIError::BadRequest(anyhow::anyhow!(
                "date_from {from} is after date_to {to}"
            )));
        }
        Ok(DateRange { from, to })
    }
}

/// Common prologue for an analytics handler: apply fault injection, then
/// resolve the requested range.
fn prepare(
    endpoint: Endpoint,
    query: &RangeQuery,
    faults: &Faults,
    time_source: &TimeSource,
) -> Result<DateRange, APIError> {
    if faults.is_failing(endpoint) {
        return Err(APIError::Injected(endpoint));
    }
    query.resolve(time_source.today())
}

#[derive(Debug, thiserror::Error)]
pub enum APIError {
    #[error("Bad request")]
    BadRequest(#[source] anyhow::Error),
    #[error("Injected failure for {0}")]
    Injected(Endpoint),
}

impl ResponseError for APIError {
    fn error_response(&self) -> HttpResponse<BoxBody> {
        match self {
            Self::BadRequest(e) => {
                HttpResponse::BadRequest().body(format!("{self}: {e}"))
            }
            Self::Injected(endpoint) => {
                tracing::warn!(%endpoint, "answering with injected failure");
                HttpResponse::InternalServerError().body(self.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;

    #[test]
    fn missing_bounds_default_to_a_week() {
        let query = RangeQuery {
            date_from: None,
            date_to: None,
        };
        let range = query.resolve(date(2024, 1, 7)).unwrap();
        assert_eq!(range.from, date(2024, 1, 1));
        assert_eq!(range.to, date(2024, 1, 7));
    }

    #[test]
    fn only_date_to_anchors_the_week() {
        let query = RangeQuery {
            date_from: None,
            date_to: Some(date(2024, 3, 10)),
        };
        let range = query.resolve(date(2025, 1, 1)).unwrap();
        assert_eq!(range.from, date(2024, 3, 4));
    }

    #[test]
    fn inverted_range_is_rejected() {
        let query = RangeQuery {
            date_from: Some(date(2024, 2, 1)),
            date_to: Some(date(2024, 1, 1)),
        };
        assert!(matches!(
            query.resolve(date(2024, 2, 1)),
            Err(APIError::BadRequest(_))
        ));
    }
}
