use crate::roi::{
    format_zar, RoiInputs, DEFAULT_CLOSE_RATE, DEFAULT_LEADS, DEFAULT_LIFT, DEFAULT_PROJECT_VALUE,
};
use actix_web::{HttpRequest, HttpResponse};

#[derive(serde::Serialize, serde::Deserialize, Debug, PartialEq, Eq)]
pub struct RoiResponse {
    pub monthly: u64,
    pub yearly: u64,
    pub monthly_display: String,
    pub yearly_display: String,
}

/// The raw query string is read instead of going through `web::Query`: a typed extractor answers
/// `400` on anything it cannot decode, while the calculator sanitises rather than rejects. A query
/// that cannot be read at all falls back to the default assumptions.
#[tracing::instrument(name = "Estimating ROI", skip(request))]
pub async fn estimate_roi(request: HttpRequest) -> HttpResponse {
    let pairs: Vec<(String, String)> =
        serde_urlencoded::from_str(request.query_string()).unwrap_or_default();
    let parameter = |key: &str, default: &'static str| {
        pairs
            .iter()
            .find(|(k, _)| k == key)
            .map_or(default.to_string(), |(_, v)| v.clone())
    };

    let inputs = RoiInputs::from_raw(
        &parameter("leads", DEFAULT_LEADS),
        &parameter("close", DEFAULT_CLOSE_RATE),
        &parameter("value", DEFAULT_PROJECT_VALUE),
        &parameter("lift", DEFAULT_LIFT),
    );
    let estimate = inputs.estimate();

    HttpResponse::Ok().json(RoiResponse {
        monthly: estimate.rounded_monthly(),
        yearly: estimate.rounded_yearly(),
        monthly_display: format_zar(estimate.rounded_monthly()),
        yearly_display: format_zar(estimate.rounded_yearly()),
    })
}
