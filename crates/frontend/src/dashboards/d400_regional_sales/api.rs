use crate::shared::api_utils::api_url;
use contracts::dashboards::d400_regional_sales::{
    RegionalSalesOptions, RegionalSalesRequest, RegionalSalesView,
};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

const API_BASE: &str = "/api/d400";

/// Получить список регионов и выбор по умолчанию
pub async fn get_options() -> Result<RegionalSalesOptions, String> {
    let url = api_url(&format!("{}/options", API_BASE));

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    parse_response(response).await
}

/// Получить данные дашборда для выбранных регионов
pub async fn get_regional_sales(regions: Vec<String>) -> Result<RegionalSalesView, String> {
    let url = api_url(&format!("{}/regional_sales", API_BASE));
    let body = RegionalSalesRequest { regions };

    let response = Request::post(&url)
        .json(&body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    parse_response(response).await
}

async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    if !response.ok() {
        let status = response.status();
        let message = response.text().await.unwrap_or_default();
        return Err(if message.is_empty() {
            format!("HTTP error: {}", status)
        } else {
            format!("HTTP error: {} ({})", status, message)
        });
    }

    let text = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))?;

    serde_json::from_str::<T>(&text).map_err(|e| format!("Failed to parse response: {}", e))
}
