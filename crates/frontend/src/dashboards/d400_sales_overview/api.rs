use contracts::dashboards::d400_sales_overview::SalesOverview;
use gloo_net::http::Request;

const API_BASE: &str = "/api/d400";

/// Получить сводку продаж
pub async fn get_sales_overview() -> Result<SalesOverview, String> {
    let url = format!("{}/sales_overview", API_BASE);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: SalesOverview = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(data)
}
