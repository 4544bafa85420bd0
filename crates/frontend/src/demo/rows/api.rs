use contracts::shared::data_table::FetchArgs;
use gloo_net::http::Request;
use serde_json::Value;

use crate::shared::api_utils::api_url;

/// Путь ресурса строк: параметры запроса становятся сегментами пути
pub fn rows_path(args: &FetchArgs<String>) -> String {
    match args {
        FetchArgs::None => "/api/rows".to_string(),
        FetchArgs::One(first) => format!("/api/rows/{}", urlencoding::encode(first)),
        FetchArgs::Two(first, second) => format!(
            "/api/rows/{}/{}",
            urlencoding::encode(first),
            urlencoding::encode(second)
        ),
    }
}

/// Fetch table rows
pub async fn fetch_rows(args: &FetchArgs<String>) -> Result<Vec<Value>, String> {
    let response = Request::get(&api_url(&rows_path(args)))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch rows: {}", response.status()));
    }

    response
        .json::<Vec<Value>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_path() {
        assert_eq!(rows_path(&FetchArgs::None), "/api/rows");
        assert_eq!(rows_path(&FetchArgs::One("g1".to_string())), "/api/rows/g1");
        assert_eq!(
            rows_path(&FetchArgs::Two("склад 1".to_string(), "2024-01".to_string())),
            "/api/rows/%D1%81%D0%BA%D0%BB%D0%B0%D0%B4%201/2024-01"
        );
    }
}
