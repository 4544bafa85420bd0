//! Утилиты связи с backend и чтения адресной строки
//!
//! Конфигурационных файлов у клиента нет: адрес API и начальные параметры
//! страницы берутся из `window.location`.

use serde::de::DeserializeOwned;

/// Порт backend-сервера
const BACKEND_PORT: u16 = 3000;

/// Базовый адрес API, например `http://localhost:3000`
///
/// Пустая строка, если `window` недоступен.
pub fn api_base() -> String {
    let Some(location) = web_sys::window().map(|w| w.location()) else {
        return String::new();
    };
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location.hostname().unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, BACKEND_PORT)
}

/// Полный адрес API по пути (путь начинается с "/api/")
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Разбирает строку запроса (`?a=1&b=2`); при ошибке - значение по умолчанию
pub fn parse_query<T: DeserializeOwned + Default>(search: &str) -> T {
    serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default()
}

/// Параметры текущей адресной строки
pub fn query_params<T: DeserializeOwned + Default>() -> T {
    let search = web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    parse_query(&search)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Default, Deserialize, PartialEq)]
    struct Query {
        p1: Option<String>,
        #[serde(default)]
        two: bool,
    }

    #[test]
    fn test_parse_query() {
        let query: Query = parse_query("?p1=group-1&two=true");
        assert_eq!(query.p1.as_deref(), Some("group-1"));
        assert!(query.two);
    }

    #[test]
    fn test_parse_query_empty() {
        assert_eq!(parse_query::<Query>(""), Query::default());
    }
}
