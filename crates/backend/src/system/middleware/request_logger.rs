use axum::body::to_bytes;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::middleware::Next;
use axum::response::Response;
use chrono::Local;

use crate::shared::format::format_number;

/// Middleware для логирования HTTP запросов
///
/// Выводит в консоль строку вида
/// `время | длительность | размер ответа | статус метод путь`
/// и дублирует ее в tracing (попадает в файл лога).
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    // Читаем тело ответа, чтобы узнать реальный размер
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(b) => b,
        Err(e) => {
            tracing::error!("{} {}: cannot read response body: {}", method, path, e);
            print_line(parts.status, start.elapsed().as_millis(), "error", &method, &path);
            return Response::from_parts(parts, Body::default());
        }
    };

    let size = format_number(bytes.len());
    let duration = start.elapsed().as_millis();
    print_line(parts.status, duration, &size, &method, &path);
    tracing::info!(
        status = parts.status.as_u16(),
        duration_ms = duration as u64,
        size = bytes.len(),
        "{} {}",
        method,
        path
    );

    Response::from_parts(parts, Body::from(bytes))
}

fn print_line(status: StatusCode, duration_ms: u128, size: &str, method: &axum::http::Method, path: &str) {
    println!(
        "\x1b[{}m{}\x1b[0m | {:>5}ms | {:>12} | {} {:>6} {}",
        status_color(status),
        Local::now().format("%H:%M:%S"),
        duration_ms,
        size,
        status.as_u16(),
        method,
        path
    );
}

/// Голубой для 2xx, коричневый для 4xx, красный для 5xx
fn status_color(status: StatusCode) -> &'static str {
    if status.is_server_error() {
        "31"
    } else if status.is_client_error() {
        "33"
    } else {
        "36"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_color() {
        assert_eq!(status_color(StatusCode::OK), "36");
        assert_eq!(status_color(StatusCode::NOT_FOUND), "33");
        assert_eq!(status_color(StatusCode::INTERNAL_SERVER_ERROR), "31");
    }
}
