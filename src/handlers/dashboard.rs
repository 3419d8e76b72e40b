use axum::response::Html;

static DASHBOARD: &str = include_str!("../../static/dashboard.html");

pub async fn dashboard() -> Html<&'static str> {
    Html(DASHBOARD)
}
