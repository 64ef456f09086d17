use std::sync::atomic::{AtomicBool, Ordering};

use yansi::Paint;

static SILENT: AtomicBool = AtomicBool::new(false);

pub fn set_silent(silent: bool) {
    SILENT.store(silent, Ordering::Relaxed);
}

fn log_output(msg: String) {
    if !SILENT.load(Ordering::Relaxed) {
        println!("{}", msg);
    }
}

/// Build the shared HTTP client with a versioned user agent.
pub fn build_client() -> reqwest::Client {
    reqwest::Client::builder()
        .user_agent(format!("Prix/{}", env!("CARGO_PKG_VERSION")))
        .build()
        .expect("Failed to create HTTP client")
}

/// Echo the outgoing request as a copy-pasteable curl line.
pub fn log_request(method: &str, url: &str, params: &[(String, String)]) {
    let mut url_for_log = url.to_string();
    if !params.is_empty() {
        let query_string = params
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<String>>()
            .join("&");
        url_for_log = format!("{}?{}", url_for_log, query_string);
    }

    let parts = vec![
        Paint::new("curl").fg(yansi::Color::Green).bold().to_string(),
        format!("-X {}", Paint::new(method).fg(yansi::Color::Yellow).bold()),
        format!("'{}'", Paint::new(&url_for_log).fg(yansi::Color::Cyan)),
    ];
    log_output(format!("Request:\n{}", parts.join(" ")));
}

/// Echo the response body, dimmed so it reads as background noise.
pub fn log_response(body: &serde_json::Value) {
    let json_str = serde_json::to_string(body).unwrap_or_else(|_| format!("{:?}", body));
    let response_str = Paint::new(json_str).rgb(100, 100, 100).to_string();
    log_output(format!("Response:\n{}", response_str));
}
