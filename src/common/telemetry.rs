// src/common/telemetry.rs

use std::time::Duration;

use serde_json::json;

use crate::common::error::AppError;

/// Reporta uma falha inesperada ao coletor externo configurado em
/// `TELEMETRY_DSN`. O envio é best-effort: nenhuma falha aqui altera o
/// desfecho do comando — sem DSN configurado, simplesmente não envia.
pub async fn report(err: &AppError) {
    let Ok(dsn) = std::env::var("TELEMETRY_DSN") else {
        return;
    };

    let payload = json!({
        "level": "error",
        "message": err.to_string(),
        "detail": format!("{err:?}"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    let Ok(client) = reqwest::Client::builder()
        .timeout(Duration::from_secs(3))
        .build()
    else {
        return;
    };

    if let Err(e) = client.post(&dsn).json(&payload).send().await {
        tracing::debug!("Falha ao reportar erro para a telemetria: {e}");
    }
}
