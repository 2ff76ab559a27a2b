use super::ui;
use crate::core::ExchangeRateClient;
use anyhow::Result;
use tracing::debug;

/// Refreshes the listing, resolves both codes against it and converts.
/// Any failure is rendered as an error line instead of a number.
pub async fn render(client: &dyn ExchangeRateClient, amount: &str, from: &str, to: &str) -> String {
    if let Err(e) = client.list_currencies().await {
        debug!(error = %e, "Continuing with the current listing");
    }

    let (Some(source), Some(target)) = (
        client.find_currency(from).await,
        client.find_currency(to).await,
    ) else {
        return ui::style_text(
            &format!("Conversion failed: unknown currency pair {from}/{to}"),
            ui::StyleType::Error,
        );
    };

    match client.convert(amount, &source, &target).await {
        Ok(converted) => format!(
            "{} {} = {} {}",
            amount.trim(),
            source.code,
            ui::style_text(&format!("{converted:.2}"), ui::StyleType::Value),
            target.code
        ),
        Err(e) => ui::style_text(&format!("Conversion failed: {e}"), ui::StyleType::Error),
    }
}

pub async fn run(client: &dyn ExchangeRateClient, amount: &str, from: &str, to: &str) -> Result<()> {
    let spinner = ui::new_spinner("Converting...");
    let output = render(client, amount, from, to).await;
    spinner.finish_and_clear();

    println!("{output}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::FrankfurterClient;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn mock_server_with_currencies() -> MockServer {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/currencies"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(r#"{"EUR": "Euro", "USD": "United States Dollar"}"#),
            )
            .mount(&mock_server)
            .await;
        mock_server
    }

    #[tokio::test]
    async fn test_render_successful_conversion() {
        console::set_colors_enabled(false);
        let mock_server = mock_server_with_currencies().await;
        Mock::given(method("GET"))
            .and(path("/latest"))
            .and(query_param("from", "EUR"))
            .and(query_param("to", "USD"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"rates": {"USD": 1.5}}"#))
            .mount(&mock_server)
            .await;

        let client = FrankfurterClient::new(&mock_server.uri()).unwrap();
        let output = render(&client, "2", "eur", "usd").await;
        assert_eq!(output, "2 EUR = 3.00 USD");
    }

    #[tokio::test]
    async fn test_render_unknown_currency() {
        console::set_colors_enabled(false);
        let mock_server = mock_server_with_currencies().await;

        let client = FrankfurterClient::new(&mock_server.uri()).unwrap();
        let output = render(&client, "2", "EUR", "XYZ").await;
        assert_eq!(output, "Conversion failed: unknown currency pair EUR/XYZ");
    }

    #[tokio::test]
    async fn test_render_upstream_error() {
        console::set_colors_enabled(false);
        let mock_server = mock_server_with_currencies().await;
        Mock::given(method("GET"))
            .and(path("/latest"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"error": "not found"}"#))
            .mount(&mock_server)
            .await;

        let client = FrankfurterClient::new(&mock_server.uri()).unwrap();
        let output = render(&client, "2", "EUR", "USD").await;
        assert_eq!(output, "Conversion failed: Upstream error: not found");
    }
}
