use super::ui;
use crate::core::ExchangeRateClient;
use anyhow::Result;
use chrono::NaiveDate;

pub async fn render(
    client: &dyn ExchangeRateClient,
    date1: NaiveDate,
    date2: NaiveDate,
    base: &str,
    target: &str,
) -> String {
    let (base, target) = (base.to_uppercase(), target.to_uppercase());
    match client.rate_difference(date1, date2, &base, &target).await {
        Ok(difference) => format!(
            "{base}/{target} {date1} vs {date2}: {}",
            ui::signed_text(difference, 4)
        ),
        Err(e) => ui::style_text(
            &format!("Failed to fetch exchange rate difference: {e}"),
            ui::StyleType::Error,
        ),
    }
}

pub async fn run(
    client: &dyn ExchangeRateClient,
    date1: NaiveDate,
    date2: NaiveDate,
    base: &str,
    target: &str,
) -> Result<()> {
    let spinner = ui::new_spinner("Fetching historical rates...");
    let output = render(client, date1, date2, base, target).await;
    spinner.finish_and_clear();

    println!("{output}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::FrankfurterClient;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_render_difference() {
        console::set_colors_enabled(false);
        let mock_server = MockServer::start().await;
        for (date, rate) in [("2024-03-01", 1.0), ("2024-02-01", 1.25)] {
            Mock::given(method("GET"))
                .and(path(format!("/{date}")))
                .respond_with(
                    ResponseTemplate::new(200)
                        .set_body_string(format!(r#"{{"rates": {{"GBP": {rate}}}}}"#)),
                )
                .mount(&mock_server)
                .await;
        }

        let client = FrankfurterClient::new(&mock_server.uri()).unwrap();
        let date1 = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let date2 = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();

        let output = render(&client, date1, date2, "usd", "gbp").await;
        assert_eq!(output, "USD/GBP 2024-03-01 vs 2024-02-01: -0.2500");
    }

    #[tokio::test]
    async fn test_render_failure() {
        console::set_colors_enabled(false);
        let mock_server = MockServer::start().await;

        let client = FrankfurterClient::new(&mock_server.uri()).unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();

        let output = render(&client, date, date, "USD", "GBP").await;
        assert!(output.starts_with("Failed to fetch exchange rate difference"));
    }
}
