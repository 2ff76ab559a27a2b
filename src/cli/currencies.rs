use super::ui;
use crate::core::{Currency, ExchangeRateClient};
use anyhow::Result;
use comfy_table::Cell;

pub fn display_as_table(currencies: &[Currency]) -> String {
    if currencies.is_empty() {
        return ui::style_text("No currencies available.", ui::StyleType::Subtle);
    }

    let mut table = ui::new_styled_table();
    table.set_header(vec![ui::header_cell("Code"), ui::header_cell("Name")]);
    for currency in currencies {
        table.add_row(vec![Cell::new(&currency.code), Cell::new(&currency.name)]);
    }
    table.to_string()
}

/// Fetches the listing and renders it. A failed fetch renders as an empty
/// listing with an error line above it.
pub async fn render(client: &dyn ExchangeRateClient) -> String {
    let mut output = String::new();
    let currencies = match client.list_currencies().await {
        Ok(currencies) => currencies,
        Err(e) => {
            output.push_str(&ui::style_text(
                &format!("Failed to fetch currencies: {e}"),
                ui::StyleType::Error,
            ));
            output.push('\n');
            client.currencies().await
        }
    };

    output.push_str(&ui::style_text("Currencies", ui::StyleType::Title));
    output.push('\n');
    output.push_str(&display_as_table(&currencies));
    output
}

pub async fn run(client: &dyn ExchangeRateClient) -> Result<()> {
    let spinner = ui::new_spinner("Fetching currencies...");
    let output = render(client).await;
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

    #[test]
    fn test_display_as_table() {
        let output = display_as_table(&[
            Currency::new("EUR", "Euro"),
            Currency::new("CHF", "Swiss Franc"),
        ]);
        assert!(output.contains("Code"));
        assert!(output.contains("Swiss Franc"));
        assert!(output.find("EUR").unwrap() < output.find("CHF").unwrap());
    }

    #[tokio::test]
    async fn test_render_failure_shows_empty_listing() {
        console::set_colors_enabled(false);
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/currencies"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let client = FrankfurterClient::new(&mock_server.uri()).unwrap();
        let output = render(&client).await;

        assert!(output.contains("Failed to fetch currencies"));
        assert!(output.contains("No currencies available."));
    }
}
