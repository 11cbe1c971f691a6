// ═══════════════════════════════════════════════════════════════════
// Provider Tests — CoinGecko construction, response parsing,
// offline error classification
// ═══════════════════════════════════════════════════════════════════

use criptonautas_core::errors::CoreError;
use criptonautas_core::models::holding::FailureKind;
use criptonautas_core::models::settings::Settings;
use criptonautas_core::providers::coingecko::{extract_price, CoinGeckoProvider};
use criptonautas_core::providers::traits::PriceProvider;

fn settings_with_url(url: &str) -> Settings {
    Settings {
        api_base_url: url.to_string(),
        request_timeout_secs: 5,
        ..Settings::default()
    }
}

// ═══════════════════════════════════════════════════════════════════
// Construction
// ═══════════════════════════════════════════════════════════════════

mod construction {
    use super::*;

    #[test]
    fn default_uses_public_api_and_brl() {
        let provider = CoinGeckoProvider::default();
        assert_eq!(provider.name(), "CoinGecko");
        assert_eq!(provider.base_url(), "https://api.coingecko.com/api/v3");
        assert_eq!(provider.reference_currency(), "brl");
    }

    #[test]
    fn trailing_slash_trimmed_and_currency_lowercased() {
        let settings = Settings {
            reference_currency: "USD".into(),
            ..settings_with_url("http://localhost:8080/api/v3/")
        };
        let provider = CoinGeckoProvider::new(&settings);
        assert_eq!(provider.base_url(), "http://localhost:8080/api/v3");
        assert_eq!(provider.reference_currency(), "usd");
    }
}

// ═══════════════════════════════════════════════════════════════════
// Response parsing
// ═══════════════════════════════════════════════════════════════════

mod parsing {
    use super::*;

    #[test]
    fn extracts_price() {
        let body = r#"{"bitcoin":{"brl":350123.45}}"#;
        assert_eq!(extract_price(body, "bitcoin", "brl").unwrap(), 350123.45);
    }

    #[test]
    fn extracts_integer_price() {
        let body = r#"{"ethereum":{"usd":3000}}"#;
        assert_eq!(extract_price(body, "ethereum", "usd").unwrap(), 3000.0);
    }

    #[test]
    fn picks_requested_currency() {
        let body = r#"{"bitcoin":{"brl":350000,"usd":65000,"eur":60000}}"#;
        assert_eq!(extract_price(body, "bitcoin", "eur").unwrap(), 60000.0);
    }

    #[test]
    fn unknown_id_is_not_found() {
        // CoinGecko answers 200 with an empty object for unknown ids
        let err = extract_price("{}", "notacoin", "brl").unwrap_err();
        assert!(matches!(err, CoreError::NotFound(ref id) if id == "notacoin"));
        assert_eq!(err.failure_kind(), FailureKind::NotFound);
    }

    #[test]
    fn unknown_currency_is_not_found() {
        let body = r#"{"bitcoin":{"brl":350000}}"#;
        let err = extract_price(body, "bitcoin", "xyz").unwrap_err();
        assert!(matches!(err, CoreError::NotFound(ref what) if what == "bitcoin in XYZ"));
    }

    #[test]
    fn null_quote_is_not_found() {
        let body = r#"{"bitcoin":{"brl":null}}"#;
        let err = extract_price(body, "bitcoin", "brl").unwrap_err();
        assert!(matches!(err, CoreError::NotFound(_)));
    }

    #[test]
    fn malformed_body_is_api_error() {
        let err = extract_price("<html>rate limited</html>", "bitcoin", "brl").unwrap_err();
        assert!(matches!(err, CoreError::Api { ref provider, .. } if provider == "CoinGecko"));
        assert_eq!(err.failure_kind(), FailureKind::Other);
    }

    #[test]
    fn unexpected_shape_is_api_error() {
        let err = extract_price(r#"{"bitcoin":"350000"}"#, "bitcoin", "brl").unwrap_err();
        assert!(matches!(err, CoreError::Api { .. }));
    }
}

// ═══════════════════════════════════════════════════════════════════
// Error classification (no external network)
// ═══════════════════════════════════════════════════════════════════

mod classification {
    use super::*;

    #[tokio::test]
    async fn invalid_base_url_is_request_error() {
        let provider = CoinGeckoProvider::new(&settings_with_url("not a url"));
        let err = provider.get_price("bitcoin").await.unwrap_err();
        assert!(matches!(err, CoreError::RequestError(_)), "{err:?}");
        assert_eq!(err.failure_kind(), FailureKind::Request);
    }

    #[tokio::test]
    async fn closed_port_is_network_error() {
        // Port 1 on loopback is never listening in the test environment
        let provider = CoinGeckoProvider::new(&settings_with_url("http://127.0.0.1:1/api/v3"));
        let err = provider.get_price("bitcoin").await.unwrap_err();
        assert!(matches!(err, CoreError::Network(_)), "{err:?}");
        assert_eq!(err.failure_kind(), FailureKind::Network);
    }

    #[tokio::test]
    async fn network_error_message_hides_query() {
        let provider = CoinGeckoProvider::new(&settings_with_url("http://127.0.0.1:1/api/v3"));
        let err = provider
            .get_exchange_rate("bitcoin", "usd")
            .await
            .unwrap_err();
        let msg = err.to_string();
        assert!(!msg.contains("vs_currencies"), "{msg}");
    }
}
