use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use storefront_core::Money;

use crate::r#trait::{CurrencyGateway, GatewayError, GatewayResult};

/// Units of each currency per 1 EUR, scaled to nanos.
const EUR_RATES: &[(&str, i128)] = &[
    ("EUR", 1_000_000_000),
    ("USD", 1_130_500_000),
    ("JPY", 126_400_000_000),
    ("BGN", 1_955_800_000),
    ("CZK", 25_592_000_000),
    ("DKK", 7_460_900_000),
    ("GBP", 859_700_000),
    ("HUF", 315_510_000_000),
    ("PLN", 4_299_600_000),
    ("RON", 4_746_300_000),
    ("SEK", 10_537_500_000),
    ("CHF", 1_136_000_000),
    ("ISK", 136_800_000_000),
    ("NOK", 9_804_000_000),
    ("HRK", 7_421_000_000),
    ("RUB", 74_420_800_000),
    ("TRY", 6_124_700_000),
    ("AUD", 1_607_200_000),
    ("BRL", 4_268_200_000),
    ("CAD", 1_512_800_000),
    ("CNY", 7_585_700_000),
    ("HKD", 8_874_300_000),
    ("IDR", 15_999_400_000_000),
    ("ILS", 4_087_500_000),
    ("INR", 79_432_000_000),
    ("KRW", 1_275_050_000_000),
    ("MXN", 21_799_900_000),
    ("MYR", 4_628_900_000),
    ("NZD", 1_667_900_000),
    ("PHP", 59_083_000_000),
    ("SGD", 1_534_900_000),
    ("THB", 36_012_000_000),
    ("ZAR", 16_058_300_000),
];

/// In-memory currency converter over a fixed rate table.
///
/// Conversion is integer arithmetic on nanos: `amount * rate(to) / rate(from)`,
/// truncated toward zero.
#[derive(Debug)]
pub struct InMemoryCurrency {
    rates: Vec<(String, i128)>,
    conversions: AtomicUsize,
}

impl Default for InMemoryCurrency {
    fn default() -> Self {
        Self::with_rates(EUR_RATES.iter().copied())
    }
}

impl InMemoryCurrency {
    pub fn new() -> Self {
        Self::default()
    }

    /// Custom table of `(code, units per reference unit in nanos)`, listed in
    /// the order `supported_currencies` reports them.
    pub fn with_rates<'a>(rates: impl IntoIterator<Item = (&'a str, i128)>) -> Self {
        Self {
            rates: rates
                .into_iter()
                .map(|(code, rate)| (code.to_string(), rate))
                .collect(),
            conversions: AtomicUsize::new(0),
        }
    }

    /// Number of `convert` calls served so far.
    pub fn conversions(&self) -> usize {
        self.conversions.load(Ordering::SeqCst)
    }

    fn rate(&self, code: &str) -> GatewayResult<i128> {
        self.rates
            .iter()
            .find(|(c, _)| c == code)
            .map(|(_, rate)| *rate)
            .filter(|rate| *rate > 0)
            .ok_or_else(|| GatewayError::invalid_argument(format!("unsupported currency: {code:?}")))
    }
}

#[async_trait]
impl CurrencyGateway for InMemoryCurrency {
    async fn convert(&self, from: &Money, to_code: &str) -> GatewayResult<Money> {
        self.conversions.fetch_add(1, Ordering::SeqCst);

        let from_rate = self.rate(&from.currency_code)?;
        let to_rate = self.rate(to_code)?;
        from.validate()?;

        let converted = from
            .total_nanos()
            .checked_mul(to_rate)
            .map(|scaled| scaled / from_rate)
            .ok_or_else(|| GatewayError::invalid_argument("amount too large to convert"))?;
        tracing::trace!(
            from = %from,
            to = to_code,
            nanos = %converted,
            "converted amount"
        );
        Ok(Money::from_total_nanos(to_code, converted)?)
    }

    async fn supported_currencies(&self) -> GatewayResult<Vec<String>> {
        Ok(self.rates.iter().map(|(code, _)| code.clone()).collect())
    }
}
