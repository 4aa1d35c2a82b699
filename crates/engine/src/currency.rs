use serde::{Deserialize, Serialize};

use crate::EngineError;

/// Currency tag carried by card transactions and loans.
///
/// The engine never converts between currencies; the code is an opaque tag on
/// the row. Codes are stored and serialized in their lowercase wire form
/// (`"idr"`, `"sgd"`, ...), matching what existing clients send. Parsing is
/// case-insensitive.
///
/// `Sgd` is the default: loans opened without an explicit currency are booked
/// in SGD.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    Idr,
    #[default]
    Sgd,
    Thb,
    Vnd,
}

impl Currency {
    /// Canonical wire code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Currency::Idr => "idr",
            Currency::Sgd => "sgd",
            Currency::Thb => "thb",
            Currency::Vnd => "vnd",
        }
    }
}

impl core::fmt::Display for Currency {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.code())
    }
}

impl TryFrom<&str> for Currency {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "idr" => Ok(Currency::Idr),
            "sgd" => Ok(Currency::Sgd),
            "thb" => Ok(Currency::Thb),
            "vnd" => Ok(Currency::Vnd),
            other => Err(EngineError::CurrencyMismatch(format!(
                "unsupported currency: {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(Currency::try_from("idr").unwrap(), Currency::Idr);
        assert_eq!(Currency::try_from("IDR").unwrap(), Currency::Idr);
        assert_eq!(Currency::try_from(" vnd ").unwrap(), Currency::Vnd);
    }

    #[test]
    fn codes_round_trip() {
        for currency in [Currency::Idr, Currency::Sgd, Currency::Thb, Currency::Vnd] {
            assert_eq!(Currency::try_from(currency.code()).unwrap(), currency);
        }
    }

    #[test]
    fn reject_unknown_currency() {
        assert!(matches!(
            Currency::try_from("usd"),
            Err(EngineError::CurrencyMismatch(_))
        ));
    }
}
