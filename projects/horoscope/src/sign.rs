use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The closed set of zodiac sign identifiers accepted by the service.
///
/// The canonical form is lowercase; `FromStr` lowercases its input before
/// matching, so `"LEO"` and `"leo"` parse to the same variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl Sign {
    pub const ALL: [Sign; 12] = [
        Sign::Aries,
        Sign::Taurus,
        Sign::Gemini,
        Sign::Cancer,
        Sign::Leo,
        Sign::Virgo,
        Sign::Libra,
        Sign::Scorpio,
        Sign::Sagittarius,
        Sign::Capricorn,
        Sign::Aquarius,
        Sign::Pisces,
    ];

    /// Canonical lowercase identifier, as stored in the database.
    pub fn as_str(self) -> &'static str {
        match self {
            Sign::Aries => "aries",
            Sign::Taurus => "taurus",
            Sign::Gemini => "gemini",
            Sign::Cancer => "cancer",
            Sign::Leo => "leo",
            Sign::Virgo => "virgo",
            Sign::Libra => "libra",
            Sign::Scorpio => "scorpio",
            Sign::Sagittarius => "sagittarius",
            Sign::Capricorn => "capricorn",
            Sign::Aquarius => "aquarius",
            Sign::Pisces => "pisces",
        }
    }

    /// Comma-separated list of every accepted identifier, for error messages.
    pub fn allowed_values() -> String {
        Sign::ALL
            .iter()
            .map(|sign| sign.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("Invalid zodiac sign. Must be one of: {allowed}")]
pub struct ParseSignError {
    pub allowed: String,
}

impl FromStr for Sign {
    type Err = ParseSignError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.to_lowercase().as_str() {
            "aries" => Ok(Sign::Aries),
            "taurus" => Ok(Sign::Taurus),
            "gemini" => Ok(Sign::Gemini),
            "cancer" => Ok(Sign::Cancer),
            "leo" => Ok(Sign::Leo),
            "virgo" => Ok(Sign::Virgo),
            "libra" => Ok(Sign::Libra),
            "scorpio" => Ok(Sign::Scorpio),
            "sagittarius" => Ok(Sign::Sagittarius),
            "capricorn" => Ok(Sign::Capricorn),
            "aquarius" => Ok(Sign::Aquarius),
            "pisces" => Ok(Sign::Pisces),
            _ => Err(ParseSignError {
                allowed: Sign::allowed_values(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_canonical_form() {
        for sign in Sign::ALL {
            assert_eq!(sign.as_str().parse::<Sign>().unwrap(), sign);
        }
    }

    #[test]
    fn parsing_is_case_insensitive() {
        assert_eq!("LEO".parse::<Sign>().unwrap(), Sign::Leo);
        assert_eq!("Sagittarius".parse::<Sign>().unwrap(), Sign::Sagittarius);
        assert_eq!("aQuArIuS".parse::<Sign>().unwrap(), Sign::Aquarius);
    }

    #[test]
    fn rejects_unknown_sign_and_lists_allowed_values() {
        let err = "ophiuchus".parse::<Sign>().unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("Invalid zodiac sign"));
        for sign in Sign::ALL {
            assert!(message.contains(sign.as_str()));
        }
    }
}
