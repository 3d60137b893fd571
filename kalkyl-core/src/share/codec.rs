use tracing::debug;
use url::Url;

use super::{ShareError, ShareParams};
use crate::registry::Registry;

/// A calculator's input set, encodable as share-link query parameters.
///
/// `write_params` emits the calculator's short keys in URL order;
/// `read_params` restores every field, falling back to the calculator's
/// default for each key that is missing or malformed.
pub trait ShareState: Default + Sized {
    /// Registry id of the calculator the state belongs to.
    const CALCULATOR_ID: &'static str;

    /// Key whose presence marks a shared link rather than a fresh visit.
    const MARKER: &'static str;

    fn write_params(
        &self,
        params: &mut ShareParams,
    );

    fn read_params(params: &ShareParams) -> Self;
}

/// A decoded page state plus whether it came from a shared link. Pages
/// run their calculation once when `shared` is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Restored<T> {
    pub state: T,
    pub shared: bool,
}

/// Query string (without `?`) for `state`.
pub fn encode<T: ShareState>(state: &T) -> String {
    let mut params = ShareParams::new();
    state.write_params(&mut params);
    params.to_query()
}

/// Restores state from a query string, or `None` when the marker key is
/// absent.
pub fn decode<T: ShareState>(query: &str) -> Option<T> {
    let params = ShareParams::from_query(query);
    if !params.contains(T::MARKER) {
        return None;
    }
    debug!(calculator = T::CALCULATOR_ID, keys = params.len(), "restoring shared state");
    Some(T::read_params(&params))
}

/// Restores state from a query string, defaulting on a fresh visit.
pub fn decode_or_default<T: ShareState>(query: &str) -> Restored<T> {
    match decode(query) {
        Some(state) => Restored {
            state,
            shared: true,
        },
        None => Restored {
            state: T::default(),
            shared: false,
        },
    }
}

/// Restores state from a full URL's query.
pub fn decode_url<T: ShareState>(url: &Url) -> Option<T> {
    decode(url.query().unwrap_or_default())
}

/// Absolute share link: `base` joined with the calculator's route, with
/// the encoded state as query.
///
/// # Errors
///
/// [`ShareError::UnknownCalculator`] when the registry has no entry for
/// `T::CALCULATOR_ID`, [`ShareError::InvalidUrl`] when the route cannot
/// be joined onto `base`.
pub fn share_url<T: ShareState>(
    base: &Url,
    registry: &Registry,
    state: &T,
) -> Result<Url, ShareError> {
    let calculator = registry
        .get(T::CALCULATOR_ID)
        .ok_or_else(|| ShareError::UnknownCalculator(T::CALCULATOR_ID.to_string()))?;

    let mut url = base.join(calculator.path)?;
    url.set_query(Some(&encode(state)));
    Ok(url)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::models::{CalculatorInfo, Category};

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Tip {
        bill: u32,
        people: u32,
        round_up: bool,
    }

    impl Default for Tip {
        fn default() -> Self {
            Self {
                bill: 500,
                people: 2,
                round_up: false,
            }
        }
    }

    impl ShareState for Tip {
        const CALCULATOR_ID: &'static str = "tip";
        const MARKER: &'static str = "bill";

        fn write_params(
            &self,
            params: &mut ShareParams,
        ) {
            params
                .push("bill", self.bill)
                .push("people", self.people)
                .push("round", self.round_up);
        }

        fn read_params(params: &ShareParams) -> Self {
            let defaults = Self::default();
            Self {
                bill: params.get_or("bill", defaults.bill),
                people: params.get_or("people", defaults.people),
                round_up: params.bool_or("round", defaults.round_up),
            }
        }
    }

    const TEST_CALCULATORS: &[CalculatorInfo] =
        &[CalculatorInfo::new("tip", "Dricks", "", "/dricksraknare", Category::Vardag)];

    fn tip() -> Tip {
        Tip {
            bill: 1240,
            people: 4,
            round_up: true,
        }
    }

    #[test]
    fn encode_uses_short_keys_in_order() {
        assert_eq!(encode(&tip()), "bill=1240&people=4&round=true");
    }

    #[test]
    fn decode_without_marker_is_fresh_visit() {
        assert_eq!(decode::<Tip>(""), None);
        assert_eq!(decode::<Tip>("people=3"), None);
    }

    #[test]
    fn decode_round_trips() {
        assert_eq!(decode::<Tip>(&encode(&tip())), Some(tip()));
    }

    #[test]
    fn decode_or_default_reports_shared_flag() {
        let fresh = decode_or_default::<Tip>("?utm_source=nyhetsbrev");
        let shared = decode_or_default::<Tip>("?bill=100");

        assert_eq!(fresh, Restored {
            state: Tip::default(),
            shared: false,
        });
        assert!(shared.shared);
        assert_eq!(shared.state.bill, 100);
        assert_eq!(shared.state.people, 2);
    }

    #[test]
    fn share_url_joins_route_and_query() {
        let base = Url::parse("https://kalkyl.example.se").unwrap();

        let url = share_url(&base, &Registry::new(TEST_CALCULATORS), &tip()).unwrap();

        assert_eq!(
            url.as_str(),
            "https://kalkyl.example.se/dricksraknare?bill=1240&people=4&round=true"
        );
        assert_eq!(decode_url::<Tip>(&url), Some(tip()));
    }

    #[test]
    fn share_url_replaces_existing_path() {
        let base = Url::parse("https://kalkyl.example.se/blogg/inlagg?x=1").unwrap();

        let url = share_url(&base, &Registry::new(TEST_CALCULATORS), &tip()).unwrap();

        assert_eq!(url.path(), "/dricksraknare");
        assert_eq!(url.query(), Some("bill=1240&people=4&round=true"));
    }

    #[test]
    fn share_url_requires_registry_entry() {
        let base = Url::parse("https://kalkyl.example.se").unwrap();

        assert_eq!(
            share_url(&base, &Registry::new(&[]), &tip()),
            Err(ShareError::UnknownCalculator("tip".to_string()))
        );
    }
}
