use assert_matches::assert_matches;
use pretty_assertions::assert_eq;

use super::*;

#[test]
fn defaults_match_documented_bounds() {
    let parameters = ParametersConfig::default();

    assert_eq!(parameters.model, DEFAULT_MODEL);
    assert_eq!(parameters.temperature, 0.7);
    assert_eq!(parameters.max_tokens, 4096);
    assert_eq!(parameters.top_p, 0.7);
    assert!(!parameters.extended_thinking);
}

#[test]
fn set_parses_each_parameter() {
    let mut parameters = ParametersConfig::default();

    parameters.set("temperature", "0.2").unwrap();
    parameters.set("top_p", "0.9").unwrap();
    parameters.set("max_tokens", "512").unwrap();
    parameters.set("extended_thinking", "true").unwrap();
    parameters.set("model", "claude-sonnet-4-5").unwrap();

    assert_eq!(parameters.temperature, 0.2);
    assert_eq!(parameters.top_p, 0.9);
    assert_eq!(parameters.max_tokens, 512);
    assert!(parameters.extended_thinking);
    assert_eq!(parameters.model, "claude-sonnet-4-5");
}

#[test]
fn set_clamps_out_of_range_values() {
    let mut parameters = ParametersConfig::default();

    parameters.set("temperature", "1.5").unwrap();
    assert_eq!(parameters.temperature, 1.0);

    parameters.set("top_p", "-0.3").unwrap();
    assert_eq!(parameters.top_p, 0.0);

    parameters.set("max_tokens", "0").unwrap();
    assert_eq!(parameters.max_tokens, 1);

    parameters.set("max_tokens", "100000").unwrap();
    assert_eq!(parameters.max_tokens, 4096);
}

#[test]
fn set_rejects_unparseable_values() {
    let mut parameters = ParametersConfig::default();

    assert_matches!(
        parameters.set("temperature", "warm"),
        Err(Error::InvalidValue { .. })
    );
    assert_matches!(
        parameters.set("extended_thinking", "yes please"),
        Err(Error::InvalidValue { .. })
    );
}

#[test]
fn set_rejects_non_finite_floats() {
    let mut parameters = ParametersConfig::default();

    assert_matches!(
        parameters.set("temperature", "NaN"),
        Err(Error::InvalidValue { .. })
    );
    assert_matches!(
        parameters.set("top_p", "inf"),
        Err(Error::InvalidValue { .. })
    );

    assert_eq!(parameters.temperature, 0.7);
    assert_eq!(parameters.top_p, 0.7);
}

#[test]
fn set_rejects_unknown_keys() {
    let mut parameters = ParametersConfig::default();

    assert_matches!(parameters.set("top_k", "40"), Err(Error::UnknownKey(_)));
}
