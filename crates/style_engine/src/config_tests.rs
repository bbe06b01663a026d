use super::*;

#[test]
fn default_config_uses_documented_weights() {
    let config = EngineConfig::default();
    assert_eq!(config.weights.material, 1.0);
    assert_eq!(config.weights.positional, 0.1);
    assert_eq!(config.weights.mobility, 0.1);
    assert_eq!(config.weights.king_safety, 0.2);
    assert_eq!(config.weights.pawn_structure, 0.1);
    assert_eq!(config.era, CulturalEra::Modern);
}

#[test]
fn partial_toml_falls_back_to_defaults() {
    let config = EngineConfig::from_toml(
        r#"
era = "medieval"

[weights]
material = 2.0
"#,
    )
    .unwrap();
    assert_eq!(config.era, CulturalEra::Medieval);
    assert_eq!(config.weights.material, 2.0);
    assert_eq!(config.weights.mobility, 0.1);
}

#[test]
fn empty_toml_is_the_default_profile() {
    assert_eq!(EngineConfig::from_toml("").unwrap(), EngineConfig::default());
}

#[test]
fn malformed_toml_reports_a_parse_failure() {
    let err = EngineConfig::from_toml("era = ").unwrap_err();
    assert!(err.contains("Failed to parse config"));
}

#[test]
fn toml_round_trip() {
    let config = EngineConfig {
        weights: EvalWeights {
            material: 1.5,
            ..EvalWeights::default()
        },
        era: CulturalEra::Ancient,
    };
    let text = toml::to_string_pretty(&config).unwrap();
    assert_eq!(EngineConfig::from_toml(&text).unwrap(), config);
}
