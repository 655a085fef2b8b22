use bulk_image_conversion::profile::{ConversionProfile, ConversionStep, PadType};

use std::fs;
use tempfile::tempdir;

#[test]
fn pad_type_widths() {
    assert_eq!(PadType::One.apply(7), "7");
    assert_eq!(PadType::Ten.apply(7), "07");
    assert_eq!(PadType::Hundred.apply(7), "007");
    assert_eq!(PadType::Thousand.apply(7), "0007");

    // Indices wider than the pad are rendered in full.
    assert_eq!(PadType::Hundred.apply(123), "123");
    assert_eq!(PadType::Hundred.apply(1234), "1234");
}

#[test]
fn derived_names_match_the_template_for_index_7() {
    let adjust = ConversionProfile::adjust_convert();
    let stem = adjust.stem_for_index(7);
    assert_eq!(stem, "image007");
    assert_eq!(adjust.gate_name(&stem), "image007.jpg");
    assert_eq!(adjust.steps[0].output_name(&stem), "image007_adjusted.jpg");
    assert_eq!(adjust.steps[1].input_name(&stem), "image007_adjusted.jpg");
    assert_eq!(adjust.steps[1].output_name(&stem), "image007.pdf");

    let eps = ConversionProfile::convert_eps();
    assert_eq!(eps.steps[0].output_name(&stem), "image007.eps");

    let png = ConversionProfile::convert_png();
    assert_eq!(png.gate_name(&stem), "image007_adjusted.jpg");
    assert_eq!(png.steps[0].output_name(&stem), "image007_adjusted.png");
}

#[test]
fn built_in_profiles_validate() {
    assert!(ConversionProfile::adjust_convert().validate());
    assert!(ConversionProfile::convert_eps().validate());
    assert!(ConversionProfile::convert_png().validate());
}

#[test]
fn built_in_profiles_start_from_index_1() {
    assert_eq!(ConversionProfile::adjust_convert().start_from, 1);
    assert_eq!(ConversionProfile::convert_eps().start_from, 1);
    assert_eq!(ConversionProfile::convert_png().start_from, 1);
}

#[test]
fn profile_with_no_steps_fails_validation() {
    let profile = ConversionProfile {
        name: "empty".to_string(),
        base_name: "image".to_string(),
        start_from: 1,
        index_pad_type: PadType::Hundred,
        steps: Vec::new(),
    };

    assert!(!profile.validate());
}

#[test]
fn profile_with_zero_start_index_fails_validation() {
    let profile = ConversionProfile {
        name: "zero".to_string(),
        base_name: "image".to_string(),
        start_from: 0,
        index_pad_type: PadType::Hundred,
        steps: vec![ConversionStep::new("./trace.sh", ".jpg", ".eps")],
    };

    assert!(!profile.validate());
}

#[test]
fn profile_json_applies_defaults() {
    let json = r#"{
        "name": "frames",
        "base_name": "frame",
        "steps": [
            { "tool": "./shrink.sh", "input_suffix": ".jpg", "output_suffix": ".png" }
        ]
    }"#;

    let profile: ConversionProfile = serde_json::from_str(json).unwrap();
    assert_eq!(profile.start_from, 1);
    assert_eq!(profile.stem_for_index(1), "frame001");
    assert!(profile.validate());
}

#[test]
fn resolve_built_in_profile_names() {
    assert_eq!(
        ConversionProfile::resolve("adjust-convert").unwrap().name,
        "adjust-convert"
    );
    assert_eq!(
        ConversionProfile::resolve("convert-eps").unwrap().name,
        "convert-eps"
    );
    assert_eq!(
        ConversionProfile::resolve("convert-png").unwrap().name,
        "convert-png"
    );
}

#[test]
fn resolve_unknown_profile_returns_none() {
    assert!(ConversionProfile::resolve("no-such-profile").is_none());
}

#[test]
fn resolve_profile_from_json_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("profile.json");
    fs::write(
        &path,
        r#"{
            "name": "frames",
            "base_name": "frame",
            "start_from": 3,
            "index_pad_type": "Thousand",
            "steps": [
                { "tool": "./shrink.sh", "input_suffix": ".jpg", "output_suffix": ".png" }
            ]
        }"#,
    )
    .unwrap();

    let profile = ConversionProfile::resolve(path.to_str().unwrap()).unwrap();
    assert_eq!(profile.name, "frames");
    assert_eq!(profile.start_from, 3);
    assert_eq!(profile.stem_for_index(3), "frame0003");
}

#[test]
fn resolve_malformed_profile_file_returns_none() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("profile.json");
    fs::write(&path, "{ not json").unwrap();

    assert!(ConversionProfile::resolve(path.to_str().unwrap()).is_none());
}
