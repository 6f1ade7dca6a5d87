use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        LissajousError::invalid("x")
            .to_string()
            .contains("invalid parameter:")
    );
    assert!(
        LissajousError::render("x")
            .to_string()
            .contains("render error:")
    );
    assert!(
        LissajousError::encode("x")
            .to_string()
            .contains("encode error:")
    );
    assert!(
        LissajousError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = LissajousError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn json_errors_map_to_serde_variant() {
    let err: LissajousError = serde_json::from_str::<u32>("nope").unwrap_err().into();
    assert!(matches!(err, LissajousError::Serde(_)));
}
