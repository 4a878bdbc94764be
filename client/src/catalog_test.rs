use super::*;

#[test]
fn for_path_finds_the_hl7v2_tool() {
    let tool = for_path(HL7V2_TO_FHIR_PATH).expect("tool should exist");
    assert_eq!(tool.label, HL7V2_TO_FHIR_LABEL);
    assert!(!tool.samples.is_empty());
}

#[test]
fn for_path_returns_none_for_unknown_route() {
    assert!(for_path("/unknown-tool").is_none());
    assert!(for_path("/").is_none());
}

#[test]
fn samples_are_named_and_non_empty() {
    let tool = for_path(HL7V2_TO_FHIR_PATH).expect("tool should exist");
    for sample in tool.samples {
        assert!(!sample.name.is_empty());
        assert!(sample.data.starts_with("MSH|"), "sample {} should be an HL7v2 message", sample.name);
    }
}

#[test]
fn sample_names_are_unique() {
    let tool = for_path(HL7V2_TO_FHIR_PATH).expect("tool should exist");
    for (i, a) in tool.samples.iter().enumerate() {
        for b in &tool.samples[i + 1..] {
            assert_ne!(a.name, b.name);
        }
    }
}

#[test]
fn to_sample_copies_name_and_data() {
    let tool = for_path(HL7V2_TO_FHIR_PATH).expect("tool should exist");
    let staged = tool.samples[0].to_sample();
    assert_eq!(staged.name, tool.samples[0].name);
    assert_eq!(staged.data, tool.samples[0].data);
}
