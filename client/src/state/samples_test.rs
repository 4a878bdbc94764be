use super::*;

fn adt_sample() -> Sample {
    Sample {
        name: "ADT-A01 Admit".to_owned(),
        data: "MSH|^~\\&|...".to_owned(),
    }
}

#[test]
fn slot_starts_empty() {
    let handoff = SampleHandoff::default();
    assert!(!handoff.pending_for("HL7V2 To FHIR"));
}

#[test]
fn publish_stages_for_matching_label_only() {
    let mut handoff = SampleHandoff::default();
    handoff.publish("HL7V2 To FHIR", adt_sample());
    assert!(handoff.pending_for("HL7V2 To FHIR"));
    assert!(!handoff.pending_for("FHIR Validator"));
}

#[test]
fn take_consumes_exactly_once() {
    let mut handoff = SampleHandoff::default();
    handoff.publish("HL7V2 To FHIR", adt_sample());

    let first = handoff.take("HL7V2 To FHIR");
    assert_eq!(first, Some(adt_sample()));

    // Second consumer (same or another screen) gets nothing.
    assert_eq!(handoff.take("HL7V2 To FHIR"), None);
    assert_eq!(handoff.take("FHIR Validator"), None);
}

#[test]
fn take_with_wrong_label_leaves_handoff_pending() {
    let mut handoff = SampleHandoff::default();
    handoff.publish("HL7V2 To FHIR", adt_sample());

    assert_eq!(handoff.take("FHIR Validator"), None);
    assert!(handoff.pending_for("HL7V2 To FHIR"));
}

#[test]
fn publish_replaces_pending_handoff() {
    let mut handoff = SampleHandoff::default();
    handoff.publish("HL7V2 To FHIR", adt_sample());

    let newer = Sample { name: "ORU-R01 Lab Result".to_owned(), data: "MSH|...".to_owned() };
    handoff.publish("HL7V2 To FHIR", newer.clone());

    assert_eq!(handoff.take("HL7V2 To FHIR"), Some(newer));
}

#[test]
fn publish_after_consume_stages_again() {
    let mut handoff = SampleHandoff::default();
    handoff.publish("HL7V2 To FHIR", adt_sample());
    let _ = handoff.take("HL7V2 To FHIR");

    handoff.publish("HL7V2 To FHIR", adt_sample());
    assert!(handoff.pending_for("HL7V2 To FHIR"));
}
