//! Static, route-keyed sample catalog.
//!
//! DESIGN
//! ======
//! Read-only configuration: each tool route maps to a display label and an
//! ordered list of named example payloads. The samples modal looks the
//! current route up here; routes without an entry simply have no samples.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use crate::state::samples::Sample;

/// Route path and context label of the HL7v2 → FHIR tool.
pub const HL7V2_TO_FHIR_PATH: &str = "/hl7v2-to-fhir";
pub const HL7V2_TO_FHIR_LABEL: &str = "HL7V2 To FHIR";

/// A named example payload in the static catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CatalogSample {
    pub name: &'static str,
    pub data: &'static str,
}

impl CatalogSample {
    /// Owned copy for staging into the hand-off channel.
    #[must_use]
    pub fn to_sample(self) -> Sample {
        Sample { name: self.name.to_owned(), data: self.data.to_owned() }
    }
}

/// Samples for one tool route.
#[derive(Clone, Copy, Debug)]
pub struct ToolSamples {
    pub path: &'static str,
    pub label: &'static str,
    pub samples: &'static [CatalogSample],
}

/// All tool routes with sample data, in navigation order.
pub const TOOLS: &[ToolSamples] = &[ToolSamples {
    path: HL7V2_TO_FHIR_PATH,
    label: HL7V2_TO_FHIR_LABEL,
    samples: HL7V2_SAMPLES,
}];

/// Look up the sample set for a route path.
#[must_use]
pub fn for_path(path: &str) -> Option<&'static ToolSamples> {
    TOOLS.iter().find(|tool| tool.path == path)
}

const HL7V2_SAMPLES: &[CatalogSample] = &[
    CatalogSample { name: "ADT-A01 Admit Patient", data: ADT_A01 },
    CatalogSample { name: "ADT-A04 Register Patient", data: ADT_A04 },
    CatalogSample { name: "ORU-R01 Lab Result", data: ORU_R01 },
];

const ADT_A01: &str = r#"MSH|^~\&|ADT1|GOOD HEALTH HOSPITAL|GHH LAB, INC.|GOOD HEALTH HOSPITAL|200708181126|SECURITY|ADT^A01^ADT_A01|MSG00001|P|2.4
EVN|A01|200708181123
PID|1||PATID1234^5^M11^ADT1^MR^GOOD HEALTH HOSPITAL~123456789^^^USSSA^SS||EVERYMAN^ADAM^A^III||19610615|M||C|2222 HOME STREET^^GREENSBORO^NC^27401-1020|GL|(555) 555-2004|(555)555-2004||S||PATID12345001^2^M10^ADT1^AN^A|444333333|987654^NC
NK1|1|NUCLEAR^NELDA^W|SPO^SPOUSE||||NK^NEXT OF KIN
PV1|1|I|2000^2012^01||||004777^ATTEND^AARON^A|||SUR||||ADM|A0"#;

const ADT_A04: &str = r#"MSH|^~\&|REGADT|MCM|IFENG||200301051530|SEC|ADT^A04^ADT_A01|000001|P|2.4
EVN|A04|200301051530
PID|||191919^^^GENHOS^MR~371-66-9256^^^USSSA^SS||MASSIE^JAMES^A||19560129|M|||171 ZOBERLEIN^^ISHPEMING^MI^49849^""^||(900)485-5344|(900)485-5344||S|C|10199925^^^GENHOS^AN|371-66-9256
NK1|1|MASSIE^ELLEN|SPO^SPOUSE||(900)485-5344
PV1|1|O|PRE||||002341^DOCTOR^DAVID^D|||MED||||7|A0"#;

const ORU_R01: &str = r#"MSH|^~\&|GHH LAB|ELAB-3|GHH OE|BLDG4|200202150930||ORU^R01|CNTRL-3456|P|2.4
PID|||555-44-4444||EVERYWOMAN^EVE^E^^^^L|JONES|19620320|F|||153 FERNWOOD DR.^^STATESVILLE^OH^35292||(206)3345232|(206)752-121||||AC555444444||67-A4335^OH^20030520
OBR|1|845439^GHH OE|1045813^GHH LAB|15545^GLUCOSE|||200202150730||||||||555-55-5555^PRIMARY^PATRICIA P^^^^MD^^||||||||F
OBX|1|SN|1554-5^GLUCOSE^POST 12H CFST:MCNC:PT:SER/PLAS:QN||^182|mg/dl|70_105|H|||F"#;
