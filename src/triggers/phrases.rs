// WHY: Curated trigger phrases per category, kept apart from the matching logic
// All phrases are lowercase; matching lowercases the sentence instead

/// Threats to life or function stated with high intensity
pub const THREAT_INTENSITY: &[&str] = &[
    "dangerous", "severe", "fatal", "high risk",
    // U+2011 non-breaking hyphen, kept exactly as curated
    "life\u{2011}threatening",
    "death", "stroke", "brain death", "paralysis", "heart attack",
    "anaphylaxis", "cardiac arrest", "respiratory arrest",
    "rare complications", "serious complications",
];

/// Hedging that leaves the outcome open
pub const UNCERTAINTY: &[&str] = &[
    "unknown", "cannot guarantee", "may not work", "unpredictable",
    "possible", "it is still possible", "rare but possible", "rarely",
    "if it does happen",
];

/// Concrete, bodily side-effect vocabulary
pub const VIVID_SIDE_EFFECTS: &[&str] = &[
    "nausea", "vomiting", "diarrhoea", "diarrhea", "constipation",
    "abdominal pain", "pain", "sting", "burn", "headache", "itching",
    "itchy", "rash", "dizziness", "swelling", "bleeding", "infection",
    "extravasation", "allergic reaction", "grogginess", "dry mouth",
    "urinary retention", "confusion", "shortness of breath",
];

/// Commands and prohibitions addressed at the patient
pub const DIRECTIVE_HARSHNESS: &[&str] = &[
    "must not", "do not", "stop taking", "forbidden", "you must",
    "you should", "please", "you will be asked", "not to leave",
    "must", "should", "you should not", "you will need",
];
