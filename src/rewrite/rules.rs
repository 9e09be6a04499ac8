// WHY: Replacement table for neutral rewrites
// Declaration order IS execution order; later rules see the output of earlier ones

/// Ordered `(match_phrase, replacement)` pairs; never reorder
pub const REPLACEMENT_RULES: &[(&str, &str)] = &[
    ("pain", "discomfort"),
    ("severe", "significant"),
    ("risk", "chance"),
    ("complications", "issues"),
    ("complication", "issue"),
    ("death", "very serious complications"),
    ("stroke", "serious medical condition"),
    ("heart attack", "serious cardiac condition"),
    ("vomiting", "feeling sick"),
    ("nausea", "feeling sick"),
    ("diarrhoea", "loose stools"),
    ("diarrhea", "loose stools"),
    ("constipation", "difficulty with bowel movements"),
    ("allergic reaction", "allergy"),
    ("anaphylaxis", "severe allergy"),
    ("cardiac arrest", "heart stopping"),
    ("respiratory arrest", "breathing stopping"),
    ("brain death", "loss of brain function"),
    ("paralysis", "loss of movement"),
    ("itchy", "irritated"),
    ("rash", "skin irritation"),
    ("bleeding", "bleeding (rare)"),
    ("swelling", "swelling (temporary)"),
    ("shortness of breath", "difficulty breathing"),
    ("must not", "should not"),
    ("do not", "please avoid"),
    ("stop taking", "please stop taking"),
    ("you must", "you should"),
    ("you will be asked", "we will ask you"),
    ("you will need", "you may need"),
];
