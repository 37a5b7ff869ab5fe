//! Static vocabulary of semantic type codes.
//!
//! Read-only mapping from lowercase four-letter semantic type
//! abbreviations to their descriptive names. Inert
//! configuration data for callers that want human-readable class names
//! (for example as `MatrixDisplayConfig::class_names`); the ranking
//! metrics themselves never consult it.

/// Semantic type abbreviations paired with their descriptive names,
/// sorted by abbreviation for binary-search lookup.
const SEMANTIC_TYPES: &[(&str, &str)] = &[
    ("aapp", "Amino Acid, Peptide, or Protein"),
    ("acab", "Acquired Abnormality"),
    ("acty", "Activity"),
    ("aggp", "Age Group"),
    ("amas", "Amino Acid Sequence"),
    ("amph", "Amphibian"),
    ("anab", "Anatomical Abnormality"),
    ("anim", "Animal"),
    ("anst", "Anatomical Structure"),
    ("antb", "Antibiotic"),
    ("arch", "Archaeon"),
    ("bacs", "Biologically Active Substance"),
    ("bact", "Bacterium"),
    ("bdsu", "Body Substance"),
    ("bdsy", "Body System"),
    ("bhvr", "Behavior"),
    ("biof", "Biologic Function"),
    ("bird", "Bird"),
    ("blor", "Body Location or Region"),
    ("bmod", "Biomedical Occupation or Discipline"),
    ("bodm", "Biomedical or Dental Material"),
    ("bpoc", "Body Part, Organ, or Organ Component"),
    ("bsoj", "Body Space or Junction"),
    ("celc", "Cell Component"),
    ("celf", "Cell Function"),
    ("cell", "Cell"),
    ("cgab", "Congenital Abnormality"),
    ("chem", "Chemical"),
    ("chvf", "Chemical Viewed Functionally"),
    ("chvs", "Chemical Viewed Structurally"),
    ("clas", "Classification"),
    ("clna", "Clinical Attribute"),
    ("clnd", "Clinical Drug"),
    ("cnce", "Conceptual Entity"),
    ("comd", "Cell or Molecular Dysfunction"),
    ("crbs", "Carbohydrate Sequence"),
    ("diap", "Diagnostic Procedure"),
    ("dora", "Daily or Recreational Activity"),
    ("drdd", "Drug Delivery Device"),
    ("dsyn", "Disease or Syndrome"),
    ("edac", "Educational Activity"),
    ("eehu", "Environmental Effect of Humans"),
    ("elii", "Element, Ion, or Isotope"),
    ("emod", "Experimental Model of Disease"),
    ("emst", "Embryonic Structure"),
    ("enty", "Entity"),
    ("enzy", "Enzyme"),
    ("euka", "Eukaryote"),
    ("evnt", "Event"),
    ("famg", "Family Group"),
    ("ffas", "Fully Formed Anatomical Structure"),
    ("fish", "Fish"),
    ("fndg", "Finding"),
    ("fngs", "Fungus"),
    ("food", "Food"),
    ("ftcn", "Functional Concept"),
    ("genf", "Genetic Function"),
    ("geoa", "Geographic Area"),
    ("gngm", "Gene or Genome"),
    ("gora", "Governmental or Regulatory Activity"),
    ("grpa", "Group Attribute"),
    ("grup", "Group"),
    ("hcpp", "Human-caused Phenomenon or Process"),
    ("hcro", "Health Care Related Organization"),
    ("hlca", "Health Care Activity"),
    ("hops", "Hazardous or Poisonous Substance"),
    ("horm", "Hormone"),
    ("humn", "Human"),
    ("idcn", "Idea or Concept"),
    ("imft", "Immunologic Factor"),
    ("inbe", "Individual Behavior"),
    ("inch", "Inorganic Chemical"),
    ("inpo", "Injury or Poisoning"),
    ("inpr", "Intellectual Product"),
    ("irda", "Indicator, Reagent, or Diagnostic Aid"),
    ("lang", "Language"),
    ("lbpr", "Laboratory Procedure"),
    ("lbtr", "Laboratory or Test Result"),
    ("mamm", "Mammal"),
    ("mbrt", "Molecular Biology Research Technique"),
    ("mcha", "Machine Activity"),
    ("medd", "Medical Device"),
    ("menp", "Mental Process"),
    ("mnob", "Manufactured Object"),
    ("mobd", "Mental or Behavioral Dysfunction"),
    ("moft", "Molecular Function"),
    ("mosq", "Molecular Sequence"),
    ("neop", "Neoplastic Process"),
    ("nnon", "Nucleic Acid, Nucleoside, or Nucleotide"),
    ("npop", "Natural Phenomenon or Process"),
    ("nusq", "Nucleotide Sequence"),
    ("ocac", "Occupational Activity"),
    ("ocdi", "Occupation or Discipline"),
    ("orch", "Organic Chemical"),
    ("orga", "Organism Attribute"),
    ("orgf", "Organism Function"),
    ("orgm", "Organism"),
    ("orgt", "Organization"),
    ("ortf", "Organ or Tissue Function"),
    ("patf", "Pathologic Function"),
    ("phob", "Physical Object"),
    ("phpr", "Phenomenon or Process"),
    ("phsf", "Physiologic Function"),
    ("phsu", "Pharmacologic Substance"),
    ("plnt", "Plant"),
    ("podg", "Patient or Disabled Group"),
    ("popg", "Population Group"),
    ("prog", "Professional or Occupational Group"),
    ("pros", "Professional Society"),
    ("qlco", "Qualitative Concept"),
    ("qnco", "Quantitative Concept"),
    ("rcpt", "Receptor"),
    ("rept", "Reptile"),
    ("resa", "Research Activity"),
    ("resd", "Research Device"),
    ("rnlw", "Regulation or Law"),
    ("sbst", "Substance"),
    ("shro", "Self-help or Relief Organization"),
    ("socb", "Social Behavior"),
    ("sosy", "Sign or Symptom"),
    ("spco", "Spatial Concept"),
    ("tisu", "Tissue"),
    ("tmco", "Temporal Concept"),
    ("topp", "Therapeutic or Preventive Procedure"),
    ("virs", "Virus"),
    ("vita", "Vitamin"),
    ("vtbt", "Vertebrate"),
];

/// Descriptive name for a semantic type code, if known.
///
/// # Examples
///
/// ```
/// use rankeval_rust::vocab::full_name;
///
/// assert_eq!(full_name("aapp"), Some("Amino Acid, Peptide, or Protein"));
/// assert_eq!(full_name("none"), None);
/// ```
pub fn full_name(code: &str) -> Option<&'static str> {
    SEMANTIC_TYPES
        .binary_search_by_key(&code, |&(abbreviation, _)| abbreviation)
        .ok()
        .map(|index| SEMANTIC_TYPES[index].1)
}

/// All known semantic type codes, in sorted order.
pub fn codes() -> impl Iterator<Item = &'static str> {
    SEMANTIC_TYPES.iter().map(|&(abbreviation, _)| abbreviation)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_codes() {
        assert_eq!(full_name("aapp"), Some("Amino Acid, Peptide, or Protein"));
        assert_eq!(full_name("dsyn"), Some("Disease or Syndrome"));
        assert_eq!(full_name("vtbt"), Some("Vertebrate"));
    }

    #[test]
    fn test_lookup_unknown_code() {
        assert_eq!(full_name("zzzz"), None);
        assert_eq!(full_name(""), None);
        assert_eq!(full_name("AAPP"), None);
    }

    #[test]
    fn test_table_is_sorted_and_unique() {
        // Binary-search lookup relies on strict ordering
        for window in SEMANTIC_TYPES.windows(2) {
            assert!(window[0].0 < window[1].0);
        }
    }

    #[test]
    fn test_codes_iterator() {
        let codes: Vec<&str> = codes().collect();
        assert_eq!(codes.len(), SEMANTIC_TYPES.len());
        assert_eq!(codes.first(), Some(&"aapp"));
        assert!(codes.iter().all(|code| code.len() == 4));
    }
}
